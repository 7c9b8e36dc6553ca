//! Crop suitability calculator
//!
//! Scores a compiled-in table of crops against soil, rainfall and
//! temperature, and projects yields for a plot of land.

pub mod calculator;
pub mod catalog;
pub mod input;
pub mod models;

pub use calculator::{recommend, recommend_with, score, RecommendOptions};
pub use input::InputFormatError;
pub use models::{CropRecord, Recommendation, RecommendationInput};
