//! Data models for crops, requests and recommendations

use serde::Serialize;

/// Inclusive range of acceptable values for one climate axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClimateRange {
    pub min: f64,
    pub max: f64,
}

impl ClimateRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Distance to the nearest boundary, 0 when inside the range
    pub fn distance(&self, value: f64) -> f64 {
        if value < self.min {
            self.min - value
        } else if value > self.max {
            value - self.max
        } else {
            0.0
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CropRecord {
    pub id: &'static str,
    pub name: &'static str,
    pub soil_types: &'static [&'static str], // lowercase tokens
    pub rainfall_mm: ClimateRange,
    pub temperature_c: ClimateRange,
    pub yield_per_acre_kg: f64,
    pub season: &'static str,
    pub tip: &'static str,
}

impl CropRecord {
    /// Case-insensitive soil membership
    pub fn accepts_soil(&self, soil_type: &str) -> bool {
        let soil = soil_type.to_lowercase();
        self.soil_types.iter().any(|s| *s == soil)
    }
}

/// Conditions supplied for one recommendation request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationInput {
    pub soil_type: String,
    pub rainfall_mm: f64,
    pub temperature_c: f64,
    pub land_area_acres: f64,
}

/// Points earned on each scoring axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub soil: f64,
    pub rainfall: f64,
    pub temperature: f64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        self.soil + self.rainfall + self.temperature
    }
}

/// One qualifying crop for a request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub crop_id: &'static str,
    pub name: &'static str,
    pub score: f64,
    pub projected_yield_kg: f64,
    pub yield_per_acre_kg: f64,
    pub season: &'static str,
    pub tip: &'static str,
}
