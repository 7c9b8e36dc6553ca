//! Conversion of raw text fields into a recommendation request

use thiserror::Error;
use tracing::warn;

use crate::models::RecommendationInput;

/// A submitted field could not be read as a number
#[derive(Debug, Error, PartialEq)]
pub enum InputFormatError {
    #[error("{field} must be a number, got '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    #[error("{field} must be a finite number, got '{value}'")]
    NotFinite { field: &'static str, value: String },
}

/// Parse one numeric field, ignoring surrounding whitespace
pub fn parse_number(field: &'static str, text: &str) -> Result<f64, InputFormatError> {
    let trimmed = text.trim();
    let value: f64 = trimmed.parse().map_err(|_| InputFormatError::InvalidNumber {
        field,
        value: text.to_string(),
    })?;

    if !value.is_finite() {
        return Err(InputFormatError::NotFinite {
            field,
            value: text.to_string(),
        });
    }

    Ok(value)
}

impl RecommendationInput {
    /// Build a request from four text values as submitted by a user
    ///
    /// The soil token is trimmed but never rejected; an unknown soil just
    /// earns no soil points.
    pub fn from_raw(
        soil_type: &str,
        rainfall: &str,
        temperature: &str,
        land_area: &str,
    ) -> Result<Self, InputFormatError> {
        let numbers = parse_number("rainfall", rainfall).and_then(|rainfall_mm| {
            let temperature_c = parse_number("temperature", temperature)?;
            let land_area_acres = parse_number("land area", land_area)?;
            Ok((rainfall_mm, temperature_c, land_area_acres))
        });

        match numbers {
            Ok((rainfall_mm, temperature_c, land_area_acres)) => Ok(Self {
                soil_type: soil_type.trim().to_string(),
                rainfall_mm,
                temperature_c,
                land_area_acres,
            }),
            Err(e) => {
                warn!(error = %e, "rejected recommendation input");
                Err(e)
            }
        }
    }
}
