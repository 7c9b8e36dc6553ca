//! Crop suitability scoring and ranking

use serde::Serialize;
use tracing::{debug, info};

use crate::catalog;
use crate::models::{CropRecord, Recommendation, RecommendationInput, ScoreBreakdown};

pub const SOIL_WEIGHT: f64 = 40.0;
pub const RAINFALL_WEIGHT: f64 = 30.0;
pub const TEMPERATURE_WEIGHT: f64 = 30.0;

/// Millimetres of rainfall deviation that cost one point
pub const RAINFALL_MM_PER_POINT: f64 = 50.0;
/// Points lost per °C of temperature deviation
pub const TEMPERATURE_POINTS_PER_DEGREE: f64 = 3.0;

pub const MIN_SCORE: f64 = 50.0;
pub const MAX_RESULTS: usize = 5;

/// Selection settings for a recommendation request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecommendOptions {
    /// Crops scoring below this are dropped
    pub min_score: f64,
    /// Maximum number of results returned
    pub limit: usize,
}

impl Default for RecommendOptions {
    fn default() -> Self {
        Self {
            min_score: MIN_SCORE,
            limit: MAX_RESULTS,
        }
    }
}

/// Per-axis points for a crop under the given conditions
pub fn score_breakdown(
    record: &CropRecord,
    soil_type: &str,
    rainfall: f64,
    temperature: f64,
) -> ScoreBreakdown {
    let soil = if record.accepts_soil(soil_type) {
        SOIL_WEIGHT
    } else {
        0.0
    };

    let rainfall_points = if record.rainfall_mm.contains(rainfall) {
        RAINFALL_WEIGHT
    } else {
        let diff = record.rainfall_mm.distance(rainfall);
        (RAINFALL_WEIGHT - diff / RAINFALL_MM_PER_POINT).max(0.0)
    };

    let temperature_points = if record.temperature_c.contains(temperature) {
        TEMPERATURE_WEIGHT
    } else {
        let diff = record.temperature_c.distance(temperature);
        (TEMPERATURE_WEIGHT - diff * TEMPERATURE_POINTS_PER_DEGREE).max(0.0)
    };

    ScoreBreakdown {
        soil,
        rainfall: rainfall_points,
        temperature: temperature_points,
    }
}

/// Suitability of a crop for the given conditions, 0 to 100
pub fn score(record: &CropRecord, soil_type: &str, rainfall: f64, temperature: f64) -> f64 {
    score_breakdown(record, soil_type, rainfall, temperature).total()
}

/// Every crop scoring at least `min_score`, best first
///
/// Equal scores keep catalog order.
pub fn rank(input: &RecommendationInput, min_score: f64) -> Vec<Recommendation> {
    let mut ranked = Vec::new();

    for crop in catalog::all() {
        let score = score(
            crop,
            &input.soil_type,
            input.rainfall_mm,
            input.temperature_c,
        );
        debug!(crop = crop.id, score, "scored crop");

        if score < min_score {
            continue;
        }

        // Yield shrinks with how well conditions match
        let projected = crop.yield_per_acre_kg * input.land_area_acres * (score / 100.0);

        ranked.push(Recommendation {
            crop_id: crop.id,
            name: crop.name,
            score: round_to(score, 1),
            projected_yield_kg: projected.round_ties_even(),
            yield_per_acre_kg: crop.yield_per_acre_kg,
            season: crop.season,
            tip: crop.tip,
        });
    }

    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked
}

/// Top crops for the input under the given selection settings
pub fn recommend_with(
    input: &RecommendationInput,
    options: &RecommendOptions,
) -> Vec<Recommendation> {
    let mut ranked = rank(input, options.min_score);
    let qualifying = ranked.len();
    ranked.truncate(options.limit);

    info!(
        soil = %input.soil_type,
        rainfall = input.rainfall_mm,
        temperature = input.temperature_c,
        land_area = input.land_area_acres,
        qualifying,
        returned = ranked.len(),
        "recommendation computed"
    );

    ranked
}

/// Up to five crops scoring 50 or more, best first
pub fn recommend(
    soil_type: &str,
    rainfall: f64,
    temperature: f64,
    land_area: f64,
) -> Vec<Recommendation> {
    let input = RecommendationInput {
        soil_type: soil_type.to_string(),
        rainfall_mm: rainfall,
        temperature_c: temperature,
        land_area_acres: land_area,
    };
    recommend_with(&input, &RecommendOptions::default())
}

/// Round the exact binary value to `decimals` places, so 99.3499... stays 99.3
fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{:.*}", decimals, value).parse().unwrap_or(value)
}

/// Format recommendations with per-axis points as a readable string
pub fn format_recommendations(input: &RecommendationInput, recs: &[Recommendation]) -> String {
    let mut output = String::new();

    for (i, rec) in recs.iter().enumerate() {
        output.push_str(&format!("{}. {} ({:.1}/100)\n", i + 1, rec.name, rec.score));

        if let Some(crop) = catalog::get(rec.crop_id) {
            let points = score_breakdown(
                crop,
                &input.soil_type,
                input.rainfall_mm,
                input.temperature_c,
            );
            output.push_str(&format!(
                "   soil {:.1}/{:.0}, rainfall {:.1}/{:.0} ({:.0}-{:.0} mm), temperature {:.1}/{:.0} ({:.0}-{:.0} °C)\n",
                points.soil,
                SOIL_WEIGHT,
                points.rainfall,
                RAINFALL_WEIGHT,
                crop.rainfall_mm.min,
                crop.rainfall_mm.max,
                points.temperature,
                TEMPERATURE_WEIGHT,
                crop.temperature_c.min,
                crop.temperature_c.max,
            ));
        }

        output.push_str(&format!(
            "   yield {:.0} kg ({:.0} kg/acre), {}\n",
            rec.projected_yield_kg, rec.yield_per_acre_kg, rec.season
        ));
        output.push_str(&format!("   {}\n", rec.tip));
    }

    output
}

/// Input echo plus the results of one request
#[derive(Debug, Serialize)]
pub struct RecommendationReport {
    pub input: RecommendationInput,
    pub recommendations: Vec<Recommendation>,
}

impl std::fmt::Display for RecommendationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Crop Recommendations ===")?;
        writeln!(
            f,
            "Soil: {}  Rainfall: {} mm  Temperature: {} °C  Land: {} acres",
            self.input.soil_type,
            self.input.rainfall_mm,
            self.input.temperature_c,
            self.input.land_area_acres
        )?;
        writeln!(f)?;

        if self.recommendations.is_empty() {
            writeln!(f, "No suitable crops for these conditions.")?;
            return Ok(());
        }

        writeln!(
            f,
            "{:<28} {:>6} {:>12} {:>10}  {}",
            "Crop", "Score", "Yield (kg)", "kg/acre", "Season"
        )?;
        writeln!(f, "{}", "-".repeat(80))?;
        for rec in &self.recommendations {
            writeln!(
                f,
                "{:<28} {:>6.1} {:>12.0} {:>10.0}  {}",
                rec.name, rec.score, rec.projected_yield_kg, rec.yield_per_acre_kg, rec.season
            )?;
        }

        Ok(())
    }
}
