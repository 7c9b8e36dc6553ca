//! Crop Advisor
//!
//! Recommends crops for a plot of land from its soil, rainfall and temperature.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crop_advisor::calculator::{self, RecommendOptions, RecommendationReport};
use crop_advisor::{catalog, RecommendationInput};

#[derive(Parser)]
#[command(name = "crop-advisor")]
#[command(about = "Crop suitability and yield calculator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend crops for the given conditions
    Recommend {
        /// Soil type (e.g., "loamy", "clay", "sandy")
        soil: String,

        /// Annual rainfall in mm
        #[arg(allow_hyphen_values = true)]
        rainfall: String,

        /// Average temperature in °C
        #[arg(allow_hyphen_values = true)]
        temperature: String,

        /// Land area in acres
        #[arg(allow_hyphen_values = true)]
        land_area: String,

        /// Minimum score for a crop to be listed
        #[arg(long, default_value_t = calculator::MIN_SCORE)]
        min_score: f64,

        /// Maximum number of crops to list
        #[arg(short, long, default_value_t = calculator::MAX_RESULTS)]
        limit: usize,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Show per-axis points and growing tips
        #[arg(short, long)]
        verbose: bool,
    },

    /// List all crops in the catalog
    ListCrops,

    /// List the soil types the catalog knows about
    ListSoils,

    /// Show details for a specific crop
    Crop {
        /// Crop ID (e.g., "rice")
        id: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Recommend {
            soil,
            rainfall,
            temperature,
            land_area,
            min_score,
            limit,
            json,
            verbose,
        } => {
            let input =
                match RecommendationInput::from_raw(&soil, &rainfall, &temperature, &land_area) {
                    Ok(input) => input,
                    Err(e) => {
                        eprintln!("Invalid input: {}", e);
                        std::process::exit(2);
                    }
                };

            let options = RecommendOptions { min_score, limit };
            let recommendations = calculator::recommend_with(&input, &options);

            if verbose && !json && !recommendations.is_empty() {
                println!("{}", calculator::format_recommendations(&input, &recommendations));
            }

            let report = RecommendationReport {
                input,
                recommendations,
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", report);
            }
        }

        Commands::ListCrops => {
            println!(
                "{:<12} {:<28} {:>12} {:>10} {:>10}",
                "ID", "Crop", "Rain (mm)", "Temp (°C)", "kg/acre"
            );
            println!("{}", "-".repeat(76));
            for c in catalog::all() {
                println!(
                    "{:<12} {:<28} {:>12} {:>10} {:>10.0}",
                    c.id,
                    c.name,
                    format!("{:.0}-{:.0}", c.rainfall_mm.min, c.rainfall_mm.max),
                    format!("{:.0}-{:.0}", c.temperature_c.min, c.temperature_c.max),
                    c.yield_per_acre_kg
                );
            }
        }

        Commands::ListSoils => {
            println!("Known soil types:");
            for soil in catalog::soil_types() {
                println!("  {}", soil);
            }
        }

        Commands::Crop { id } => {
            if let Some(c) = catalog::get(&id) {
                println!("Crop: {}", c.name);
                println!("  ID: {}", c.id);
                println!("  Soils: {}", c.soil_types.join(", "));
                println!("  Rainfall: {}-{} mm", c.rainfall_mm.min, c.rainfall_mm.max);
                println!("  Temperature: {}-{} °C", c.temperature_c.min, c.temperature_c.max);
                println!("  Yield: {} kg/acre", c.yield_per_acre_kg);
                println!("  Season: {}", c.season);
                println!("  Tip: {}", c.tip);
            } else {
                println!("Crop '{}' not found", id);
            }
        }
    }

    Ok(())
}
