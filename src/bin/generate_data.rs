//! Writes a year of synthetic meter data in the interchange format.
//!
//! Usage: generate_data [output-path]   (default: energy_data.csv)

use anyhow::{Context, Result};
use energy_meter_api::datagen::{self, GeneratorConfig};

fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "energy_data.csv".to_string());

    let cfg = GeneratorConfig::full_year(rand::random()).context("invalid generator date range")?;

    println!(
        "Generating energy data from {} to {}...",
        cfg.start.format("%d/%m/%Y"),
        cfg.end.format("%d/%m/%Y")
    );
    let records = datagen::write_interchange_file(&path, &cfg)?;
    println!("Generated {records} records");
    println!("Saved to {path}");

    Ok(())
}
