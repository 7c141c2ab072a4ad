//! Offline prediction report
//!
//! Batch variant of the API's animal-data lookup: reads the precomputed
//! prediction and feature matrices from CSV, recomputes global means for
//! this run, and prints one species' prediction with its explanation.

use std::error::Error;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;

use wildtrade_api::explain::explain;
use wildtrade_api::facts::normalize_taxon;
use wildtrade_api::models::{SpeciesPrediction, TradeFeatureRecord};
use wildtrade_api::stats::GlobalMeans;

#[derive(Parser)]
#[command(name = "predict", about = "Wildlife poaching risk estimation (offline)")]
struct Args {
    /// Species to look up (Taxon name)
    taxon: String,

    /// Precomputed prediction table
    #[arg(long, default_value = "Final_Output.csv")]
    predictions: PathBuf,

    /// Per-country trade feature matrix
    #[arg(long, default_value = "Feature_Matrix.csv")]
    features: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let predictions: Vec<SpeciesPrediction> = read_csv(&args.predictions)?;
    let features: Vec<TradeFeatureRecord> = read_csv(&args.features)?;

    let wanted = normalize_taxon(&args.taxon);
    let Some(prediction) = predictions
        .iter()
        .find(|p| normalize_taxon(&p.taxon) == wanted)
    else {
        eprintln!("Species not found in dataset.");
        return Ok(());
    };

    // Means are recomputed per run in the offline variant.
    let means = GlobalMeans::compute(&features);

    let profile = features
        .iter()
        .find(|f| prediction.likely_poaching_country.as_deref() == Some(f.exporter.as_str()));

    let explanation = match profile {
        Some(_) => explain(profile, &means),
        None => "No detailed trade profile available.".to_string(),
    };

    println!("\n--- Prediction Result ---");
    println!("Species                : {}", prediction.taxon);
    println!("Order                  : {}", field(&prediction.order_name));
    println!("Family                 : {}", field(&prediction.family));
    println!("Genus                  : {}", field(&prediction.genus));
    println!(
        "Likely Poaching Country: {}",
        field(&prediction.likely_poaching_country)
    );
    match prediction.poaching_risk_score {
        Some(score) => println!("Poaching Risk Score    : {score:.3}"),
        None => println!("Poaching Risk Score    : n/a"),
    }
    println!("\nExplanation:");
    println!("- {explanation}");

    Ok(())
}

fn field(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("n/a")
}

fn read_csv<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<T>, Box<dyn Error>> {
    let file = File::open(path).map_err(|e| format!("{}: {e}", path.display()))?;
    let mut reader = csv::Reader::from_reader(file);
    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}
