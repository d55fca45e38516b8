use anyhow::{Context, Result};
use log::info;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

use nrml_risk::metadata::HazardMetadata;
use nrml_risk::models::{BcrValue, Loss, LossCurve};
use nrml_risk::writers::{BcrMapWriter, LossCurveWriter, LossMapWriter, WriterStats};

/// Write loss curves
pub fn loss_curves(
    input: PathBuf,
    output: PathBuf,
    investigation_time: f64,
    metadata: HazardMetadata,
) -> Result<()> {
    let writer = LossCurveWriter::new(&output, investigation_time, &metadata)
        .context("Invalid loss curve metadata")?;
    let curves: Vec<LossCurve> = read_records(&input)?;

    let stats = writer
        .serialize(&curves)
        .with_context(|| format!("Failed to write loss curves to {}", output.display()))?;
    print_summary("loss curves", &output, &stats);
    Ok(())
}

/// Write a loss map
pub fn loss_map(
    input: PathBuf,
    output: PathBuf,
    investigation_time: f64,
    poe: f64,
    metadata: HazardMetadata,
    loss_category: Option<String>,
) -> Result<()> {
    let mut writer = LossMapWriter::new(&output, investigation_time, poe, &metadata)
        .context("Invalid loss map metadata")?;
    if let Some(loss_category) = &loss_category {
        writer = writer.with_loss_category(loss_category);
    }
    let losses: Vec<Loss> = read_records(&input)?;

    let stats = writer
        .serialize(&losses)
        .with_context(|| format!("Failed to write loss map to {}", output.display()))?;
    print_summary("losses", &output, &stats);
    Ok(())
}

/// Write a benefit-cost ratio map
pub fn bcr_map(
    input: PathBuf,
    output: PathBuf,
    interest_rate: f64,
    asset_life_expectancy: f64,
    metadata: HazardMetadata,
    loss_category: Option<String>,
) -> Result<()> {
    let mut writer = BcrMapWriter::new(&output, interest_rate, asset_life_expectancy, &metadata)
        .context("Invalid BCR map metadata")?;
    if let Some(loss_category) = &loss_category {
        writer = writer.with_loss_category(loss_category);
    }
    let values: Vec<BcrValue> = read_records(&input)?;

    let stats = writer
        .serialize(&values)
        .with_context(|| format!("Failed to write BCR map to {}", output.display()))?;
    print_summary("benefit-cost ratios", &output, &stats);
    Ok(())
}

/// Read a JSON array of records from a file, or stdin for `-`
fn read_records<T: DeserializeOwned>(input: &Path) -> Result<Vec<T>> {
    let reader: Box<dyn Read> = if input == Path::new("-") {
        Box::new(io::stdin().lock())
    } else {
        let file = File::open(input)
            .with_context(|| format!("Failed to open input file: {}", input.display()))?;
        Box::new(file)
    };

    let records: Vec<T> = serde_json::from_reader(BufReader::new(reader))
        .with_context(|| format!("Failed to parse records from {}", input.display()))?;
    info!("Read {} records from {}", records.len(), input.display());
    Ok(records)
}

fn print_summary(kind: &str, output: &Path, stats: &WriterStats) {
    let locations = if stats.nodes_written > 0 {
        format!(" at {} locations", stats.nodes_written)
    } else {
        String::new()
    };

    #[cfg(feature = "colorized_output")]
    {
        use console::style;
        println!(
            "{} {} {}{} to {}",
            style("✓").green().bold(),
            style(stats.records_written).bold(),
            kind,
            locations,
            style(output.display()).cyan()
        );
    }

    #[cfg(not(feature = "colorized_output"))]
    {
        println!(
            "Wrote {} {}{} to {}",
            stats.records_written,
            kind,
            locations,
            output.display()
        );
    }
}
