use anyhow::{Context, Result};
use log::info;
use std::io::{self, Write};
use std::path::PathBuf;

use nrml_risk::parsers::ExposureModelParser;

/// Print every asset of an exposure model as one JSON object per line
pub fn run(file: PathBuf) -> Result<()> {
    if !file.exists() {
        anyhow::bail!("File does not exist: {}", file.display());
    }

    let parser = ExposureModelParser::from_path(&file)
        .with_context(|| format!("Failed to open exposure model: {}", file.display()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut count = 0usize;
    for asset in parser.assets() {
        let asset = asset.with_context(|| {
            format!("Failed to parse asset {} of {}", count + 1, file.display())
        })?;
        serde_json::to_writer(&mut out, &asset)?;
        writeln!(out)?;
        count += 1;
    }

    info!("Parsed {} assets from {}", count, file.display());
    Ok(())
}
