//! # nrml-risk
//!
//! A command-line tool for writing seismic risk results as NRML documents.
//!
//! ## Usage
//!
//! ```bash
//! # Loss curves from mean hazard
//! nrml-risk loss-curves curves.json curves.xml --investigation-time 50 --statistics mean
//!
//! # Loss map for one logic-tree branch
//! nrml-risk loss-map losses.json map.xml --investigation-time 50 --poe 0.1 \
//!     --source-model-tree-path b1 --gsim-tree-path b2 --loss-category economic
//!
//! # BCR map with provenance taken from a config file
//! nrml-risk bcr-map bcr.json bcr.xml --interest-rate 0.05 --asset-life-expectancy 40 \
//!     --config nrml-risk.toml
//!
//! # Dump an exposure model as JSON lines
//! nrml-risk exposure exposure.xml
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbosity());
    cli::dispatch(cli)
}
