use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use nrml_risk::metadata::HazardMetadata;

mod config;
mod exposure;
mod write;

use config::{Config, MetadataConfig};

/// nrml-risk - NRML seismic risk result writer
#[derive(Parser)]
#[command(name = "nrml-risk")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Provenance and unit flags shared by every writer command
#[derive(Args, Debug, Default)]
pub struct MetadataArgs {
    /// Source model logic-tree path of the hazard input
    #[arg(long)]
    source_model_tree_path: Option<String>,

    /// GSIM logic-tree path of the hazard input
    #[arg(long)]
    gsim_tree_path: Option<String>,

    /// Statistics of the hazard input (mean or quantile)
    #[arg(long)]
    statistics: Option<String>,

    /// Quantile value, required with --statistics quantile
    #[arg(long)]
    quantile_value: Option<f64>,

    /// Unit of the asset values
    #[arg(long)]
    unit: Option<String>,

    /// Load metadata defaults from a TOML config file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

impl MetadataArgs {
    /// Merge the flags over the config file defaults.
    ///
    /// Returns the hazard metadata and the configured loss category.
    fn resolve(self) -> Result<(HazardMetadata, Option<String>)> {
        let defaults = match &self.config {
            Some(path) => Config::from_file(path)?.metadata,
            None => MetadataConfig::default(),
        };

        let metadata = HazardMetadata {
            source_model_tree_path: self
                .source_model_tree_path
                .or(defaults.source_model_tree_path),
            gsim_tree_path: self.gsim_tree_path.or(defaults.gsim_tree_path),
            statistics: self.statistics.or(defaults.statistics),
            quantile_value: self.quantile_value.or(defaults.quantile_value),
            unit: self.unit.or(defaults.unit),
        };

        Ok((metadata, defaults.loss_category))
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Write loss curves from a JSON array of records
    LossCurves {
        /// Input JSON file ('-' for stdin)
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output NRML file path
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Investigation time in years
        #[arg(long)]
        investigation_time: f64,

        #[command(flatten)]
        metadata: MetadataArgs,
    },

    /// Write a loss map from a JSON array of records
    LossMap {
        /// Input JSON file ('-' for stdin)
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output NRML file path
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Investigation time in years
        #[arg(long)]
        investigation_time: f64,

        /// Probability of exceedance of the map
        #[arg(long)]
        poe: f64,

        /// Loss category (economic, population, buildings, ...)
        #[arg(long)]
        loss_category: Option<String>,

        #[command(flatten)]
        metadata: MetadataArgs,
    },

    /// Write a benefit-cost ratio map from a JSON array of records
    BcrMap {
        /// Input JSON file ('-' for stdin)
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output NRML file path
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Inflation discount rate
        #[arg(long)]
        interest_rate: f64,

        /// Period the assets are expected to be used, in years
        #[arg(long)]
        asset_life_expectancy: f64,

        /// Loss category (economic, population, buildings, ...)
        #[arg(long)]
        loss_category: Option<String>,

        #[command(flatten)]
        metadata: MetadataArgs,
    },

    /// Print the assets of an exposure model as JSON lines
    Exposure {
        /// Input NRML exposure model
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::LossCurves {
            input,
            output,
            investigation_time,
            metadata,
        } => {
            let (metadata, _) = metadata.resolve()?;
            write::loss_curves(input, output, investigation_time, metadata)
        }
        Commands::LossMap {
            input,
            output,
            investigation_time,
            poe,
            loss_category,
            metadata,
        } => {
            let (metadata, default_category) = metadata.resolve()?;
            write::loss_map(
                input,
                output,
                investigation_time,
                poe,
                metadata,
                loss_category.or(default_category),
            )
        }
        Commands::BcrMap {
            input,
            output,
            interest_rate,
            asset_life_expectancy,
            loss_category,
            metadata,
        } => {
            let (metadata, default_category) = metadata.resolve()?;
            write::bcr_map(
                input,
                output,
                interest_rate,
                asset_life_expectancy,
                metadata,
                loss_category.or(default_category),
            )
        }
        Commands::Exposure { file } => exposure::run(file),
    }
}
