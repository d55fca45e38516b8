//! TOML configuration file support.
//!
//! Provenance shared by many outputs of one calculation can live in a config
//! file instead of being repeated on every command line:
//!
//! ```toml
//! # nrml-risk.toml
//! [metadata]
//! statistics = "quantile"
//! quantile_value = 0.85
//! unit = "EUR"
//! loss_category = "economic"
//! ```
//!
//! Command-line flags override values from the file.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Root configuration structure for nrml-risk.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Default document metadata.
    #[serde(default)]
    pub metadata: MetadataConfig,
}

/// Defaults for the document metadata flags.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct MetadataConfig {
    /// Source model logic-tree path.
    pub source_model_tree_path: Option<String>,

    /// GSIM logic-tree path.
    pub gsim_tree_path: Option<String>,

    /// `mean` or `quantile`.
    pub statistics: Option<String>,

    /// Quantile value for quantile statistics.
    pub quantile_value: Option<f64>,

    /// Unit of the asset values.
    pub unit: Option<String>,

    /// Loss category for loss and BCR maps.
    pub loss_category: Option<String>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }
}
