use std::path::{Path, PathBuf};

use log::info;

use super::assembly::{require_records, stamp_metadata, write_document, Container, NodeIndex};
use super::{WriterError, WriterStats};
use crate::document::{format_float, Element};
use crate::metadata::HazardMetadata;
use crate::models::BcrValue;

/// Serializer for benefit-cost ratio maps produced by the classical and
/// probabilistic calculators.
#[derive(Debug, Clone)]
pub struct BcrMapWriter {
    path: PathBuf,
    interest_rate: f64,
    asset_life_expectancy: f64,
    provenance: Vec<(&'static str, String)>,
    unit: Option<String>,
    loss_category: Option<String>,
}

impl BcrMapWriter {
    /// Create a writer for `path`.
    ///
    /// `interest_rate` is the inflation discount rate and
    /// `asset_life_expectancy` the period the asset is expected to be used.
    pub fn new<P: AsRef<Path>>(
        path: P,
        interest_rate: f64,
        asset_life_expectancy: f64,
        metadata: &HazardMetadata,
    ) -> Result<Self, WriterError> {
        Ok(Self {
            path: path.as_ref().to_path_buf(),
            interest_rate,
            asset_life_expectancy,
            provenance: metadata.provenance_attributes()?,
            unit: metadata.unit.clone(),
            loss_category: None,
        })
    }

    /// Set the category of the losses the ratios were derived from
    pub fn with_loss_category(mut self, loss_category: &str) -> Self {
        self.loss_category = Some(loss_category.to_string());
        self
    }

    /// Target path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize a collection of benefit-cost ratios and write the document
    /// to the target path.
    pub fn serialize<'a, I>(self, values: I) -> Result<WriterStats, WriterError>
    where
        I: IntoIterator<Item = &'a BcrValue>,
    {
        let values = require_records(values.into_iter())?;

        let mut container = Container::default();
        let mut nodes = NodeIndex::default();
        let mut stats = WriterStats::default();

        for value in values {
            container.get_or_open(|| self.bcr_map_element());

            nodes
                .node_for(&value.location)
                .sub_element("bcr")
                .set("assetRef", value.asset_ref.as_str())
                .set("ratio", format_float(value.bcr))
                .set("aalOrig", format_float(value.average_annual_loss_original))
                .set("aalRetr", format_float(value.average_annual_loss_retrofitted));

            stats.records_written += 1;
        }

        stats.nodes_written = nodes.len();
        let bcr_map = container.get_or_open(|| self.bcr_map_element());
        nodes.drain_into(bcr_map);

        write_document(&self.path, &container.into_document())?;
        info!(
            "Wrote {} benefit-cost ratios at {} locations to {}",
            stats.records_written,
            stats.nodes_written,
            self.path.display()
        );

        Ok(stats)
    }

    fn bcr_map_element(&self) -> Element {
        let mut bcr_map = Element::new("bcrMap");
        bcr_map
            .set("interestRate", format_float(self.interest_rate))
            .set(
                "assetLifeExpectancy",
                format_float(self.asset_life_expectancy),
            );
        stamp_metadata(
            &mut bcr_map,
            &self.provenance,
            self.loss_category.as_deref(),
            self.unit.as_deref(),
        );
        bcr_map
    }
}
