use std::path::{Path, PathBuf};

use log::info;

use super::assembly::{require_records, stamp_metadata, write_document, Container, NodeIndex};
use super::{WriterError, WriterStats};
use crate::document::{format_float, Element};
use crate::metadata::HazardMetadata;
use crate::models::Loss;

/// Serializer for loss maps produced by the classical and probabilistic
/// calculators.
///
/// Losses are grouped by location: every distinct Well-known text gets one
/// `<node>`, and each loss at that location becomes its own `<loss>` leaf.
#[derive(Debug, Clone)]
pub struct LossMapWriter {
    path: PathBuf,
    investigation_time: f64,
    poe: f64,
    provenance: Vec<(&'static str, String)>,
    unit: Option<String>,
    loss_category: Option<String>,
}

impl LossMapWriter {
    /// Create a writer for `path`.
    ///
    /// `poe` is the probability of exceedance used to interpolate the losses
    /// of this map.
    pub fn new<P: AsRef<Path>>(
        path: P,
        investigation_time: f64,
        poe: f64,
        metadata: &HazardMetadata,
    ) -> Result<Self, WriterError> {
        Ok(Self {
            path: path.as_ref().to_path_buf(),
            investigation_time,
            poe,
            provenance: metadata.provenance_attributes()?,
            unit: metadata.unit.clone(),
            loss_category: None,
        })
    }

    /// Set the category (economic, population, buildings, ...) of the losses
    pub fn with_loss_category(mut self, loss_category: &str) -> Self {
        self.loss_category = Some(loss_category.to_string());
        self
    }

    /// Target path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize a collection of losses and write the document to the target
    /// path.
    pub fn serialize<'a, I>(self, losses: I) -> Result<WriterStats, WriterError>
    where
        I: IntoIterator<Item = &'a Loss>,
    {
        let losses = require_records(losses.into_iter())?;

        let mut container = Container::default();
        let mut nodes = NodeIndex::default();
        let mut stats = WriterStats::default();

        for loss in losses {
            container.get_or_open(|| self.loss_map_element());

            let loss_elem = nodes.node_for(&loss.location).sub_element("loss");
            loss_elem
                .set("assetRef", loss.asset_ref.as_str())
                .set("value", format_float(loss.value));

            stats.records_written += 1;
        }

        stats.nodes_written = nodes.len();
        let loss_map = container.get_or_open(|| self.loss_map_element());
        nodes.drain_into(loss_map);

        write_document(&self.path, &container.into_document())?;
        info!(
            "Wrote {} losses at {} locations to {}",
            stats.records_written,
            stats.nodes_written,
            self.path.display()
        );

        Ok(stats)
    }

    fn loss_map_element(&self) -> Element {
        let mut loss_map = Element::new("lossMap");
        loss_map
            .set("investigationTime", format_float(self.investigation_time))
            .set("poE", format_float(self.poe));
        stamp_metadata(
            &mut loss_map,
            &self.provenance,
            self.loss_category.as_deref(),
            self.unit.as_deref(),
        );
        loss_map
    }
}
