use std::path::{Path, PathBuf};

use log::info;

use super::assembly::{require_records, stamp_metadata, write_document, Container};
use super::{WriterError, WriterStats};
use crate::document::{append_location, format_float, join_floats, Element};
use crate::metadata::HazardMetadata;
use crate::models::LossCurve;

/// Serializer for loss curves produced by the classical and probabilistic
/// calculators.
///
/// ```rust,no_run
/// use nrml_risk::metadata::HazardMetadata;
/// use nrml_risk::models::{Location, LossCurve};
/// use nrml_risk::writers::LossCurveWriter;
///
/// let writer = LossCurveWriter::new("curves.xml", 50.0, &HazardMetadata::mean())?;
/// let curve = LossCurve {
///     location: Location::new(1.0, 2.0),
///     asset_ref: "asset_1".to_string(),
///     poes: vec![0.1, 0.2],
///     losses: vec![100.0, 200.0],
///     loss_ratios: None,
/// };
/// writer.serialize(&[curve])?;
/// # Ok::<(), nrml_risk::writers::WriterError>(())
/// ```
#[derive(Debug, Clone)]
pub struct LossCurveWriter {
    path: PathBuf,
    investigation_time: f64,
    provenance: Vec<(&'static str, String)>,
    unit: Option<String>,
}

impl LossCurveWriter {
    /// Create a writer for `path`.
    ///
    /// `investigation_time` is the time span, in years, of the calculation
    /// that produced the curves. Fails with
    /// [`WriterError::InvalidMetadata`] on an invalid provenance combination.
    pub fn new<P: AsRef<Path>>(
        path: P,
        investigation_time: f64,
        metadata: &HazardMetadata,
    ) -> Result<Self, WriterError> {
        Ok(Self {
            path: path.as_ref().to_path_buf(),
            investigation_time,
            provenance: metadata.provenance_attributes()?,
            unit: metadata.unit.clone(),
        })
    }

    /// Target path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize a collection of loss curves, one `<lossCurve>` per record in
    /// iteration order, and write the document to the target path.
    pub fn serialize<'a, I>(self, curves: I) -> Result<WriterStats, WriterError>
    where
        I: IntoIterator<Item = &'a LossCurve>,
    {
        let curves = require_records(curves.into_iter())?;

        let mut container = Container::default();
        let mut stats = WriterStats::default();

        for curve in curves {
            let loss_curves = container.get_or_open(|| self.loss_curves_element());

            let loss_curve = loss_curves.sub_element("lossCurve");
            append_location(loss_curve, &curve.location);
            loss_curve.set("assetRef", curve.asset_ref.as_str());

            loss_curve.sub_element("poEs").set_text(join_floats(&curve.poes));
            loss_curve
                .sub_element("losses")
                .set_text(join_floats(&curve.losses));

            if let Some(loss_ratios) = &curve.loss_ratios {
                loss_curve
                    .sub_element("lossRatios")
                    .set_text(join_floats(loss_ratios));
            }

            stats.records_written += 1;
        }

        write_document(&self.path, &container.into_document())?;
        info!(
            "Wrote {} loss curves to {}",
            stats.records_written,
            self.path.display()
        );

        Ok(stats)
    }

    fn loss_curves_element(&self) -> Element {
        let mut loss_curves = Element::new("lossCurves");
        loss_curves.set("investigationTime", format_float(self.investigation_time));
        stamp_metadata(
            &mut loss_curves,
            &self.provenance,
            None,
            self.unit.as_deref(),
        );
        loss_curves
    }
}
