//! # Risk Result Writers
//!
//! Three serializers, one per NRML risk output:
//!
//! - [`LossCurveWriter`]: `<lossCurves>` with one `<lossCurve>` per asset
//! - [`LossMapWriter`]: `<lossMap>` with `<loss>` leaves grouped by location
//! - [`BcrMapWriter`]: `<bcrMap>` with `<bcr>` leaves grouped by location
//!
//! Each writer is bound to one output path and one set of document metadata.
//! Metadata is validated in the constructor; `serialize` consumes the writer,
//! rejects empty input before touching the filesystem, assembles the whole
//! document in memory and writes it in a single step.

mod assembly;
mod bcr_map;
mod error;
mod loss_curve;
mod loss_map;

pub use bcr_map::BcrMapWriter;
pub use error::WriterError;
pub use loss_curve::LossCurveWriter;
pub use loss_map::LossMapWriter;

/// Statistics returned by a completed `serialize` call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriterStats {
    /// Records written as curve or leaf elements
    pub records_written: usize,

    /// Distinct `<node>` elements (always zero for loss curves)
    pub nodes_written: usize,
}
