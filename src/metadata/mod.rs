//! # Hazard Metadata
//!
//! Every risk document carries provenance metadata naming the hazard
//! computation path that produced it. A result set comes either from one
//! logic-tree branch, identified by a source model tree path and a GSIM tree
//! path, or from a statistical aggregate (`mean` or a `quantile`) over all
//! branches. The two forms are mutually exclusive.
//!
//! [`validate_hazard_metadata`] checks the raw optional fields and
//! [`HazardMetadata::provenance`] turns a valid combination into the typed
//! [`Provenance`] the writers stamp on their container elements.

mod error;
mod hazard;


pub use error::MetadataError;
pub use hazard::{validate_hazard_metadata, HazardMetadata, Provenance, Statistics};
