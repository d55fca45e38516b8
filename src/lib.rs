//! # nrml-risk - NRML Seismic Risk Result Writers
//!
//! `nrml-risk` writes the results of seismic risk calculations as NRML 0.4
//! documents and reads NRML exposure models.
//!
//! ## Outputs
//!
//! - **Loss curves**: probabilities of exceedance against losses, per asset
//! - **Loss maps**: losses at a fixed probability of exceedance, grouped by
//!   location
//! - **BCR maps**: benefit-cost ratios of retrofitting, grouped by location
//!
//! Every document carries hazard provenance: either the logic-tree branch
//! (source model tree path and GSIM tree path) or the statistical aggregate
//! (`mean`, or `quantile` with its value) the results were computed from.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nrml_risk::metadata::HazardMetadata;
//! use nrml_risk::models::{Location, Loss};
//! use nrml_risk::writers::LossMapWriter;
//!
//! let metadata = HazardMetadata::quantile(0.25);
//! let writer = LossMapWriter::new("loss_map.xml", 50.0, 0.1, &metadata)?
//!     .with_loss_category("economic");
//!
//! let losses = vec![
//!     Loss {
//!         location: Location::with_wkt(1.0, 2.0, "POINT(1 2)"),
//!         asset_ref: "a1".to_string(),
//!         value: 123.45,
//!     },
//! ];
//!
//! let stats = writer.serialize(&losses)?;
//! println!("Wrote {} losses at {} locations", stats.records_written, stats.nodes_written);
//! # Ok::<(), nrml_risk::writers::WriterError>(())
//! ```
//!
//! produces
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <nrml xmlns="http://openquake.org/xmlns/nrml/0.4" xmlns:gml="http://www.opengis.net/gml">
//!   <lossMap investigationTime="50.0" poE="0.1" statistics="quantile" quantileValue="0.25" lossCategory="economic">
//!     <node>
//!       <gml:Point>
//!         <gml:pos>1.0 2.0</gml:pos>
//!       </gml:Point>
//!       <loss assetRef="a1" value="123.45"/>
//!     </node>
//!   </lossMap>
//! </nrml>
//! ```
//!
//! ## Architecture
//!
//! - [`metadata`]: hazard provenance validation
//! - [`models`]: result records consumed by the writers
//! - [`document`]: in-memory element tree and XML rendering
//! - [`writers`]: loss curve, loss map and BCR map serializers
//! - [`parsers`]: streaming exposure model parser
//! - [`namespace`]: NRML and GML namespace constants

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod document;
pub mod metadata;
pub mod models;
pub mod namespace;
pub mod parsers;
pub mod writers;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::metadata::{
        validate_hazard_metadata, HazardMetadata, MetadataError, Provenance, Statistics,
    };
    pub use crate::models::{BcrValue, Location, Loss, LossCurve};
    pub use crate::parsers::{AssetDefinition, ExposureError, ExposureModelParser};
    pub use crate::writers::{
        BcrMapWriter, LossCurveWriter, LossMapWriter, WriterError, WriterStats,
    };
}
