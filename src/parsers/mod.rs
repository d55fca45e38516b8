//! Parsers for NRML risk input documents

pub mod exposure;

pub use exposure::{
    AssetAttributes, AssetDefinition, AssetIterator, ExposureError, ExposureListInfo,
    ExposureModelParser, Occupancy,
};
