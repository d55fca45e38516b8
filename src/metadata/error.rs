/// Errors raised while validating document metadata
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MetadataError {
    /// Invalid combination of hazard provenance fields
    #[error("Invalid hazard metadata: {0}")]
    InvalidMetadata(String),
}
