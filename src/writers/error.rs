use crate::metadata::MetadataError;

/// Errors that can occur while writing risk documents
#[derive(Debug, thiserror::Error)]
pub enum WriterError {
    /// Provenance metadata rejected at construction
    #[error(transparent)]
    InvalidMetadata(#[from] MetadataError),

    /// `serialize` called without any record
    #[error("At least one element must be present, an empty document is not supported by the schema")]
    EmptyInput,

    /// I/O error while rendering or writing the document
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The finished document could not be moved over the target path
    #[error("Failed to persist document: {0}")]
    PersistError(#[from] tempfile::PersistError),
}
