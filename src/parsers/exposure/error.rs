/// Errors that can occur during exposure model parsing
#[derive(Debug, thiserror::Error)]
pub enum ExposureError {
    /// Error parsing XML
    #[error("XML parsing error: {0}")]
    XmlError(#[from] quick_xml::Error),

    /// I/O error during file operations
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Required child element is missing
    #[error("element assetDefinition: missing required element {0}")]
    MissingElement(String),

    /// Required XML attribute is missing
    #[error("Missing required attribute: {0}")]
    MissingAttribute(String),

    /// Element text or attribute could not be converted
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// Document ended in the middle of an element
    #[error("Invalid exposure structure: {0}")]
    InvalidStructure(String),
}
