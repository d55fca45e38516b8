use quick_xml::encoding::Decoder;
use quick_xml::events::BytesStart;

use super::ExposureError;

/// Get an attribute value by local name, ignoring any namespace prefix
pub(super) fn get_attribute(
    e: &BytesStart,
    decoder: Decoder,
    name: &str,
) -> Result<Option<String>, ExposureError> {
    for attr in e.attributes() {
        let attr = attr.map_err(|e| ExposureError::XmlError(quick_xml::Error::from(e)))?;
        if attr.key.local_name().as_ref() == name.as_bytes() {
            return Ok(Some(attr.decode_and_unescape_value(decoder)?.into_owned()));
        }
    }
    Ok(None)
}

/// Parse element text as a float, naming the element on failure
pub(super) fn parse_f64(text: &str, element: &str) -> Result<f64, ExposureError> {
    text.parse()
        .map_err(|_| ExposureError::InvalidValue(format!("{}: '{}' is not a number", element, text)))
}

/// Parse the text of a `gml:pos` into `[lon, lat]`
pub(super) fn parse_pos(text: &str) -> Result<[f64; 2], ExposureError> {
    let coords = text
        .split_whitespace()
        .map(|token| parse_f64(token, "gml:pos"))
        .collect::<Result<Vec<_>, _>>()?;

    match coords.as_slice() {
        [lon, lat] => Ok([*lon, *lat]),
        _ => Err(ExposureError::InvalidValue(format!(
            "gml:pos: expected 'lon lat', got '{}'",
            text
        ))),
    }
}
