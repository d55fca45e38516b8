//! NRML namespace constants
//!
//! Every document written by this crate is rooted at an `<nrml>` element in
//! the NRML 0.4 default namespace, with geometry elements in the GML
//! namespace under the `gml` prefix.

/// Default namespace of NRML 0.4 documents
pub const NRML_NAMESPACE: &str = "http://openquake.org/xmlns/nrml/0.4";

/// Geography Markup Language namespace
pub const GML_NAMESPACE: &str = "http://www.opengis.net/gml";

/// Prefix bound to [`GML_NAMESPACE`] in serialized documents
pub const GML_PREFIX: &str = "gml";

/// Name of the document root element
pub const ROOT_ELEMENT: &str = "nrml";

/// Namespace declarations stamped on the root element, in output order
pub const SERIALIZE_NS_MAP: [(&str, &str); 2] = [
    ("xmlns", NRML_NAMESPACE),
    ("xmlns:gml", GML_NAMESPACE),
];

/// Qualify a local name with the `gml` prefix
pub fn gml(local_name: &str) -> String {
    format!("{}:{}", GML_PREFIX, local_name)
}
