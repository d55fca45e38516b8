//! # In-memory NRML documents
//!
//! Writers assemble the whole document as an [`Element`] tree and serialize
//! it in one step, so nothing reaches disk until every record has been
//! processed. Rendering goes through quick-xml's indenting writer.

mod element;
mod format;
mod geometry;

pub use element::Element;
pub use format::{format_float, join_floats};
pub use geometry::append_location;

use crate::namespace::{ROOT_ELEMENT, SERIALIZE_NS_MAP};

/// Create the `<nrml>` root element with its namespace declarations
pub fn nrml_root() -> Element {
    let mut root = Element::new(ROOT_ELEMENT);
    for (key, namespace) in SERIALIZE_NS_MAP {
        root.set(key, namespace);
    }
    root
}
