//! Document assembly shared by the three writers

use std::fs;
use std::io::{self, Write};
use std::iter::Peekable;
use std::path::Path;

use indexmap::IndexMap;
use log::debug;
use tempfile::NamedTempFile;

use super::WriterError;
use crate::document::{append_location, nrml_root, Element};
use crate::models::Location;

/// Fail with [`WriterError::EmptyInput`] unless at least one record is
/// available. Only the first record is pulled, so lazy sequences work.
pub(crate) fn require_records<I: Iterator>(records: I) -> Result<Peekable<I>, WriterError> {
    let mut records = records.peekable();
    if records.peek().is_none() {
        return Err(WriterError::EmptyInput);
    }
    Ok(records)
}

/// Stamp the optional metadata attributes shared by all containers.
///
/// Absent values are skipped, never written as empty strings.
pub(crate) fn stamp_metadata(
    container: &mut Element,
    provenance: &[(&'static str, String)],
    loss_category: Option<&str>,
    unit: Option<&str>,
) {
    for (key, value) in provenance {
        container.set(key, value.as_str());
    }
    container
        .set_optional("lossCategory", loss_category)
        .set_optional("unit", unit);
}

/// Writer-specific container element, created on the first record
#[derive(Debug, Default)]
pub(crate) enum Container {
    /// No record seen yet
    #[default]
    Empty,
    /// Container created and stamped
    Open(Element),
}

impl Container {
    /// The open container, created by `open` if no record was seen yet
    pub(crate) fn get_or_open(&mut self, open: impl FnOnce() -> Element) -> &mut Element {
        if let Container::Empty = self {
            let element = open();
            debug!("Opened <{}> container", element.name());
            *self = Container::Open(element);
        }
        match self {
            Container::Open(element) => element,
            Container::Empty => unreachable!("container was just opened"),
        }
    }

    /// Attach the container, if any, to a fresh `<nrml>` root
    pub(crate) fn into_document(self) -> Element {
        let mut root = nrml_root();
        if let Container::Open(element) = self {
            root.push(element);
        }
        root
    }
}

/// Location-keyed `<node>` elements of a map document, in first-seen order
#[derive(Debug, Default)]
pub(crate) struct NodeIndex {
    nodes: IndexMap<String, Element>,
}

impl NodeIndex {
    /// The node for `location`, created with its `gml:Point` on first use.
    ///
    /// Keyed by the location's Well-known text.
    pub(crate) fn node_for(&mut self, location: &Location) -> &mut Element {
        self.nodes.entry(location.wkt.clone()).or_insert_with(|| {
            debug!("New node at {}", location.wkt);
            let mut node = Element::new("node");
            append_location(&mut node, location);
            node
        })
    }

    /// Number of distinct locations
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Move the nodes, in insertion order, under `container`
    pub(crate) fn drain_into(self, container: &mut Element) {
        container.extend(self.nodes.into_values());
    }
}

/// Write `root` to `path` as a complete document.
///
/// The bytes go to a temporary file next to the target which then replaces
/// it, so a failure never leaves a partial document at `path`. A new file
/// gets the process default mode; an overwritten file keeps its permissions.
pub(crate) fn write_document(path: &Path, root: &Element) -> Result<(), WriterError> {
    let bytes = root.to_document_bytes()?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let existing = match fs::metadata(path) {
        Ok(metadata) => Some(metadata.permissions()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => None,
        Err(e) => return Err(e.into()),
    };

    let mut temp_file = temp_file_in(dir)?;
    if let Some(permissions) = existing {
        temp_file.as_file().set_permissions(permissions)?;
    }
    temp_file.write_all(&bytes)?;
    temp_file.flush()?;
    temp_file.persist(path)?;

    Ok(())
}

/// Temporary file created with mode 0666 filtered by the umask, as a plain
/// `File::create` would be.
fn temp_file_in(dir: &Path) -> io::Result<NamedTempFile> {
    let mut builder = tempfile::Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    builder.tempfile_in(dir)
}
