use std::io::{self, Write};

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

/// Indentation width of serialized documents
const INDENT_SIZE: usize = 2;

/// An owned XML element
///
/// Attributes keep insertion order. An element carries either text or child
/// elements; the writers never mix the two.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<Element>,
}

impl Element {
    /// Create an empty element
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Element name, including any namespace prefix
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set an attribute, replacing an existing value with the same key
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| k == key) {
            Some(existing) => existing.1 = value,
            None => self.attributes.push((key.to_string(), value)),
        }
        self
    }

    /// Set an attribute only when a value is present
    pub fn set_optional(&mut self, key: &str, value: Option<&str>) -> &mut Self {
        if let Some(value) = value {
            self.set(key, value);
        }
        self
    }

    /// Look up an attribute value
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All attributes in insertion order
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Set the text content
    pub fn set_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.text = Some(text.into());
        self
    }

    /// Text content, if any
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Append a new child element and return it for population
    pub fn sub_element(&mut self, name: &str) -> &mut Element {
        self.push(Element::new(name))
    }

    /// Append an existing element as the last child and return it
    pub fn push(&mut self, child: Element) -> &mut Element {
        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    /// Append several children in order
    pub fn extend(&mut self, children: impl IntoIterator<Item = Element>) {
        self.children.extend(children);
    }

    /// Child elements in document order
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Iterate over children with the given name
    pub fn find_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |child| child.name == name)
    }

    /// First child with the given name
    pub fn find<'a>(&'a self, name: &'a str) -> Option<&'a Element> {
        self.find_all(name).next()
    }

    /// Serialize as a standalone document: UTF-8 XML declaration followed by
    /// this element, pretty-printed, with a trailing newline.
    pub fn to_document_bytes(&self) -> io::Result<Vec<u8>> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', INDENT_SIZE);
        emit(
            &mut writer,
            Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)),
        )?;
        self.write_to(&mut writer)?;

        let mut bytes = writer.into_inner();
        bytes.push(b'\n');
        Ok(bytes)
    }

    fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        let mut start = BytesStart::new(self.name.as_str());
        for (key, value) in &self.attributes {
            start.push_attribute((key.as_str(), value.as_str()));
        }

        match (&self.text, self.children.is_empty()) {
            (None, true) => emit(writer, Event::Empty(start)),
            (Some(text), _) => {
                emit(writer, Event::Start(start))?;
                emit(writer, Event::Text(BytesText::new(text)))?;
                emit(writer, Event::End(BytesEnd::new(self.name.as_str())))
            }
            (None, false) => {
                emit(writer, Event::Start(start))?;
                for child in &self.children {
                    child.write_to(writer)?;
                }
                emit(writer, Event::End(BytesEnd::new(self.name.as_str())))
            }
        }
    }
}

fn emit<W: Write>(writer: &mut Writer<W>, event: Event<'_>) -> io::Result<()> {
    writer
        .write_event(event)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))
}
