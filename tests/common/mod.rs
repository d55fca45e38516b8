//! Helpers for reading written documents back in tests

#![allow(dead_code)]

use quick_xml::events::Event;
use quick_xml::Reader;

/// A parsed element
#[derive(Debug, Default)]
pub struct Node {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub text: Option<String>,
    pub children: Vec<Node>,
}

impl Node {
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn children_named<'a>(&'a self, name: &'a str) -> Vec<&'a Node> {
        self.children.iter().filter(|c| c.name == name).collect()
    }

    pub fn child(&self, name: &str) -> &Node {
        self.children
            .iter()
            .find(|c| c.name == name)
            .unwrap_or_else(|| panic!("<{}> has no <{}> child", self.name, name))
    }

    pub fn attribute_keys(&self) -> Vec<&str> {
        self.attributes.iter().map(|(k, _)| k.as_str()).collect()
    }

    /// Text of `gml:Point/gml:pos`
    pub fn pos(&self) -> &str {
        self.child("gml:Point")
            .child("gml:pos")
            .text
            .as_deref()
            .unwrap_or_default()
    }
}

fn start_node(e: &quick_xml::events::BytesStart, decoder: quick_xml::encoding::Decoder) -> Node {
    Node {
        name: String::from_utf8(e.name().as_ref().to_vec()).unwrap(),
        attributes: e
            .attributes()
            .map(|a| {
                let a = a.unwrap();
                (
                    String::from_utf8(a.key.as_ref().to_vec()).unwrap(),
                    a.decode_and_unescape_value(decoder).unwrap().into_owned(),
                )
            })
            .collect(),
        ..Default::default()
    }
}

/// Parse a document into its root element
pub fn parse_document(xml: &str) -> Node {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<Node> = Vec::new();
    loop {
        match reader.read_event().unwrap() {
            Event::Start(e) => stack.push(start_node(&e, reader.decoder())),
            Event::Empty(e) => {
                let node = start_node(&e, reader.decoder());
                match stack.last_mut() {
                    Some(parent) => parent.children.push(node),
                    None => return node,
                }
            }
            Event::Text(t) => {
                if let Some(node) = stack.last_mut() {
                    node.text = Some(t.unescape().unwrap().into_owned());
                }
            }
            Event::End(_) => {
                let node = stack.pop().unwrap();
                match stack.last_mut() {
                    Some(parent) => parent.children.push(node),
                    None => return node,
                }
            }
            Event::Eof => panic!("document ended before the root element closed"),
            _ => {}
        }
    }
}

/// Read and parse a written document
pub fn read_document(path: &std::path::Path) -> Node {
    let xml = std::fs::read_to_string(path).unwrap();
    parse_document(&xml)
}
