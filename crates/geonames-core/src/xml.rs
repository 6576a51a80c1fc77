// crates/geonames-core/src/xml.rs

//! Minimal XML element tree for service responses.
//!
//! The service replies with small, flat documents, so a tiny tree assembled
//! from `quick-xml` events is all the structure the record mapper needs. No
//! namespace handling: the feed does not use any.

use std::collections::HashMap;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{GeoNamesError, Result};

/// One parsed XML element: name, attributes, child elements, flattened text.
#[derive(Clone, Debug, Default)]
pub struct Element {
    pub name: String,
    pub attributes: HashMap<String, String>,
    pub children: Vec<Element>,
    pub text: String,
}

impl Element {
    /// First child element with the given name, if any.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// All child elements with the given name, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Text of the first child with the given name; `""` when absent.
    pub fn child_text(&self, name: &str) -> &str {
        self.child(name).map(|c| c.text.as_str()).unwrap_or("")
    }

    /// Attribute value by name; `""` when absent.
    pub fn attr(&self, name: &str) -> &str {
        self.attributes.get(name).map(String::as_str).unwrap_or("")
    }
}

fn open_element(start: &BytesStart<'_>) -> Result<Element> {
    let mut element = Element {
        name: String::from_utf8_lossy(start.local_name().as_ref()).into_owned(),
        ..Element::default()
    };
    for attribute in start.attributes() {
        let attribute =
            attribute.map_err(|e| GeoNamesError::unexpected(format!("bad attribute: {e}")))?;
        let key = String::from_utf8_lossy(attribute.key.local_name().as_ref()).into_owned();
        let value = attribute.unescape_value()?.into_owned();
        element.attributes.insert(key, value);
    }
    Ok(element)
}

/// Parses a whole response body and returns its root element.
///
/// Fails when the body is not well-formed XML or contains no element at all
/// (e.g. an HTML error page or an empty reply).
pub fn parse_document(body: &str) -> Result<Element> {
    let mut reader = Reader::from_str(body);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event()? {
            Event::Start(start) => stack.push(open_element(&start)?),
            Event::Empty(start) => {
                let element = open_element(&start)?;
                match stack.last_mut() {
                    Some(parent) => parent.children.push(element),
                    None => root = root.or(Some(element)),
                }
            }
            Event::Text(text) => {
                if let Some(open) = stack.last_mut() {
                    open.text.push_str(&text.unescape()?);
                }
            }
            Event::CData(data) => {
                if let Some(open) = stack.last_mut() {
                    open.text
                        .push_str(&String::from_utf8_lossy(data.as_ref()));
                }
            }
            Event::End(_) => {
                if let Some(closed) = stack.pop() {
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(closed),
                        None => root = root.or(Some(closed)),
                    }
                }
            }
            Event::Eof => break,
            // declarations, comments, processing instructions
            _ => {}
        }
    }

    root.ok_or_else(|| GeoNamesError::unexpected("response contains no XML element"))
}
