//! Generic XML element tree

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::io::BufRead;

use super::{collect_attributes, Result, MAX_DEPTH};
use crate::error::XmlError;

/// XML node inside an element
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum XmlNode {
    /// Element node
    Element(XmlElement),
    /// Text node (unescaped)
    Text(String),
    /// CDATA section
    CData(String),
    /// Comment node
    Comment(String),
}

/// XML element with attributes and children
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct XmlElement {
    /// Qualified element name (with prefix, e.g., "office:document-content")
    pub name: String,
    /// Attributes as (qualified name, unescaped value) pairs, in document order
    pub attributes: Vec<(String, String)>,
    /// Child nodes
    pub children: Vec<XmlNode>,
    /// Whether this was a self-closing element
    pub self_closing: bool,
}

impl XmlElement {
    /// Create a new empty element
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Read a complete element from XML reader (starting after the start tag was read)
    ///
    /// Open elements are kept on an explicit stack; nesting deeper than
    /// [`MAX_DEPTH`] fails with [`XmlError::TooDeep`].
    pub fn from_reader<R: BufRead>(reader: &mut Reader<R>, start: &BytesStart) -> Result<Self> {
        let mut open = vec![Self::from_start(start)?];

        let mut buf = Vec::new();
        loop {
            let event = reader.read_event_into(&mut buf)?;
            let depth = open.len();
            let Some(current) = open.last_mut() else {
                return Err(XmlError::MissingRoot);
            };
            match event {
                Event::Start(e) => {
                    if depth >= MAX_DEPTH {
                        return Err(XmlError::TooDeep(MAX_DEPTH));
                    }
                    open.push(Self::from_start(&e)?);
                }
                Event::Empty(e) => {
                    current
                        .children
                        .push(XmlNode::Element(Self::from_empty(&e)?));
                }
                Event::Text(t) => {
                    let text = t.unescape()?;
                    // Indentation between elements is not content
                    if !text.trim().is_empty() {
                        current.children.push(XmlNode::Text(text.into_owned()));
                    }
                }
                Event::CData(c) => {
                    let text = String::from_utf8(c.into_inner().into_owned())?;
                    current.children.push(XmlNode::CData(text));
                }
                Event::Comment(c) => {
                    current
                        .children
                        .push(XmlNode::Comment(String::from_utf8_lossy(&c).to_string()));
                }
                // The reader checks end names, so this closes the innermost open element
                Event::End(_) => {
                    let closed = std::mem::take(current);
                    open.pop();
                    match open.last_mut() {
                        Some(parent) => parent.children.push(XmlNode::Element(closed)),
                        None => return Ok(closed),
                    }
                }
                Event::Eof => return Err(XmlError::UnexpectedEof(current.name.clone())),
                _ => {}
            }
            buf.clear();
        }
    }

    fn from_start(start: &BytesStart) -> Result<Self> {
        Ok(Self {
            name: String::from_utf8(start.name().as_ref().to_vec())?,
            attributes: collect_attributes(start)?,
            children: Vec::new(),
            self_closing: false,
        })
    }

    /// Create from empty element tag
    pub fn from_empty(e: &BytesStart) -> Result<Self> {
        Ok(Self {
            name: String::from_utf8(e.name().as_ref().to_vec())?,
            attributes: collect_attributes(e)?,
            children: Vec::new(),
            self_closing: true,
        })
    }

    /// Name without the namespace prefix
    pub fn local_name(&self) -> &str {
        self.name
            .split_once(':')
            .map_or(self.name.as_str(), |(_, local)| local)
    }

    /// Namespace prefix, if the name has one
    pub fn prefix(&self) -> Option<&str> {
        self.name.split_once(':').map(|(prefix, _)| prefix)
    }

    /// Get an attribute value by qualified name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Child elements, skipping text and comments
    pub fn elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(|node| match node {
            XmlNode::Element(e) => Some(e),
            _ => None,
        })
    }

    /// First direct child element with the given qualified name
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.elements().find(|e| e.name == name)
    }

    /// First descendant element (depth-first) with the given qualified name
    pub fn find(&self, name: &str) -> Option<&XmlElement> {
        for child in self.elements() {
            if child.name == name {
                return Some(child);
            }
            if let Some(found) = child.find(name) {
                return Some(found);
            }
        }
        None
    }

    /// All descendant elements with the given qualified name, in document order
    pub fn find_all<'a>(&'a self, name: &str) -> Vec<&'a XmlElement> {
        let mut found = Vec::new();
        self.collect_named(name, &mut found);
        found
    }

    fn collect_named<'a>(&'a self, name: &str, found: &mut Vec<&'a XmlElement>) {
        for child in self.elements() {
            if child.name == name {
                found.push(child);
            }
            child.collect_named(name, found);
        }
    }

    /// Concatenated text of all descendant text and CDATA nodes
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.push_text(&mut out);
        out
    }

    fn push_text(&self, out: &mut String) {
        for node in &self.children {
            match node {
                XmlNode::Text(t) | XmlNode::CData(t) => out.push_str(t),
                XmlNode::Element(e) => e.push_text(out),
                XmlNode::Comment(_) => {}
            }
        }
    }

    /// Add an attribute
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Add a child element
    pub fn with_child(mut self, child: XmlElement) -> Self {
        self.children.push(XmlNode::Element(child));
        self
    }

    /// Add a text child
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(XmlNode::Text(text.into()));
        self
    }
}
