//! XML decoding into a generic element tree
//!
//! Every XML entry of an ODS package is decoded into an [`XmlElement`]
//! rooted at the entry's document element.

mod namespace;
mod tree;

pub use namespace::*;
pub use tree::{XmlElement, XmlNode};

use crate::error::XmlError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::io::BufRead;

/// Result type for XML decoding
pub type Result<T> = std::result::Result<T, XmlError>;

/// Maximum element nesting depth accepted by the decoder
pub const MAX_DEPTH: usize = 1_000;

/// Decode the root element of an XML document
///
/// The prolog (declaration, comments, processing instructions, doctype) is
/// skipped. Decoding stops once the root element is closed; anything after it
/// is not inspected.
pub fn parse_element<R: BufRead>(input: R) -> Result<XmlElement> {
    let mut reader = Reader::from_reader(input);

    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => return XmlElement::from_reader(&mut reader, &e),
            Event::Empty(e) => return XmlElement::from_empty(&e),
            Event::Eof => return Err(XmlError::MissingRoot),
            _ => {}
        }
        buf.clear();
    }
}

/// Decode the root element of an XML string
pub fn parse_str(xml: &str) -> Result<XmlElement> {
    parse_element(xml.as_bytes())
}

/// Collect all attributes of a tag as unescaped (name, value) pairs
pub fn collect_attributes(element: &BytesStart) -> Result<Vec<(String, String)>> {
    let mut attributes = Vec::new();
    for attr in element.attributes() {
        let attr = attr?;
        let key = String::from_utf8(attr.key.as_ref().to_vec())?;
        let value = attr.unescape_value()?.into_owned();
        attributes.push((key, value));
    }
    Ok(attributes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skips_prolog() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<!-- generated -->
<office:document-meta xmlns:office="urn:oasis:names:tc:opendocument:xmlns:office:1.0"/>"#;
        let root = parse_str(xml).unwrap();
        assert_eq!(root.name, "office:document-meta");
        assert!(root.self_closing);
        assert_eq!(root.attr("xmlns:office"), Some(OFFICE));
    }

    #[test]
    fn test_missing_root() {
        let err = parse_str(r#"<?xml version="1.0"?>"#).unwrap_err();
        assert!(matches!(err, XmlError::MissingRoot));

        let err = parse_str("").unwrap_err();
        assert!(matches!(err, XmlError::MissingRoot));
    }

    #[test]
    fn test_unclosed_root() {
        let err = parse_str("<a><b/>").unwrap_err();
        assert!(matches!(err, XmlError::UnexpectedEof(ref name) if name == "a"));
    }

    #[test]
    fn test_mismatched_end_tag() {
        let err = parse_str("<a><b></a>").unwrap_err();
        assert!(matches!(err, XmlError::Syntax(_)));
    }

    #[test]
    fn test_attributes_unescaped() {
        let root = parse_str(r#"<x a="1 &lt; 2" b='q'/>"#).unwrap();
        assert_eq!(
            root.attributes,
            vec![
                ("a".to_string(), "1 < 2".to_string()),
                ("b".to_string(), "q".to_string())
            ]
        );
    }

    #[test]
    fn test_trailing_content_ignored() {
        let root = parse_str("<a/><b/>").unwrap();
        assert_eq!(root.name, "a");
    }
}
