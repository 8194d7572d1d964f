//! Entry dispatch: routes each well-known archive entry to its decoder

use super::Document;
use crate::error::{Error, Result, XmlError};
use crate::package::{entries, Archive};
use crate::xml::{self, XmlElement};
use std::io::{self, BufReader, Read};
use std::sync::Arc;

/// Document field filled from an XML entry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum XmlField {
    Content,
    Metadata,
    Manifest,
    Settings,
    Styles,
}

impl XmlField {
    fn slot(self, doc: &mut Document) -> &mut Option<XmlElement> {
        match self {
            XmlField::Content => &mut doc.content,
            XmlField::Metadata => &mut doc.metadata,
            XmlField::Manifest => &mut doc.manifest,
            XmlField::Settings => &mut doc.settings,
            XmlField::Styles => &mut doc.styles,
        }
    }
}

/// Document field filled verbatim from an entry's bytes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RawField {
    Mimetype,
}

impl RawField {
    fn slot(self, doc: &mut Document) -> &mut String {
        match self {
            RawField::Mimetype => &mut doc.mimetype,
        }
    }
}

/// How a recognized entry is decoded
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Handler {
    /// Decode as XML into an element tree
    Xml(XmlField),
    /// Copy the bytes as a UTF-8 string
    Raw(RawField),
}

/// Entry name to handler, matched exactly
const HANDLERS: &[(&str, Handler)] = &[
    (entries::CONTENT, Handler::Xml(XmlField::Content)),
    (entries::META, Handler::Xml(XmlField::Metadata)),
    (entries::MANIFEST, Handler::Xml(XmlField::Manifest)),
    (entries::SETTINGS, Handler::Xml(XmlField::Settings)),
    (entries::STYLES, Handler::Xml(XmlField::Styles)),
    (entries::MIMETYPE, Handler::Raw(RawField::Mimetype)),
];

fn handler_for(name: &str) -> Option<Handler> {
    HANDLERS
        .iter()
        .find(|(entry, _)| *entry == name)
        .map(|(_, handler)| *handler)
}

/// Classify an XML entry failure: I/O from the entry stream is a read
/// failure, everything else a decode failure
fn xml_entry_error(name: &str, source: XmlError) -> Error {
    match source {
        XmlError::Syntax(quick_xml::Error::Io(err)) => Error::ReadEntry {
            name: name.to_string(),
            source: Arc::try_unwrap(err)
                .unwrap_or_else(|shared| io::Error::new(shared.kind(), shared.to_string())),
        },
        source => Error::DecodeEntry {
            name: name.to_string(),
            source,
        },
    }
}

/// Decode every recognized entry of the archive, in listing order
///
/// Any failure aborts the whole read. A known name listed twice keeps the
/// value of the last occurrence.
pub(super) fn decode_entries(archive: &mut Archive) -> Result<Document> {
    let mut doc = Document::default();

    for index in 0..archive.len() {
        let name = archive
            .name_at(index)
            .map_or_else(|| format!("#{}", index), str::to_string);

        // Dropped at the end of each iteration, including on early return
        let mut entry = archive.by_index(index)?;

        match handler_for(&name) {
            Some(Handler::Xml(field)) => {
                log::debug!("decoding XML entry '{}'", name);
                let tree = xml::parse_element(BufReader::new(&mut entry))
                    .map_err(|source| xml_entry_error(&name, source))?;
                *field.slot(&mut doc) = Some(tree);
            }
            Some(Handler::Raw(field)) => {
                log::debug!("reading raw entry '{}'", name);
                let mut data = Vec::new();
                entry
                    .read_to_end(&mut data)
                    .map_err(|source| Error::ReadEntry {
                        name: name.clone(),
                        source,
                    })?;
                *field.slot(&mut doc) =
                    String::from_utf8(data).map_err(|err| Error::DecodeEntry {
                        name: name.clone(),
                        source: err.into(),
                    })?;
            }
            None => log::trace!("ignoring entry '{}'", name),
        }
    }

    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_covers_known_entries() {
        for name in entries::KNOWN {
            assert!(handler_for(name).is_some(), "no handler for {}", name);
        }
        assert_eq!(HANDLERS.len(), entries::KNOWN.len());
    }

    #[test]
    fn test_handler_lookup() {
        assert_eq!(
            handler_for("content.xml"),
            Some(Handler::Xml(XmlField::Content))
        );
        assert_eq!(
            handler_for("mimetype"),
            Some(Handler::Raw(RawField::Mimetype))
        );
        assert_eq!(handler_for("META-INF/manifest.xml"), None);
        assert_eq!(handler_for("Styles.xml"), None);
    }

    #[test]
    fn test_entry_error_stage() {
        let io_err = quick_xml::Error::Io(Arc::new(io::Error::new(
            io::ErrorKind::InvalidData,
            "corrupt deflate stream",
        )));
        let err = xml_entry_error("content.xml", XmlError::Syntax(io_err));
        assert!(matches!(
            err,
            Error::ReadEntry { ref name, ref source }
                if name == "content.xml" && source.kind() == io::ErrorKind::InvalidData
        ));

        let err = xml_entry_error("styles.xml", XmlError::MissingRoot);
        assert!(matches!(err, Error::DecodeEntry { ref name, .. } if name == "styles.xml"));
    }

    #[test]
    fn test_slots() {
        let mut doc = Document::default();
        *XmlField::Styles.slot(&mut doc) = Some(XmlElement::new("office:document-styles"));
        *RawField::Mimetype.slot(&mut doc) = "m".to_string();

        assert_eq!(doc.styles.as_ref().unwrap().name, "office:document-styles");
        assert_eq!(doc.mimetype, "m");
        assert!(doc.content.is_none());
    }
}
