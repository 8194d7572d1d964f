//! Error types for ods-reader

use thiserror::Error;

/// Main error type
///
/// Every stage of a read has its own variant so callers can tell an
/// unreadable input apart from a broken archive or a broken entry.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to open ODS file: {0}")]
    Open(#[source] std::io::Error),

    #[error("failed to read input stream: {0}")]
    ReadInput(#[source] std::io::Error),

    #[error("input size mismatch: expected {expected} bytes, read {actual}")]
    SizeMismatch { expected: u64, actual: u64 },

    #[error("invalid ZIP archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("failed to open entry '{name}': {source}")]
    OpenEntry {
        name: String,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("failed to read entry '{name}': {source}")]
    ReadEntry {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode entry '{name}': {source}")]
    DecodeEntry {
        name: String,
        #[source]
        source: XmlError,
    },

    #[error("entry not found: {0}")]
    EntryNotFound(String),
}

impl Error {
    /// Name of the archive entry the error refers to, if any
    pub fn entry_name(&self) -> Option<&str> {
        match self {
            Error::OpenEntry { name, .. }
            | Error::ReadEntry { name, .. }
            | Error::DecodeEntry { name, .. }
            | Error::EntryNotFound(name) => Some(name.as_str()),
            _ => None,
        }
    }
}

/// XML decoding errors
#[derive(Debug, Error)]
pub enum XmlError {
    #[error("XML error: {0}")]
    Syntax(#[from] quick_xml::Error),

    #[error("XML attribute error: {0}")]
    Attr(#[from] quick_xml::events::attributes::AttrError),

    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("no root element")]
    MissingRoot,

    #[error("unexpected end of input inside <{0}>")]
    UnexpectedEof(String),

    #[error("elements nested deeper than {0} levels")]
    TooDeep(usize),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
