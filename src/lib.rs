//! # ods-reader
//!
//! Read OpenDocument Spreadsheet (ODS) packages.
//!
//! ## Features
//!
//! - Decodes `content.xml`, `meta.xml`, `manifest.rdf`, `settings.xml` and
//!   `styles.xml` into XML element trees
//! - Copies the `mimetype` entry verbatim
//! - Hands back the archive for entries outside that set (images, embedded
//!   objects)
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! // Open a spreadsheet
//! let (doc, mut archive) = ods_reader::read("example.ods")?;
//!
//! if let Some(content) = &doc.content {
//!     for table in content.find_all("table:table") {
//!         println!("{:?}", table.attr("table:name"));
//!     }
//! }
//!
//! // Pull an embedded image
//! let thumbnail = archive.read("Thumbnails/thumbnail.png")?;
//! ```

pub mod document;
pub mod error;
pub mod package;
pub mod xml;

pub use document::Document;
pub use error::{Error, Result, XmlError};
pub use package::{Archive, SPREADSHEET_MIMETYPE};
pub use xml::{XmlElement, XmlNode};

use std::io::Read;
use std::path::Path;

/// Read an ODS file, returning the decoded document and its archive
pub fn read<P: AsRef<Path>>(path: P) -> Result<(Document, Archive)> {
    Document::read(path)
}

/// Read an ODS package from a reader that yields exactly `size` bytes
pub fn read_from<R: Read>(reader: R, size: u64) -> Result<(Document, Archive)> {
    Document::read_from(reader, size)
}
