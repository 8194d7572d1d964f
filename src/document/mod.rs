//! Document model - the decoded entries of an ODS package

mod reader;

use crate::error::Result;
use crate::package::{Archive, SPREADSHEET_MIMETYPE};
use crate::xml::XmlElement;
use std::io::Read;
use std::path::Path;

/// The decoded contents of an ODS package
///
/// Each field corresponds to one well-known archive entry. A field stays at
/// its default (`None` or an empty string) when the entry is absent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Document {
    /// `content.xml`: spreadsheet content
    pub content: Option<XmlElement>,
    /// `meta.xml`: package metadata
    pub metadata: Option<XmlElement>,
    /// `manifest.rdf`: RDF package manifest
    pub manifest: Option<XmlElement>,
    /// `settings.xml`: application settings
    pub settings: Option<XmlElement>,
    /// `styles.xml`: style definitions
    pub styles: Option<XmlElement>,
    /// `mimetype`: verbatim contents of the media type entry
    pub mimetype: String,
}

impl Document {
    /// Read a package from a file path
    ///
    /// Returns the decoded document together with the archive, which the
    /// caller can use to reach entries the document does not model.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<(Self, Archive)> {
        let archive = Archive::open(path)?;
        Self::from_archive(archive)
    }

    /// Read a package from a reader that yields exactly `size` bytes
    pub fn read_from<R: Read>(reader: R, size: u64) -> Result<(Self, Archive)> {
        let archive = Archive::from_reader(reader, size)?;
        Self::from_archive(archive)
    }

    /// Read a package from bytes
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Result<(Self, Archive)> {
        let archive = Archive::from_bytes(bytes)?;
        Self::from_archive(archive)
    }

    /// Decode the well-known entries of an opened archive
    ///
    /// The archive is handed back on success and dropped on failure.
    pub fn from_archive(mut archive: Archive) -> Result<(Self, Archive)> {
        let document = reader::decode_entries(&mut archive)?;
        Ok((document, archive))
    }

    /// Check if no well-known entry was present
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Check if the mimetype entry marks a spreadsheet package
    pub fn is_spreadsheet(&self) -> bool {
        self.mimetype == SPREADSHEET_MIMETYPE
    }

    /// ODF version declared on the content root (`office:version`)
    pub fn office_version(&self) -> Option<&str> {
        self.content.as_ref()?.attr("office:version")
    }
}
