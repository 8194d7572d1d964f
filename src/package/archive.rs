//! Buffered ZIP container over the package bytes

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::path::Path;
use zip::read::ZipArchive;
use zip::result::ZipError;

/// A random-access view over the entries of an ODS package
///
/// The archive owns an in-memory copy of the package, so it stays usable
/// after the input stream it was read from is gone. Dropping it releases
/// the buffer.
#[derive(Clone, Debug)]
pub struct Archive {
    /// Indexed ZIP container over the buffered bytes
    zip: ZipArchive<Cursor<Vec<u8>>>,
    /// Size of the buffered package in bytes
    size: u64,
}

impl Archive {
    /// Open a package from a file path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path).map_err(Error::Open)?;
        let size = file.metadata().map_err(Error::Open)?.len();
        Self::from_reader(BufReader::new(file), size)
    }

    /// Open a package from a reader that yields exactly `size` bytes
    ///
    /// The whole stream is copied into memory first: the ZIP index lives at
    /// the end of the data, so random access needs the complete package.
    /// At most `size + 1` bytes are read, enough to detect a longer stream.
    pub fn from_reader<R: Read>(reader: R, size: u64) -> Result<Self> {
        let mut buf = Vec::new();
        reader
            .take(size.saturating_add(1))
            .read_to_end(&mut buf)
            .map_err(Error::ReadInput)?;

        let actual = buf.len() as u64;
        if actual != size {
            return Err(Error::SizeMismatch {
                expected: size,
                actual,
            });
        }

        Self::from_bytes(buf)
    }

    /// Open a package from bytes
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Result<Self> {
        let bytes = bytes.into();
        let size = bytes.len() as u64;
        let zip = ZipArchive::new(Cursor::new(bytes))?;

        log::debug!("opened package: {} entries, {} bytes", zip.len(), size);

        Ok(Self { zip, size })
    }

    /// Number of entries in the archive
    pub fn len(&self) -> usize {
        self.zip.len()
    }

    /// Check if the archive has no entries
    pub fn is_empty(&self) -> bool {
        self.zip.len() == 0
    }

    /// Size of the buffered package in bytes
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Entry names in the archive's listing order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        (0..self.zip.len()).filter_map(move |i| self.zip.name_for_index(i))
    }

    /// Name of the entry at `index` in listing order
    pub fn name_at(&self, index: usize) -> Option<&str> {
        self.zip.name_for_index(index)
    }

    /// Check if an entry exists
    pub fn contains(&self, name: &str) -> bool {
        self.zip.index_for_name(name).is_some()
    }

    /// Open an entry by name for streaming reads
    ///
    /// The returned reader borrows the archive and is released when dropped.
    pub fn by_name(&mut self, name: &str) -> Result<impl Read + '_> {
        self.zip.by_name(name).map_err(|err| match err {
            ZipError::FileNotFound => Error::EntryNotFound(name.to_string()),
            source => Error::OpenEntry {
                name: name.to_string(),
                source,
            },
        })
    }

    /// Open the entry at `index` for streaming reads
    pub fn by_index(&mut self, index: usize) -> Result<impl Read + '_> {
        let name = self
            .zip
            .name_for_index(index)
            .map_or_else(|| format!("#{}", index), str::to_string);

        self.zip
            .by_index(index)
            .map_err(|source| Error::OpenEntry { name, source })
    }

    /// Read the full contents of an entry
    pub fn read(&mut self, name: &str) -> Result<Vec<u8>> {
        let mut entry = self.by_name(name)?;
        let mut data = Vec::new();
        entry
            .read_to_end(&mut data)
            .map_err(|source| Error::ReadEntry {
                name: name.to_string(),
                source,
            })?;
        Ok(data)
    }

    /// Read an entry as a UTF-8 string
    pub fn read_to_string(&mut self, name: &str) -> Result<String> {
        let data = self.read(name)?;
        String::from_utf8(data).map_err(|err| Error::DecodeEntry {
            name: name.to_string(),
            source: err.into(),
        })
    }

    /// Give back the buffered package bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.zip.into_inner().into_inner()
    }
}
