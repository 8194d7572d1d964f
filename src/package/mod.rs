//! ODS package (ZIP archive) access
//!
//! This module buffers the package bytes and exposes them as a random-access
//! ZIP container.

mod archive;
pub mod entries;

pub use archive::Archive;
pub use entries::SPREADSHEET_MIMETYPE;
