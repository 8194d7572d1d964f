//! Well-known entry names of an ODS package

/// Spreadsheet content
pub const CONTENT: &str = "content.xml";
/// Package metadata
pub const META: &str = "meta.xml";
/// RDF package manifest
pub const MANIFEST: &str = "manifest.rdf";
/// Application settings
pub const SETTINGS: &str = "settings.xml";
/// Style definitions
pub const STYLES: &str = "styles.xml";
/// Raw media type marker (not XML)
pub const MIMETYPE: &str = "mimetype";

/// All entry names the reader recognizes, matched exactly and case-sensitively
pub const KNOWN: [&str; 6] = [CONTENT, META, MANIFEST, SETTINGS, STYLES, MIMETYPE];

/// Media type stored in the `mimetype` entry of a spreadsheet package
pub const SPREADSHEET_MIMETYPE: &str = "application/vnd.oasis.opendocument.spreadsheet";

/// Check whether an entry name is one of the recognized entries
pub fn is_known(name: &str) -> bool {
    KNOWN.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_known() {
        assert!(is_known("content.xml"));
        assert!(is_known("mimetype"));
        assert!(!is_known("Content.xml"));
        assert!(!is_known("META-INF/manifest.xml"));
        assert!(!is_known("Pictures/image1.png"));
    }
}
