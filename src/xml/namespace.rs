//! XML namespaces used in ODF packages

/// Office namespace (document roots, body, spreadsheet)
pub const OFFICE: &str = "urn:oasis:names:tc:opendocument:xmlns:office:1.0";
/// Metadata namespace
pub const META: &str = "urn:oasis:names:tc:opendocument:xmlns:meta:1.0";
/// Style namespace
pub const STYLE: &str = "urn:oasis:names:tc:opendocument:xmlns:style:1.0";
/// Table namespace
pub const TABLE: &str = "urn:oasis:names:tc:opendocument:xmlns:table:1.0";
/// Text namespace
pub const TEXT: &str = "urn:oasis:names:tc:opendocument:xmlns:text:1.0";
/// Settings (config) namespace
pub const CONFIG: &str = "urn:oasis:names:tc:opendocument:xmlns:config:1.0";
/// Dublin Core namespace
pub const DC: &str = "http://purl.org/dc/elements/1.1/";
/// RDF syntax namespace (manifest.rdf)
pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
/// ODF package metadata namespace (manifest.rdf)
pub const PKG: &str = "http://docs.oasis-open.org/ns/office/1.2/meta/pkg#";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespace_constants() {
        assert!(TABLE.contains("opendocument"));
        assert!(RDF.contains("rdf-syntax"));
    }
}
