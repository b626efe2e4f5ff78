//! Wire structures for the remote file listing payload.

use anyhow::{Context, Result};
use serde::Deserialize;

/// One file entry as returned by the listing endpoint.
///
/// Every field tolerates absence: a record missing `name` deserializes with an
/// empty name and is simply never matched by the resolver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FileRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// Parses a listing body. The body must be a JSON array of file records;
/// anything else is an error the caller degrades on.
pub fn parse_listing(bytes: &[u8]) -> Result<Vec<FileRecord>> {
    serde_json::from_slice(bytes).context("parse listing JSON (expected an array of file records)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_records() {
        let body = br#"[
            {"id": "1", "name": "CAPA_site.jpg", "url": "https://files.example.studio/1"},
            {"id": "2", "name": "ART_HOME_1.jpg", "url": "https://files.example.studio/2"}
        ]"#;
        let records = parse_listing(body).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "CAPA_site.jpg");
        assert_eq!(records[1].id, "2");
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let body = br#"[{"id": "1", "url": "https://files.example.studio/1"}, {}]"#;
        let records = parse_listing(body).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "");
        assert_eq!(records[1], FileRecord::default());
    }

    #[test]
    fn empty_array_is_valid() {
        assert!(parse_listing(b"[]").unwrap().is_empty());
    }

    #[test]
    fn non_array_body_is_an_error() {
        assert!(parse_listing(br#"{"error": "not found"}"#).is_err());
        assert!(parse_listing(b"<html>oops</html>").is_err());
        assert!(parse_listing(b"").is_err());
    }
}
