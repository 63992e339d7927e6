//! Record bundle wire models and translation helpers.
//!
//! A record bundle is a single JSON payload carrying every entry the patient
//! list works from:
//!
//! ```json
//! { "entry": [ { "fullUrl": "...", "resource": { "name": [...] },
//!               "response": { "lastModified": "..." } } ] }
//! ```
//!
//! Responsibilities:
//! - Define the wire model for deserialisation
//! - Translate wire entries into domain [`RecordEntry`] values
//! - Derive each entry's identifier from the trailing `fullUrl` path segment
//!
//! Notes:
//! - Bundles come from foreign systems, so parsing is deliberately tolerant:
//!   unknown keys are ignored and missing optional fields fall back to
//!   defaults. Only structurally invalid JSON is rejected.
//! - The record set is read-only for the session; entries are never mutated
//!   after load.

use crate::name::DisplayName;
use crate::{parse_with_path, BundleError, BundleResult};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::path::Path;

// ============================================================================
// Public domain-level types
// ============================================================================

/// One clinical-record item from a bundle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordEntry {
    /// Identifier derived from the trailing path segment of `fullUrl`.
    /// Always extractable; a malformed URL yields whatever follows the last
    /// slash, possibly the whole string or an empty one.
    pub id: String,

    /// Name variants, in payload order. May be empty.
    pub names: Vec<HumanName>,

    /// Raw `response.lastModified` timestamp, if present. Kept verbatim so an
    /// unparseable value still renders as-is instead of disappearing.
    pub last_modified: Option<String>,
}

/// One name variant of a record.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HumanName {
    /// Family name (surname).
    pub family: Option<String>,
    /// Given names (first name, middle names).
    pub given: Vec<String>,
}

impl RecordEntry {
    /// Derive the display name for this entry.
    pub fn display_name(&self) -> DisplayName {
        DisplayName::from_names(&self.names)
    }

    /// Render `last_modified` for display.
    ///
    /// A parseable RFC 3339 timestamp is reformatted as `YYYY-MM-DD HH:MM:SS`
    /// UTC; anything else is shown verbatim, and absence renders as `N/A`.
    pub fn last_modified_display(&self) -> String {
        match self.last_modified.as_deref() {
            None => "N/A".to_string(),
            Some(raw) => match raw.parse::<DateTime<Utc>>() {
                Ok(ts) => ts.format("%Y-%m-%d %H:%M:%S").to_string(),
                Err(_) => raw.to_string(),
            },
        }
    }
}

// ============================================================================
// Public Bundle operations
// ============================================================================

/// Record bundle operations.
///
/// This is a zero-sized type used for namespacing bundle-related operations.
/// All methods are associated functions.
pub struct Bundle;

impl Bundle {
    /// Parse a record bundle from JSON text.
    ///
    /// This uses `serde_path_to_error` to surface a best-effort "path" (e.g.
    /// `entry.1.resource.name`) to the failing field when the JSON does not
    /// match the wire schema.
    ///
    /// # Arguments
    ///
    /// * `json_text` - JSON text expected to represent a record bundle.
    ///
    /// # Returns
    ///
    /// Returns the bundle's entries as domain [`RecordEntry`] values, in
    /// payload order.
    ///
    /// # Errors
    ///
    /// Returns [`BundleError`] if:
    /// - the text is not valid JSON or a field has an unexpected type
    ///   ([`BundleError::Parse`]),
    /// - the `entry` collection is missing or empty
    ///   ([`BundleError::EmptyBundle`]).
    pub fn parse(json_text: &str) -> BundleResult<Vec<RecordEntry>> {
        let wire: BundleWire = parse_with_path(json_text)?;

        if wire.entry.is_empty() {
            return Err(BundleError::EmptyBundle);
        }

        Ok(wire.entry.into_iter().map(entry_to_domain).collect())
    }

    /// Read and parse a record bundle from a file.
    ///
    /// # Errors
    ///
    /// Returns [`BundleError::Io`] if the file cannot be read, otherwise the
    /// same errors as [`Bundle::parse`].
    pub fn load(path: &Path) -> BundleResult<Vec<RecordEntry>> {
        let text = std::fs::read_to_string(path)?;
        Bundle::parse(&text)
    }
}

// ============================================================================
// Wire types (internal)
// ============================================================================

/// Wire representation of a record bundle.
///
/// Unknown keys (e.g. `resourceType`, `type`) are ignored rather than
/// rejected; this payload is produced by systems we do not control.
#[derive(Debug, Deserialize)]
struct BundleWire {
    #[serde(default)]
    pub entry: Vec<EntryWire>,
}

/// Wire representation of one bundle entry.
#[derive(Debug, Deserialize)]
struct EntryWire {
    #[serde(rename = "fullUrl", default)]
    pub full_url: String,

    #[serde(default)]
    pub resource: ResourceWire,

    #[serde(default)]
    pub response: Option<ResponseWire>,
}

/// Wire representation of the demographic resource inside an entry.
#[derive(Debug, Default, Deserialize)]
struct ResourceWire {
    #[serde(default)]
    pub name: Vec<HumanNameWire>,
}

/// Wire representation of a human name.
#[derive(Debug, Deserialize)]
struct HumanNameWire {
    #[serde(default)]
    pub family: Option<String>,

    #[serde(default)]
    pub given: Vec<String>,
}

/// Wire representation of the per-entry response metadata.
#[derive(Debug, Deserialize)]
struct ResponseWire {
    #[serde(rename = "lastModified", default)]
    pub last_modified: Option<String>,
}

// ============================================================================
// Helper functions (internal)
// ============================================================================

/// Extract an entry identifier from its `fullUrl`.
///
/// Takes the trailing path segment, the same as splitting on `/` and keeping
/// the last piece. Never fails: a URL with no slashes is its own identifier
/// and an empty URL yields an empty identifier.
fn id_from_full_url(full_url: &str) -> String {
    full_url.rsplit('/').next().unwrap_or("").to_string()
}

/// Convert a wire entry into the domain representation.
fn entry_to_domain(wire: EntryWire) -> RecordEntry {
    let id = id_from_full_url(&wire.full_url);
    if id.is_empty() {
        tracing::warn!(full_url = %wire.full_url, "bundle entry has no usable identifier");
    }

    RecordEntry {
        id,
        names: wire
            .resource
            .name
            .into_iter()
            .map(|n| HumanName {
                family: n.family,
                given: n.given,
            })
            .collect(),
        last_modified: wire.response.and_then(|r| r.last_modified),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::name::NO_NAME_PROVIDED;

    #[test]
    fn parses_sample_bundle() {
        let input = r#"{
            "resourceType": "Bundle",
            "type": "searchset",
            "entry": [
                {
                    "fullUrl": "https://fhir.example.org/Patient/1",
                    "resource": { "name": [{ "family": "Smith", "given": ["Ann"] }] },
                    "response": { "lastModified": "2026-01-23T13:58:04Z" }
                },
                {
                    "fullUrl": "https://fhir.example.org/Patient/2",
                    "resource": { "name": [] }
                }
            ]
        }"#;

        let entries = Bundle::parse(input).expect("parse bundle");
        assert_eq!(entries.len(), 2);

        assert_eq!(entries[0].id, "1");
        let first = entries[0].display_name();
        assert_eq!(first.family, "Smith");
        assert_eq!(first.given, "Ann");

        assert_eq!(entries[1].id, "2");
        let second = entries[1].display_name();
        assert_eq!(second.family, NO_NAME_PROVIDED);
        assert_eq!(second.given, NO_NAME_PROVIDED);
        assert!(entries[1].last_modified.is_none());
    }

    #[test]
    fn empty_entry_collection_is_an_empty_bundle() {
        let err = Bundle::parse(r#"{ "entry": [] }"#).expect_err("must report empty bundle");
        assert!(matches!(err, BundleError::EmptyBundle));
        assert_eq!(err.to_string(), "No patient data available");
    }

    #[test]
    fn missing_entry_collection_is_an_empty_bundle() {
        let err = Bundle::parse(r#"{ "resourceType": "Bundle" }"#)
            .expect_err("must report empty bundle");
        assert!(matches!(err, BundleError::EmptyBundle));
    }

    #[test]
    fn malformed_json_reports_parse_error() {
        let err = Bundle::parse("{ not json").expect_err("must reject malformed JSON");
        assert!(matches!(err, BundleError::Parse(_)));
    }

    #[test]
    fn wrong_field_type_reports_path_to_field() {
        let input = r#"{ "entry": [ { "fullUrl": "x/1", "resource": { "name": "oops" } } ] }"#;
        let err = Bundle::parse(input).expect_err("must reject wrong type");
        match err {
            BundleError::Parse(msg) => assert!(msg.contains("name"), "message was: {msg}"),
            other => panic!("expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn entry_without_optional_fields_degrades() {
        let entries = Bundle::parse(r#"{ "entry": [ {} ] }"#).expect("parse minimal entry");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, "");
        assert!(entries[0].names.is_empty());
        assert_eq!(entries[0].last_modified_display(), "N/A");
    }

    #[test]
    fn id_is_the_trailing_url_segment() {
        assert_eq!(id_from_full_url("https://h.org/fhir/Patient/abc-123"), "abc-123");
        assert_eq!(id_from_full_url("no-slashes"), "no-slashes");
        assert_eq!(id_from_full_url("trailing/slash/"), "");
        assert_eq!(id_from_full_url(""), "");
    }

    #[test]
    fn last_modified_display_is_lenient() {
        let mut entry = RecordEntry {
            id: "1".to_string(),
            names: vec![],
            last_modified: Some("2026-01-23T13:58:04Z".to_string()),
        };
        assert_eq!(entry.last_modified_display(), "2026-01-23 13:58:04");

        entry.last_modified = Some("yesterday-ish".to_string());
        assert_eq!(entry.last_modified_display(), "yesterday-ish");

        entry.last_modified = None;
        assert_eq!(entry.last_modified_display(), "N/A");
    }

    #[test]
    fn loads_bundle_from_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("bundle.json");
        std::fs::write(
            &path,
            r#"{ "entry": [ { "fullUrl": "x/9", "resource": { "name": [] } } ] }"#,
        )
        .expect("write fixture");

        let entries = Bundle::load(&path).expect("load bundle");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, "9");
    }

    #[test]
    fn load_reports_io_error_for_missing_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let err = Bundle::load(&dir.path().join("missing.json")).expect_err("no such file");
        assert!(matches!(err, BundleError::Io(_)));
    }
}
