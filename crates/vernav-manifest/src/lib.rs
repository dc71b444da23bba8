//! Version manifest support for the version navigator.
//!
//! A documentation site publishes every version of its manual side by side
//! under a common URL prefix. One level above the per-version roots lives a
//! JSON manifest (`_versions.json`) listing all published versions and their
//! metadata. This crate provides:
//!
//! - [`VersionEntry`]: one manifest record
//! - [`parse_manifest`]: strict JSON parsing for callers that want the cause
//! - [`fetch_manifest`]: the fail-open HTTP fetch returning [`ManifestOutcome`]
//!
//! # Manifest Format
//!
//! ```json
//! [
//!   { "version": "4.0", "tag": "stable", "latest": true },
//!   { "version": "3.0", "outdated": true },
//!   { "version": "2.3", "tag": "dev", "hidden": true }
//! ]
//! ```
//!
//! All fields except `version` are optional; unknown fields are ignored.

mod fetch;

use serde::{Deserialize, Serialize};

pub use fetch::{ManifestOutcome, create_agent, fetch_manifest};

/// Filename of the version manifest, relative to the version root's parent.
pub const MANIFEST_FILENAME: &str = "_versions.json";

/// One published documentation version as listed in the manifest.
///
/// Optional booleans default to `false` when absent, so a minimal entry is
/// just `{"version": "1.0"}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionEntry {
    /// Version identifier (e.g. "2.3"), unique within the manifest.
    pub version: String,

    /// Human-readable label appended to the displayed name (e.g. "stable").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    /// Redirect target for outdated pages. At most one entry should be marked.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub latest: bool,

    /// Marks a superseded version; triggers the warning banner when viewed.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub outdated: bool,

    /// Excluded from the rendered option list unless currently viewed.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub hidden: bool,
}

impl VersionEntry {
    /// Create an entry with only a version identifier set.
    #[must_use]
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            tag: None,
            latest: false,
            outdated: false,
            hidden: false,
        }
    }

    /// Display label for the selector: `version`, suffixed with `" (tag)"`
    /// when a tag is present.
    #[must_use]
    pub fn display_label(&self) -> String {
        match &self.tag {
            Some(tag) => format!("{} ({tag})", self.version),
            None => self.version.clone(),
        }
    }
}

/// Error type for manifest operations.
///
/// The fetch path deliberately discards these (see [`fetch_manifest`]); the
/// error type exists for callers that load a manifest directly, such as the
/// CLI reading a local file.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    /// Malformed manifest JSON.
    #[error("invalid manifest JSON: {0}")]
    Parse(#[from] serde_json::Error),
    /// I/O error reading a local manifest file.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// HTTP-level failure (transport error or error status).
    #[error("HTTP error: {0}")]
    Http(String),
}

/// Parse a manifest from JSON content.
///
/// # Errors
///
/// Returns [`ManifestError::Parse`] if the content is not a JSON array of
/// version entries.
pub fn parse_manifest(content: &str) -> Result<Vec<VersionEntry>, ManifestError> {
    Ok(serde_json::from_str(content)?)
}

/// Compose the manifest location from the configured root reference.
///
/// The manifest lives one level above the per-version roots, so the location
/// is the root reference with `../_versions.json` appended. The root
/// reference is used as-is; it conventionally ends with a separator
/// (e.g. `"../../"` yields `"../../../_versions.json"`).
#[must_use]
pub fn manifest_location(url_root: &str) -> String {
    format!("{url_root}../{MANIFEST_FILENAME}")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_minimal_entry() {
        let manifest = parse_manifest(r#"[{"version": "1.0"}]"#).unwrap();
        assert_eq!(manifest, vec![VersionEntry::new("1.0")]);
    }

    #[test]
    fn test_parse_all_fields() {
        let json = r#"[
            {"version": "4.0", "tag": "stable", "latest": true},
            {"version": "3.0", "outdated": true},
            {"version": "2.3", "tag": "dev", "hidden": true}
        ]"#;
        let manifest = parse_manifest(json).unwrap();

        assert_eq!(manifest.len(), 3);
        assert_eq!(manifest[0].version, "4.0");
        assert_eq!(manifest[0].tag.as_deref(), Some("stable"));
        assert!(manifest[0].latest);
        assert!(!manifest[0].outdated);
        assert!(manifest[1].outdated);
        assert!(manifest[2].hidden);
    }

    #[test]
    fn test_parse_unknown_fields_ignored() {
        let json = r#"[{"version": "1.0", "release_date": "2020-01-01"}]"#;
        let manifest = parse_manifest(json).unwrap();
        assert_eq!(manifest[0].version, "1.0");
    }

    #[test]
    fn test_parse_empty_array() {
        let manifest = parse_manifest("[]").unwrap();
        assert!(manifest.is_empty());
    }

    #[test]
    fn test_parse_not_an_array() {
        let result = parse_manifest(r#"{"version": "1.0"}"#);
        assert!(matches!(result, Err(ManifestError::Parse(_))));
    }

    #[test]
    fn test_parse_missing_version_field() {
        let result = parse_manifest(r#"[{"tag": "stable"}]"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_display_label_without_tag() {
        let entry = VersionEntry::new("2.3");
        assert_eq!(entry.display_label(), "2.3");
    }

    #[test]
    fn test_display_label_with_tag() {
        let entry = VersionEntry {
            tag: Some("stable".to_owned()),
            ..VersionEntry::new("2.3")
        };
        assert_eq!(entry.display_label(), "2.3 (stable)");
    }

    #[test]
    fn test_manifest_location() {
        assert_eq!(manifest_location("../../"), "../../../_versions.json");
        assert_eq!(manifest_location("../"), "../../_versions.json");
    }

    #[test]
    fn test_serialize_skips_default_flags() {
        let json = serde_json::to_string(&VersionEntry::new("1.0")).unwrap();
        assert_eq!(json, r#"{"version":"1.0"}"#);
    }
}
