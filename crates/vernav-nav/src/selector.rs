//! Version-selector state.
//!
//! Built once from the fetched manifest and the currently-displayed version.
//! The selector owns everything the dropdown control needs: the rendered
//! options in manifest order, the tracked selection index, the outdated
//! flag, and the latest-version identifier used by the warning banner.

use serde::Serialize;
use vernav_manifest::VersionEntry;

/// One rendered dropdown option.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SelectorOption {
    /// Version identifier, used as the option value.
    pub value: String,
    /// Visible text: `version` or `version (tag)`.
    pub label: String,
}

/// State of the version dropdown.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VersionSelector {
    /// Rendered options in manifest order (hidden entries excluded unless
    /// they are the current version).
    pub options: Vec<SelectorOption>,
    /// Position of the current version among the rendered options. Defaults
    /// to 0 when no entry matches the current version.
    pub selected_index: usize,
    /// The current version's entry is marked as superseded.
    pub outdated: bool,
    /// Identifier of the entry marked `latest`, if any; redirect target for
    /// the outdated banner.
    pub latest_version: Option<String>,
}

impl VersionSelector {
    /// Build the selector from manifest entries and the current version.
    ///
    /// The current entry is matched exactly, falling back to a dot-boundary
    /// prefix match so a patch-level page version like `2.3.1` selects the
    /// manifest entry `2.3`. When nothing matches, the first rendered option
    /// is selected (index 0) — the documented fallback, not a failure.
    #[must_use]
    pub fn build(entries: &[VersionEntry], current_version: &str) -> Self {
        let current = current_entry(entries, current_version);

        let mut options = Vec::new();
        let mut selected_index = 0;
        let mut outdated = false;
        let mut latest_version = None;

        for (index, entry) in entries.iter().enumerate() {
            let is_current = current == Some(index);
            if entry.latest {
                latest_version = Some(entry.version.clone());
            }
            if entry.hidden && !is_current {
                continue;
            }
            if is_current {
                selected_index = options.len();
                outdated = entry.outdated;
            }
            options.push(SelectorOption {
                value: entry.version.clone(),
                label: entry.display_label(),
            });
        }

        Self {
            options,
            selected_index,
            outdated,
            latest_version,
        }
    }
}

/// Index of the manifest entry matching the current version.
///
/// Exact match wins; otherwise the first prefix match in manifest order.
fn current_entry(entries: &[VersionEntry], current_version: &str) -> Option<usize> {
    entries
        .iter()
        .position(|e| e.version == current_version)
        .or_else(|| {
            entries
                .iter()
                .position(|e| matches_prefix(&e.version, current_version))
        })
}

/// Whether `entry_version` is a dot-boundary prefix of `current_version`.
///
/// `2.3` matches `2.3.1` but not `2.30`.
fn matches_prefix(entry_version: &str, current_version: &str) -> bool {
    current_version
        .strip_prefix(entry_version)
        .is_some_and(|rest| rest.starts_with('.'))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn entry(version: &str) -> VersionEntry {
        VersionEntry::new(version)
    }

    #[test]
    fn test_selected_index_matches_entry_position() {
        let entries = vec![entry("3.0"), entry("2.3"), entry("1.0")];
        let selector = VersionSelector::build(&entries, "2.3");

        assert_eq!(selector.selected_index, 1);
        assert_eq!(selector.options[1].value, "2.3");
    }

    #[test]
    fn test_labels_with_and_without_tag() {
        let entries = vec![
            VersionEntry {
                tag: Some("stable".to_owned()),
                ..entry("3.0")
            },
            entry("2.3"),
        ];
        let selector = VersionSelector::build(&entries, "3.0");

        assert_eq!(selector.options[0].label, "3.0 (stable)");
        assert_eq!(selector.options[1].label, "2.3");
    }

    #[test]
    fn test_hidden_entry_excluded() {
        let entries = vec![
            entry("3.0"),
            VersionEntry {
                hidden: true,
                ..entry("2.9-beta")
            },
            entry("2.3"),
        ];
        let selector = VersionSelector::build(&entries, "2.3");

        let values: Vec<&str> = selector.options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["3.0", "2.3"]);
        // Index counts rendered options only, so "2.3" sits at 1, not 2.
        assert_eq!(selector.selected_index, 1);
    }

    #[test]
    fn test_hidden_entry_rendered_when_current() {
        let entries = vec![
            entry("3.0"),
            VersionEntry {
                hidden: true,
                ..entry("2.9-beta")
            },
        ];
        let selector = VersionSelector::build(&entries, "2.9-beta");

        let values: Vec<&str> = selector.options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["3.0", "2.9-beta"]);
        assert_eq!(selector.selected_index, 1);
    }

    #[test]
    fn test_prefix_match_selects_entry() {
        let entries = vec![entry("3.0"), entry("2.3")];
        let selector = VersionSelector::build(&entries, "2.3.1");
        assert_eq!(selector.selected_index, 1);
    }

    #[test]
    fn test_prefix_match_requires_dot_boundary() {
        assert!(matches_prefix("2.3", "2.3.1"));
        assert!(!matches_prefix("2.3", "2.30"));
        assert!(!matches_prefix("2.3", "2.3"));
    }

    #[test]
    fn test_exact_match_beats_earlier_prefix_match() {
        let entries = vec![entry("2.3"), entry("2.3.1")];
        let selector = VersionSelector::build(&entries, "2.3.1");
        assert_eq!(selector.selected_index, 1);
    }

    #[test]
    fn test_no_match_falls_back_to_first_option() {
        let entries = vec![entry("3.0"), entry("2.3")];
        let selector = VersionSelector::build(&entries, "9.9");

        assert_eq!(selector.selected_index, 0);
        assert!(!selector.outdated);
    }

    #[test]
    fn test_outdated_flag_from_current_entry() {
        let entries = vec![
            VersionEntry {
                latest: true,
                ..entry("4.0")
            },
            VersionEntry {
                outdated: true,
                ..entry("2.3")
            },
        ];
        let selector = VersionSelector::build(&entries, "2.3");

        assert!(selector.outdated);
        assert_eq!(selector.latest_version.as_deref(), Some("4.0"));
    }

    #[test]
    fn test_outdated_flag_ignores_other_entries() {
        let entries = vec![
            VersionEntry {
                outdated: true,
                ..entry("1.0")
            },
            entry("2.3"),
        ];
        let selector = VersionSelector::build(&entries, "2.3");
        assert!(!selector.outdated);
    }

    #[test]
    fn test_latest_tracked_even_when_hidden() {
        let entries = vec![
            VersionEntry {
                latest: true,
                hidden: true,
                ..entry("4.0-rc")
            },
            entry("2.3"),
        ];
        let selector = VersionSelector::build(&entries, "2.3");

        assert_eq!(selector.latest_version.as_deref(), Some("4.0-rc"));
        assert_eq!(selector.options.len(), 1);
    }

    #[test]
    fn test_empty_manifest() {
        let selector = VersionSelector::build(&[], "1.0");
        assert!(selector.options.is_empty());
        assert_eq!(selector.selected_index, 0);
        assert!(selector.latest_version.is_none());
    }
}
