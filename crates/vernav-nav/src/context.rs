//! Navigation context derivation.
//!
//! Every version of the manual is published under a common prefix (the
//! *version root*), one directory per version:
//!
//! ```text
//! /docs/1.9/guide/intro.html
//! /docs/1.10/guide/intro.html
//! ^^^^^      ^^^^^^^^^^^^^^^^
//! root       page path
//! ```
//!
//! The split point is not configured directly; it is recovered from the
//! root reference the page-generation tooling embeds in each page (a
//! relative path from the page back to its version's document root, e.g.
//! `"../../"`). The number of parent markers in that reference tells us how
//! deep the current page sits inside its version directory.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Configuration supplied by the surrounding page-generation tooling.
#[derive(Clone, Debug, Deserialize)]
pub struct PageOptions {
    /// Root reference: relative path from the current page to its version's
    /// document root. Used only to count parent-directory markers.
    pub url_root: String,
    /// The version currently being displayed.
    pub version: String,
}

/// Version root and page path derived once per page load.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavigationContext {
    /// Common path prefix under which every version's tree is published.
    pub version_root: String,
    /// Path of the current page relative to its own version directory.
    pub current_page_path: String,
}

impl NavigationContext {
    /// Derive the context from the page's pathname and the root reference.
    ///
    /// The pathname is split on runs of `/` or `\` separators (a leading or
    /// trailing separator keeps its empty component, so absolute paths and
    /// directory URLs round-trip). With `n` parent markers in `url_root`,
    /// the version root is everything up to the last `n + 2` components and
    /// the page path is the last `n + 1`.
    ///
    /// A root reference without parent markers, or a pathname with too few
    /// components, saturates the bounds and silently yields a degenerate
    /// context. Navigation from such a context lands on a wrong URL; this
    /// is not detected, matching the fail-open posture of the feature.
    #[must_use]
    pub fn from_location(pathname: &str, url_root: &str) -> Self {
        let parent_markers = url_root.matches("..").count();
        let components = split_path(pathname);

        let root_end = components.len().saturating_sub(parent_markers + 2);
        let page_start = components.len().saturating_sub(parent_markers + 1);

        let context = Self {
            version_root: components[..root_end].join("/"),
            current_page_path: components[page_start..].join("/"),
        };
        debug!(
            "derived navigation context: root={:?} page={:?}",
            context.version_root, context.current_page_path
        );
        context
    }

    /// Navigation target for the equivalent page under `version`.
    #[must_use]
    pub fn switch_target(&self, version: &str) -> String {
        format!(
            "{}/{version}/{}",
            self.version_root, self.current_page_path
        )
    }
}

/// Split a pathname on runs of `/` or `\` separators.
///
/// Interior empty components (from repeated separators) are dropped; the
/// leading and trailing empty components produced by a leading or trailing
/// separator are kept, so joining with `/` preserves them.
fn split_path(pathname: &str) -> Vec<&str> {
    let raw: Vec<&str> = pathname.split(['/', '\\']).collect();
    let last = raw.len() - 1;
    raw.iter()
        .enumerate()
        .filter(|&(i, part)| i == 0 || i == last || !part.is_empty())
        .map(|(_, part)| *part)
        .collect()
}
