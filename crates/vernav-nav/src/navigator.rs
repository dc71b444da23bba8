//! Navigator lifecycle.
//!
//! The navigator has exactly two states. It starts [`Uninitialized`] and
//! moves to [`Ready`] only when the manifest fetch succeeds; a fetch that
//! fails (or never resolves) leaves the page with its static version label,
//! which is the designed fallback rather than an error.
//!
//! [`Uninitialized`]: Navigator::Uninitialized
//! [`Ready`]: Navigator::Ready

use serde::Serialize;
use tracing::debug;
use vernav_manifest::ManifestOutcome;

use crate::context::{NavigationContext, PageOptions};
use crate::html;
use crate::selector::VersionSelector;

/// Version navigator state machine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Navigator {
    /// Manifest not (yet) available; the static label stays visible.
    Uninitialized,
    /// Manifest loaded; selector populated and selection tracked.
    Ready(ReadyNavigator),
}

/// The populated navigator: context and selector, computed once per page
/// load and consulted by the selection handler.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ReadyNavigator {
    /// Version root and current page path derived from the location.
    pub context: NavigationContext,
    /// Dropdown state built from the manifest.
    pub selector: VersionSelector,
}

/// Effect of a user selecting a version in the dropdown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SwitchAction {
    /// Index the control restores its selection to before navigating, so
    /// the new value does not flash while the page load is in flight.
    pub restore_index: usize,
    /// Full-page navigation target.
    pub target: String,
}

impl Navigator {
    /// Initialize from a manifest fetch outcome, the page's pathname, and
    /// the options supplied by the page-generation tooling.
    ///
    /// [`ManifestOutcome::Unavailable`] yields [`Navigator::Uninitialized`];
    /// all context and selector computation happens only on the loaded
    /// variant.
    #[must_use]
    pub fn initialize(outcome: ManifestOutcome, pathname: &str, options: &PageOptions) -> Self {
        match outcome {
            ManifestOutcome::Unavailable => {
                debug!("manifest unavailable; navigator stays uninitialized");
                Self::Uninitialized
            }
            ManifestOutcome::Loaded(entries) => {
                let context = NavigationContext::from_location(pathname, &options.url_root);
                let selector = VersionSelector::build(&entries, &options.version);
                Self::Ready(ReadyNavigator { context, selector })
            }
        }
    }

    /// The ready navigator, if initialization succeeded.
    #[must_use]
    pub fn as_ready(&self) -> Option<&ReadyNavigator> {
        match self {
            Self::Ready(ready) => Some(ready),
            Self::Uninitialized => None,
        }
    }
}

impl ReadyNavigator {
    /// Handle the user choosing `target_version` in the dropdown.
    ///
    /// Terminal, user-triggered effect: the embedding restores the control's
    /// selection to [`SwitchAction::restore_index`] and then navigates to
    /// [`SwitchAction::target`].
    #[must_use]
    pub fn on_version_selected(&self, target_version: &str) -> SwitchAction {
        SwitchAction {
            restore_index: self.selector.selected_index,
            target: self.context.switch_target(target_version),
        }
    }

    /// Render the populated `<select>` control.
    #[must_use]
    pub fn render_dropdown(&self) -> String {
        html::render_dropdown(&self.selector)
    }

    /// Render the outdated-version warning banner.
    ///
    /// Present only when the current version is marked outdated *and* the
    /// manifest names a latest version to link to.
    #[must_use]
    pub fn outdated_banner(&self) -> Option<String> {
        if !self.selector.outdated {
            return None;
        }
        let latest = self.selector.latest_version.as_deref()?;
        Some(html::outdated_banner(&self.context.switch_target(latest)))
    }
}
