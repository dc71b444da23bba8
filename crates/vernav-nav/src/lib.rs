//! Navigation logic for the documentation version selector.
//!
//! This crate provides:
//! - [`NavigationContext`]: version root and page path derived from the
//!   current location
//! - [`VersionSelector`]: the rendered option list and tracked selection
//! - [`Navigator`]: the two-state (`Uninitialized`/`Ready`) lifecycle tying
//!   manifest outcome, context, and selector together
//! - HTML rendering of the dropdown control and the outdated-version banner
//!
//! # Quick Start
//!
//! ```
//! use vernav_manifest::{ManifestOutcome, VersionEntry};
//! use vernav_nav::{Navigator, PageOptions};
//!
//! let options = PageOptions {
//!     url_root: "../".to_owned(),
//!     version: "1.10".to_owned(),
//! };
//! let outcome = ManifestOutcome::Loaded(vec![
//!     VersionEntry::new("1.10"),
//!     VersionEntry::new("1.9"),
//! ]);
//!
//! let navigator = Navigator::initialize(outcome, "/docs/1.10/guide/intro.html", &options);
//! let ready = navigator.as_ready().unwrap();
//! let action = ready.on_version_selected("1.9");
//! assert_eq!(action.target, "/docs/1.9/guide/intro.html");
//! ```

mod context;
mod html;
mod navigator;
mod selector;

pub use context::{NavigationContext, PageOptions};
pub use html::{DROPDOWN_ID, DYNAMIC_LABEL_ID, STATIC_LABEL_ID};
pub use navigator::{Navigator, ReadyNavigator, SwitchAction};
pub use selector::{SelectorOption, VersionSelector};
