//! CLI command implementations.

pub(crate) mod inspect;
pub(crate) mod resolve;

use clap::Args;
use vernav_manifest::{ManifestOutcome, create_agent, fetch_manifest, parse_manifest};
use vernav_nav::PageOptions;

pub(crate) use inspect::InspectArgs;
pub(crate) use resolve::ResolveArgs;

/// Page location arguments shared by all commands.
#[derive(Args)]
pub(crate) struct LocationArgs {
    /// Pathname of the current page (e.g. /docs/1.10/guide/intro.html).
    #[arg(short, long)]
    pub(crate) location: String,

    /// Root reference from the page to its version's document root
    /// (e.g. ../../); only its parent markers are counted.
    #[arg(short, long, default_value = "../")]
    pub(crate) url_root: String,
}

impl LocationArgs {
    /// Page options for the given current version.
    pub(crate) fn page_options(&self, version: &str) -> PageOptions {
        PageOptions {
            url_root: self.url_root.clone(),
            version: version.to_owned(),
        }
    }
}

/// Load a manifest from an HTTP(S) URL or a local file path.
///
/// Both paths are fail-open: any fetch, read, or parse failure collapses to
/// [`ManifestOutcome::Unavailable`].
pub(crate) fn load_manifest(source: &str) -> ManifestOutcome {
    if source.starts_with("http://") || source.starts_with("https://") {
        let agent = create_agent();
        fetch_manifest(&agent, source)
    } else {
        let result = std::fs::read_to_string(source)
            .map_err(Into::into)
            .and_then(|content| parse_manifest(&content));
        ManifestOutcome::from_result(result)
    }
}
