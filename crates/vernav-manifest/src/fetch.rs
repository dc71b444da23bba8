//! Fail-open manifest fetching.
//!
//! The navigator is a convenience feature: when the manifest cannot be
//! loaded, the page keeps its static version label and nothing is surfaced
//! to the user. [`fetch_manifest`] encodes that contract explicitly by
//! returning [`ManifestOutcome`] instead of a `Result` — downstream state
//! population happens only on the [`ManifestOutcome::Loaded`] variant.

use tracing::{debug, warn};
use ureq::Agent;

use crate::{ManifestError, VersionEntry};

/// Outcome of a manifest fetch.
///
/// There is no error variant on purpose: any failure collapses to
/// [`ManifestOutcome::Unavailable`], leaving the navigator uninitialized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ManifestOutcome {
    /// Manifest fetched and parsed.
    Loaded(Vec<VersionEntry>),
    /// Fetch or parse failed; the navigator stays uninitialized.
    Unavailable,
}

impl ManifestOutcome {
    /// Convert a strict manifest result into the fail-open outcome,
    /// recording the discarded cause at debug level.
    #[must_use]
    pub fn from_result(result: Result<Vec<VersionEntry>, ManifestError>) -> Self {
        match result {
            Ok(entries) => Self::Loaded(entries),
            Err(err) => {
                debug!("manifest unavailable: {err}");
                Self::Unavailable
            }
        }
    }
}

/// Create the HTTP agent used for manifest fetches.
///
/// No global timeout is configured: a fetch that never resolves leaves the
/// navigator in its uninitialized state, which is the designed fallback.
/// Error statuses are handled by inspecting the response rather than as
/// transport errors.
#[must_use]
pub fn create_agent() -> Agent {
    Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .into()
}

/// Fetch and parse the version manifest from `url`.
///
/// Issues a single GET. Transport errors, error statuses, body read
/// failures, and malformed JSON all collapse to
/// [`ManifestOutcome::Unavailable`]; there is no retry.
#[must_use]
pub fn fetch_manifest(agent: &Agent, url: &str) -> ManifestOutcome {
    ManifestOutcome::from_result(fetch_strict(agent, url))
}

/// The strict fetch underlying [`fetch_manifest`].
fn fetch_strict(agent: &Agent, url: &str) -> Result<Vec<VersionEntry>, ManifestError> {
    debug!("fetching version manifest from {url}");

    let response = agent
        .get(url)
        .call()
        .map_err(|e| ManifestError::Http(e.to_string()))?;

    let status = response.status().as_u16();
    let mut body = response.into_body();

    if status >= 400 {
        warn!("version manifest request returned HTTP {status}");
        return Err(ManifestError::Http(format!("HTTP {status}")));
    }

    let content = body.read_to_string().map_err(|e| ManifestError::Http(e.to_string()))?;
    crate::parse_manifest(&content)
}
