//! `vernav resolve` command implementation.

use clap::Args;
use vernav_manifest::ManifestOutcome;
use vernav_nav::NavigationContext;

use crate::commands::{LocationArgs, load_manifest};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the resolve command.
#[derive(Args)]
pub(crate) struct ResolveArgs {
    #[command(flatten)]
    location: LocationArgs,

    /// Version to switch to.
    #[arg(short, long)]
    target: String,

    /// Manifest source: HTTP(S) URL or local file path (required by --check).
    #[arg(short, long)]
    manifest: Option<String>,

    /// Verify that the target version exists in the manifest.
    #[arg(long, requires = "manifest")]
    check: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl ResolveArgs {
    /// Execute the resolve command.
    ///
    /// Path rewriting is pure, so no manifest is needed unless `--check` is
    /// passed.
    ///
    /// # Errors
    ///
    /// With `--check`, returns an error if the manifest cannot be loaded or
    /// does not list the target version.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        if self.check {
            self.check_target()?;
        }

        let context =
            NavigationContext::from_location(&self.location.location, &self.location.url_root);
        output.data(&context.switch_target(&self.target));
        Ok(())
    }

    /// Verify the target version is listed in the manifest.
    fn check_target(&self) -> Result<(), CliError> {
        // clap guarantees manifest is present when --check is passed
        let source = self.manifest.as_deref().ok_or_else(|| {
            CliError::Validation("--check requires --manifest".to_owned())
        })?;

        match load_manifest(source) {
            ManifestOutcome::Unavailable => Err(CliError::Validation(format!(
                "Cannot verify target version: manifest {source} unavailable"
            ))),
            ManifestOutcome::Loaded(entries) => {
                if entries.iter().any(|e| e.version == self.target) {
                    Ok(())
                } else {
                    Err(CliError::Validation(format!(
                        "Version {} not listed in manifest {source}",
                        self.target
                    )))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn args(manifest: Option<String>, check: bool) -> ResolveArgs {
        ResolveArgs {
            location: LocationArgs {
                location: "/docs/1.10/guide/intro.html".to_owned(),
                url_root: "../".to_owned(),
            },
            target: "3.0".to_owned(),
            manifest,
            check,
            verbose: false,
        }
    }

    #[test]
    fn test_resolve_without_manifest() {
        assert!(args(None, false).execute().is_ok());
    }

    #[test]
    fn test_check_target_listed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"version": "3.0"}}]"#).unwrap();

        let args = args(Some(file.path().to_str().unwrap().to_owned()), true);
        assert!(args.check_target().is_ok());
    }

    #[test]
    fn test_check_target_not_listed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"version": "2.3"}}]"#).unwrap();

        let args = args(Some(file.path().to_str().unwrap().to_owned()), true);
        let err = args.check_target().unwrap_err();
        assert!(err.to_string().contains("not listed"));
    }

    #[test]
    fn test_check_target_manifest_unavailable() {
        let args = args(Some("/nonexistent/_versions.json".to_owned()), true);
        let err = args.check_target().unwrap_err();
        assert!(err.to_string().contains("unavailable"));
    }
}
