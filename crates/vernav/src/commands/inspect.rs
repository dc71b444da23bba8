//! `vernav inspect` command implementation.

use clap::Args;
use vernav_nav::{Navigator, ReadyNavigator};

use crate::commands::{LocationArgs, load_manifest};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the inspect command.
#[derive(Args)]
pub(crate) struct InspectArgs {
    /// Manifest source: HTTP(S) URL or local file path.
    #[arg(short, long)]
    manifest: String,

    #[command(flatten)]
    location: LocationArgs,

    /// Version currently displayed on the page.
    #[arg(short, long)]
    current_version: String,

    /// Emit the navigator state as JSON.
    #[arg(long)]
    json: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl InspectArgs {
    /// Execute the inspect command.
    ///
    /// Manifest unavailability is reported as a warning and exits zero,
    /// mirroring the fail-open behavior of the embedded navigator.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let outcome = load_manifest(&self.manifest);
        let options = self.location.page_options(&self.current_version);
        let navigator = Navigator::initialize(outcome, &self.location.location, &options);

        let Some(ready) = navigator.as_ready() else {
            output.warning("Version manifest unavailable; the static version label stays.");
            return Ok(());
        };

        if self.json {
            output.data(&serde_json::to_string_pretty(ready).map_err(|e| {
                CliError::Validation(format!("Failed to serialize navigator state: {e}"))
            })?);
            return Ok(());
        }

        print_state(&output, ready, &self.current_version);
        Ok(())
    }
}

/// Print the selector state in human-readable form.
fn print_state(output: &Output, ready: &ReadyNavigator, current_version: &str) {
    output.highlight(&format!("Version root: {}", ready.context.version_root));
    output.info(&format!("Page path:    {}", ready.context.current_page_path));
    output.info("");

    for (index, option) in ready.selector.options.iter().enumerate() {
        let marker = if index == ready.selector.selected_index {
            "*"
        } else {
            " "
        };
        output.info(&format!("{marker} {}", option.label));
    }

    if ready.selector.outdated
        && let Some(latest) = ready.selector.latest_version.as_deref()
    {
        output.info("");
        output.warning(&format!(
            "Version {current_version} is outdated; latest is {latest} at {}",
            ready.context.switch_target(latest)
        ));
    }
}
