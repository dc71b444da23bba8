//! Version navigator CLI.
//!
//! Provides commands for:
//! - `inspect`: Load a version manifest and show the selector state for a page
//! - `resolve`: Compute the equivalent page path under another version

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{InspectArgs, ResolveArgs};
use output::Output;

/// Version navigator - documentation version switching.
#[derive(Parser)]
#[command(name = "vernav", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the version-selector state for a page.
    Inspect(InspectArgs),
    /// Compute the switch target for a page under another version.
    Resolve(ResolveArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = match &cli.command {
        Commands::Inspect(args) => args.verbose,
        Commands::Resolve(args) => args.verbose,
    };

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Inspect(args) => args.execute(),
        Commands::Resolve(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
