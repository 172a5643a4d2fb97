//! snap-installer - architecture-scoped snap installation
//!
//! Reads a manifest mapping CPU architectures to snaps, selects the section
//! for the running host and installs each snap from the store or from a
//! local file. Store snaps already tracking the requested channel are left
//! alone.

use clap::Parser;
use miette::Diagnostic;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod arch;
mod cli;
mod command;
mod commands;
mod config;
mod error;
mod installer;
mod manifest;
mod operations;
mod snap;
mod ui;

#[cfg(test)]
mod test_fixtures;

use cli::{Cli, Commands};
use config::Settings;
use error::{Result, SnapError};

/// Environment variable holding a `tracing` filter directive
const LOG_ENV: &str = "SNAP_INSTALLER_LOG";

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Version => commands::version::run(),
        Commands::Completions(ref args) => commands::completions::run(args),
        Commands::Install => commands::install::run(&Settings::from_cli(&cli)?),
        Commands::Plan(ref args) => commands::plan::run(&Settings::from_cli(&cli)?, args),
        Commands::Validate => commands::validate::run(&Settings::from_cli(&cli)?),
        Commands::Arch => commands::arch::run(&Settings::from_cli(&cli)?),
    }
}

fn report(err: &SnapError) {
    eprintln!("Error: {err}");
    if let Some(help) = err.help() {
        eprintln!("  help: {help}");
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        report(&e);
        std::process::exit(1);
    }
}
