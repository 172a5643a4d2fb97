//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::arch::DEFAULT_ARCH_COMMAND;
use crate::manifest::DEFAULT_MANIFEST_PATH;
use crate::snap::runner::DEFAULT_SNAP_COMMAND;

/// snap-installer - architecture-scoped snap installation
///
/// Install the snaps a manifest lists for this host's CPU architecture.
#[derive(Parser, Debug)]
#[command(
    name = "snap-installer",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Install snaps from an architecture-keyed manifest",
    long_about = "snap-installer reads a manifest mapping CPU architectures to snaps, \
                  picks the section matching this host, and installs each snap from \
                  the store or from a local file. Store snaps already on the requested \
                  channel are left untouched.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  snap-installer plan\n    \
                  snap-installer install\n    \
                  snap-installer --manifest ./snaps.yaml --arch arm64 plan --json\n    \
                  snap-installer validate"
)]
pub struct Cli {
    /// Path to the snap manifest
    #[arg(
        long,
        short = 'm',
        global = true,
        env = "SNAP_INSTALLER_MANIFEST",
        default_value = DEFAULT_MANIFEST_PATH
    )]
    pub manifest: PathBuf,

    /// Use this architecture instead of detecting it
    #[arg(long, global = true, env = "SNAP_INSTALLER_ARCH")]
    pub arch: Option<String>,

    /// Command that prints the host architecture
    #[arg(
        long,
        global = true,
        env = "SNAP_INSTALLER_ARCH_COMMAND",
        default_value = DEFAULT_ARCH_COMMAND
    )]
    pub arch_command: String,

    /// Command used to run snap
    #[arg(
        long,
        global = true,
        env = "SNAP_INSTALLER_SNAP_COMMAND",
        default_value = DEFAULT_SNAP_COMMAND
    )]
    pub snap_command: String,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install the snaps listed for this architecture
    Install,

    /// Show what would be installed, without installing
    Plan(PlanArgs),

    /// Check every architecture section of the manifest
    Validate,

    /// Print the detected host architecture
    Arch,

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the plan command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show the plan for this host:\n    snap-installer plan\n\n\
                  Show the plan for another architecture:\n    snap-installer --arch arm64 plan\n\n\
                  Machine-readable output:\n    snap-installer plan --json")]
pub struct PlanArgs {
    /// Print the plan as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    snap-installer completions --shell bash > ~/.bash_completion.d/snap-installer\n\n\
                  Generate zsh completions:\n    snap-installer completions --shell zsh > ~/.zfunc/_snap-installer")]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(long, value_enum)]
    pub shell: Shell,
}
