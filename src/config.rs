//! Runtime settings
//!
//! Everything the pipeline would otherwise read from globals: where the
//! manifest lives, how to find the host architecture, and how to reach snapd.
//! Values come from global CLI flags, which also read `SNAP_INSTALLER_*`
//! environment variables.

use std::path::PathBuf;

use crate::arch::ArchSource;
use crate::cli::Cli;
use crate::command::CommandLine;
use crate::error::Result;
use crate::snap::SnapCli;

/// Settings injected into the install pipeline
#[derive(Debug, Clone)]
pub struct Settings {
    pub manifest_path: PathBuf,
    pub arch: ArchSource,
    pub snap_command: CommandLine,
}

impl Settings {
    /// Build settings from parsed global flags.
    ///
    /// A fixed `--arch` wins over `--arch-command`.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let arch = match &cli.arch {
            Some(arch) => ArchSource::Fixed(arch.trim().to_string()),
            None => ArchSource::Detect(cli.arch_command.parse()?),
        };

        Ok(Self {
            manifest_path: cli.manifest.clone(),
            arch,
            snap_command: cli.snap_command.parse()?,
        })
    }

    /// Snap client for this run
    pub fn snap_cli(&self) -> SnapCli {
        SnapCli::new(self.snap_command.clone())
    }
}
