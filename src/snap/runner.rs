//! Seam between the cache and the `snap` command line

use crate::command::{CommandLine, CommandOutput};
use crate::error::Result;

/// Default snap client invocation
pub const DEFAULT_SNAP_COMMAND: &str = "snap";

/// Runs one `snap` subcommand and captures what it printed
pub trait SnapRunner {
    /// Run `snap <args>`; only a failure to start the client is an `Err`.
    fn run(&self, args: &[String]) -> Result<CommandOutput>;
}

/// [`SnapRunner`] backed by a real process
#[derive(Debug, Clone)]
pub struct SnapCli {
    command: CommandLine,
}

impl SnapCli {
    pub fn new(command: CommandLine) -> Self {
        Self { command }
    }
}

impl SnapRunner for SnapCli {
    fn run(&self, args: &[String]) -> Result<CommandOutput> {
        self.command.output(args)
    }
}
