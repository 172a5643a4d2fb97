//! External command lines
//!
//! Both the architecture probe and the snap client are configured as plain
//! command lines (`dpkg --print-architecture`, `snap`), so tests and
//! unusual hosts can swap them without touching the pipeline.

use std::fmt;
use std::process::Command;
use std::str::FromStr;

use tracing::debug;

use crate::error::{Result, SnapError, tool_failed};

/// A program plus its leading arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    program: String,
    args: Vec<String>,
}

/// Captured result of a finished command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub success: bool,
    pub status: String,
    pub stdout: String,
    pub stderr: String,
}

impl CommandLine {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Run the command with `extra` appended to the configured arguments.
    ///
    /// Only a failure to spawn is an error here; a non-zero exit is reported
    /// through [`CommandOutput::success`] so callers can inspect stderr.
    pub fn output<S: AsRef<str>>(&self, extra: &[S]) -> Result<CommandOutput> {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .args(extra.iter().map(AsRef::as_ref));

        debug!(command = %self, extra = ?extra.iter().map(AsRef::as_ref).collect::<Vec<_>>(), "running");

        let output = command
            .output()
            .map_err(|e| tool_failed(self.to_string(), format!("could not execute: {e}")))?;

        Ok(CommandOutput {
            success: output.status.success(),
            status: output.status.to_string(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

impl FromStr for CommandLine {
    type Err = SnapError;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.split_whitespace();
        let program = parts
            .next()
            .ok_or_else(|| tool_failed(s, "command line is empty"))?;
        Ok(Self::new(program, parts))
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}
