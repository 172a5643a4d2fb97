//! Host architecture detection
//!
//! The architecture string is whatever the probe command prints, trimmed.
//! There is no translation table: manifest keys must use the probe's own
//! vocabulary (`amd64`, `arm64`, ... for `dpkg --print-architecture`).

use tracing::debug;

use crate::command::CommandLine;
use crate::error::{Result, tool_failed};

/// Probe used when none is configured
pub const DEFAULT_ARCH_COMMAND: &str = "dpkg --print-architecture";

/// Where the host architecture comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArchSource {
    /// Run a probe command once and use its output
    Detect(CommandLine),
    /// Use the given value verbatim, skipping detection
    Fixed(String),
}

impl ArchSource {
    /// Resolve the architecture for this run
    pub fn resolve(&self) -> Result<String> {
        match self {
            ArchSource::Detect(command) => detect(command),
            ArchSource::Fixed(arch) => Ok(arch.clone()),
        }
    }
}

/// Run `command` and return its trimmed standard output.
pub fn detect(command: &CommandLine) -> Result<String> {
    let output = command.output::<&str>(&[])?;

    if !output.success {
        let stderr = output.stderr.trim();
        let reason = if stderr.is_empty() {
            output.status
        } else {
            format!("{}: {stderr}", output.status)
        };
        return Err(tool_failed(command.to_string(), reason));
    }

    let arch = output.stdout.trim();
    if arch.is_empty() {
        return Err(tool_failed(
            command.to_string(),
            "printed no architecture",
        ));
    }

    debug!(%arch, "detected host architecture");
    Ok(arch.to_string())
}
