//! Package cache collaborator
//!
//! The installer drives snaps through two traits:
//! - [`PackageCache`]: lookup-or-create of named entries, plus installing
//!   directly from a local `.snap` file
//! - [`SnapEntry`]: an idempotent `ensure` on one named snap
//!
//! [`SnapCache`] implements both on top of the `snap` command line.

pub mod cache;
pub mod channel;
pub mod runner;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::Serialize;

use crate::error::Result;

pub use cache::SnapCache;
pub use runner::{SnapCli, SnapRunner};

/// Desired state of a snap
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapState {
    #[default]
    Present,
    Absent,
}

impl FromStr for SnapState {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "present" => Ok(SnapState::Present),
            "absent" => Ok(SnapState::Absent),
            other => Err(format!("unknown state '{other}' (expected present or absent)")),
        }
    }
}

impl fmt::Display for SnapState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapState::Present => f.write_str("present"),
            SnapState::Absent => f.write_str("absent"),
        }
    }
}

/// Extra options for a store install or refresh
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnsureOptions {
    pub classic: bool,
    pub cohort: Option<String>,
}

/// Confinement flags for a local file install
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocalInstallFlags {
    pub classic: bool,
    pub dangerous: bool,
    pub devmode: bool,
}

/// One named snap whose state can be converged
pub trait SnapEntry {
    /// Converge to `state` tracking `channel`.
    ///
    /// Implementations must not mutate the host when the snap already
    /// matches the request.
    fn ensure(&mut self, state: SnapState, channel: &str, options: &EnsureOptions) -> Result<()>;
}

/// Installed and desired package state, addressed by snap name
pub trait PackageCache {
    type Entry: SnapEntry;

    /// Return the entry for `name`, creating it on first use
    fn entry(&mut self, name: &str) -> Result<&mut Self::Entry>;

    /// Install a snap from a file on disk, unconditionally
    fn install_local(&mut self, filename: &Path, flags: LocalInstallFlags) -> Result<()>;
}
