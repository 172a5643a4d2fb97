//! Error types and handling for snap-installer
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`manifest`]: Manifest loading and entry validation errors
//! - [`tool`]: External command errors
//! - [`install`]: Package cache errors

pub mod install;
pub mod manifest;
pub mod tool;

pub use install::failed as installation_failed;
pub use manifest::{
    invalid_entry, not_found as manifest_not_found, parse_failed as manifest_parse_failed,
    unsupported_architecture,
};
pub use tool::failed as tool_failed;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for snap-installer operations
#[derive(Error, Diagnostic, Debug)]
pub enum SnapError {
    // Manifest errors
    #[error("Snap manifest not found: {path}")]
    #[diagnostic(
        code(snap_installer::manifest::not_found),
        help("Pass --manifest or set SNAP_INSTALLER_MANIFEST to the manifest location")
    )]
    ManifestNotFound { path: String },

    #[error("Failed to parse snap manifest {path}: {reason}")]
    #[diagnostic(
        code(snap_installer::manifest::parse_failed),
        help("The manifest must map architecture names to lists of snap entries")
    )]
    ManifestParseError { path: String, reason: String },

    #[error("Unsupported architecture: {arch}")]
    #[diagnostic(
        code(snap_installer::manifest::unsupported_architecture),
        help("Add a section for this architecture to the snap manifest")
    )]
    UnsupportedArchitecture { arch: String },

    #[error("Invalid manifest entry {index} for {arch}: {reason}")]
    #[diagnostic(code(snap_installer::manifest::invalid_entry))]
    InvalidManifestEntry {
        arch: String,
        index: usize,
        reason: String,
    },

    // External command errors
    #[error("Command '{command}' failed: {reason}")]
    #[diagnostic(code(snap_installer::tool::failed))]
    ExternalToolFailure { command: String, reason: String },

    // Package cache errors
    #[error("Failed to install snap '{name}': {reason}")]
    #[diagnostic(code(snap_installer::install::failed))]
    InstallationFailure { name: String, reason: String },

    // File system errors
    #[error("IO error: {message}")]
    #[diagnostic(code(snap_installer::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for SnapError {
    fn from(err: std::io::Error) -> Self {
        SnapError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, SnapError>;
