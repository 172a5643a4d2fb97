//! Test fixtures and utilities for reducing test setup duplication.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_fixtures::write_manifest;
//!
//! #[test]
//! fn my_test() {
//!     let (_temp, path) = write_manifest("amd64: []");
//!     let manifest = crate::manifest::load(&path).unwrap();
//! }
//! ```
//!
//! The returned `TempDir` must be kept alive for as long as the path is used.

use std::path::PathBuf;

use tempfile::TempDir;

/// File name used for manifests written by [`write_manifest`]
pub const MANIFEST_FILE: &str = "snap_installation.yaml";

/// Create an empty temp directory.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Write `content` as a manifest in a fresh temp directory.
///
/// # Panics
///
/// Panics if the temp directory or file cannot be created.
#[must_use]
pub fn write_manifest(content: &str) -> (TempDir, PathBuf) {
    let temp = create_temp_dir();
    let path = temp.path().join(MANIFEST_FILE);
    std::fs::write(&path, content).expect("Failed to write manifest");
    (temp, path)
}

/// Path inside a fresh temp directory where no manifest exists.
#[must_use]
pub fn missing_manifest() -> (TempDir, PathBuf) {
    let temp = create_temp_dir();
    let path = temp.path().join(MANIFEST_FILE);
    (temp, path)
}
