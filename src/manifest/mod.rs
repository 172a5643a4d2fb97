//! Snap installation manifest
//!
//! The manifest maps architecture names to ordered lists of snap entries:
//!
//! ```yaml
//! amd64:
//! - install-type: store
//!   name: k8s
//!   channel: edge
//! arm64:
//! - install-type: file
//!   name: k8s
//!   filename: ./k8s_arm64.snap
//! ```
//!
//! Loading only checks that the file exists and has that outer shape: a
//! mapping of lists. Entries stay untyped until [`entry::resolve`]
//! validates the section for one architecture.

pub mod entry;

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Result, SnapError, manifest_not_found, manifest_parse_failed};

pub use entry::{FileArgument, InstallArgument, StoreArgument, resolve};

/// Manifest location used when none is configured
pub const DEFAULT_MANIFEST_PATH: &str = "templates/snap_installation.yaml";

/// Untyped record for one snap, validated by [`entry::resolve`]
pub type RawEntry = serde_yaml::Value;

/// Architecture name to entries, as written in the file
#[derive(Debug, Clone, Default)]
pub struct RawManifest {
    sections: BTreeMap<String, Vec<RawEntry>>,
}

impl RawManifest {
    /// Parse manifest YAML, returning the parser's reason on failure.
    ///
    /// The document must be a mapping whose values are lists; an empty
    /// document is not. An architecture key with no value counts as an
    /// empty list.
    pub fn from_yaml(yaml: &str) -> std::result::Result<Self, String> {
        let document: serde_yaml::Value = serde_yaml::from_str(yaml).map_err(|e| e.to_string())?;
        if document.is_null() {
            return Err("document is empty, expected a mapping of architectures".to_string());
        }

        let sections: BTreeMap<String, Option<Vec<RawEntry>>> =
            serde_yaml::from_value(document).map_err(|e| e.to_string())?;
        Ok(Self {
            sections: sections
                .into_iter()
                .map(|(arch, entries)| (arch, entries.unwrap_or_default()))
                .collect(),
        })
    }

    /// Entries for `arch`, if the manifest has a section for it
    pub fn section(&self, arch: &str) -> Option<&[RawEntry]> {
        self.sections.get(arch).map(Vec::as_slice)
    }

    /// Architecture names in sorted order
    pub fn architectures(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }
}

/// Load the manifest at `path`.
///
/// A missing file is reported as [`SnapError::ManifestNotFound`] before any
/// attempt to open it, so it is never confused with an unreadable file.
pub fn load(path: &Path) -> Result<RawManifest> {
    if !path.is_file() {
        return Err(manifest_not_found(path.display().to_string()));
    }

    let content = fs::read_to_string(path).map_err(|e| SnapError::IoError {
        message: format!("Failed to read {}: {e}", path.display()),
    })?;

    let manifest = RawManifest::from_yaml(&content)
        .map_err(|reason| manifest_parse_failed(path.display().to_string(), reason))?;

    debug!(
        path = %path.display(),
        architectures = manifest.sections.len(),
        "loaded snap manifest"
    );
    Ok(manifest)
}
