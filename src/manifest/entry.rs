//! Entry validation
//!
//! Each raw entry becomes exactly one [`InstallArgument`], chosen by its
//! `install-type` field. The variant is picked from the discriminator first
//! and only then are that variant's fields read.

use std::path::PathBuf;

use serde::Serialize;
use serde_yaml::{Mapping, Value};

use super::{RawEntry, RawManifest};
use crate::error::{Result, invalid_entry, unsupported_architecture};
use crate::snap::SnapState;

const INSTALL_TYPE: &str = "install-type";

/// Snap installed from the store on a channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreArgument {
    pub name: String,
    pub channel: String,
    pub state: SnapState,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub classic: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cohort: Option<String>,
}

/// Snap installed from a file on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileArgument {
    pub name: String,
    pub filename: PathBuf,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub classic: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub dangerous: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub devmode: bool,
}

/// How to install one snap
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "install-type", rename_all = "lowercase")]
pub enum InstallArgument {
    Store(StoreArgument),
    File(FileArgument),
}

impl InstallArgument {
    pub fn name(&self) -> &str {
        match self {
            InstallArgument::Store(store) => &store.name,
            InstallArgument::File(file) => &file.name,
        }
    }
}

impl StoreArgument {
    pub fn new(name: impl Into<String>, channel: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            channel: channel.into(),
            state: SnapState::Present,
            classic: false,
            cohort: None,
        }
    }
}

impl FileArgument {
    pub fn new(name: impl Into<String>, filename: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            filename: filename.into(),
            classic: false,
            dangerous: false,
            devmode: false,
        }
    }
}

/// Resolve the entries for `arch` into install arguments, in manifest order.
///
/// A missing section is an error, never an empty plan. The first invalid
/// entry fails the whole section.
pub fn resolve(manifest: &RawManifest, arch: &str) -> Result<Vec<InstallArgument>> {
    let entries = manifest
        .section(arch)
        .ok_or_else(|| unsupported_architecture(arch))?;

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            resolve_entry(entry).map_err(|reason| invalid_entry(arch, index, reason))
        })
        .collect()
}

fn resolve_entry(entry: &RawEntry) -> std::result::Result<InstallArgument, String> {
    let Some(entry) = entry.as_mapping() else {
        return Err("entry must be a mapping".to_string());
    };

    match entry.get(INSTALL_TYPE).and_then(Value::as_str) {
        Some("store") => resolve_store(entry).map(InstallArgument::Store),
        Some("file") => resolve_file(entry).map(InstallArgument::File),
        _ => Err("unknown or missing install-type".to_string()),
    }
}

fn resolve_store(entry: &Mapping) -> std::result::Result<StoreArgument, String> {
    let state = match optional_str(entry, "state")? {
        Some(state) => state.parse()?,
        None => SnapState::Present,
    };

    let mut store = StoreArgument::new(
        required_str(entry, "name")?,
        required_str(entry, "channel")?,
    );
    store.state = state;
    store.classic = optional_bool(entry, "classic")?;
    store.cohort = optional_str(entry, "cohort")?;
    Ok(store)
}

fn resolve_file(entry: &Mapping) -> std::result::Result<FileArgument, String> {
    let mut file = FileArgument::new(
        required_str(entry, "name")?,
        required_str(entry, "filename")?,
    );
    file.classic = optional_bool(entry, "classic")?;
    file.dangerous = optional_bool(entry, "dangerous")?;
    file.devmode = optional_bool(entry, "devmode")?;
    Ok(file)
}

fn required_str(entry: &Mapping, key: &str) -> std::result::Result<String, String> {
    optional_str(entry, key)?.ok_or_else(|| format!("missing required field '{key}'"))
}

fn optional_str(entry: &Mapping, key: &str) -> std::result::Result<Option<String>, String> {
    match entry.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) if value.trim().is_empty() => {
            Err(format!("field '{key}' must not be empty"))
        }
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(_) => Err(format!("field '{key}' must be a string")),
    }
}

fn optional_bool(entry: &Mapping, key: &str) -> std::result::Result<bool, String> {
    match entry.get(key) {
        None | Some(Value::Null) => Ok(false),
        Some(Value::Bool(value)) => Ok(*value),
        Some(_) => Err(format!("field '{key}' must be true or false")),
    }
}
