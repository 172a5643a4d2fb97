//! Snap management pipeline
//!
//! One call runs load → detect → resolve → apply. Each step fails fast and
//! nothing is retried here; the manifest is re-read and the architecture
//! re-detected on every call.

use tracing::info;

use crate::config::Settings;
use crate::error::Result;
use crate::installer;
use crate::manifest::{self, InstallArgument};
use crate::snap::PackageCache;

/// Install arguments resolved for one host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub arch: String,
    pub arguments: Vec<InstallArgument>,
}

/// Load the manifest, detect the architecture and resolve its section
pub fn plan(settings: &Settings) -> Result<Plan> {
    let manifest = manifest::load(&settings.manifest_path)?;
    let arch = settings.arch.resolve()?;
    let arguments = manifest::resolve(&manifest, &arch)?;

    info!(%arch, snaps = arguments.len(), "resolved snap manifest");
    Ok(Plan { arch, arguments })
}

/// Resolve the plan for this host and apply it to `cache`
pub fn management<C: PackageCache>(settings: &Settings, cache: &mut C) -> Result<Plan> {
    let plan = plan(settings)?;
    installer::apply(&plan.arguments, cache)?;
    Ok(plan)
}

/// Resolve every architecture section, returning the entry count for each
pub fn validate(settings: &Settings) -> Result<Vec<(String, usize)>> {
    let manifest = manifest::load(&settings.manifest_path)?;
    manifest
        .architectures()
        .map(|arch| manifest::resolve(&manifest, arch).map(|args| (arch.to_string(), args.len())))
        .collect()
}
