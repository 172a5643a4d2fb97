//! Snap installation driver
//!
//! Applies resolved install arguments to a [`PackageCache`], in order:
//! - file arguments always go through the local-file install
//! - store arguments look up their cache entry and `ensure` it, leaving
//!   idempotency to the cache
//!
//! The first failure stops the run. Entries applied before it stay applied.

use tracing::info;

use crate::error::Result;
use crate::manifest::{FileArgument, InstallArgument, StoreArgument};
use crate::snap::{EnsureOptions, LocalInstallFlags, PackageCache, SnapEntry};

/// Apply every argument in order against `cache`
pub fn apply<C: PackageCache>(args: &[InstallArgument], cache: &mut C) -> Result<()> {
    for (index, argument) in args.iter().enumerate() {
        info!(index, snap = argument.name(), "applying snap");
        match argument {
            InstallArgument::File(file) => install_file(file, cache)?,
            InstallArgument::Store(store) => ensure_store(store, cache)?,
        }
    }
    Ok(())
}

fn install_file<C: PackageCache>(file: &FileArgument, cache: &mut C) -> Result<()> {
    let flags = LocalInstallFlags {
        classic: file.classic,
        dangerous: file.dangerous,
        devmode: file.devmode,
    };
    cache.install_local(&file.filename, flags)
}

fn ensure_store<C: PackageCache>(store: &StoreArgument, cache: &mut C) -> Result<()> {
    let options = EnsureOptions {
        classic: store.classic,
        cohort: store.cohort.clone(),
    };
    cache
        .entry(&store.name)?
        .ensure(store.state, &store.channel, &options)
}
