//! snapd-backed package cache
//!
//! Entries are created on first lookup and query `snap list <name>` lazily,
//! the first time they need to know what is installed. After any mutating
//! call the observed state is dropped and re-queried on next use.

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, info};

use super::channel::{normalize, same_channel};
use super::runner::SnapRunner;
use super::{EnsureOptions, LocalInstallFlags, PackageCache, SnapEntry, SnapState};
use crate::command::CommandOutput;
use crate::error::{Result, installation_failed};

/// What `snap list` reported for an installed snap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledSnap {
    pub version: String,
    pub revision: String,
    /// `None` for snaps installed from a local file
    pub tracking: Option<String>,
}

/// Cache of snap handles keyed by name
#[derive(Debug)]
pub struct SnapCache<R> {
    runner: R,
    snaps: HashMap<String, Snap<R>>,
}

impl<R: SnapRunner + Clone> SnapCache<R> {
    pub fn new(runner: R) -> Self {
        Self {
            runner,
            snaps: HashMap::new(),
        }
    }
}

impl<R: SnapRunner + Clone> PackageCache for SnapCache<R> {
    type Entry = Snap<R>;

    fn entry(&mut self, name: &str) -> Result<&mut Snap<R>> {
        let runner = &self.runner;
        Ok(self
            .snaps
            .entry(name.to_string())
            .or_insert_with(|| Snap::new(name, runner.clone())))
    }

    fn install_local(&mut self, filename: &Path, flags: LocalInstallFlags) -> Result<()> {
        let target = filename.display().to_string();
        let mut args = vec!["install".to_string(), target.clone()];
        if flags.classic {
            args.push("--classic".to_string());
        }
        if flags.dangerous {
            args.push("--dangerous".to_string());
        }
        if flags.devmode {
            args.push("--devmode".to_string());
        }

        let output = self.runner.run(&args)?;
        if !output.success {
            return Err(installation_failed(target, failure_reason(&output)));
        }
        info!(file = %target, "installed snap from local file");

        // Any cached handle may now be stale.
        self.snaps.values_mut().for_each(Snap::forget);
        Ok(())
    }
}

/// Handle for one named snap
#[derive(Debug)]
pub struct Snap<R> {
    name: String,
    runner: R,
    observed: Option<Option<InstalledSnap>>,
}

impl<R: SnapRunner> Snap<R> {
    fn new(name: &str, runner: R) -> Self {
        Self {
            name: name.to_string(),
            runner,
            observed: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Installed state, querying snapd on first call
    pub fn installed(&mut self) -> Result<Option<&InstalledSnap>> {
        if self.observed.is_none() {
            self.observed = Some(self.query()?);
        }
        Ok(self.observed.as_ref().and_then(Option::as_ref))
    }

    fn forget(&mut self) {
        self.observed = None;
    }

    fn query(&self) -> Result<Option<InstalledSnap>> {
        let output = self.runner.run(&["list".to_string(), self.name.clone()])?;
        if output.success {
            return parse_list(&output.stdout, &self.name).map(Some);
        }
        if output.stderr.contains("no matching snaps installed") {
            return Ok(None);
        }
        Err(installation_failed(&self.name, failure_reason(&output)))
    }

    fn mutate(&mut self, args: Vec<String>) -> Result<()> {
        let output = self.runner.run(&args)?;
        self.forget();
        if !output.success {
            return Err(installation_failed(&self.name, failure_reason(&output)));
        }
        Ok(())
    }

    fn store_args(&self, action: &str, channel: &str, options: &EnsureOptions) -> Vec<String> {
        let mut args = vec![
            action.to_string(),
            self.name.clone(),
            format!("--channel={channel}"),
        ];
        if options.classic {
            args.push("--classic".to_string());
        }
        if let Some(cohort) = &options.cohort {
            args.push(format!("--cohort={cohort}"));
        }
        args
    }
}

impl<R: SnapRunner> SnapEntry for Snap<R> {
    fn ensure(&mut self, state: SnapState, channel: &str, options: &EnsureOptions) -> Result<()> {
        let current = self.installed()?.cloned();

        match (state, current) {
            (SnapState::Present, None) => {
                let args = self.store_args("install", channel, options);
                self.mutate(args)?;
                info!(snap = %self.name, channel, "installed snap");
            }
            (SnapState::Present, Some(installed))
                if installed
                    .tracking
                    .as_deref()
                    .is_some_and(|tracking| same_channel(tracking, channel)) =>
            {
                debug!(
                    snap = self.name(),
                    channel = %normalize(channel),
                    version = %installed.version,
                    revision = %installed.revision,
                    "already present"
                );
            }
            (SnapState::Present, Some(installed)) => {
                let args = self.store_args("refresh", channel, options);
                self.mutate(args)?;
                info!(
                    snap = %self.name,
                    from = installed.tracking.as_deref().unwrap_or("-"),
                    to = channel,
                    "switched snap channel"
                );
            }
            (SnapState::Absent, Some(_)) => {
                self.mutate(vec!["remove".to_string(), self.name.clone()])?;
                info!(snap = %self.name, "removed snap");
            }
            (SnapState::Absent, None) => {
                debug!(snap = self.name(), "already absent");
            }
        }
        Ok(())
    }
}

/// Find `name` in `snap list` output.
///
/// Columns are `Name Version Rev Tracking Publisher Notes`; a tracking
/// value of `-` means the snap did not come from the store.
pub fn parse_list(stdout: &str, name: &str) -> Result<InstalledSnap> {
    let line = stdout
        .lines()
        .skip(1)
        .find(|line| line.split_whitespace().next() == Some(name))
        .ok_or_else(|| installation_failed(name, "snap list did not report this snap"))?;

    match line.split_whitespace().collect::<Vec<_>>().as_slice() {
        [_, version, revision, tracking, ..] => Ok(InstalledSnap {
            version: (*version).to_string(),
            revision: (*revision).to_string(),
            tracking: (*tracking != "-").then(|| (*tracking).to_string()),
        }),
        _ => Err(installation_failed(
            name,
            format!("unexpected snap list output: {line}"),
        )),
    }
}

fn failure_reason(output: &CommandOutput) -> String {
    [output.stderr.trim(), output.stdout.trim()]
        .into_iter()
        .find(|text| !text.is_empty())
        .map_or_else(|| output.status.clone(), str::to_string)
}
