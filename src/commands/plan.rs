//! Plan command implementation
//!
//! Resolves the manifest for this host and prints the result without
//! touching snapd.

use serde::Serialize;

use crate::cli::PlanArgs;
use crate::config::Settings;
use crate::error::{Result, SnapError};
use crate::manifest::InstallArgument;
use crate::operations;
use crate::ui;

#[derive(Serialize)]
struct PlanOutput<'a> {
    architecture: &'a str,
    snaps: &'a [InstallArgument],
}

/// Run plan command
pub fn run(settings: &Settings, args: &PlanArgs) -> Result<()> {
    let plan = operations::plan(settings)?;

    if args.json {
        let output = PlanOutput {
            architecture: &plan.arch,
            snaps: &plan.arguments,
        };
        let json = serde_json::to_string_pretty(&output).map_err(|e| SnapError::IoError {
            message: format!("Failed to render plan: {e}"),
        })?;
        println!("{json}");
        return Ok(());
    }

    if plan.arguments.is_empty() {
        println!("No snaps listed for {}.", plan.arch);
        return Ok(());
    }

    ui::print_arguments(
        &format!("Snaps for {} ({}):", plan.arch, plan.arguments.len()),
        &plan.arguments,
    );
    Ok(())
}
