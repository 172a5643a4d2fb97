//! Install command implementation
//!
//! Runs the whole pipeline against the host's snapd:
//! 1. Load the manifest
//! 2. Detect the host architecture
//! 3. Resolve that architecture's entries
//! 4. Apply them in order, stopping at the first failure

use console::Style;

use crate::config::Settings;
use crate::error::Result;
use crate::operations;
use crate::snap::SnapCache;
use crate::ui;

/// Run install command
pub fn run(settings: &Settings) -> Result<()> {
    let mut cache = SnapCache::new(settings.snap_cli());
    let plan = operations::management(settings, &mut cache)?;

    if plan.arguments.is_empty() {
        println!("No snaps listed for {}.", plan.arch);
        return Ok(());
    }

    ui::print_arguments(&format!("Applied snaps for {}:", plan.arch), &plan.arguments);
    println!();
    println!(
        "{} {} snap(s) applied",
        Style::new().green().bold().apply_to("Done:"),
        plan.arguments.len()
    );
    Ok(())
}
