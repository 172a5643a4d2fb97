//! Validate command implementation

use console::Style;

use crate::config::Settings;
use crate::error::Result;
use crate::operations;

/// Run validate command
pub fn run(settings: &Settings) -> Result<()> {
    let sections = operations::validate(settings)?;

    println!(
        "{} {}",
        Style::new().green().bold().apply_to("Manifest is valid:"),
        settings.manifest_path.display()
    );
    if sections.is_empty() {
        println!("  (no architectures)");
    }
    for (arch, count) in sections {
        println!("  {arch}: {count} snap(s)");
    }
    Ok(())
}
