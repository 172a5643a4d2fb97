//! Arch command implementation

use crate::config::Settings;
use crate::error::Result;

/// Run arch command
pub fn run(settings: &Settings) -> Result<()> {
    println!("{}", settings.arch.resolve()?);
    Ok(())
}
