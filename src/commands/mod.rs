//! Command implementations for snap-installer CLI

pub mod arch;
pub mod completions;
pub mod install;
pub mod plan;
pub mod validate;
pub mod version;
