//! Package cache errors

use super::SnapError;

/// Creates an installation failure error
pub fn failed(name: impl Into<String>, reason: impl Into<String>) -> SnapError {
    SnapError::InstallationFailure {
        name: name.into(),
        reason: reason.into(),
    }
}
