//! External command errors

use super::SnapError;

/// Creates an external tool failure error
pub fn failed(command: impl Into<String>, reason: impl Into<String>) -> SnapError {
    SnapError::ExternalToolFailure {
        command: command.into(),
        reason: reason.into(),
    }
}
