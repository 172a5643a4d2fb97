//! Manifest errors

use super::SnapError;

/// Creates a manifest not found error
pub fn not_found(path: impl Into<String>) -> SnapError {
    SnapError::ManifestNotFound { path: path.into() }
}

/// Creates a manifest parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> SnapError {
    SnapError::ManifestParseError {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an unsupported architecture error
pub fn unsupported_architecture(arch: impl Into<String>) -> SnapError {
    SnapError::UnsupportedArchitecture { arch: arch.into() }
}

/// Creates an invalid manifest entry error
pub fn invalid_entry(arch: impl Into<String>, index: usize, reason: impl Into<String>) -> SnapError {
    SnapError::InvalidManifestEntry {
        arch: arch.into(),
        index,
        reason: reason.into(),
    }
}
