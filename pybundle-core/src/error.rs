//! Error types for the pybundle-core library.
//!
//! Every fallible operation in the library returns [`CoreResult`]. A non-zero
//! exit status from the packager itself is deliberately not an error variant:
//! the runner reports it through the returned `ExitStatus` and the caller
//! decides how to surface it.

use thiserror::Error;

/// Custom error types for pybundle
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Malformed version string '{value}': {reason}")]
    MalformedVersion { value: String, reason: String },

    #[error("Config persistence error: {0}")]
    Persistence(String),

    #[error("Failed to start packager process: {0}")]
    CommandStart(#[source] std::io::Error),

    #[error("Failed to wait for packager process: {0}")]
    CommandWait(#[source] std::io::Error),
}

impl CoreError {
    /// Builds a `MalformedVersion` error for a bad component of `value`.
    pub(crate) fn malformed_version(value: &str, reason: impl Into<String>) -> Self {
        Self::MalformedVersion {
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type for pybundle operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;
