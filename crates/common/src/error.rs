//! Common error types for the SSM agent fact.

use thiserror::Error;

/// Common error type for ssmfact operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The installed agent produced output that does not honour the
    /// `get-diagnostics` contract.
    #[error("Malformed diagnostics output: {reason}")]
    MalformedDiagnosticsOutput { reason: String },
}

/// Result type alias using common Error.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn malformed(reason: impl Into<String>) -> Self {
        Error::MalformedDiagnosticsOutput {
            reason: reason.into(),
        }
    }

    /// Check if this error reports a broken diagnostics contract.
    pub fn is_malformed_output(&self) -> bool {
        matches!(self, Error::MalformedDiagnosticsOutput { .. })
    }
}
