//! Domain-level error types.

use thiserror::Error;

/// Failures produced by the upstream gateway.
///
/// The distinction between `Upstream` and `Schema` is deliberate: operators
/// must be able to tell "RDW is down" apart from "RDW changed its schema".
#[derive(Debug, Error)]
pub enum SourceError {
    /// One of the upstream collections answered with a non-success status.
    #[error("upstream returned status {status}")]
    Upstream { status: u16 },

    /// An upstream payload did not match the expected record shape.
    #[error("upstream payload failed validation: {0}")]
    Schema(String),

    /// The request never completed: connect failure, timeout, truncated body.
    #[error("upstream transport failure: {0}")]
    Transport(String),
}

impl SourceError {
    /// True when the upstream signalled it is unavailable, as opposed to
    /// rejecting this particular request.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, SourceError::Upstream { status: 503 })
    }
}
