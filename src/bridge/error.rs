//! Error types for the external tool bridge.

use std::time::Duration;
use thiserror::Error;

/// Failures crossing the subprocess boundary. Kept apart from
/// [`RemoteCallError`](crate::clients::RemoteCallError) because the tool is
/// not one of the gRPC services.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExternalToolError {
    /// The tool process could not be started.
    #[error("Could not start external tool: {0}")]
    Spawn(String),

    /// Reading from or writing to the tool process failed.
    #[error("External tool I/O error: {0}")]
    Io(String),

    /// The tool answered with something that is not a valid response.
    #[error("External tool protocol error: {0}")]
    Protocol(String),

    /// The server answered the request with a JSON-RPC error.
    #[error("External tool rejected the request: {message} (code {code})")]
    Rejected { code: i64, message: String },

    /// The tool ran and reported a failure.
    #[error("External tool reported an error: {0}")]
    ToolFailed(String),

    #[error("External tool did not answer within {0:?}")]
    Timeout(Duration),

    /// The bridge task has stopped.
    #[error("External tool bridge is closed")]
    Closed,
}

impl ExternalToolError {
    /// Whether the process behind the channel should be discarded. A
    /// well-formed answer, even a negative one, leaves it usable.
    pub fn poisons_process(&self) -> bool {
        !matches!(
            self,
            ExternalToolError::ToolFailed(_) | ExternalToolError::Rejected { .. }
        )
    }
}
