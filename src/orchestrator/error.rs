//! Error type shared by the orchestrators.

use crate::bridge::ExternalToolError;
use crate::clients::RemoteCallError;
use crate::fraud::FraudScreenError;
use crate::resolver::ResolutionError;
use crate::session::SessionError;
use thiserror::Error;

/// Why an orchestrated operation did not complete.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OrchestratorError {
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Remote(#[from] RemoteCallError),

    /// The product name did not pick out exactly one product. Nothing was
    /// changed remotely.
    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    #[error("Possible fraud detected.")]
    FraudBlocked,

    #[error(transparent)]
    FraudScreen(#[from] FraudScreenError),

    #[error("Order ID '{0}' not found.")]
    OrderNotFound(String),

    #[error(transparent)]
    ExternalTool(#[from] ExternalToolError),

    #[error("Invalid arguments for {tool}: {reason}")]
    InvalidArguments { tool: String, reason: String },
}

impl OrchestratorError {
    pub fn invalid_arguments(tool: impl Into<String>, reason: impl ToString) -> Self {
        OrchestratorError::InvalidArguments {
            tool: tool.into(),
            reason: reason.to_string(),
        }
    }
}
