//! The uniform result every operation returns to the front end.
//!
//! Serialized shapes:
//!
//! ```json
//! {"status": "success", "report": "..."}
//! {"status": "error", "error_message": "..."}
//! {"status": "continue", "next_tool": "get_package_status", "arguments": {"tracking_id": "..."}}
//! ```

use crate::orchestrator::OrchestratorError;
use serde::Serialize;
use serde_json::Value;

/// Tells the caller to invoke another operation next.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Continuation {
    pub next_tool: String,
    pub arguments: Value,
}

impl Continuation {
    pub fn new(next_tool: impl Into<String>, arguments: Value) -> Self {
        Self {
            next_tool: next_tool.into(),
            arguments,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ToolOutcome {
    Success { report: String },
    Error { error_message: String },
    Continue { next_tool: String, arguments: Value },
}

impl ToolOutcome {
    pub fn success(report: impl Into<String>) -> Self {
        ToolOutcome::Success {
            report: report.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        ToolOutcome::Error {
            error_message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ToolOutcome::Success { .. })
    }

    /// The report or error message, whichever this carries.
    pub fn message(&self) -> Option<&str> {
        match self {
            ToolOutcome::Success { report } => Some(report),
            ToolOutcome::Error { error_message } => Some(error_message),
            ToolOutcome::Continue { .. } => None,
        }
    }
}

impl From<Continuation> for ToolOutcome {
    fn from(continuation: Continuation) -> Self {
        ToolOutcome::Continue {
            next_tool: continuation.next_tool,
            arguments: continuation.arguments,
        }
    }
}

/// Resolution misses come back as a success-shaped report so the front end
/// can re-prompt; every other failure is an error.
impl From<OrchestratorError> for ToolOutcome {
    fn from(error: OrchestratorError) -> Self {
        match error {
            OrchestratorError::Resolution(miss) => ToolOutcome::success(miss.to_string()),
            other => ToolOutcome::error(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::ResolutionError;
    use crate::session::SessionError;
    use serde_json::json;

    #[test]
    fn test_wire_shapes() {
        assert_eq!(
            serde_json::to_value(ToolOutcome::success("done")).unwrap(),
            json!({ "status": "success", "report": "done" })
        );
        assert_eq!(
            serde_json::to_value(ToolOutcome::error("nope")).unwrap(),
            json!({ "status": "error", "error_message": "nope" })
        );
        let next: ToolOutcome =
            Continuation::new("get_package_status", json!({ "tracking_id": "T" })).into();
        assert_eq!(
            serde_json::to_value(next).unwrap(),
            json!({
                "status": "continue",
                "next_tool": "get_package_status",
                "arguments": { "tracking_id": "T" },
            })
        );
    }

    #[test]
    fn test_resolution_miss_is_success_shaped() {
        let outcome = ToolOutcome::from(OrchestratorError::Resolution(ResolutionError::NotFound {
            query: "Hat".into(),
        }));
        assert_eq!(
            outcome,
            ToolOutcome::success("Could not find a unique product: 'Hat'.")
        );
    }

    #[test]
    fn test_other_failures_are_errors() {
        assert_eq!(
            ToolOutcome::from(OrchestratorError::Session(SessionError::UserIdNotSet)),
            ToolOutcome::error("User ID is not set.")
        );
        assert_eq!(
            ToolOutcome::from(OrchestratorError::FraudBlocked),
            ToolOutcome::error("Possible fraud detected.")
        );
    }
}
