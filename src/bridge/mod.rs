//! # External Tool Bridge
//!
//! Shipment status comes from a separate tool server, not from the gRPC
//! services. The bridge sees that server only as a [`ToolChannel`]: send a
//! tool name and JSON arguments, get text back. [`StdioToolChannel`] is the
//! production channel (a child process speaking MCP over stdin/stdout);
//! tests plug in [`MockToolChannel`](crate::mock::MockToolChannel).

pub mod error;
pub mod stdio;

pub use error::*;
pub use stdio::*;

use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::instrument;

/// Name of the shipment status tool on the tool server.
pub const PACKAGE_STATUS_TOOL: &str = "get_package_status";

/// Request/response access to an external tool server.
#[async_trait]
pub trait ToolChannel: Send + Sync {
    /// Invokes `name` once and returns the tool's text output.
    async fn call_tool(&self, name: &str, arguments: Value) -> Result<String, ExternalToolError>;
}

/// Typed front for the tools the agent uses.
#[derive(Clone)]
pub struct ExternalToolBridge {
    channel: Arc<dyn ToolChannel>,
}

impl ExternalToolBridge {
    pub fn new(channel: Arc<dyn ToolChannel>) -> Self {
        Self { channel }
    }

    /// Free-text shipping status for a tracking id.
    #[instrument(skip(self))]
    pub async fn package_status(&self, tracking_id: &str) -> Result<String, ExternalToolError> {
        self.channel
            .call_tool(PACKAGE_STATUS_TOOL, json!({ "tracking_id": tracking_id }))
            .await
    }
}
