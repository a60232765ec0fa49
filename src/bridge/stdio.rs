//! # Stdio Tool Channel
//!
//! Talks MCP (JSON-RPC 2.0, one message per line) to a tool server running as
//! a child process. The process is owned by a single actor task; callers hold
//! a [`StdioToolChannel`] and exchange messages with it, exactly one request
//! in flight at a time.
//!
//! The process is started on the first call, not at construction, so the
//! agent can come up before the tool is installed. When a call fails in a way
//! that leaves the process in an unknown state (I/O error, protocol error,
//! timeout) the process is killed and the next call starts a fresh one. A
//! process that exited on its own between calls is replaced the same way.

use super::error::ExternalToolError;
use super::ToolChannel;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::process::Stdio;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines};
use tokio::process::{Child, ChildStdin, ChildStdout, Command};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

/// MCP protocol revision sent in `initialize`.
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// How to start the tool server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ToolCommand {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

struct ToolRequest {
    name: String,
    arguments: Value,
    respond_to: oneshot::Sender<Result<String, ExternalToolError>>,
}

/// Client half of the bridge. Cheap to clone.
#[derive(Clone)]
pub struct StdioToolChannel {
    sender: mpsc::Sender<ToolRequest>,
}

impl StdioToolChannel {
    /// Spawns the bridge task. `timeout` bounds each call, including process
    /// start-up when the call has to start the process.
    pub fn spawn(command: ToolCommand, timeout: Duration) -> (Self, JoinHandle<()>) {
        let (sender, receiver) = mpsc::channel(16);
        let actor = StdioToolActor {
            receiver,
            command,
            timeout,
            process: None,
        };
        (Self { sender }, tokio::spawn(actor.run()))
    }
}

#[async_trait]
impl ToolChannel for StdioToolChannel {
    #[instrument(skip(self, arguments))]
    async fn call_tool(&self, name: &str, arguments: Value) -> Result<String, ExternalToolError> {
        debug!(%arguments, "Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ToolRequest {
                name: name.to_string(),
                arguments,
                respond_to,
            })
            .await
            .map_err(|_| ExternalToolError::Closed)?;
        response.await.map_err(|_| ExternalToolError::Closed)?
    }
}

struct StdioToolActor {
    receiver: mpsc::Receiver<ToolRequest>,
    command: ToolCommand,
    timeout: Duration,
    process: Option<McpProcess>,
}

impl StdioToolActor {
    async fn run(mut self) {
        info!(program = %self.command.program, "Tool bridge started");

        while let Some(request) = self.receiver.recv().await {
            let result = self.handle(&request.name, request.arguments).await;
            match &result {
                Ok(_) => debug!(tool = %request.name, "Tool call ok"),
                Err(e) => {
                    warn!(tool = %request.name, error = %e, "Tool call failed");
                    if e.poisons_process() {
                        self.process = None;
                    }
                }
            }
            let _ = request.respond_to.send(result);
        }

        info!("Tool bridge shutdown");
    }

    async fn handle(&mut self, name: &str, arguments: Value) -> Result<String, ExternalToolError> {
        let timeout = self.timeout;
        if self.process.as_mut().is_some_and(McpProcess::has_exited) {
            info!(program = %self.command.program, "Tool process exited, restarting");
            self.process = None;
        }
        if self.process.is_none() {
            let process = tokio::time::timeout(timeout, McpProcess::start(&self.command))
                .await
                .map_err(|_| ExternalToolError::Timeout(timeout))??;
            self.process = Some(process);
        }
        let process = self.process.as_mut().ok_or(ExternalToolError::Closed)?;
        tokio::time::timeout(timeout, process.call_tool(name, arguments))
            .await
            .map_err(|_| ExternalToolError::Timeout(timeout))?
    }
}

#[derive(Debug, Deserialize)]
struct RpcMessage {
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    method: Option<String>,
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<RpcError>,
}

#[derive(Debug, Deserialize)]
struct RpcError {
    code: i64,
    message: String,
}

#[derive(Debug, Deserialize)]
struct CallToolResult {
    #[serde(default)]
    content: Vec<ContentItem>,
    #[serde(default, rename = "isError")]
    is_error: bool,
}

#[derive(Debug, Deserialize)]
struct ContentItem {
    #[serde(default)]
    text: Option<String>,
}

/// A running, initialized tool server. Killed on drop.
struct McpProcess {
    child: Child,
    stdin: ChildStdin,
    stdout: Lines<BufReader<ChildStdout>>,
    next_id: u64,
}

impl McpProcess {
    async fn start(command: &ToolCommand) -> Result<Self, ExternalToolError> {
        info!(program = %command.program, args = ?command.args, "Starting tool process");
        let mut child = Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| ExternalToolError::Spawn(format!("{}: {e}", command.program)))?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| ExternalToolError::Spawn("stdin not captured".to_string()))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| ExternalToolError::Spawn("stdout not captured".to_string()))?;

        let mut process = Self {
            child,
            stdin,
            stdout: BufReader::new(stdout).lines(),
            next_id: 0,
        };
        process.initialize().await?;
        Ok(process)
    }

    fn has_exited(&mut self) -> bool {
        matches!(self.child.try_wait(), Ok(Some(_)))
    }

    async fn initialize(&mut self) -> Result<(), ExternalToolError> {
        let result = self
            .request(
                "initialize",
                json!({
                    "protocolVersion": PROTOCOL_VERSION,
                    "capabilities": {},
                    "clientInfo": {
                        "name": env!("CARGO_PKG_NAME"),
                        "version": env!("CARGO_PKG_VERSION"),
                    },
                }),
            )
            .await?;
        debug!(server = ?result.get("serverInfo"), "Tool server initialized");
        self.send(&json!({
            "jsonrpc": "2.0",
            "method": "notifications/initialized",
        }))
        .await
    }

    async fn call_tool(
        &mut self,
        name: &str,
        arguments: Value,
    ) -> Result<String, ExternalToolError> {
        let result = self
            .request("tools/call", json!({ "name": name, "arguments": arguments }))
            .await?;
        let result: CallToolResult = serde_json::from_value(result)
            .map_err(|e| {
                ExternalToolError::Protocol(format!("unexpected tools/call result: {e}"))
            })?;

        let text = result
            .content
            .into_iter()
            .filter_map(|item| item.text)
            .collect::<Vec<_>>()
            .join("\n");
        if result.is_error {
            Err(ExternalToolError::ToolFailed(text))
        } else {
            Ok(text)
        }
    }

    async fn request(&mut self, method: &str, params: Value) -> Result<Value, ExternalToolError> {
        self.next_id += 1;
        let id = self.next_id;
        self.send(&json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": params,
        }))
        .await?;

        loop {
            let line = self
                .stdout
                .next_line()
                .await
                .map_err(|e| ExternalToolError::Io(e.to_string()))?
                .ok_or_else(|| {
                    ExternalToolError::Io("tool process closed its output".to_string())
                })?;

            let message: RpcMessage = match serde_json::from_str(&line) {
                Ok(message) => message,
                Err(_) => {
                    debug!(%line, "Skipping non-protocol output");
                    continue;
                }
            };
            let answers_us = message.method.is_none()
                && message.id.as_ref().and_then(Value::as_u64) == Some(id);
            if !answers_us {
                debug!(?message, "Skipping unrelated message");
                continue;
            }

            if let Some(error) = message.error {
                return Err(ExternalToolError::Rejected {
                    code: error.code,
                    message: error.message,
                });
            }
            return message.result.ok_or_else(|| {
                ExternalToolError::Protocol(format!("{method} response has no result"))
            });
        }
    }

    async fn send(&mut self, message: &Value) -> Result<(), ExternalToolError> {
        let mut line = message.to_string();
        line.push('\n');
        self.stdin
            .write_all(line.as_bytes())
            .await
            .map_err(|e| ExternalToolError::Io(e.to_string()))?;
        self.stdin
            .flush()
            .await
            .map_err(|e| ExternalToolError::Io(e.to_string()))
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    /// A shell stand-in for the tracker: answers `initialize`, prints a
    /// banner, then answers one `tools/call`.
    const FAKE_SERVER: &str = r#"
read init
echo '{"jsonrpc":"2.0","id":1,"result":{"protocolVersion":"2024-11-05","capabilities":{},"serverInfo":{"name":"fake","version":"0"}}}'
read initialized
echo '--- Shipping Server: Received request ---'
read call
echo '{"jsonrpc":"2.0","id":2,"result":{"content":[{"type":"text","text":"Your package with tracking ID TRK-1 is currently in transit in Memphis, TN."}],"isError":false}}'
"#;

    const FAILING_SERVER: &str = r#"
read init
echo '{"jsonrpc":"2.0","id":1,"result":{}}'
read initialized
read call
echo '{"jsonrpc":"2.0","id":2,"result":{"content":[{"type":"text","text":"unknown tracking id"}],"isError":true}}'
"#;

    /// Answers a single `tools/call` and exits.
    const ONE_SHOT_SERVER: &str = r#"
read init
echo '{"jsonrpc":"2.0","id":1,"result":{}}'
read initialized
read call
echo '{"jsonrpc":"2.0","id":2,"result":{"content":[{"type":"text","text":"delivered"}],"isError":false}}'
"#;

    /// Rejects the first call with a JSON-RPC error, then answers the second.
    const REJECTING_SERVER: &str = r#"
read init
echo '{"jsonrpc":"2.0","id":1,"result":{}}'
read initialized
read call
echo '{"jsonrpc":"2.0","id":2,"error":{"code":-32602,"message":"Unknown tool"}}'
read call
echo '{"jsonrpc":"2.0","id":3,"result":{"content":[{"type":"text","text":"in transit"}],"isError":false}}'
"#;

    fn sh(script: &str) -> ToolCommand {
        ToolCommand::new("sh", ["-c", script])
    }

    #[tokio::test]
    async fn test_handshake_and_tool_call() {
        let (channel, handle) = StdioToolChannel::spawn(sh(FAKE_SERVER), Duration::from_secs(5));

        let status = channel
            .call_tool("get_package_status", json!({ "tracking_id": "TRK-1" }))
            .await
            .unwrap();
        assert_eq!(
            status,
            "Your package with tracking ID TRK-1 is currently in transit in Memphis, TN."
        );

        drop(channel);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_tool_error_result() {
        let (channel, _handle) =
            StdioToolChannel::spawn(sh(FAILING_SERVER), Duration::from_secs(5));

        let err = channel
            .call_tool("get_package_status", json!({ "tracking_id": "nope" }))
            .await
            .unwrap_err();
        assert_eq!(err, ExternalToolError::ToolFailed("unknown tracking id".to_string()));
    }

    #[tokio::test]
    async fn test_missing_program_is_spawn_error() {
        let command = ToolCommand::new("/nonexistent/shipping-tracker", Vec::<String>::new());
        let (channel, _handle) = StdioToolChannel::spawn(command, Duration::from_secs(5));

        let err = channel
            .call_tool("get_package_status", json!({ "tracking_id": "TRK-1" }))
            .await
            .unwrap_err();
        assert!(matches!(err, ExternalToolError::Spawn(_)));
    }

    #[tokio::test]
    async fn test_process_exiting_early_is_io_error() {
        let (channel, _handle) = StdioToolChannel::spawn(sh("exit 0"), Duration::from_secs(5));

        let err = channel
            .call_tool("get_package_status", json!({ "tracking_id": "TRK-1" }))
            .await
            .unwrap_err();
        assert!(matches!(err, ExternalToolError::Io(_)));
    }

    #[tokio::test]
    async fn test_silent_process_times_out() {
        let (channel, _handle) =
            StdioToolChannel::spawn(sh("sleep 5"), Duration::from_millis(100));

        let err = channel
            .call_tool("get_package_status", json!({ "tracking_id": "TRK-1" }))
            .await
            .unwrap_err();
        assert_eq!(err, ExternalToolError::Timeout(Duration::from_millis(100)));
    }

    #[tokio::test]
    async fn test_exited_process_is_restarted_on_next_call() {
        let (channel, _handle) =
            StdioToolChannel::spawn(sh(ONE_SHOT_SERVER), Duration::from_secs(5));

        let first = channel
            .call_tool("get_package_status", json!({ "tracking_id": "TRK-1" }))
            .await
            .unwrap();
        assert_eq!(first, "delivered");

        tokio::time::sleep(Duration::from_millis(200)).await;

        let second = channel
            .call_tool("get_package_status", json!({ "tracking_id": "TRK-2" }))
            .await
            .unwrap();
        assert_eq!(second, "delivered");
    }

    #[tokio::test]
    async fn test_rejected_request_keeps_process() {
        let (channel, _handle) =
            StdioToolChannel::spawn(sh(REJECTING_SERVER), Duration::from_secs(5));

        let err = channel
            .call_tool("no_such_tool", json!({}))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ExternalToolError::Rejected {
                code: -32602,
                message: "Unknown tool".to_string(),
            }
        );

        // A restarted process would reject this call as well.
        let status = channel
            .call_tool("get_package_status", json!({ "tracking_id": "TRK-1" }))
            .await
            .unwrap();
        assert_eq!(status, "in transit");
    }
}
