//! MCP server over newline-delimited stdio
//!
//! Each line on the input is one JSON-RPC message; each response is written
//! as one line on the output. Logging must never go to stdout.

use agent_tools::ToolRegistry;
use serde_json::{Value, json};
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

use crate::Result;
use crate::protocol::{
    CallToolParams, JSONRPC_VERSION, JsonRpcError, JsonRpcRequest, JsonRpcResponse,
    PROTOCOL_VERSION, ServerInfo,
};

/// Serves the tools of a [`ToolRegistry`] to one MCP client
pub struct McpServer {
    registry: Arc<ToolRegistry>,
    info: ServerInfo,
}

impl McpServer {
    /// Create a server reporting this crate's name and version
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self {
            registry,
            info: ServerInfo {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }

    /// Override the name and version reported by `initialize`
    pub fn with_server_info(mut self, name: impl Into<String>, version: impl Into<String>) -> Self {
        self.info = ServerInfo {
            name: name.into(),
            version: version.into(),
        };
        self
    }

    /// Serve on the process stdin/stdout until stdin closes
    pub async fn serve_stdio(&self) -> Result<()> {
        self.serve(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
            .await
    }

    /// Serve on an arbitrary line-oriented transport until the reader is exhausted
    pub async fn serve<R, W>(&self, reader: R, mut writer: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        info!(
            server = %self.info.name,
            version = %self.info.version,
            tools = self.registry.len(),
            "MCP server listening on stdio"
        );

        let mut lines = reader.lines();
        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }

            if let Some(response) = self.handle_message(&line).await? {
                writer.write_all(response.as_bytes()).await?;
                writer.write_all(b"\n").await?;
                writer.flush().await?;
            }
        }

        info!("Input closed, MCP server stopping");
        Ok(())
    }

    /// Handle one raw message, returning the serialized response if one is due
    pub async fn handle_message(&self, line: &str) -> Result<Option<String>> {
        let response = match serde_json::from_str::<Value>(line) {
            Err(e) => Some(JsonRpcResponse::failure(
                Value::Null,
                JsonRpcError::parse_error(e),
            )),
            Ok(value) => {
                let id = value.get("id").cloned().unwrap_or(Value::Null);
                match serde_json::from_value::<JsonRpcRequest>(value) {
                    Ok(request) => self.handle_request(request).await,
                    Err(e) => Some(JsonRpcResponse::failure(id, JsonRpcError::invalid_request(e))),
                }
            }
        };

        response
            .map(|r| serde_json::to_string(&r))
            .transpose()
            .map_err(Into::into)
    }

    /// Dispatch a parsed request; notifications produce no response
    pub async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        if request.jsonrpc != JSONRPC_VERSION {
            let id = request.id.unwrap_or(Value::Null);
            return Some(JsonRpcResponse::failure(
                id,
                JsonRpcError::invalid_request(format!("unsupported jsonrpc version {}", request.jsonrpc)),
            ));
        }

        debug!(method = %request.method, "Received request");
        let notification = request.is_notification();
        let outcome = self.dispatch(&request.method, request.params).await;

        if notification {
            if let Err(error) = outcome {
                debug!(message = %error.message, "Ignoring failed notification");
            }
            return None;
        }

        let id = request.id.unwrap_or(Value::Null);
        Some(match outcome {
            Ok(result) => JsonRpcResponse::success(id, result),
            Err(error) => JsonRpcResponse::failure(id, error),
        })
    }

    async fn dispatch(&self, method: &str, params: Option<Value>) -> std::result::Result<Value, JsonRpcError> {
        match method {
            "initialize" => Ok(self.initialize(params.as_ref())),
            "notifications/initialized" => {
                info!("Client initialized");
                Ok(Value::Null)
            }
            "ping" => Ok(json!({})),
            "tools/list" => Ok(json!({ "tools": self.registry.definitions() })),
            "tools/call" => self.call_tool(params).await,
            other => Err(JsonRpcError::method_not_found(other)),
        }
    }

    fn initialize(&self, params: Option<&Value>) -> Value {
        let protocol_version = params
            .and_then(|p| p.get("protocolVersion"))
            .and_then(Value::as_str)
            .unwrap_or(PROTOCOL_VERSION);

        json!({
            "protocolVersion": protocol_version,
            "capabilities": {
                "tools": { "listChanged": false }
            },
            "serverInfo": self.info,
        })
    }

    async fn call_tool(&self, params: Option<Value>) -> std::result::Result<Value, JsonRpcError> {
        let params: CallToolParams = serde_json::from_value(params.unwrap_or(Value::Null))
            .map_err(JsonRpcError::invalid_params)?;

        let tool = self.registry.get(&params.name).ok_or_else(|| {
            warn!(tool = %params.name, "Call to unknown tool");
            JsonRpcError::invalid_params(format!("Unknown tool: {}", params.name))
        })?;

        let arguments = params.arguments.unwrap_or_else(|| json!({}));
        let output = tool.invoke(arguments).await;
        debug!(tool = %params.name, is_error = output.is_error, "Tool call finished");

        serde_json::to_value(output).map_err(JsonRpcError::internal_error)
    }
}
