use crate::mcp::dto::{McpError, McpRequest, McpResponse, JSONRPC_VERSION};
use crate::mcp::handler;
use crate::mcp::methods::{INTERNAL_ERROR, PARSE_ERROR};
use crate::server::ZendeskServer;
use anyhow::Result;
use serde_json::{json, Value};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// Serves newline-delimited JSON-RPC until end of input. One response line per request line.
pub async fn run<R, W>(server: &ZendeskServer, mut reader: R, mut writer: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    // Raw bytes, so a line of invalid UTF-8 is a parse error rather than a read error.
    let mut line = Vec::new();

    loop {
        line.clear();
        match reader.read_until(b'\n', &mut line).await {
            Ok(0) => break, // EOF
            Ok(_) => {
                let Some(response) = handle_bytes(server, &line).await else {
                    continue;
                };
                let response_json = serde_json::to_string(&response)?;

                tracing::debug!("Sending: {}", response_json);

                writer.write_all(response_json.as_bytes()).await?;
                writer.write_all(b"\n").await?;
                writer.flush().await?;
            }
            Err(e) => {
                tracing::error!("Error reading from stdin: {}", e);
                break;
            }
        }
    }

    Ok(())
}

/// Turns one input line into its response. Blank lines yield `None`.
pub async fn handle_line(server: &ZendeskServer, line: &str) -> Option<McpResponse> {
    handle_bytes(server, line.as_bytes()).await
}

/// Byte-level form of [`handle_line`]; bytes that are not UTF-8 yield a parse error.
pub async fn handle_bytes(server: &ZendeskServer, line: &[u8]) -> Option<McpResponse> {
    let line = trim_ascii(line);
    if line.is_empty() {
        return None;
    }

    tracing::debug!("Received: {}", String::from_utf8_lossy(line));

    let value = match serde_json::from_slice::<Value>(line) {
        Ok(value) => value,
        Err(e) => {
            tracing::error!("Failed to parse request: {}", e);
            return Some(McpResponse::failure(
                JSONRPC_VERSION.to_string(),
                None,
                McpError::new(PARSE_ERROR, "Parse error").with_data(json!({ "details": e.to_string() })),
            ));
        }
    };

    Some(dispatch_value(server, value).await)
}

async fn dispatch_value(server: &ZendeskServer, value: Value) -> McpResponse {
    // Recovered up front so a failing request still correlates.
    let id = value.get("id").filter(|id| !id.is_null()).cloned();

    let request = match serde_json::from_value::<McpRequest>(value) {
        Ok(request) => request,
        Err(e) => return internal_error(id, e),
    };

    match handler::handle_request(server, request).await {
        Ok(response) => response,
        Err(e) => internal_error(id, e),
    }
}

fn internal_error(id: Option<Value>, fault: impl std::fmt::Display) -> McpResponse {
    tracing::error!("Internal error handling request {:?}: {}", id, fault);
    McpResponse::failure(
        JSONRPC_VERSION.to_string(),
        id,
        McpError::new(INTERNAL_ERROR, format!("Internal error: {}", fault)),
    )
}

fn trim_ascii(bytes: &[u8]) -> &[u8] {
    let start = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(bytes.len());
    let end = bytes
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(start, |i| i + 1);
    &bytes[start..end]
}
