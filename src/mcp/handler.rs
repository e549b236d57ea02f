use crate::error::{Result, ZendeskError};
use crate::server::ZendeskServer;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use super::dto::{McpError, McpRequest, McpResponse, ResourceRead, ToolCall};
use super::methods::{McpMethod, METHOD_NOT_FOUND, PROTOCOL_VERSION, SERVER_NAME, SERVER_VERSION};

/// Routes one request. `Err` means an uncontained fault; the caller maps it to an internal error.
pub async fn handle_request(server: &ZendeskServer, request: McpRequest) -> Result<McpResponse> {
    let jsonrpc = request.jsonrpc_marker();
    let method_name = match &request.method {
        Some(Value::String(name)) => name.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    };

    let Some(method) = request.method_name().and_then(McpMethod::from_name) else {
        tracing::warn!("Method not found: {}", method_name);
        return Ok(McpResponse::failure(
            jsonrpc,
            request.id,
            McpError::new(METHOD_NOT_FOUND, format!("Method not found: {}", method_name)),
        ));
    };

    let result = match method {
        McpMethod::Initialize => json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": { "tools": {}, "resources": {} },
            "serverInfo": { "name": SERVER_NAME, "version": SERVER_VERSION }
        }),
        McpMethod::Ping => json!({}),
        McpMethod::ToolsList => json!({ "tools": server.get_tools() }),
        McpMethod::ResourcesList => json!({ "resources": server.get_resources() }),
        McpMethod::ToolsCall => {
            let tool_call: ToolCall = parse_params(method, request.params)?;
            let result = server.handle_tool_call(tool_call).await?;
            json!({
                "content": [
                    { "type": "text", "text": result.content }
                ],
                "isError": result.is_error
            })
        }
        McpMethod::ResourcesRead => {
            let read: ResourceRead = parse_params(method, request.params)?;
            let contents = server.read_resource(&read.uri).await?;
            json!({ "contents": [contents] })
        }
    };

    Ok(McpResponse::success(jsonrpc, request.id, result))
}

fn parse_params<T: DeserializeOwned>(method: McpMethod, params: Option<Value>) -> Result<T> {
    let params = params.ok_or_else(|| {
        ZendeskError::invalid_params(format!("{}: missing params", method.as_str()))
    })?;
    serde_json::from_value(params)
        .map_err(|e| ZendeskError::invalid_params(format!("{}: {}", method.as_str(), e)))
}
