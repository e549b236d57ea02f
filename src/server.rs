use crate::config::ZendeskConfig;
use crate::error::Result;
use crate::mcp::dto::{ResourceContents, ToolCall, ToolResult};
use crate::resources::{
    resource_descriptors, Resource, ResourceKind, RECENT_TICKETS_QUERY, RESOURCE_MIME_TYPE,
};
use crate::tools::tickets::SearchTicketsInput;
use crate::tools::users::{ListUsersInput, UserRole};
use crate::tools::{call_tool, tool_descriptors, Tool, ToolName};
use crate::zendesk::{Outcome, ZendeskClient};
use serde_json::json;

pub struct ZendeskServer {
    client: ZendeskClient,
    tools: Vec<Tool>,
    resources: Vec<Resource>,
}

impl ZendeskServer {
    pub fn new(config: ZendeskConfig) -> Result<Self> {
        let client = ZendeskClient::new(&config)?;
        Ok(Self {
            client,
            tools: tool_descriptors(),
            resources: resource_descriptors(),
        })
    }

    pub fn client(&self) -> &ZendeskClient {
        &self.client
    }

    pub fn get_tools(&self) -> &[Tool] {
        &self.tools
    }

    pub fn get_resources(&self) -> &[Resource] {
        &self.resources
    }

    pub async fn handle_tool_call(&self, tool_call: ToolCall) -> Result<ToolResult> {
        tracing::info!("Handling tool call: {}", tool_call.name);

        let Some(tool) = ToolName::from_name(&tool_call.name) else {
            tracing::warn!("Unknown tool requested: {}", tool_call.name);
            let payload = json!({ "error": format!("Unknown tool: {}", tool_call.name) });
            return Ok(ToolResult {
                content: serde_json::to_string_pretty(&payload)?,
                is_error: true,
            });
        };

        let outcome = call_tool(&self.client, tool, tool_call.arguments).await?;
        Ok(ToolResult {
            content: outcome.to_pretty()?,
            is_error: outcome.is_failure(),
        })
    }

    pub async fn read_resource(&self, uri: &str) -> Result<ResourceContents> {
        tracing::info!("Reading resource: {}", uri);

        let text = match ResourceKind::from_uri(uri) {
            Some(kind) => self.fetch_resource(kind).await.to_pretty()?,
            None => {
                tracing::warn!("Unknown resource requested: {}", uri);
                serde_json::to_string_pretty(&json!({ "error": format!("Unknown resource: {}", uri) }))?
            }
        };

        Ok(ResourceContents {
            uri: uri.to_string(),
            mime_type: RESOURCE_MIME_TYPE.to_string(),
            text,
        })
    }

    async fn fetch_resource(&self, kind: ResourceKind) -> Outcome {
        match kind {
            ResourceKind::RecentTickets => {
                self.client
                    .search_tickets(SearchTicketsInput {
                        query: RECENT_TICKETS_QUERY.to_string(),
                        status: None,
                        limit: None,
                    })
                    .await
            }
            ResourceKind::Agents => {
                self.client
                    .list_users(ListUsersInput {
                        role: Some(UserRole::Agent),
                        limit: None,
                    })
                    .await
            }
        }
    }
}
