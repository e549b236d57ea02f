use super::helpers::{enum_values, DEFAULT_LIMIT};
use super::tickets::{TicketPriority, TicketStatus, TicketType};
use super::users::UserRole;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tool {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolName {
    SearchTickets,
    GetTicket,
    CreateTicket,
    UpdateTicket,
    ListUsers,
}

impl ToolName {
    pub const ALL: [ToolName; 5] = [
        ToolName::SearchTickets,
        ToolName::GetTicket,
        ToolName::CreateTicket,
        ToolName::UpdateTicket,
        ToolName::ListUsers,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ToolName::SearchTickets => "search_tickets",
            ToolName::GetTicket => "get_ticket",
            ToolName::CreateTicket => "create_ticket",
            ToolName::UpdateTicket => "update_ticket",
            ToolName::ListUsers => "list_users",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.as_str() == name)
    }

    pub fn descriptor(&self) -> Tool {
        let (description, input_schema) = match self {
            ToolName::SearchTickets => (
                "Search Zendesk tickets using a query string",
                json!({
                    "type": "object",
                    "properties": {
                        "query": { "type": "string", "description": "Search query (Zendesk search syntax)" },
                        "status": {
                            "type": "string",
                            "enum": enum_values(&TicketStatus::ALL),
                            "description": "Filter by ticket status"
                        },
                        "limit": {
                            "type": "integer",
                            "description": "Maximum number of results",
                            "default": DEFAULT_LIMIT
                        }
                    },
                    "required": ["query"]
                }),
            ),
            ToolName::GetTicket => (
                "Get a ticket by ID, including its comments and users",
                json!({
                    "type": "object",
                    "properties": {
                        "ticket_id": { "type": "integer", "description": "Ticket ID" }
                    },
                    "required": ["ticket_id"]
                }),
            ),
            ToolName::CreateTicket => (
                "Create a new ticket",
                json!({
                    "type": "object",
                    "properties": {
                        "subject": { "type": "string", "description": "Ticket subject" },
                        "description": { "type": "string", "description": "Ticket description (first comment)" },
                        "requester_email": { "type": "string", "description": "Requester email address" },
                        "priority": {
                            "type": "string",
                            "enum": enum_values(&TicketPriority::ALL),
                            "description": "Ticket priority"
                        },
                        "type": {
                            "type": "string",
                            "enum": enum_values(&TicketType::ALL),
                            "description": "Ticket type"
                        }
                    },
                    "required": ["subject", "description", "requester_email"]
                }),
            ),
            ToolName::UpdateTicket => (
                "Update an existing ticket's status, priority, or add a comment",
                json!({
                    "type": "object",
                    "properties": {
                        "ticket_id": { "type": "integer", "description": "Ticket ID" },
                        "status": {
                            "type": "string",
                            "enum": enum_values(&TicketStatus::ALL),
                            "description": "New ticket status"
                        },
                        "priority": {
                            "type": "string",
                            "enum": enum_values(&TicketPriority::ALL),
                            "description": "New ticket priority"
                        },
                        "comment": { "type": "string", "description": "Comment to add to the ticket" }
                    },
                    "required": ["ticket_id"]
                }),
            ),
            ToolName::ListUsers => (
                "List users, optionally filtered by role",
                json!({
                    "type": "object",
                    "properties": {
                        "role": {
                            "type": "string",
                            "enum": enum_values(&UserRole::ALL),
                            "description": "Filter by user role"
                        },
                        "limit": {
                            "type": "integer",
                            "description": "Maximum number of results",
                            "default": DEFAULT_LIMIT
                        }
                    }
                }),
            ),
        };
        Tool {
            name: self.as_str().to_string(),
            description: description.to_string(),
            input_schema,
        }
    }
}

pub fn tool_descriptors() -> Vec<Tool> {
    ToolName::ALL.iter().map(ToolName::descriptor).collect()
}
