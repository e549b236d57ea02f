use crate::tools::helpers::lenient;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketStatus {
    New,
    Open,
    Pending,
    Hold,
    Solved,
    Closed,
}

impl TicketStatus {
    pub const ALL: [TicketStatus; 6] = [
        TicketStatus::New,
        TicketStatus::Open,
        TicketStatus::Pending,
        TicketStatus::Hold,
        TicketStatus::Solved,
        TicketStatus::Closed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::New => "new",
            TicketStatus::Open => "open",
            TicketStatus::Pending => "pending",
            TicketStatus::Hold => "hold",
            TicketStatus::Solved => "solved",
            TicketStatus::Closed => "closed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketPriority {
    Low,
    Normal,
    High,
    Urgent,
}

impl TicketPriority {
    pub const ALL: [TicketPriority; 4] = [
        TicketPriority::Low,
        TicketPriority::Normal,
        TicketPriority::High,
        TicketPriority::Urgent,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketType {
    Problem,
    Incident,
    Question,
    Task,
}

impl TicketType {
    pub const ALL: [TicketType; 4] = [
        TicketType::Problem,
        TicketType::Incident,
        TicketType::Question,
        TicketType::Task,
    ];
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchTicketsInput {
    pub query: String,
    #[serde(default, deserialize_with = "lenient")]
    pub status: Option<TicketStatus>,
    #[serde(default, deserialize_with = "lenient")]
    pub limit: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GetTicketInput {
    pub ticket_id: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateTicketInput {
    pub subject: String,
    pub description: String,
    pub requester_email: String,
    #[serde(default, deserialize_with = "lenient")]
    pub priority: Option<TicketPriority>,
    #[serde(default, rename = "type", deserialize_with = "lenient")]
    pub ticket_type: Option<TicketType>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateTicketInput {
    pub ticket_id: u64,
    #[serde(default, deserialize_with = "lenient")]
    pub status: Option<TicketStatus>,
    #[serde(default, deserialize_with = "lenient")]
    pub priority: Option<TicketPriority>,
    #[serde(default, deserialize_with = "lenient")]
    pub comment: Option<String>,
}
