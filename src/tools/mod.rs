pub mod descriptors;
pub mod helpers;
pub mod tickets;
pub mod users;

pub use descriptors::{tool_descriptors, Tool, ToolName};

use crate::error::{Result, ZendeskError};
use crate::zendesk::{Outcome, ZendeskClient};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Runs one tool against the client. Argument faults surface as `Err`, remote failures as `Outcome`.
pub async fn call_tool(client: &ZendeskClient, tool: ToolName, arguments: Value) -> Result<Outcome> {
    let outcome = match tool {
        ToolName::SearchTickets => client.search_tickets(parse_arguments(tool, arguments)?).await,
        ToolName::GetTicket => client.get_ticket(parse_arguments(tool, arguments)?).await,
        ToolName::CreateTicket => client.create_ticket(parse_arguments(tool, arguments)?).await,
        ToolName::UpdateTicket => client.update_ticket(parse_arguments(tool, arguments)?).await,
        ToolName::ListUsers => client.list_users(parse_arguments(tool, arguments)?).await,
    };
    Ok(outcome)
}

pub(crate) fn parse_arguments<T: DeserializeOwned>(tool: ToolName, arguments: Value) -> Result<T> {
    let arguments = if arguments.is_null() {
        Value::Object(Default::default())
    } else {
        arguments
    };
    serde_json::from_value(arguments)
        .map_err(|e| ZendeskError::invalid_params(format!("{}: {}", tool.as_str(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_arguments_are_an_empty_mapping() {
        let input: users::ListUsersInput = parse_arguments(ToolName::ListUsers, Value::Null).unwrap();
        assert!(input.role.is_none());
    }

    #[test]
    fn missing_required_argument_names_the_tool() {
        let err = parse_arguments::<tickets::GetTicketInput>(ToolName::GetTicket, json!({}))
            .unwrap_err();
        assert!(matches!(err, ZendeskError::InvalidParams(_)));
        assert!(err.to_string().contains("get_ticket"));
    }

    #[test]
    fn non_object_arguments_are_rejected() {
        assert!(parse_arguments::<tickets::SearchTicketsInput>(
            ToolName::SearchTickets,
            json!("nope")
        )
        .is_err());
    }
}
