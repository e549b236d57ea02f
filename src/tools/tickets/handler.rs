use super::dto::{CreateTicketInput, GetTicketInput, SearchTicketsInput, UpdateTicketInput};
use crate::tools::helpers::page_size;
use crate::zendesk::ApiRequest;
use serde_json::{json, Map, Value};

pub fn search_tickets(input: SearchTicketsInput) -> ApiRequest {
    let query = match input.status {
        Some(status) => format!("{} status:{}", input.query, status.as_str()),
        None => input.query,
    };
    ApiRequest::get("/api/v2/search.json")
        .with_query("query", query)
        .with_query("sort_by", "updated_at")
        .with_query("sort_order", "desc")
        .with_query("per_page", page_size(input.limit))
}

pub fn get_ticket(input: GetTicketInput) -> ApiRequest {
    ApiRequest::get(format!("/api/v2/tickets/{}.json", input.ticket_id))
        .with_query("include", "comments,users")
}

pub fn create_ticket(input: CreateTicketInput) -> ApiRequest {
    let mut ticket = Map::new();
    ticket.insert("subject".into(), Value::String(input.subject));
    ticket.insert("comment".into(), json!({ "body": input.description }));
    ticket.insert("requester".into(), json!({ "email": input.requester_email }));
    if let Some(priority) = input.priority {
        ticket.insert("priority".into(), json!(priority));
    }
    if let Some(ticket_type) = input.ticket_type {
        ticket.insert("type".into(), json!(ticket_type));
    }
    ApiRequest::post("/api/v2/tickets.json", json!({ "ticket": ticket }))
}

pub fn update_ticket(input: UpdateTicketInput) -> ApiRequest {
    // Absent fields stay out of the body; Zendesk treats null as "clear".
    let mut ticket = Map::new();
    if let Some(status) = input.status {
        ticket.insert("status".into(), json!(status));
    }
    if let Some(priority) = input.priority {
        ticket.insert("priority".into(), json!(priority));
    }
    if let Some(comment) = input.comment {
        ticket.insert("comment".into(), json!({ "body": comment }));
    }
    ApiRequest::put(
        format!("/api/v2/tickets/{}.json", input.ticket_id),
        json!({ "ticket": ticket }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::tickets::dto::{TicketPriority, TicketStatus, TicketType};
    use crate::zendesk::HttpMethod;
    use pretty_assertions::assert_eq;

    #[test]
    fn search_appends_status_and_defaults_limit() {
        let req = search_tickets(
            serde_json::from_value(json!({"query": "foo", "status": "open"})).unwrap(),
        );
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "/api/v2/search.json");
        assert_eq!(req.query_value("query"), Some("foo status:open"));
        assert_eq!(req.query_value("sort_by"), Some("updated_at"));
        assert_eq!(req.query_value("sort_order"), Some("desc"));
        assert_eq!(req.query_value("per_page"), Some("25"));
        assert!(req.body.is_none());
    }

    #[test]
    fn search_drops_unknown_status() {
        let req = search_tickets(SearchTicketsInput {
            query: "printer".into(),
            status: None,
            limit: Some(5),
        });
        assert_eq!(req.query_value("query"), Some("printer"));
        assert_eq!(req.query_value("per_page"), Some("5"));

        let input: SearchTicketsInput =
            serde_json::from_value(json!({"query": "printer", "status": "archived"})).unwrap();
        assert_eq!(input.status, None);
    }

    #[test]
    fn get_ticket_includes_comments_and_users() {
        let req = get_ticket(GetTicketInput { ticket_id: 42 });
        assert_eq!(req.path, "/api/v2/tickets/42.json");
        assert_eq!(req.query_value("include"), Some("comments,users"));
    }

    #[test]
    fn create_ticket_nests_fields_under_ticket() {
        let req = create_ticket(CreateTicketInput {
            subject: "Printer on fire".into(),
            description: "Smoke everywhere".into(),
            requester_email: "jo@example.com".into(),
            priority: Some(TicketPriority::Urgent),
            ticket_type: Some(TicketType::Incident),
        });
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "/api/v2/tickets.json");
        assert_eq!(
            req.body,
            Some(json!({
                "ticket": {
                    "subject": "Printer on fire",
                    "comment": { "body": "Smoke everywhere" },
                    "requester": { "email": "jo@example.com" },
                    "priority": "urgent",
                    "type": "incident"
                }
            }))
        );
    }

    #[test]
    fn create_ticket_omits_unset_optionals() {
        let input: CreateTicketInput = serde_json::from_value(json!({
            "subject": "s",
            "description": "d",
            "requester_email": "e@example.com",
            "priority": "critical"
        }))
        .unwrap();
        let body = create_ticket(input).body.unwrap();
        let ticket = body["ticket"].as_object().unwrap();
        assert!(!ticket.contains_key("priority"));
        assert!(!ticket.contains_key("type"));
    }

    #[test]
    fn update_with_only_comment() {
        let input: UpdateTicketInput =
            serde_json::from_value(json!({"ticket_id": 1, "comment": "hi"})).unwrap();
        let req = update_ticket(input);
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.path, "/api/v2/tickets/1.json");
        assert_eq!(req.body, Some(json!({"ticket": {"comment": {"body": "hi"}}})));
    }

    #[test]
    fn update_with_status_and_priority() {
        let req = update_ticket(UpdateTicketInput {
            ticket_id: 3,
            status: Some(TicketStatus::Solved),
            priority: Some(TicketPriority::Low),
            comment: None,
        });
        assert_eq!(
            req.body,
            Some(json!({"ticket": {"status": "solved", "priority": "low"}}))
        );
    }

    #[test]
    fn missing_ticket_id_is_rejected() {
        let err = serde_json::from_value::<GetTicketInput>(json!({})).unwrap_err();
        assert!(err.to_string().contains("ticket_id"));
    }
}
