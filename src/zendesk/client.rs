use super::outcome::Outcome;
use super::request::{ApiRequest, HttpMethod};
use crate::auth::TokenAuth;
use crate::config::ZendeskConfig;
use crate::error::Result;
use crate::tools::tickets::{
    self, CreateTicketInput, GetTicketInput, SearchTicketsInput, UpdateTicketInput,
};
use crate::tools::users::{self, ListUsersInput};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};

/// Single-attempt Zendesk REST client. One method per tool, each issuing one request.
#[derive(Clone)]
pub struct ZendeskClient {
    http: reqwest::Client,
    base_url: String,
    auth: TokenAuth,
}

impl ZendeskClient {
    pub fn new(config: &ZendeskConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("Zendesk-MCP/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base_url: config.api_base_url(),
            auth: TokenAuth::new(&config.zendesk),
        })
    }

    pub async fn search_tickets(&self, input: SearchTicketsInput) -> Outcome {
        self.execute(&tickets::search_tickets(input)).await
    }

    pub async fn get_ticket(&self, input: GetTicketInput) -> Outcome {
        self.execute(&tickets::get_ticket(input)).await
    }

    pub async fn create_ticket(&self, input: CreateTicketInput) -> Outcome {
        self.execute(&tickets::create_ticket(input)).await
    }

    pub async fn update_ticket(&self, input: UpdateTicketInput) -> Outcome {
        self.execute(&tickets::update_ticket(input)).await
    }

    pub async fn list_users(&self, input: ListUsersInput) -> Outcome {
        self.execute(&users::list_users(input)).await
    }

    pub async fn execute(&self, request: &ApiRequest) -> Outcome {
        let url = request.url(&self.base_url);
        tracing::debug!("{} {}", request.method.as_str(), url);

        let mut builder = match request.method {
            HttpMethod::Get => self.http.get(&url),
            HttpMethod::Post => self.http.post(&url),
            HttpMethod::Put => self.http.put(&url),
        }
        .header(AUTHORIZATION, self.auth.header_value())
        .header(CONTENT_TYPE, "application/json")
        .header(ACCEPT, "application/json");
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("{} {} failed: {}", request.method.as_str(), url, e);
                return Outcome::transport(e);
            }
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!("Failed to read response body from {}: {}", url, e);
                return Outcome::transport(e);
            }
        };

        let outcome = Outcome::from_http(status.as_u16(), status.canonical_reason(), body);
        if let Outcome::Failure { error, .. } = &outcome {
            tracing::warn!("{} {} -> {}", request.method.as_str(), url, error);
        }
        outcome
    }
}

impl std::fmt::Debug for ZendeskClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZendeskClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
