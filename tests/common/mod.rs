// Shared fixtures: a local stand-in for the Zendesk REST API.
#![allow(dead_code)]

use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::Router;
use std::sync::{Arc, Mutex};
use zendesk_mcp::config::{ServerConfig, ZendeskApiConfig};
use zendesk_mcp::{ZendeskConfig, ZendeskServer};

#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: HeaderMap,
    pub body: String,
}

impl CapturedRequest {
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn json_body(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("request body is JSON")
    }
}

#[derive(Clone)]
struct FakeState {
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
    status: StatusCode,
    body: String,
}

pub struct FakeZendesk {
    pub base_url: String,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl FakeZendesk {
    /// Answers every request with `status` and `body`.
    pub async fn start(status: u16, body: &str) -> Self {
        let captured = Arc::new(Mutex::new(Vec::new()));
        let state = FakeState {
            captured: Arc::clone(&captured),
            status: StatusCode::from_u16(status).expect("valid status"),
            body: body.to_string(),
        };
        let app = Router::new().fallback(capture).with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind fake zendesk");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve fake zendesk");
        });

        Self {
            base_url: format!("http://{}", addr),
            captured,
        }
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.captured.lock().expect("captured lock").clone()
    }

    pub fn server(&self) -> ZendeskServer {
        server_with_base_url(Some(self.base_url.clone()))
    }
}

async fn capture(
    State(state): State<FakeState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, String) {
    let query = uri
        .query()
        .unwrap_or_default()
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode(key), decode(value))
        })
        .collect();
    state.captured.lock().expect("captured lock").push(CapturedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        query,
        headers,
        body,
    });
    (state.status, state.body.clone())
}

fn decode(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}

pub fn test_config(base_url: Option<String>) -> ZendeskConfig {
    ZendeskConfig {
        zendesk: ZendeskApiConfig {
            domain: "acme.zendesk.com".to_string(),
            email: "agent@acme.test".to_string(),
            api_token: "secret".to_string(),
            base_url,
        },
        server: ServerConfig::default(),
    }
}

pub fn server_with_base_url(base_url: Option<String>) -> ZendeskServer {
    ZendeskServer::new(test_config(base_url)).expect("build server")
}

/// Server for tests that never reach the network.
pub fn offline_server() -> ZendeskServer {
    server_with_base_url(None)
}
