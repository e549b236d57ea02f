use crate::config::ZendeskApiConfig;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Zendesk API token auth: `Basic base64("{email}/token:{token}")`.
pub fn basic_auth_header(email: &str, api_token: &str) -> String {
    let credential = format!("{}/token:{}", email, api_token);
    format!("Basic {}", STANDARD.encode(credential.as_bytes()))
}

#[derive(Clone)]
pub struct TokenAuth {
    header_value: String,
}

impl TokenAuth {
    pub fn new(cfg: &ZendeskApiConfig) -> Self {
        Self {
            header_value: basic_auth_header(&cfg.email, &cfg.api_token),
        }
    }

    pub fn header_value(&self) -> &str {
        &self.header_value
    }
}

// Keep the token out of debug output.
impl std::fmt::Debug for TokenAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenAuth").finish_non_exhaustive()
    }
}
