use crate::error::{Result, ZendeskError};
use serde::{Deserialize, Serialize};

pub const DOMAIN_VAR: &str = "ZENDESK_DOMAIN";
pub const EMAIL_VAR: &str = "ZENDESK_EMAIL";
pub const API_TOKEN_VAR: &str = "ZENDESK_API_TOKEN";
pub const BASE_URL_VAR: &str = "ZENDESK_BASE_URL";
pub const LOG_LEVEL_VAR: &str = "ZENDESK_MCP_LOG_LEVEL";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZendeskConfig {
    pub zendesk: ZendeskApiConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZendeskApiConfig {
    /// Subdomain host, e.g. `acme.zendesk.com`.
    pub domain: String,
    pub email: String,
    pub api_token: String,
    /// Overrides `https://{domain}`; only needed to point at a local fake.
    #[serde(default)]
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl ZendeskConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> Result<String> {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| {
                    ZendeskError::config_error(format!(
                        "Missing required environment variable: {}",
                        key
                    ))
                })
        };

        let zendesk = ZendeskApiConfig {
            domain: required(DOMAIN_VAR)?,
            email: required(EMAIL_VAR)?,
            api_token: required(API_TOKEN_VAR)?,
            base_url: lookup(BASE_URL_VAR).filter(|v| !v.trim().is_empty()),
        };

        let mut server = ServerConfig::default();
        if let Some(log_level) = lookup(LOG_LEVEL_VAR) {
            if !log_level.trim().is_empty() {
                server.log_level = log_level;
            }
        }

        Ok(Self { zendesk, server })
    }

    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ZendeskError::config_error(format!("Failed to read config file: {}", e))
        })?;

        let config: ZendeskConfig = toml::from_str(&content).map_err(|e| {
            ZendeskError::config_error(format!("Failed to parse config file: {}", e))
        })?;

        for (name, value) in [
            ("domain", &config.zendesk.domain),
            ("email", &config.zendesk.email),
            ("api_token", &config.zendesk.api_token),
        ] {
            if value.trim().is_empty() {
                return Err(ZendeskError::config_error(format!(
                    "Config file is missing zendesk.{}",
                    name
                )));
            }
        }

        Ok(config)
    }

    pub fn api_base_url(&self) -> String {
        match &self.zendesk.base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("https://{}", self.zendesk.domain.trim_end_matches('/')),
        }
    }
}
