use thiserror::Error;

pub type Result<T> = std::result::Result<T, ZendeskError>;

#[derive(Error, Debug)]
pub enum ZendeskError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Invalid params: {0}")]
    InvalidParams(String),
}

impl ZendeskError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        ZendeskError::ConfigError(msg.into())
    }

    pub fn invalid_params(msg: impl Into<String>) -> Self {
        ZendeskError::InvalidParams(msg.into())
    }
}
