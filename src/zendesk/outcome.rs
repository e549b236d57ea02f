use crate::error::Result;
use serde::Serialize;
use serde_json::Value;

/// Result of a single remote call. Failures are values, not errors.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Success(Value),
    Failure {
        error: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        body: Option<String>,
    },
}

impl Outcome {
    pub fn failure(error: impl Into<String>, body: Option<String>) -> Self {
        Outcome::Failure {
            error: error.into(),
            body,
        }
    }

    pub fn transport(cause: impl std::fmt::Display) -> Self {
        Outcome::failure(format!("Request failed: {}", cause), None)
    }

    /// Classifies a completed HTTP exchange by status, decoding 2xx bodies as JSON.
    pub fn from_http(status: u16, reason: Option<&str>, body: String) -> Self {
        if !(200..300).contains(&status) {
            let status_line = match reason {
                Some(reason) => format!("HTTP {}: {}", status, reason),
                None => format!("HTTP {}", status),
            };
            return Outcome::failure(status_line, Some(body));
        }
        if body.trim().is_empty() {
            return Outcome::Success(Value::Null);
        }
        match serde_json::from_str(&body) {
            Ok(value) => Outcome::Success(value),
            Err(e) => Outcome::failure(format!("Invalid JSON response: {}", e), Some(body)),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure { .. })
    }

    pub fn to_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
