//! Transport errors and the user-facing message policy
//!
//! Every failure of a backend call is reduced to one status line. The most
//! specific text wins: the error body's `message`, then its `detail`, then a
//! fixed fallback chosen by the caller.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Error body returned by the backend on non-2xx responses
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<Value>,
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorBody {
    /// Parse an error body, `None` when it is not a JSON object
    pub fn parse(text: &str) -> Option<Self> {
        serde_json::from_str(text).ok()
    }

    /// Most specific message carried by the body
    pub fn best_message(&self) -> Option<String> {
        self.message
            .as_ref()
            .and_then(text_of)
            .or_else(|| self.detail.as_ref().and_then(detail_text))
    }
}

fn text_of(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

/// `detail` is a string for handled errors, or a list of `{ msg, .. }`
/// entries for request validation failures
fn detail_text(value: &Value) -> Option<String> {
    match value {
        Value::Array(entries) => {
            let messages: Vec<&str> = entries
                .iter()
                .filter_map(|entry| entry.get("msg").and_then(Value::as_str))
                .filter(|msg| !msg.is_empty())
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        other => text_of(other),
    }
}

/// Failure of a single backend call
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request URL could not be built, e.g. a missing base URL
    #[error("invalid request URL: {0}")]
    InvalidUrl(String),

    /// Connection, timeout or body read failure
    #[error("request failed: {0}")]
    Network(String),

    /// Backend answered with a non-2xx status
    #[error("backend returned HTTP {status}")]
    Status {
        status: u16,
        body: Option<ErrorBody>,
    },
}

impl TransportError {
    /// Message to show the user for this failure
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            TransportError::Status {
                body: Some(body), ..
            } => body.best_message().unwrap_or_else(|| fallback.to_string()),
            _ => fallback.to_string(),
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            TransportError::InvalidUrl(err.to_string())
        } else {
            TransportError::Network(err.to_string())
        }
    }
}
