//! Error taxonomy of the API client.
//!
//! The client never recovers from these itself; it hands them to the caller, which
//! decides what to show and whether to try again.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Login rejected (bad credentials).
    #[error("authentication failed: {0}")]
    Auth(String),

    /// Network failure or timeout; no response was received.
    #[error("request failed: {0}")]
    Transport(String),

    /// Non-2xx response. `message` is the server's own text, empty when it sent none.
    #[error("server responded with {status}{}", detail(.message))]
    Status { status: u16, message: String },

    /// A 2xx response whose body is not what the endpoint promises.
    #[error("unexpected response body: {0}")]
    Decode(String),

    #[error("invalid url `{0}`")]
    InvalidUrl(String),

    /// A listing was requested without a usable session token.
    #[error("no session token available")]
    MissingToken,
}

fn detail(message: &str) -> String {
    if message.is_empty() {
        String::new()
    } else {
        format!(": {message}")
    }
}

impl ApiError {
    /// HTTP status of the failed response, if there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Transport(e.to_string())
        }
    }
}

/// Extract a human-readable message from an error body.
///
/// Understands the shapes the API uses (`message`, `detail`, `error`,
/// `non_field_errors: [..]`); anything else yields `None`.
pub(crate) fn server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    for key in ["message", "detail", "error"] {
        if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
            if !text.trim().is_empty() {
                return Some(text.to_string());
            }
        }
    }
    value
        .get("non_field_errors")
        .and_then(|v| v.as_array())
        .and_then(|errors| errors.first())
        .and_then(|v| v.as_str())
        .map(str::to_string)
}
