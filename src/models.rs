use serde::{Deserialize, Serialize};
use std::fmt;

use crate::network::FetchError;

/// HTTP Method enum
#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    #[default]
    GET,
    POST,
}

impl HttpMethod {
    pub fn as_str(&self) -> &str {
        match self {
            HttpMethod::GET => "GET",
            HttpMethod::POST => "POST",
        }
    }

    pub fn has_body(&self) -> bool {
        matches!(self, HttpMethod::POST)
    }

    /// Parse a method name, case-insensitively
    pub fn parse(name: &str) -> Option<HttpMethod> {
        match name.to_ascii_uppercase().as_str() {
            "GET" => Some(HttpMethod::GET),
            "POST" => Some(HttpMethod::POST),
            _ => None,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of the most recent user-facing operation, rendered as a banner.
///
/// `error` and `successfully` are independent flags; nothing here keeps them
/// mutually exclusive.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseState {
    pub error: bool,
    pub successfully: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub message: String,
}

impl Default for ResponseState {
    fn default() -> Self {
        ResponseState {
            error: false,
            successfully: false,
            title: Some(String::new()),
            message: String::new(),
        }
    }
}

impl ResponseState {
    pub fn failure(message: impl Into<String>) -> Self {
        ResponseState {
            error: true,
            successfully: false,
            title: None,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        ResponseState {
            error: false,
            successfully: true,
            title: None,
            message: message.into(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Build a failure banner from a fetch error.
    ///
    /// Server payloads usually carry a `message` or `error` field; those win
    /// over the raw JSON text.
    pub fn from_fetch_error(err: &FetchError) -> Self {
        let message = match err.payload() {
            Some(payload) => payload
                .get("message")
                .or_else(|| payload.get("error"))
                .and_then(|v| v.as_str())
                .map(str::to_string)
                .unwrap_or_else(|| payload.to_string()),
            None => err.to_string(),
        };

        let state = ResponseState::failure(message);
        match err.status() {
            Some(status) => state.with_title(format!("HTTP {}", status)),
            None => state,
        }
    }
}

impl fmt::Display for ResponseState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = if self.error {
            "ERROR"
        } else if self.successfully {
            "OK"
        } else {
            "INFO"
        };

        match self.title.as_deref() {
            Some(title) if !title.is_empty() => write!(f, "[{}] {}: {}", tag, title, self.message),
            _ => write!(f, "[{}] {}", tag, self.message),
        }
    }
}
