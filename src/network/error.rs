use serde_json::Value;
use thiserror::Error;

/// Failures of a single fetch call
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Invalid URI '{uri}': {reason}")]
    InvalidUri { uri: String, reason: String },

    #[error("Could not encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// The request was rejected locally before anything was sent
    #[error("{message}")]
    InvalidRequest {
        message: String,
        #[source]
        source: reqwest::Error,
    },

    /// No response was received
    #[error("{message}")]
    Transport {
        message: String,
        #[source]
        source: reqwest::Error,
    },

    /// A response arrived but its status was classified as a failure
    #[error("Request failed with status {status}: {payload}")]
    RequestFailed { status: u16, payload: Value },

    /// The response body was not JSON
    #[error("Invalid JSON body (status {status}): {source}")]
    Decode {
        status: u16,
        body: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    pub(crate) fn transport(e: reqwest::Error) -> Self {
        let message = if e.is_connect() {
            format!("Connection failed: {}", e)
        } else {
            format!("Request failed: {}", e)
        };
        FetchError::Transport { message, source: e }
    }

    /// Status of the response, when one was received
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::RequestFailed { status, .. } | FetchError::Decode { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }

    /// Parsed JSON body of a rejected response
    pub fn payload(&self) -> Option<&Value> {
        match self {
            FetchError::RequestFailed { payload, .. } => Some(payload),
            _ => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, FetchError::Transport { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_failed_accessors() {
        let err = FetchError::RequestFailed {
            status: 400,
            payload: json!({"error": "invalid"}),
        };
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.payload(), Some(&json!({"error": "invalid"})));
        assert!(!err.is_transport());
    }

    #[test]
    fn test_decode_has_status_but_no_payload() {
        let source = serde_json::from_str::<Value>("<html>").unwrap_err();
        let err = FetchError::Decode {
            status: 502,
            body: "<html>".into(),
            source,
        };
        assert_eq!(err.status(), Some(502));
        assert!(err.payload().is_none());
    }
}
