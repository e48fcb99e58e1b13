//! HTTP client wrapper - sends JSON requests and classifies responses

use url::Url;
use serde::Serialize;
use serde_json::Value;

use crate::config::{FetchConfig, StatusPolicy};
use crate::constants::{BAD_REQUEST, CREATED};
use crate::models::HttpMethod;
use crate::network::FetchError;

/// Terminal outcome of a call, decided from the status code alone
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Resolved,
    Rejected,
}

/// Classify a response status
pub fn classify(status: u16, policy: StatusPolicy) -> Outcome {
    let rejected = match policy {
        // 400 is listed separately from the 200 threshold; any other status is rejected as well.
        StatusPolicy::ExactOk => status == BAD_REQUEST || status != CREATED,
        StatusPolicy::AnySuccess => !(200..300).contains(&status),
    };

    if rejected {
        Outcome::Rejected
    } else {
        Outcome::Resolved
    }
}

/// Turn `uri` into an absolute URL, joining relative paths onto `base_url`
pub fn resolve_uri(uri: &str, base_url: Option<&str>) -> Result<Url, FetchError> {
    let invalid = |reason: String| FetchError::InvalidUri {
        uri: uri.to_string(),
        reason,
    };

    match Url::parse(uri) {
        Ok(url) => Ok(url),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let base = base_url.ok_or_else(|| invalid("relative URI and no base_url configured".into()))?;
            let base = Url::parse(base).map_err(|e| invalid(format!("bad base_url '{}': {}", base, e)))?;
            base.join(uri).map_err(|e| invalid(e.to_string()))
        }
        Err(e) => Err(invalid(e.to_string())),
    }
}

/// Build a request from the given parameters
fn build_request(
    client: &reqwest::Client,
    url: Url,
    method: HttpMethod,
    content_type: &str,
    body: Option<String>,
) -> reqwest::RequestBuilder {
    let mut req_builder = match method {
        HttpMethod::GET => client.get(url),
        HttpMethod::POST => client.post(url),
    };

    // Set verbatim; `RequestBuilder::json` would overwrite it with the lowercase form.
    req_builder = req_builder.header(reqwest::header::CONTENT_TYPE, content_type);

    if let Some(body) = body {
        if !method.has_body() {
            tracing::debug!(method = %method, "Sending a payload with a method that usually has none");
        }
        req_builder = req_builder.body(body);
    }

    req_builder
}

/// Execute a single request and return the parsed JSON body.
///
/// A present `body` is sent as JSON text, an absent one sends no payload.
/// Responses classified as rejected come back as [`FetchError::RequestFailed`]
/// carrying the parsed body; bodies that are not JSON come back as
/// [`FetchError::Decode`] whatever the status.
pub async fn execute_request<T>(
    client: &reqwest::Client,
    config: &FetchConfig,
    uri: &str,
    method: HttpMethod,
    body: Option<&T>,
) -> Result<Value, FetchError>
where
    T: Serialize + ?Sized,
{
    let url = resolve_uri(uri, config.base_url.as_deref())?;
    let payload = body
        .map(serde_json::to_string)
        .transpose()
        .map_err(FetchError::Encode)?;

    tracing::info!(url = %url, method = %method, has_body = payload.is_some(), "Executing request");

    let req_builder = build_request(client, url.clone(), method, &config.content_type, payload);
    let resp = match req_builder.send().await {
        Ok(resp) => resp,
        Err(e) if e.is_builder() => {
            tracing::warn!(url = %url, error = %e, "Request could not be built");
            return Err(FetchError::InvalidRequest {
                message: format!("Invalid request: {}", e),
                source: e,
            });
        }
        Err(e) => {
            tracing::warn!(url = %url, error = %e, "Transport error");
            return Err(FetchError::transport(e));
        }
    };

    let status = resp.status().as_u16();
    let text = resp.text().await.map_err(FetchError::transport)?;
    let outcome = classify(status, config.status_policy);
    tracing::info!(url = %url, status, ?outcome, "Request completed");

    let value = match serde_json::from_str::<Value>(&text) {
        Ok(value) => value,
        Err(source) => {
            tracing::warn!(url = %url, status, "Response body is not JSON");
            return Err(FetchError::Decode {
                status,
                body: text,
                source,
            });
        }
    };

    match outcome {
        Outcome::Resolved => Ok(value),
        Outcome::Rejected => {
            tracing::warn!(url = %url, status, "Request rejected");
            Err(FetchError::RequestFailed {
                status,
                payload: value,
            })
        }
    }
}

/// Create an HTTP client with default configuration (no timeout)
pub fn create_client() -> reqwest::Client {
    reqwest::Client::builder()
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}
