//! Convenience handle over [`execute_request`]

use serde::Serialize;
use serde_json::Value;

use crate::config::FetchConfig;
use crate::models::HttpMethod;
use crate::network::client::{create_client, execute_request};
use crate::network::FetchError;

/// Shared client plus configuration. Cloning is cheap; clones share the
/// connection pool.
#[derive(Clone, Debug)]
pub struct Api {
    client: reqwest::Client,
    config: FetchConfig,
}

impl Default for Api {
    fn default() -> Self {
        Self::new()
    }
}

impl Api {
    pub fn new() -> Self {
        Self::with_config(FetchConfig::default())
    }

    pub fn with_config(config: FetchConfig) -> Self {
        Api {
            client: create_client(),
            config,
        }
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    pub async fn request<T>(
        &self,
        uri: &str,
        method: HttpMethod,
        body: Option<&T>,
    ) -> Result<Value, FetchError>
    where
        T: Serialize + ?Sized,
    {
        execute_request(&self.client, &self.config, uri, method, body).await
    }

    /// GET without a payload
    pub async fn get(&self, uri: &str) -> Result<Value, FetchError> {
        self.request::<Value>(uri, HttpMethod::GET, None).await
    }

    /// POST `body` serialized as JSON
    pub async fn post<T>(&self, uri: &str, body: &T) -> Result<Value, FetchError>
    where
        T: Serialize + ?Sized,
    {
        self.request(uri, HttpMethod::POST, Some(body)).await
    }

    /// POST with no payload at all
    pub async fn post_empty(&self, uri: &str) -> Result<Value, FetchError> {
        self.request::<Value>(uri, HttpMethod::POST, None).await
    }
}
