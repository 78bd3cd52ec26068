//! reqwest implementation of the collection API port.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Response};
use serde_json::Value;
use tracing::debug;

use crate::domain::models::ServerConfig;
use crate::domain::ports::{ApiError, CollectionApi};

/// HTTP client for the relief backend's collection endpoints.
///
/// Requests are never retried or cancelled; without a configured timeout the
/// transport default applies.
#[derive(Debug, Clone)]
pub struct HttpCollectionClient {
    /// Reusable HTTP client with connection pooling
    http: Client,
    /// Base URL with no trailing slash
    base_url: String,
}

impl HttpCollectionClient {
    /// Create a client for `base_url` with transport defaults.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_config(&ServerConfig {
            base_url: base_url.into(),
            timeout_secs: None,
        })
    }

    /// Create a client from the server section of the configuration.
    pub fn with_config(config: &ServerConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Turn a non-success response into [`ApiError::Status`].
    async fn check_status(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read error response".to_string());
        Err(ApiError::Status {
            status: status.as_u16(),
            body,
        })
    }

    async fn read_body(response: Response) -> Result<Vec<u8>, ApiError> {
        response
            .bytes()
            .await
            .map(|bytes| bytes.to_vec())
            .map_err(|e| ApiError::Network(e.to_string()))
    }
}

#[async_trait]
impl CollectionApi for HttpCollectionClient {
    async fn list(&self, path: &str) -> Result<Vec<Value>, ApiError> {
        let url = self.url(path);
        debug!(%url, "GET collection");
        let response = self
            .http
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let body = Self::read_body(Self::check_status(response).await?).await?;
        serde_json::from_slice(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn create(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let url = self.url(path);
        debug!(%url, "POST record");
        let response = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let bytes = Self::read_body(Self::check_status(response).await?).await?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
    }
}
