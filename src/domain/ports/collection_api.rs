use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Errors raised at the REST boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, DNS, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("Server returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body could not be decoded
    #[error("Invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status code, when the server answered at all.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Port for the REST collection endpoints.
///
/// Paths are collection endpoints such as `/api/alerts`. Implementations
/// join them onto their own base URL.
#[async_trait]
pub trait CollectionApi: Send + Sync {
    /// Fetch the full collection as returned by the server, in server order.
    async fn list(&self, path: &str) -> Result<Vec<Value>, ApiError>;

    /// Create one record. Returns whatever the server sent back.
    async fn create(&self, path: &str, body: &Value) -> Result<Value, ApiError>;
}
