//! Common test utilities for integration tests
//!
//! Provides shared fixtures and helpers used across multiple integration
//! test files.

use std::sync::Arc;
use std::time::Duration;

use mockito::{Mock, ServerGuard};
use reliefhub::{CollectionApi, DisplayRegion, HttpCollectionClient, MemoryRegion};
use serde_json::Value;

/// Notice delay short enough for real-time tests.
#[allow(dead_code)]
pub const SHORT_DISMISS: Duration = Duration::from_millis(50);

/// Client pointed at a mock server.
pub fn client_for(server: &ServerGuard) -> Arc<dyn CollectionApi> {
    Arc::new(HttpCollectionClient::new(server.url()).expect("Failed to create client"))
}

/// A fresh in-memory region, plus the same region as a port.
#[allow(dead_code)]
pub fn region() -> (Arc<MemoryRegion>, Arc<dyn DisplayRegion>) {
    let region = Arc::new(MemoryRegion::new());
    let port = Arc::clone(&region) as Arc<dyn DisplayRegion>;
    (region, port)
}

/// Mock a GET on `path` answering 200 with `body`.
#[allow(dead_code)]
pub async fn mock_list(server: &mut ServerGuard, path: &str, body: &Value) -> Mock {
    server
        .mock("GET", path)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await
}

/// Setup test logging
///
/// Initializes tracing subscriber for test output.
#[allow(dead_code)]
pub fn setup_test_logging() {
    use tracing_subscriber::fmt;

    let _ = fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
