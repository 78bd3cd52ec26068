//! Reliefhub - disaster relief board client
//!
//! Keeps four record collections (alerts, helplines, safe locations and
//! volunteers) in step with a REST backend and renders each one into its own
//! display region.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): records, drafts, errors and ports
//! - **Application Layer** (`application`): the sync controllers and the board
//! - **Render Layer** (`render`): HTML cards for each record kind
//! - **Adapters** (`adapters`): in-memory form and display region
//! - **Infrastructure Layer** (`infrastructure`): HTTP client, config, logging
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use reliefhub::adapters::MemoryRegion;
//! use reliefhub::application::{Alerts, CollectionSync, DEFAULT_DISMISS_AFTER};
//! use reliefhub::infrastructure::http::HttpCollectionClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let api = Arc::new(HttpCollectionClient::new("http://127.0.0.1:5000")?);
//!     let region = Arc::new(MemoryRegion::new());
//!     let alerts = CollectionSync::<Alerts>::new(api, region.clone(), DEFAULT_DISMISS_AFTER);
//!     alerts.load().await?;
//!     println!("{}", region.render().await);
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod render;

// Re-export commonly used types for convenience
pub use adapters::{FormState, MemoryRegion};
pub use application::{
    Alerts, BoardRegions, BoardReport, CollectionSync, Helplines, RecordKind, ReliefBoard,
    SafeLocations, Volunteers,
};
pub use domain::models::{
    Alert, AlertDraft, Availability, Config, Helpline, HelplineDraft, LoggingConfig, Notice,
    NoticeLevel, SafeLocation, SafeLocationDraft, Severity, Volunteer, VolunteerDraft,
};
pub use domain::ports::{ApiError, CollectionApi, DisplayRegion, FormSource};
pub use domain::{SyncError, SyncResult};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::http::HttpCollectionClient;
