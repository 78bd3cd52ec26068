//! Command-line interface.

pub mod commands;
pub mod display;
pub mod output;
pub mod types;

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::domain::models::Config;
use crate::domain::ports::CollectionApi;
use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::http::HttpCollectionClient;

pub use output::handle_error;
pub use types::{Cli, Commands, KindArg};

/// Resolve the configuration for one invocation.
///
/// An explicit file replaces the project files; `base_url` wins over both.
pub fn load_config(path: Option<&Path>, base_url: Option<&str>) -> Result<Config> {
    let mut config = match path {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };
    if let Some(base_url) = base_url {
        config.server.base_url = base_url.to_string();
        ConfigLoader::validate(&config).context("Invalid --base-url")?;
    }
    Ok(config)
}

/// What every backend-facing command needs.
pub struct CliContext {
    pub config: Config,
    pub api: Arc<dyn CollectionApi>,
}

impl CliContext {
    /// Connect to the configured backend.
    pub fn new(config: Config) -> Result<Self> {
        let client = HttpCollectionClient::with_config(&config.server)?;
        Ok(Self::with_api(config, Arc::new(client)))
    }

    /// Use an already built API, e.g. a test double.
    pub fn with_api(config: Config, api: Arc<dyn CollectionApi>) -> Self {
        Self { config, api }
    }

    /// How long notices stay visible.
    pub const fn dismiss_after(&self) -> Duration {
        Duration::from_millis(self.config.notices.dismiss_after_ms)
    }
}
