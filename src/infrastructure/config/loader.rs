use std::path::Path;

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::config::Config;

/// Directory holding project configuration.
pub const CONFIG_DIR: &str = ".reliefhub";

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Server base_url cannot be empty")]
    EmptyBaseUrl,

    #[error("Invalid server base_url: {0}. Must be an absolute http(s) URL")]
    InvalidBaseUrl(String),

    #[error("Invalid timeout_secs: 0. Leave unset for the transport default")]
    ZeroTimeout,

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    #[error("Invalid dismiss_after_ms: 0. Notices must stay visible for some time")]
    ZeroDismissDelay,
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .reliefhub/config.yaml (project config, created by init)
    /// 3. .reliefhub/local.yaml (project local overrides, optional)
    /// 4. Environment variables (RELIEFHUB_* prefix, highest priority)
    pub fn load() -> Result<Config> {
        let config: Config = Self::figment()
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// The full provider stack used by [`ConfigLoader::load`].
    pub fn figment() -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(Path::new(CONFIG_DIR).join("config.yaml")))
            .merge(Yaml::file(Path::new(CONFIG_DIR).join("local.yaml")))
            .merge(Env::prefixed("RELIEFHUB_").split("__"))
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .extract()
            .context(format!(
                "Failed to load config from {}",
                path.as_ref().display()
            ))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        let base_url = config.server.base_url.trim();
        if base_url.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        match reqwest::Url::parse(base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            _ => return Err(ConfigError::InvalidBaseUrl(base_url.to_string())),
        }

        if config.server.timeout_secs == Some(0) {
            return Err(ConfigError::ZeroTimeout);
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        if config.notices.dismiss_after_ms == 0 {
            return Err(ConfigError::ZeroDismissDelay);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.base_url, "http://127.0.0.1:5000");
        assert_eq!(config.server.timeout_secs, None);
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.notices.dismiss_after_ms, 5000);
        ConfigLoader::validate(&config).expect("Default config should be valid");
    }

    #[test]
    fn test_yaml_parsing() {
        let yaml = r"
server:
  base_url: https://relief.example.org
  timeout_secs: 10
logging:
  level: debug
  format: json
notices:
  dismiss_after_ms: 2500
";

        let config: Config = serde_yaml::from_str(yaml).expect("YAML should parse");

        assert_eq!(config.server.base_url, "https://relief.example.org");
        assert_eq!(config.server.timeout_secs, Some(10));
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.notices.dismiss_after_ms, 2500);

        ConfigLoader::validate(&config).expect("Parsed config should be valid");
    }

    #[test]
    fn test_validate_empty_base_url() {
        let mut config = Config::default();
        config.server.base_url = "  ".to_string();
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::EmptyBaseUrl)
        ));
    }

    #[test]
    fn test_validate_relative_base_url() {
        let mut config = Config::default();
        config.server.base_url = "/api".to_string();
        match ConfigLoader::validate(&config) {
            Err(ConfigError::InvalidBaseUrl(url)) => assert_eq!(url, "/api"),
            other => panic!("Expected InvalidBaseUrl error, got {other:?}"),
        }

        config.server.base_url = "ftp://example.org".to_string();
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn test_validate_zero_timeout() {
        let mut config = Config::default();
        config.server.timeout_secs = Some(0);
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::ZeroTimeout)
        ));
    }

    #[test]
    fn test_validate_invalid_log_level() {
        let mut config = Config::default();
        config.logging.level = "invalid".to_string();

        match ConfigLoader::validate(&config) {
            Err(ConfigError::InvalidLogLevel(level)) => assert_eq!(level, "invalid"),
            _ => panic!("Expected InvalidLogLevel error"),
        }
    }

    #[test]
    fn test_validate_invalid_log_format() {
        let mut config = Config::default();
        config.logging.format = "xml".to_string();

        match ConfigLoader::validate(&config) {
            Err(ConfigError::InvalidLogFormat(format)) => assert_eq!(format, "xml"),
            _ => panic!("Expected InvalidLogFormat error"),
        }
    }

    #[test]
    fn test_validate_zero_dismiss_delay() {
        let mut config = Config::default();
        config.notices.dismiss_after_ms = 0;
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::ZeroDismissDelay)
        ));
    }

    #[test]
    fn test_env_override() {
        temp_env::with_vars(
            [
                ("RELIEFHUB_SERVER__BASE_URL", Some("http://backend:8080")),
                ("RELIEFHUB_NOTICES__DISMISS_AFTER_MS", Some("1000")),
            ],
            || {
                let config: Config = ConfigLoader::figment().extract().unwrap();
                assert_eq!(config.server.base_url, "http://backend:8080");
                assert_eq!(config.notices.dismiss_after_ms, 1000);
                assert_eq!(config.logging.format, "pretty");
            },
        );
    }

    #[test]
    fn test_load_from_file_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "logging:\n  level: info").unwrap();
        file.flush().unwrap();

        let config = ConfigLoader::load_from_file(file.path()).unwrap();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
        assert_eq!(config.server.base_url, "http://127.0.0.1:5000");
    }

    #[test]
    fn test_hierarchical_merging() {
        let mut base_file = NamedTempFile::new().unwrap();
        writeln!(
            base_file,
            "server:\n  base_url: http://base:5000\nlogging:\n  level: info\n  format: json"
        )
        .unwrap();
        base_file.flush().unwrap();

        let mut override_file = NamedTempFile::new().unwrap();
        writeln!(override_file, "logging:\n  level: debug").unwrap();
        override_file.flush().unwrap();

        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(base_file.path()))
            .merge(Yaml::file(override_file.path()))
            .extract()
            .unwrap();

        assert_eq!(
            config.logging.level, "debug",
            "Override should win for nested fields"
        );
        assert_eq!(
            config.logging.format, "json",
            "Base value should persist when not overridden"
        );
        assert_eq!(config.server.base_url, "http://base:5000");
    }
}
