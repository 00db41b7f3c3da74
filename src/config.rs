//! Configuration module
//!
//! Reads `~/.config/registry-console/config.toml`. Every section and field
//! is optional; missing values fall back to the defaults below.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::shared::{normalize_page_sizes, ConfigError, PaginationState, RetryConfig};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "REGISTRY_CONSOLE_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub pagination: PaginationConfig,
    pub retry: RetryConfig,
    pub logging: LoggingConfig,
}

/// Backend connection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout_secs: 30,
        }
    }
}

/// List page defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    pub default_page_size: u32,
    /// Sizes offered by the page-size selector
    pub page_size_options: Vec<u32>,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: 20,
            page_size_options: vec![10, 20, 50, 100],
        }
    }
}

impl PaginationConfig {
    pub fn page_size_options(&self) -> Vec<u32> {
        normalize_page_sizes(&self.page_size_options, self.default_page_size)
    }

    /// Pagination state for a newly opened list. `page_size` overrides the
    /// configured default for this list only; `reset` still returns to it.
    pub fn state(&self, initial_page: u32, page_size: Option<u32>) -> PaginationState {
        let default_size = self.default_page_size.max(1);
        PaginationState::new(initial_page, page_size.unwrap_or(default_size))
            .with_default_page_size(default_size)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// trace, debug, info, warn, error (or any `EnvFilter` directive)
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl AppConfig {
    /// Load the config file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("No config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };
        Ok(toml::from_str(&raw)?)
    }

    /// Write the config file, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }
}

/// `$REGISTRY_CONSOLE_CONFIG`, else `<config dir>/registry-console/config.toml`.
pub fn default_config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return PathBuf::from(path);
    }
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("registry-console")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [api]
            base_url = "https://registry.example.com"

            [pagination]
            default_page_size = 50

            [retry]
            max_attempts = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.api.base_url, "https://registry.example.com");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.pagination.default_page_size, 50);
        assert_eq!(config.pagination.page_size_options(), vec![10, 20, 50, 100]);
        assert_eq!(config.retry.max_attempts, 5);
        assert_eq!(config.retry.initial_delay, Duration::from_millis(200));
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = AppConfig::default();
        config.pagination.page_size_options = vec![25, 75];
        config.logging.format = "json".into();
        config.save(&path).unwrap();

        assert_eq!(AppConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_invalid_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[pagination]\ndefault_page_size = \"many\"").unwrap();
        assert!(matches!(AppConfig::load(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_state_override_keeps_default_for_reset() {
        let pagination = PaginationConfig::default();
        let mut state = pagination.state(1, Some(100));
        assert_eq!(state.page_size(), 100);
        state.reset();
        assert_eq!(state.page_size(), 20);
    }
}
