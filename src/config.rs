//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::dom::PageElements;
use crate::fetch::Endpoints;
use crate::model::UserPreferences;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub endpoints: EndpointsConfig,

    #[serde(default)]
    pub preferences: UserPreferences,

    #[serde(default)]
    pub elements: PageElements,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the dashboard server lives
#[derive(Debug, Clone, Deserialize)]
pub struct EndpointsConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_summary_path")]
    pub summary_path: String,

    #[serde(default = "default_health_path")]
    pub health_path: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_ms: u64,
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_summary_path() -> String {
    Endpoints::default().summary
}

fn default_health_path() -> String {
    Endpoints::default().health
}

fn default_request_timeout() -> u64 {
    10_000 // 10 seconds
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            summary_path: default_summary_path(),
            health_path: default_health_path(),
            request_timeout_ms: default_request_timeout(),
        }
    }
}

impl EndpointsConfig {
    pub fn paths(&self) -> Endpoints {
        Endpoints {
            summary: self.summary_path.clone(),
            health: self.health_path.clone(),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment.
    ///
    /// Nothing is logged here; the caller reports `source` and `skipped`
    /// once its subscriber is installed.
    pub fn load_default() -> LoadedConfig {
        Self::load_first(&default_config_paths())
    }

    /// Load the first candidate that exists and parses, falling back to
    /// environment-only config
    pub fn load_first(candidates: &[PathBuf]) -> LoadedConfig {
        let mut skipped = Vec::new();

        for path in candidates.iter().filter(|p| p.exists()) {
            match Self::load_with_env(path) {
                Ok(config) => {
                    return LoadedConfig {
                        config,
                        source: Some(path.clone()),
                        skipped,
                    }
                }
                Err(e) => skipped.push(e),
            }
        }

        LoadedConfig {
            config: Self::from_env(),
            source: None,
            skipped,
        }
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        // Endpoint overrides
        if let Ok(url) = std::env::var("DESKFIT_BASE_URL") {
            self.endpoints.base_url = url;
        }
        if let Ok(timeout) = std::env::var("DESKFIT_REQUEST_TIMEOUT_MS") {
            if let Ok(ms) = timeout.parse() {
                self.endpoints.request_timeout_ms = ms;
            }
        }

        // Preference overrides
        if let Ok(theme) = std::env::var("DESKFIT_THEME") {
            self.preferences.theme = theme;
        }
        if let Ok(font_size) = std::env::var("DESKFIT_FONT_SIZE") {
            self.preferences.font_size = font_size;
        }
        if let Ok(accent_color) = std::env::var("DESKFIT_ACCENT_COLOR") {
            self.preferences.accent_color = accent_color;
        }

        // Logging overrides
        if let Ok(level) = std::env::var("DESKFIT_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("DESKFIT_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Result of a default-location search
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the config came from; `None` means defaults plus environment
    pub source: Option<PathBuf>,
    /// Candidates that existed but failed to load
    pub skipped: Vec<ConfigError>,
}

/// Standard config locations, in search order
pub fn default_config_paths() -> Vec<PathBuf> {
    [
        dirs::config_dir().map(|p| p.join("deskfit").join("config.toml")),
        Some(PathBuf::from("/etc/deskfit/config.toml")),
        Some(PathBuf::from("./config.toml")),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r##"# DeskFit Dashboard Configuration
#
# Environment variables override these settings:
# - DESKFIT_BASE_URL
# - DESKFIT_REQUEST_TIMEOUT_MS
# - DESKFIT_THEME
# - DESKFIT_FONT_SIZE
# - DESKFIT_ACCENT_COLOR
# - DESKFIT_LOG_LEVEL
# - DESKFIT_LOG_FORMAT

[endpoints]
# DeskFit server serving the dashboard endpoints
base_url = "http://localhost:5000"

# Daily summary series for the chart
summary_path = "/get_summary_data"

# One-line health status
health_path = "/get_health_status"

# Per-request timeout (ms)
request_timeout_ms = 10000

[preferences]
# "dark" or anything else (light)
theme = "light"

# CSS font-size token, applied as data-font-size
font_size = "medium"

# CSS color token, applied as --accent-color
accent_color = "#007bff"

[elements]
# Element ids the dashboard page provides
chart_canvas = "dailySummaryChart"
status = "statusResponse"
suggestions = "suggestions"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"##
    .to_string()
}
