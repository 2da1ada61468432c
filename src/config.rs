//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::api::{Endpoints, HttpApiConfig};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default = "Endpoints::default")]
    pub endpoints: Endpoints,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub reviews: ReviewsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Agency backend configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Prefix for relative image paths
    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:5000/api".to_string()
}

fn default_image_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_request_timeout() -> u64 {
    15
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            image_base_url: default_image_base_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

/// Local store configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

fn default_data_dir() -> String {
    dirs::data_local_dir()
        .map(|p| p.join("helperhub").to_string_lossy().to_string())
        .unwrap_or_else(|| "./helperhub_data".to_string())
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

/// Reviews feed configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewsConfig {
    #[serde(default = "default_reviews_url")]
    pub url: String,

    #[serde(default = "default_reviews_ttl")]
    pub ttl_hours: u64,

    #[serde(default = "default_reviews_enabled")]
    pub enabled: bool,
}

fn default_reviews_url() -> String {
    "http://localhost:5000/api/reviews".to_string()
}

fn default_reviews_ttl() -> u64 {
    24
}

fn default_reviews_enabled() -> bool {
    true
}

impl ReviewsConfig {
    /// How long a fetched summary stays fresh
    pub fn ttl(&self) -> Result<chrono::Duration, ConfigError> {
        i64::try_from(self.ttl_hours)
            .ok()
            .and_then(chrono::Duration::try_hours)
            .ok_or_else(|| ConfigError::Invalid {
                field: "reviews.ttl_hours",
                error: format!("{} hours is out of range", self.ttl_hours),
            })
    }
}

impl Default for ReviewsConfig {
    fn default() -> Self {
        Self {
            url: default_reviews_url(),
            ttl_hours: default_reviews_ttl(),
            enabled: default_reviews_enabled(),
        }
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

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Resolve the config for a run. An explicit path must load; the
    /// default locations are tried in order and skipped when broken.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_with_env(path);
        }
        Ok(Self::load_default())
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("helperhub").join("config.toml")),
            Some(PathBuf::from("./helperhub.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::debug!("Using default config with environment overrides");
        Self::from_env()
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply `HELPERHUB_*` overrides from any variable source
    pub fn apply_overrides<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = var("HELPERHUB_API_URL") {
            self.api.base_url = url;
        }
        if let Some(base) = var("HELPERHUB_IMAGE_BASE") {
            self.api.image_base_url = base;
        }
        if let Some(data_dir) = var("HELPERHUB_DATA_DIR") {
            self.storage.data_dir = data_dir;
        }
        if let Some(level) = var("HELPERHUB_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("HELPERHUB_LOG_FORMAT") {
            self.logging.format = format;
        }
    }

    /// Data directory with a leading `~` expanded
    pub fn data_dir(&self) -> PathBuf {
        let raw = self.storage.data_dir.as_str();
        match raw.strip_prefix("~/") {
            Some(rest) => dirs::home_dir()
                .map(|home| home.join(rest))
                .unwrap_or_else(|| PathBuf::from(raw)),
            None => PathBuf::from(raw),
        }
    }

    /// Settings for [`HttpAgencyApi`](crate::api::HttpAgencyApi)
    pub fn http_config(&self) -> HttpApiConfig {
        HttpApiConfig {
            base_url: self.api.base_url.clone(),
            request_timeout_ms: self.api.request_timeout_secs.saturating_mul(1000),
            endpoints: self.endpoints.clone(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Invalid value for {field}: {error}")]
    Invalid { field: &'static str, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# HelperHub Configuration
#
# Environment variables override these settings:
# - HELPERHUB_API_URL
# - HELPERHUB_IMAGE_BASE
# - HELPERHUB_DATA_DIR
# - HELPERHUB_LOG_LEVEL
# - HELPERHUB_LOG_FORMAT

[api]
# Agency backend, including the /api prefix
base_url = "http://localhost:5000/api"

# Prefix for relative profile photo paths
image_base_url = "http://localhost:5000"

# Request timeout in seconds
request_timeout_secs = 15

[endpoints]
# Paths relative to base_url; {id} is the profile id
login = "auth/login"
signup = "auth/signup"
logout = "auth/logout"
profile = "auth/profile"
simple_callback = "auth/simple-callback"
maids = "maids"
maid = "maids/{id}"
user_favorite = "user-favorites/{id}"
favorites = "user/favorites"
contact = "contact"

[storage]
# Directory for the local store
data_dir = "~/.local/share/helperhub"

[reviews]
# Reviews feed shown on the home page
url = "http://localhost:5000/api/reviews"

# How long a fetched copy stays fresh (hours)
ttl_hours = 24

enabled = true

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
