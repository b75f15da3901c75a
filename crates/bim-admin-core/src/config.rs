//! Configuration management for the BIM admin console

use serde::{Deserialize, Serialize};
use std::{
    path::{Path, PathBuf},
    time::Duration,
};

/// Environment variable prefix; nested keys use `__`, e.g. `BIM_ADMIN__API__BASE_URL`
pub const ENV_PREFIX: &str = "BIM_ADMIN";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminConfig {
    /// Backend connection
    #[serde(default)]
    pub api: ApiConfig,

    /// Credential storage
    #[serde(default)]
    pub session: SessionConfig,

    /// List paging
    #[serde(default)]
    pub pagination: PaginationConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Backend connection settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the REST backend
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,

    /// Scheme placed before the token in the `Authorization` header
    #[serde(default = "default_auth_scheme")]
    pub auth_scheme: String,
}

/// Where credentials are persisted between runs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Session file; the platform data directory is used when unset
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// List paging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Items per page
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (json or pretty)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

const fn default_request_timeout() -> u64 {
    30
}

fn default_auth_scheme() -> String {
    "Token".to_string()
}

const fn default_page_size() -> u32 {
    20
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout: default_request_timeout(),
            auth_scheme: default_auth_scheme(),
        }
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl ApiConfig {
    /// Request timeout as a [`Duration`]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }
}

impl SessionConfig {
    /// Resolve the session file location
    pub fn resolve_path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(|| {
            directories::ProjectDirs::from("org", "bim", "bim-admin").map_or_else(
                || PathBuf::from(".bim-admin-session.json"),
                |dirs| dirs.data_dir().join("session.json"),
            )
        })
    }
}

impl LoggingConfig {
    /// Whether JSON output was requested
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl AdminConfig {
    /// Load configuration from an optional `bim-admin.*` file in the working
    /// directory, an explicit file, and `BIM_ADMIN__*` environment variables,
    /// later sources overriding earlier ones
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or the merged values do not
    /// deserialize.
    pub fn load(explicit: Option<&Path>) -> crate::Result<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("bim-admin").required(false));

        if let Some(path) = explicit {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Render the effective configuration as TOML
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Configuration {
            message: e.to_string(),
        })
    }
}
