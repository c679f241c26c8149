mod defaults;


use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::MockError;
use defaults::*;

/// Top-level mockdesk configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub mockdesk: GeneralConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    /// Fallback filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Also write logs to `<data_dir>/logs/mockdesk.log`.
    #[serde(default)]
    pub log_file: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            data_dir: default_data_dir(),
            log_level: default_log_level(),
            log_file: false,
        }
    }
}

/// HTTP API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_api_host")]
    pub host: String,
    #[serde(default = "default_api_port")]
    pub port: u16,
    /// Expose `POST /api/__seed` and `POST /api/__reset` for test suites.
    #[serde(default = "default_true")]
    pub allow_seeding: bool,
    #[serde(default = "default_body_limit")]
    pub body_limit_bytes: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_api_host(),
            port: default_api_port(),
            allow_seeding: true,
            body_limit_bytes: default_body_limit(),
        }
    }
}

/// Which key/value backend holds the collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    Memory,
    Sqlite,
}

/// Local store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// "memory" or "sqlite".
    #[serde(default = "default_storage_backend")]
    pub backend: String,
    #[serde(default = "default_db_path")]
    pub db_path: String,
    /// Seed document applied at server start. Empty = none.
    #[serde(default)]
    pub seed_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: default_storage_backend(),
            db_path: default_db_path(),
            seed_file: String::new(),
        }
    }
}

impl StorageConfig {
    /// Resolve the configured backend name.
    pub fn backend_kind(&self) -> Result<BackendKind, MockError> {
        match self.backend.as_str() {
            "memory" => Ok(BackendKind::Memory),
            "sqlite" => Ok(BackendKind::Sqlite),
            other => Err(MockError::Config(format!(
                "unknown storage backend '{other}', expected 'memory' or 'sqlite'"
            ))),
        }
    }

    /// Seed file path with `~` expanded, if one is configured.
    pub fn seed_path(&self) -> Option<String> {
        if self.seed_file.trim().is_empty() {
            None
        } else {
            Some(shellexpand(&self.seed_file))
        }
    }
}

/// Expand `~` to home directory.
pub fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return format!("{}/{rest}", home.to_string_lossy());
        }
    }
    path.to_string()
}

/// Load configuration from a TOML file.
///
/// Falls back to defaults if the file does not exist.
pub fn load(path: &str) -> Result<Config, MockError> {
    let path = Path::new(path);
    if !path.exists() {
        tracing::info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| MockError::Config(format!("failed to read {}: {}", path.display(), e)))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| MockError::Config(format!("failed to parse config: {}", e)))?;

    config.storage.backend_kind()?;

    Ok(config)
}
