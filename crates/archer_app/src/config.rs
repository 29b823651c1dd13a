//! Preference layer configuration file handling (`archer.toml`)

use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use archer_i18n::DEFAULT_LANGUAGE_KEY;
use archer_theme::DEFAULT_THEME_KEY;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level configuration
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct PreferencesConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub appearance: AppearanceConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where and under which keys preferences are persisted
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StorageConfig {
    /// Root directory of the file store
    #[serde(default = "default_directory")]
    pub directory: PathBuf,
    #[serde(default = "default_theme_key")]
    pub theme_key: String,
    #[serde(default = "default_language_key")]
    pub language_key: String,
}

/// Platform data directory for the app, e.g. `~/.local/share/archer/prefs`.
///
/// Falls back to a relative `prefs` only when no home directory is known.
pub fn default_directory() -> PathBuf {
    ProjectDirs::from("com", "archery-scorer", "archer")
        .map(|dirs| dirs.data_dir().join("prefs"))
        .unwrap_or_else(|| PathBuf::from("prefs"))
}

fn default_theme_key() -> String {
    DEFAULT_THEME_KEY.to_string()
}

fn default_language_key() -> String {
    DEFAULT_LANGUAGE_KEY.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            theme_key: default_theme_key(),
            language_key: default_language_key(),
        }
    }
}

/// Platform appearance polling (desktop only)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppearanceConfig {
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

fn default_poll_interval_ms() -> u64 {
    2000
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

impl AppearanceConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms.max(1))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive; `RUST_LOG` overrides it
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

impl PreferencesConfig {
    pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(src)?)
    }

    /// Load from `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(src) => Self::from_toml_str(&src),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("no config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}
