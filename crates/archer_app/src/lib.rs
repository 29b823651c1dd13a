//! Archer preference layer
//!
//! Wires the theme and language stores to one storage backend and one
//! platform signal, and exposes the read-only view screens consume.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use archer_app::{init_logging, Preferences, PreferencesConfig};
//! use archer_i18n::Catalogs;
//! use archer_theme::{SharedAppearance, SystemAppearance};
//! use std::sync::Arc;
//!
//! let config = PreferencesConfig::load("archer.toml".as_ref())?;
//! init_logging(&config.logging.filter);
//!
//! let catalogs = Catalogs::from_dir("locales")?;
//! let appearance = Arc::new(SharedAppearance::from_source(&SystemAppearance));
//! let prefs = Preferences::open(&config, catalogs, appearance).await;
//!
//! let palette = prefs.palette();
//! let title = prefs.translate("selectLanguage");
//! ```

pub mod binding;
pub mod config;
pub mod logging;
pub mod preferences;

pub use binding::ThemeBinding;
pub use config::{AppearanceConfig, ConfigError, LoggingConfig, PreferencesConfig, StorageConfig};
pub use logging::init_logging;
pub use preferences::Preferences;
