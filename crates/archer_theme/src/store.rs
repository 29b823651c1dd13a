//! Persisted theme mode
//!
//! The record is kept in the envelope the scoring app has always written under
//! `archery-settings`, so existing installs keep their choice:
//!
//! ```json
//! {"state":{"theme":"light"},"version":0}
//! ```

use crate::mode::ThemeMode;
use archer_core::{read, write, Observers, Persister, PreferenceError, Subscription};
use serde::{Deserialize, Serialize};
use std::sync::RwLock;
use tracing::{debug, warn};

/// Storage key used by the scoring app
pub const DEFAULT_THEME_KEY: &str = "archery-settings";

const RECORD_VERSION: u32 = 0;

#[derive(Debug, Serialize, Deserialize)]
struct Envelope {
    state: ThemeRecord,
    #[serde(default)]
    version: u32,
}

#[derive(Debug, Serialize, Deserialize)]
struct ThemeRecord {
    theme: ThemeMode,
}

fn encode(mode: ThemeMode) -> String {
    // Serializing two plain structs with a unit-variant enum cannot fail.
    serde_json::to_string(&Envelope {
        state: ThemeRecord { theme: mode },
        version: RECORD_VERSION,
    })
    .unwrap_or_default()
}

fn decode(raw: &str) -> Result<ThemeMode, serde_json::Error> {
    serde_json::from_str::<Envelope>(raw).map(|e| e.state.theme)
}

/// The user's theme choice, durable across restarts
pub struct ThemeStore {
    mode: RwLock<ThemeMode>,
    persister: Persister,
    key: String,
    observers: Observers<ThemeMode>,
}

impl ThemeStore {
    /// Load the persisted choice.
    ///
    /// A missing, unreadable or unrecognized record yields [`ThemeMode::Dark`].
    pub async fn load(persister: Persister, key: impl Into<String>) -> Self {
        let key = key.into();
        let mode = match persister.read(&key).await {
            Ok(Some(raw)) => decode(&raw).unwrap_or_else(|e| {
                warn!(key = %key, error = %e, "unrecognized theme record, using default");
                ThemeMode::default()
            }),
            Ok(None) => {
                debug!(key = %key, "no theme record, first launch");
                ThemeMode::default()
            }
            Err(e) => {
                warn!(key = %key, error = %e, "theme record unavailable, using default");
                ThemeMode::default()
            }
        };
        debug!("ThemeStore::load: {}", mode);

        Self {
            mode: RwLock::new(mode),
            persister,
            key,
            observers: Observers::new(),
        }
    }

    /// Current choice
    pub fn theme_mode(&self) -> ThemeMode {
        *read(&self.mode)
    }

    /// Update the choice.
    ///
    /// The in-memory value changes before this returns; the durable write is
    /// queued and not awaited. Observers are notified on every call.
    pub fn set_theme_mode(&self, mode: ThemeMode) {
        let previous = std::mem::replace(&mut *write(&self.mode), mode);
        debug!("ThemeStore::set_theme_mode: {} -> {}", previous, mode);

        self.persister.write_detached(&self.key, encode(mode));
        self.observers.notify(&mode);
    }

    /// Validating setter for untyped input such as a selection screen id.
    ///
    /// Unknown ids fail with [`PreferenceError::InvalidArgument`] and change nothing.
    pub fn select_theme_mode(&self, id: &str) -> Result<(), PreferenceError> {
        let mode = id.parse::<ThemeMode>()?;
        self.set_theme_mode(mode);
        Ok(())
    }

    /// Drop the persisted record and return to the default
    pub fn reset(&self) {
        *write(&self.mode) = ThemeMode::default();
        debug!("ThemeStore::reset");

        self.persister.remove_detached(&self.key);
        self.observers.notify(&ThemeMode::default());
    }

    /// Wait for every queued durable write to be attempted
    pub async fn flush(&self) {
        self.persister.flush().await;
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&ThemeMode) + Send + Sync + 'static,
    {
        self.observers.subscribe(callback)
    }

    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        self.observers.unsubscribe(subscription)
    }
}
