//! App-wide preference state
//!
//! Built once at startup and shared by `Arc`; screens read
//! `(theme_mode, palette, language, translate)` and call the setters.

use std::sync::Arc;

use archer_core::{FileStore, KeyValueStore, Persister, PreferenceError};
use archer_i18n::{Catalogs, LanguageCode, LanguageStore, Message};
use archer_theme::{
    AppearanceWatcher, Palette, PaletteName, SharedAppearance, SystemAppearance, ThemeMode,
    ThemeStore, WatcherConfig,
};

use crate::binding::ThemeBinding;
use crate::config::{AppearanceConfig, PreferencesConfig, StorageConfig};

pub struct Preferences {
    theme: Arc<ThemeStore>,
    language: Arc<LanguageStore>,
    appearance: Arc<SharedAppearance>,
    binding: ThemeBinding,
    persister: Persister,
}

impl Preferences {
    /// Initialize both stores from `storage`.
    ///
    /// Must run inside a tokio runtime; the persistence worker is spawned here.
    pub async fn load(
        storage: Arc<dyn KeyValueStore>,
        config: &StorageConfig,
        catalogs: Catalogs,
        appearance: Arc<SharedAppearance>,
    ) -> Self {
        let persister = Persister::spawn(storage);
        let theme = Arc::new(ThemeStore::load(persister.clone(), config.theme_key.as_str()).await);
        let language = Arc::new(
            LanguageStore::load(persister.clone(), config.language_key.as_str(), catalogs).await,
        );
        let binding = ThemeBinding::new(Arc::clone(&theme), Arc::clone(&appearance));

        tracing::info!(
            "preferences loaded: theme={} palette={} language={}",
            theme.theme_mode(),
            binding.palette_name(),
            language.language()
        );

        Self {
            theme,
            language,
            appearance,
            binding,
            persister,
        }
    }

    /// Initialize against the file store named by `config`
    pub async fn open(
        config: &PreferencesConfig,
        catalogs: Catalogs,
        appearance: Arc<SharedAppearance>,
    ) -> Self {
        let storage = Arc::new(FileStore::new(&config.storage.directory));
        Self::load(storage, &config.storage, catalogs, appearance).await
    }

    // ========== Theme ==========

    pub fn theme_mode(&self) -> ThemeMode {
        self.theme.theme_mode()
    }

    /// Fire-and-forget: returns before the choice reaches storage
    pub fn set_theme_mode(&self, mode: ThemeMode) {
        self.theme.set_theme_mode(mode);
    }

    pub fn select_theme_mode(&self, id: &str) -> Result<(), PreferenceError> {
        self.theme.select_theme_mode(id)
    }

    pub fn palette(&self) -> &'static Palette {
        self.binding.palette()
    }

    pub fn palette_name(&self) -> PaletteName {
        self.binding.palette_name()
    }

    pub fn theme_store(&self) -> &Arc<ThemeStore> {
        &self.theme
    }

    pub fn theme_binding(&self) -> &ThemeBinding {
        &self.binding
    }

    // ========== Platform signal ==========

    pub fn appearance(&self) -> &Arc<SharedAppearance> {
        &self.appearance
    }

    /// Poll the desktop environment into the shared platform signal.
    ///
    /// The watcher stops when the returned handle is dropped.
    pub fn watch_system_appearance(&self, config: &AppearanceConfig) -> AppearanceWatcher {
        AppearanceWatcher::spawn(
            Arc::new(SystemAppearance),
            Arc::clone(&self.appearance),
            WatcherConfig::with_interval(config.poll_interval()),
        )
    }

    // ========== Language ==========

    pub fn language(&self) -> LanguageCode {
        self.language.language()
    }

    /// Resolves once the choice has been written (or the write failed and was logged)
    pub async fn set_language(&self, code: LanguageCode) {
        self.language.set_language(code).await;
    }

    pub async fn select_language(&self, code: &str) -> Result<(), PreferenceError> {
        self.language.select_language(code).await
    }

    pub fn translate(&self, key: &str) -> String {
        self.language.translate(key)
    }

    pub fn translate_message(&self, msg: &Message) -> String {
        self.language.translate_message(msg)
    }

    pub fn language_store(&self) -> &Arc<LanguageStore> {
        &self.language
    }

    // ========== Lifecycle ==========

    /// Wait for every queued durable write; call before shutdown
    pub async fn flush(&self) {
        self.persister.flush().await;
    }

    /// Forget both choices, on disk and in memory
    pub async fn reset(&self) {
        self.theme.reset();
        self.language.reset().await;
        self.flush().await;
        tracing::info!("preferences reset");
    }
}
