use std::sync::RwLock;

use archer_core::{read, write, Observers, Persister, PreferenceError, Subscription};
use tracing::{debug, warn};

use crate::catalogs::Catalogs;
use crate::language::LanguageCode;
use crate::message::Message;

/// Storage key used by the scoring app. The record is the bare language code.
pub const DEFAULT_LANGUAGE_KEY: &str = "@arrow_tracker_language";

/// The user's language choice plus translation lookup.
///
/// Unlike the theme store, [`LanguageStore::set_language`] waits for the
/// durable write to be attempted, so a selection screen can navigate away
/// knowing the choice reached storage.
pub struct LanguageStore {
    language: RwLock<LanguageCode>,
    catalogs: Catalogs,
    persister: Persister,
    key: String,
    observers: Observers<LanguageCode>,
}

impl LanguageStore {
    /// Load the persisted choice; missing or unsupported codes yield the primary language.
    pub async fn load(persister: Persister, key: impl Into<String>, catalogs: Catalogs) -> Self {
        let key = key.into();
        let language = match persister.read(&key).await {
            Ok(Some(raw)) => raw.parse::<LanguageCode>().unwrap_or_else(|e| {
                warn!(key = %key, error = %e, "unrecognized language record, using default");
                LanguageCode::default()
            }),
            Ok(None) => LanguageCode::default(),
            Err(e) => {
                warn!(key = %key, error = %e, "language record unavailable, using default");
                LanguageCode::default()
            }
        };
        debug!("LanguageStore::load: {}", language);

        Self {
            language: RwLock::new(language),
            catalogs,
            persister,
            key,
            observers: Observers::new(),
        }
    }

    pub fn language(&self) -> LanguageCode {
        *read(&self.language)
    }

    /// Switch language and wait for the durable write to be attempted.
    ///
    /// A failed write is logged; the new language stays active for the session.
    pub async fn set_language(&self, code: LanguageCode) {
        let previous = std::mem::replace(&mut *write(&self.language), code);
        debug!("LanguageStore::set_language: {} -> {}", previous, code);

        if let Err(e) = self.persister.write(&self.key, code.code()).await {
            warn!(key = %self.key, error = %e, "language not persisted; kept for this session");
        }
        self.observers.notify(&code);
    }

    /// Validating setter for untyped codes.
    ///
    /// Codes outside the supported set fail with
    /// [`PreferenceError::InvalidArgument`] and leave the language unchanged.
    pub async fn select_language(&self, code: &str) -> Result<(), PreferenceError> {
        let code = code.parse::<LanguageCode>()?;
        self.set_language(code).await;
        Ok(())
    }

    /// Translate `key`: current language, then primary, then the key itself.
    ///
    /// The template is rendered without arguments, so `{{`/`}}` escapes come
    /// out the same as through [`LanguageStore::translate_message`].
    pub fn translate(&self, key: &str) -> String {
        self.catalogs
            .format(self.language(), &Message::new(key.to_string()))
            .unwrap_or_else(|| key.to_string())
    }

    /// Translate and interpolate `msg` with the same fallback chain.
    pub fn translate_message(&self, msg: &Message) -> String {
        self.catalogs
            .format(self.language(), msg)
            .unwrap_or_else(|| msg.id.to_string())
    }

    pub fn catalogs(&self) -> &Catalogs {
        &self.catalogs
    }

    /// Drop the persisted record and return to the primary language
    pub async fn reset(&self) {
        *write(&self.language) = LanguageCode::default();
        debug!("LanguageStore::reset");

        if let Err(e) = self.persister.remove(&self.key).await {
            warn!(key = %self.key, error = %e, "language record not removed");
        }
        self.observers.notify(&LanguageCode::default());
    }

    pub async fn flush(&self) {
        self.persister.flush().await;
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&LanguageCode) + Send + Sync + 'static,
    {
        self.observers.subscribe(callback)
    }

    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        self.observers.unsubscribe(subscription)
    }
}
