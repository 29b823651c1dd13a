use std::sync::{Arc, Mutex};

use archer_core::{KeyValueStore, MemoryStore, Persister, PreferenceError, StorageError};
use archer_i18n::{t, Catalogs, LanguageCode, LanguageStore, DEFAULT_LANGUAGE_KEY};
use pretty_assertions::assert_eq;

const EN: &str = r#"
selectLanguage: Select Language
settings: Settings
scoreHint: "Scores use {{points}} notation"
competition:
  deleteCompetitionConfirm: "Delete {name}?"
"#;

const FI: &str = r#"
selectLanguage: Valitse kieli
competition:
  deleteCompetitionConfirm: "Poistetaanko {name}?"
"#;

fn catalogs() -> Catalogs {
    let mut c = Catalogs::new();
    c.load_str(LanguageCode::En, EN).unwrap();
    c.load_str(LanguageCode::Fi, FI).unwrap();
    c
}

async fn open(storage: &Arc<MemoryStore>) -> LanguageStore {
    LanguageStore::load(Persister::spawn(storage.clone()), DEFAULT_LANGUAGE_KEY, catalogs()).await
}

struct ReadOnlyStore;

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(Some("sv".to_string()))
    }
    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("read-only".to_string()))
    }
    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("read-only".to_string()))
    }
}

#[tokio::test]
async fn first_launch_uses_primary_language() {
    let storage = Arc::new(MemoryStore::new());
    assert_eq!(open(&storage).await.language(), LanguageCode::En);
}

#[tokio::test]
async fn selection_is_persisted_before_set_returns() {
    let storage = Arc::new(MemoryStore::new());
    let store = open(&storage).await;

    store.set_language(LanguageCode::Fi).await;
    assert_eq!(storage.raw(DEFAULT_LANGUAGE_KEY).as_deref(), Some("fi"));

    let restarted = open(&storage).await;
    assert_eq!(restarted.language(), LanguageCode::Fi);
}

#[tokio::test]
async fn unsupported_persisted_code_falls_back() {
    for raw in ["ru", "", "{\"lang\":\"fi\"}", "FI-garbage", " de ", "sv\n", "EN"] {
        let storage = Arc::new(MemoryStore::new().with_entry(DEFAULT_LANGUAGE_KEY, raw));
        assert_eq!(open(&storage).await.language(), LanguageCode::En, "{raw:?}");
    }
}

#[tokio::test]
async fn rejects_code_outside_closed_set() {
    let storage = Arc::new(MemoryStore::new());
    let store = open(&storage).await;
    store.set_language(LanguageCode::De).await;

    for bad in ["it", "ru", "xx", "", "fr-CA", "EN", " de ", "uk-anything-goes"] {
        let err = store.select_language(bad).await.unwrap_err();
        assert!(matches!(err, PreferenceError::InvalidArgument { .. }), "{bad:?}");
        assert_eq!(store.language(), LanguageCode::De);
    }
    assert_eq!(storage.raw(DEFAULT_LANGUAGE_KEY).as_deref(), Some("de"));

    store.select_language("sv").await.unwrap();
    assert_eq!(store.language(), LanguageCode::Sv);
}

#[tokio::test]
async fn translate_falls_back_to_primary_then_key() {
    let storage = Arc::new(MemoryStore::new());
    let store = open(&storage).await;

    store.set_language(LanguageCode::Fi).await;
    assert_eq!(store.translate("selectLanguage"), "Valitse kieli");
    assert_eq!(store.translate("settings"), "Settings");
    assert_eq!(store.translate("no.such.key"), "no.such.key");

    store.set_language(LanguageCode::Uk).await;
    assert_eq!(store.translate("selectLanguage"), "Select Language");
}

#[tokio::test]
async fn missing_key_returns_key_for_every_language() {
    let storage = Arc::new(MemoryStore::new());
    let store = LanguageStore::load(
        Persister::spawn(storage.clone()),
        DEFAULT_LANGUAGE_KEY,
        Catalogs::new(),
    )
    .await;

    for lang in LanguageCode::all() {
        store.set_language(*lang).await;
        assert_eq!(store.translate("selectLanguage"), "selectLanguage", "{lang}");
    }
}

#[tokio::test]
async fn translate_message_interpolates() {
    let storage = Arc::new(MemoryStore::new());
    let store = open(&storage).await;

    let msg = t!("competition.deleteCompetitionConfirm", { name: "Indoor 18m" });
    assert_eq!(store.translate_message(&msg), "Delete Indoor 18m?");

    store.set_language(LanguageCode::Fi).await;
    assert_eq!(store.translate_message(&msg), "Poistetaanko Indoor 18m?");
    assert_eq!(store.translate_message(&t!("unknown")), "unknown");
}

#[tokio::test]
async fn write_failure_keeps_session_language() {
    let store = LanguageStore::load(
        Persister::spawn(Arc::new(ReadOnlyStore)),
        DEFAULT_LANGUAGE_KEY,
        catalogs(),
    )
    .await;
    assert_eq!(store.language(), LanguageCode::Sv);

    store.set_language(LanguageCode::Fr).await;
    assert_eq!(store.language(), LanguageCode::Fr);
}

#[tokio::test]
async fn observers_see_each_selection() {
    let storage = Arc::new(MemoryStore::new());
    let store = open(&storage).await;
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_clone = Arc::clone(&seen);
    store.subscribe(move |lang| seen_clone.lock().unwrap().push(*lang));

    store.set_language(LanguageCode::Pt).await;
    let _ = store.select_language("klingon").await;
    store.reset().await;

    assert_eq!(*seen.lock().unwrap(), vec![LanguageCode::Pt, LanguageCode::En]);
    assert_eq!(storage.raw(DEFAULT_LANGUAGE_KEY), None);
}

#[tokio::test]
async fn translate_unescapes_braces_like_translate_message() {
    let storage = Arc::new(MemoryStore::new());
    let store = open(&storage).await;

    assert_eq!(store.translate("scoreHint"), "Scores use {points} notation");
    assert_eq!(store.translate_message(&t!("scoreHint")), store.translate("scoreHint"));
}
