//! Tests for loading, selecting and persisting the display language.

use std::sync::Arc;

use tempfile::TempDir;

use i_know_you::{
    KeyValueStorage, LANGUAGE_STORAGE_KEY, LanguagePreference, MemoryStorage, TomlFileStorage,
};
use i_know_you_core::LanguageCode;

async fn loaded_with(value: Option<&str>) -> LanguagePreference {
    let storage = MemoryStorage::new();
    if let Some(value) = value {
        storage.set(LANGUAGE_STORAGE_KEY, value).await.unwrap();
    }
    let mut preference = LanguagePreference::new(Arc::new(storage));
    preference.load().await;
    preference
}

#[tokio::test]
async fn test_starts_loading_with_default() {
    let preference = LanguagePreference::new(Arc::new(MemoryStorage::new()));
    assert!(preference.is_loading());
    assert_eq!(preference.language(), LanguageCode::En);
}

#[tokio::test]
async fn test_valid_persisted_values_are_adopted() {
    for (stored, expected) in [
        ("tr", LanguageCode::Tr),
        ("en", LanguageCode::En),
        ("ru", LanguageCode::Ru),
    ] {
        let preference = loaded_with(Some(stored)).await;
        assert_eq!(preference.language(), expected);
        assert!(!preference.is_loading());
    }
}

#[tokio::test]
async fn test_absent_or_invalid_value_falls_back_to_english() {
    for stored in [None, Some(""), Some("de"), Some("RU"), Some(" en")] {
        let preference = loaded_with(stored).await;
        assert_eq!(preference.language(), LanguageCode::En, "stored {stored:?}");
        assert!(!preference.is_loading());
    }
}

#[tokio::test]
async fn test_read_failure_falls_back_to_english() {
    let storage = MemoryStorage::new();
    storage.set(LANGUAGE_STORAGE_KEY, "tr").await.unwrap();
    storage.set_failing(true);

    let mut preference = LanguagePreference::new(Arc::new(storage));
    preference.load().await;
    assert_eq!(preference.language(), LanguageCode::En);
    assert!(!preference.is_loading());
}

#[tokio::test]
async fn test_select_changes_memory_and_persists() {
    let storage = MemoryStorage::new();
    let mut preference = LanguagePreference::new(Arc::new(storage.clone()));
    preference.load().await;

    let handle = preference.select(LanguageCode::Tr);
    assert_eq!(preference.language(), LanguageCode::Tr, "applied before the write");
    assert_eq!(preference.translations().title, "Seni Tanıyorum");

    handle.await.expect("Persist task panicked");
    assert_eq!(
        storage.get(LANGUAGE_STORAGE_KEY).await.unwrap().as_deref(),
        Some("tr")
    );
}

#[tokio::test]
async fn test_failed_write_keeps_in_memory_change() {
    let storage = MemoryStorage::new();
    let mut preference = LanguagePreference::new(Arc::new(storage.clone()));
    preference.load().await;

    storage.set_failing(true);
    preference
        .select(LanguageCode::Ru)
        .await
        .expect("Persist task panicked");
    assert_eq!(preference.language(), LanguageCode::Ru);
}

#[tokio::test]
async fn test_select_and_persist_reports_failure() {
    let storage = MemoryStorage::new();
    storage.set_failing(true);
    let mut preference = LanguagePreference::new(Arc::new(storage));

    let result = preference.select_and_persist(LanguageCode::Tr).await;
    assert!(result.is_err());
    assert_eq!(preference.language(), LanguageCode::Tr);
}

#[tokio::test]
async fn test_selection_survives_restart_with_file_storage() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("prefs.toml");

    let mut first = LanguagePreference::new(Arc::new(TomlFileStorage::new(&path)));
    first.load().await;
    first.select(LanguageCode::Ru).await.expect("Persist task panicked");

    let mut second = LanguagePreference::new(Arc::new(TomlFileStorage::new(&path)));
    second.load().await;
    assert_eq!(second.language(), LanguageCode::Ru);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_last_selection_wins_in_storage() {
    for _ in 0..100 {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("prefs.toml");
        let storage = Arc::new(TomlFileStorage::new(&path));
        let mut preference = LanguagePreference::new(storage.clone());
        preference.load().await;

        let first = preference.select(LanguageCode::Tr);
        let second = preference.select(LanguageCode::Ru);
        first.await.expect("Persist task panicked");
        second.await.expect("Persist task panicked");

        assert_eq!(preference.language(), LanguageCode::Ru);
        assert_eq!(
            storage.get(LANGUAGE_STORAGE_KEY).await.unwrap().as_deref(),
            Some("ru")
        );
    }
}

#[tokio::test]
async fn test_select_and_persist_supersedes_pending_select() {
    let storage = MemoryStorage::new();
    let mut preference = LanguagePreference::new(Arc::new(storage.clone()));
    preference.load().await;

    let pending = preference.select(LanguageCode::Tr);
    preference
        .select_and_persist(LanguageCode::Ru)
        .await
        .expect("Write failed");
    pending.await.expect("Persist task panicked");

    assert_eq!(
        storage.get(LANGUAGE_STORAGE_KEY).await.unwrap().as_deref(),
        Some("ru")
    );
}

#[tokio::test]
async fn test_selection_recovers_corrupt_preference_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("prefs.toml");
    std::fs::write(&path, "not = = toml").expect("Write failed");

    let mut first = LanguagePreference::new(Arc::new(TomlFileStorage::new(&path)));
    first.load().await;
    assert_eq!(first.language(), LanguageCode::En);
    first
        .select_and_persist(LanguageCode::Ru)
        .await
        .expect("Write failed");

    let mut second = LanguagePreference::new(Arc::new(TomlFileStorage::new(&path)));
    second.load().await;
    assert_eq!(second.language(), LanguageCode::Ru);
}
