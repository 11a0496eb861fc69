//! Tests for the file and memory key-value storage backends.

use tempfile::TempDir;

use i_know_you::{KeyValueStorage, MemoryStorage, TomlFileStorage};

#[tokio::test]
async fn test_missing_file_reads_as_empty() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let storage = TomlFileStorage::new(dir.path().join("prefs.toml"));
    let value = storage.get("@app_language").await.expect("Read failed");
    assert_eq!(value, None);
}

#[tokio::test]
async fn test_value_survives_new_instance() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("prefs.toml");

    TomlFileStorage::new(&path)
        .set("@app_language", "ru")
        .await
        .expect("Write failed");

    let reopened = TomlFileStorage::new(&path);
    let value = reopened.get("@app_language").await.expect("Read failed");
    assert_eq!(value.as_deref(), Some("ru"));
}

#[tokio::test]
async fn test_set_creates_parent_directories() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("nested/deeper/prefs.toml");
    let storage = TomlFileStorage::new(&path);
    storage.set("key", "value").await.expect("Write failed");
    assert!(path.exists());
}

#[tokio::test]
async fn test_set_keeps_other_keys() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let storage = TomlFileStorage::new(dir.path().join("prefs.toml"));
    storage.set("a", "1").await.expect("Write failed");
    storage.set("b", "2").await.expect("Write failed");
    storage.set("a", "3").await.expect("Write failed");

    assert_eq!(storage.get("a").await.unwrap().as_deref(), Some("3"));
    assert_eq!(storage.get("b").await.unwrap().as_deref(), Some("2"));
}

#[tokio::test]
async fn test_non_string_values_read_as_absent() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("prefs.toml");
    std::fs::write(&path, "\"@app_language\" = 42\n").expect("Write failed");

    let storage = TomlFileStorage::new(&path);
    assert_eq!(storage.get("@app_language").await.unwrap(), None);
}

#[tokio::test]
async fn test_corrupt_file_is_an_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("prefs.toml");
    std::fs::write(&path, "this is not valid toml !!!@@@").expect("Write failed");

    let storage = TomlFileStorage::new(&path);
    assert!(storage.get("@app_language").await.is_err());
}

#[tokio::test]
async fn test_memory_storage_round_trip_and_failure_switch() {
    let storage = MemoryStorage::new();
    storage.set("k", "v").await.expect("Write failed");
    assert_eq!(storage.get("k").await.unwrap().as_deref(), Some("v"));

    storage.set_failing(true);
    assert!(storage.get("k").await.is_err());
    assert!(storage.set("k", "w").await.is_err());

    storage.set_failing(false);
    assert_eq!(storage.get("k").await.unwrap().as_deref(), Some("v"));
}

#[tokio::test]
async fn test_set_replaces_corrupt_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("prefs.toml");
    std::fs::write(&path, "not = = toml").expect("Write failed");

    let storage = TomlFileStorage::new(&path);
    storage.set("@app_language", "ru").await.expect("Write failed");
    assert_eq!(
        storage.get("@app_language").await.unwrap().as_deref(),
        Some("ru")
    );
}
