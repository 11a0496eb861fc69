//! Tests for loading the TOML app configuration.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use tempfile::TempDir;

use i_know_you::AppConfig;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config =
        AppConfig::load_or_default(dir.path().join("absent.toml")).expect("Defaults failed");
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.storage_path(), &PathBuf::from("i_know_you_prefs.toml"));
    assert_eq!(config.log_file(), &PathBuf::from("i_know_you.log"));
    assert!(*config.strict_transitions());
    assert_eq!(config.tick_rate(), Duration::from_millis(50));
}

#[test]
fn test_partial_file_fills_in_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "tick_ms = 20\nstrict_transitions = false\n").expect("Write failed");

    let config = AppConfig::load_or_default(&path).expect("Load failed");
    assert_eq!(*config.tick_ms(), 20);
    assert!(!*config.strict_transitions());
    assert_eq!(config.storage_path(), &PathBuf::from("i_know_you_prefs.toml"));
}

#[test]
fn test_invalid_file_is_an_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "tick_ms = \"soon\"").expect("Write failed");

    let err = AppConfig::from_file(&path).expect_err("Parse should fail");
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_zero_tick_is_clamped() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "tick_ms = 0").expect("Write failed");

    let config = AppConfig::from_file(&path).expect("Load failed");
    assert_eq!(config.tick_rate(), Duration::from_millis(1));
}

#[test]
fn test_storage_override() {
    let config = AppConfig::default().with_storage_path(PathBuf::from("/tmp/other.toml"));
    assert_eq!(config.storage_path(), &PathBuf::from("/tmp/other.toml"));
}
