//! Key-value storage behind the persisted language preference.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use derive_more::{Display, Error};
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

/// Storage error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Storage error: {} at {}:{}", message, file, line)]
pub struct StorageError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl StorageError {
    /// Creates a new storage error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Asynchronous string key-value store.
#[async_trait]
pub trait KeyValueStorage: Send + Sync + std::fmt::Debug {
    /// Returns the value stored under `key`, or `None` if absent.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Storage backed by a TOML file of string keys and string values.
///
/// A missing file reads as empty. Every write rewrites the whole file; a
/// file that no longer parses is replaced by the write.
#[derive(Debug)]
pub struct TomlFileStorage {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl TomlFileStorage {
    /// Creates storage at `path`. The file is created on first write.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn new(path: impl AsRef<Path>) -> Self {
        info!("Using file storage");
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_content(&self) -> Result<Option<String>, StorageError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("Storage file not found, treating as empty");
                Ok(None)
            }
            Err(e) => Err(StorageError::new(format!(
                "Failed to read {}: {}",
                self.path.display(),
                e
            ))),
        }
    }

    fn parse_table(&self, content: &str) -> Result<toml::Table, StorageError> {
        toml::from_str::<toml::Table>(content).map_err(|e| {
            StorageError::new(format!("Failed to parse {}: {}", self.path.display(), e))
        })
    }
}

#[async_trait]
impl KeyValueStorage for TomlFileStorage {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let table = match self.read_content().await? {
            Some(content) => self.parse_table(&content)?,
            None => toml::Table::new(),
        };
        let value = table
            .get(key)
            .and_then(|v| v.as_str())
            .map(str::to_string);
        debug!(found = value.is_some(), "Storage read");
        Ok(value)
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;

        let mut table = match self.read_content().await? {
            Some(content) => self.parse_table(&content).unwrap_or_else(|e| {
                warn!(error = %e, "Replacing unreadable storage file");
                toml::Table::new()
            }),
            None => toml::Table::new(),
        };
        table.insert(key.to_string(), toml::Value::String(value.to_string()));
        let content = toml::to_string(&table)
            .map_err(|e| StorageError::new(format!("Failed to serialize storage: {}", e)))?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                StorageError::new(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }
        tokio::fs::write(&self.path, content).await.map_err(|e| {
            StorageError::new(format!("Failed to write {}: {}", self.path.display(), e))
        })?;
        debug!("Storage write complete");
        Ok(())
    }
}

/// In-process storage; nothing survives a restart.
///
/// Failures can be switched on with [`MemoryStorage::set_failing`] to
/// exercise error paths.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    values: Arc<Mutex<HashMap<String, String>>>,
    failing: Arc<AtomicBool>,
}

impl MemoryStorage {
    /// Creates empty storage.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every following `get` and `set` fail (or succeed again).
    #[instrument(skip(self))]
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), StorageError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StorageError::new("Memory storage is set to fail"));
        }
        Ok(())
    }
}

#[async_trait]
impl KeyValueStorage for MemoryStorage {
    #[instrument(skip(self))]
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.check()?;
        Ok(self.values.lock().await.get(key).cloned())
    }

    #[instrument(skip(self))]
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check()?;
        self.values
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
