//! The active display language and its persisted mirror.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use i_know_you_core::{LanguageCode, Translations, translations};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, instrument, warn};

use crate::{KeyValueStorage, StorageError};

/// Storage key holding the persisted language code.
pub const LANGUAGE_STORAGE_KEY: &str = "@app_language";

/// Orders background writes so the newest selection is the one stored.
#[derive(Debug, Default)]
struct PersistQueue {
    /// Generation of the most recent selection.
    latest: AtomicU64,
    /// Held for the duration of each write.
    lock: Mutex<()>,
}

impl PersistQueue {
    fn next_generation(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_latest(&self, generation: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == generation
    }
}

/// The selected display language.
///
/// In-memory state is authoritative. Storage is read once at startup and
/// written on every change; a failed read or background write is logged
/// and otherwise ignored. Writes are serialized and a write superseded by a
/// newer selection is skipped, so storage always ends on the last choice.
#[derive(Debug, Clone)]
pub struct LanguagePreference {
    language: LanguageCode,
    is_loading: bool,
    storage: Arc<dyn KeyValueStorage>,
    queue: Arc<PersistQueue>,
}

impl LanguagePreference {
    /// Creates a preference set to the default language, not yet loaded.
    #[instrument(skip(storage))]
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self {
            language: LanguageCode::default(),
            is_loading: true,
            storage,
            queue: Arc::new(PersistQueue::default()),
        }
    }

    /// Adopts the persisted language if there is a valid one.
    ///
    /// Missing, unknown and unreadable values all leave the default in place.
    #[instrument(skip(self))]
    pub async fn load(&mut self) {
        match self.storage.get(LANGUAGE_STORAGE_KEY).await {
            Ok(Some(value)) => match LanguageCode::from_stored(&value) {
                Some(code) => {
                    info!(language = %code, "Loaded persisted language");
                    self.language = code;
                }
                None => warn!(value = %value, "Ignoring unknown persisted language"),
            },
            Ok(None) => debug!("No persisted language, using default"),
            Err(e) => error!(error = %e, "Failed to load language"),
        }
        self.is_loading = false;
    }

    /// Switches to `code` immediately and persists it in the background.
    ///
    /// The returned handle may be awaited or dropped. A failed write is
    /// logged and the in-memory change stays. If another selection is made
    /// before this write starts, this write is skipped.
    #[instrument(skip(self))]
    pub fn select(&mut self, code: LanguageCode) -> JoinHandle<()> {
        info!(from = %self.language, to = %code, "Language selected");
        self.language = code;
        let generation = self.queue.next_generation();
        let storage = Arc::clone(&self.storage);
        let queue = Arc::clone(&self.queue);
        tokio::spawn(async move {
            let _guard = queue.lock.lock().await;
            if !queue.is_latest(generation) {
                debug!(language = %code, generation, "Skipping superseded write");
                return;
            }
            match storage.set(LANGUAGE_STORAGE_KEY, code.as_ref()).await {
                Ok(()) => debug!(language = %code, "Language persisted"),
                Err(e) => error!(error = %e, "Failed to save language"),
            }
        })
    }

    /// Switches to `code` and waits for the write, reporting its failure.
    ///
    /// Used by the `language` subcommand, where there is no UI to keep
    /// responsive and the user should hear about a failed write.
    #[instrument(skip(self))]
    pub async fn select_and_persist(&mut self, code: LanguageCode) -> Result<(), StorageError> {
        info!(from = %self.language, to = %code, "Language selected");
        self.language = code;
        self.queue.next_generation();
        let _guard = self.queue.lock.lock().await;
        self.storage.set(LANGUAGE_STORAGE_KEY, code.as_ref()).await
    }

    /// Returns the active language.
    pub fn language(&self) -> LanguageCode {
        self.language
    }

    /// Returns true until [`LanguagePreference::load`] has finished.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Returns the strings for the active language.
    pub fn translations(&self) -> &'static Translations {
        translations(self.language)
    }
}
