//! Persistent key-value slots backing the durable cache

use async_trait::async_trait;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::sync::RwLock;
use tracing::trace;

use crate::errors::{StoreError, StoreResult};

/// Named string slots surviving across sessions
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read a slot; `Ok(None)` when it was never written
    async fn get(&self, slot: &str) -> StoreResult<Option<String>>;

    /// Overwrite a slot with `value`
    async fn set(&self, slot: &str, value: &str) -> StoreResult<()>;
}

/// Slot names are plain file stems: ASCII alphanumerics, `-`, `_` and `.`, not
/// starting with a dot
pub fn is_valid_slot_name(slot: &str) -> bool {
    !slot.is_empty()
        && !slot.starts_with('.')
        && slot
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

/// One JSON file per slot inside a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    directory: PathBuf,
}

impl FileStore {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// File backing `slot`
    pub fn slot_path(&self, slot: &str) -> StoreResult<PathBuf> {
        if !is_valid_slot_name(slot) {
            return Err(StoreError::unavailable(format!("Invalid slot name '{slot}'")));
        }
        Ok(self.directory.join(format!("{slot}.json")))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, slot: &str) -> StoreResult<Option<String>> {
        let path = self.slot_path(slot)?;
        match fs::read_to_string(&path).await {
            Ok(contents) => {
                trace!("Read {} bytes from {}", contents.len(), path.display());
                Ok(Some(contents))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, slot: &str, value: &str) -> StoreResult<()> {
        let path = self.slot_path(slot)?;
        fs::create_dir_all(&self.directory).await?;

        // Replace atomically so a crash never leaves a half-written slot
        let temp_path = self.directory.join(format!(".{slot}.json.tmp"));
        fs::write(&temp_path, value).await?;
        fs::rename(&temp_path, &path).await?;

        trace!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }
}

/// Process-local store for sessions that should not persist
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    slots: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryStore {
    async fn get(&self, slot: &str) -> StoreResult<Option<String>> {
        Ok(self.slots.read().await.get(slot).cloned())
    }

    async fn set(&self, slot: &str, value: &str) -> StoreResult<()> {
        self.slots
            .write()
            .await
            .insert(slot.to_string(), value.to_string());
        Ok(())
    }
}
