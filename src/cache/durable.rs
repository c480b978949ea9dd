use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use super::{CacheMap, KeyValueStore};
use crate::errors::{StoreError, StoreResult};
use crate::models::PokemonRecord;

/// Cache mapping serialized as JSON into a single store slot
///
/// Reads are forgiving: [`DurableCache::load`] turns any failure into an empty
/// mapping. [`DurableCache::try_load`] keeps the failure inspectable.
/// Clones share the slot and its write lock.
#[derive(Clone)]
pub struct DurableCache {
    store: Arc<dyn KeyValueStore>,
    slot: String,
    /// Serializes read-modify-write cycles of `persist_record`
    write_lock: Arc<Mutex<()>>,
}

impl DurableCache {
    pub fn new(store: Arc<dyn KeyValueStore>, slot: impl Into<String>) -> Self {
        Self {
            store,
            slot: slot.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn slot(&self) -> &str {
        &self.slot
    }

    /// Read the mapping, reporting unreadable or corrupt slots as errors
    pub async fn try_load(&self) -> StoreResult<CacheMap> {
        match self.store.get(&self.slot).await? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(CacheMap::new()),
        }
    }

    /// Read the mapping; absent, unreadable and corrupt slots all yield empty
    pub async fn load(&self) -> CacheMap {
        match self.try_load().await {
            Ok(mapping) => {
                info!(
                    "Loaded {} cached keys from slot '{}'",
                    mapping.len(),
                    self.slot
                );
                mapping
            }
            Err(e) => {
                warn!("Could not load cache from slot '{}': {}", self.slot, e);
                CacheMap::new()
            }
        }
    }

    /// Overwrite the slot with the full mapping
    pub async fn save(&self, mapping: &CacheMap) -> StoreResult<()> {
        let serialized = serde_json::to_string(mapping)?;
        self.store.set(&self.slot, &serialized).await?;
        debug!("Saved {} cached keys to slot '{}'", mapping.len(), self.slot);
        Ok(())
    }

    /// Read-modify-write: merge `record` under its id and name, then save
    ///
    /// A corrupt slot is replaced. Any other read failure aborts without
    /// writing so stored records are never dropped.
    pub async fn persist_record(&self, record: &PokemonRecord) -> StoreResult<()> {
        let _guard = self.write_lock.lock().await;

        let mut mapping = match self.try_load().await {
            Ok(mapping) => mapping,
            Err(StoreError::Corrupt(e)) => {
                warn!("Replacing corrupt cache in slot '{}': {}", self.slot, e);
                CacheMap::new()
            }
            Err(e) => return Err(e),
        };
        for key in record.canonical_keys() {
            mapping.insert(key, record.clone());
        }
        self.save(&mapping).await
    }
}
