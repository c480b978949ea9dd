use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use super::CacheMap;
use crate::models::PokemonRecord;

/// Unbounded in-memory cache
///
/// `put` makes a record visible under that exact key only; callers write every
/// equivalent key themselves. Clones share the same underlying map.
#[derive(Clone, Default)]
pub struct MemoryCache {
    entries: Arc<RwLock<HashMap<String, Arc<PokemonRecord>>>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, key: &str) -> Option<Arc<PokemonRecord>> {
        self.entries.read().await.get(key).cloned()
    }

    pub async fn put(&self, key: impl Into<String>, record: Arc<PokemonRecord>) {
        self.entries.write().await.insert(key.into(), record);
    }

    pub async fn contains(&self, key: &str) -> bool {
        self.entries.read().await.contains_key(key)
    }

    /// Bulk insert a mapping loaded from the durable tier
    pub async fn seed(&self, mapping: CacheMap) {
        let mut entries = self.entries.write().await;
        let count = mapping.len();
        for (key, record) in mapping {
            entries.insert(key, Arc::new(record));
        }
        debug!("Seeded memory cache with {} keys ({} total)", count, entries.len());
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
