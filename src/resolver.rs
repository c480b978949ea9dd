//! Lookup resolution across the memory cache, durable cache and catalog
//!
//! ```text
//! Idle -> Validating -> CacheHit
//! Idle -> Validating -> Fetching -> Success | NotFound | TransientError
//! ```
//!
//! Every call is independent. No lock is held while a fetch is in flight, so
//! two concurrent lookups for the same key both reach the catalog.

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::cache::{DurableCache, MemoryCache};
use crate::catalog::CatalogClient;
use crate::errors::LookupResult;
use crate::models::{LookupKey, PokemonRecord};

/// How a successful resolve was satisfied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveState {
    /// Served from the in-memory cache, no network call
    CacheHit,
    /// Fetched from the catalog and written to both caches
    Fetched,
}

#[derive(Debug, Clone)]
pub struct Resolution {
    pub record: Arc<PokemonRecord>,
    pub state: ResolveState,
}

impl Resolution {
    pub fn is_cache_hit(&self) -> bool {
        self.state == ResolveState::CacheHit
    }
}

pub struct Resolver {
    memory: MemoryCache,
    durable: DurableCache,
    catalog: Arc<dyn CatalogClient>,
}

impl Resolver {
    pub fn new(memory: MemoryCache, durable: DurableCache, catalog: Arc<dyn CatalogClient>) -> Self {
        Self {
            memory,
            durable,
            catalog,
        }
    }

    /// Create a resolver whose memory cache is seeded from the durable cache
    pub async fn bootstrap(durable: DurableCache, catalog: Arc<dyn CatalogClient>) -> Self {
        let memory = MemoryCache::new();
        memory.seed(durable.load().await).await;
        Self::new(memory, durable, catalog)
    }

    pub fn memory(&self) -> &MemoryCache {
        &self.memory
    }

    pub fn durable(&self) -> &DurableCache {
        &self.durable
    }

    /// Resolve raw user input (a name or an id)
    pub async fn resolve(&self, input: &str) -> LookupResult<Resolution> {
        let key = LookupKey::parse(input)?;
        self.resolve_key(&key).await
    }

    pub async fn resolve_id(&self, id: u32) -> LookupResult<Resolution> {
        self.resolve_key(&LookupKey::from(id)).await
    }

    pub async fn resolve_key(&self, key: &LookupKey) -> LookupResult<Resolution> {
        if let Some(record) = self.memory.get(key.normalized()).await {
            debug!("Cache hit for '{}' (#{})", key, record.id);
            return Ok(Resolution {
                record,
                state: ResolveState::CacheHit,
            });
        }

        debug!("Cache miss for '{}', fetching from catalog", key);
        let record = match self.catalog.fetch(key.normalized()).await {
            Ok(record) => Arc::new(record),
            Err(e) => {
                info!("Lookup for '{}' failed: {}", key, e);
                return Err(e);
            }
        };

        for write_key in key.write_keys() {
            self.memory.put(write_key, record.clone()).await;
        }
        for canonical_key in record.canonical_keys() {
            self.memory.put(canonical_key, record.clone()).await;
        }

        // Durability is best effort; the record stays usable from memory
        if let Err(e) = self.durable.persist_record(&record).await {
            warn!(
                "Could not persist '{}' to slot '{}': {}",
                record.name,
                self.durable.slot(),
                e
            );
        }

        Ok(Resolution {
            record,
            state: ResolveState::Fetched,
        })
    }
}
