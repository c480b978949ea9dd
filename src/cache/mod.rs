//! Two-tier record cache
//!
//! - [`MemoryCache`]: process-lifetime map from lookup key to shared record
//! - [`DurableCache`]: JSON mapping kept in one slot of a [`KeyValueStore`]
//!
//! Neither tier evicts. The Resolver keeps them in sync after each fetch.

use std::collections::HashMap;

use crate::models::PokemonRecord;

pub mod durable;
pub mod memory;
pub mod store;

pub use durable::DurableCache;
pub use memory::MemoryCache;
pub use store::{FileStore, InMemoryStore, KeyValueStore, is_valid_slot_name};

/// Key to record mapping as held in the durable slot
pub type CacheMap = HashMap<String, PokemonRecord>;
