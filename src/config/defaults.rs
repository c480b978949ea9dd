/// Configuration default values
///
/// This module contains all the default values for configuration options,
/// making them easily changeable in one central location.
// Catalog defaults
pub const DEFAULT_CATALOG_BASE_URL: &str = "https://pokeapi.co/api/v2";
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

// Storage defaults
pub const DEFAULT_PERSIST: bool = true;
pub const DEFAULT_CACHE_DIR: &str = "./data/cache";
pub const DEFAULT_CACHE_SLOT: &str = "pokemonCache";

// Display defaults
pub const DEFAULT_PLACEHOLDER_SPRITE: &str = "https://via.placeholder.com/180?text=No+Image";
pub const DEFAULT_STAT_BAR_WIDTH: usize = 20;
pub const DEFAULT_STAT_CEILING: u32 = 200;
