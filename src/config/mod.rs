use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

use crate::cache::is_valid_slot_name;
use crate::errors::{AppError, AppResult};

pub mod defaults;
pub mod duration_serde;

use defaults::*;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Remote catalog (PokeAPI) connection settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_connect_timeout", with = "duration_serde::duration")]
    pub connect_timeout: Duration,
    /// Total request timeout; unset leaves only the transport's own limits
    #[serde(
        default,
        with = "duration_serde::option_duration",
        skip_serializing_if = "Option::is_none"
    )]
    pub request_timeout: Option<Duration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Keep fetched records across sessions; `false` caches in memory only
    #[serde(default = "default_persist")]
    pub persist: bool,
    #[serde(default = "default_cache_dir")]
    pub cache_dir: PathBuf,
    /// Name of the durable slot holding the whole cache mapping
    #[serde(default = "default_slot")]
    pub slot: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_placeholder_sprite")]
    pub placeholder_sprite: String,
    #[serde(default = "default_stat_bar_width")]
    pub stat_bar_width: usize,
    /// Base stat value drawn as a full bar
    #[serde(default = "default_stat_ceiling")]
    pub stat_ceiling: u32,
}

fn default_base_url() -> String {
    DEFAULT_CATALOG_BASE_URL.to_string()
}

fn default_connect_timeout() -> Duration {
    Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS)
}

fn default_persist() -> bool {
    DEFAULT_PERSIST
}

fn default_cache_dir() -> PathBuf {
    PathBuf::from(DEFAULT_CACHE_DIR)
}

fn default_slot() -> String {
    DEFAULT_CACHE_SLOT.to_string()
}

fn default_placeholder_sprite() -> String {
    DEFAULT_PLACEHOLDER_SPRITE.to_string()
}

fn default_stat_bar_width() -> usize {
    DEFAULT_STAT_BAR_WIDTH
}

fn default_stat_ceiling() -> u32 {
    DEFAULT_STAT_CEILING
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            connect_timeout: default_connect_timeout(),
            request_timeout: None,
            user_agent: None,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            persist: default_persist(),
            cache_dir: default_cache_dir(),
            slot: default_slot(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            placeholder_sprite: default_placeholder_sprite(),
            stat_bar_width: default_stat_bar_width(),
            stat_ceiling: default_stat_ceiling(),
        }
    }
}

impl CatalogConfig {
    /// Parsed base URL of the catalog service
    pub fn parsed_base_url(&self) -> AppResult<Url> {
        let url = Url::parse(&self.base_url).map_err(|e| {
            AppError::configuration(format!("Invalid catalog base_url '{}': {e}", self.base_url))
        })?;
        if url.cannot_be_a_base() {
            return Err(AppError::configuration(format!(
                "Catalog base_url '{}' cannot carry a path",
                self.base_url
            )));
        }
        Ok(url)
    }
}

impl Config {
    /// Check values the type system cannot
    pub fn validate(&self) -> AppResult<()> {
        self.catalog.parsed_base_url()?;

        if !is_valid_slot_name(&self.storage.slot) {
            return Err(AppError::configuration(format!(
                "storage.slot '{}' must be a plain file stem (letters, digits, '-', '_', '.')",
                self.storage.slot
            )));
        }
        if self.display.stat_ceiling == 0 {
            return Err(AppError::configuration("display.stat_ceiling must be greater than zero"));
        }
        if self.display.stat_bar_width == 0 {
            return Err(AppError::configuration("display.stat_bar_width must be greater than zero"));
        }

        Ok(())
    }

    /// Load configuration, falling back to defaults when the file does not exist
    ///
    /// Not validated here; callers apply their overrides first, then `validate`.
    pub fn load_from_file(config_file: impl AsRef<Path>) -> Result<Self> {
        let config_file = config_file.as_ref();
        let config = if config_file.exists() {
            let contents = std::fs::read_to_string(config_file)?;
            let config: Self = toml::from_str(&contents)?;
            info!("Configuration loaded from: {}", config_file.display());
            config
        } else {
            debug!(
                "No config file at {}, using defaults",
                config_file.display()
            );
            Self::default()
        };

        Ok(config)
    }

    /// Write the default configuration, creating parent directories as needed
    pub fn write_default(config_file: impl AsRef<Path>) -> Result<Self> {
        let config_file = config_file.as_ref();
        let default_config = Self::default();
        let contents = toml::to_string_pretty(&default_config)?;
        if let Some(parent) = config_file.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(config_file, contents)?;
        info!("Created default config file: {}", config_file.display());
        Ok(default_config)
    }
}
