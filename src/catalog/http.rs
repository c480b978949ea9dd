use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, info};
use url::Url;

use super::CatalogClient;
use crate::config::CatalogConfig;
use crate::errors::{AppError, AppResult, LookupError, LookupResult};
use crate::models::PokemonRecord;

/// PokeAPI-compatible client issuing `GET {base_url}/pokemon/{key}`
#[derive(Debug, Clone)]
pub struct HttpCatalogClient {
    client: Client,
    base_url: Url,
}

impl HttpCatalogClient {
    /// Build a client from configuration
    ///
    /// Only a connect timeout is applied unless `request_timeout` is set.
    pub fn new(config: &CatalogConfig) -> AppResult<Self> {
        let base_url = config.parsed_base_url()?;
        let user_agent = config.user_agent.clone().unwrap_or_else(|| {
            format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
        });

        let mut builder = Client::builder()
            .connect_timeout(config.connect_timeout)
            .user_agent(user_agent);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build().map_err(AppError::HttpClient)?,
            base_url,
        })
    }

    /// Endpoint URL for a key; the key is percent-encoded as a single path segment
    pub fn endpoint(&self, key: &str) -> Url {
        let mut url = self.base_url.clone();
        // Base URLs are validated as hierarchical in CatalogConfig::parsed_base_url
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("pokemon").push(key);
        }
        url
    }
}

/// Map a non-success status to its lookup error; `None` for 2xx
pub fn classify_status(status: StatusCode, key: &str) -> Option<LookupError> {
    if status.is_success() {
        None
    } else if status == StatusCode::NOT_FOUND {
        Some(LookupError::not_found(key))
    } else {
        Some(LookupError::transient(
            Some(status.as_u16()),
            format!(
                "HTTP {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            ),
        ))
    }
}

#[async_trait]
impl CatalogClient for HttpCatalogClient {
    async fn fetch(&self, key: &str) -> LookupResult<PokemonRecord> {
        let url = self.endpoint(key);
        info!("Fetching catalog record: {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| LookupError::transient(None, format!("Request to {url} failed: {e}")))?;

        let status = response.status();
        if let Some(error) = classify_status(status, key) {
            debug!("Catalog answered {} for '{}'", status, key);
            return Err(error);
        }

        let record = response.json::<PokemonRecord>().await.map_err(|e| {
            LookupError::transient(
                Some(status.as_u16()),
                format!("Invalid catalog payload from {url}: {e}"),
            )
        })?;

        debug!("Fetched #{} '{}' for key '{}'", record.id, record.name, key);
        Ok(record)
    }
}
