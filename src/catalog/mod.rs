//! Remote catalog client
//!
//! One request per call, no retries. Outcomes are classified into
//! [`LookupError::NotFound`](crate::errors::LookupError::NotFound) for HTTP 404
//! and [`LookupError::Transient`](crate::errors::LookupError::Transient) for
//! everything else that is not a decodable success.

use async_trait::async_trait;

use crate::errors::LookupResult;
use crate::models::PokemonRecord;

pub mod http;

pub use http::{HttpCatalogClient, classify_status};

/// Read access to the catalog service
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Fetch the record addressed by a name or numeric id
    async fn fetch(&self, key: &str) -> LookupResult<PokemonRecord>;
}
