//! Error type definitions for the Pokédex card application

use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// HTTP client construction errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Terminal failures of one Resolver invocation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// Input was empty or whitespace only; nothing was looked up
    #[error("Empty lookup key")]
    EmptyInput,

    /// The catalog has no record for the key (HTTP 404)
    #[error("No catalog record for '{key}'")]
    NotFound { key: String },

    /// Any other catalog failure: non-2xx status, network error, bad payload
    #[error("Catalog request failed: {detail}")]
    Transient { status: Option<u16>, detail: String },
}

/// Durable key-value store failures
#[derive(Error, Debug)]
pub enum StoreError {
    /// Store cannot be reached or refused the operation
    #[error("Store unavailable: {message}")]
    Unavailable { message: String },

    /// Slot content is not a valid cache mapping
    #[error("Stored cache is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),

    /// Filesystem failures of file-backed stores
    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

impl LookupError {
    /// Create a not found error for a lookup key
    pub fn not_found<K: Into<String>>(key: K) -> Self {
        Self::NotFound { key: key.into() }
    }

    /// Create a transient error with an optional HTTP status
    pub fn transient<D: Into<String>>(status: Option<u16>, detail: D) -> Self {
        Self::Transient {
            status,
            detail: detail.into(),
        }
    }

    /// Message suitable for direct display in the message slot
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::EmptyInput => "Please enter a Pokémon name or ID.",
            Self::NotFound { .. } => "Pokémon not found. Check the name or ID.",
            Self::Transient { .. } => "Error searching for the Pokémon. Please try again.",
        }
    }
}

impl StoreError {
    /// Create an unavailable error
    pub fn unavailable<S: Into<String>>(message: S) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}
