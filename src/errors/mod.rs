//! Centralized error handling for the Pokédex card application
//!
//! # Error Categories
//!
//! - **Lookup Errors**: user-visible failures of a single resolve (empty input,
//!   unknown Pokémon, catalog trouble)
//! - **Store Errors**: durable cache read/write failures; logged, never shown
//! - **Application Errors**: configuration and start-up failures
//!
//! # Usage
//!
//! ```rust
//! use pokedex_card::errors::{LookupError, LookupResult};
//!
//! fn example_function(input: &str) -> LookupResult<String> {
//!     if input.trim().is_empty() {
//!         return Err(LookupError::EmptyInput);
//!     }
//!     Ok(input.trim().to_lowercase())
//! }
//! ```

pub mod types;

pub use types::*;

/// Convenience type alias for Results using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Convenience type alias for Resolver and catalog Results
pub type LookupResult<T> = Result<T, LookupError>;

/// Convenience type alias for durable store Results
pub type StoreResult<T> = Result<T, StoreError>;
