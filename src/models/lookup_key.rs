use std::fmt;

use crate::errors::{LookupError, LookupResult};

/// A user-entered lookup key
///
/// Matching always uses the normalized form (trimmed, lowercased). The raw
/// input is kept because it is written as an extra cache key on success.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LookupKey {
    raw: String,
    normalized: String,
}

impl LookupKey {
    /// Validate and normalize user input; empty or whitespace-only input is rejected
    pub fn parse(input: &str) -> LookupResult<Self> {
        let normalized = input.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(LookupError::EmptyInput);
        }

        Ok(Self {
            raw: input.to_string(),
            normalized,
        })
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Distinct strings to write into the in-memory cache for this key
    pub fn write_keys(&self) -> Vec<&str> {
        if self.raw == self.normalized {
            vec![self.normalized.as_str()]
        } else {
            vec![self.normalized.as_str(), self.raw.as_str()]
        }
    }
}

impl From<u32> for LookupKey {
    fn from(id: u32) -> Self {
        let key = id.to_string();
        Self {
            raw: key.clone(),
            normalized: key,
        }
    }
}

impl fmt::Display for LookupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized)
    }
}
