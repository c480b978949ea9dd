//! Catalog record as served by `GET /pokemon/{nameOrId}`
//!
//! Only the fields the card needs are typed. Everything else in the payload
//! lands in `extra` so the durable cache stores the full record JSON.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonRecord {
    pub id: u32,
    /// Canonical (lowercase) name
    pub name: String,
    #[serde(default)]
    pub sprites: Sprites,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    /// Tenths of a kilogram
    pub weight: u32,
    /// Tenths of a meter
    pub height: u32,
    #[serde(default)]
    pub stats: Vec<StatSlot>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeSlot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot: Option<u32>,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatSlot {
    pub base_stat: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effort: Option<u32>,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl PokemonRecord {
    /// Keys a record is always reachable under once cached: stringified id and name
    pub fn canonical_keys(&self) -> [String; 2] {
        [self.id.to_string(), self.name.clone()]
    }

    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(|t| t.kind.name.as_str())
    }

    /// Ordered (stat-name, base-value) pairs
    pub fn base_stats(&self) -> impl Iterator<Item = (&str, u32)> {
        self.stats.iter().map(|s| (s.stat.name.as_str(), s.base_stat))
    }

    pub fn sprite_url(&self) -> Option<&str> {
        self.sprites.front_default.as_deref()
    }

    pub fn weight_kg(&self) -> f64 {
        f64::from(self.weight) / 10.0
    }

    pub fn height_m(&self) -> f64 {
        f64::from(self.height) / 10.0
    }
}
