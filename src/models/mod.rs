//! Data models for catalog records and lookup keys

pub mod lookup_key;
pub mod pokemon;

pub use lookup_key::LookupKey;
pub use pokemon::{NamedResource, PokemonRecord, Sprites, StatSlot, TypeSlot};

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Minimal catalog record as PokeAPI would return it
    pub fn record(id: u32, name: &str) -> PokemonRecord {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "name": name,
            "sprites": { "front_default": format!("https://img.example/{id}.png"), "back_default": null },
            "types": [ { "slot": 1, "type": { "name": "water", "url": "https://pokeapi.co/api/v2/type/11/" } } ],
            "weight": 90,
            "height": 5,
            "stats": [
                { "base_stat": 44, "effort": 0, "stat": { "name": "hp" } },
                { "base_stat": 48, "effort": 0, "stat": { "name": "attack" } },
                { "base_stat": 65, "effort": 1, "stat": { "name": "defense" } },
                { "base_stat": 50, "effort": 0, "stat": { "name": "special-attack" } },
                { "base_stat": 64, "effort": 0, "stat": { "name": "special-defense" } },
                { "base_stat": 43, "effort": 0, "stat": { "name": "speed" } }
            ],
            "base_experience": 63
        }))
        .expect("fixture record deserializes")
    }
}
