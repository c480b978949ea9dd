//! Fake catalog service shared by integration tests

#![allow(dead_code)]

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use pokedex_card::config::CatalogConfig;
use serde_json::{Value, json};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Clone)]
struct CatalogState {
    records: Arc<Vec<Value>>,
    hits: Arc<AtomicUsize>,
}

pub struct FakeCatalog {
    pub base_url: String,
    hits: Arc<AtomicUsize>,
}

impl FakeCatalog {
    /// Requests served so far
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn catalog_config(&self) -> CatalogConfig {
        CatalogConfig {
            base_url: self.base_url.clone(),
            ..CatalogConfig::default()
        }
    }
}

pub fn pokemon_json(id: u32, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "sprites": { "front_default": format!("https://raw.example/sprites/{id}.png") },
        "types": [ { "slot": 1, "type": { "name": "electric", "url": "https://pokeapi.co/api/v2/type/13/" } } ],
        "weight": 60,
        "height": 4,
        "stats": [
            { "base_stat": 35, "effort": 0, "stat": { "name": "hp", "url": "https://pokeapi.co/api/v2/stat/1/" } },
            { "base_stat": 90, "effort": 2, "stat": { "name": "speed", "url": "https://pokeapi.co/api/v2/stat/6/" } }
        ],
        "order": 35,
        "is_default": true
    })
}

/// `GET /api/v2/pokemon/{key}` over `records`; the key `boom` answers 500
pub async fn spawn_catalog(records: Vec<Value>) -> FakeCatalog {
    let hits = Arc::new(AtomicUsize::new(0));
    let state = CatalogState {
        records: Arc::new(records),
        hits: hits.clone(),
    };
    let app = Router::new()
        .route("/api/v2/pokemon/{key}", get(pokemon_handler))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    FakeCatalog {
        base_url: format!("http://{addr}/api/v2"),
        hits,
    }
}

async fn pokemon_handler(
    State(state): State<CatalogState>,
    Path(key): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    state.hits.fetch_add(1, Ordering::SeqCst);

    if key == "boom" {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    state
        .records
        .iter()
        .find(|r| r["name"] == key.as_str() || r["id"].to_string() == key)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}
