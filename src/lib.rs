pub mod cache;
pub mod card;
pub mod catalog;
pub mod config;
pub mod errors;
pub mod models;
pub mod resolver;
pub mod session;
