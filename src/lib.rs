//! Pokedex-Crawler: a PokeAPI ingestion and enrichment pipeline
//!
//! This crate implements a crawler that ingests creature records from the
//! PokeAPI, enriches each one with derived type-effectiveness relations,
//! one-hop evolution lineage, and localized move/species descriptions, and
//! persists the merged documents idempotently into a SQLite-backed store.

pub mod api;
pub mod config;
pub mod crawler;
pub mod enrich;
pub mod model;
pub mod output;
pub mod storage;

use thiserror::Error;

/// Main error type for pokedex-crawler operations
#[derive(Debug, Error)]
pub enum PokedexError {
    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Unexpected status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Failed to decode response from {url}: {source}")]
    Decode { url: String, source: reqwest::Error },

    #[error("Lookup error: {0}")]
    Lookup(#[from] LookupError),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Storage error: {0}")]
    StorageError(#[from] storage::StorageError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// A localized entry that was expected on a resource but is absent.
///
/// The source API carries several flavor-text entries per resource; the
/// pipeline pins one language (and for species one release version). A
/// resource with no matching entry cannot be enriched and the run aborts
/// with one of these.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("No '{language}' flavor text for version '{version}' on species '{resource}'")]
    SpeciesFlavorText {
        resource: String,
        language: String,
        version: String,
    },

    #[error("No '{language}' genus entry on species '{resource}'")]
    Genus { resource: String, language: String },

    #[error("No '{language}' flavor text on move '{resource}'")]
    MoveFlavorText { resource: String, language: String },
}

/// Result type alias for pokedex-crawler operations
pub type Result<T> = std::result::Result<T, PokedexError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::{Config, EffectivenessMode};
pub use crawler::{crawl, Coordinator};
pub use model::{EntityRecord, EvolutionRef, MoveInfo, SpeciesInfo, TypeRelations};
