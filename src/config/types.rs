use serde::Deserialize;

/// Main configuration structure for the crawler
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    pub localization: LocalizationConfig,
    #[serde(default)]
    pub enrichment: EnrichmentConfig,
    pub output: OutputConfig,
}

/// Source API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the PokeAPI deployment (e.g., "https://pokeapi.co/api/v2")
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Number of entities to request from the listing endpoint
    #[serde(rename = "page-limit")]
    pub page_limit: u32,
}

/// Localization pinning for flavor text and genus selection
#[derive(Debug, Clone, Deserialize)]
pub struct LocalizationConfig {
    /// Language tag that descriptions and genera must match (e.g., "en")
    pub language: String,

    /// Release version tag that species descriptions must match (e.g., "firered")
    pub version: String,
}

/// Enrichment behavior configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnrichmentConfig {
    /// Which type-effectiveness shape to compute and persist
    #[serde(default)]
    pub effectiveness: EffectivenessMode,
}

/// The two deployment-selected type-effectiveness shapes.
///
/// The shapes have different output schemas and are never merged; a store
/// written with one mode should not be extended with the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EffectivenessMode {
    /// Full weak/resistant/immune sets with multiplicative dual-type combination
    #[default]
    Detailed,

    /// Strong-against/weak-against sets unioned across the entity's types
    Simple,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path to the SQLite database file
    #[serde(rename = "database-path")]
    pub database_path: String,

    /// Path the --export mode writes its JSON dump to
    #[serde(rename = "export-path")]
    pub export_path: String,
}
