//! Configuration loading, validation, and integrity hashing

mod parser;
mod types;
mod validation;

pub use parser::{compute_config_hash, load_config, load_config_with_hash};
pub use types::{
    ApiConfig, Config, EffectivenessMode, EnrichmentConfig, LocalizationConfig, OutputConfig,
};
pub use validation::validate;
