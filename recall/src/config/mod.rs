//! Configuration system for Recall.
//!
//! Per-request retrieval knobs (MMR pool size, lambda, token budget) and the
//! logging setup, loadable from files and environment variables with
//! validation and defaults. The scoring weights are deliberately absent:
//! they are product-specified constants, not configuration.

mod loader;
mod models;

pub use loader::ConfigLoader;
pub use models::*;

/// Default configuration file names that the system will look for
pub const DEFAULT_CONFIG_FILES: &[&str] = &[
    "recall.toml",
    "recall.yaml",
    "recall.yml",
    "recall.json",
    ".recall/config.toml",
    ".recall/config.yaml",
    ".recall/config.yml",
    ".recall/config.json",
];

/// Environment variable prefix for Recall configuration
pub const ENV_PREFIX: &str = "RECALL_";

/// Configuration error type
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error occurred during file loading
    #[error("Failed to load configuration file: {0}")]
    FileLoadError(String),

    /// Error occurred during validation
    #[error("Configuration validation error: {0}")]
    ValidationError(String),

    /// Error occurred during parsing
    #[error("Configuration parsing error: {0}")]
    ParseError(String),

    /// General error
    #[error("{0}")]
    Other(String),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
