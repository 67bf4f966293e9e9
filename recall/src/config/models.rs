//! Configuration model definitions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::{ConfigError, Result};

/// Main configuration structure for Recall.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RecallConfig {
    /// Retrieval pipeline configuration
    pub retrieval: RetrievalConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl RecallConfig {
    /// Validate the configuration, returning an error if any section is invalid
    pub fn validate(&self) -> Result<()> {
        self.retrieval
            .validate()
            .map_err(ConfigError::ValidationError)
    }
}

/// Per-request knobs for the ranking/selection/assembly pipeline.
///
/// These are the values the caller-facing layer sources from request
/// parameters. The core stage functions assume they have been validated;
/// [`RetrievalConfig::validate`] is that boundary check.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Candidate pool size cap handed to MMR selection
    pub candidate_pool: usize,

    /// MMR relevance/diversity trade-off in [0.0, 1.0]
    ///
    /// 1.0 is pure relevance (no diversity penalty), 0.0 pure diversity.
    pub mmr_lambda: f64,

    /// Token budget for context assembly
    pub max_tokens: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            candidate_pool: 20,
            mmr_lambda: 0.7,
            max_tokens: 1500,
        }
    }
}

impl RetrievalConfig {
    /// Validate the configuration, returning an error if invalid
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.candidate_pool == 0 {
            return Err("candidate_pool must be greater than 0".to_string());
        }
        if self.max_tokens == 0 {
            return Err("max_tokens must be greater than 0".to_string());
        }
        if !(0.0..=1.0).contains(&self.mmr_lambda) {
            return Err(format!(
                "mmr_lambda must be within [0.0, 1.0], got {}",
                self.mmr_lambda
            ));
        }
        Ok(())
    }
}

/// Log verbosity levels
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Default for LogLevel {
    fn default() -> Self {
        Self::Info
    }
}

/// Log output formats
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable multi-line output
    Pretty,
    /// Single-line output
    Compact,
    /// Structured JSON output
    Json,
}

impl Default for LogFormat {
    fn default() -> Self {
        Self::Pretty
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Minimum level to emit
    pub level: LogLevel,

    /// Output format
    pub format: LogFormat,

    /// Whether to log to stdout
    pub stdout: bool,

    /// Optional log file path
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            format: LogFormat::default(),
            stdout: true,
            file: None,
        }
    }
}
