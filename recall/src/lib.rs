//! # Recall
//!
//! Ranking and context-assembly core for semantic memory retrieval. Given a
//! pool of candidate memories that an upstream nearest-neighbor search has
//! already narrowed down (each carrying its cosine similarity to the query),
//! Recall computes a blended relevance score per candidate, re-selects a
//! diverse subset via Maximal Marginal Relevance, and greedily packs the
//! selection into a bounded token budget.
//!
//! ## Quick Start
//!
//! ```rust
//! use recall::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let config = RecallConfig::default();
//!     recall::init(&config)?;
//!
//!     // Candidates come from your vector store; similarity is precomputed.
//!     let candidates = vec![
//!         MemoryCandidate::new("likes dark roast coffee", ContentType::Preference)
//!             .with_similarity(0.92)
//!             .with_embedding(vec![1.0, 0.0, 0.0]),
//!         MemoryCandidate::new("prefers tea in the evening", ContentType::Preference)
//!             .with_similarity(0.88)
//!             .with_embedding(vec![0.9, 0.1, 0.0]),
//!     ];
//!
//!     let assembled = build_context(candidates, &config.retrieval);
//!     println!("{}", assembled.context);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! The pipeline is three pure, synchronous stages applied left to right:
//!
//! - **Scorer** ([`ranking::rank_candidates`]): blends cosine similarity,
//!   caller-supplied importance, temporal decay, and access frequency into a
//!   single relevance score, then sorts.
//! - **Diversity reranker** ([`ranking::mmr_select`]): greedy MMR selection
//!   that trades relevance against redundancy with already-chosen items.
//! - **Context assembler** ([`context::assemble_context`]): first-fit packing
//!   of formatted memory blocks into a token budget.
//!
//! None of the stages performs I/O or holds shared state, so any number of
//! callers may run the pipeline concurrently on independent inputs. Search,
//! persistence, embedding generation, and transport all live outside this
//! crate.

pub mod config;
pub mod context;
pub mod logging;
pub mod models;
pub mod pipeline;
pub mod ranking;

/// The prelude re-exports commonly used types for convenience
pub mod prelude {
    // Re-export the pipeline entry points
    pub use crate::pipeline::build_context;
    pub use crate::ranking::{mmr_select, rank_candidates};
    pub use crate::context::{assemble_context, estimate_tokens, AssembledContext};

    // Re-export config types
    pub use crate::config::{
        ConfigLoader, LogFormat, LogLevel, LoggingConfig, RecallConfig, RetrievalConfig,
    };

    // Re-export model types
    pub use crate::models::{ContentType, MemoryCandidate, MemoryResult, ScoredCandidate};

    // Re-export essential result type
    pub use crate::{RecallError, Result};
}

/// Current library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Error type for Recall operations
///
/// The scoring/selection/assembly pipeline itself is total over well-typed
/// input; errors only arise at the configuration and logging boundaries.
#[derive(Debug, thiserror::Error)]
pub enum RecallError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Logging error
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LogError),

    /// Other unclassified errors
    #[error("{0}")]
    Other(String),
}

impl From<crate::config::ConfigError> for RecallError {
    fn from(err: crate::config::ConfigError) -> Self {
        RecallError::Configuration(err.to_string())
    }
}

/// Result type for Recall operations
pub type Result<T> = std::result::Result<T, RecallError>;

/// Initialize Recall with the provided configuration.
///
/// Validates the configuration and sets up the logging subscriber. The
/// pipeline functions themselves do not require initialization; this is a
/// one-call startup path for embedding applications.
pub fn init(config: &config::RecallConfig) -> Result<()> {
    config.validate()?;
    logging::init(&config.logging)?;
    Ok(())
}

/// Initialize Recall with default configuration.
pub fn init_with_defaults() -> Result<()> {
    init(&config::RecallConfig::default())
}
