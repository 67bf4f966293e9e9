//! Data model for the retrieval pipeline.
//!
//! Candidates are transient: they are created per request from whatever the
//! upstream vector search returned, flow through scoring, selection, and
//! assembly, and are dropped with the response. Nothing here is persisted.

mod api;
mod memory;

pub use api::{normalize_metadata, MemoryResult};
pub use memory::{ContentType, MemoryCandidate, ScoredCandidate};
