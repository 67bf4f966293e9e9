//! Fixed composition of the three pipeline stages.
//!
//! This is the operation the surrounding service's `/context` handler calls:
//! score the candidate pool, re-select for diversity, pack into the budget.
//! Data flows strictly left to right; each stage is pure and synchronous, so
//! the whole call is atomic from the caller's perspective.

use crate::config::RetrievalConfig;
use crate::context::{assemble_context, AssembledContext};
use crate::models::MemoryCandidate;
use crate::ranking::{mmr_select, rank_candidates};

/// Rank, diversify, and pack a candidate pool into a context blob.
///
/// `options` supplies the MMR pool cap, the relevance/diversity trade-off,
/// and the token budget; the blend weights themselves are constants
/// (see [`crate::ranking`]).
pub fn build_context(
    candidates: Vec<MemoryCandidate>,
    options: &RetrievalConfig,
) -> AssembledContext {
    let pool_size = candidates.len();

    let ranked = rank_candidates(candidates);
    let diverse = mmr_select(ranked, options.candidate_pool, options.mmr_lambda);
    let assembled = assemble_context(&diverse, options.max_tokens);

    tracing::debug!(
        pool = pool_size,
        selected = diverse.len(),
        included = assembled.memory_count,
        tokens = assembled.total_tokens_estimate,
        "assembled retrieval context"
    );

    assembled
}
