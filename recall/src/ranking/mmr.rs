//! Maximal Marginal Relevance re-ranking for diversity.
//!
//! At each step the candidate maximizing
//! `lambda * relevance_score - (1 - lambda) * max_sim_to_selected` is moved
//! into the selection, where `max_sim_to_selected` is the highest cosine
//! similarity between the candidate and anything already selected.
//! `lambda = 1.0` is pure relevance, `lambda = 0.0` pure diversity.

use crate::models::ScoredCandidate;

/// Cosine similarity between two embeddings.
///
/// Vectors of unequal length are incomparable and score 0.0, as does any
/// zero-magnitude vector. Upstream callers sometimes mix embedding models
/// across records, so this must not be an error.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() {
        return 0.0;
    }

    let mut dot = 0.0_f64;
    let mut norm_a = 0.0_f64;
    let mut norm_b = 0.0_f64;
    for (x, y) in a.iter().zip(b.iter()) {
        let (x, y) = (f64::from(*x), f64::from(*y));
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a.sqrt() * norm_b.sqrt())
}

/// Greedily select up to `top_n` candidates balancing relevance against
/// redundancy with already-selected items.
///
/// Candidates without an embedding cannot participate in the similarity
/// search; if none carry one, the first `top_n` entries of the already-ranked
/// input are returned unchanged. Otherwise selection runs over the
/// embedding-carrying pool, and any remaining slots are padded with the
/// embedding-less candidates in their original order. Exact ties on the MMR
/// score go to the first-seen candidate, keeping selection stable with
/// respect to the input order.
pub fn mmr_select(ranked: Vec<ScoredCandidate>, top_n: usize, lambda: f64) -> Vec<ScoredCandidate> {
    if ranked.is_empty() {
        return Vec::new();
    }

    if !ranked.iter().any(|c| c.memory.embedding.is_some()) {
        let mut passthrough = ranked;
        passthrough.truncate(top_n);
        return passthrough;
    }

    let (mut remaining, without_embedding): (Vec<_>, Vec<_>) = ranked
        .into_iter()
        .partition(|c| c.memory.embedding.is_some());

    let mut selected: Vec<ScoredCandidate> = Vec::new();
    while selected.len() < top_n && !remaining.is_empty() {
        let mut best_idx = 0;
        let mut best_score = f64::NEG_INFINITY;

        for (idx, candidate) in remaining.iter().enumerate() {
            let max_sim = match candidate.memory.embedding.as_deref() {
                Some(embedding) => selected
                    .iter()
                    .filter_map(|s| s.memory.embedding.as_deref())
                    .map(|sel| cosine_similarity(embedding, sel))
                    .fold(0.0, f64::max),
                None => 0.0,
            };

            let mmr_score = lambda * candidate.relevance_score - (1.0 - lambda) * max_sim;
            if mmr_score > best_score {
                best_score = mmr_score;
                best_idx = idx;
            }
        }

        selected.push(remaining.remove(best_idx));
    }

    let open_slots = top_n.saturating_sub(selected.len());
    selected.extend(without_embedding.into_iter().take(open_slots));

    selected
}
