//! Relevance scoring and diversity re-ranking.
//!
//! Two stages over a candidate pool: [`rank_candidates`] blends cosine
//! similarity, importance, temporal decay, and access frequency into one
//! relevance score and sorts by it; [`mmr_select`] then picks a diverse
//! subset via Maximal Marginal Relevance so the assembled context is not
//! three paraphrases of the same fact.

mod mmr;
mod scorer;

pub use mmr::{cosine_similarity, mmr_select};
pub use scorer::{access_bonus, combined_relevance, rank_candidates, temporal_decay};
