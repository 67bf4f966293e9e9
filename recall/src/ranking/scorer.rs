//! Blended relevance scorer.
//!
//! Combines the upstream cosine similarity with importance, recency, and
//! access frequency into a single score in [0.0, 1.0]. The weights and decay
//! parameters are product-specified constants, not tunables.

use chrono::{DateTime, Utc};

use crate::models::{MemoryCandidate, ScoredCandidate};

/// Weight of the upstream cosine similarity.
pub const SIMILARITY_WEIGHT: f64 = 0.60;

/// Weight of the caller-supplied importance.
pub const IMPORTANCE_WEIGHT: f64 = 0.25;

/// Weight of the temporal decay factor.
pub const RECENCY_WEIGHT: f64 = 0.10;

/// Weight of the access-frequency bonus.
pub const ACCESS_WEIGHT: f64 = 0.05;

/// Half-life of the exponential temporal decay, in days.
pub const DECAY_HALF_LIFE_DAYS: f64 = 30.0;

/// Bonus per recorded access.
pub const ACCESS_BONUS_PER_HIT: f64 = 0.01;

/// Hard cap on the access bonus, reached at 10 accesses.
pub const ACCESS_BONUS_CAP: f64 = 0.1;

/// Exponential temporal decay with a 30-day half-life.
///
/// `exp(-ln(2)/30 * age_days)`: a memory created now scores 1.0, one 30 days
/// old scores 0.5. Timestamps in the future (clock skew between writers)
/// clamp to age zero rather than producing a decay above 1.0.
pub fn temporal_decay(created_at: DateTime<Utc>) -> f64 {
    let age_secs = (Utc::now() - created_at).num_seconds().max(0) as f64;
    let age_days = age_secs / 86_400.0;
    (-std::f64::consts::LN_2 / DECAY_HALF_LIFE_DAYS * age_days).exp()
}

/// Small bonus for frequently accessed memories, capped at 0.1.
pub fn access_bonus(access_count: u32) -> f64 {
    (f64::from(access_count) * ACCESS_BONUS_PER_HIT).min(ACCESS_BONUS_CAP)
}

/// Blended relevance score in [0.0, 1.0], rounded to 4 decimal places.
///
/// Clamping and rounding happen only at the very end, so a saturated input
/// (similarity 1.0, importance 1.0, heavy access) still lands on 1.0 and a
/// pathological negative similarity lands on 0.0.
pub fn combined_relevance(
    cosine_similarity: f64,
    importance: f64,
    created_at: DateTime<Utc>,
    access_count: u32,
) -> f64 {
    let score = SIMILARITY_WEIGHT * cosine_similarity
        + IMPORTANCE_WEIGHT * importance
        + RECENCY_WEIGHT * temporal_decay(created_at)
        + ACCESS_WEIGHT * access_bonus(access_count);

    (score.clamp(0.0, 1.0) * 10_000.0).round() / 10_000.0
}

/// Score every candidate and sort descending by relevance.
///
/// The sort is stable: candidates with equal scores keep their input order,
/// which preserves the upstream similarity ordering as a tie-break.
pub fn rank_candidates(candidates: Vec<MemoryCandidate>) -> Vec<ScoredCandidate> {
    let mut scored: Vec<ScoredCandidate> = candidates
        .into_iter()
        .map(|memory| {
            let relevance_score = combined_relevance(
                memory.cosine_similarity,
                memory.importance,
                memory.created_at,
                memory.access_count,
            );
            ScoredCandidate {
                memory,
                relevance_score,
            }
        })
        .collect();

    scored.sort_by(|a, b| {
        b.relevance_score
            .partial_cmp(&a.relevance_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ContentType;
    use chrono::Duration;

    fn candidate(similarity: f64, importance: f64, age_days: i64, access_count: u32) -> MemoryCandidate {
        MemoryCandidate::new("test content", ContentType::Fact)
            .with_similarity(similarity)
            .with_importance(importance)
            .with_created_at(Utc::now() - Duration::days(age_days))
            .with_access_count(access_count)
    }

    #[test]
    fn test_recent_memory_decays_little() {
        assert!(temporal_decay(Utc::now()) >= 0.99);
    }

    #[test]
    fn test_half_life_at_thirty_days() {
        let decay = temporal_decay(Utc::now() - Duration::days(30));
        assert!((decay - 0.5).abs() < 0.01);
    }

    #[test]
    fn test_decay_strictly_decreasing_with_age() {
        let decays: Vec<f64> = [0, 10, 30, 60, 120]
            .iter()
            .map(|days| temporal_decay(Utc::now() - Duration::days(*days)))
            .collect();
        for pair in decays.windows(2) {
            assert!(pair[0] > pair[1], "decay not decreasing: {:?}", decays);
        }
    }

    #[test]
    fn test_old_memory_decays() {
        assert!(temporal_decay(Utc::now() - Duration::days(100)) < 0.6);
        assert!(temporal_decay(Utc::now() - Duration::days(365)) < 0.3);
    }

    #[test]
    fn test_future_timestamp_clamps_to_age_zero() {
        let decay = temporal_decay(Utc::now() + Duration::days(5));
        assert_eq!(decay, 1.0);
    }

    #[test]
    fn test_access_bonus_zero() {
        assert_eq!(access_bonus(0), 0.0);
    }

    #[test]
    fn test_access_bonus_capped() {
        assert_eq!(access_bonus(100), 0.1);
        assert_eq!(access_bonus(10), 0.1);
    }

    #[test]
    fn test_access_bonus_moderate() {
        assert!((access_bonus(5) - 0.05).abs() < 1e-12);
    }

    #[test]
    fn test_high_similarity_scores_high() {
        let score = combined_relevance(0.95, 0.8, Utc::now(), 5);
        assert!(score > 0.7);
    }

    #[test]
    fn test_low_similarity_scores_low() {
        let score = combined_relevance(0.2, 0.3, Utc::now() - Duration::days(100), 0);
        assert!(score < 0.3);
    }

    #[test]
    fn test_saturated_inputs_stay_in_range() {
        let score = combined_relevance(1.0, 1.0, Utc::now(), 100);
        assert!(score <= 1.0);
        assert!(score > 0.95);
    }

    #[test]
    fn test_overshoot_clamps_to_one() {
        // A similarity above 1.0 violates the upstream contract but must
        // still clamp rather than leak a score above 1.0.
        let score = combined_relevance(1.5, 1.0, Utc::now(), 100);
        assert_eq!(score, 1.0);
    }

    #[test]
    fn test_negative_similarity_clamps_to_zero() {
        let score = combined_relevance(-1.0, 0.0, Utc::now() - Duration::days(3650), 0);
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_score_rounded_to_four_decimals() {
        let score = combined_relevance(0.3333, 0.1111, Utc::now() - Duration::days(45), 3);
        let rescaled = score * 10_000.0;
        assert!((rescaled - rescaled.round()).abs() < 1e-9);
    }

    #[test]
    fn test_score_recomputation_is_stable() {
        let created_at = Utc::now() - Duration::days(7);
        let first = combined_relevance(0.7, 0.6, created_at, 4);
        let second = combined_relevance(0.7, 0.6, created_at, 4);
        assert_eq!(first, second);
    }

    #[test]
    fn test_rank_sorts_by_relevance() {
        let ranked = rank_candidates(vec![
            candidate(0.5, 0.3, 0, 0),
            candidate(0.9, 0.8, 0, 5),
        ]);
        assert!(ranked[0].relevance_score > ranked[1].relevance_score);
        assert_eq!(ranked[0].memory.cosine_similarity, 0.9);
    }

    #[test]
    fn test_rank_is_stable_for_equal_scores() {
        let first = candidate(0.5, 0.5, 0, 0);
        let second = candidate(0.5, 0.5, 0, 0);
        let first_id = first.id.clone();
        let second_id = second.id.clone();

        let ranked = rank_candidates(vec![first, second]);
        assert_eq!(ranked[0].memory.id, first_id);
        assert_eq!(ranked[1].memory.id, second_id);
    }

    #[test]
    fn test_rank_empty_input() {
        assert!(rank_candidates(Vec::new()).is_empty());
    }
}
