//! Preference-aware candidate ranking.
//!
//! Ranking orders candidates by learned user preference without ever
//! mutating their `match_score` or `confidence`. Preference-store failures
//! degrade gracefully: the affected adjustment is skipped with a warning
//! and the candidate keeps its base score.

pub mod store;

use tracing::warn;

use atelier_core::config::RankingConfig;
use atelier_core::models::candidate::{Candidate, RankedCandidate};
use atelier_core::models::score::Score;
use atelier_core::traits::PreferenceStore;

/// Orders candidates by preference score, model-sourced first.
pub struct PreferenceRanker {
    config: RankingConfig,
}

impl PreferenceRanker {
    pub fn new(config: RankingConfig) -> Self {
        Self { config }
    }

    /// Rank candidates against the preference store.
    ///
    /// Base score is `match_score` when set, else `confidence`. A rule with
    /// recorded decisions scales the base by `0.5 + acceptance_rate`; the
    /// candidate's dimension applies a further boost or penalty at the
    /// configured thresholds. The result is clamped to [0, 1].
    pub fn rank(
        &self,
        candidates: Vec<Candidate>,
        store: &dyn PreferenceStore,
    ) -> Vec<RankedCandidate> {
        let mut ranked: Vec<RankedCandidate> = candidates
            .into_iter()
            .map(|candidate| self.rank_one(candidate, store))
            .collect();
        sort_ranked(&mut ranked);
        ranked
    }

    /// Wrap candidates without preference adjustment, preserving priority
    /// order. Used when ranking times out or no store is reachable.
    pub fn rank_passthrough(candidates: Vec<Candidate>) -> Vec<RankedCandidate> {
        let mut ranked: Vec<RankedCandidate> = candidates
            .into_iter()
            .map(RankedCandidate::passthrough)
            .collect();
        sort_ranked(&mut ranked);
        ranked
    }

    fn rank_one(&self, candidate: Candidate, store: &dyn PreferenceStore) -> RankedCandidate {
        let base = if candidate.match_score.is_zero() {
            candidate.confidence.value()
        } else {
            candidate.match_score.value()
        };

        let rule_multiplier = match store.rule_stats(&candidate.rule_id) {
            Ok(stats) => stats
                .and_then(|s| s.acceptance_rate())
                .map_or(1.0, |rate| 0.5 + rate),
            Err(err) => {
                warn!(rule_id = %candidate.rule_id, error = %err, "rule stats unavailable, skipping adjustment");
                1.0
            }
        };

        let dimension_multiplier = match store.dimension_stats(candidate.dimension) {
            Ok(stats) => match stats.and_then(|s| s.acceptance_rate()) {
                Some(rate) if rate > self.config.dimension_boost_threshold => {
                    self.config.dimension_boost
                }
                Some(rate) if rate < self.config.dimension_penalty_threshold => {
                    self.config.dimension_penalty
                }
                _ => 1.0,
            },
            Err(err) => {
                warn!(dimension = %candidate.dimension, error = %err, "dimension stats unavailable, skipping adjustment");
                1.0
            }
        };

        let preference_score = Score::new(base * rule_multiplier * dimension_multiplier);
        let priority = candidate.source.priority();
        RankedCandidate {
            candidate,
            preference_score,
            priority,
        }
    }
}

impl Default for PreferenceRanker {
    fn default() -> Self {
        Self::new(RankingConfig::default())
    }
}

fn sort_ranked(ranked: &mut [RankedCandidate]) {
    ranked.sort_by(|a, b| {
        b.priority.cmp(&a.priority).then(
            b.preference_score
                .partial_cmp(&a.preference_score)
                .unwrap_or(std::cmp::Ordering::Equal),
        )
    });
}

#[cfg(test)]
mod tests {
    use super::store::InMemoryPreferenceStore;
    use super::*;
    use atelier_core::errors::{AtelierError, AtelierResult};
    use atelier_core::models::candidate::{CandidateSource, Dimension, RuleScope};
    use atelier_core::models::stats::{AcceptanceStats, UserResponse};
    use proptest::prelude::*;

    fn candidate(rule_id: &str, dimension: Dimension, match_score: f64) -> Candidate {
        Candidate {
            rule_id: rule_id.into(),
            description: format!("candidate {rule_id}"),
            dimension,
            confidence: Score::new(0.6),
            match_score: Score::new(match_score),
            scope: RuleScope::Compositional,
            source: CandidateSource::Synthetic,
        }
    }

    #[test]
    fn accepted_rules_outrank_rejected_rules() {
        let store = InMemoryPreferenceStore::new();
        for _ in 0..5 {
            store.record("liked", Dimension::Spacing, UserResponse::Accepted);
            store.record("disliked", Dimension::Typography, UserResponse::Rejected);
        }

        let ranked = PreferenceRanker::default().rank(
            vec![
                candidate("disliked", Dimension::Typography, 0.7),
                candidate("liked", Dimension::Spacing, 0.7),
            ],
            &store,
        );
        assert_eq!(ranked[0].candidate.rule_id, "liked");
        assert!(ranked[0].preference_score > ranked[1].preference_score);
    }

    #[test]
    fn higher_acceptance_rate_never_ranks_lower() {
        // Monotonicity: same candidate, better history, never a lower score.
        let cold = InMemoryPreferenceStore::new();
        cold.record("r", Dimension::Color, UserResponse::Accepted);
        cold.record("r", Dimension::Color, UserResponse::Rejected);

        let warm = InMemoryPreferenceStore::new();
        warm.record("r", Dimension::Color, UserResponse::Accepted);
        warm.record("r", Dimension::Color, UserResponse::Accepted);

        let ranker = PreferenceRanker::default();
        let low = ranker.rank(vec![candidate("r", Dimension::Color, 0.5)], &cold);
        let high = ranker.rank(vec![candidate("r", Dimension::Color, 0.5)], &warm);
        assert!(high[0].preference_score >= low[0].preference_score);
    }

    #[test]
    fn confidence_is_the_base_when_match_score_is_unset() {
        let store = InMemoryPreferenceStore::new();
        let ranked =
            PreferenceRanker::default().rank(vec![candidate("r", Dimension::Layout, 0.0)], &store);
        assert_eq!(ranked[0].preference_score.value(), 0.6);
    }

    #[test]
    fn model_candidates_rank_above_synthetic_regardless_of_score() {
        let store = InMemoryPreferenceStore::new();
        let mut model = candidate("model-r", Dimension::Layout, 0.2);
        model.source = CandidateSource::Model;
        let synthetic = candidate("synth-r", Dimension::Layout, 0.9);

        let ranked = PreferenceRanker::default().rank(vec![synthetic, model], &store);
        assert_eq!(ranked[0].candidate.rule_id, "model-r");
    }

    #[test]
    fn preference_score_is_clamped_to_one() {
        let store = InMemoryPreferenceStore::new();
        for _ in 0..10 {
            store.record("r", Dimension::Spacing, UserResponse::Accepted);
        }
        let ranked =
            PreferenceRanker::default().rank(vec![candidate("r", Dimension::Spacing, 0.9)], &store);
        assert_eq!(ranked[0].preference_score.value(), 1.0);
    }

    #[test]
    fn scores_are_untouched_by_ranking() {
        let store = InMemoryPreferenceStore::new();
        store.record("r", Dimension::Spacing, UserResponse::Accepted);
        let ranked =
            PreferenceRanker::default().rank(vec![candidate("r", Dimension::Spacing, 0.7)], &store);
        assert_eq!(ranked[0].candidate.match_score.value(), 0.7);
        assert_eq!(ranked[0].candidate.confidence.value(), 0.6);
    }

    struct FailingStore;

    impl PreferenceStore for FailingStore {
        fn rule_stats(&self, _rule_id: &str) -> AtelierResult<Option<AcceptanceStats>> {
            Err(AtelierError::PreferenceStore {
                reason: "backend offline".into(),
            })
        }
        fn dimension_stats(&self, _dimension: Dimension) -> AtelierResult<Option<AcceptanceStats>> {
            Err(AtelierError::PreferenceStore {
                reason: "backend offline".into(),
            })
        }
    }

    #[test]
    fn store_failures_fall_back_to_the_base_score() {
        let ranked = PreferenceRanker::default()
            .rank(vec![candidate("r", Dimension::Spacing, 0.7)], &FailingStore);
        assert_eq!(ranked[0].preference_score.value(), 0.7);
    }

    #[test]
    fn passthrough_preserves_order_within_priority() {
        let candidates = vec![
            candidate("a", Dimension::Spacing, 0.9),
            candidate("b", Dimension::Layout, 0.5),
        ];
        let ranked = PreferenceRanker::rank_passthrough(candidates);
        assert_eq!(ranked[0].candidate.rule_id, "a");
        assert_eq!(ranked[0].preference_score.value(), 0.9);
    }

    proptest! {
        /// Whatever history the store has accumulated, the preference
        /// score stays inside [0, 1].
        #[test]
        fn preference_scores_stay_bounded(
            accepted in 0u32..20,
            rejected in 0u32..20,
            ignored in 0u32..20,
            match_score in 0.0f64..1.0,
        ) {
            let store = InMemoryPreferenceStore::new();
            for _ in 0..accepted {
                store.record("r", Dimension::Spacing, UserResponse::Accepted);
            }
            for _ in 0..rejected {
                store.record("r", Dimension::Spacing, UserResponse::Rejected);
            }
            for _ in 0..ignored {
                store.record("r", Dimension::Spacing, UserResponse::Ignored);
            }

            let ranked = PreferenceRanker::default()
                .rank(vec![candidate("r", Dimension::Spacing, match_score)], &store);
            let score = ranked[0].preference_score.value();
            prop_assert!((0.0..=1.0).contains(&score));
        }
    }
}
