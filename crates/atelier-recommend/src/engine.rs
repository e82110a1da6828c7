//! RecommendationEngine: runs every applicable analysis and fuses the output.
//!
//! Candidates get a small category boost on `match_score`, are sorted by
//! boosted match score (ties by confidence), and only the top slice is
//! returned. Deterministic given identical inputs; no network, no disk.

use tracing::debug;

use atelier_core::config::RecommendConfig;
use atelier_core::errors::RecommendError;
use atelier_core::models::candidate::Candidate;
use atelier_core::models::context::RequestContext;
use atelier_core::models::score::Score;
use atelier_core::models::snapshot::Snapshot;

use crate::analysis::{self, Proposal};

/// The synthetic recommendation generator.
pub struct RecommendationEngine {
    config: RecommendConfig,
}

impl RecommendationEngine {
    pub fn new(config: RecommendConfig) -> Self {
        Self { config }
    }

    /// Generate candidates for a snapshot, optionally against its prior
    /// snapshot for differential analysis.
    pub fn generate(
        &self,
        snapshot: &Snapshot,
        previous: Option<&Snapshot>,
        context: &RequestContext,
    ) -> Result<Vec<Candidate>, RecommendError> {
        if snapshot.id.is_empty() || snapshot.artifact_id.is_empty() {
            return Err(RecommendError::InvalidSnapshot {
                reason: "snapshot is missing id or artifact_id".into(),
            });
        }

        let mut proposals: Vec<Proposal> = Vec::new();
        proposals.extend(analysis::composition::analyze(snapshot));
        proposals.extend(analysis::population::analyze(snapshot));
        proposals.extend(analysis::typography::analyze(snapshot));
        proposals.extend(analysis::color::analyze(snapshot));
        proposals.extend(analysis::interaction::analyze(snapshot));
        if let Some(previous) = previous {
            proposals.extend(analysis::differential::analyze(snapshot, previous));
        }
        if proposals.is_empty() {
            proposals.extend(analysis::fallback::analyze(snapshot));
        }

        let mut candidates: Vec<Candidate> = proposals
            .into_iter()
            .map(|p| {
                let boost = p.category.map(analysis::Category::boost).unwrap_or(0.0);
                let mut candidate = p.candidate;
                candidate.match_score = Score::new(candidate.match_score.value() + boost);
                candidate
            })
            .collect();

        candidates.sort_by(|a, b| {
            b.match_score
                .partial_cmp(&a.match_score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(
                    b.confidence
                        .partial_cmp(&a.confidence)
                        .unwrap_or(std::cmp::Ordering::Equal),
                )
        });
        candidates.truncate(self.config.max_candidates);

        debug!(
            snapshot = %snapshot.id,
            platform = ?context.platform,
            candidates = candidates.len(),
            "synthetic recommendations generated"
        );
        Ok(candidates)
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new(RecommendConfig::default())
    }
}
