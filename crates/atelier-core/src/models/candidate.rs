//! Recommendation candidates and their ranked form.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::score::Score;

/// Design dimension a recommendation pertains to.
///
/// The six focus areas plus the general categories used by rule
/// classification (`Content`, `VisualElements`, `General`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Spacing,
    Typography,
    Color,
    Layout,
    Hierarchy,
    Interaction,
    Content,
    VisualElements,
    General,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Dimension::Spacing => "spacing",
            Dimension::Typography => "typography",
            Dimension::Color => "color",
            Dimension::Layout => "layout",
            Dimension::Hierarchy => "hierarchy",
            Dimension::Interaction => "interaction",
            Dimension::Content => "content",
            Dimension::VisualElements => "visual_elements",
            Dimension::General => "general",
        };
        write!(f, "{s}")
    }
}

/// What part of the artifact a rule speaks about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleScope {
    ArtifactProperty,
    Structural,
    Relational,
    Compositional,
}

/// Where a candidate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateSource {
    /// Produced by local static/differential analysis.
    Synthetic,
    /// Produced by the external model-enrichment collaborator.
    Model,
}

impl CandidateSource {
    /// Ordering priority when sources are mixed in one result set.
    /// Model-sourced candidates rank above synthetic ones.
    pub fn priority(self) -> u8 {
        match self {
            CandidateSource::Model => 1,
            CandidateSource::Synthetic => 0,
        }
    }
}

/// A proposed design improvement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    /// Deterministic identity derived from the analysis kind and snapshot.
    pub rule_id: String,
    pub description: String,
    pub dimension: Dimension,
    pub confidence: Score,
    pub match_score: Score,
    pub scope: RuleScope,
    pub source: CandidateSource,
}

/// A candidate annotated by the preference ranker. The original
/// `match_score`/`confidence` are never mutated — ranking only orders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedCandidate {
    #[serde(flatten)]
    pub candidate: Candidate,
    pub preference_score: Score,
    pub priority: u8,
}

impl RankedCandidate {
    /// Wrap a candidate without any preference adjustment (pass-through
    /// ranking when preference statistics are unavailable).
    pub fn passthrough(candidate: Candidate) -> Self {
        let base = if candidate.match_score.is_zero() {
            candidate.confidence
        } else {
            candidate.match_score
        };
        let priority = candidate.source.priority();
        Self {
            candidate,
            preference_score: base,
            priority,
        }
    }
}
