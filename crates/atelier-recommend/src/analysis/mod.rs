//! One module per static analysis, each returning zero or more proposals.

pub mod color;
pub mod composition;
pub mod differential;
pub mod fallback;
pub mod interaction;
pub mod population;
pub mod typography;

use atelier_core::models::candidate::{Candidate, CandidateSource, Dimension, RuleScope};
use atelier_core::models::score::Score;
use atelier_core::models::snapshot::Snapshot;

/// Improvement category of a proposal, used for the fixed match-score
/// boost table applied before final ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Accessibility,
    Readability,
    Consistency,
    Standardization,
    Harmony,
    Alignment,
    Simplification,
    Enhancement,
    Organization,
    Complexity,
}

impl Category {
    /// Additive match-score boost for this category.
    pub fn boost(self) -> f64 {
        match self {
            Category::Accessibility | Category::Readability => 0.10,
            Category::Consistency
            | Category::Standardization
            | Category::Harmony
            | Category::Alignment => 0.05,
            Category::Simplification | Category::Enhancement => 0.03,
            Category::Organization | Category::Complexity => 0.02,
        }
    }
}

/// A candidate plus the category its analysis belongs to.
#[derive(Debug, Clone)]
pub struct Proposal {
    pub candidate: Candidate,
    pub category: Option<Category>,
}

/// Deterministic rule identity: analysis kind + snapshot id hash.
/// Repeated generation against the same snapshot is idempotent.
pub fn rule_id(kind: &str, snapshot: &Snapshot) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(kind.as_bytes());
    hasher.update(snapshot.id.as_bytes());
    let hash = hasher.finalize().to_hex();
    format!("{kind}-{}", &hash.as_str()[..12])
}


/// Build one synthetic candidate for an analysis.
#[allow(clippy::too_many_arguments)]
pub fn proposal(
    snapshot: &Snapshot,
    kind: &str,
    description: String,
    dimension: Dimension,
    scope: RuleScope,
    confidence: f64,
    match_score: f64,
    category: Option<Category>,
) -> Proposal {
    Proposal {
        candidate: Candidate {
            rule_id: rule_id(kind, snapshot),
            description,
            dimension,
            confidence: Score::new(confidence),
            match_score: Score::new(match_score),
            scope,
            source: CandidateSource::Synthetic,
        },
        category,
    }
}
