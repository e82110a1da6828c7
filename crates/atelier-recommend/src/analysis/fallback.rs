//! Generic fallback proposal when no analysis had anything to say.

use atelier_core::models::candidate::{Dimension, RuleScope};
use atelier_core::models::snapshot::Snapshot;

use super::{proposal, Proposal};

/// One low-confidence review suggestion for non-empty snapshots.
pub fn analyze(snapshot: &Snapshot) -> Vec<Proposal> {
    if snapshot.elements.is_empty() {
        return Vec::new();
    }

    vec![proposal(
        snapshot,
        "fallback-review",
        "Review spacing, typography, and alignment for consistency across the artifact".to_string(),
        Dimension::General,
        RuleScope::Compositional,
        0.4,
        0.3,
        None,
    )]
}
