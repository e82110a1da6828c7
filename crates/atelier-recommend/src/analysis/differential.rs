//! Differential analysis: complexity growth against the prior snapshot.

use atelier_core::constants::COMPLEXITY_GROWTH_FACTOR;
use atelier_core::models::candidate::{Dimension, RuleScope};
use atelier_core::models::snapshot::Snapshot;

use super::{proposal, Category, Proposal};

/// Propose componentization when the element population grew sharply.
///
/// An empty prior snapshot never triggers: populating an empty artifact
/// is initial creation, not growth.
pub fn analyze(snapshot: &Snapshot, previous: &Snapshot) -> Vec<Proposal> {
    let before = previous.elements.len();
    let after = snapshot.elements.len();
    if before == 0 || (after as f64) <= (before as f64) * COMPLEXITY_GROWTH_FACTOR {
        return Vec::new();
    }

    vec![proposal(
        snapshot,
        "differential-growth",
        format!(
            "Extract reusable components: the artifact grew from {before} to {after} elements in one revision"
        ),
        Dimension::Layout,
        RuleScope::Structural,
        0.65,
        0.6,
        Some(Category::Complexity),
    )]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tests_support::{element, snapshot};

    fn sized(n: usize) -> Snapshot {
        snapshot((0..n).map(|i| element(&format!("e{i}"), "frame")).collect())
    }

    #[test]
    fn sharp_growth_proposes_componentization() {
        let proposals = analyze(&sized(7), &sized(4));
        assert_eq!(proposals.len(), 1);
        assert!(proposals[0].candidate.description.contains("4 to 7"));
    }

    #[test]
    fn moderate_growth_is_fine() {
        assert!(analyze(&sized(6), &sized(4)).is_empty());
    }

    #[test]
    fn empty_previous_snapshot_never_triggers() {
        assert!(analyze(&sized(10), &sized(0)).is_empty());
    }
}
