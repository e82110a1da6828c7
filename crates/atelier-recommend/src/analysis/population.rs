//! Element-population analysis: grouping pressure and spacing drift.

use std::collections::BTreeSet;

use atelier_core::constants::{GAP_ROUND_UNIT, GROUPING_ELEMENT_THRESHOLD, MAX_DISTINCT_GAPS};
use atelier_core::models::candidate::{Dimension, RuleScope};
use atelier_core::models::snapshot::Snapshot;

use super::{proposal, Category, Proposal};

/// Propose improvements from the raw element population.
pub fn analyze(snapshot: &Snapshot) -> Vec<Proposal> {
    let mut out = Vec::new();

    if snapshot.elements.len() > GROUPING_ELEMENT_THRESHOLD {
        out.push(proposal(
            snapshot,
            "population-grouping",
            format!(
                "Group related elements into sub-components: {} top-level elements is hard to maintain",
                snapshot.elements.len()
            ),
            Dimension::Layout,
            RuleScope::Structural,
            0.65,
            0.6,
            Some(Category::Organization),
        ));
    }

    if let Some(distinct_gaps) = distinct_rounded_gaps(snapshot) {
        if distinct_gaps > MAX_DISTINCT_GAPS {
            out.push(proposal(
                snapshot,
                "population-spacing",
                format!(
                    "Standardize vertical spacing: {distinct_gaps} different gap values found between elements"
                ),
                Dimension::Spacing,
                RuleScope::Relational,
                0.7,
                0.65,
                Some(Category::Consistency),
            ));
        }
    }

    out
}

/// Count distinct vertical gaps, rounded to the nearest 4-unit increment,
/// between elements sorted by y. `None` with fewer than two positioned
/// elements.
fn distinct_rounded_gaps(snapshot: &Snapshot) -> Option<usize> {
    let mut ys: Vec<f64> = snapshot.elements.iter().filter_map(|e| e.y).collect();
    if ys.len() < 2 {
        return None;
    }
    ys.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let rounded: BTreeSet<i64> = ys
        .windows(2)
        .map(|w| ((w[1] - w[0]) / GAP_ROUND_UNIT).round() as i64)
        .collect();
    Some(rounded.len())
}
