//! Color analysis: fill palette sprawl.

use std::collections::BTreeSet;

use atelier_core::constants::MAX_DISTINCT_FILL_COLORS;
use atelier_core::models::candidate::{Dimension, RuleScope};
use atelier_core::models::snapshot::Snapshot;

use super::{proposal, Category, Proposal};

/// Propose palette reduction when too many distinct fill colors occur.
pub fn analyze(snapshot: &Snapshot) -> Vec<Proposal> {
    let fills: BTreeSet<String> = snapshot
        .elements
        .iter()
        .filter_map(|e| e.property_str("fill"))
        .map(|f| f.to_lowercase())
        .collect();

    if fills.len() <= MAX_DISTINCT_FILL_COLORS {
        return Vec::new();
    }

    vec![proposal(
        snapshot,
        "color-palette",
        format!(
            "Reduce the color palette: {} distinct fill colors in use, aim for 4-6 core colors",
            fills.len()
        ),
        Dimension::Color,
        RuleScope::ArtifactProperty,
        0.7,
        0.65,
        Some(Category::Harmony),
    )]
}
