//! Composition-rule analysis: rhythm, gutters, and emphasis levels.

use serde_json::Value;

use atelier_core::constants::{MAX_EMPHASIS_LEVELS, MIN_EMPHASIS_LEVELS};
use atelier_core::models::candidate::{Dimension, RuleScope};
use atelier_core::models::snapshot::Snapshot;

use super::{proposal, Category, Proposal};

fn rule_f64(rules: &Value, path: &[&str]) -> Option<f64> {
    let mut node = rules;
    for segment in path {
        node = node.as_object()?.get(*segment)?;
    }
    node.as_f64()
}

/// Propose improvements from the snapshot's aggregate composition rules.
pub fn analyze(snapshot: &Snapshot) -> Vec<Proposal> {
    let Some(rules) = snapshot.composition_rules.as_ref() else {
        return Vec::new();
    };
    let mut out = Vec::new();

    if let Some(base_unit) = rule_f64(rules, &["spacing", "vertical_rhythm", "base_unit"]) {
        if base_unit > 0.0 {
            out.push(proposal(
                snapshot,
                "composition-rhythm",
                format!("Standardize vertical spacing on the {base_unit}-unit rhythm already present in this artifact"),
                Dimension::Spacing,
                RuleScope::Compositional,
                0.75,
                0.7,
                Some(Category::Standardization),
            ));
        }
    }

    if let Some(gutter) = rule_f64(rules, &["spacing", "horizontal_rhythm", "gutter"]) {
        if gutter > 0.0 {
            out.push(proposal(
                snapshot,
                "composition-gutter",
                format!("Align columns to the {gutter}-unit gutter grid"),
                Dimension::Layout,
                RuleScope::Compositional,
                0.7,
                0.65,
                Some(Category::Alignment),
            ));
        }
    }

    if let Some(levels) = rule_f64(rules, &["visual_hierarchy", "emphasis_levels"]) {
        let levels = levels as u64;
        if levels < MIN_EMPHASIS_LEVELS {
            out.push(proposal(
                snapshot,
                "hierarchy-levels",
                format!(
                    "Add emphasis levels: {levels} distinct levels is too flat for clear visual hierarchy"
                ),
                Dimension::Hierarchy,
                RuleScope::Compositional,
                0.6,
                0.55,
                Some(Category::Enhancement),
            ));
        } else if levels > MAX_EMPHASIS_LEVELS {
            out.push(proposal(
                snapshot,
                "hierarchy-levels",
                format!("Consolidate emphasis levels: {levels} distinct levels dilutes visual hierarchy"),
                Dimension::Hierarchy,
                RuleScope::Compositional,
                0.6,
                0.55,
                Some(Category::Simplification),
            ));
        }
    }

    out
}
