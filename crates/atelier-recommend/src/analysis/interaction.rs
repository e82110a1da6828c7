//! Interaction analysis: touch-target sizing on interactive elements.

use atelier_core::constants::MIN_TOUCH_TARGET;
use atelier_core::models::candidate::{Dimension, RuleScope};
use atelier_core::models::snapshot::{Element, Snapshot};

use super::{proposal, Category, Proposal};

fn is_interactive(element: &Element) -> bool {
    let ty = element.element_type.to_lowercase();
    ty.contains("button")
        || ty.contains("component")
        || element.has_state("hover")
        || element.has_state("pressed")
}

/// Propose enlarging undersized touch targets.
pub fn analyze(snapshot: &Snapshot) -> Vec<Proposal> {
    let undersized = snapshot
        .elements
        .iter()
        .filter(|e| is_interactive(e))
        .filter(|e| match (e.width, e.height) {
            (Some(w), Some(h)) => w.min(h) < MIN_TOUCH_TARGET,
            _ => false,
        })
        .count();

    if undersized == 0 {
        return Vec::new();
    }

    vec![proposal(
        snapshot,
        "interaction-target",
        format!(
            "Enlarge {undersized} interactive element(s) to at least a 44-unit touch target"
        ),
        Dimension::Interaction,
        RuleScope::ArtifactProperty,
        0.8,
        0.75,
        Some(Category::Accessibility),
    )]
}
