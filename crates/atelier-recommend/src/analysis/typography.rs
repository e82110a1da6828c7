//! Typography analysis: font-size sprawl and line-height readability.

use std::collections::BTreeSet;

use atelier_core::constants::{MAX_DISTINCT_FONT_SIZES, MIN_LINE_HEIGHT};
use atelier_core::models::candidate::{Dimension, RuleScope};
use atelier_core::models::snapshot::{Element, Snapshot};

use super::{proposal, Category, Proposal};

fn is_text(element: &Element) -> bool {
    element.element_type.to_lowercase().contains("text")
}

/// Propose improvements across text-bearing elements.
pub fn analyze(snapshot: &Snapshot) -> Vec<Proposal> {
    let mut out = Vec::new();

    // Distinct sizes compared at 0.1-unit resolution.
    let sizes: BTreeSet<i64> = snapshot
        .elements
        .iter()
        .filter(|e| is_text(e))
        .filter_map(|e| e.property_f64("font_size"))
        .map(|s| (s * 10.0).round() as i64)
        .collect();
    if sizes.len() > MAX_DISTINCT_FONT_SIZES {
        out.push(proposal(
            snapshot,
            "typography-sizes",
            format!(
                "Reduce font-size variation: {} distinct sizes in use, a 3-5 step type scale reads better",
                sizes.len()
            ),
            Dimension::Typography,
            RuleScope::ArtifactProperty,
            0.7,
            0.65,
            Some(Category::Consistency),
        ));
    }

    let line_heights: Vec<f64> = snapshot
        .elements
        .iter()
        .filter(|e| is_text(e))
        .filter_map(|e| e.property_f64("line_height"))
        .collect();
    if !line_heights.is_empty() {
        let mean = line_heights.iter().sum::<f64>() / line_heights.len() as f64;
        if mean < MIN_LINE_HEIGHT {
            out.push(proposal(
                snapshot,
                "typography-lineheight",
                format!("Raise line-height to at least 1.4 (current mean {mean:.2}) for readability"),
                Dimension::Typography,
                RuleScope::ArtifactProperty,
                0.75,
                0.7,
                Some(Category::Readability),
            ));
        }
    }

    out
}
