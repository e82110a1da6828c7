//! Intent classifier: diff → (action type, focus area, confidence).
//!
//! Action rules are evaluated in precedence order, first match wins.
//! Focus area comes from keyword hits over property-change paths, with an
//! added-element-type fallback. Confidence is a bounded additive formula
//! clamped to [0.3, 0.95].

pub mod keywords;

use tracing::debug;

use atelier_core::constants::{INTENT_CONFIDENCE_MAX, INTENT_CONFIDENCE_MIN};
use atelier_core::models::diff::Diff;
use atelier_core::models::intent::{ActionType, FocusArea, Intent};

use keywords::FOCUS_KEYWORDS;

/// Classify a diff into a coarse intent. `None` iff the diff is empty.
pub fn classify_intent(diff: &Diff) -> Option<Intent> {
    if diff.summary.is_empty() {
        return None;
    }

    let action_type = classify_action(diff);
    let (focus_area, clean_signal) = classify_focus(diff);
    let confidence = confidence(diff, clean_signal);

    debug!(
        ?action_type,
        %focus_area,
        confidence,
        "intent classified"
    );

    Some(Intent {
        action_type,
        focus_area,
        confidence,
    })
}

fn classify_action(diff: &Diff) -> ActionType {
    let s = &diff.summary;
    if s.added > s.modified && s.added > 2 {
        return ActionType::Create;
    }
    if s.total_property_changes > s.added + s.removed && s.total_property_changes > 3 {
        return ActionType::Refine;
    }
    if s.modified > 0 || s.added > 0 || s.removed > 0 {
        return ActionType::Modify;
    }
    ActionType::Explore
}

/// Returns the winning focus area and whether the signal was clean
/// (exactly one category had hits).
fn classify_focus(diff: &Diff) -> (FocusArea, bool) {
    let mut hits = [0usize; FOCUS_KEYWORDS.len()];

    for change in diff.property_changes() {
        let path = change.path.to_lowercase();
        let property = change.property.to_lowercase();
        for (i, (_, words)) in FOCUS_KEYWORDS.iter().enumerate() {
            if words
                .iter()
                .any(|w| keywords::matches(&path, w) || keywords::matches(&property, w))
            {
                hits[i] += 1;
            }
        }
    }

    let non_zero = hits.iter().filter(|&&h| h > 0).count();
    if non_zero > 0 {
        // Highest count wins, ties broken by table order.
        let mut best = 0;
        for (i, &h) in hits.iter().enumerate() {
            if h > hits[best] {
                best = i;
            }
        }
        return (FOCUS_KEYWORDS[best].0, non_zero == 1);
    }

    // No property-change signal: fall back to the types of added elements.
    // Text presence wins regardless of element order; frame/group-like
    // additions and the no-signal default both land on Layout.
    let text_added = diff
        .added_elements()
        .any(|e| e.element_type.to_lowercase().contains("text"));
    if text_added {
        return (FocusArea::Typography, false);
    }
    (FocusArea::Layout, false)
}

fn confidence(diff: &Diff, clean_signal: bool) -> f64 {
    let s = &diff.summary;
    let structural = s.structural_changes().min(4) as f64;
    let properties = s.total_property_changes.min(7) as f64;

    let mut value = 0.5 + 0.2 * structural / 4.0 + 0.2 * properties / 7.0;
    if clean_signal {
        value += 0.1;
    }
    value.clamp(INTENT_CONFIDENCE_MIN, INTENT_CONFIDENCE_MAX)
}
