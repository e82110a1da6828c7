//! Coarse intent inferred from a diff: what the user was doing, and where.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What kind of change the user was making.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    Create,
    Modify,
    Refine,
    Explore,
}

/// Which design dimension the change touched.
///
/// Variant order is the tie-break order for keyword classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusArea {
    Spacing,
    Typography,
    Color,
    Layout,
    Hierarchy,
    Interaction,
}

impl fmt::Display for FocusArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FocusArea::Spacing => "spacing",
            FocusArea::Typography => "typography",
            FocusArea::Color => "color",
            FocusArea::Layout => "layout",
            FocusArea::Hierarchy => "hierarchy",
            FocusArea::Interaction => "interaction",
        };
        write!(f, "{s}")
    }
}

/// Intent derived strictly from a diff; never backfilled without one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Intent {
    pub action_type: ActionType,
    pub focus_area: FocusArea,
    /// Clamped to [0.3, 0.95] by the classifier.
    pub confidence: f64,
}
