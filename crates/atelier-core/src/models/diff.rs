//! Structured diff between two snapshots of the same artifact.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::snapshot::Element;

/// One leaf-level property change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyChange {
    /// Leaf key, e.g. `padding`.
    pub property: String,
    /// Dotted path from the element root, e.g. `properties.spacing.padding`.
    pub path: String,
    pub old_value: Option<Value>,
    pub new_value: Option<Value>,
}

/// What happened to one element between two snapshots.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "change", rename_all = "snake_case")]
pub enum ChangeKind {
    Added { element: Element },
    Removed { element: Element },
    Modified { changes: Vec<PropertyChange> },
}

/// A tagged change for one element identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementChange {
    /// `stable_id` when the element has one, the raw `id` otherwise.
    pub element_key: String,
    #[serde(flatten)]
    pub kind: ChangeKind,
}

/// Counts derived from the element changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSummary {
    pub added: usize,
    pub removed: usize,
    pub modified: usize,
    pub total_property_changes: usize,
}

impl DiffSummary {
    /// Whether the diff recorded no change at all.
    pub fn is_empty(&self) -> bool {
        self.added == 0
            && self.removed == 0
            && self.modified == 0
            && self.total_property_changes == 0
    }

    /// Total structural change count (added + removed + modified).
    pub fn structural_changes(&self) -> usize {
        self.added + self.removed + self.modified
    }
}

/// The structured diff between two snapshots. A pure derived value,
/// recomputed on demand and never persisted by this engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diff {
    pub snapshot_id: String,
    pub previous_snapshot_id: String,
    pub artifact_id: String,
    pub element_changes: Vec<ElementChange>,
    /// Same shape as element property changes, rooted at `composition_rules`.
    pub composition_rule_changes: Vec<PropertyChange>,
    pub summary: DiffSummary,
}

impl Diff {
    /// Iterate over every property change in the diff, element-level and
    /// composition-rule-level alike.
    pub fn property_changes(&self) -> impl Iterator<Item = &PropertyChange> {
        self.element_changes
            .iter()
            .filter_map(|c| match &c.kind {
                ChangeKind::Modified { changes } => Some(changes.iter()),
                _ => None,
            })
            .flatten()
            .chain(self.composition_rule_changes.iter())
    }

    /// Elements added in this diff.
    pub fn added_elements(&self) -> impl Iterator<Item = &Element> {
        self.element_changes.iter().filter_map(|c| match &c.kind {
            ChangeKind::Added { element } => Some(element),
            _ => None,
        })
    }
}
