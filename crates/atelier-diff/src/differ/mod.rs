//! Snapshot differ: identity-keyed three-pass structural diff.
//!
//! Elements are matched across snapshots by `stable_id`, falling back to
//! the ephemeral tool id. Output ordering is deterministic: additions and
//! modifications follow the current snapshot's element order, removals
//! follow the previous snapshot's order. Pure function, no I/O.

pub mod compare;

use std::collections::HashMap;

use serde_json::{json, Value};
use tracing::debug;

use atelier_core::errors::DiffError;
use atelier_core::models::diff::{ChangeKind, Diff, DiffSummary, ElementChange, PropertyChange};
use atelier_core::models::snapshot::{Element, Snapshot};

/// Compute the structured diff between two snapshots of the same artifact.
///
/// Rejects snapshots with missing identity and mismatched artifacts; every
/// other input diffs cleanly (possibly to an empty change set).
pub fn diff(previous: &Snapshot, current: &Snapshot) -> Result<Diff, DiffError> {
    validate(previous)?;
    validate(current)?;
    if previous.artifact_id != current.artifact_id {
        return Err(DiffError::ArtifactMismatch {
            previous: previous.artifact_id.clone(),
            current: current.artifact_id.clone(),
        });
    }

    let prev_by_key: HashMap<&str, &Element> =
        previous.elements.iter().map(|e| (e.identity(), e)).collect();
    let cur_by_key: HashMap<&str, &Element> =
        current.elements.iter().map(|e| (e.identity(), e)).collect();

    let mut element_changes = Vec::new();
    let mut total_property_changes = 0usize;
    let mut summary = DiffSummary::default();

    // Pass 1 + 3: additions and modifications, in current-snapshot order.
    for element in &current.elements {
        let key = element.identity();
        match prev_by_key.get(key) {
            None => {
                summary.added += 1;
                element_changes.push(ElementChange {
                    element_key: key.to_string(),
                    kind: ChangeKind::Added {
                        element: element.clone(),
                    },
                });
            }
            Some(prev_element) => {
                let changes = compare_elements(prev_element, element);
                if !changes.is_empty() {
                    summary.modified += 1;
                    total_property_changes += changes.len();
                    element_changes.push(ElementChange {
                        element_key: key.to_string(),
                        kind: ChangeKind::Modified { changes },
                    });
                }
            }
        }
    }

    // Pass 2: removals, in previous-snapshot order.
    for element in &previous.elements {
        let key = element.identity();
        if !cur_by_key.contains_key(key) {
            summary.removed += 1;
            element_changes.push(ElementChange {
                element_key: key.to_string(),
                kind: ChangeKind::Removed {
                    element: element.clone(),
                },
            });
        }
    }

    let mut composition_rule_changes = Vec::new();
    compare::compare_optional(
        "composition_rules",
        previous.composition_rules.as_ref(),
        current.composition_rules.as_ref(),
        &mut composition_rule_changes,
    );
    total_property_changes += composition_rule_changes.len();
    summary.total_property_changes = total_property_changes;

    debug!(
        added = summary.added,
        removed = summary.removed,
        modified = summary.modified,
        property_changes = summary.total_property_changes,
        "snapshot diff computed"
    );

    Ok(Diff {
        snapshot_id: current.id.clone(),
        previous_snapshot_id: previous.id.clone(),
        artifact_id: current.artifact_id.clone(),
        element_changes,
        composition_rule_changes,
        summary,
    })
}

fn validate(snapshot: &Snapshot) -> Result<(), DiffError> {
    if snapshot.id.is_empty() {
        return Err(DiffError::MissingIdentity { field: "id".into() });
    }
    if snapshot.artifact_id.is_empty() {
        return Err(DiffError::MissingIdentity {
            field: "artifact_id".into(),
        });
    }
    Ok(())
}

/// The fixed set of top-level scalar fields compared on matched elements.
const SCALAR_FIELDS: [&str; 8] = [
    "type", "name", "visible", "opacity", "x", "y", "width", "height",
];

fn scalar_value(element: &Element, field: &str) -> Value {
    match field {
        "type" => json!(element.element_type),
        "name" => json!(element.name),
        "visible" => json!(element.visible),
        "opacity" => json!(element.opacity),
        "x" => json!(element.x),
        "y" => json!(element.y),
        "width" => json!(element.width),
        "height" => json!(element.height),
        _ => Value::Null,
    }
}

fn compare_elements(previous: &Element, current: &Element) -> Vec<PropertyChange> {
    let mut changes = Vec::new();

    for field in SCALAR_FIELDS {
        let old = scalar_value(previous, field);
        let new = scalar_value(current, field);
        if old != new {
            changes.push(PropertyChange {
                property: field.to_string(),
                path: field.to_string(),
                old_value: Some(old),
                new_value: Some(new),
            });
        }
    }

    compare::compare_optional(
        "properties",
        previous.properties.as_ref(),
        current.properties.as_ref(),
        &mut changes,
    );
    compare::compare_optional(
        "states",
        previous.states.as_ref(),
        current.states.as_ref(),
        &mut changes,
    );

    changes
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    fn element(id: &str, stable: Option<&str>) -> Element {
        Element {
            id: id.to_string(),
            stable_id: stable.map(str::to_string),
            element_type: "frame".into(),
            name: None,
            visible: None,
            opacity: None,
            x: None,
            y: None,
            width: None,
            height: None,
            properties: None,
            states: None,
        }
    }

    fn snapshot(id: &str, elements: Vec<Element>) -> Snapshot {
        Snapshot {
            id: id.to_string(),
            artifact_id: "artifact-1".into(),
            timestamp: Utc::now(),
            content_fingerprint: id.to_string(),
            elements,
            composition_rules: None,
        }
    }

    #[test]
    fn identical_snapshots_diff_empty() {
        let a = snapshot("a", vec![element("e1", Some("s1")), element("e2", None)]);
        let d = diff(&a, &a).unwrap();
        assert!(d.element_changes.is_empty());
        assert!(d.summary.is_empty());
    }

    #[test]
    fn added_and_modified_are_counted() {
        let shared = element("e1", Some("s1"));
        let mut modified = shared.clone();
        modified.properties = Some(json!({"fill": "#fff"}));
        let a = snapshot("a", vec![shared]);
        let b = snapshot("b", vec![modified, element("e2", Some("s2"))]);

        let d = diff(&a, &b).unwrap();
        assert_eq!(d.summary.added, 1);
        assert_eq!(d.summary.removed, 0);
        assert_eq!(d.summary.modified, 1);
        assert_eq!(d.summary.total_property_changes, 1);
    }

    #[test]
    fn removed_elements_carry_their_payload() {
        let a = snapshot("a", vec![element("e1", Some("s1")), element("e2", Some("s2"))]);
        let b = snapshot("b", vec![element("e1", Some("s1"))]);
        let d = diff(&a, &b).unwrap();
        assert_eq!(d.summary.removed, 1);
        match &d.element_changes[0].kind {
            ChangeKind::Removed { element } => assert_eq!(element.identity(), "s2"),
            other => panic!("expected removal, got {other:?}"),
        }
    }

    #[test]
    fn matching_falls_back_to_raw_id() {
        // Same raw id, no stable ids: the element matches itself.
        let a = snapshot("a", vec![element("e1", None)]);
        let b = snapshot("b", vec![element("e1", None)]);
        assert!(diff(&a, &b).unwrap().summary.is_empty());
    }

    #[test]
    fn scalar_field_change_uses_field_path() {
        let mut before = element("e1", Some("s1"));
        before.x = Some(10.0);
        let mut after = before.clone();
        after.x = Some(24.0);
        let d = diff(&snapshot("a", vec![before]), &snapshot("b", vec![after])).unwrap();
        match &d.element_changes[0].kind {
            ChangeKind::Modified { changes } => {
                assert_eq!(changes.len(), 1);
                assert_eq!(changes[0].path, "x");
            }
            other => panic!("expected modification, got {other:?}"),
        }
    }

    #[test]
    fn composition_rules_appearing_is_one_change() {
        let a = snapshot("a", vec![]);
        let mut b = snapshot("b", vec![]);
        b.composition_rules = Some(json!({"spacing": {"base_unit": 8}}));
        let d = diff(&a, &b).unwrap();
        assert_eq!(d.composition_rule_changes.len(), 1);
        assert_eq!(d.summary.total_property_changes, 1);
        assert!(d.element_changes.is_empty());
    }

    #[test]
    fn mismatched_artifacts_are_rejected() {
        let a = snapshot("a", vec![]);
        let mut b = snapshot("b", vec![]);
        b.artifact_id = "artifact-2".into();
        assert!(matches!(
            diff(&a, &b),
            Err(DiffError::ArtifactMismatch { .. })
        ));
    }

    #[test]
    fn empty_snapshot_id_is_rejected() {
        let a = snapshot("", vec![]);
        let b = snapshot("b", vec![]);
        assert!(matches!(
            diff(&a, &b),
            Err(DiffError::MissingIdentity { .. })
        ));
    }
}
