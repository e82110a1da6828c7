//! Recursive structural comparison of JSON property trees.
//!
//! Two non-array objects recurse per key-union. Anything else (primitive,
//! array, or an object paired with a non-object) falls back to structural
//! equality and emits a single change when unequal. Arrays are equal when
//! lengths match and members are element-wise equal, which is exactly
//! `serde_json::Value` equality.

use serde_json::Value;

use atelier_core::models::diff::PropertyChange;

/// Compare two values rooted at `path` (leaf key `property`), appending
/// one [`PropertyChange`] per differing leaf into `out`.
pub fn compare_values(
    path: &str,
    property: &str,
    old: &Value,
    new: &Value,
    out: &mut Vec<PropertyChange>,
) {
    match (old, new) {
        (Value::Object(a), Value::Object(b)) => {
            for (key, old_child) in a {
                let child_path = format!("{path}.{key}");
                match b.get(key) {
                    Some(new_child) => {
                        compare_values(&child_path, key, old_child, new_child, out);
                    }
                    None => out.push(PropertyChange {
                        property: key.clone(),
                        path: child_path,
                        old_value: Some(old_child.clone()),
                        new_value: None,
                    }),
                }
            }
            for (key, new_child) in b {
                if !a.contains_key(key) {
                    out.push(PropertyChange {
                        property: key.clone(),
                        path: format!("{path}.{key}"),
                        old_value: None,
                        new_value: Some(new_child.clone()),
                    });
                }
            }
        }
        _ => {
            if old != new {
                out.push(PropertyChange {
                    property: property.to_string(),
                    path: path.to_string(),
                    old_value: Some(old.clone()),
                    new_value: Some(new.clone()),
                });
            }
        }
    }
}

/// Compare two optional sub-objects rooted at `root`, emitting an explicit
/// add/remove change when only one side is present.
pub fn compare_optional(
    root: &str,
    old: Option<&Value>,
    new: Option<&Value>,
    out: &mut Vec<PropertyChange>,
) {
    match (old, new) {
        (None, None) => {}
        (Some(o), Some(n)) => compare_values(root, root, o, n, out),
        (Some(o), None) => out.push(PropertyChange {
            property: root.to_string(),
            path: root.to_string(),
            old_value: Some(o.clone()),
            new_value: None,
        }),
        (None, Some(n)) => out.push(PropertyChange {
            property: root.to_string(),
            path: root.to_string(),
            old_value: None,
            new_value: Some(n.clone()),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn nested_objects_recurse_to_the_leaf() {
        let old = json!({"spacing": {"padding": 8, "margin": 4}});
        let new = json!({"spacing": {"padding": 12, "margin": 4}});
        let mut out = Vec::new();
        compare_values("properties", "properties", &old, &new, &mut out);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].path, "properties.spacing.padding");
        assert_eq!(out[0].property, "padding");
        assert_eq!(out[0].old_value, Some(json!(8)));
        assert_eq!(out[0].new_value, Some(json!(12)));
    }

    #[test]
    fn arrays_compare_as_a_whole() {
        let old = json!({"stops": [0.0, 0.5, 1.0]});
        let new = json!({"stops": [0.0, 0.6, 1.0]});
        let mut out = Vec::new();
        compare_values("properties", "properties", &old, &new, &mut out);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].path, "properties.stops");
    }

    #[test]
    fn equal_arrays_emit_nothing() {
        let old = json!([1, 2, 3]);
        let new = json!([1, 2, 3]);
        let mut out = Vec::new();
        compare_values("properties.stops", "stops", &old, &new, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn object_vs_primitive_is_one_change() {
        let old = json!({"fill": {"r": 0, "g": 0, "b": 0}});
        let new = json!({"fill": "#000000"});
        let mut out = Vec::new();
        compare_values("properties", "properties", &old, &new, &mut out);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].path, "properties.fill");
    }

    #[test]
    fn key_removed_and_added() {
        let old = json!({"a": 1});
        let new = json!({"b": 2});
        let mut out = Vec::new();
        compare_values("properties", "properties", &old, &new, &mut out);
        assert_eq!(out.len(), 2);
        assert!(out.iter().any(|c| c.path == "properties.a" && c.new_value.is_none()));
        assert!(out.iter().any(|c| c.path == "properties.b" && c.old_value.is_none()));
    }

    #[test]
    fn one_sided_root_is_explicit_add_or_remove() {
        let rules = json!({"spacing": {"base_unit": 8}});
        let mut out = Vec::new();
        compare_optional("composition_rules", None, Some(&rules), &mut out);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].path, "composition_rules");
        assert!(out[0].old_value.is_none());
    }
}
