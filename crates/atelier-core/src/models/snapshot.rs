//! Snapshot and element models — immutable captures of a design artifact.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One immutable, timestamped capture of an artifact's full structure.
///
/// Snapshots are produced by the external extraction collaborator and never
/// mutated here. `content_fingerprint` is the identity used for result
/// caching and deduplication.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub id: String,
    pub artifact_id: String,
    pub timestamp: DateTime<Utc>,
    /// Content-derived identity. Computed from the canonical JSON when the
    /// extractor did not supply one.
    pub content_fingerprint: String,
    /// Ordered element sequence as extracted from the design tool.
    pub elements: Vec<Element>,
    /// Aggregate design metrics (spacing rhythm, visual hierarchy levels,
    /// nesting depth, layout constraints). Open-shaped extractor output.
    pub composition_rules: Option<Value>,
}

impl Snapshot {
    /// Compute a blake3 fingerprint over the canonical JSON of a snapshot
    /// body. Used when the extractor did not supply one.
    pub fn compute_fingerprint(artifact_id: &str, elements: &[Element]) -> String {
        let mut hasher = blake3::Hasher::new();
        hasher.update(artifact_id.as_bytes());
        if let Ok(json) = serde_json::to_vec(elements) {
            hasher.update(&json);
        }
        hasher.finalize().to_hex().to_string()
    }
}

/// A single element in the artifact tree.
///
/// `id` is the ephemeral tool-assigned identifier; `stable_id` is the
/// content-addressable identity that survives across snapshots and tools.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Element {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stable_id: Option<String>,
    #[serde(rename = "type")]
    pub element_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Nested property map (string key → scalar or structured value).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Value>,
    /// Interaction states (hover, pressed, ...), same shape as properties.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub states: Option<Value>,
}

impl Element {
    /// Identity key for cross-snapshot matching: `stable_id` when present,
    /// the ephemeral `id` otherwise.
    pub fn identity(&self) -> &str {
        self.stable_id.as_deref().unwrap_or(&self.id)
    }

    /// Look up a value in `properties` by dotted path (e.g. `"font.size"`).
    pub fn property(&self, path: &str) -> Option<&Value> {
        let mut node = self.properties.as_ref()?;
        for segment in path.split('.') {
            node = node.as_object()?.get(segment)?;
        }
        Some(node)
    }

    /// Numeric property lookup by dotted path.
    pub fn property_f64(&self, path: &str) -> Option<f64> {
        self.property(path).and_then(Value::as_f64)
    }

    /// String property lookup by dotted path.
    pub fn property_str(&self, path: &str) -> Option<&str> {
        self.property(path).and_then(Value::as_str)
    }

    /// Whether any interaction state is declared on this element.
    pub fn has_state(&self, state: &str) -> bool {
        self.states
            .as_ref()
            .and_then(Value::as_object)
            .map(|m| m.contains_key(state))
            .unwrap_or(false)
    }
}
