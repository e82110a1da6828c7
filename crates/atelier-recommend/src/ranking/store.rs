//! In-memory preference store backed by concurrent maps.

use dashmap::DashMap;

use atelier_core::errors::AtelierResult;
use atelier_core::models::candidate::Dimension;
use atelier_core::models::stats::{AcceptanceStats, UserResponse};
use atelier_core::traits::PreferenceStore;

/// Concurrent acceptance-statistics store for embedding and tests.
#[derive(Default)]
pub struct InMemoryPreferenceStore {
    rules: DashMap<String, AcceptanceStats>,
    dimensions: DashMap<Dimension, AcceptanceStats>,
}

impl InMemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a user response against a rule and its dimension.
    pub fn record(&self, rule_id: &str, dimension: Dimension, response: UserResponse) {
        self.rules
            .entry(rule_id.to_string())
            .or_default()
            .record(response);
        self.dimensions.entry(dimension).or_default().record(response);
    }
}

impl PreferenceStore for InMemoryPreferenceStore {
    fn rule_stats(&self, rule_id: &str) -> AtelierResult<Option<AcceptanceStats>> {
        Ok(self.rules.get(rule_id).map(|s| *s))
    }

    fn dimension_stats(&self, dimension: Dimension) -> AtelierResult<Option<AcceptanceStats>> {
        Ok(self.dimensions.get(&dimension).map(|s| *s))
    }
}
