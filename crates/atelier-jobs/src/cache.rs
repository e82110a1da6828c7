//! Bounded recommendation-result cache.

use std::sync::Arc;

use moka::sync::Cache;

use atelier_core::models::candidate::RankedCandidate;

/// Ranked-result cache keyed by the snapshot-pair fingerprint.
///
/// Capacity-bounded; eviction is left to moka's policy. Identical
/// snapshot pairs answer from here without re-running the pipeline.
pub struct ResultCache {
    inner: Cache<String, Arc<Vec<RankedCandidate>>>,
}

impl ResultCache {
    pub fn new(capacity: u64) -> Self {
        Self {
            inner: Cache::new(capacity),
        }
    }

    /// Cache key for a current/previous fingerprint pair.
    pub fn key(fingerprint: &str, previous_fingerprint: Option<&str>) -> String {
        format!("{fingerprint}:{}", previous_fingerprint.unwrap_or("none"))
    }

    pub fn get(&self, key: &str) -> Option<Arc<Vec<RankedCandidate>>> {
        self.inner.get(key)
    }

    pub fn insert(&self, key: String, results: Vec<RankedCandidate>) {
        self.inner.insert(key, Arc::new(results));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinct_previous_fingerprints_get_distinct_keys() {
        let a = ResultCache::key("fp1", Some("fp0"));
        let b = ResultCache::key("fp1", None);
        assert_ne!(a, b);
    }

    #[test]
    fn round_trips_a_result() {
        let cache = ResultCache::new(2);
        let key = ResultCache::key("fp1", None);
        cache.insert(key.clone(), vec![]);
        assert!(cache.get(&key).is_some());
        assert!(cache.get(&ResultCache::key("fp2", None)).is_none());
    }
}
