use serde::{Deserialize, Serialize};

use super::defaults;

/// Recommendation generator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendConfig {
    /// Maximum number of candidates returned by one generation pass.
    pub max_candidates: usize,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            max_candidates: defaults::DEFAULT_MAX_CANDIDATES,
        }
    }
}
