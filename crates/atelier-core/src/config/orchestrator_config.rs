use serde::{Deserialize, Serialize};

use super::defaults;

/// Job orchestrator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OrchestratorConfig {
    /// Bounded capacity of the recommendation result cache.
    pub cache_capacity: u64,
    /// Caller-side budget for the whole enrichment call.
    pub enrichment_timeout_secs: u64,
    /// Per-attempt budget inside the enrichment transport.
    pub attempt_timeout_secs: u64,
    /// Budget for the preference-ranking stage; on expiry the unranked
    /// candidate order is served instead.
    pub ranking_timeout_ms: u64,
    /// Enrichment service endpoint. `None` disables the slow path entirely.
    pub enrichment_endpoint: Option<String>,
    /// Enrichment credential. `None` disables the slow path entirely.
    pub enrichment_api_key: Option<String>,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            cache_capacity: defaults::DEFAULT_CACHE_CAPACITY,
            enrichment_timeout_secs: defaults::DEFAULT_ENRICHMENT_TIMEOUT_SECS,
            attempt_timeout_secs: defaults::DEFAULT_ATTEMPT_TIMEOUT_SECS,
            ranking_timeout_ms: defaults::DEFAULT_RANKING_TIMEOUT_MS,
            enrichment_endpoint: None,
            enrichment_api_key: None,
        }
    }
}

impl OrchestratorConfig {
    /// Whether an enrichment collaborator is configured at all.
    pub fn enrichment_configured(&self) -> bool {
        self.enrichment_endpoint.is_some() && self.enrichment_api_key.is_some()
    }
}
