use serde::{Deserialize, Serialize};

use super::defaults;

/// Preference ranker configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// Dimension acceptance rate above which candidates get a boost.
    pub dimension_boost_threshold: f64,
    /// Dimension acceptance rate below which candidates are penalized.
    pub dimension_penalty_threshold: f64,
    /// Multiplier applied above the boost threshold.
    pub dimension_boost: f64,
    /// Multiplier applied below the penalty threshold.
    pub dimension_penalty: f64,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            dimension_boost_threshold: defaults::DEFAULT_DIMENSION_BOOST_THRESHOLD,
            dimension_penalty_threshold: defaults::DEFAULT_DIMENSION_PENALTY_THRESHOLD,
            dimension_boost: defaults::DEFAULT_DIMENSION_BOOST,
            dimension_penalty: defaults::DEFAULT_DIMENSION_PENALTY,
        }
    }
}
