//! Engine configuration, loadable from TOML.
//!
//! Every section has serde defaults so a partial (or absent) config file
//! yields a fully usable configuration.

mod defaults;
mod orchestrator_config;
mod ranking_config;
mod recommend_config;

use serde::{Deserialize, Serialize};

pub use orchestrator_config::OrchestratorConfig;
pub use ranking_config::RankingConfig;
pub use recommend_config::RecommendConfig;

use crate::errors::{AtelierError, AtelierResult};

/// Top-level configuration for the Atelier engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AtelierConfig {
    pub recommend: RecommendConfig,
    pub ranking: RankingConfig,
    pub orchestrator: OrchestratorConfig,
}

impl AtelierConfig {
    /// Parse a configuration from a TOML string.
    pub fn from_toml_str(input: &str) -> AtelierResult<Self> {
        toml::from_str(input).map_err(|e| AtelierError::Config {
            reason: e.to_string(),
        })
    }

    /// Load a configuration from a TOML file. A missing file yields defaults.
    pub fn load(path: &std::path::Path) -> AtelierResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path).map_err(|e| AtelierError::Config {
            reason: format!("failed to read {}: {e}", path.display()),
        })?;
        Self::from_toml_str(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config = AtelierConfig::from_toml_str("").unwrap();
        assert_eq!(config.orchestrator.cache_capacity, 50);
        assert_eq!(config.recommend.max_candidates, 5);
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config = AtelierConfig::from_toml_str(
            r#"
            [orchestrator]
            cache_capacity = 10
            "#,
        )
        .unwrap();
        assert_eq!(config.orchestrator.cache_capacity, 10);
        assert_eq!(config.orchestrator.enrichment_timeout_secs, 30);
    }

    #[test]
    fn loads_from_a_file_and_defaults_when_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("atelier.toml");
        std::fs::write(&path, "[recommend]\nmax_candidates = 3\n").unwrap();

        let config = AtelierConfig::load(&path).unwrap();
        assert_eq!(config.recommend.max_candidates, 3);

        let missing = AtelierConfig::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(missing.recommend.max_candidates, 5);
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let err = AtelierConfig::from_toml_str("not = [valid").unwrap_err();
        assert!(matches!(err, AtelierError::Config { .. }));
    }
}
