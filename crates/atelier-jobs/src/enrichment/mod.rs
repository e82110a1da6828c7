//! Model-enrichment collaborator seam.
//!
//! The orchestrator talks to the matching service through the dyn
//! [`EnrichmentClient`] trait. Every failure mode maps to a recoverable
//! [`EnrichmentError`]; the orchestrator always falls back to synthetic-only
//! results, so nothing here can fail a request.

pub mod protocol;

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use atelier_core::config::OrchestratorConfig;
use atelier_core::errors::EnrichmentError;
use atelier_core::models::candidate::{Candidate, CandidateSource, RuleScope};
use atelier_core::models::score::Score;
use atelier_recommend::KeywordClassifier;

use protocol::{EnrichmentRequest, EnrichmentResponse, MatcherInput, WireCandidate};

/// Asynchronous source of model-proposed candidates.
#[async_trait]
pub trait EnrichmentClient: Send + Sync {
    async fn enrich(&self, input: &MatcherInput) -> Result<Vec<Candidate>, EnrichmentError>;
}

/// Client used when no enrichment credential is configured. Proposes
/// nothing, never fails.
pub struct NoopEnrichmentClient;

#[async_trait]
impl EnrichmentClient for NoopEnrichmentClient {
    async fn enrich(&self, _input: &MatcherInput) -> Result<Vec<Candidate>, EnrichmentError> {
        Ok(Vec::new())
    }
}

/// HTTP transport to the matching service.
pub struct HttpEnrichmentClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    classifier: KeywordClassifier,
}

impl HttpEnrichmentClient {
    pub fn new(
        endpoint: String,
        api_key: String,
        attempt_timeout: Duration,
    ) -> Result<Self, EnrichmentError> {
        let http = reqwest::Client::builder()
            .timeout(attempt_timeout)
            .build()
            .map_err(|e| EnrichmentError::Transport {
                reason: e.to_string(),
            })?;
        Ok(Self {
            http,
            endpoint,
            api_key,
            classifier: KeywordClassifier::new(),
        })
    }

    /// Build a client from the orchestrator configuration. Requires both
    /// the endpoint and the credential to be present.
    pub fn from_config(config: &OrchestratorConfig) -> Result<Self, EnrichmentError> {
        match (&config.enrichment_endpoint, &config.enrichment_api_key) {
            (Some(endpoint), Some(api_key)) => Self::new(
                endpoint.clone(),
                api_key.clone(),
                Duration::from_secs(config.attempt_timeout_secs),
            ),
            _ => Err(EnrichmentError::NotConfigured),
        }
    }

    fn convert(&self, wire: WireCandidate) -> Candidate {
        let rule_id = wire
            .rule_id
            .unwrap_or_else(|| model_rule_id(&wire.description));
        let scope = wire.scope.unwrap_or(RuleScope::Compositional);
        let dimension = match wire.dimension {
            Some(dimension) => dimension,
            None => {
                self.classifier
                    .classify(&wire.description, Some(scope), None)
                    .dimension
            }
        };
        Candidate {
            rule_id,
            description: wire.description,
            dimension,
            confidence: Score::new(wire.confidence),
            match_score: Score::new(wire.match_score.unwrap_or(0.0)),
            scope,
            source: CandidateSource::Model,
        }
    }
}

/// Deterministic identity for a model candidate that arrived without one.
fn model_rule_id(description: &str) -> String {
    let hash = blake3::hash(description.as_bytes()).to_hex();
    format!("model-{}", &hash.as_str()[..12])
}

#[async_trait]
impl EnrichmentClient for HttpEnrichmentClient {
    async fn enrich(&self, input: &MatcherInput) -> Result<Vec<Candidate>, EnrichmentError> {
        let request = EnrichmentRequest::new(input.clone());
        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| EnrichmentError::Transport {
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(EnrichmentError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let payload: EnrichmentResponse =
            response
                .json()
                .await
                .map_err(|e| EnrichmentError::MalformedPayload {
                    reason: e.to_string(),
                })?;

        debug!(
            candidates = payload.candidates.len(),
            version = payload.version,
            "enrichment response received"
        );
        Ok(payload
            .candidates
            .into_iter()
            .map(|wire| self.convert(wire))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_core::models::candidate::Dimension;

    fn client() -> HttpEnrichmentClient {
        HttpEnrichmentClient::new(
            "http://localhost:9/enrich".into(),
            "key".into(),
            Duration::from_secs(1),
        )
        .unwrap()
    }

    fn wire(description: &str) -> WireCandidate {
        WireCandidate {
            rule_id: None,
            description: description.into(),
            dimension: None,
            confidence: 0.8,
            match_score: None,
            scope: None,
        }
    }

    #[test]
    fn missing_rule_id_is_derived_from_the_description() {
        let candidate = client().convert(wire("tighten vertical spacing"));
        assert!(candidate.rule_id.starts_with("model-"));
        assert_eq!(candidate.rule_id.len(), "model-".len() + 12);
        assert_eq!(candidate.source, CandidateSource::Model);
    }

    #[test]
    fn identical_descriptions_get_identical_rule_ids() {
        let a = client().convert(wire("raise color contrast"));
        let b = client().convert(wire("raise color contrast"));
        assert_eq!(a.rule_id, b.rule_id);
    }

    #[test]
    fn missing_dimension_is_classified_from_text() {
        let candidate = client().convert(wire("tighten margin and padding rhythm"));
        assert_eq!(candidate.dimension, Dimension::Spacing);
    }

    #[test]
    fn explicit_dimension_is_kept() {
        let mut w = wire("something vague");
        w.dimension = Some(Dimension::Typography);
        let candidate = client().convert(w);
        assert_eq!(candidate.dimension, Dimension::Typography);
    }

    #[test]
    fn from_config_requires_endpoint_and_key() {
        let config = OrchestratorConfig::default();
        assert!(matches!(
            HttpEnrichmentClient::from_config(&config),
            Err(EnrichmentError::NotConfigured)
        ));
    }
}
