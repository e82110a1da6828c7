//! Wire protocol for the model-enrichment collaborator.
//!
//! Versioned JSON envelopes; the service is free to add fields, unknown
//! ones are ignored on deserialization.

use serde::{Deserialize, Serialize};

use atelier_core::models::candidate::{Dimension, RuleScope};
use atelier_core::models::intent::Intent;
use atelier_core::models::snapshot::Snapshot;
use atelier_core::models::stats::UserResponse;

pub const PROTOCOL_VERSION: u32 = 1;

/// Everything the matching service needs to propose rule candidates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatcherInput {
    /// Free-text intent as supplied by the caller.
    pub user_intent: Option<String>,
    /// Intent inferred from the latest diff, when a prior snapshot exists.
    pub inferred_intent: Option<Intent>,
    pub current: Snapshot,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<Snapshot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    pub matching: MatchingConfig,
    /// Few-shot examples of previously judged recommendations.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<FeedbackExample>,
}

/// Matching knobs forwarded to the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingConfig {
    pub max_candidates: usize,
}

/// One historical recommendation and how the user responded to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackExample {
    pub description: String,
    pub response: UserResponse,
}

/// Request envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichmentRequest {
    pub version: u32,
    pub input: MatcherInput,
}

impl EnrichmentRequest {
    pub fn new(input: MatcherInput) -> Self {
        Self {
            version: PROTOCOL_VERSION,
            input,
        }
    }
}

/// Response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichmentResponse {
    pub version: u32,
    #[serde(default)]
    pub candidates: Vec<WireCandidate>,
}

/// A candidate as the service sends it. Identity and dimension are
/// optional; the client fills them in deterministically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireCandidate {
    #[serde(default)]
    pub rule_id: Option<String>,
    pub description: String,
    #[serde(default)]
    pub dimension: Option<Dimension>,
    pub confidence: f64,
    #[serde(default)]
    pub match_score: Option<f64>,
    #[serde(default)]
    pub scope: Option<RuleScope>,
}
