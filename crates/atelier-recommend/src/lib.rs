//! # atelier-recommend
//!
//! Candidate recommendation generation and preference-weighted ranking.
//!
//! Generation is purely heuristic: a set of independent static analyses
//! over one snapshot (plus an optional differential analysis against the
//! prior snapshot), each contributing zero or more candidates, fused and
//! truncated to a small result set. No network calls, deterministic given
//! identical inputs.

pub mod analysis;
pub mod dimension;
pub mod engine;
pub mod ranking;

pub use dimension::KeywordClassifier;
pub use engine::RecommendationEngine;
pub use ranking::{store::InMemoryPreferenceStore, PreferenceRanker};
