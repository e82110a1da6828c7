//! # atelier-jobs
//!
//! Asynchronous job orchestration for recommendation requests: bounded
//! result cache, concurrent job table, request-sequence staleness tokens,
//! and the model-enrichment transport. The [`Orchestrator`] is the single
//! entry point for embedding callers.

pub mod cache;
pub mod enrichment;
pub mod jobs;
pub mod orchestrator;
pub mod sequence;

pub use enrichment::protocol::{MatcherInput, MatchingConfig};
pub use enrichment::{EnrichmentClient, HttpEnrichmentClient, NoopEnrichmentClient};
pub use orchestrator::Orchestrator;
pub use sequence::SequenceGuard;
