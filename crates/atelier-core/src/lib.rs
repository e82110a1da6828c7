//! # atelier-core
//!
//! Foundation crate for the Atelier recommendation engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::AtelierConfig;
pub use errors::{AtelierError, AtelierResult};
pub use models::candidate::{Candidate, CandidateSource, Dimension, RankedCandidate, RuleScope};
pub use models::diff::{Diff, DiffSummary, ElementChange, PropertyChange};
pub use models::intent::{ActionType, FocusArea, Intent};
pub use models::score::Score;
pub use models::snapshot::{Element, Snapshot};
