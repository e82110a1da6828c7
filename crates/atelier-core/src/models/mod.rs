pub mod candidate;
pub mod context;
pub mod diff;
pub mod intent;
pub mod job;
pub mod score;
pub mod snapshot;
pub mod stats;

pub use candidate::{Candidate, CandidateSource, Dimension, RankedCandidate, RuleScope};
pub use context::RequestContext;
pub use diff::{ChangeKind, Diff, DiffSummary, ElementChange, PropertyChange};
pub use intent::{ActionType, FocusArea, Intent};
pub use job::{Job, JobStatus, RecommendationResponse};
pub use score::Score;
pub use snapshot::{Element, Snapshot};
pub use stats::{AcceptanceStats, UserResponse};
