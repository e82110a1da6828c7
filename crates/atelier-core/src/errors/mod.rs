//! Error types, one enum per subsystem, aggregated into [`AtelierError`].

mod diff_error;
mod enrichment_error;
mod job_error;
mod recommend_error;

pub use diff_error::DiffError;
pub use enrichment_error::EnrichmentError;
pub use job_error::JobError;
pub use recommend_error::RecommendError;

/// Top-level error for the Atelier engine.
#[derive(Debug, thiserror::Error)]
pub enum AtelierError {
    #[error(transparent)]
    Diff(#[from] DiffError),

    #[error(transparent)]
    Recommend(#[from] RecommendError),

    #[error(transparent)]
    Job(#[from] JobError),

    #[error(transparent)]
    Enrichment(#[from] EnrichmentError),

    #[error("preference store error: {reason}")]
    PreferenceStore { reason: String },

    #[error("config error: {reason}")]
    Config { reason: String },
}

/// Convenience alias used across the workspace.
pub type AtelierResult<T> = Result<T, AtelierError>;
