/// Recommendation generation errors.
#[derive(Debug, thiserror::Error)]
pub enum RecommendError {
    #[error("snapshot is not usable for generation: {reason}")]
    InvalidSnapshot { reason: String },
}
