/// Job orchestration errors.
#[derive(Debug, thiserror::Error)]
pub enum JobError {
    #[error("recommendation pipeline failed: {reason}")]
    PipelineFailed { reason: String },
}
