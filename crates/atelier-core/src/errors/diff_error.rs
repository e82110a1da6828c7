/// Snapshot diffing errors.
///
/// These are hard failures: a snapshot without identity cannot be diffed
/// and is rejected rather than silently coerced.
#[derive(Debug, thiserror::Error)]
pub enum DiffError {
    #[error("snapshot is missing a required identity field: {field}")]
    MissingIdentity { field: String },

    #[error("snapshots belong to different artifacts: {previous} vs {current}")]
    ArtifactMismatch { previous: String, current: String },
}
