//! Asynchronous job lifecycle models.

use serde::{Deserialize, Serialize};

use super::candidate::RankedCandidate;

/// Job lifecycle state. Terminal once completed or failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Processing,
    Completed,
    Failed,
}

impl JobStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, JobStatus::Completed | JobStatus::Failed)
    }
}

/// A background recommendation job. Created by the orchestrator,
/// garbage-collected after its terminal result has been read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub job_id: String,
    pub status: JobStatus,
    pub result: Option<Vec<RankedCandidate>>,
    pub error: Option<String>,
}

impl Job {
    /// Create a job in the processing state.
    pub fn processing(job_id: String) -> Self {
        Self {
            job_id,
            status: JobStatus::Processing,
            result: None,
            error: None,
        }
    }
}

/// Response to a recommendation request: either an immediately completed
/// result (cache hit or fast path) or a processing job to poll.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub job_id: String,
    pub status: JobStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Vec<RankedCandidate>>,
}
