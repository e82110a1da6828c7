//! Concurrent job table with read-side garbage collection.

use dashmap::DashMap;

use atelier_core::models::candidate::RankedCandidate;
use atelier_core::models::job::{Job, JobStatus};

/// Tracks in-flight and terminal jobs.
///
/// Terminal jobs are removed on the first poll that observes the terminal
/// state, so the table never accumulates delivered results.
#[derive(Default)]
pub struct JobTable {
    jobs: DashMap<String, Job>,
}

impl JobTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new job in the processing state.
    pub fn insert_processing(&self, job_id: &str) {
        self.jobs
            .insert(job_id.to_string(), Job::processing(job_id.to_string()));
    }

    /// Transition a job to completed with its ranked result.
    pub fn complete(&self, job_id: &str, result: Vec<RankedCandidate>) {
        if let Some(mut job) = self.jobs.get_mut(job_id) {
            job.status = JobStatus::Completed;
            job.result = Some(result);
        }
    }

    /// Transition a job to failed with an error message.
    pub fn fail(&self, job_id: &str, error: String) {
        if let Some(mut job) = self.jobs.get_mut(job_id) {
            job.status = JobStatus::Failed;
            job.error = Some(error);
        }
    }

    /// Drop a job without delivering anything (stale continuation).
    pub fn discard(&self, job_id: &str) {
        self.jobs.remove(job_id);
    }

    /// Read a job's current state. A terminal job is removed by this read;
    /// a subsequent poll for the same id returns `None`.
    pub fn poll(&self, job_id: &str) -> Option<Job> {
        let terminal = self
            .jobs
            .get(job_id)
            .map(|job| job.status.is_terminal())?;
        if terminal {
            self.jobs.remove(job_id).map(|(_, job)| job)
        } else {
            self.jobs.get(job_id).map(|job| job.clone())
        }
    }
}
