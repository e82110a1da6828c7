//! Aggregated user-feedback statistics, keyed by rule and by dimension.
//!
//! Mutated append-only by the external preference store; this engine
//! only reads.

use serde::{Deserialize, Serialize};

/// User responses to a served recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserResponse {
    /// Accepted and applied as-is.
    Accepted,
    /// Explicitly rejected.
    Rejected,
    /// Accepted but adjusted before applying.
    Modified,
    /// Seen but no action taken.
    Ignored,
}

/// Acceptance counters for one rule or one dimension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptanceStats {
    pub accepted: u64,
    pub rejected: u64,
    pub modified: u64,
    pub ignored: u64,
    pub total: u64,
}

impl AcceptanceStats {
    /// Record one response. Append-only.
    pub fn record(&mut self, response: UserResponse) {
        match response {
            UserResponse::Accepted => self.accepted += 1,
            UserResponse::Rejected => self.rejected += 1,
            UserResponse::Modified => self.modified += 1,
            UserResponse::Ignored => self.ignored += 1,
        }
        self.total += 1;
    }

    /// Number of outcomes that express an actual preference.
    /// Ignored responses carry no signal and are excluded.
    pub fn decided(&self) -> u64 {
        self.accepted + self.rejected + self.modified
    }

    /// Acceptance rate over non-ignored outcomes. Accepted and modified
    /// both count as acceptance. `None` when nothing was decided.
    pub fn acceptance_rate(&self) -> Option<f64> {
        let decided = self.decided();
        if decided == 0 {
            return None;
        }
        Some((self.accepted + self.modified) as f64 / decided as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignored_responses_carry_no_signal() {
        let mut stats = AcceptanceStats::default();
        stats.record(UserResponse::Ignored);
        stats.record(UserResponse::Ignored);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.acceptance_rate(), None);
    }

    #[test]
    fn modified_counts_as_acceptance() {
        let mut stats = AcceptanceStats::default();
        stats.record(UserResponse::Accepted);
        stats.record(UserResponse::Modified);
        stats.record(UserResponse::Rejected);
        stats.record(UserResponse::Ignored);
        let rate = stats.acceptance_rate().unwrap();
        assert!((rate - 2.0 / 3.0).abs() < 1e-9);
    }
}
