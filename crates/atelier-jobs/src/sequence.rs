//! Monotonic request-sequence tokens for staleness detection.

use std::sync::atomic::{AtomicU64, Ordering};

/// Hands out monotonically increasing tokens per logical session.
///
/// Every request captures a token at admission; any continuation checks
/// `is_current` before producing an observable effect, so results from a
/// superseded request are dropped instead of delivered out of order.
#[derive(Debug, Default)]
pub struct SequenceGuard {
    current: AtomicU64,
}

impl SequenceGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Admit a new request and return its token. Older tokens are now stale.
    pub fn next(&self) -> u64 {
        self.current.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether `token` still belongs to the newest admitted request.
    pub fn is_current(&self, token: u64) -> bool {
        self.current.load(Ordering::SeqCst) == token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_request_invalidates_older_tokens() {
        let guard = SequenceGuard::new();
        let first = guard.next();
        assert!(guard.is_current(first));

        let second = guard.next();
        assert!(!guard.is_current(first));
        assert!(guard.is_current(second));
    }
}
