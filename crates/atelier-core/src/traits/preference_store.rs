use crate::errors::AtelierResult;
use crate::models::candidate::Dimension;
use crate::models::stats::AcceptanceStats;

/// Read-only view of historical acceptance statistics.
///
/// The external preference store is the sole writer; the engine only
/// queries aggregates by rule identity and by design dimension. A fetch
/// failure degrades to unranked output, it never fails a request.
pub trait PreferenceStore: Send + Sync {
    /// Statistics for one exact rule id, if any were recorded.
    fn rule_stats(&self, rule_id: &str) -> AtelierResult<Option<AcceptanceStats>>;

    /// Statistics for one design dimension, if any were recorded.
    fn dimension_stats(&self, dimension: Dimension) -> AtelierResult<Option<AcceptanceStats>>;
}
