//! Default values shared by the config structs.

pub const DEFAULT_MAX_CANDIDATES: usize = crate::constants::MAX_RECOMMENDATIONS;

pub const DEFAULT_DIMENSION_BOOST_THRESHOLD: f64 = 0.6;
pub const DEFAULT_DIMENSION_PENALTY_THRESHOLD: f64 = 0.3;
pub const DEFAULT_DIMENSION_BOOST: f64 = 1.1;
pub const DEFAULT_DIMENSION_PENALTY: f64 = 0.9;

pub const DEFAULT_CACHE_CAPACITY: u64 = 50;
pub const DEFAULT_ENRICHMENT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_ATTEMPT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_RANKING_TIMEOUT_MS: u64 = 2000;
