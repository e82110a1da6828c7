/// Atelier engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum number of recommendations returned by one generation pass.
pub const MAX_RECOMMENDATIONS: usize = 5;

/// Element count above which grouping into sub-components is proposed.
pub const GROUPING_ELEMENT_THRESHOLD: usize = 20;

/// Vertical gaps are rounded to this unit before counting distinct values.
pub const GAP_ROUND_UNIT: f64 = 4.0;

/// More distinct rounded gap values than this triggers a spacing proposal.
pub const MAX_DISTINCT_GAPS: usize = 3;

/// More distinct font sizes than this triggers a typography proposal.
pub const MAX_DISTINCT_FONT_SIZES: usize = 5;

/// Mean line-height below this triggers a readability proposal.
pub const MIN_LINE_HEIGHT: f64 = 1.2;

/// More distinct fill colors than this triggers a palette proposal.
pub const MAX_DISTINCT_FILL_COLORS: usize = 8;

/// Minimum touch-target edge for interactive elements, in artifact units.
pub const MIN_TOUCH_TARGET: f64 = 44.0;

/// Growth factor of the element population that triggers a
/// componentization proposal in differential analysis.
pub const COMPLEXITY_GROWTH_FACTOR: f64 = 1.5;

/// Emphasis-level band considered healthy for visual hierarchy.
pub const MIN_EMPHASIS_LEVELS: u64 = 3;
pub const MAX_EMPHASIS_LEVELS: u64 = 6;

/// Intent confidence is clamped to this interval.
pub const INTENT_CONFIDENCE_MIN: f64 = 0.3;
pub const INTENT_CONFIDENCE_MAX: f64 = 0.95;
