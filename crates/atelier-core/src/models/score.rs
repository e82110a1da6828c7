use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Mul;

/// Score clamped to [0.0, 1.0].
///
/// Used for candidate confidence, match scores, and preference scores.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Score(f64);

impl Score {
    /// Create a new Score, clamping to [0.0, 1.0].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Whether the score is exactly zero (i.e. unset for match scores).
    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }
}

impl Default for Score {
    fn default() -> Self {
        Self(0.0)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl From<f64> for Score {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Score> for f64 {
    fn from(s: Score) -> Self {
        s.0
    }
}

impl Mul<f64> for Score {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.0 * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn clamps_out_of_range() {
        assert_eq!(Score::new(1.5).value(), 1.0);
        assert_eq!(Score::new(-0.2).value(), 0.0);
    }

    #[test]
    fn multiplication_stays_clamped() {
        let s = Score::new(0.8) * 2.0;
        assert_eq!(s.value(), 1.0);
    }

    proptest! {
        #[test]
        fn always_within_the_unit_interval(value in -100.0f64..100.0, factor in 0.0f64..10.0) {
            let score = Score::new(value);
            prop_assert!((0.0..=1.0).contains(&score.value()));

            let scaled = score * factor;
            prop_assert!((0.0..=1.0).contains(&scaled.value()));
        }
    }
}
