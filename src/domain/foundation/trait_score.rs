//! Trait score value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A personality trait score between 0 and 100 inclusive.
///
/// Scores start at the neutral prior of 50 and move in clamped steps, so a
/// `TraitScore` can never leave the valid range no matter how many
/// adjustments are applied.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TraitScore(f64);

impl TraitScore {
    /// Lowest possible score.
    pub const MIN: Self = Self(0.0);

    /// Neutral prior used before any evidence is seen.
    pub const NEUTRAL: Self = Self(50.0);

    /// Highest possible score.
    pub const MAX: Self = Self(100.0);

    /// Creates a new score, clamping to the valid range.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::NEUTRAL;
        }
        Self(value.clamp(0.0, 100.0))
    }

    /// Returns the score adjusted by `delta`, clamped to the valid range.
    pub fn adjusted(self, delta: f64) -> Self {
        Self::new(self.0 + delta)
    }

    /// Returns the raw value.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for TraitScore {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl fmt::Display for TraitScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn trait_score_new_accepts_valid_values() {
        assert_eq!(TraitScore::new(0.0).value(), 0.0);
        assert_eq!(TraitScore::new(50.0).value(), 50.0);
        assert_eq!(TraitScore::new(100.0).value(), 100.0);
    }

    #[test]
    fn trait_score_new_clamps_out_of_range() {
        assert_eq!(TraitScore::new(-20.0).value(), 0.0);
        assert_eq!(TraitScore::new(150.0).value(), 100.0);
    }

    #[test]
    fn trait_score_nan_becomes_neutral() {
        assert_eq!(TraitScore::new(f64::NAN), TraitScore::NEUTRAL);
    }

    #[test]
    fn trait_score_adjusted_moves_and_clamps() {
        let score = TraitScore::NEUTRAL;
        assert_eq!(score.adjusted(20.0).value(), 70.0);
        assert_eq!(score.adjusted(-20.0).value(), 30.0);
        assert_eq!(score.adjusted(80.0).value(), 100.0);
        assert_eq!(score.adjusted(-80.0).value(), 0.0);
    }

    #[test]
    fn trait_score_default_is_neutral() {
        assert_eq!(TraitScore::default().value(), 50.0);
    }

    #[test]
    fn trait_score_serializes_transparently() {
        let json = serde_json::to_string(&TraitScore::new(70.0)).unwrap();
        assert_eq!(json, "70.0");
    }

    proptest! {
        #[test]
        fn trait_score_stays_in_range_under_repeated_adjustments(
            deltas in proptest::collection::vec(-1e6f64..1e6, 0..64)
        ) {
            let mut score = TraitScore::NEUTRAL;
            for delta in deltas {
                score = score.adjusted(delta);
                prop_assert!((0.0..=100.0).contains(&score.value()));
            }
        }
    }
}
