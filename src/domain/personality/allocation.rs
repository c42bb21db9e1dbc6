//! Investment allocation from risk tier and personality traits.

use serde::{Deserialize, Serialize};

use super::{BigFiveScores, RiskTolerance};

/// Openness above this level nudges the allocation toward crypto.
const OPENNESS_ADJUSTMENT_THRESHOLD: f64 = 70.0;

/// Percentage asset allocation across the five supported classes.
///
/// After the openness adjustment the values may not sum to exactly 100;
/// the profile is returned without renormalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationProfile {
    pub equity: u8,
    pub debt: u8,
    pub esg: u8,
    pub crypto: u8,
    pub gold: u8,
}

impl AllocationProfile {
    /// Base table for a risk tier.
    pub fn base(tolerance: RiskTolerance) -> Self {
        match tolerance {
            RiskTolerance::Conservative => Self {
                equity: 20,
                debt: 60,
                esg: 15,
                crypto: 0,
                gold: 5,
            },
            RiskTolerance::Moderate => Self {
                equity: 50,
                debt: 30,
                esg: 15,
                crypto: 3,
                gold: 2,
            },
            RiskTolerance::Aggressive => Self {
                equity: 70,
                debt: 10,
                esg: 10,
                crypto: 8,
                gold: 2,
            },
        }
    }

    /// Sum of all percentages, exposed for observability and tests.
    pub fn total(&self) -> u16 {
        u16::from(self.equity)
            + u16::from(self.debt)
            + u16::from(self.esg)
            + u16::from(self.crypto)
            + u16::from(self.gold)
    }
}

/// Builds the allocation for a risk tier, adjusted by personality traits.
///
/// High openness (> 70) shifts 5 points toward crypto (capped at 15) and
/// away from debt (floored at 5). The shift is applied at most once and does
/// not scale with how far openness exceeds the threshold.
pub fn allocate(tolerance: RiskTolerance, scores: &BigFiveScores) -> AllocationProfile {
    let mut profile = AllocationProfile::base(tolerance);

    if scores.openness.value() > OPENNESS_ADJUSTMENT_THRESHOLD {
        profile.crypto = (profile.crypto + 5).min(15);
        profile.debt = profile.debt.saturating_sub(5).max(5);
    }

    profile
}
