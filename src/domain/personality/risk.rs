//! Risk tolerance and personality type derivation from Big Five scores.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::BigFiveScores;

/// Coarse investor risk appetite tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTolerance {
    Conservative,
    Moderate,
    Aggressive,
}

impl RiskTolerance {
    /// Determines the tier from a weighted risk score.
    /// - Conservative: score < 40
    /// - Moderate: 40 <= score < 70
    /// - Aggressive: score >= 70
    pub fn from_score(score: f64) -> Self {
        if score < 40.0 {
            Self::Conservative
        } else if score < 70.0 {
            Self::Moderate
        } else {
            Self::Aggressive
        }
    }

    /// Derives the tier directly from Big Five scores.
    pub fn from_scores(scores: &BigFiveScores) -> Self {
        Self::from_score(risk_score(scores))
    }
}

impl Default for RiskTolerance {
    fn default() -> Self {
        Self::Moderate
    }
}

impl fmt::Display for RiskTolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Conservative => "conservative",
            Self::Moderate => "moderate",
            Self::Aggressive => "aggressive",
        };
        f.write_str(s)
    }
}

/// Weighted linear risk score over the Big Five traits.
///
/// Openness and extraversion push risk appetite up; conscientiousness and
/// neuroticism pull it down. The +25 base centers an all-neutral profile at
/// 25, inside the conservative band.
pub fn risk_score(scores: &BigFiveScores) -> f64 {
    scores.openness.value() * 0.3 - scores.conscientiousness.value() * 0.2
        + scores.extraversion.value() * 0.2
        - scores.neuroticism.value() * 0.3
        + 25.0
}

/// Classifies the personality type label, first match wins.
pub fn personality_type(scores: &BigFiveScores) -> &'static str {
    let o = scores.openness.value();
    let c = scores.conscientiousness.value();
    let e = scores.extraversion.value();
    let a = scores.agreeableness.value();
    let n = scores.neuroticism.value();

    if c > 70.0 && n < 30.0 {
        "Strategic Planner"
    } else if o > 70.0 && e > 60.0 {
        "Innovative Risk-Taker"
    } else if a > 70.0 && c > 60.0 {
        "Ethical Investor"
    } else if n > 60.0 {
        "Cautious Saver"
    } else {
        "Balanced Investor"
    }
}
