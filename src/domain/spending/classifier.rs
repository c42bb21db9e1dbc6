//! Behavior cluster assignment.
//!
//! The clustering model, when loaded, owns the assignment. Without a model
//! the deterministic rule chain below stands in; it reads the first four
//! features only (totals, mean, count, volatility).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::SpendingFeatures;

/// Categorical label summarizing a user's spending pattern.
///
/// Integer codes 0-3 match the cluster indices of the pre-trained model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BehaviorCluster {
    CautiousSaver,
    BalancedSpender,
    ImpulsiveBuyer,
    StrategicInvestor,
}

impl BehaviorCluster {
    /// Maps a model cluster code to a cluster label.
    ///
    /// Out-of-range codes map to [`BehaviorCluster::BalancedSpender`], the
    /// safe default.
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => Self::CautiousSaver,
            1 => Self::BalancedSpender,
            2 => Self::ImpulsiveBuyer,
            3 => Self::StrategicInvestor,
            _ => Self::BalancedSpender,
        }
    }

    /// Returns the model cluster code.
    pub fn code(&self) -> i64 {
        match self {
            Self::CautiousSaver => 0,
            Self::BalancedSpender => 1,
            Self::ImpulsiveBuyer => 2,
            Self::StrategicInvestor => 3,
        }
    }

    /// Returns the wire label used in API responses.
    pub fn label(&self) -> &'static str {
        match self {
            Self::CautiousSaver => "cautious_saver",
            Self::BalancedSpender => "balanced_spender",
            Self::ImpulsiveBuyer => "impulsive_buyer",
            Self::StrategicInvestor => "strategic_investor",
        }
    }
}

impl Default for BehaviorCluster {
    fn default() -> Self {
        Self::BalancedSpender
    }
}

impl fmt::Display for BehaviorCluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Rule-based cluster assignment used when no model is loaded.
///
/// The rules are evaluated in fixed priority order; the first match wins.
pub fn classify_fallback(features: &SpendingFeatures) -> BehaviorCluster {
    let total = features.total_spending;
    let avg = features.avg_transaction;
    let count = features.transaction_count;
    let volatility = features.spending_std_dev;

    if total < 1000.0 && volatility < 100.0 {
        BehaviorCluster::CautiousSaver
    } else if volatility > 500.0 || avg > 1000.0 {
        BehaviorCluster::ImpulsiveBuyer
    } else if count > 50.0 && volatility < 200.0 {
        BehaviorCluster::StrategicInvestor
    } else {
        BehaviorCluster::BalancedSpender
    }
}
