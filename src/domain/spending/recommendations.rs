//! Fixed advisory lists per behavior cluster.

use super::BehaviorCluster;

/// Returns the three advisory strings for a cluster.
///
/// Pure lookup; unknown model codes have already been folded into
/// [`BehaviorCluster::BalancedSpender`] upstream.
pub fn recommendations_for(cluster: BehaviorCluster) -> [&'static str; 3] {
    match cluster {
        BehaviorCluster::CautiousSaver => [
            "Consider increasing your investment amount gradually",
            "Look into low-risk debt funds",
            "Set up automatic investments to build consistency",
        ],
        BehaviorCluster::BalancedSpender => [
            "Maintain your current investment strategy",
            "Consider diversifying across equity and debt",
            "Review and rebalance quarterly",
        ],
        BehaviorCluster::ImpulsiveBuyer => [
            "Set up automatic round-up investments",
            "Focus on long-term goals to reduce impulsive decisions",
            "Consider SIP investments for discipline",
        ],
        BehaviorCluster::StrategicInvestor => [
            "Explore advanced investment options",
            "Consider increasing equity allocation",
            "Look into ESG and sector-specific funds",
        ],
    }
}
