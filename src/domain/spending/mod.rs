//! Spending behavior analysis: feature extraction, cluster assignment, and
//! per-cluster advisory lists.

mod classifier;
mod features;
mod recommendations;

pub use classifier::{classify_fallback, BehaviorCluster};
pub use features::{extract_features, SpendingFeatures, TransactionRecord};
pub use recommendations::recommendations_for;
