//! Analysis handlers - one per scoring operation.
//!
//! Each handler composes the stateless domain components with the optional
//! process-wide models. Handlers are total: model inference errors are
//! logged and recovered via the rule-based fallbacks, never surfaced.

mod analyze_behavior;
mod analyze_personality;
mod analyze_sentiment;

pub use analyze_behavior::{AnalyzeBehaviorHandler, BehaviorAnalysis};
pub use analyze_personality::{AnalyzePersonalityHandler, PersonalityAnalysis};
pub use analyze_sentiment::{AnalyzeSentimentHandler, SentimentAnalysis};
