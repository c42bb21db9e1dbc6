//! Ports - interfaces to external model collaborators.
//!
//! Both models are optional process-wide resources loaded once at startup.
//! Their absence, or any inference error, routes the request through the
//! rule-based fallbacks in the domain layer.

mod behavior_model;
mod sentiment_model;

pub use behavior_model::{BehaviorModel, FeatureScaler};
pub use sentiment_model::SentimentModel;

pub use crate::domain::sentiment::SentimentScore;
