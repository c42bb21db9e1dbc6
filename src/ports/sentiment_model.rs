//! Sentiment model port.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::sentiment::SentimentScore;

/// Sentiment classifier over free text.
///
/// Implementations may return a single result or one score per class; the
/// interpreter selects the highest-confidence candidate.
#[async_trait]
pub trait SentimentModel: Send + Sync {
    async fn classify(&self, text: &str) -> Result<Vec<SentimentScore>, DomainError>;
}
