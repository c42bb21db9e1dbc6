//! AnalyzeSentiment - text to normalized sentiment and market impact.

use std::sync::Arc;

use crate::domain::sentiment::{
    analyze_fallback, from_candidates, market_impact, MarketImpact, SentimentResult,
};
use crate::ports::SentimentModel;

/// Result of a sentiment analysis.
#[derive(Debug, Clone)]
pub struct SentimentAnalysis {
    pub result: SentimentResult,
    pub market_impact: MarketImpact,
}

/// Handler for sentiment analysis.
///
/// Uses the loaded classifier when available; otherwise, or on inference
/// failure, the keyword fallback decides.
pub struct AnalyzeSentimentHandler {
    classifier: Option<Arc<dyn SentimentModel>>,
}

impl AnalyzeSentimentHandler {
    pub fn new(classifier: Option<Arc<dyn SentimentModel>>) -> Self {
        Self { classifier }
    }

    /// Whether a classifier is loaded.
    pub fn has_classifier(&self) -> bool {
        self.classifier.is_some()
    }

    /// Scores a text. Total: any input yields an analysis.
    pub async fn handle(&self, text: &str) -> SentimentAnalysis {
        let result = match &self.classifier {
            Some(classifier) => match classifier.classify(text).await {
                Ok(candidates) => from_candidates(&candidates),
                Err(error) => {
                    tracing::warn!(%error, "Sentiment inference failed, using keyword fallback");
                    analyze_fallback(text)
                }
            },
            None => analyze_fallback(text),
        };

        SentimentAnalysis {
            market_impact: market_impact(&result),
            result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::model::MockSentimentModel;
    use crate::domain::sentiment::Sentiment;
    use crate::ports::SentimentScore;

    #[tokio::test]
    async fn without_classifier_uses_keyword_fallback() {
        let handler = AnalyzeSentimentHandler::new(None);
        let analysis = handler.handle("stocks up, great gain").await;

        assert_eq!(analysis.result.sentiment, Sentiment::Positive);
        assert!((analysis.result.confidence - 0.8).abs() < 1e-9);
        assert_eq!(analysis.market_impact, MarketImpact::Bullish);
    }

    #[tokio::test]
    async fn classifier_candidates_are_normalized() {
        let classifier = Arc::new(MockSentimentModel::returning(vec![
            SentimentScore::new("LABEL_0_neg", 0.9),
            SentimentScore::new("LABEL_2_pos", 0.1),
        ]));
        let handler = AnalyzeSentimentHandler::new(Some(classifier.clone()));

        let analysis = handler.handle("some market text").await;
        assert_eq!(analysis.result.sentiment, Sentiment::Negative);
        assert_eq!(analysis.result.confidence, 0.9);
        assert_eq!(analysis.market_impact, MarketImpact::Bearish);
        assert_eq!(classifier.calls(), vec!["some market text".to_string()]);
    }

    #[tokio::test]
    async fn low_confidence_classification_is_neutral_impact() {
        let classifier = Arc::new(MockSentimentModel::returning(vec![SentimentScore::new(
            "positive", 0.6,
        )]));
        let handler = AnalyzeSentimentHandler::new(Some(classifier));

        let analysis = handler.handle("mildly good quarter").await;
        assert_eq!(analysis.result.sentiment, Sentiment::Positive);
        assert_eq!(analysis.market_impact, MarketImpact::Neutral);
    }

    #[tokio::test]
    async fn classifier_failure_falls_back_to_keywords() {
        let handler = AnalyzeSentimentHandler::new(Some(Arc::new(MockSentimentModel::failing())));

        let analysis = handler.handle("markets crash, heavy loss, bad decline").await;
        assert_eq!(analysis.result.sentiment, Sentiment::Negative);
        assert_eq!(analysis.market_impact, MarketImpact::Bearish);
    }
}
