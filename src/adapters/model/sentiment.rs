//! Lexicon-weighted sentiment classifier.
//!
//! Stands in for the original transformer pipeline: a JSON file maps terms
//! to signed weights (positive weight = positive polarity). Classification
//! returns one score per class so the interpreter can pick the best
//! candidate, the same shape a multi-class model produces.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::ports::{SentimentModel, SentimentScore};

use super::behavior::ModelLoadError;

/// Sentiment model backed by a term-weight lexicon.
#[derive(Debug, Clone)]
pub struct LexiconSentimentModel {
    weights: HashMap<String, f64>,
}

impl LexiconSentimentModel {
    /// Creates a model from term weights.
    pub fn new(weights: HashMap<String, f64>) -> Self {
        Self { weights }
    }

    /// Loads the lexicon from a JSON file of shape `{"term": weight}`.
    pub fn from_file(path: &Path) -> Result<Self, ModelLoadError> {
        let reader = BufReader::new(File::open(path)?);
        let weights: HashMap<String, f64> = serde_json::from_reader(reader)?;
        Ok(Self::new(weights))
    }

    fn class_scores(&self, text: &str) -> (f64, f64) {
        let text_lower = text.to_lowercase();
        let mut positive = 0.0;
        let mut negative = 0.0;
        for token in text_lower.split(|c: char| !c.is_alphanumeric()) {
            if token.is_empty() {
                continue;
            }
            if let Some(weight) = self.weights.get(token) {
                if *weight > 0.0 {
                    positive += weight;
                } else {
                    negative += -weight;
                }
            }
        }
        (positive, negative)
    }
}

#[async_trait]
impl SentimentModel for LexiconSentimentModel {
    async fn classify(&self, text: &str) -> Result<Vec<SentimentScore>, DomainError> {
        let (positive, negative) = self.class_scores(text);

        // Normalize against the total evidence plus one neutral unit, so a
        // text with no lexicon hits scores neutral at 1.0.
        let denominator = positive + negative + 1.0;
        Ok(vec![
            SentimentScore::new("positive", positive / denominator),
            SentimentScore::new("negative", negative / denominator),
            SentimentScore::new("neutral", 1.0 / denominator),
        ])
    }
}
