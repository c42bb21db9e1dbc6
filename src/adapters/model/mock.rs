//! Mock model implementations for testing.
//!
//! Configurable to return canned outputs or inject errors, and track calls
//! for verification, so tests can exercise both the model-backed and the
//! fallback paths without real model files.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{BehaviorModel, FeatureScaler, SentimentModel, SentimentScore};

/// Mock behavior model returning a fixed cluster code.
pub struct MockBehaviorModel {
    cluster: i64,
    fail: bool,
    calls: Mutex<Vec<[f64; 8]>>,
}

impl MockBehaviorModel {
    pub fn returning(cluster: i64) -> Self {
        Self {
            cluster,
            fail: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// A mock whose predictions always fail.
    pub fn failing() -> Self {
        Self {
            cluster: 0,
            fail: true,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Feature vectors this mock has been asked to predict.
    pub fn calls(&self) -> Vec<[f64; 8]> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl BehaviorModel for MockBehaviorModel {
    async fn predict(&self, scaled_features: &[f64; 8]) -> Result<i64, DomainError> {
        self.calls.lock().unwrap().push(*scaled_features);
        if self.fail {
            return Err(DomainError::new(
                ErrorCode::InferenceFailed,
                "Mock prediction failure",
            ));
        }
        Ok(self.cluster)
    }
}

/// Mock scaler. Identity by default, or a fixed offset for verifying that
/// scaling happens before prediction.
pub struct MockScaler {
    offset: f64,
}

impl MockScaler {
    pub fn identity() -> Self {
        Self { offset: 0.0 }
    }

    pub fn offsetting(offset: f64) -> Self {
        Self { offset }
    }
}

#[async_trait]
impl FeatureScaler for MockScaler {
    async fn transform(&self, features: &[f64; 8]) -> Result<[f64; 8], DomainError> {
        let mut scaled = *features;
        for value in &mut scaled {
            *value += self.offset;
        }
        Ok(scaled)
    }
}

/// Mock sentiment model returning canned candidates.
pub struct MockSentimentModel {
    candidates: Vec<SentimentScore>,
    fail: bool,
    calls: Mutex<Vec<String>>,
}

impl MockSentimentModel {
    pub fn returning(candidates: Vec<SentimentScore>) -> Self {
        Self {
            candidates,
            fail: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// A mock whose classifications always fail.
    pub fn failing() -> Self {
        Self {
            candidates: Vec::new(),
            fail: true,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Texts this mock has been asked to classify.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SentimentModel for MockSentimentModel {
    async fn classify(&self, text: &str) -> Result<Vec<SentimentScore>, DomainError> {
        self.calls.lock().unwrap().push(text.to_string());
        if self.fail {
            return Err(DomainError::new(
                ErrorCode::InferenceFailed,
                "Mock classification failure",
            ));
        }
        Ok(self.candidates.clone())
    }
}
