//! Model file configuration
//!
//! Both models are optional. Paths pointing at missing files are not a
//! configuration error; the service logs the absence and runs with the
//! rule-based fallbacks, matching the behavior of the original deployment.

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Paths to the optional pre-trained model files.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModelConfig {
    /// JSON file holding the k-means centroids for behavior clustering.
    pub behavior_model_path: Option<PathBuf>,

    /// JSON file holding the standard scaler parameters.
    pub scaler_path: Option<PathBuf>,

    /// JSON file holding the sentiment lexicon weights.
    pub sentiment_lexicon_path: Option<PathBuf>,
}

impl ModelConfig {
    /// Validate model configuration.
    ///
    /// The behavior model is only usable together with its scaler; one
    /// without the other indicates a broken deployment.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.behavior_model_path.is_some() != self.scaler_path.is_some() {
            return Err(ValidationError::BehaviorModelRequiresScaler);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_model_config_is_valid() {
        assert!(ModelConfig::default().validate().is_ok());
    }

    #[test]
    fn test_model_without_scaler_is_invalid() {
        let config = ModelConfig {
            behavior_model_path: Some(PathBuf::from("models/behavior.json")),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_model_with_scaler_is_valid() {
        let config = ModelConfig {
            behavior_model_path: Some(PathBuf::from("models/behavior.json")),
            scaler_path: Some(PathBuf::from("models/scaler.json")),
            sentiment_lexicon_path: None,
        };
        assert!(config.validate().is_ok());
    }
}
