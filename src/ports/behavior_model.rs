//! Behavior model and scaler ports.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;

/// Pre-fitted scaler applied to feature vectors before prediction.
#[async_trait]
pub trait FeatureScaler: Send + Sync {
    /// Transforms a raw feature vector into the model's input space.
    async fn transform(&self, features: &[f64; 8]) -> Result<[f64; 8], DomainError>;
}

/// Pre-trained clustering model over scaled spending features.
#[async_trait]
pub trait BehaviorModel: Send + Sync {
    /// Predicts the integer cluster code (0-3) for a scaled feature vector.
    ///
    /// Callers map out-of-range codes to the safe default cluster.
    async fn predict(&self, scaled_features: &[f64; 8]) -> Result<i64, DomainError>;
}
