//! AnalyzeBehavior - scores a spending history into a behavior cluster.

use std::sync::Arc;

use crate::domain::spending::{
    classify_fallback, extract_features, recommendations_for, BehaviorCluster, SpendingFeatures,
    TransactionRecord,
};
use crate::ports::{BehaviorModel, FeatureScaler};

/// Confidence reported for a cluster assignment.
///
/// The original service reported a flat 0.85 regardless of path; preserved.
const CLUSTER_CONFIDENCE: f64 = 0.85;

/// Result of a behavior analysis.
#[derive(Debug, Clone)]
pub struct BehaviorAnalysis {
    pub cluster: BehaviorCluster,
    pub confidence: f64,
    pub features: SpendingFeatures,
    pub recommendations: [&'static str; 3],
}

/// Handler for behavior analysis.
///
/// Holds the optional pre-trained model and scaler; without both, or when
/// inference fails, the deterministic rule chain assigns the cluster.
pub struct AnalyzeBehaviorHandler {
    model: Option<Arc<dyn BehaviorModel>>,
    scaler: Option<Arc<dyn FeatureScaler>>,
}

impl AnalyzeBehaviorHandler {
    pub fn new(
        model: Option<Arc<dyn BehaviorModel>>,
        scaler: Option<Arc<dyn FeatureScaler>>,
    ) -> Self {
        Self { model, scaler }
    }

    /// Whether a usable model and scaler pair is loaded.
    pub fn has_model(&self) -> bool {
        self.model.is_some() && self.scaler.is_some()
    }

    /// Scores a spending history. Total: any input yields an analysis.
    pub async fn handle(&self, records: &[TransactionRecord]) -> BehaviorAnalysis {
        let features = extract_features(records);

        let cluster = match self.predict(&features).await {
            Some(cluster) => cluster,
            None => classify_fallback(&features),
        };

        BehaviorAnalysis {
            cluster,
            confidence: CLUSTER_CONFIDENCE,
            features,
            recommendations: recommendations_for(cluster),
        }
    }

    async fn predict(&self, features: &SpendingFeatures) -> Option<BehaviorCluster> {
        let (model, scaler) = match (&self.model, &self.scaler) {
            (Some(model), Some(scaler)) => (model, scaler),
            _ => return None,
        };

        let vector = features.to_vector();
        let scaled = match scaler.transform(&vector).await {
            Ok(scaled) => scaled,
            Err(error) => {
                tracing::warn!(%error, "Feature scaling failed, using rule-based fallback");
                return None;
            }
        };

        match model.predict(&scaled).await {
            Ok(code) => Some(BehaviorCluster::from_code(code)),
            Err(error) => {
                tracing::warn!(%error, "Cluster prediction failed, using rule-based fallback");
                None
            }
        }
    }
}
