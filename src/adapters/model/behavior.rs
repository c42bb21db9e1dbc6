//! JSON-file-backed behavior clustering model and feature scaler.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::foundation::DomainError;
use crate::ports::{BehaviorModel, FeatureScaler};

/// Errors that can occur while loading a model file.
#[derive(Debug, Error)]
pub enum ModelLoadError {
    #[error("Failed to read model file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse model file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Model file contains no centroids")]
    EmptyModel,
}

#[derive(Debug, Deserialize)]
struct KMeansFile {
    centroids: Vec<[f64; 8]>,
}

/// Pre-trained k-means model over the 8-element spending feature space.
///
/// Prediction returns the index of the nearest centroid, which is the
/// cluster code the behavior labels are keyed on.
#[derive(Debug, Clone)]
pub struct KMeansModel {
    centroids: Vec<[f64; 8]>,
}

impl KMeansModel {
    /// Creates a model from centroid rows.
    pub fn new(centroids: Vec<[f64; 8]>) -> Result<Self, ModelLoadError> {
        if centroids.is_empty() {
            return Err(ModelLoadError::EmptyModel);
        }
        Ok(Self { centroids })
    }

    /// Loads the model from a JSON file of shape `{"centroids": [[f64; 8]]}`.
    pub fn from_file(path: &Path) -> Result<Self, ModelLoadError> {
        let reader = BufReader::new(File::open(path)?);
        let file: KMeansFile = serde_json::from_reader(reader)?;
        Self::new(file.centroids)
    }

    fn nearest_centroid(&self, features: &[f64; 8]) -> i64 {
        let mut best = 0usize;
        let mut best_distance = f64::INFINITY;
        for (index, centroid) in self.centroids.iter().enumerate() {
            let distance: f64 = centroid
                .iter()
                .zip(features.iter())
                .map(|(c, f)| (c - f).powi(2))
                .sum();
            if distance < best_distance {
                best = index;
                best_distance = distance;
            }
        }
        best as i64
    }
}

#[async_trait]
impl BehaviorModel for KMeansModel {
    async fn predict(&self, scaled_features: &[f64; 8]) -> Result<i64, DomainError> {
        Ok(self.nearest_centroid(scaled_features))
    }
}

#[derive(Debug, Deserialize)]
struct ScalerFile {
    mean: [f64; 8],
    scale: [f64; 8],
}

/// Pre-fitted standard scaler: `(x - mean) / scale` per feature.
#[derive(Debug, Clone)]
pub struct StandardScaler {
    mean: [f64; 8],
    scale: [f64; 8],
}

impl StandardScaler {
    /// Creates a scaler from fitted statistics.
    ///
    /// Zero scale entries (constant training features) divide by 1 instead,
    /// matching scikit-learn's guard.
    pub fn new(mean: [f64; 8], scale: [f64; 8]) -> Self {
        Self { mean, scale }
    }

    /// Loads the scaler from a JSON file of shape
    /// `{"mean": [f64; 8], "scale": [f64; 8]}`.
    pub fn from_file(path: &Path) -> Result<Self, ModelLoadError> {
        let reader = BufReader::new(File::open(path)?);
        let file: ScalerFile = serde_json::from_reader(reader)?;
        Ok(Self::new(file.mean, file.scale))
    }
}

#[async_trait]
impl FeatureScaler for StandardScaler {
    async fn transform(&self, features: &[f64; 8]) -> Result<[f64; 8], DomainError> {
        let mut scaled = [0.0; 8];
        for i in 0..8 {
            let divisor = if self.scale[i] == 0.0 { 1.0 } else { self.scale[i] };
            scaled[i] = (features[i] - self.mean[i]) / divisor;
        }
        Ok(scaled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn predict_returns_nearest_centroid_index() {
        let model = KMeansModel::new(vec![[0.0; 8], [10.0; 8], [100.0; 8]]).unwrap();

        assert_eq!(model.predict(&[1.0; 8]).await.unwrap(), 0);
        assert_eq!(model.predict(&[9.0; 8]).await.unwrap(), 1);
        assert_eq!(model.predict(&[80.0; 8]).await.unwrap(), 2);
    }

    #[test]
    fn empty_centroids_are_rejected() {
        assert!(matches!(
            KMeansModel::new(vec![]),
            Err(ModelLoadError::EmptyModel)
        ));
    }

    #[tokio::test]
    async fn scaler_standardizes_features() {
        let scaler = StandardScaler::new([10.0; 8], [2.0; 8]);
        let scaled = scaler.transform(&[14.0; 8]).await.unwrap();
        assert_eq!(scaled, [2.0; 8]);
    }

    #[tokio::test]
    async fn zero_scale_divides_by_one() {
        let mut scale = [2.0; 8];
        scale[3] = 0.0;
        let scaler = StandardScaler::new([0.0; 8], scale);

        let scaled = scaler.transform(&[4.0; 8]).await.unwrap();
        assert_eq!(scaled[0], 2.0);
        assert_eq!(scaled[3], 4.0);
    }

    #[test]
    fn model_loads_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"centroids": [[0,0,0,0,0,0,0,0],[1,1,1,1,1,1,1,1]]}}"#
        )
        .unwrap();

        let model = KMeansModel::from_file(file.path()).unwrap();
        assert_eq!(model.centroids.len(), 2);
    }

    #[test]
    fn scaler_loads_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"mean": [0,0,0,0,0,0,0,0], "scale": [1,1,1,1,1,1,1,1]}}"#
        )
        .unwrap();

        let scaler = StandardScaler::from_file(file.path()).unwrap();
        assert_eq!(scaler.mean, [0.0; 8]);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = KMeansModel::from_file(Path::new("/nonexistent/behavior.json"));
        assert!(matches!(result, Err(ModelLoadError::Io(_))));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"centroids": "not-an-array"}}"#).unwrap();

        let result = KMeansModel::from_file(file.path());
        assert!(matches!(result, Err(ModelLoadError::Parse(_))));
    }
}
