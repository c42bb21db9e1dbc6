//! Model adapters - file-backed implementations of the model ports.
//!
//! The original deployment shipped pickled scikit-learn artifacts; here the
//! equivalent parameters (k-means centroids, standard scaler statistics,
//! lexicon weights) are stored as plain JSON files and loaded once at
//! startup.

mod behavior;
mod mock;
mod sentiment;

pub use behavior::{KMeansModel, ModelLoadError, StandardScaler};
pub use mock::{MockBehaviorModel, MockScaler, MockSentimentModel};
pub use sentiment::LexiconSentimentModel;
