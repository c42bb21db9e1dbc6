//! HTTP routes for the analysis endpoints.

use axum::{routing::post, Router};

use super::handlers::{analyze_behavior, analyze_personality, analyze_sentiment, AnalysisState};

/// Creates the analysis router with all endpoints.
pub fn analysis_routes(state: AnalysisState) -> Router {
    Router::new()
        .route("/analyze-behavior", post(analyze_behavior))
        .route("/analyze-personality", post(analyze_personality))
        .route("/analyze-sentiment", post(analyze_sentiment))
        .with_state(state)
}
