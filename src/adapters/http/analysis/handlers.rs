//! HTTP handlers for the analysis endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::analysis::{
    AnalyzeBehaviorHandler, AnalyzePersonalityHandler, AnalyzeSentimentHandler,
};

use super::dto::{
    AnalyzeBehaviorRequest, AnalyzeBehaviorResponse, AnalyzePersonalityRequest,
    AnalyzePersonalityResponse, AnalyzeSentimentRequest, AnalyzeSentimentResponse, ErrorResponse,
};

/// Shared state for the analysis endpoints.
#[derive(Clone)]
pub struct AnalysisState {
    behavior: Arc<AnalyzeBehaviorHandler>,
    personality: Arc<AnalyzePersonalityHandler>,
    sentiment: Arc<AnalyzeSentimentHandler>,
}

impl AnalysisState {
    pub fn new(
        behavior: Arc<AnalyzeBehaviorHandler>,
        personality: Arc<AnalyzePersonalityHandler>,
        sentiment: Arc<AnalyzeSentimentHandler>,
    ) -> Self {
        Self {
            behavior,
            personality,
            sentiment,
        }
    }

    /// Whether the behavior model and scaler pair is loaded.
    pub fn behavior_model_loaded(&self) -> bool {
        self.behavior.has_model()
    }

    /// Whether the sentiment classifier is loaded.
    pub fn sentiment_model_loaded(&self) -> bool {
        self.sentiment.has_classifier()
    }
}

/// POST /analyze-behavior - Score a spending history.
pub async fn analyze_behavior(
    State(state): State<AnalysisState>,
    Json(req): Json<AnalyzeBehaviorRequest>,
) -> Response {
    if req.spending_data.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("No spending data provided")),
        )
            .into_response();
    }

    let analysis = state.behavior.handle(&req.spending_data).await;
    let response: AnalyzeBehaviorResponse = analysis.into();
    (StatusCode::OK, Json(response)).into_response()
}

/// POST /analyze-personality - Score quiz responses.
pub async fn analyze_personality(
    State(state): State<AnalysisState>,
    Json(req): Json<AnalyzePersonalityRequest>,
) -> Response {
    if req.quiz_responses.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("No quiz responses provided")),
        )
            .into_response();
    }

    let analysis = state.personality.handle(&req.quiz_responses);
    let response: AnalyzePersonalityResponse = analysis.into();
    (StatusCode::OK, Json(response)).into_response()
}

/// POST /analyze-sentiment - Score text sentiment.
pub async fn analyze_sentiment(
    State(state): State<AnalysisState>,
    Json(req): Json<AnalyzeSentimentRequest>,
) -> Response {
    if req.text.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("No text provided")),
        )
            .into_response();
    }

    let analysis = state.sentiment.handle(&req.text).await;
    let response: AnalyzeSentimentResponse = analysis.into();
    (StatusCode::OK, Json(response)).into_response()
}
