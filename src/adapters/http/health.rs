//! Health endpoint reporting model availability.

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

/// State for the health endpoint: which optional models are loaded.
#[derive(Debug, Clone, Copy)]
pub struct HealthState {
    pub behavior_model_loaded: bool,
    pub sentiment_model_loaded: bool,
}

/// Health response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub sentiment_analyzer: bool,
    pub behavior_model: bool,
}

/// GET /health - Liveness and model availability.
async fn health_check(State(state): State<HealthState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "ai-service",
        sentiment_analyzer: state.sentiment_model_loaded,
        behavior_model: state.behavior_model_loaded,
    })
}

/// Creates the health router.
pub fn health_routes(state: HealthState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_response_serializes_model_flags() {
        let response = HealthResponse {
            status: "healthy",
            service: "ai-service",
            sentiment_analyzer: true,
            behavior_model: false,
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["status"], "healthy");
        assert_eq!(value["sentiment_analyzer"], true);
        assert_eq!(value["behavior_model"], false);
    }
}
