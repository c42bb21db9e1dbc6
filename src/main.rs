//! Finsight service entrypoint.

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use finsight::adapters::http::{analysis_routes, health_routes, AnalysisState, HealthState};
use finsight::adapters::model::{KMeansModel, LexiconSentimentModel, StandardScaler};
use finsight::application::handlers::analysis::{
    AnalyzeBehaviorHandler, AnalyzePersonalityHandler, AnalyzeSentimentHandler,
};
use finsight::config::{AppConfig, ModelConfig};
use finsight::ports::{BehaviorModel, FeatureScaler, SentimentModel};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.server.log_level.clone())),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let (behavior_model, scaler) = load_behavior_model(&config.models);
    let sentiment_model = load_sentiment_model(&config.models);

    let behavior = Arc::new(AnalyzeBehaviorHandler::new(behavior_model, scaler));
    let personality = Arc::new(AnalyzePersonalityHandler::new());
    let sentiment = Arc::new(AnalyzeSentimentHandler::new(sentiment_model));

    let analysis_state = AnalysisState::new(behavior, personality, sentiment);
    let health_state = HealthState {
        behavior_model_loaded: analysis_state.behavior_model_loaded(),
        sentiment_model_loaded: analysis_state.sentiment_model_loaded(),
    };

    let app = Router::new()
        .merge(health_routes(health_state))
        .merge(analysis_routes(analysis_state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::new(std::time::Duration::from_secs(
            config.server.request_timeout_secs,
        )));

    let addr = config.server.socket_addr()?;
    tracing::info!(%addr, "Starting finsight service");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Loads the behavior model and scaler pair, if configured.
///
/// Missing or unreadable files are not fatal: the service runs with the
/// rule-based fallback, matching the original deployment behavior. The pair
/// is all-or-nothing since a model without its scaler is meaningless.
fn load_behavior_model(
    config: &ModelConfig,
) -> (Option<Arc<dyn BehaviorModel>>, Option<Arc<dyn FeatureScaler>>) {
    let (model_path, scaler_path) = match (&config.behavior_model_path, &config.scaler_path) {
        (Some(model_path), Some(scaler_path)) => (model_path, scaler_path),
        _ => {
            tracing::info!("No behavior model configured, using rule-based classification");
            return (None, None);
        }
    };

    let model = match KMeansModel::from_file(model_path) {
        Ok(model) => model,
        Err(error) => {
            tracing::warn!(%error, path = %model_path.display(), "Behavior model not loaded");
            return (None, None);
        }
    };
    let scaler = match StandardScaler::from_file(scaler_path) {
        Ok(scaler) => scaler,
        Err(error) => {
            tracing::warn!(%error, path = %scaler_path.display(), "Scaler not loaded");
            return (None, None);
        }
    };

    tracing::info!(path = %model_path.display(), "Behavior model loaded");
    (Some(Arc::new(model)), Some(Arc::new(scaler)))
}

/// Loads the sentiment lexicon model, if configured.
fn load_sentiment_model(config: &ModelConfig) -> Option<Arc<dyn SentimentModel>> {
    let path = match &config.sentiment_lexicon_path {
        Some(path) => path,
        None => {
            tracing::info!("No sentiment lexicon configured, using keyword fallback");
            return None;
        }
    };

    match LexiconSentimentModel::from_file(path) {
        Ok(model) => {
            tracing::info!(path = %path.display(), "Sentiment lexicon loaded");
            Some(Arc::new(model))
        }
        Err(error) => {
            tracing::warn!(%error, path = %path.display(), "Sentiment lexicon not loaded");
            None
        }
    }
}
