//! HTTP DTOs for the analysis endpoints.
//!
//! These types pin the wire format of the original service, which a deployed
//! frontend depends on: clusters and tiers as snake_case strings, the
//! feature summary keyed `spending_volatility`, and errors as a single
//! string message.

use serde::{Deserialize, Serialize};

use crate::application::handlers::analysis::{
    BehaviorAnalysis, PersonalityAnalysis, SentimentAnalysis,
};
use crate::domain::personality::{AllocationProfile, BigFiveScores, QuizResponseMap, RiskTolerance};
use crate::domain::sentiment::{MarketImpact, Sentiment};
use crate::domain::spending::{BehaviorCluster, TransactionRecord};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to analyze spending behavior.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeBehaviorRequest {
    #[serde(default)]
    pub spending_data: Vec<TransactionRecord>,
}

/// Request to analyze quiz responses.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzePersonalityRequest {
    #[serde(default)]
    pub quiz_responses: QuizResponseMap,
}

/// Request to analyze text sentiment.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeSentimentRequest {
    #[serde(default)]
    pub text: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Summary of the first four features, echoed back to the client.
#[derive(Debug, Clone, Serialize)]
pub struct FeatureSummary {
    pub total_spending: f64,
    pub avg_transaction: f64,
    pub transaction_count: f64,
    pub spending_volatility: f64,
}

/// Response for behavior analysis.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeBehaviorResponse {
    pub behavior_cluster: BehaviorCluster,
    pub confidence: f64,
    pub features: FeatureSummary,
    pub recommendations: Vec<String>,
}

impl From<BehaviorAnalysis> for AnalyzeBehaviorResponse {
    fn from(analysis: BehaviorAnalysis) -> Self {
        Self {
            behavior_cluster: analysis.cluster,
            confidence: analysis.confidence,
            features: FeatureSummary {
                total_spending: analysis.features.total_spending,
                avg_transaction: analysis.features.avg_transaction,
                transaction_count: analysis.features.transaction_count,
                spending_volatility: analysis.features.spending_std_dev,
            },
            recommendations: analysis
                .recommendations
                .iter()
                .map(|r| r.to_string())
                .collect(),
        }
    }
}

/// Response for personality analysis.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzePersonalityResponse {
    pub big_five_scores: BigFiveScores,
    pub risk_tolerance: RiskTolerance,
    pub recommended_allocation: AllocationProfile,
    pub personality_type: String,
}

impl From<PersonalityAnalysis> for AnalyzePersonalityResponse {
    fn from(analysis: PersonalityAnalysis) -> Self {
        Self {
            big_five_scores: analysis.big_five,
            risk_tolerance: analysis.risk_tolerance,
            recommended_allocation: analysis.allocation,
            personality_type: analysis.personality_type.to_string(),
        }
    }
}

/// Response for sentiment analysis.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeSentimentResponse {
    pub sentiment: Sentiment,
    pub confidence: f64,
    pub market_impact: MarketImpact,
}

impl From<SentimentAnalysis> for AnalyzeSentimentResponse {
    fn from(analysis: SentimentAnalysis) -> Self {
        Self {
            sentiment: analysis.result.sentiment,
            confidence: analysis.result.confidence,
            market_impact: analysis.market_impact,
        }
    }
}

/// Standard error response: a single string message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
