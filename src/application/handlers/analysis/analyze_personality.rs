//! AnalyzePersonality - quiz responses to traits, risk tier, and allocation.

use crate::domain::personality::{
    allocate, personality_type, score_responses, AllocationProfile, BigFiveScores,
    QuizResponseMap, RiskTolerance,
};

/// Result of a personality analysis.
#[derive(Debug, Clone)]
pub struct PersonalityAnalysis {
    pub big_five: BigFiveScores,
    pub risk_tolerance: RiskTolerance,
    pub allocation: AllocationProfile,
    pub personality_type: &'static str,
}

/// Handler for personality analysis.
///
/// Pure composition of the scorer, risk profiler, and allocation engine;
/// no external collaborators.
#[derive(Default)]
pub struct AnalyzePersonalityHandler;

impl AnalyzePersonalityHandler {
    pub fn new() -> Self {
        Self
    }

    /// Scores a quiz response map. Total: any input yields an analysis.
    pub fn handle(&self, responses: &QuizResponseMap) -> PersonalityAnalysis {
        let big_five = score_responses(responses);
        let risk_tolerance = RiskTolerance::from_scores(&big_five);
        let allocation = allocate(risk_tolerance, &big_five);

        PersonalityAnalysis {
            big_five,
            risk_tolerance,
            allocation,
            personality_type: personality_type(&big_five),
        }
    }
}
