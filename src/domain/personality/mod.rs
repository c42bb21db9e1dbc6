//! Personality analysis: Big Five scoring, risk tolerance, and investment
//! allocation.

mod allocation;
mod risk;
mod scorer;

pub use allocation::{allocate, AllocationProfile};
pub use risk::{personality_type, risk_score, RiskTolerance};
pub use scorer::{score_responses, BigFiveScores, BigFiveTrait, QuizResponseMap};
