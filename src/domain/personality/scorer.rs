//! Big Five scoring from free-form quiz responses.
//!
//! Questions are matched against an ordered keyword rule table; the first
//! matching trait wins, so a question mentioning both "creative" and
//! "organized" only moves openness. Answers are read on a 1-5 scale with 3
//! as the neutral midpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::foundation::TraitScore;

/// Mapping from free-text question to answer, as submitted by the client.
///
/// `serde_json::Map` keeps iteration deterministic (sorted keys), so a given
/// response set always produces the same scores.
pub type QuizResponseMap = serde_json::Map<String, Value>;

/// The five personality traits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BigFiveTrait {
    Openness,
    Conscientiousness,
    Extraversion,
    Agreeableness,
    Neuroticism,
}

/// Ordered keyword rule table, evaluated first-match-wins per question.
const TRAIT_KEYWORDS: [(&[&str], BigFiveTrait); 5] = [
    (
        &["creative", "artistic", "imaginative"],
        BigFiveTrait::Openness,
    ),
    (
        &["organized", "disciplined", "careful"],
        BigFiveTrait::Conscientiousness,
    ),
    (
        &["social", "outgoing", "energetic"],
        BigFiveTrait::Extraversion,
    ),
    (
        &["helpful", "trusting", "cooperative"],
        BigFiveTrait::Agreeableness,
    ),
    (
        &["anxious", "stressed", "worried"],
        BigFiveTrait::Neuroticism,
    ),
];

/// Answer value assumed when a response is missing or non-numeric.
const NEUTRAL_ANSWER: f64 = 3.0;

/// Points moved per answer step away from the midpoint.
const STEP_WEIGHT: f64 = 10.0;

/// Big Five trait scores, each clamped to 0-100 with a neutral prior of 50.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BigFiveScores {
    pub openness: TraitScore,
    pub conscientiousness: TraitScore,
    pub extraversion: TraitScore,
    pub agreeableness: TraitScore,
    pub neuroticism: TraitScore,
}

impl BigFiveScores {
    /// Returns the score for a trait.
    pub fn get(&self, t: BigFiveTrait) -> TraitScore {
        match t {
            BigFiveTrait::Openness => self.openness,
            BigFiveTrait::Conscientiousness => self.conscientiousness,
            BigFiveTrait::Extraversion => self.extraversion,
            BigFiveTrait::Agreeableness => self.agreeableness,
            BigFiveTrait::Neuroticism => self.neuroticism,
        }
    }

    fn adjust(&mut self, t: BigFiveTrait, delta: f64) {
        let slot = match t {
            BigFiveTrait::Openness => &mut self.openness,
            BigFiveTrait::Conscientiousness => &mut self.conscientiousness,
            BigFiveTrait::Extraversion => &mut self.extraversion,
            BigFiveTrait::Agreeableness => &mut self.agreeableness,
            BigFiveTrait::Neuroticism => &mut self.neuroticism,
        };
        *slot = slot.adjusted(delta);
    }
}

/// Scores a quiz response map into Big Five traits.
///
/// Total function: questions matching no keyword set contribute nothing and
/// unusable answers fall back to the midpoint, so any input yields a valid
/// score set.
pub fn score_responses(responses: &QuizResponseMap) -> BigFiveScores {
    let mut scores = BigFiveScores::default();

    for (question, answer) in responses {
        let answer_val = coerce_answer(answer);
        let question_lower = question.to_lowercase();

        if let Some(t) = match_trait(&question_lower) {
            scores.adjust(t, (answer_val - NEUTRAL_ANSWER) * STEP_WEIGHT);
        }
    }

    scores
}

/// Finds the first trait whose keyword set matches the lower-cased question.
fn match_trait(question_lower: &str) -> Option<BigFiveTrait> {
    TRAIT_KEYWORDS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| question_lower.contains(k)))
        .map(|(_, t)| *t)
}

/// Coerces an answer to a number, defaulting to the scale midpoint.
/// Booleans read as 1/0, matching numeric coercion of true/false.
fn coerce_answer(answer: &Value) -> f64 {
    match answer {
        Value::Number(n) => n.as_f64().unwrap_or(NEUTRAL_ANSWER),
        Value::String(s) => s.trim().parse().unwrap_or(NEUTRAL_ANSWER),
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        _ => NEUTRAL_ANSWER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn responses(pairs: &[(&str, Value)]) -> QuizResponseMap {
        pairs
            .iter()
            .map(|(q, a)| (q.to_string(), a.clone()))
            .collect()
    }

    #[test]
    fn empty_responses_keep_neutral_prior() {
        let scores = score_responses(&QuizResponseMap::new());
        assert_eq!(scores.openness.value(), 50.0);
        assert_eq!(scores.neuroticism.value(), 50.0);
    }

    #[test]
    fn creative_and_anxious_questions_move_their_traits() {
        let scores = score_responses(&responses(&[
            ("Are you creative?", json!(5)),
            ("Are you anxious?", json!(1)),
        ]));

        assert_eq!(scores.openness.value(), 70.0);
        assert_eq!(scores.neuroticism.value(), 30.0);
        assert_eq!(scores.conscientiousness.value(), 50.0);
        assert_eq!(scores.extraversion.value(), 50.0);
        assert_eq!(scores.agreeableness.value(), 50.0);
    }

    #[test]
    fn first_matching_trait_wins() {
        // "creative" precedes "organized" in the rule table.
        let scores = score_responses(&responses(&[(
            "Are you a creative but organized person?",
            json!(5),
        )]));

        assert_eq!(scores.openness.value(), 70.0);
        assert_eq!(scores.conscientiousness.value(), 50.0);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let scores = score_responses(&responses(&[("ARE YOU OUTGOING?", json!(4))]));
        assert_eq!(scores.extraversion.value(), 60.0);
    }

    #[test]
    fn unmatched_questions_contribute_nothing() {
        let scores = score_responses(&responses(&[("Do you like pizza?", json!(5))]));
        assert_eq!(scores, BigFiveScores::default());
    }

    #[test]
    fn non_numeric_answers_default_to_midpoint() {
        let scores = score_responses(&responses(&[
            ("Are you creative?", json!("very")),
            ("Are you helpful?", json!(null)),
            ("Are you social?", json!([1, 2])),
        ]));
        // Midpoint answers move nothing.
        assert_eq!(scores, BigFiveScores::default());
    }

    #[test]
    fn boolean_answers_coerce_to_one_and_zero() {
        let scores = score_responses(&responses(&[
            ("Are you anxious?", json!(true)),
            ("Are you creative?", json!(false)),
        ]));

        // true -> 1: (1 - 3) * 10 = -20; false -> 0: (0 - 3) * 10 = -30.
        assert_eq!(scores.neuroticism.value(), 30.0);
        assert_eq!(scores.openness.value(), 20.0);
    }

    #[test]
    fn numeric_string_answers_are_parsed() {
        let scores = score_responses(&responses(&[("Are you disciplined?", json!("5"))]));
        assert_eq!(scores.conscientiousness.value(), 70.0);
    }

    #[test]
    fn repeated_questions_clamp_at_bounds() {
        let pairs: Vec<(String, Value)> = (0..20)
            .map(|i| (format!("Are you creative? (round {})", i), json!(5)))
            .collect();
        let map: QuizResponseMap = pairs.into_iter().collect();

        let scores = score_responses(&map);
        assert_eq!(scores.openness.value(), 100.0);
    }
}
