//! Sentiment normalization, keyword fallback, and market-impact mapping.
//!
//! When a sentiment model is loaded its candidate scores are normalized
//! here; without one, a fixed word-list count over the lower-cased text
//! stands in.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Words counted as positive signals by the fallback.
const POSITIVE_WORDS: [&str; 8] = [
    "good", "great", "excellent", "positive", "up", "rise", "gain", "profit",
];

/// Words counted as negative signals by the fallback.
const NEGATIVE_WORDS: [&str; 8] = [
    "bad", "terrible", "negative", "down", "fall", "loss", "crash", "decline",
];

/// Confidence assigned when positive and negative counts tie.
const TIE_CONFIDENCE: f64 = 0.6;

/// Minimum confidence for a sentiment to move the market-impact needle.
const IMPACT_CONFIDENCE_THRESHOLD: f64 = 0.7;

/// Sentiment polarity label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Normalizes a classifier label by substring match.
    pub fn from_label(label: &str) -> Self {
        let label = label.to_lowercase();
        if label.contains("pos") {
            Self::Positive
        } else if label.contains("neg") {
            Self::Negative
        } else {
            Self::Neutral
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        };
        f.write_str(s)
    }
}

/// Directional inference drawn from sentiment polarity and confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketImpact {
    Bullish,
    Bearish,
    Neutral,
}

/// Normalized sentiment classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub sentiment: Sentiment,
    pub confidence: f64,
}

/// One candidate classification produced by a sentiment model.
///
/// Models may emit a single candidate or one score per class; either way
/// [`from_candidates`] picks the best and normalizes its label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    /// Raw model label; normalized by substring match.
    pub label: String,
    /// Model confidence for this label.
    pub score: f64,
}

impl SentimentScore {
    pub fn new(label: impl Into<String>, score: f64) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }
}

/// Picks the highest-confidence candidate and normalizes its label.
///
/// An empty candidate list yields neutral at 0.5, the same default the
/// original classifier reported for unlabeled output.
pub fn from_candidates(candidates: &[SentimentScore]) -> SentimentResult {
    let best = candidates
        .iter()
        .max_by(|a, b| a.score.total_cmp(&b.score));

    match best {
        Some(candidate) => SentimentResult {
            sentiment: Sentiment::from_label(&candidate.label),
            confidence: candidate.score.clamp(0.0, 1.0),
        },
        None => SentimentResult {
            sentiment: Sentiment::Neutral,
            confidence: 0.5,
        },
    }
}

/// Word-list fallback over the lower-cased text.
///
/// Majority count decides the label; confidence grows by 0.1 per count of
/// margin, capped at 0.8. A tie is neutral at 0.6.
pub fn analyze_fallback(text: &str) -> SentimentResult {
    let text_lower = text.to_lowercase();
    let positive_count = POSITIVE_WORDS
        .iter()
        .filter(|w| text_lower.contains(*w))
        .count() as i64;
    let negative_count = NEGATIVE_WORDS
        .iter()
        .filter(|w| text_lower.contains(*w))
        .count() as i64;

    let margin = (positive_count - negative_count).unsigned_abs() as f64;
    if positive_count > negative_count {
        SentimentResult {
            sentiment: Sentiment::Positive,
            confidence: (0.5 + margin * 0.1).min(0.8),
        }
    } else if negative_count > positive_count {
        SentimentResult {
            sentiment: Sentiment::Negative,
            confidence: (0.5 + margin * 0.1).min(0.8),
        }
    } else {
        SentimentResult {
            sentiment: Sentiment::Neutral,
            confidence: TIE_CONFIDENCE,
        }
    }
}

/// Maps a sentiment result to a market-impact signal.
pub fn market_impact(result: &SentimentResult) -> MarketImpact {
    match result.sentiment {
        Sentiment::Positive if result.confidence > IMPACT_CONFIDENCE_THRESHOLD => {
            MarketImpact::Bullish
        }
        Sentiment::Negative if result.confidence > IMPACT_CONFIDENCE_THRESHOLD => {
            MarketImpact::Bearish
        }
        _ => MarketImpact::Neutral,
    }
}
