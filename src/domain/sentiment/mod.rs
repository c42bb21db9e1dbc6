//! Sentiment interpretation and market-impact mapping.

mod interpreter;

pub use interpreter::{
    analyze_fallback, from_candidates, market_impact, MarketImpact, Sentiment, SentimentResult,
    SentimentScore,
};
