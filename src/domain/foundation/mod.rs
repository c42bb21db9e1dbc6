//! Shared domain building blocks.

mod errors;
mod trait_score;

pub use errors::{DomainError, ErrorCode};
pub use trait_score::TraitScore;
