//! HTTP adapters - REST API implementations.

pub mod analysis;
pub mod health;

pub use analysis::{analysis_routes, AnalysisState};
pub use health::{health_routes, HealthState};
