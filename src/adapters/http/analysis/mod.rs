//! HTTP adapter for the analysis endpoints.

pub mod dto;
mod handlers;
mod routes;

pub use handlers::AnalysisState;
pub use routes::analysis_routes;
