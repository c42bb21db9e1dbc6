//! Application layer - use case handlers composing domain components.

pub mod handlers;
