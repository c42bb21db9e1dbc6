//! Adapters - implementations of ports and the HTTP surface.

pub mod http;
pub mod model;
