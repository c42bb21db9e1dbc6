//! Use case handlers.

pub mod analysis;
