//! Finsight - Behavioral Finance Scoring Service
//!
//! This crate scores a user's financial behavior and personality from
//! transaction history and quiz responses, and maps news text to a
//! market-impact signal.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
