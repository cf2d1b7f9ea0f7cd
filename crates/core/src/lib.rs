//! Finboard Core - Portfolio valuation and allocation engine.
//!
//! This crate turns a raw portfolio snapshot into a normalized breakdown by
//! asset class, percentage allocations, donut-chart geometry and
//! currency-formatted display values. It also classifies the current instant
//! into a market session. Everything here is pure: no I/O, no shared state.

pub mod constants;
pub mod errors;
pub mod fx;
pub mod indicators;
pub mod market_session;
pub mod portfolio;
pub mod settings;
pub mod utils;

// Re-export common types from the portfolio module
pub use portfolio::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
