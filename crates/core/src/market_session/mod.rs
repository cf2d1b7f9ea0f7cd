//! Market session state machine and refresh cadence.

mod market_session_model;
mod market_session_service;
mod refresh_policy;

pub use market_session_model::*;
pub use market_session_service::*;
pub use refresh_policy::RefreshPolicy;
