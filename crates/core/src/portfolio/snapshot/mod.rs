//! Portfolio snapshot module - positions and account-record ingestion.

pub mod account_record;
mod positions_model;

pub use account_record::{parse_account_record, RawAccountRecord, RawPosition};
pub use positions_model::*;

#[cfg(test)]
mod account_record_tests;
