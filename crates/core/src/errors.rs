//! Core error types for the finboard engine.
//!
//! Only malformed input is an error. Degenerate numeric cases (zero totals,
//! non-positive cost basis, no elapsed days) resolve to zero at the call site
//! and never reach this module.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Portfolio calculation failed: {0}")]
    Calculation(#[from] CalculatorError),

    #[error("Invalid exchange rate: {0}")]
    InvalidExchangeRate(String),

    #[error("Currency '{0}' is not supported")]
    UnsupportedCurrency(String),
}

/// Errors that occur during portfolio calculations.
#[derive(Error, Debug)]
pub enum CalculatorError {
    #[error("Arithmetic overflow computing {operation} for {symbol}")]
    Overflow {
        symbol: String,
        operation: &'static str,
    },
}

/// Validation errors for snapshot and account-record input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Unsupported asset class '{tag}' for symbol {symbol}")]
    UnsupportedAssetClass { symbol: String, tag: String },

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse date: {0}")]
    DateParse(#[from] chrono::ParseError),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}

impl From<chrono::ParseError> for Error {
    fn from(err: chrono::ParseError) -> Self {
        Error::Validation(ValidationError::DateParse(err))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
