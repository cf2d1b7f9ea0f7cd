//! Asset breakdown module - per-class aggregation and headline summary.

mod breakdown_calculator;
mod breakdown_model;

pub use breakdown_calculator::*;
pub use breakdown_model::*;

#[cfg(test)]
mod breakdown_calculator_tests;
