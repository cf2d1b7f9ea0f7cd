//! Portfolio allocation module - legend rows and donut chart geometry.

mod allocation_builder;
mod allocation_model;

pub use allocation_builder::*;
pub use allocation_model::*;
