//! Position math, option helpers and display ordering.

mod option_helpers;
mod position_math;

pub use option_helpers::*;
pub use position_math::*;
