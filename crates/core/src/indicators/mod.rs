//! Market indicators shown next to the portfolio: price change and AHR999.

mod ahr999;
mod price_change;

pub use ahr999::*;
pub use price_change::*;
