use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::portfolio::positions::percent_of;

/// Move of a price against a reference open.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceChange {
    pub price: Decimal,
    pub open: Decimal,
    pub change: Decimal,
    /// Percent change; zero when the open is not positive
    pub percent: Decimal,
}

pub fn price_change(price: Decimal, open: Decimal) -> PriceChange {
    let change = price.saturating_sub(open);
    let percent = percent_of(change, open);
    PriceChange {
        price,
        open,
        change,
        percent,
    }
}

/// Mean of the last `window` closes, or `None` with fewer points.
pub fn simple_moving_average(closes: &[f64], window: usize) -> Option<f64> {
    if window == 0 || closes.len() < window {
        return None;
    }
    let tail = &closes[closes.len() - window..];
    Some(tail.iter().sum::<f64>() / window as f64)
}
