//! AHR999 bitcoin valuation index.
//!
//! `index = (price / sma200) * (price / growth_valuation)` where the growth
//! valuation is `10 ^ (5.84 * log10(coin_age_days) - 17.01)`.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Moving-average window the index is defined over.
pub const AHR999_SMA_WINDOW: usize = 200;

const GROWTH_SLOPE: f64 = 5.84;
const GROWTH_INTERCEPT: f64 = 17.01;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Ahr999Zone {
    /// Below 0.45
    Bottom,
    /// 0.45 to 1.2
    Accumulate,
    /// 1.2 to 2.0
    Elevated,
    /// 2.0 and above
    Risk,
}

impl Ahr999Zone {
    pub const BOTTOM_CEILING: f64 = 0.45;
    pub const ACCUMULATE_CEILING: f64 = 1.2;
    pub const ELEVATED_CEILING: f64 = 2.0;

    pub fn classify(index: f64) -> Ahr999Zone {
        if index < Self::BOTTOM_CEILING {
            Ahr999Zone::Bottom
        } else if index < Self::ACCUMULATE_CEILING {
            Ahr999Zone::Accumulate
        } else if index < Self::ELEVATED_CEILING {
            Ahr999Zone::Elevated
        } else {
            Ahr999Zone::Risk
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Ahr999Zone::Bottom => "Undervalued",
            Ahr999Zone::Accumulate => "Accumulate",
            Ahr999Zone::Elevated => "Elevated",
            Ahr999Zone::Risk => "High Risk",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Ahr999Reading {
    pub price: f64,
    pub sma200: f64,
    pub valuation: f64,
    pub index: f64,
    pub zone: Ahr999Zone,
}

fn genesis() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2009, 1, 3, 0, 0, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Fractional days since the bitcoin genesis block (2009-01-03 UTC).
pub fn coin_age_days(now: DateTime<Utc>) -> f64 {
    (now - genesis()).num_seconds() as f64 / 86_400.0
}

/// Growth-curve valuation for a coin age; `None` for non-positive ages.
pub fn growth_valuation(coin_age_days: f64) -> Option<f64> {
    if coin_age_days <= 0.0 {
        return None;
    }
    Some(10f64.powf(GROWTH_SLOPE * coin_age_days.log10() - GROWTH_INTERCEPT))
}

/// Computes the index. Degenerate inputs (non-positive price, average or
/// age) yield `None`.
pub fn ahr999(price: f64, sma200: f64, coin_age_days: f64) -> Option<Ahr999Reading> {
    if price <= 0.0 || sma200 <= 0.0 {
        return None;
    }
    let valuation = growth_valuation(coin_age_days)?;
    let index = (price / sma200) * (price / valuation);
    if !index.is_finite() {
        return None;
    }
    Some(Ahr999Reading {
        price,
        sma200,
        valuation,
        index,
        zone: Ahr999Zone::classify(index),
    })
}

/// Price at which the index would equal `target`:
/// `sqrt(target * sma200 * valuation)`.
pub fn ahr999_threshold_price(target: f64, sma200: f64, valuation: f64) -> Option<f64> {
    let product = target * sma200 * valuation;
    if product <= 0.0 || !product.is_finite() {
        return None;
    }
    Some(product.sqrt())
}
