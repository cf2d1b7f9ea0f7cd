//! Per-position and portfolio-level return math.
//!
//! Non-positive denominators are an ordinary state (a brand-new, empty
//! portfolio) and resolve to zero. None of the return helpers produce an
//! error, NaN or infinity, and none panic: plain products saturate at the
//! decimal range and ratios that overflow resolve to zero. Only the checked
//! products used by the breakdown calculator fail, on decimal overflow.

use num_traits::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::DAYS_PER_YEAR;
use crate::errors::{CalculatorError, Result};
use crate::portfolio::snapshot::Position;

impl Position {
    /// `cost * quantity`; negative for shorts.
    pub fn total_cost(&self) -> Decimal {
        self.cost.saturating_mul(self.quantity)
    }

    /// `price * quantity`; negative for shorts.
    pub fn market_value(&self) -> Decimal {
        self.price.saturating_mul(self.quantity)
    }

    pub fn unrealized_pnl(&self) -> Decimal {
        self.market_value().saturating_sub(self.total_cost())
    }

    /// Share of `total_balance` held in this position, in percent.
    pub fn percent_of_portfolio(&self, total_balance: Decimal) -> Decimal {
        percent_of(self.market_value(), total_balance)
    }

    pub fn pnl_percent(&self) -> Decimal {
        pnl_percent(self.unrealized_pnl(), self.total_cost())
    }

    pub(crate) fn checked_total_cost(&self) -> Result<Decimal> {
        self.cost.checked_mul(self.quantity).ok_or_else(|| {
            CalculatorError::Overflow {
                symbol: self.symbol.clone(),
                operation: "total cost",
            }
            .into()
        })
    }

    pub(crate) fn checked_market_value(&self) -> Result<Decimal> {
        self.price.checked_mul(self.quantity).ok_or_else(|| {
            CalculatorError::Overflow {
                symbol: self.symbol.clone(),
                operation: "market value",
            }
            .into()
        })
    }
}

/// `part / whole * 100`, or zero when `whole <= 0` or the ratio overflows.
pub fn percent_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    part.checked_div(whole)
        .and_then(|ratio| ratio.checked_mul(dec!(100)))
        .unwrap_or(Decimal::ZERO)
}

/// `pnl / cost * 100`, or zero when `cost <= 0`.
pub fn pnl_percent(pnl: Decimal, cost: Decimal) -> Decimal {
    percent_of(pnl, cost)
}

/// Compound annual growth rate, in percent:
/// `((current / original) ^ (365 / days_elapsed) - 1) * 100`.
///
/// Returns zero when `days_elapsed <= 0` or `original <= 0`, and when the
/// result is not representable (negative `current`, overflow).
pub fn annualized_return(current: Decimal, original: Decimal, days_elapsed: f64) -> Decimal {
    if days_elapsed <= 0.0 || original <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    let (Some(current), Some(original)) = (current.to_f64(), original.to_f64()) else {
        return Decimal::ZERO;
    };

    let growth = (current / original).powf(DAYS_PER_YEAR / days_elapsed);
    let pct = (growth - 1.0) * 100.0;
    if !pct.is_finite() {
        return Decimal::ZERO;
    }
    Decimal::from_f64(pct).unwrap_or(Decimal::ZERO)
}
