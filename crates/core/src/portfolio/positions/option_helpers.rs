//! Option contract helpers and display ordering of positions.

use std::cmp::Ordering;

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::constants::{DISPLAY_DECIMAL_PRECISION, OPTION_CONTRACT_MULTIPLIER};
use crate::errors::{Result, ValidationError};
use crate::portfolio::snapshot::{OptionRight, Position};

/// Builds the OCC contract symbol, e.g. `AAPL251219C00150000`.
///
/// The strike is encoded in thousandths and zero-padded to eight digits.
pub fn occ_symbol(root: &str, expiry: NaiveDate, right: OptionRight, strike: Decimal) -> Result<String> {
    if strike < Decimal::ZERO {
        return Err(ValidationError::InvalidInput(format!(
            "negative strike {} for {}",
            strike, root
        ))
        .into());
    }
    let encoded = strike
        .checked_mul(dec!(1000))
        .map(|millis| millis.trunc().to_string())
        .unwrap_or_default();
    if encoded.is_empty() || encoded.len() > 8 {
        return Err(ValidationError::InvalidInput(format!(
            "strike {} for {} does not fit the OCC encoding",
            strike, root
        ))
        .into());
    }
    Ok(format!(
        "{}{}{}{:0>8}",
        root.trim().to_ascii_uppercase(),
        expiry.format("%y%m%d"),
        right.code(),
        encoded
    ))
}

impl Position {
    /// Quote symbol: the OCC symbol for options, the ticker otherwise.
    pub fn quote_symbol(&self) -> Result<String> {
        match &self.option {
            Some(contract) => occ_symbol(&self.symbol, contract.expiry, contract.right, contract.strike),
            None => Ok(self.symbol.clone()),
        }
    }
}

/// Scales a per-share Greek to the position: `raw * 100 * quantity`, 2 dp.
pub fn contract_greek(raw: Decimal, quantity: Decimal) -> Decimal {
    raw.saturating_mul(OPTION_CONTRACT_MULTIPLIER)
        .saturating_mul(quantity)
        .round_dp_with_strategy(
        DISPLAY_DECIMAL_PRECISION,
        RoundingStrategy::MidpointAwayFromZero,
    )
}

/// Per-contract mid price from a per-share bid/ask.
pub fn option_mid_price(bid: Decimal, ask: Decimal) -> Decimal {
    (bid / dec!(2))
        .saturating_add(ask / dec!(2))
        .saturating_mul(OPTION_CONTRACT_MULTIPLIER)
}

/// Display order: non-options first in their original order, then options
/// by nearest expiry. The sort is stable.
pub fn sort_positions(positions: &mut [Position]) {
    positions.sort_by(|a, b| match (a.is_option(), b.is_option()) {
        (false, false) => Ordering::Equal,
        (false, true) => Ordering::Less,
        (true, false) => Ordering::Greater,
        (true, true) => a.expiry().cmp(&b.expiry()),
    });
}
