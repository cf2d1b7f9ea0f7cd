//! Single-pass aggregation of a snapshot into an [`AssetBreakdown`].

use log::{debug, error};
use rust_decimal::Decimal;

use super::{AssetBreakdown, PortfolioSummary};
use crate::errors::{CalculatorError, Error, Result, ValidationError};
use crate::portfolio::positions::percent_of;
use crate::portfolio::snapshot::{AssetClass, PortfolioSnapshot, Position};

fn checked_add(acc: Decimal, value: Decimal, symbol: &str, operation: &'static str) -> Result<Decimal> {
    acc.checked_add(value).ok_or_else(|| {
        Error::Calculation(CalculatorError::Overflow {
            symbol: symbol.to_string(),
            operation,
        })
    })
}

/// Routes every position into its asset-class bucket and totals the result.
///
/// A position tagged with a class that cannot hold positions aborts the
/// calculation; a partial breakdown would corrupt every downstream
/// percentage. The result does not depend on position order.
pub fn calculate_asset_breakdown(snapshot: &PortfolioSnapshot) -> Result<AssetBreakdown> {
    let mut breakdown = AssetBreakdown {
        cash: snapshot.cash,
        ..AssetBreakdown::default()
    };

    for position in &snapshot.positions {
        accumulate_position(&mut breakdown, position)?;
    }

    let mut total_cost = snapshot.cash;
    let mut total_market_value = snapshot.cash;
    for class in AssetClass::INVESTED {
        let totals = breakdown.totals(class);
        total_cost = checked_add(total_cost, totals.cost, class.as_str(), "total cost")?;
        total_market_value = checked_add(
            total_market_value,
            totals.market_value,
            class.as_str(),
            "total market value",
        )?;
    }
    breakdown.total_cost = total_cost;
    breakdown.total_market_value = total_market_value;

    debug!(
        "Calculated asset breakdown for {} positions: cost={}, market_value={}",
        snapshot.positions.len(),
        breakdown.total_cost,
        breakdown.total_market_value
    );
    Ok(breakdown)
}

fn accumulate_position(breakdown: &mut AssetBreakdown, position: &Position) -> Result<()> {
    let cost = position.checked_total_cost()?;
    let market_value = position.checked_market_value()?;
    let symbol = position.symbol.as_str();

    let Some(bucket) = breakdown.invested_mut(position.asset_class) else {
        error!(
            "Position {} is tagged '{}', which cannot hold positions",
            symbol, position.asset_class
        );
        return Err(ValidationError::UnsupportedAssetClass {
            symbol: symbol.to_string(),
            tag: position.asset_class.to_string(),
        }
        .into());
    };

    bucket.cost = checked_add(bucket.cost, cost, symbol, "class cost")?;
    bucket.market_value = checked_add(bucket.market_value, market_value, symbol, "class market value")?;
    let pnl = checked_add(market_value, -cost, symbol, "unrealized pnl")?;
    bucket.unrealized_pnl = checked_add(bucket.unrealized_pnl, pnl, symbol, "class unrealized pnl")?;
    Ok(())
}

impl AssetBreakdown {
    pub fn from_snapshot(snapshot: &PortfolioSnapshot) -> Result<AssetBreakdown> {
        calculate_asset_breakdown(snapshot)
    }
}

impl PortfolioSummary {
    /// Headline figures for a breakdown and the positions it was built from.
    pub fn from_breakdown(breakdown: &AssetBreakdown, positions: &[Position]) -> PortfolioSummary {
        let net_liquidation = breakdown.total_market_value;
        let utilization = net_liquidation
            .checked_sub(breakdown.cash)
            .map(|deployed| percent_of(deployed, net_liquidation))
            .unwrap_or(Decimal::ZERO);
        let total_theta = positions
            .iter()
            .filter_map(|p| p.option.as_ref())
            .fold(Decimal::ZERO, |acc, contract| acc.saturating_add(contract.greeks.theta));

        PortfolioSummary {
            cash: breakdown.cash,
            net_liquidation,
            total_unrealized_pnl: breakdown.total_unrealized_pnl(),
            total_pnl_percent: breakdown.total_pnl_percent(),
            total_theta,
            utilization,
        }
    }
}
