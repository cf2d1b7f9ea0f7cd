//! Asset breakdown models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::portfolio::positions::pnl_percent;
use crate::portfolio::snapshot::AssetClass;

/// Cost, market value and unrealized PnL of one asset class, in USD.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ClassTotals {
    pub cost: Decimal,
    pub market_value: Decimal,
    pub unrealized_pnl: Decimal,
}

impl ClassTotals {
    /// Cash is valued at par and carries no PnL.
    pub fn cash(amount: Decimal) -> Self {
        ClassTotals {
            cost: amount,
            market_value: amount,
            unrealized_pnl: Decimal::ZERO,
        }
    }
}

/// Per-asset-class aggregation of a portfolio snapshot.
///
/// Produced fresh by [`super::calculate_asset_breakdown`]; for every
/// invested class `unrealized_pnl == market_value - cost`, and the grand
/// totals equal the class sums plus cash.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AssetBreakdown {
    pub cash: Decimal,
    pub stock: ClassTotals,
    pub option: ClassTotals,
    pub etf: ClassTotals,
    pub crypto: ClassTotals,
    pub total_cost: Decimal,
    pub total_market_value: Decimal,
}

impl AssetBreakdown {
    pub fn totals(&self, class: AssetClass) -> ClassTotals {
        match class {
            AssetClass::Cash => ClassTotals::cash(self.cash),
            AssetClass::Stock => self.stock,
            AssetClass::Option => self.option,
            AssetClass::Etf => self.etf,
            AssetClass::Crypto => self.crypto,
        }
    }

    pub fn market_value(&self, class: AssetClass) -> Decimal {
        self.totals(class).market_value
    }

    pub(crate) fn invested_mut(&mut self, class: AssetClass) -> Option<&mut ClassTotals> {
        match class {
            AssetClass::Cash => None,
            AssetClass::Stock => Some(&mut self.stock),
            AssetClass::Option => Some(&mut self.option),
            AssetClass::Etf => Some(&mut self.etf),
            AssetClass::Crypto => Some(&mut self.crypto),
        }
    }

    /// Sum of unrealized PnL over the invested classes.
    pub fn total_unrealized_pnl(&self) -> Decimal {
        AssetClass::INVESTED
            .iter()
            .fold(Decimal::ZERO, |acc, class| {
                acc.saturating_add(self.totals(*class).unrealized_pnl)
            })
    }

    /// Cost basis of everything except cash.
    pub fn invested_cost(&self) -> Decimal {
        AssetClass::INVESTED
            .iter()
            .fold(Decimal::ZERO, |acc, class| acc.saturating_add(self.totals(*class).cost))
    }

    /// Total unrealized PnL relative to invested cost, in percent.
    pub fn total_pnl_percent(&self) -> Decimal {
        pnl_percent(self.total_unrealized_pnl(), self.invested_cost())
    }
}

/// Headline figures shown above the allocation chart.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub cash: Decimal,
    /// Cash plus the market value of every position.
    pub net_liquidation: Decimal,
    pub total_unrealized_pnl: Decimal,
    pub total_pnl_percent: Decimal,
    /// Position-level theta summed over option positions.
    pub total_theta: Decimal,
    /// Share of net liquidation deployed outside cash, in percent.
    pub utilization: Decimal,
}
