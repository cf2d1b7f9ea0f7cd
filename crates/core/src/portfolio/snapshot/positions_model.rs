use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// Categorical bucket used for aggregation.
///
/// Variants are declared in canonical display order; `Ord` follows it.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum AssetClass {
    Cash,
    Stock,
    Option,
    Etf,
    Crypto,
}

impl AssetClass {
    /// Fixed ordering used by every breakdown, legend and chart.
    pub const ALL: [AssetClass; 5] = [
        AssetClass::Cash,
        AssetClass::Stock,
        AssetClass::Option,
        AssetClass::Etf,
        AssetClass::Crypto,
    ];

    /// Classes a position can belong to. Cash is a scalar on the snapshot.
    pub const INVESTED: [AssetClass; 4] = [
        AssetClass::Stock,
        AssetClass::Option,
        AssetClass::Etf,
        AssetClass::Crypto,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AssetClass::Cash => "cash",
            AssetClass::Stock => "stock",
            AssetClass::Option => "option",
            AssetClass::Etf => "etf",
            AssetClass::Crypto => "crypto",
        }
    }

    /// Display name for legends.
    pub fn label(&self) -> &'static str {
        match self {
            AssetClass::Cash => "Cash",
            AssetClass::Stock => "Stock",
            AssetClass::Option => "Option",
            AssetClass::Etf => "ETF",
            AssetClass::Crypto => "Crypto",
        }
    }

    /// Chart color (hex code).
    pub fn color(&self) -> &'static str {
        match self {
            AssetClass::Cash => "#d4d4d4",
            AssetClass::Stock => "#a3a3a3",
            AssetClass::Option => "#737373",
            AssetClass::Etf => "#525252",
            AssetClass::Crypto => "#f59e0b",
        }
    }

    /// Resolves a position tag to an asset class.
    ///
    /// Accepts the lowercase class names as well as broker security types
    /// (`STK`, `OPT`, `ETF`, `CRYPTO`). Cash is rejected: it never appears
    /// as a position.
    pub fn from_position_tag(symbol: &str, tag: &str) -> Result<AssetClass> {
        let class = match tag.trim().to_ascii_uppercase().as_str() {
            "STOCK" | "STK" => AssetClass::Stock,
            "OPTION" | "OPT" => AssetClass::Option,
            "ETF" => AssetClass::Etf,
            "CRYPTO" | "CRYPTOCURRENCY" => AssetClass::Crypto,
            _ => {
                return Err(ValidationError::UnsupportedAssetClass {
                    symbol: symbol.to_string(),
                    tag: tag.to_string(),
                }
                .into())
            }
        };
        Ok(class)
    }
}

impl fmt::Display for AssetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum OptionRight {
    Call,
    Put,
}

impl OptionRight {
    /// OCC code letter.
    pub fn code(&self) -> char {
        match self {
            OptionRight::Call => 'C',
            OptionRight::Put => 'P',
        }
    }

    pub fn parse(symbol: &str, raw: &str) -> Result<OptionRight> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "C" | "CALL" => Ok(OptionRight::Call),
            "P" | "PUT" => Ok(OptionRight::Put),
            _ => Err(ValidationError::InvalidInput(format!(
                "option right '{}' for {} is neither call nor put",
                raw, symbol
            ))
            .into()),
        }
    }
}

/// Position-level Greeks: per-share values scaled by the contract multiplier
/// and the signed quantity (see `contract_greek`).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Greeks {
    pub delta: Decimal,
    pub gamma: Decimal,
    pub theta: Decimal,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OptionContract {
    pub strike: Decimal,
    pub expiry: NaiveDate,
    pub right: OptionRight,
    #[serde(default)]
    pub greeks: Greeks,
}

/// One held instrument, priced for the current refresh cycle.
///
/// For options `cost` and `price` are per contract, so
/// `quantity * price` is the market value for every class alike.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub symbol: String,
    pub asset_class: AssetClass,
    /// Signed; negative for shorts.
    pub quantity: Decimal,
    /// Unit cost basis.
    pub cost: Decimal,
    /// Current unit price.
    pub price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub option: Option<OptionContract>,
}

impl Position {
    pub fn new(
        symbol: impl Into<String>,
        asset_class: AssetClass,
        quantity: Decimal,
        cost: Decimal,
        price: Decimal,
    ) -> Self {
        Position {
            symbol: symbol.into(),
            asset_class,
            quantity,
            cost,
            price,
            option: None,
        }
    }

    pub fn with_option(mut self, contract: OptionContract) -> Self {
        self.option = Some(contract);
        self
    }

    pub fn is_option(&self) -> bool {
        self.asset_class == AssetClass::Option
    }

    pub fn expiry(&self) -> Option<NaiveDate> {
        self.option.as_ref().map(|o| o.expiry)
    }
}

/// Cash plus positions, as handed over by the account/quote layer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSnapshot {
    /// Cash balance in USD.
    pub cash: Decimal,
    #[serde(default)]
    pub positions: Vec<Position>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub as_of: Option<NaiveDateTime>,
}

impl PortfolioSnapshot {
    pub fn new(cash: Decimal, positions: Vec<Position>) -> Self {
        PortfolioSnapshot {
            cash,
            positions,
            as_of: None,
        }
    }
}
