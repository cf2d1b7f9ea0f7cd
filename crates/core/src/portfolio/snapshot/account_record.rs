//! Ingestion of the persisted account record into a [`PortfolioSnapshot`].
//!
//! The record comes in two shapes: the broker export
//! (`secType`/`position`/`avgCost`) and the normalized snapshot
//! (`assetClass`/`quantity`/`cost`). Both are read through [`RawPosition`]
//! so every missing or unrecognized field surfaces as a typed validation
//! error instead of a serde message.
//!
//! Option terms are read from the nested `option` object when present (the
//! shape a serialized [`PortfolioSnapshot`] has, Greeks already
//! position-level) and from the flat broker keys otherwise, where the Greeks
//! are per share and get scaled by [`contract_greek`].

use chrono::{NaiveDate, NaiveDateTime};
use log::{debug, error};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

use super::{AssetClass, Greeks, OptionContract, OptionRight, PortfolioSnapshot, Position};
use crate::errors::{Error, Result, ValidationError};
use crate::portfolio::positions::contract_greek;

/// Nested option terms of the normalized shape.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct RawOptionTerms {
    pub strike: Option<Decimal>,
    pub expiry: Option<String>,
    pub right: Option<String>,
    #[serde(default)]
    pub greeks: Greeks,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct RawPosition {
    pub symbol: Option<String>,
    #[serde(alias = "secType")]
    pub asset_class: Option<String>,
    #[serde(alias = "position")]
    pub quantity: Option<Decimal>,
    #[serde(alias = "avgCost")]
    pub cost: Option<Decimal>,
    pub price: Option<Decimal>,
    pub right: Option<String>,
    pub strike: Option<Decimal>,
    pub expiry: Option<String>,
    pub delta: Option<Decimal>,
    pub gamma: Option<Decimal>,
    pub theta: Option<Decimal>,
    pub option: Option<RawOptionTerms>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct RawAccountRecord {
    pub cash: Option<Decimal>,
    #[serde(default)]
    pub positions: Vec<RawPosition>,
}

fn required<T>(value: Option<T>, symbol: &str, field: &str) -> Result<T> {
    value.ok_or_else(|| {
        Error::Validation(ValidationError::MissingField(format!("{}.{}", symbol, field)))
    })
}

/// Parses an option expiry in `YYYYMMDD` or `YYYY-MM-DD` form.
pub fn parse_expiry(raw: &str) -> Result<NaiveDate> {
    let trimmed = raw.trim();
    let format = if trimmed.contains('-') {
        "%Y-%m-%d"
    } else {
        "%Y%m%d"
    };
    Ok(NaiveDate::parse_from_str(trimmed, format)?)
}

impl RawPosition {
    pub fn into_position(self) -> Result<Position> {
        let symbol = self
            .symbol
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| ValidationError::MissingField("symbol".to_string()))?;
        let tag = required(self.asset_class, &symbol, "assetClass")?;
        let asset_class = AssetClass::from_position_tag(&symbol, &tag)?;
        let quantity = required(self.quantity, &symbol, "quantity")?;
        let cost = required(self.cost, &symbol, "cost")?;
        let price = required(self.price, &symbol, "price")?;

        let mut position = Position::new(symbol, asset_class, quantity, cost, price);
        if asset_class != AssetClass::Option {
            return Ok(position);
        }

        let symbol = position.symbol.as_str();
        let contract = match self.option {
            Some(terms) => OptionContract {
                strike: required(terms.strike, symbol, "option.strike")?,
                expiry: parse_expiry(&required(terms.expiry, symbol, "option.expiry")?)?,
                right: OptionRight::parse(symbol, &required(terms.right, symbol, "option.right")?)?,
                greeks: terms.greeks,
            },
            None => OptionContract {
                strike: required(self.strike, symbol, "strike")?,
                expiry: parse_expiry(&required(self.expiry, symbol, "expiry")?)?,
                right: OptionRight::parse(symbol, &required(self.right, symbol, "right")?)?,
                greeks: Greeks {
                    delta: contract_greek(self.delta.unwrap_or_default(), quantity),
                    gamma: contract_greek(self.gamma.unwrap_or_default(), quantity),
                    theta: contract_greek(self.theta.unwrap_or_default(), quantity),
                },
            },
        };
        position = position.with_option(contract);
        Ok(position)
    }
}

impl PortfolioSnapshot {
    /// Builds a snapshot from a raw record. Any invalid position aborts the
    /// whole conversion; no partial snapshot is returned.
    pub fn from_record(record: RawAccountRecord) -> Result<PortfolioSnapshot> {
        let cash = record
            .cash
            .ok_or_else(|| ValidationError::MissingField("cash".to_string()))?;
        let positions = record
            .positions
            .into_iter()
            .map(RawPosition::into_position)
            .collect::<Result<Vec<_>>>()?;
        Ok(PortfolioSnapshot::new(cash, positions))
    }
}

/// Parses a JSON account record into a snapshot.
///
/// When `account_key` is set the cash/positions object is read from that
/// key (e.g. `IBKR_account`); the optional `timestamp` is read from the
/// document root, falling back to the account object's `asOf`.
pub fn parse_account_record(json: &str, account_key: Option<&str>) -> Result<PortfolioSnapshot> {
    let root: Value = serde_json::from_str(json)?;
    let account = match account_key {
        Some(key) => root
            .get(key)
            .ok_or_else(|| ValidationError::MissingField(key.to_string()))?,
        None => &root,
    };

    let record: RawAccountRecord = serde_json::from_value(account.clone())?;
    let mut snapshot = PortfolioSnapshot::from_record(record).map_err(|e| {
        error!("Rejected account record: {}", e);
        e
    })?;

    snapshot.as_of = root
        .get("timestamp")
        .or_else(|| account.get("asOf"))
        .and_then(Value::as_str)
        .map(|ts| ts.parse::<NaiveDateTime>())
        .transpose()?;

    debug!(
        "Parsed account record: cash={}, {} positions",
        snapshot.cash,
        snapshot.positions.len()
    );
    Ok(snapshot)
}
