use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// Currency the dashboard renders money values in.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CurrencyMode {
    #[default]
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "SGD")]
    Sgd,
    #[serde(rename = "CNY")]
    Cny,
}

impl CurrencyMode {
    pub const ALL: [CurrencyMode; 3] = [CurrencyMode::Usd, CurrencyMode::Sgd, CurrencyMode::Cny];

    /// ISO 4217 code.
    pub fn code(&self) -> &'static str {
        match self {
            CurrencyMode::Usd => "USD",
            CurrencyMode::Sgd => "SGD",
            CurrencyMode::Cny => "CNY",
        }
    }

    /// Symbol placed in front of formatted amounts.
    pub fn prefix(&self) -> &'static str {
        match self {
            CurrencyMode::Usd => "$",
            CurrencyMode::Sgd => "S$",
            CurrencyMode::Cny => "¥",
        }
    }
}

impl fmt::Display for CurrencyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for CurrencyMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let code = s.trim();
        CurrencyMode::ALL
            .into_iter()
            .find(|mode| mode.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| Error::UnsupportedCurrency(code.to_string()))
    }
}

/// USD-quoted exchange rates supplied by the quote feed.
///
/// Both rates are strictly positive; construction and deserialization reject
/// anything else so conversions never divide by zero.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase", try_from = "CurrencyRatesRecord")]
pub struct CurrencyRates {
    usd_to_sgd: Decimal,
    usd_to_cny: Decimal,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CurrencyRatesRecord {
    usd_to_sgd: Decimal,
    usd_to_cny: Decimal,
}

impl TryFrom<CurrencyRatesRecord> for CurrencyRates {
    type Error = Error;

    fn try_from(record: CurrencyRatesRecord) -> Result<Self> {
        CurrencyRates::new(record.usd_to_sgd, record.usd_to_cny)
    }
}

impl CurrencyRates {
    pub fn new(usd_to_sgd: Decimal, usd_to_cny: Decimal) -> Result<Self> {
        if usd_to_sgd <= Decimal::ZERO {
            return Err(Error::InvalidExchangeRate(format!(
                "USD->SGD must be positive, got {}",
                usd_to_sgd
            )));
        }
        if usd_to_cny <= Decimal::ZERO {
            return Err(Error::InvalidExchangeRate(format!(
                "USD->CNY must be positive, got {}",
                usd_to_cny
            )));
        }
        Ok(Self {
            usd_to_sgd,
            usd_to_cny,
        })
    }

    pub fn usd_to_sgd(&self) -> Decimal {
        self.usd_to_sgd
    }

    pub fn usd_to_cny(&self) -> Decimal {
        self.usd_to_cny
    }

    /// Units of `mode` per one USD.
    pub fn rate_from_usd(&self, mode: CurrencyMode) -> Decimal {
        match mode {
            CurrencyMode::Usd => Decimal::ONE,
            CurrencyMode::Sgd => self.usd_to_sgd,
            CurrencyMode::Cny => self.usd_to_cny,
        }
    }

    /// Amounts beyond the decimal range saturate at `Decimal::MAX`/`MIN`.
    pub fn convert_from_usd(&self, amount_usd: Decimal, to: CurrencyMode) -> Decimal {
        amount_usd.saturating_mul(self.rate_from_usd(to))
    }

    /// Amounts beyond the decimal range saturate at `Decimal::MAX`/`MIN`.
    pub fn convert_to_usd(&self, amount: Decimal, from: CurrencyMode) -> Decimal {
        amount
            .checked_div(self.rate_from_usd(from))
            .unwrap_or(if amount.is_sign_negative() {
                Decimal::MIN
            } else {
                Decimal::MAX
            })
    }

    /// Converts between any two display currencies, pivoting through USD.
    pub fn convert(&self, amount: Decimal, from: CurrencyMode, to: CurrencyMode) -> Decimal {
        if from == to {
            return amount;
        }
        self.convert_from_usd(self.convert_to_usd(amount, from), to)
    }
}
