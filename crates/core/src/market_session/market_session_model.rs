use std::fmt;

use serde::{Deserialize, Serialize};

/// Five-way classification of an instant against the exchange's hours.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum MarketSession {
    PreMarket,
    Open,
    PostMarket,
    Night,
    Closed,
}

impl MarketSession {
    pub fn as_str(&self) -> &'static str {
        match self {
            MarketSession::PreMarket => "pre-market",
            MarketSession::Open => "open",
            MarketSession::PostMarket => "post-market",
            MarketSession::Night => "night",
            MarketSession::Closed => "closed",
        }
    }

    /// Human-readable label for the status badge.
    pub fn label(&self) -> &'static str {
        match self {
            MarketSession::PreMarket => "Pre-Market",
            MarketSession::Open => "Market Open",
            MarketSession::PostMarket => "After Hours",
            MarketSession::Night => "Overnight",
            MarketSession::Closed => "Market Closed",
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, MarketSession::Open)
    }

    /// Regular or extended-hours trading is under way.
    pub fn is_trading(&self) -> bool {
        matches!(
            self,
            MarketSession::PreMarket | MarketSession::Open | MarketSession::PostMarket
        )
    }
}

impl fmt::Display for MarketSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MarketStatusInfo {
    pub status: MarketSession,
    pub is_open: bool,
    /// `HH:MM` in the exchange timezone
    pub time_label: String,
    /// Timezone abbreviation, e.g. `EST` or `EDT`
    pub timezone: String,
}

impl MarketStatusInfo {
    pub fn label(&self) -> &'static str {
        self.status.label()
    }
}
