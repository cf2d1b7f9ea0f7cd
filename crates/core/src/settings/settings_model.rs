use serde::{Deserialize, Serialize};

use crate::fx::CurrencyMode;
use crate::market_session::RefreshPolicy;

/// Separators used when rendering numbers.
///
/// Formatting never consults the host locale; callers pass one of these so
/// the same figures render identically on every machine.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NumberLocale {
    pub thousands_separator: char,
    pub decimal_separator: char,
}

impl NumberLocale {
    /// `1,234.56`
    pub const EN_US: NumberLocale = NumberLocale {
        thousands_separator: ',',
        decimal_separator: '.',
    };
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self::EN_US
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DisplaySettings {
    /// Currency the dashboard renders money values in
    #[serde(default)]
    pub currency: CurrencyMode,
    #[serde(default)]
    pub locale: NumberLocale,
    #[serde(default)]
    pub refresh: RefreshPolicy,
}
