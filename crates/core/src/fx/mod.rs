//! FX module - display currencies, exchange rates and locale-stable formatting.

mod currency_format;
mod fx_model;

pub use currency_format::{
    format_currency, format_currency_from_sgd_base, format_money, format_number,
    format_percent, format_signed_percent,
};
pub use fx_model::{CurrencyMode, CurrencyRates};
