//! Locale-stable number, money and percent formatting.
//!
//! Every figure is rounded half away from zero to exactly two decimal places
//! and grouped with the separators of the supplied [`NumberLocale`].

use rust_decimal::{Decimal, RoundingStrategy};

use super::{CurrencyMode, CurrencyRates};
use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::settings::NumberLocale;

fn round_for_display(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(
        DISPLAY_DECIMAL_PRECISION,
        RoundingStrategy::MidpointAwayFromZero,
    )
}

/// Inserts `separator` between every group of three integer digits.
fn group_thousands(int_part: &str, separator: char) -> String {
    let len = int_part.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

/// Returns (is_negative, unsigned body) for a rounded value.
fn split_sign(value: Decimal, locale: &NumberLocale) -> (bool, String) {
    let rounded = round_for_display(value);
    // -0.004 rounds to zero and must not render as "-0.00"
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));
    let body = format!(
        "{}{}{}",
        group_thousands(int_part, locale.thousands_separator),
        locale.decimal_separator,
        frac_part
    );
    (negative, body)
}

/// `1234.5` -> `1,234.50`
pub fn format_number(value: Decimal, locale: &NumberLocale) -> String {
    match split_sign(value, locale) {
        (true, body) => format!("-{}", body),
        (false, body) => body,
    }
}

/// `-1234.5, "$"` -> `-$1,234.50`
pub fn format_money(value: Decimal, prefix: &str, locale: &NumberLocale) -> String {
    match split_sign(value, locale) {
        (true, body) => format!("-{}{}", prefix, body),
        (false, body) => format!("{}{}", prefix, body),
    }
}

/// `12.345` -> `12.35%`
pub fn format_percent(value: Decimal, locale: &NumberLocale) -> String {
    format!("{}%", format_number(value, locale))
}

/// Like [`format_percent`] but always carries a sign: `+1.20%`, `-0.35%`.
pub fn format_signed_percent(value: Decimal, locale: &NumberLocale) -> String {
    match split_sign(value, locale) {
        (true, body) => format!("-{}%", body),
        (false, body) => format!("+{}%", body),
    }
}

/// Formats a USD-denominated amount in the requested display currency.
pub fn format_currency(
    value_usd: Decimal,
    mode: CurrencyMode,
    rates: &CurrencyRates,
    locale: &NumberLocale,
) -> String {
    let converted = rates.convert_from_usd(value_usd, mode);
    format_money(converted, mode.prefix(), locale)
}

/// Formats an SGD-denominated amount in the requested display currency.
///
/// The stored value is normalized to USD first, so CNY output goes
/// SGD -> USD -> CNY rather than applying the CNY rate to SGD figures.
pub fn format_currency_from_sgd_base(
    value_sgd: Decimal,
    mode: CurrencyMode,
    rates: &CurrencyRates,
    locale: &NumberLocale,
) -> String {
    let converted = rates.convert(value_sgd, CurrencyMode::Sgd, mode);
    format_money(converted, mode.prefix(), locale)
}
