use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::Context;
use finboard_core::fx::{CurrencyMode, CurrencyRates};
use finboard_core::settings::DisplaySettings;
use rust_decimal::Decimal;

pub struct Config {
    pub snapshot_path: PathBuf,
    /// Key the cash/positions object is nested under, e.g. `IBKR_account`
    pub account_key: Option<String>,
    pub rates: CurrencyRates,
    pub display: DisplaySettings,
    pub tick: Duration,
    pub json_logs: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key/value source; `from_env` passes the
    /// process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let env_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());
        let env_decimal = |key: &str, default: &str| -> anyhow::Result<Decimal> {
            let raw = env_or(key, default);
            Decimal::from_str(raw.trim()).with_context(|| format!("Invalid {}: {}", key, raw))
        };

        let snapshot_path = PathBuf::from(env_or("FB_SNAPSHOT_PATH", "./data/account.json"));
        let account_key = lookup("FB_ACCOUNT_KEY")
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        let rates = CurrencyRates::new(
            env_decimal("FB_USD_SGD", "1.35")?,
            env_decimal("FB_USD_CNY", "7.20")?,
        )?;

        let mut display = match lookup("FB_SETTINGS_PATH") {
            Some(path) => {
                let raw = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read settings file {}", path))?;
                serde_json::from_str::<DisplaySettings>(&raw)
                    .with_context(|| format!("Invalid settings file {}", path))?
            }
            None => DisplaySettings::default(),
        };
        if let Some(code) = lookup("FB_CURRENCY") {
            display.currency = CurrencyMode::from_str(&code)?;
        }

        let raw_tick = env_or("FB_TICK_SECS", "5");
        let tick_secs: u64 = raw_tick
            .trim()
            .parse()
            .with_context(|| format!("Invalid FB_TICK_SECS: {}", raw_tick))?;
        let json_logs = env_or("FB_LOG_FORMAT", "text").eq_ignore_ascii_case("json");

        Ok(Self {
            snapshot_path,
            account_key,
            rates,
            display,
            tick: Duration::from_secs(tick_secs.max(1)),
            json_logs,
        })
    }
}
