//! Pure classification of an instant into a [`MarketSession`].
//!
//! No state is kept between calls; callers re-evaluate on their own tick.

use chrono::{DateTime, Datelike, Utc, Weekday};
use chrono_tz::Tz;

use super::{MarketSession, MarketStatusInfo};
use crate::utils::time_utils::{exchange_time, minutes_since_midnight, DEFAULT_EXCHANGE_TZ};

const PRE_MARKET_START: u32 = 4 * 60;
const REGULAR_OPEN: u32 = 9 * 60 + 30;
const REGULAR_CLOSE: u32 = 16 * 60;
const POST_MARKET_END: u32 = 20 * 60;

fn is_weekday(weekday: Weekday) -> bool {
    !matches!(weekday, Weekday::Sat | Weekday::Sun)
}

/// Classifies local exchange time. First match wins:
/// night (20:00-04:00, every day), closed (weekend), pre-market,
/// open, post-market.
pub fn classify_session(weekday: Weekday, minutes: u32) -> MarketSession {
    if minutes >= POST_MARKET_END || minutes < PRE_MARKET_START {
        return MarketSession::Night;
    }
    if !is_weekday(weekday) {
        return MarketSession::Closed;
    }
    if minutes < REGULAR_OPEN {
        MarketSession::PreMarket
    } else if minutes < REGULAR_CLOSE {
        MarketSession::Open
    } else {
        MarketSession::PostMarket
    }
}

/// Session status of `instant` in the given exchange timezone.
pub fn market_status_in(instant: DateTime<Utc>, tz: Tz) -> MarketStatusInfo {
    let local = exchange_time(instant, tz);
    let status = classify_session(local.weekday(), minutes_since_midnight(&local));
    MarketStatusInfo {
        status,
        is_open: status.is_open(),
        time_label: local.format("%H:%M").to_string(),
        timezone: local.offset().to_string(),
    }
}

/// Session status of `instant` on the reference exchange.
pub fn market_status(instant: DateTime<Utc>) -> MarketStatusInfo {
    market_status_in(instant, DEFAULT_EXCHANGE_TZ)
}

/// Regular-hours check derived from the five-state machine.
pub fn is_market_open(instant: DateTime<Utc>) -> bool {
    market_status(instant).is_open
}
