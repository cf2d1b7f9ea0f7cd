use chrono::{DateTime, NaiveDate, Timelike, Utc};
use chrono_tz::Tz;

/// Timezone of the reference exchange.
/// All session classification and date derivation happens in this zone.
pub const DEFAULT_EXCHANGE_TZ: Tz = chrono_tz::America::New_York;

/// Projects a UTC instant into the given timezone.
pub fn exchange_time(instant: DateTime<Utc>, tz: Tz) -> DateTime<Tz> {
    instant.with_timezone(&tz)
}

/// Converts a UTC instant to a trading date in the given timezone.
pub fn exchange_date_from_utc(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    exchange_time(instant, tz).date_naive()
}

/// Minutes elapsed since local midnight (0..1440).
pub fn minutes_since_midnight<T: Timelike>(time: &T) -> u32 {
    time.hour() * 60 + time.minute()
}

/// Fractional days between two instants; negative when `end` precedes `start`.
pub fn days_between(start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
    (end - start).num_seconds() as f64 / 86_400.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_exchange_date_crosses_midnight() {
        // 02:30 UTC is still the previous evening in New York
        let instant = Utc.with_ymd_and_hms(2025, 3, 4, 2, 30, 0).unwrap();
        assert_eq!(
            exchange_date_from_utc(instant, DEFAULT_EXCHANGE_TZ),
            NaiveDate::from_ymd_opt(2025, 3, 3).unwrap()
        );
    }

    #[test]
    fn test_minutes_since_midnight() {
        let instant = Utc.with_ymd_and_hms(2025, 7, 1, 13, 30, 0).unwrap();
        // 09:30 EDT
        assert_eq!(
            minutes_since_midnight(&exchange_time(instant, DEFAULT_EXCHANGE_TZ)),
            9 * 60 + 30
        );
    }

    #[test]
    fn test_days_between_is_fractional_and_signed() {
        let start = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2025, 1, 2, 12, 0, 0).unwrap();
        assert_eq!(days_between(start, end), 1.5);
        assert_eq!(days_between(end, start), -1.5);
    }
}
