use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::MarketSession;

/// Polling cadence for the feeds the dashboard refreshes.
///
/// Market-gated feeds (indexes, quotes) poll quickly while any session is
/// trading and slowly otherwise; slow indicators (sentiment, valuation
/// indices) poll on their own fixed interval.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RefreshPolicy {
    pub active_feed_secs: u64,
    pub idle_feed_secs: u64,
    pub indicator_secs: u64,
}

impl Default for RefreshPolicy {
    fn default() -> Self {
        RefreshPolicy {
            active_feed_secs: 10,
            idle_feed_secs: 300,
            indicator_secs: 600,
        }
    }
}

impl RefreshPolicy {
    pub fn market_feed_interval(&self, session: MarketSession) -> Duration {
        if session.is_trading() {
            Duration::from_secs(self.active_feed_secs)
        } else {
            Duration::from_secs(self.idle_feed_secs)
        }
    }

    pub fn indicator_interval(&self) -> Duration {
        Duration::from_secs(self.indicator_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_market_feed_interval_follows_session() {
        let policy = RefreshPolicy::default();
        for session in [
            MarketSession::PreMarket,
            MarketSession::Open,
            MarketSession::PostMarket,
        ] {
            assert_eq!(policy.market_feed_interval(session), Duration::from_secs(10));
        }
        for session in [MarketSession::Night, MarketSession::Closed] {
            assert_eq!(policy.market_feed_interval(session), Duration::from_secs(300));
        }
        assert_eq!(policy.indicator_interval(), Duration::from_secs(600));
    }
}
