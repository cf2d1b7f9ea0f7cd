//! Watch loop for the dashboard.
//!
//! Ticks on a short fixed interval, re-evaluates the market session every
//! tick and reloads the snapshot on the cadence the refresh policy assigns
//! to that session. A report is only emitted when it changed.

use chrono::Utc;
use finboard_core::market_session::{market_status, MarketSession};
use tokio::sync::watch;
use tokio::time::{interval, Duration, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::report::{load_report, print_report, DashboardReport};

#[derive(Default)]
struct WatchState {
    session: Option<MarketSession>,
    last_refresh: Option<Instant>,
    last_emitted: Option<DashboardReport>,
}

impl WatchState {
    /// Records the current session, returning `true` on a transition.
    fn observe_session(&mut self, session: MarketSession) -> bool {
        let changed = self.session != Some(session);
        self.session = Some(session);
        changed
    }

    fn refresh_due(&self, now: Instant, every: Duration) -> bool {
        match self.last_refresh {
            Some(at) => now.duration_since(at) >= every,
            None => true,
        }
    }

    /// Stores the report, returning `true` if it differs from the last one
    /// emitted. The market clock is ignored so a ticking time label alone
    /// does not count as a change.
    fn accept(&mut self, report: DashboardReport) -> bool {
        let changed = match &self.last_emitted {
            Some(prev) => {
                prev.summary != report.summary
                    || prev.allocation != report.allocation
                    || prev.positions != report.positions
                    || prev.market.status != report.market.status
            }
            None => true,
        };
        if changed {
            self.last_emitted = Some(report);
        }
        changed
    }
}

fn spawn_ctrl_c(shutdown_tx: watch::Sender<bool>) {
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
            return;
        }
        info!("Shutdown requested");
        let _ = shutdown_tx.send(true);
    });
}

pub async fn run_watch(config: Config, json: bool) -> anyhow::Result<()> {
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
    spawn_ctrl_c(shutdown_tx);

    let mut ticker = interval(config.tick);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut state = WatchState::default();
    info!(
        "Watching {} (tick {}s)",
        config.snapshot_path.display(),
        config.tick.as_secs()
    );

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                run_tick(&config, &mut state, json)?;
            }
            _ = shutdown_rx.changed() => break,
        }
    }
    Ok(())
}

fn run_tick(config: &Config, state: &mut WatchState, json: bool) -> anyhow::Result<()> {
    let now = Utc::now();
    let status = market_status(now);
    if state.observe_session(status.status) {
        info!(
            "Market session is now {} ({} {})",
            status.label(),
            status.time_label,
            status.timezone
        );
    }

    let every = config.display.refresh.market_feed_interval(status.status);
    let tick_at = Instant::now();
    if !state.refresh_due(tick_at, every) {
        return Ok(());
    }
    state.last_refresh = Some(tick_at);

    match load_report(config, now) {
        Ok(report) => {
            if state.accept(report.clone()) {
                print_report(&report, config, json)?;
            } else {
                debug!("Snapshot unchanged");
            }
        }
        Err(e) => warn!("Refresh failed: {:#}", e),
    }
    Ok(())
}
