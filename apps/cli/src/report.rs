//! Dashboard report: one pass of the valuation pipeline over the snapshot file.

use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, Utc};
use finboard_core::fx::{format_currency, format_percent, format_signed_percent};
use finboard_core::market_session::{market_status, MarketStatusInfo};
use finboard_core::portfolio::positions::sort_positions;
use finboard_core::portfolio::snapshot::parse_account_record;
use finboard_core::{
    build_asset_allocation, build_chart_from_legend_data, calculate_asset_breakdown,
    AssetAllocation, AssetBreakdown, AssetClass, ChartModel, PortfolioSnapshot, PortfolioSummary,
};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::Config;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionRow {
    pub symbol: String,
    /// OCC symbol for options, the plain ticker otherwise
    pub quote_symbol: String,
    pub asset_class: AssetClass,
    pub quantity: Decimal,
    pub price: Decimal,
    pub market_value: Decimal,
    pub unrealized_pnl: Decimal,
    pub pnl_percent: Decimal,
    pub percent_of_portfolio: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardReport {
    pub market: MarketStatusInfo,
    pub summary: PortfolioSummary,
    pub breakdown: AssetBreakdown,
    pub allocation: AssetAllocation,
    pub chart: ChartModel,
    pub positions: Vec<PositionRow>,
}

pub fn build_report(
    snapshot: &PortfolioSnapshot,
    now: DateTime<Utc>,
) -> anyhow::Result<DashboardReport> {
    let breakdown = calculate_asset_breakdown(snapshot)?;
    let allocation = build_asset_allocation(&breakdown);
    let chart = build_chart_from_legend_data(&allocation, &breakdown);
    let summary = PortfolioSummary::from_breakdown(&breakdown, &snapshot.positions);

    let mut positions = snapshot.positions.clone();
    sort_positions(&mut positions);
    let total = breakdown.total_market_value;
    let positions = positions
        .iter()
        .map(|p| {
            let quote_symbol = p.quote_symbol().unwrap_or_else(|e| {
                warn!("Falling back to plain symbol for {}: {}", p.symbol, e);
                p.symbol.clone()
            });
            PositionRow {
                symbol: p.symbol.clone(),
                quote_symbol,
                asset_class: p.asset_class,
                quantity: p.quantity,
                price: p.price,
                market_value: p.market_value(),
                unrealized_pnl: p.unrealized_pnl(),
                pnl_percent: p.pnl_percent(),
                percent_of_portfolio: p.percent_of_portfolio(total),
            }
        })
        .collect();

    Ok(DashboardReport {
        market: market_status(now),
        summary,
        breakdown,
        allocation,
        chart,
        positions,
    })
}

pub fn read_snapshot(path: &Path, account_key: Option<&str>) -> anyhow::Result<PortfolioSnapshot> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot {}", path.display()))?;
    let snapshot = parse_account_record(&raw, account_key)
        .with_context(|| format!("Invalid snapshot {}", path.display()))?;
    debug!(
        "Loaded snapshot from {} with {} positions",
        path.display(),
        snapshot.positions.len()
    );
    Ok(snapshot)
}

pub fn load_report(config: &Config, now: DateTime<Utc>) -> anyhow::Result<DashboardReport> {
    let snapshot = read_snapshot(&config.snapshot_path, config.account_key.as_deref())?;
    build_report(&snapshot, now)
}

pub fn render_report(report: &DashboardReport, config: &Config) -> String {
    let mode = config.display.currency;
    let locale = &config.display.locale;
    let money = |value: Decimal| format_currency(value, mode, &config.rates, locale);
    let summary = &report.summary;

    let mut lines = vec![
        format!(
            "Market: {} ({} {})",
            report.market.label(),
            report.market.time_label,
            report.market.timezone
        ),
        format!("Net liquidation: {}", money(summary.net_liquidation)),
        format!("Cash: {}", money(summary.cash)),
        format!(
            "Unrealized P&L: {} ({})",
            money(summary.total_unrealized_pnl),
            format_signed_percent(summary.total_pnl_percent, locale)
        ),
        format!("Utilization: {}", format_percent(summary.utilization, locale)),
    ];
    if !summary.total_theta.is_zero() {
        lines.push(format!("Theta: {}", money(summary.total_theta)));
    }

    lines.push(String::new());
    lines.push("Allocation".to_string());
    if report.allocation.is_empty() {
        lines.push("  (nothing to allocate)".to_string());
    }
    for row in &report.allocation.rows {
        lines.push(format!(
            "  {:<8} {:>16} {:>9}",
            row.name,
            money(row.value),
            format_percent(row.percent, locale)
        ));
    }

    if !report.positions.is_empty() {
        lines.push(String::new());
        lines.push("Positions".to_string());
    }
    for row in &report.positions {
        lines.push(format!(
            "  {:<22} {:>10} {:>16} {:>16} {:>9}",
            row.quote_symbol,
            row.quantity.normalize(),
            money(row.market_value),
            money(row.unrealized_pnl),
            format_signed_percent(row.pnl_percent, locale)
        ));
    }
    lines.join("\n")
}

pub fn print_report(report: &DashboardReport, config: &Config, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string(report)?);
    } else {
        println!("{}", render_report(report, config));
    }
    Ok(())
}
