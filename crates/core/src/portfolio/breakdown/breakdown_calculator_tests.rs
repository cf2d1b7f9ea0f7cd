use super::*;
use crate::errors::{Error, ValidationError};
use crate::portfolio::snapshot::{
    AssetClass, Greeks, OptionContract, OptionRight, PortfolioSnapshot, Position,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn put(theta: Decimal) -> Position {
    Position::new("TSLA", AssetClass::Option, dec!(-2), dec!(800), dec!(650)).with_option(
        OptionContract {
            strike: dec!(250),
            expiry: NaiveDate::from_ymd_opt(2025, 12, 19).unwrap(),
            right: OptionRight::Put,
            greeks: Greeks {
                delta: dec!(60),
                gamma: dec!(-4),
                theta,
            },
        },
    )
}

fn mixed_snapshot() -> PortfolioSnapshot {
    PortfolioSnapshot::new(
        dec!(2500),
        vec![
            Position::new("AAPL", AssetClass::Stock, dec!(10), dec!(150), dec!(180)),
            Position::new("MSFT", AssetClass::Stock, dec!(-5), dec!(400), dec!(410)),
            put(dec!(36.5)),
            Position::new("VOO", AssetClass::Etf, dec!(4), dec!(420), dec!(400)),
            Position::new("BTC", AssetClass::Crypto, dec!(0.25), dec!(40000), dec!(60000)),
        ],
    )
}

#[test]
fn test_single_stock_scenario() {
    let snapshot = PortfolioSnapshot::new(
        dec!(1000),
        vec![Position::new("AAPL", AssetClass::Stock, dec!(10), dec!(50), dec!(60))],
    );
    let breakdown = calculate_asset_breakdown(&snapshot).unwrap();

    assert_eq!(breakdown.cash, dec!(1000));
    assert_eq!(breakdown.stock.cost, dec!(500));
    assert_eq!(breakdown.stock.market_value, dec!(600));
    assert_eq!(breakdown.stock.unrealized_pnl, dec!(100));
    assert_eq!(breakdown.total_cost, dec!(1500));
    assert_eq!(breakdown.total_market_value, dec!(1600));
    assert_eq!(breakdown.option, ClassTotals::default());
    assert_eq!(breakdown.total_unrealized_pnl(), dec!(100));
}

#[test]
fn test_positions_route_to_their_class() {
    let breakdown = calculate_asset_breakdown(&mixed_snapshot()).unwrap();

    // AAPL 1500 -> 1800, MSFT short -2000 -> -2050
    assert_eq!(breakdown.stock.cost, dec!(-500));
    assert_eq!(breakdown.stock.market_value, dec!(-250));
    assert_eq!(breakdown.stock.unrealized_pnl, dec!(250));

    // short put: -1600 -> -1300
    assert_eq!(breakdown.option.cost, dec!(-1600));
    assert_eq!(breakdown.option.market_value, dec!(-1300));
    assert_eq!(breakdown.option.unrealized_pnl, dec!(300));

    assert_eq!(breakdown.etf.unrealized_pnl, dec!(-80));
    assert_eq!(breakdown.crypto.market_value, dec!(15000));
    assert_eq!(breakdown.crypto.unrealized_pnl, dec!(5000));
}

#[test]
fn test_class_pnl_reconciles_and_totals_include_cash() {
    let breakdown = calculate_asset_breakdown(&mixed_snapshot()).unwrap();

    let mut cost_sum = breakdown.cash;
    let mut mv_sum = breakdown.cash;
    for class in AssetClass::INVESTED {
        let totals = breakdown.totals(class);
        assert_eq!(totals.unrealized_pnl, totals.market_value - totals.cost);
        cost_sum += totals.cost;
        mv_sum += totals.market_value;
    }
    assert_eq!(breakdown.total_cost, cost_sum);
    assert_eq!(breakdown.total_market_value, mv_sum);
    assert_eq!(breakdown.totals(AssetClass::Cash).unrealized_pnl, Decimal::ZERO);
}

#[test]
fn test_breakdown_is_order_independent() {
    let snapshot = mixed_snapshot();
    let mut reversed = snapshot.clone();
    reversed.positions.reverse();

    assert_eq!(
        calculate_asset_breakdown(&snapshot).unwrap(),
        calculate_asset_breakdown(&reversed).unwrap()
    );
}

#[test]
fn test_empty_portfolio() {
    let breakdown = calculate_asset_breakdown(&PortfolioSnapshot::default()).unwrap();
    assert_eq!(breakdown, AssetBreakdown::default());
    assert_eq!(breakdown.total_pnl_percent(), Decimal::ZERO);
}

#[test]
fn test_cash_tagged_position_aborts_calculation() {
    let mut snapshot = mixed_snapshot();
    snapshot
        .positions
        .push(Position::new("USD", AssetClass::Cash, dec!(1), dec!(1), dec!(1)));

    match calculate_asset_breakdown(&snapshot) {
        Err(Error::Validation(ValidationError::UnsupportedAssetClass { symbol, tag })) => {
            assert_eq!(symbol, "USD");
            assert_eq!(tag, "cash");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_overflow_is_reported_not_panicking() {
    let snapshot = PortfolioSnapshot::new(
        Decimal::ZERO,
        vec![Position::new("HUGE", AssetClass::Stock, Decimal::MAX, dec!(2), dec!(2))],
    );
    assert!(matches!(
        calculate_asset_breakdown(&snapshot),
        Err(Error::Calculation(_))
    ));
}

#[test]
fn test_portfolio_summary() {
    let snapshot = mixed_snapshot();
    let breakdown = AssetBreakdown::from_snapshot(&snapshot).unwrap();
    let summary = PortfolioSummary::from_breakdown(&breakdown, &snapshot.positions);

    // 2500 - 250 - 1300 + 1600 + 15000
    assert_eq!(summary.net_liquidation, dec!(17550));
    assert_eq!(summary.total_unrealized_pnl, dec!(5470));
    assert_eq!(summary.total_theta, dec!(36.5));
    assert_eq!(
        summary.utilization,
        (dec!(17550) - dec!(2500)) / dec!(17550) * dec!(100)
    );
}

#[test]
fn test_summary_of_empty_portfolio_is_zero() {
    let summary = PortfolioSummary::from_breakdown(&AssetBreakdown::default(), &[]);
    assert_eq!(summary, PortfolioSummary::default());
}
