use super::*;
use crate::errors::{Error, ValidationError};
use chrono::NaiveDate;
use rust_decimal_macros::dec;

const BROKER_RECORD: &str = r#"{
    "timestamp": "2025-11-03T10:15:30.123456",
    "IBKR_account": {
        "cash": 1000,
        "positions": [
            { "symbol": "AAPL", "secType": "STK", "position": 10, "avgCost": 50, "price": 60 },
            {
                "symbol": "TSLA", "secType": "OPT", "position": -1, "avgCost": 820.5, "price": 640,
                "right": "P", "strike": 250, "expiry": "20251219",
                "delta": -0.315, "gamma": 0.021, "theta": -0.1825
            }
        ]
    }
}"#;

#[test]
fn test_parse_broker_record_under_account_key() {
    let snapshot = parse_account_record(BROKER_RECORD, Some("IBKR_account")).unwrap();

    assert_eq!(snapshot.cash, dec!(1000));
    assert_eq!(snapshot.positions.len(), 2);
    assert_eq!(
        snapshot.as_of.map(|ts| ts.date()),
        NaiveDate::from_ymd_opt(2025, 11, 3)
    );

    let stock = &snapshot.positions[0];
    assert_eq!(stock.asset_class, AssetClass::Stock);
    assert_eq!(stock.quantity, dec!(10));
    assert!(stock.option.is_none());

    let option = &snapshot.positions[1];
    assert_eq!(option.asset_class, AssetClass::Option);
    assert_eq!(option.quantity, dec!(-1));
    let contract = option.option.as_ref().unwrap();
    assert_eq!(contract.right, OptionRight::Put);
    assert_eq!(contract.strike, dec!(250));
    assert_eq!(contract.expiry, NaiveDate::from_ymd_opt(2025, 12, 19).unwrap());
    // per-share Greeks scaled by 100 contracts and the short quantity
    assert_eq!(contract.greeks.delta, dec!(31.5));
    assert_eq!(contract.greeks.gamma, dec!(-2.1));
    assert_eq!(contract.greeks.theta, dec!(18.25));
}

#[test]
fn test_parse_normalized_record_without_account_key() {
    let json = r#"{
        "cash": 250.5,
        "positions": [
            { "symbol": "VOO", "assetClass": "etf", "quantity": 3, "cost": 400, "price": 410 },
            { "symbol": "BTC", "assetClass": "crypto", "quantity": 0.5, "cost": 30000, "price": 60000 }
        ]
    }"#;
    let snapshot = parse_account_record(json, None).unwrap();

    assert_eq!(snapshot.cash, dec!(250.5));
    assert_eq!(snapshot.positions[0].asset_class, AssetClass::Etf);
    assert_eq!(snapshot.positions[1].asset_class, AssetClass::Crypto);
    assert!(snapshot.as_of.is_none());
}

#[test]
fn test_unknown_asset_class_is_rejected() {
    let json = r#"{
        "cash": 0,
        "positions": [
            { "symbol": "AAPL", "secType": "STK", "position": 1, "avgCost": 1, "price": 1 },
            { "symbol": "ES", "secType": "FUT", "position": 1, "avgCost": 1, "price": 1 }
        ]
    }"#;
    let err = parse_account_record(json, None).unwrap_err();
    match err {
        Error::Validation(ValidationError::UnsupportedAssetClass { symbol, tag }) => {
            assert_eq!(symbol, "ES");
            assert_eq!(tag, "FUT");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_cash_is_not_a_position_class() {
    let json = r#"{
        "cash": 0,
        "positions": [
            { "symbol": "USD", "assetClass": "cash", "quantity": 1, "cost": 1, "price": 1 }
        ]
    }"#;
    assert!(matches!(
        parse_account_record(json, None),
        Err(Error::Validation(ValidationError::UnsupportedAssetClass { .. }))
    ));
}

#[test]
fn test_missing_numeric_fields_are_reported() {
    let missing_price = r#"{
        "cash": 0,
        "positions": [ { "symbol": "AAPL", "secType": "STK", "position": 1, "avgCost": 1 } ]
    }"#;
    match parse_account_record(missing_price, None) {
        Err(Error::Validation(ValidationError::MissingField(field))) => {
            assert_eq!(field, "AAPL.price")
        }
        other => panic!("unexpected result: {other:?}"),
    }

    let missing_cash = r#"{ "positions": [] }"#;
    assert!(matches!(
        parse_account_record(missing_cash, None),
        Err(Error::Validation(ValidationError::MissingField(_)))
    ));

    assert!(matches!(
        parse_account_record(BROKER_RECORD, Some("TRADIER_account")),
        Err(Error::Validation(ValidationError::MissingField(_)))
    ));
}

#[test]
fn test_option_without_contract_terms_is_rejected() {
    let json = r#"{
        "cash": 0,
        "positions": [
            { "symbol": "SPY", "secType": "OPT", "position": 1, "avgCost": 100, "price": 120, "right": "C" }
        ]
    }"#;
    assert!(matches!(
        parse_account_record(json, None),
        Err(Error::Validation(ValidationError::MissingField(_)))
    ));
}

#[test]
fn test_parse_expiry_formats() {
    let expected = NaiveDate::from_ymd_opt(2026, 1, 16).unwrap();
    assert_eq!(account_record::parse_expiry("20260116").unwrap(), expected);
    assert_eq!(account_record::parse_expiry("2026-01-16").unwrap(), expected);
    assert!(account_record::parse_expiry("2026-13-01").is_err());
}

#[test]
fn test_serialized_snapshot_with_option_parses_back() {
    let contract = OptionContract {
        strike: dec!(400),
        expiry: NaiveDate::from_ymd_opt(2026, 1, 16).unwrap(),
        right: OptionRight::Call,
        greeks: Greeks {
            delta: dec!(55),
            gamma: dec!(1.2),
            theta: dec!(-18.4),
        },
    };
    let mut snapshot = PortfolioSnapshot::new(
        dec!(100),
        vec![
            Position::new("AAPL", AssetClass::Stock, dec!(2), dec!(150), dec!(190)),
            Position::new("SPY", AssetClass::Option, dec!(1), dec!(950), dec!(1020))
                .with_option(contract),
        ],
    );
    snapshot.as_of = NaiveDate::from_ymd_opt(2025, 11, 3)
        .unwrap()
        .and_hms_opt(9, 45, 0);

    let json = serde_json::to_string(&snapshot).unwrap();
    let parsed = parse_account_record(&json, None).unwrap();

    // nested Greeks are already position-level and kept as is
    assert_eq!(parsed, snapshot);
}

#[test]
fn test_nested_option_terms_missing_strike_is_reported() {
    let json = r#"{
        "cash": 0,
        "positions": [
            {
                "symbol": "SPY", "assetClass": "option", "quantity": 1, "cost": 950, "price": 1020,
                "option": { "expiry": "2026-01-16", "right": "call" }
            }
        ]
    }"#;
    match parse_account_record(json, None) {
        Err(Error::Validation(ValidationError::MissingField(field))) => {
            assert_eq!(field, "SPY.option.strike")
        }
        other => panic!("unexpected result: {other:?}"),
    }
}
