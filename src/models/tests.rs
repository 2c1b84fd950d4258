//! Unit tests for models module.

use super::*;
use rust_decimal_macros::dec;

// ============================================================================
// Order Request Deserialization Tests
// ============================================================================

#[test]
fn test_order_request_defaults() {
    let json = r#"{"symbol": "AAPL", "qty": 10, "side": "buy", "type": "market"}"#;
    let request: OrderRequest = serde_json::from_str(json).unwrap();

    assert_eq!(request.symbol, "AAPL");
    assert_eq!(request.qty, Some(dec!(10)));
    assert_eq!(request.order_type, OrderType::Market);
    assert_eq!(request.time_in_force, TimeInForce::Day);
    assert!(!request.extended_hours);
    assert!(request.notional.is_none());
    assert!(request.client_order_id.is_none());
}

#[test]
fn test_order_request_decimal_from_string() {
    let json = r#"{"symbol": "AAPL", "qty": "2.5", "side": "sell", "type": "limit", "limit_price": "150.25"}"#;
    let request: OrderRequest = serde_json::from_str(json).unwrap();

    assert_eq!(request.qty, Some(dec!(2.5)));
    assert_eq!(request.limit_price, Some(dec!(150.25)));
}

#[test]
fn test_order_request_unknown_type_names_value() {
    let json = r#"{"symbol": "AAPL", "qty": 10, "side": "buy", "type": "iceberg"}"#;
    let err = serde_json::from_str::<OrderRequest>(json).unwrap_err();

    assert!(err.to_string().contains("iceberg"));
}

#[test]
fn test_order_request_missing_side() {
    let json = r#"{"symbol": "AAPL", "qty": 10, "type": "market"}"#;

    assert!(serde_json::from_str::<OrderRequest>(json).is_err());
}

#[test]
fn test_option_order_request_negative_qty_rejected() {
    let json = r#"{"symbol": "AAPL250117C00150000", "qty": -1, "side": "buy", "type": "market"}"#;

    assert!(serde_json::from_str::<OptionOrderRequest>(json).is_err());
}

#[test]
fn test_multi_leg_request_leg_defaults() {
    let json = r#"{
        "qty": 1,
        "type": "limit",
        "limit_price": 1.5,
        "legs": [
            {"symbol": "AAPL250117C00150000", "ratio_qty": 1, "side": "buy", "position_intent": "buy_to_open"},
            {"symbol": "AAPL250117C00160000", "ratio_qty": 1}
        ]
    }"#;
    let request: MultiLegOrderRequest = serde_json::from_str(json).unwrap();

    assert_eq!(request.legs.len(), 2);
    assert_eq!(request.legs[0].side, Some(OrderSide::Buy));
    assert_eq!(
        request.legs[0].position_intent,
        Some(PositionIntent::BuyToOpen)
    );
    assert!(request.legs[1].side.is_none());
    assert!(request.legs[1].position_intent.is_none());
}

#[test]
fn test_multi_leg_request_accepts_any_leg_count() {
    let json = r#"{"qty": 1, "type": "market", "legs": []}"#;
    let request: MultiLegOrderRequest = serde_json::from_str(json).unwrap();

    assert!(request.legs.is_empty());
}

// ============================================================================
// Close Position Tests
// ============================================================================

#[test]
fn test_close_position_empty_closes_entirely() {
    let request = ClosePositionRequest::default();

    assert!(request.to_close_options().is_none());
}

#[test]
fn test_close_position_zero_values_close_entirely() {
    let request = ClosePositionRequest {
        qty: Some(dec!(0)),
        percentage: Some(dec!(0.0)),
    };

    assert!(request.to_close_options().is_none());
}

#[test]
fn test_close_position_partial() {
    let request = ClosePositionRequest {
        qty: None,
        percentage: Some(dec!(50)),
    };
    let options = request.to_close_options().unwrap();

    assert!(options.qty.is_none());
    assert_eq!(options.percentage, Some(dec!(50)));
}

#[test]
fn test_close_position_drops_only_zero_field() {
    let request = ClosePositionRequest {
        qty: Some(dec!(5)),
        percentage: Some(dec!(0)),
    };
    let options = request.to_close_options().unwrap();

    assert_eq!(options.qty, Some(dec!(5)));
    assert!(options.percentage.is_none());
}

// ============================================================================
// Query Conversion Tests
// ============================================================================

#[test]
fn test_order_list_query_default_open() {
    let query = alpaca_client::OrderQuery::from(OrderListQuery::default());

    assert_eq!(query.status, alpaca_client::QueryOrderStatus::Open);
}

#[test]
fn test_option_contracts_params_split_symbols() {
    let params = OptionContractsParams {
        underlying_symbols: Some(" AAPL, SPY ,,QQQ".to_string()),
        contract_type: Some(ContractType::Put),
        style: Some(ExerciseStyle::American),
        strike_price_gte: Some(dec!(100)),
        limit: Some(10),
        ..Default::default()
    };
    let query = alpaca_client::OptionContractsQuery::from(params);

    assert_eq!(
        query.underlying_symbols,
        Some(vec![
            "AAPL".to_string(),
            "SPY".to_string(),
            "QQQ".to_string()
        ])
    );
    assert_eq!(query.contract_type, Some(alpaca_client::ContractType::Put));
    assert_eq!(query.style, Some(alpaca_client::ExerciseStyle::American));
    assert_eq!(query.strike_price_gte, Some(dec!(100)));
    assert_eq!(query.limit, Some(10));
}

#[test]
fn test_option_chain_params_conversion() {
    let params = OptionChainParams {
        contract_type: Some(ContractType::Call),
        strike_price_gte: Some(140.0),
        expiration_date: NaiveDate::from_ymd_opt(2025, 1, 17),
        ..Default::default()
    };
    let query = alpaca_client::OptionChainQuery::from(params);

    assert_eq!(query.contract_type, Some(alpaca_client::ContractType::Call));
    assert_eq!(query.strike_price_gte, Some(140.0));
    assert_eq!(query.expiration_date, NaiveDate::from_ymd_opt(2025, 1, 17));
    assert!(query.page_token.is_none());
}

// ============================================================================
// Display Tests
// ============================================================================

#[test]
fn test_enum_display() {
    assert_eq!(OrderType::StopLimit.to_string(), "stop_limit");
    assert_eq!(OrderType::TrailingStop.to_string(), "trailing_stop");
    assert_eq!(PositionIntent::BuyToOpen.to_string(), "buy_to_open");
    assert_eq!(TimeInForce::default().to_string(), "day");
    assert_eq!(OrderSide::Sell.to_string(), "sell");
}
