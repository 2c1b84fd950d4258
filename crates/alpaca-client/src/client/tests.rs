//! Unit tests for client module.

use super::*;
use rust_decimal_macros::dec;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn credentials() -> Credentials {
    Credentials::new("key-id".to_string(), "secret".to_string())
}

fn client_for(server: &MockServer) -> AlpacaClient {
    let config = ClientConfig {
        trading_base_url: server.uri(),
        data_base_url: server.uri(),
        ..ClientConfig::paper(credentials())
    };
    AlpacaClient::new(config).unwrap()
}

fn base(url: &str) -> Url {
    Url::parse(url).unwrap()
}

// ============================================================================
// Credentials Tests
// ============================================================================

#[test]
fn test_credentials_accessors() {
    let creds = credentials();

    assert_eq!(creds.api_key(), "key-id");
    assert_eq!(creds.secret_key(), "secret");
}

#[test]
fn test_credentials_debug_redacted() {
    let debug = format!("{:?}", credentials());

    assert!(debug.contains("[REDACTED]"));
    assert!(!debug.contains("key-id"));
    assert!(!debug.contains("secret\""));
}

// ============================================================================
// ClientConfig Tests
// ============================================================================

#[test]
fn test_client_config_paper() {
    let config = ClientConfig::paper(credentials());

    assert_eq!(config.trading_base_url, PAPER_TRADING_BASE_URL);
    assert_eq!(config.data_base_url, DATA_BASE_URL);
    assert_eq!(config.timeout, Duration::from_secs(30));
}

#[test]
fn test_client_config_live() {
    let config = ClientConfig::live(credentials());

    assert_eq!(config.trading_base_url, LIVE_TRADING_BASE_URL);
    assert_eq!(config.data_base_url, DATA_BASE_URL);
}

// ============================================================================
// AlpacaClient Creation Tests
// ============================================================================

#[test]
fn test_alpaca_client_new() {
    let client = AlpacaClient::new(ClientConfig::paper(credentials()));

    assert!(client.is_ok());
}

#[test]
fn test_alpaca_client_missing_credentials() {
    let config = ClientConfig::paper(Credentials::new(String::new(), "secret".to_string()));
    let result = AlpacaClient::new(config);

    assert!(matches!(result, Err(Error::MissingCredentials)));

    let config = ClientConfig::paper(Credentials::new("key-id".to_string(), String::new()));
    assert!(matches!(
        AlpacaClient::new(config),
        Err(Error::MissingCredentials)
    ));
}

#[test]
fn test_alpaca_client_invalid_url() {
    let config = ClientConfig {
        trading_base_url: "not a url".to_string(),
        ..ClientConfig::paper(credentials())
    };

    assert!(matches!(AlpacaClient::new(config), Err(Error::InvalidUrl(_))));
}

#[test]
fn test_alpaca_client_base_url_trailing_slash() {
    let config = ClientConfig {
        trading_base_url: "http://localhost:8080/".to_string(),
        data_base_url: "http://localhost:9090".to_string(),
        ..ClientConfig::paper(credentials())
    };
    let client = AlpacaClient::new(config).unwrap();

    assert_eq!(
        client.trading_url(&["v2", "clock"]).unwrap().as_str(),
        "http://localhost:8080/v2/clock"
    );
    assert_eq!(
        client
            .data_url(&["v2", "stocks", "AAPL", "quotes", "latest"])
            .unwrap()
            .as_str(),
        "http://localhost:9090/v2/stocks/AAPL/quotes/latest"
    );
}

#[test]
fn test_alpaca_client_cannot_be_a_base_url() {
    let config = ClientConfig {
        data_base_url: "mailto:ops@example.com".to_string(),
        ..ClientConfig::paper(credentials())
    };

    assert!(matches!(AlpacaClient::new(config), Err(Error::InvalidUrl(_))));
}

// ============================================================================
// URL Building Tests
// ============================================================================

#[test]
fn test_endpoint_keeps_base_path() {
    let url = endpoint(&base("http://localhost:9000/proxy/"), &["v2", "orders"]).unwrap();

    assert_eq!(url.as_str(), "http://localhost:9000/proxy/v2/orders");
}

#[test]
fn test_endpoint_encodes_slash_in_segment() {
    let url = endpoint(&base("http://x"), &["v2", "orders", "../positions"]).unwrap();

    assert_eq!(url.path(), "/v2/orders/..%2Fpositions");
}

#[test]
fn test_endpoint_encodes_query_characters_in_segment() {
    let url = endpoint(&base("http://x"), &["v2", "positions", "AAPL?qty=1#x"]).unwrap();

    assert_eq!(url.path(), "/v2/positions/AAPL%3Fqty=1%23x");
    assert_eq!(url.query(), None);
    assert_eq!(url.fragment(), None);
}

#[test]
fn test_endpoint_rejects_dot_and_empty_segments() {
    for segment in ["..", ".", ""] {
        let result = endpoint(&base("http://x"), &["v2", "orders", segment]);

        assert!(
            matches!(result, Err(Error::InvalidPathSegment(ref s)) if s == segment),
            "{:?}",
            segment
        );
    }
}

// ============================================================================
// Query Building Tests
// ============================================================================

#[test]
fn test_with_query_appends_params() {
    let url = with_query(
        base("https://paper-api.alpaca.markets/v2/orders"),
        &OrderQuery {
            status: QueryOrderStatus::All,
        },
    )
    .unwrap();

    assert_eq!(
        url.as_str(),
        "https://paper-api.alpaca.markets/v2/orders?status=all"
    );
}

#[test]
fn test_with_query_empty_leaves_url() {
    let url = with_query(
        base("https://paper-api.alpaca.markets/v2/positions/AAPL"),
        &ClosePositionOptions::default(),
    )
    .unwrap();

    assert_eq!(
        url.as_str(),
        "https://paper-api.alpaca.markets/v2/positions/AAPL"
    );
}

#[test]
fn test_with_query_close_position() {
    let options = ClosePositionOptions {
        qty: None,
        percentage: Some(dec!(50)),
    };
    let url = with_query(base("http://x/v2/positions/AAPL"), &options).unwrap();

    assert_eq!(url.as_str(), "http://x/v2/positions/AAPL?percentage=50");
}

#[test]
fn test_with_query_symbols_pair() {
    let url = with_query(
        base("http://x/v1beta1/options/snapshots"),
        &[("symbols", "AAPL250117C00150000")],
    )
    .unwrap();

    assert_eq!(
        url.as_str(),
        "http://x/v1beta1/options/snapshots?symbols=AAPL250117C00150000"
    );
}

// ============================================================================
// Error Body Tests
// ============================================================================

#[test]
fn test_error_message_with_code() {
    let message = error_message(r#"{"code": 40010001, "message": "invalid symbol"}"#);

    assert_eq!(message, "invalid symbol (code 40010001)");
}

#[test]
fn test_error_message_without_code() {
    let message = error_message(r#"{"message": "forbidden"}"#);

    assert_eq!(message, "forbidden");
}

#[test]
fn test_error_message_raw_body() {
    let message = error_message("upstream connect error");

    assert_eq!(message, "upstream connect error");
}

// ============================================================================
// HTTP Tests
// ============================================================================

#[tokio::test]
async fn test_requests_carry_auth_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/clock"))
        .and(header("APCA-API-KEY-ID", "key-id"))
        .and(header("APCA-API-SECRET-KEY", "secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "timestamp": "2025-01-02T10:00:00-05:00",
            "is_open": true,
            "next_open": "2025-01-03T09:30:00-05:00",
            "next_close": "2025-01-02T16:00:00-05:00"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let clock = client_for(&server).get_clock().await.unwrap();

    assert!(clock.is_open);
    assert_eq!(clock.next_close, "2025-01-02T16:00:00-05:00");
}

#[tokio::test]
async fn test_not_found_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/orders/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "code": 40410000,
            "message": "order not found"
        })))
        .mount(&server)
        .await;

    let result = client_for(&server).get_order("missing").await;

    assert!(
        matches!(result, Err(Error::NotFound(ref m)) if m == "order not found (code 40410000)")
    );
}

#[tokio::test]
async fn test_unprocessable_order_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/orders"))
        .and(body_partial_json(json!({"type": "market", "symbol": "AAPL"})))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "code": 40010001,
            "message": "qty must be > 0"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let intent = OrderIntent::Market {
        fields: OrderFields {
            symbol: Some("AAPL".to_string()),
            qty: Some(dec!(0)),
            side: Some(OrderSide::Buy),
            ..Default::default()
        },
    };
    let result = client_for(&server).submit_order(&intent).await;

    match result {
        Err(Error::Api { status, message }) => {
            assert_eq!(status, 422);
            assert_eq!(message, "qty must be > 0 (code 40010001)");
        }
        other => panic!("expected API error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_cancel_order_traversal_stays_in_orders() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v2/positions"))
        .respond_with(ResponseTemplate::new(207).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "order not found"
        })))
        .mount(&server)
        .await;

    let result = client_for(&server).cancel_order("../positions").await;
    assert!(matches!(result, Err(Error::NotFound(_))));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.path(), "/v2/orders/..%2Fpositions");
}

#[tokio::test]
async fn test_dot_segment_never_sent() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    assert!(matches!(
        client.cancel_order("..").await,
        Err(Error::InvalidPathSegment(_))
    ));
    assert!(matches!(
        client.close_position(".", None).await,
        Err(Error::InvalidPathSegment(_))
    ));

    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_close_position_symbol_cannot_inject_query() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "close-1",
            "status": "accepted"
        })))
        .mount(&server)
        .await;

    let options = ClosePositionOptions {
        qty: None,
        percentage: Some(dec!(50)),
    };
    let order = client_for(&server)
        .close_position("AAPL?qty=1000", Some(&options))
        .await
        .unwrap();
    assert_eq!(order.id, "close-1");

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.path(), "/v2/positions/AAPL%3Fqty=1000");
    assert_eq!(requests[0].url.query(), Some("percentage=50"));
}

#[tokio::test]
async fn test_cancel_orders_multi_status() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v2/orders"))
        .respond_with(ResponseTemplate::new(207).set_body_json(json!([
            {"id": "order-1", "status": 200},
            {"id": "order-2", "status": 500, "body": {"message": "internal error"}}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let cancelled = client_for(&server).cancel_orders().await.unwrap();

    assert_eq!(cancelled.len(), 2);
    assert_eq!(cancelled[0].id, "order-1");
    assert_eq!(cancelled[1].status, 500);
    assert!(cancelled[1].body.is_some());
}

#[tokio::test]
async fn test_exercise_option_empty_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/positions/AAPL250117C00150000/exercise"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .exercise_option("AAPL250117C00150000")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_stock_latest_quote_unwraps_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/stocks/AAPL/quotes/latest"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "symbol": "AAPL",
            "quote": {"t": "2025-01-02T15:00:00Z", "ap": 190.5, "as": 2, "bp": 190.4, "bs": 3}
        })))
        .mount(&server)
        .await;

    let quote = client_for(&server).get_stock_latest_quote("AAPL").await.unwrap();

    assert_eq!(quote.symbol.as_deref(), Some("AAPL"));
    assert_eq!(quote.ask_price, 190.5);
    assert_eq!(quote.bid_size, 3.0);
}

#[tokio::test]
async fn test_option_latest_quote_by_symbol() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1beta1/options/quotes/latest"))
        .and(query_param("symbols", "AAPL250117C00150000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "quotes": {"AAPL250117C00150000": {"ap": 1.25, "bp": 1.2}}
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1beta1/options/quotes/latest"))
        .and(query_param("symbols", "AAPL250117C00999000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"quotes": {}})))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let quote = client
        .get_option_latest_quote("AAPL250117C00150000")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(quote.symbol.as_deref(), Some("AAPL250117C00150000"));
    assert_eq!(quote.ask_price, 1.25);

    let missing = client
        .get_option_latest_quote("AAPL250117C00999000")
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_option_snapshot_by_symbol() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1beta1/options/snapshots"))
        .and(query_param("symbols", "AAPL250117C00150000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "snapshots": {"AAPL250117C00150000": {"impliedVolatility": 0.31}}
        })))
        .mount(&server)
        .await;

    let snapshot = client_for(&server)
        .get_option_snapshot("AAPL250117C00150000")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(snapshot.symbol.as_deref(), Some("AAPL250117C00150000"));
    assert_eq!(snapshot.implied_volatility, Some(0.31));
}

#[tokio::test]
async fn test_option_chain_walks_pages() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1beta1/options/snapshots/AAPL"))
        .and(query_param("type", "call"))
        .and(query_param_is_missing("page_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "snapshots": {"AAPL250117C00150000": {"impliedVolatility": 0.31}},
            "next_page_token": "page-2"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1beta1/options/snapshots/AAPL"))
        .and(query_param("type", "call"))
        .and(query_param("page_token", "page-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "snapshots": {"AAPL250117C00160000": {"impliedVolatility": 0.28}},
            "next_page_token": null
        })))
        .expect(1)
        .mount(&server)
        .await;

    let query = OptionChainQuery {
        contract_type: Some(ContractType::Call),
        ..Default::default()
    };
    let chain = client_for(&server)
        .get_option_chain("AAPL", &query)
        .await
        .unwrap();

    assert_eq!(chain.len(), 2);
    assert_eq!(
        chain["AAPL250117C00160000"].symbol.as_deref(),
        Some("AAPL250117C00160000")
    );
}

#[tokio::test]
async fn test_option_chain_stops_on_empty_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1beta1/options/snapshots/AAPL"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "snapshots": {"AAPL250117C00150000": {}},
            "next_page_token": ""
        })))
        .expect(1)
        .mount(&server)
        .await;

    let chain = client_for(&server)
        .get_option_chain("AAPL", &OptionChainQuery::default())
        .await
        .unwrap();

    assert_eq!(chain.len(), 1);
}

#[tokio::test]
async fn test_option_chain_stops_on_repeated_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1beta1/options/snapshots/AAPL"))
        .and(query_param_is_missing("page_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "snapshots": {"AAPL250117C00150000": {}},
            "next_page_token": "stuck"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1beta1/options/snapshots/AAPL"))
        .and(query_param("page_token", "stuck"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "snapshots": {"AAPL250117C00160000": {}},
            "next_page_token": "stuck"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let chain = client_for(&server)
        .get_option_chain("AAPL", &OptionChainQuery::default())
        .await
        .unwrap();

    assert_eq!(chain.len(), 2);
}
