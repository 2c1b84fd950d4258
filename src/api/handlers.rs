//! API request handlers.

use crate::error::{ApiError, ErrorResponse};
use crate::models::{
    CancelAllResponse, CancelOrderResponse, ClosePositionRequest, ExerciseResponse,
    HealthResponse, MultiLegOrderRequest, OptionChainParams, OptionContractsParams,
    OptionOrderRequest, OrderListQuery, OrderRequest,
};
use crate::resolver::{resolve_equity_order, resolve_multi_leg_order, resolve_option_order};
use crate::state::AppState;
use alpaca_client::{
    Account, Clock, OptionChain, OptionContract, OptionContractsPage, OptionSnapshot, Order,
    Position, Quote,
};
use axum::Json;
use axum::body::Bytes;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use std::sync::Arc;
use tracing::{info, warn};


/// Parses the optional close-position body. Empty means close entirely.
fn parse_close_request(body: &[u8]) -> Result<ClosePositionRequest, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(ClosePositionRequest::default());
    }
    serde_json::from_slice(body).map_err(|e| ApiError::Schema(e.to_string()))
}

/// Rejects path parameters that would not address a single resource.
fn path_param(name: &str, value: String) -> Result<String, ApiError> {
    if value.is_empty() || value == "." || value == ".." || value.contains(['/', '?', '#']) {
        return Err(ApiError::Schema(format!(
            "invalid path parameter {}: {:?}",
            name, value
        )));
    }
    Ok(value)
}

// ============================================================================
// Health Check
// ============================================================================

/// Health check endpoint.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "Health"
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}

// ============================================================================
// Account
// ============================================================================

/// Get the trading account.
#[utoipa::path(
    get,
    path = "/account",
    responses(
        (status = 200, description = "Account details"),
        (status = 502, description = "Broker error", body = ErrorResponse)
    ),
    tag = "Account"
)]
pub async fn get_account(State(state): State<Arc<AppState>>) -> Result<Json<Account>, ApiError> {
    Ok(Json(state.broker.get_account().await?))
}

/// Get the market clock.
#[utoipa::path(
    get,
    path = "/clock",
    responses(
        (status = 200, description = "Market clock"),
        (status = 502, description = "Broker error", body = ErrorResponse)
    ),
    tag = "Account"
)]
pub async fn get_clock(State(state): State<Arc<AppState>>) -> Result<Json<Clock>, ApiError> {
    Ok(Json(state.broker.get_clock().await?))
}

// ============================================================================
// Orders
// ============================================================================

/// Submit an equity order.
#[utoipa::path(
    post,
    path = "/orders",
    request_body = OrderRequest,
    responses(
        (status = 200, description = "Order submitted"),
        (status = 400, description = "Order failed validation", body = ErrorResponse),
        (status = 422, description = "Malformed order request", body = ErrorResponse),
        (status = 502, description = "Broker error", body = ErrorResponse)
    ),
    tag = "Orders"
)]
pub async fn submit_order(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<OrderRequest>, JsonRejection>,
) -> Result<Json<Order>, ApiError> {
    let Json(request) = payload?;
    let symbol = request.symbol.clone();

    let intent = resolve_equity_order(request)
        .inspect_err(|e| warn!("Rejected equity order for {}: {}", symbol, e))?;

    info!("Submitting {} equity order for {}", intent.order_type(), symbol);
    let order = state.broker.submit_order(intent).await?;
    info!("Order {} accepted with status {}", order.id, order.status);

    Ok(Json(order))
}

/// List orders.
#[utoipa::path(
    get,
    path = "/orders",
    params(OrderListQuery),
    responses(
        (status = 200, description = "List of orders"),
        (status = 422, description = "Invalid query", body = ErrorResponse),
        (status = 502, description = "Broker error", body = ErrorResponse)
    ),
    tag = "Orders"
)]
pub async fn list_orders(
    State(state): State<Arc<AppState>>,
    query: Result<Query<OrderListQuery>, QueryRejection>,
) -> Result<Json<Vec<Order>>, ApiError> {
    let Query(query) = query?;
    Ok(Json(state.broker.get_orders(query.into()).await?))
}

/// Get an order by ID.
#[utoipa::path(
    get,
    path = "/orders/{order_id}",
    params(
        ("order_id" = String, Path, description = "Broker order ID")
    ),
    responses(
        (status = 200, description = "Order details"),
        (status = 404, description = "Order not found", body = ErrorResponse),
        (status = 502, description = "Broker error", body = ErrorResponse)
    ),
    tag = "Orders"
)]
pub async fn get_order(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<String>,
) -> Result<Json<Order>, ApiError> {
    let order_id = path_param("order_id", order_id)?;
    Ok(Json(state.broker.get_order(&order_id).await?))
}

/// Cancel an order by ID.
#[utoipa::path(
    delete,
    path = "/orders/{order_id}",
    params(
        ("order_id" = String, Path, description = "Broker order ID")
    ),
    responses(
        (status = 200, description = "Order cancelled", body = CancelOrderResponse),
        (status = 404, description = "Order not found", body = ErrorResponse),
        (status = 502, description = "Broker error", body = ErrorResponse)
    ),
    tag = "Orders"
)]
pub async fn cancel_order(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<String>,
) -> Result<Json<CancelOrderResponse>, ApiError> {
    let order_id = path_param("order_id", order_id)?;
    state.broker.cancel_order(&order_id).await?;
    info!("Cancelled order {}", order_id);

    Ok(Json(CancelOrderResponse {
        status: "cancelled".to_string(),
        order_id,
    }))
}

/// Cancel all open orders.
#[utoipa::path(
    delete,
    path = "/orders",
    responses(
        (status = 200, description = "Orders cancelled", body = CancelAllResponse),
        (status = 502, description = "Broker error", body = ErrorResponse)
    ),
    tag = "Orders"
)]
pub async fn cancel_all_orders(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CancelAllResponse>, ApiError> {
    let cancelled = state.broker.cancel_orders().await?;
    info!("Cancelled {} open orders", cancelled.len());

    Ok(Json(CancelAllResponse {
        status: "cancelled".to_string(),
        cancelled,
    }))
}

// ============================================================================
// Positions
// ============================================================================

/// List open positions.
#[utoipa::path(
    get,
    path = "/positions",
    responses(
        (status = 200, description = "Open positions"),
        (status = 502, description = "Broker error", body = ErrorResponse)
    ),
    tag = "Positions"
)]
pub async fn list_positions(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Position>>, ApiError> {
    Ok(Json(state.broker.get_all_positions().await?))
}

/// Get the open position for a symbol.
#[utoipa::path(
    get,
    path = "/positions/{symbol}",
    params(
        ("symbol" = String, Path, description = "Symbol or asset ID")
    ),
    responses(
        (status = 200, description = "Position details"),
        (status = 404, description = "Position not found", body = ErrorResponse),
        (status = 502, description = "Broker error", body = ErrorResponse)
    ),
    tag = "Positions"
)]
pub async fn get_position(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
) -> Result<Json<Position>, ApiError> {
    let symbol = path_param("symbol", symbol)?;
    Ok(Json(state.broker.get_open_position(&symbol).await?))
}

/// Close a position, fully or partially.
#[utoipa::path(
    delete,
    path = "/positions/{symbol}",
    params(
        ("symbol" = String, Path, description = "Symbol or asset ID")
    ),
    request_body(
        content = ClosePositionRequest,
        description = "Optional partial close; an empty body closes the whole position"
    ),
    responses(
        (status = 200, description = "Closing order"),
        (status = 404, description = "Position not found", body = ErrorResponse),
        (status = 422, description = "Malformed close request", body = ErrorResponse),
        (status = 502, description = "Broker error", body = ErrorResponse)
    ),
    tag = "Positions"
)]
pub async fn close_position(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
    body: Bytes,
) -> Result<Json<Order>, ApiError> {
    let symbol = path_param("symbol", symbol)?;
    let request = parse_close_request(&body)?;
    let options = request.to_close_options();

    match &options {
        Some(opts) => info!(
            "Closing position {} (qty: {:?}, percentage: {:?})",
            symbol, opts.qty, opts.percentage
        ),
        None => info!("Closing entire position {}", symbol),
    }

    Ok(Json(state.broker.close_position(&symbol, options).await?))
}

// ============================================================================
// Market Data
// ============================================================================

/// Get the latest stock quote.
#[utoipa::path(
    get,
    path = "/quotes/{symbol}",
    params(
        ("symbol" = String, Path, description = "Stock symbol")
    ),
    responses(
        (status = 200, description = "Latest quote"),
        (status = 404, description = "Symbol not found", body = ErrorResponse),
        (status = 502, description = "Broker error", body = ErrorResponse)
    ),
    tag = "Market Data"
)]
pub async fn get_stock_quote(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
) -> Result<Json<Quote>, ApiError> {
    let symbol = path_param("symbol", symbol)?;
    Ok(Json(state.broker.get_stock_latest_quote(&symbol).await?))
}

// ============================================================================
// Options
// ============================================================================

/// List option contracts.
#[utoipa::path(
    get,
    path = "/options/contracts",
    params(OptionContractsParams),
    responses(
        (status = 200, description = "Option contracts page"),
        (status = 422, description = "Invalid query", body = ErrorResponse),
        (status = 502, description = "Broker error", body = ErrorResponse)
    ),
    tag = "Options"
)]
pub async fn list_option_contracts(
    State(state): State<Arc<AppState>>,
    query: Result<Query<OptionContractsParams>, QueryRejection>,
) -> Result<Json<OptionContractsPage>, ApiError> {
    let Query(params) = query?;
    Ok(Json(state.broker.get_option_contracts(params.into()).await?))
}

/// Get an option contract by symbol or ID.
#[utoipa::path(
    get,
    path = "/options/contracts/{symbol_or_id}",
    params(
        ("symbol_or_id" = String, Path, description = "Contract symbol or ID")
    ),
    responses(
        (status = 200, description = "Option contract"),
        (status = 404, description = "Contract not found", body = ErrorResponse),
        (status = 502, description = "Broker error", body = ErrorResponse)
    ),
    tag = "Options"
)]
pub async fn get_option_contract(
    State(state): State<Arc<AppState>>,
    Path(symbol_or_id): Path<String>,
) -> Result<Json<OptionContract>, ApiError> {
    let symbol_or_id = path_param("symbol_or_id", symbol_or_id)?;
    Ok(Json(state.broker.get_option_contract(&symbol_or_id).await?))
}

/// Get the option chain for an underlying.
#[utoipa::path(
    get,
    path = "/options/chain/{underlying_symbol}",
    params(
        ("underlying_symbol" = String, Path, description = "Underlying symbol"),
        OptionChainParams
    ),
    responses(
        (status = 200, description = "Snapshots keyed by contract symbol"),
        (status = 422, description = "Invalid query", body = ErrorResponse),
        (status = 502, description = "Broker error", body = ErrorResponse)
    ),
    tag = "Options"
)]
pub async fn get_option_chain(
    State(state): State<Arc<AppState>>,
    Path(underlying_symbol): Path<String>,
    query: Result<Query<OptionChainParams>, QueryRejection>,
) -> Result<Json<OptionChain>, ApiError> {
    let underlying_symbol = path_param("underlying_symbol", underlying_symbol)?;
    let Query(params) = query?;
    let chain = state
        .broker
        .get_option_chain(&underlying_symbol, params.into())
        .await?;
    Ok(Json(chain))
}

/// Get the latest option quote.
#[utoipa::path(
    get,
    path = "/options/quotes/{symbol}",
    params(
        ("symbol" = String, Path, description = "Contract symbol")
    ),
    responses(
        (status = 200, description = "Latest quote"),
        (status = 404, description = "No quote for symbol", body = ErrorResponse),
        (status = 502, description = "Broker error", body = ErrorResponse)
    ),
    tag = "Options"
)]
pub async fn get_option_quote(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
) -> Result<Json<Quote>, ApiError> {
    let symbol = path_param("symbol", symbol)?;
    state
        .broker
        .get_option_latest_quote(&symbol)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("No quote found for {}", symbol)))
}

/// Get the option snapshot.
#[utoipa::path(
    get,
    path = "/options/snapshots/{symbol}",
    params(
        ("symbol" = String, Path, description = "Contract symbol")
    ),
    responses(
        (status = 200, description = "Option snapshot"),
        (status = 404, description = "No snapshot for symbol", body = ErrorResponse),
        (status = 502, description = "Broker error", body = ErrorResponse)
    ),
    tag = "Options"
)]
pub async fn get_option_snapshot(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
) -> Result<Json<OptionSnapshot>, ApiError> {
    let symbol = path_param("symbol", symbol)?;
    state
        .broker
        .get_option_snapshot(&symbol)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("No snapshot found for {}", symbol)))
}

/// Submit a single-leg option order.
#[utoipa::path(
    post,
    path = "/options/orders",
    request_body = OptionOrderRequest,
    responses(
        (status = 200, description = "Order submitted"),
        (status = 400, description = "Order failed validation", body = ErrorResponse),
        (status = 422, description = "Malformed order request", body = ErrorResponse),
        (status = 502, description = "Broker error", body = ErrorResponse)
    ),
    tag = "Options"
)]
pub async fn submit_option_order(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<OptionOrderRequest>, JsonRejection>,
) -> Result<Json<Order>, ApiError> {
    let Json(request) = payload?;
    let symbol = request.symbol.clone();

    let intent = resolve_option_order(request)
        .inspect_err(|e| warn!("Rejected option order for {}: {}", symbol, e))?;

    info!("Submitting {} option order for {}", intent.order_type(), symbol);
    let order = state.broker.submit_order(intent).await?;
    info!("Option order {} accepted with status {}", order.id, order.status);

    Ok(Json(order))
}

/// Submit a multi-leg option order.
#[utoipa::path(
    post,
    path = "/options/orders/multi-leg",
    request_body = MultiLegOrderRequest,
    responses(
        (status = 200, description = "Order submitted"),
        (status = 400, description = "Order failed validation", body = ErrorResponse),
        (status = 422, description = "Malformed order request", body = ErrorResponse),
        (status = 502, description = "Broker error", body = ErrorResponse)
    ),
    tag = "Options"
)]
pub async fn submit_multi_leg_order(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<MultiLegOrderRequest>, JsonRejection>,
) -> Result<Json<Order>, ApiError> {
    let Json(request) = payload?;
    let leg_count = request.legs.len();

    let intent = resolve_multi_leg_order(request)
        .inspect_err(|e| warn!("Rejected multi-leg order ({} legs): {}", leg_count, e))?;

    info!(
        "Submitting {} multi-leg order with {} legs",
        intent.order_type(),
        leg_count
    );
    let order = state.broker.submit_order(intent).await?;
    info!(
        "Multi-leg order {} accepted with status {}",
        order.id, order.status
    );

    Ok(Json(order))
}

/// Exercise a held option position.
#[utoipa::path(
    post,
    path = "/options/exercise/{symbol_or_id}",
    params(
        ("symbol_or_id" = String, Path, description = "Contract symbol or ID")
    ),
    responses(
        (status = 200, description = "Exercise submitted", body = ExerciseResponse),
        (status = 404, description = "Position not found", body = ErrorResponse),
        (status = 502, description = "Broker error", body = ErrorResponse)
    ),
    tag = "Options"
)]
pub async fn exercise_option(
    State(state): State<Arc<AppState>>,
    Path(symbol_or_id): Path<String>,
) -> Result<Json<ExerciseResponse>, ApiError> {
    let symbol_or_id = path_param("symbol_or_id", symbol_or_id)?;
    state.broker.exercise_option(&symbol_or_id).await?;
    info!("Exercised option position {}", symbol_or_id);

    Ok(Json(ExerciseResponse {
        status: "exercised".to_string(),
        symbol_or_id,
    }))
}
