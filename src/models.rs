//! Request and response models for the REST API.
//!
//! These types are the accepted input shapes. Deserialization is the only
//! structural check applied: unknown enum values, missing required fields and
//! malformed numbers or dates are rejected before any handler logic runs.

use alpaca_client::CancelStatus;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[cfg(test)]
mod tests;

// ============================================================================
// Enumerations
// ============================================================================

/// Order side for trading operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    /// Buy order.
    Buy,
    /// Sell order.
    Sell,
}

impl std::fmt::Display for OrderSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buy => write!(f, "buy"),
            Self::Sell => write!(f, "sell"),
        }
    }
}

/// Order type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum OrderType {
    /// Execute at the best available price.
    Market,
    /// Execute at the limit price or better.
    Limit,
    /// Becomes a market order once the stop price trades.
    Stop,
    /// Becomes a limit order once the stop price trades.
    StopLimit,
    /// Stop that follows the price by a fixed amount or percent.
    TrailingStop,
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Market => write!(f, "market"),
            Self::Limit => write!(f, "limit"),
            Self::Stop => write!(f, "stop"),
            Self::StopLimit => write!(f, "stop_limit"),
            Self::TrailingStop => write!(f, "trailing_stop"),
        }
    }
}

/// Time in force.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TimeInForce {
    /// Day order (default).
    #[default]
    Day,
    /// Good till canceled.
    Gtc,
    /// On open.
    Opg,
    /// On close.
    Cls,
    /// Immediate or cancel.
    Ioc,
    /// Fill or kill.
    Fok,
}

impl std::fmt::Display for TimeInForce {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Day => write!(f, "day"),
            Self::Gtc => write!(f, "gtc"),
            Self::Opg => write!(f, "opg"),
            Self::Cls => write!(f, "cls"),
            Self::Ioc => write!(f, "ioc"),
            Self::Fok => write!(f, "fok"),
        }
    }
}

/// Option position intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PositionIntent {
    /// Buy to open.
    BuyToOpen,
    /// Buy to close.
    BuyToClose,
    /// Sell to open.
    SellToOpen,
    /// Sell to close.
    SellToClose,
}

impl std::fmt::Display for PositionIntent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BuyToOpen => write!(f, "buy_to_open"),
            Self::BuyToClose => write!(f, "buy_to_close"),
            Self::SellToOpen => write!(f, "sell_to_open"),
            Self::SellToClose => write!(f, "sell_to_close"),
        }
    }
}

/// Order status filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum QueryOrderStatus {
    /// Open orders (default).
    #[default]
    Open,
    /// Closed orders.
    Closed,
    /// All orders.
    All,
}

/// Option contract type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ContractType {
    /// Call.
    Call,
    /// Put.
    Put,
}

/// Option exercise style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseStyle {
    /// American style.
    American,
    /// European style.
    European,
}

// ============================================================================
// Order Requests
// ============================================================================

/// Request to submit an equity order.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct OrderRequest {
    /// Symbol (e.g., "AAPL").
    pub symbol: String,
    /// Number of shares.
    #[serde(default)]
    pub qty: Option<Decimal>,
    /// Dollar amount to trade.
    #[serde(default)]
    pub notional: Option<Decimal>,
    /// Order side.
    pub side: OrderSide,
    /// Order type.
    #[serde(rename = "type")]
    pub order_type: OrderType,
    /// Time in force (default: day).
    #[serde(default)]
    pub time_in_force: TimeInForce,
    /// Limit price, required for limit and stop_limit orders.
    #[serde(default)]
    pub limit_price: Option<Decimal>,
    /// Stop price, required for stop and stop_limit orders.
    #[serde(default)]
    pub stop_price: Option<Decimal>,
    /// Trail in dollars for trailing_stop orders.
    #[serde(default)]
    pub trail_price: Option<Decimal>,
    /// Trail in percent for trailing_stop orders.
    #[serde(default)]
    pub trail_percent: Option<Decimal>,
    /// Allow execution outside regular hours.
    #[serde(default)]
    pub extended_hours: bool,
    /// Client-assigned order ID.
    #[serde(default)]
    pub client_order_id: Option<String>,
}

/// Request to submit a single-leg option order.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct OptionOrderRequest {
    /// OCC contract symbol (e.g., "AAPL250117C00150000").
    pub symbol: String,
    /// Number of contracts.
    pub qty: u32,
    /// Order side.
    pub side: OrderSide,
    /// Order type. trailing_stop is not accepted for options.
    #[serde(rename = "type")]
    pub order_type: OrderType,
    /// Time in force (default: day).
    #[serde(default)]
    pub time_in_force: TimeInForce,
    /// Whether the order opens or closes a position.
    #[serde(default)]
    pub position_intent: Option<PositionIntent>,
    /// Limit price, required for limit and stop_limit orders.
    #[serde(default)]
    pub limit_price: Option<Decimal>,
    /// Stop price, required for stop and stop_limit orders.
    #[serde(default)]
    pub stop_price: Option<Decimal>,
}

/// One leg of a multi-leg option order.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct OptionLeg {
    /// OCC contract symbol.
    pub symbol: String,
    /// Ratio of this leg relative to the order quantity.
    pub ratio_qty: f64,
    /// Leg side.
    #[serde(default)]
    pub side: Option<OrderSide>,
    /// Leg position intent.
    #[serde(default)]
    pub position_intent: Option<PositionIntent>,
}

/// Request to submit a multi-leg option order (spreads, straddles, ...).
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct MultiLegOrderRequest {
    /// Number of strategy units.
    pub qty: u32,
    /// Order type: market or limit.
    #[serde(rename = "type")]
    pub order_type: OrderType,
    /// Time in force (default: day).
    #[serde(default)]
    pub time_in_force: TimeInForce,
    /// Legs, between 2 and 4.
    pub legs: Vec<OptionLeg>,
    /// Net limit price, required for limit orders.
    #[serde(default)]
    pub limit_price: Option<Decimal>,
}

/// Request to close a position. An empty body closes the whole position.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct ClosePositionRequest {
    /// Number of shares or contracts to close.
    #[serde(default)]
    pub qty: Option<Decimal>,
    /// Percentage of the position to close.
    #[serde(default)]
    pub percentage: Option<Decimal>,
}

impl ClosePositionRequest {
    /// Converts to broker close options. Zero values are treated as absent;
    /// `None` means close entirely.
    #[must_use]
    pub fn to_close_options(&self) -> Option<alpaca_client::ClosePositionOptions> {
        let qty = self.qty.filter(|qty| !qty.is_zero());
        let percentage = self.percentage.filter(|pct| !pct.is_zero());

        if qty.is_none() && percentage.is_none() {
            return None;
        }

        Some(alpaca_client::ClosePositionOptions { qty, percentage })
    }
}

// ============================================================================
// Query Parameters
// ============================================================================

/// Query parameters for listing orders.
#[derive(Debug, Clone, Copy, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OrderListQuery {
    /// Status filter (default: open).
    #[serde(default)]
    pub status: QueryOrderStatus,
}

impl From<OrderListQuery> for alpaca_client::OrderQuery {
    fn from(query: OrderListQuery) -> Self {
        let status = match query.status {
            QueryOrderStatus::Open => alpaca_client::QueryOrderStatus::Open,
            QueryOrderStatus::Closed => alpaca_client::QueryOrderStatus::Closed,
            QueryOrderStatus::All => alpaca_client::QueryOrderStatus::All,
        };
        Self { status }
    }
}

/// Query parameters for listing option contracts.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OptionContractsParams {
    /// Comma separated underlying symbols.
    pub underlying_symbols: Option<String>,
    /// Exact expiration date.
    pub expiration_date: Option<NaiveDate>,
    /// Expiration on or after.
    pub expiration_date_gte: Option<NaiveDate>,
    /// Expiration on or before.
    pub expiration_date_lte: Option<NaiveDate>,
    /// Root symbol.
    pub root_symbol: Option<String>,
    /// Contract type.
    #[serde(rename = "type")]
    pub contract_type: Option<ContractType>,
    /// Exercise style.
    pub style: Option<ExerciseStyle>,
    /// Minimum strike price.
    #[param(value_type = Option<String>)]
    pub strike_price_gte: Option<Decimal>,
    /// Maximum strike price.
    #[param(value_type = Option<String>)]
    pub strike_price_lte: Option<Decimal>,
    /// Page size.
    pub limit: Option<u32>,
    /// Pagination token.
    pub page_token: Option<String>,
}

impl From<OptionContractsParams> for alpaca_client::OptionContractsQuery {
    fn from(params: OptionContractsParams) -> Self {
        let underlying_symbols = params.underlying_symbols.map(|symbols| {
            symbols
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        });

        Self {
            underlying_symbols,
            expiration_date: params.expiration_date,
            expiration_date_gte: params.expiration_date_gte,
            expiration_date_lte: params.expiration_date_lte,
            root_symbol: params.root_symbol,
            contract_type: params.contract_type.map(contract_type_to_wire),
            style: params.style.map(|style| match style {
                ExerciseStyle::American => alpaca_client::ExerciseStyle::American,
                ExerciseStyle::European => alpaca_client::ExerciseStyle::European,
            }),
            strike_price_gte: params.strike_price_gte,
            strike_price_lte: params.strike_price_lte,
            limit: params.limit,
            page_token: params.page_token,
        }
    }
}

/// Query parameters for an option chain.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OptionChainParams {
    /// Contract type.
    #[serde(rename = "type")]
    pub contract_type: Option<ContractType>,
    /// Minimum strike price.
    pub strike_price_gte: Option<f64>,
    /// Maximum strike price.
    pub strike_price_lte: Option<f64>,
    /// Exact expiration date.
    pub expiration_date: Option<NaiveDate>,
    /// Expiration on or after.
    pub expiration_date_gte: Option<NaiveDate>,
    /// Expiration on or before.
    pub expiration_date_lte: Option<NaiveDate>,
    /// Root symbol.
    pub root_symbol: Option<String>,
}

impl From<OptionChainParams> for alpaca_client::OptionChainQuery {
    fn from(params: OptionChainParams) -> Self {
        Self {
            contract_type: params.contract_type.map(contract_type_to_wire),
            strike_price_gte: params.strike_price_gte,
            strike_price_lte: params.strike_price_lte,
            expiration_date: params.expiration_date,
            expiration_date_gte: params.expiration_date_gte,
            expiration_date_lte: params.expiration_date_lte,
            root_symbol: params.root_symbol,
            page_token: None,
        }
    }
}

fn contract_type_to_wire(contract_type: ContractType) -> alpaca_client::ContractType {
    match contract_type {
        ContractType::Call => alpaca_client::ContractType::Call,
        ContractType::Put => alpaca_client::ContractType::Put,
    }
}

// ============================================================================
// Responses
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
}

/// Response after cancelling an order.
#[derive(Debug, Serialize, ToSchema)]
pub struct CancelOrderResponse {
    /// Always "cancelled".
    pub status: String,
    /// The cancelled order ID.
    pub order_id: String,
}

/// Response after cancelling all orders.
#[derive(Debug, Serialize, ToSchema)]
pub struct CancelAllResponse {
    /// Always "cancelled".
    pub status: String,
    /// Per-order cancellation results.
    #[schema(value_type = Vec<Object>)]
    pub cancelled: Vec<CancelStatus>,
}

/// Response after exercising an option position.
#[derive(Debug, Serialize, ToSchema)]
pub struct ExerciseResponse {
    /// Always "exercised".
    pub status: String,
    /// The exercised contract symbol or ID.
    pub symbol_or_id: String,
}
