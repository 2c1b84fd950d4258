//! Request and response types for the Alpaca REST APIs.
//!
//! Order intents mirror Alpaca's flat order request shape field for field.
//! Response entities keep Alpaca's string-encoded numerics as strings so they
//! can be passed back to callers unchanged.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};


// ============================================================================
// Enumerations
// ============================================================================

/// Order side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
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
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderType {
    /// Market order.
    Market,
    /// Limit order.
    Limit,
    /// Stop order.
    Stop,
    /// Stop-limit order.
    StopLimit,
    /// Trailing stop order.
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
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeInForce {
    /// Valid for the current trading day.
    #[default]
    Day,
    /// Good till canceled.
    Gtc,
    /// Market/limit on open.
    Opg,
    /// Market/limit on close.
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

/// Whether an option order opens or closes a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PositionIntent {
    /// Buy to open a long position.
    BuyToOpen,
    /// Buy to close a short position.
    BuyToClose,
    /// Sell to open a short position.
    SellToOpen,
    /// Sell to close a long position.
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

/// Order class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderClass {
    /// Single order.
    Simple,
    /// Multi-leg option order.
    Mleg,
    /// Bracket order.
    Bracket,
    /// One-cancels-other.
    Oco,
    /// One-triggers-other.
    Oto,
}

/// Order status filter for listing orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryOrderStatus {
    /// Open orders only.
    #[default]
    Open,
    /// Closed orders only.
    Closed,
    /// All orders.
    All,
}

/// Option contract type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractType {
    /// Call option.
    Call,
    /// Put option.
    Put,
}

/// Option exercise style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseStyle {
    /// Exercisable any time before expiry.
    American,
    /// Exercisable at expiry only.
    European,
}

// ============================================================================
// Order Intents
// ============================================================================

/// Fields shared by every order shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OrderFields {
    /// Symbol. Absent for multi-leg orders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    /// Quantity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qty: Option<Decimal>,
    /// Notional value in dollars.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notional: Option<Decimal>,
    /// Order side. Absent for multi-leg orders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<OrderSide>,
    /// Time in force.
    pub time_in_force: TimeInForce,
    /// Extended hours trading.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extended_hours: Option<bool>,
    /// Client order ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_order_id: Option<String>,
    /// Order class.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_class: Option<OrderClass>,
    /// Legs of a multi-leg order, in submission order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legs: Option<Vec<OptionLegIntent>>,
    /// Option position intent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_intent: Option<PositionIntent>,
}

/// A fully resolved order ready for `POST /v2/orders`.
///
/// Each variant carries exactly the price fields its order type needs, so an
/// intent can never be submitted with a missing limit or stop price.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OrderIntent {
    /// Market order.
    Market {
        /// Shared fields.
        #[serde(flatten)]
        fields: OrderFields,
    },
    /// Limit order.
    Limit {
        /// Shared fields.
        #[serde(flatten)]
        fields: OrderFields,
        /// Limit price.
        limit_price: Decimal,
    },
    /// Stop order.
    Stop {
        /// Shared fields.
        #[serde(flatten)]
        fields: OrderFields,
        /// Stop price.
        stop_price: Decimal,
    },
    /// Stop-limit order.
    StopLimit {
        /// Shared fields.
        #[serde(flatten)]
        fields: OrderFields,
        /// Limit price.
        limit_price: Decimal,
        /// Stop price.
        stop_price: Decimal,
    },
    /// Trailing stop order.
    TrailingStop {
        /// Shared fields.
        #[serde(flatten)]
        fields: OrderFields,
        /// Trail in dollars.
        #[serde(skip_serializing_if = "Option::is_none")]
        trail_price: Option<Decimal>,
        /// Trail in percent.
        #[serde(skip_serializing_if = "Option::is_none")]
        trail_percent: Option<Decimal>,
    },
}

impl OrderIntent {
    /// Returns the order type of this intent.
    #[must_use]
    pub fn order_type(&self) -> OrderType {
        match self {
            Self::Market { .. } => OrderType::Market,
            Self::Limit { .. } => OrderType::Limit,
            Self::Stop { .. } => OrderType::Stop,
            Self::StopLimit { .. } => OrderType::StopLimit,
            Self::TrailingStop { .. } => OrderType::TrailingStop,
        }
    }

    /// Returns the fields shared by every order shape.
    #[must_use]
    pub fn fields(&self) -> &OrderFields {
        match self {
            Self::Market { fields }
            | Self::Limit { fields, .. }
            | Self::Stop { fields, .. }
            | Self::StopLimit { fields, .. }
            | Self::TrailingStop { fields, .. } => fields,
        }
    }

    /// Returns the limit price, if this order type carries one.
    #[must_use]
    pub fn limit_price(&self) -> Option<Decimal> {
        match self {
            Self::Limit { limit_price, .. } | Self::StopLimit { limit_price, .. } => {
                Some(*limit_price)
            }
            _ => None,
        }
    }

    /// Returns the stop price, if this order type carries one.
    #[must_use]
    pub fn stop_price(&self) -> Option<Decimal> {
        match self {
            Self::Stop { stop_price, .. } | Self::StopLimit { stop_price, .. } => {
                Some(*stop_price)
            }
            _ => None,
        }
    }
}

/// One leg of a multi-leg option order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionLegIntent {
    /// Option contract symbol.
    pub symbol: String,
    /// Ratio of this leg relative to the order quantity.
    pub ratio_qty: f64,
    /// Leg side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<OrderSide>,
    /// Leg position intent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_intent: Option<PositionIntent>,
}

// ============================================================================
// Query Parameters
// ============================================================================

/// Query for listing orders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OrderQuery {
    /// Status filter.
    pub status: QueryOrderStatus,
}

/// Partial close parameters for `DELETE /v2/positions/{symbol}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ClosePositionOptions {
    /// Number of shares or contracts to close.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qty: Option<Decimal>,
    /// Percentage of the position to close.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage: Option<Decimal>,
}

/// Filters for `GET /v2/options/contracts`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OptionContractsQuery {
    /// Underlying symbols, sent comma separated.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_comma_separated"
    )]
    pub underlying_symbols: Option<Vec<String>>,
    /// Exact expiration date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<NaiveDate>,
    /// Expiration on or after.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date_gte: Option<NaiveDate>,
    /// Expiration on or before.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date_lte: Option<NaiveDate>,
    /// Root symbol.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_symbol: Option<String>,
    /// Contract type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub contract_type: Option<ContractType>,
    /// Exercise style.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<ExerciseStyle>,
    /// Minimum strike price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strike_price_gte: Option<Decimal>,
    /// Maximum strike price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strike_price_lte: Option<Decimal>,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Pagination token from a previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
}

/// Filters for the option chain snapshot endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OptionChainQuery {
    /// Contract type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub contract_type: Option<ContractType>,
    /// Minimum strike price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strike_price_gte: Option<f64>,
    /// Maximum strike price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strike_price_lte: Option<f64>,
    /// Exact expiration date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<NaiveDate>,
    /// Expiration on or after.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date_gte: Option<NaiveDate>,
    /// Expiration on or before.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date_lte: Option<NaiveDate>,
    /// Root symbol.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_symbol: Option<String>,
    /// Pagination token; managed by the client while walking pages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
}

fn serialize_comma_separated<S: Serializer>(
    values: &Option<Vec<String>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match values {
        Some(values) => serializer.serialize_str(&values.join(",")),
        None => serializer.serialize_none(),
    }
}

// ============================================================================
// Account & Clock
// ============================================================================

/// Trading account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Account {
    /// Account ID.
    pub id: String,
    /// Account number.
    pub account_number: String,
    /// Account status.
    pub status: String,
    /// Currency.
    pub currency: Option<String>,
    /// Buying power.
    pub buying_power: Option<String>,
    /// Reg T buying power.
    pub regt_buying_power: Option<String>,
    /// Day trading buying power.
    pub daytrading_buying_power: Option<String>,
    /// Options buying power.
    pub options_buying_power: Option<String>,
    /// Non-marginable buying power.
    pub non_marginable_buying_power: Option<String>,
    /// Cash balance.
    pub cash: Option<String>,
    /// Portfolio value.
    pub portfolio_value: Option<String>,
    /// Equity.
    pub equity: Option<String>,
    /// Equity at the previous close.
    pub last_equity: Option<String>,
    /// Long market value.
    pub long_market_value: Option<String>,
    /// Short market value.
    pub short_market_value: Option<String>,
    /// Initial margin.
    pub initial_margin: Option<String>,
    /// Maintenance margin.
    pub maintenance_margin: Option<String>,
    /// Buying power multiplier.
    pub multiplier: Option<String>,
    /// Day trades in the last five sessions.
    pub daytrade_count: Option<i64>,
    /// Pattern day trader flag.
    pub pattern_day_trader: Option<bool>,
    /// Trading blocked flag.
    pub trading_blocked: Option<bool>,
    /// Transfers blocked flag.
    pub transfers_blocked: Option<bool>,
    /// Account blocked flag.
    pub account_blocked: Option<bool>,
    /// Shorting enabled flag.
    pub shorting_enabled: Option<bool>,
    /// Approved options trading level.
    pub options_approved_level: Option<i64>,
    /// Effective options trading level.
    pub options_trading_level: Option<i64>,
    /// Creation timestamp.
    pub created_at: Option<String>,
}

/// Market clock.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Clock {
    /// Current timestamp.
    pub timestamp: String,
    /// Whether the market is open.
    pub is_open: bool,
    /// Next market open.
    pub next_open: String,
    /// Next market close.
    pub next_close: String,
}

// ============================================================================
// Orders & Positions
// ============================================================================

/// Order as reported by Alpaca.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Order {
    /// Broker order ID.
    pub id: String,
    /// Client order ID.
    pub client_order_id: String,
    /// Creation timestamp.
    pub created_at: Option<String>,
    /// Last update timestamp.
    pub updated_at: Option<String>,
    /// Submission timestamp.
    pub submitted_at: Option<String>,
    /// Fill timestamp.
    pub filled_at: Option<String>,
    /// Expiry timestamp.
    pub expired_at: Option<String>,
    /// Cancel timestamp.
    pub canceled_at: Option<String>,
    /// Failure timestamp.
    pub failed_at: Option<String>,
    /// Replace timestamp.
    pub replaced_at: Option<String>,
    /// ID of the order that replaced this one.
    pub replaced_by: Option<String>,
    /// ID of the order this one replaced.
    pub replaces: Option<String>,
    /// Asset ID.
    pub asset_id: Option<String>,
    /// Symbol. Absent for multi-leg parents.
    pub symbol: Option<String>,
    /// Asset class.
    pub asset_class: Option<String>,
    /// Notional value.
    pub notional: Option<String>,
    /// Quantity.
    pub qty: Option<String>,
    /// Filled quantity.
    pub filled_qty: Option<String>,
    /// Average fill price.
    pub filled_avg_price: Option<String>,
    /// Order class.
    pub order_class: Option<String>,
    /// Order type.
    pub order_type: Option<String>,
    /// Order type (duplicate of `order_type` kept by Alpaca).
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Order side.
    pub side: Option<String>,
    /// Position intent.
    pub position_intent: Option<String>,
    /// Time in force.
    pub time_in_force: Option<String>,
    /// Limit price.
    pub limit_price: Option<String>,
    /// Stop price.
    pub stop_price: Option<String>,
    /// Order status.
    pub status: String,
    /// Extended hours flag.
    pub extended_hours: bool,
    /// Child legs of a multi-leg order.
    pub legs: Option<Vec<Order>>,
    /// Trail percent.
    pub trail_percent: Option<String>,
    /// Trail price.
    pub trail_price: Option<String>,
    /// High water mark for trailing stops.
    pub hwm: Option<String>,
    /// Leg ratio quantity.
    pub ratio_qty: Option<String>,
}

/// Result of one cancellation within a cancel-all request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CancelStatus {
    /// Order ID.
    pub id: String,
    /// HTTP status of the individual cancellation.
    pub status: u16,
    /// Response body of the individual cancellation.
    #[serde(default)]
    pub body: Option<serde_json::Value>,
}

/// Open position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Position {
    /// Asset ID.
    pub asset_id: String,
    /// Symbol.
    pub symbol: String,
    /// Exchange.
    pub exchange: Option<String>,
    /// Asset class.
    pub asset_class: Option<String>,
    /// Average entry price.
    pub avg_entry_price: Option<String>,
    /// Quantity.
    pub qty: Option<String>,
    /// Quantity not tied up in open orders.
    pub qty_available: Option<String>,
    /// Side (long/short).
    pub side: Option<String>,
    /// Market value.
    pub market_value: Option<String>,
    /// Cost basis.
    pub cost_basis: Option<String>,
    /// Unrealized P&L.
    pub unrealized_pl: Option<String>,
    /// Unrealized P&L percent.
    pub unrealized_plpc: Option<String>,
    /// Unrealized intraday P&L.
    pub unrealized_intraday_pl: Option<String>,
    /// Unrealized intraday P&L percent.
    pub unrealized_intraday_plpc: Option<String>,
    /// Current price.
    pub current_price: Option<String>,
    /// Previous close price.
    pub lastday_price: Option<String>,
    /// Percent change today.
    pub change_today: Option<String>,
}

// ============================================================================
// Market Data
// ============================================================================

/// Latest quote. Accepts both Alpaca's compact keys and the long names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Quote {
    /// Symbol.
    pub symbol: Option<String>,
    /// Quote timestamp.
    #[serde(alias = "t")]
    pub timestamp: Option<String>,
    /// Ask exchange.
    #[serde(alias = "ax")]
    pub ask_exchange: Option<String>,
    /// Ask price.
    #[serde(alias = "ap")]
    pub ask_price: f64,
    /// Ask size.
    #[serde(alias = "as")]
    pub ask_size: f64,
    /// Bid exchange.
    #[serde(alias = "bx")]
    pub bid_exchange: Option<String>,
    /// Bid price.
    #[serde(alias = "bp")]
    pub bid_price: f64,
    /// Bid size.
    #[serde(alias = "bs")]
    pub bid_size: f64,
}

/// Latest trade.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Trade {
    /// Trade timestamp.
    #[serde(alias = "t")]
    pub timestamp: Option<String>,
    /// Exchange.
    #[serde(alias = "x")]
    pub exchange: Option<String>,
    /// Trade price.
    #[serde(alias = "p")]
    pub price: f64,
    /// Trade size.
    #[serde(alias = "s")]
    pub size: f64,
}

/// Option greeks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Greeks {
    /// Delta.
    pub delta: f64,
    /// Gamma.
    pub gamma: f64,
    /// Theta.
    pub theta: f64,
    /// Vega.
    pub vega: f64,
    /// Rho.
    pub rho: f64,
}

/// Option snapshot: latest trade, latest quote, greeks and implied volatility.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionSnapshot {
    /// Contract symbol.
    pub symbol: Option<String>,
    /// Latest trade.
    #[serde(alias = "latestTrade")]
    pub latest_trade: Option<Trade>,
    /// Latest quote.
    #[serde(alias = "latestQuote")]
    pub latest_quote: Option<Quote>,
    /// Implied volatility.
    #[serde(alias = "impliedVolatility")]
    pub implied_volatility: Option<f64>,
    /// Greeks.
    pub greeks: Option<Greeks>,
}

/// Option chain keyed by contract symbol.
pub type OptionChain = BTreeMap<String, OptionSnapshot>;

/// Option contract.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionContract {
    /// Contract ID.
    pub id: String,
    /// Contract symbol.
    pub symbol: String,
    /// Human-readable name.
    pub name: Option<String>,
    /// Contract status.
    pub status: Option<String>,
    /// Whether the contract is tradable.
    pub tradable: bool,
    /// Expiration date.
    pub expiration_date: Option<String>,
    /// Root symbol.
    pub root_symbol: Option<String>,
    /// Underlying symbol.
    pub underlying_symbol: Option<String>,
    /// Underlying asset ID.
    pub underlying_asset_id: Option<String>,
    /// Contract type.
    #[serde(rename = "type")]
    pub contract_type: Option<String>,
    /// Exercise style.
    pub style: Option<String>,
    /// Strike price.
    pub strike_price: Option<String>,
    /// Contract size.
    pub size: Option<String>,
    /// Open interest.
    pub open_interest: Option<String>,
    /// Open interest date.
    pub open_interest_date: Option<String>,
    /// Close price.
    pub close_price: Option<String>,
    /// Close price date.
    pub close_price_date: Option<String>,
}

/// A page of option contracts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionContractsPage {
    /// Contracts on this page.
    pub option_contracts: Vec<OptionContract>,
    /// Token for the next page.
    pub next_page_token: Option<String>,
}

// ============================================================================
// Wire Envelopes
// ============================================================================

/// Envelope of `GET /v2/stocks/{symbol}/quotes/latest`.
#[derive(Debug, Deserialize)]
pub(crate) struct LatestStockQuoteEnvelope {
    pub quote: Quote,
}

/// Envelope of `GET /v1beta1/options/quotes/latest`.
#[derive(Debug, Deserialize)]
pub(crate) struct LatestOptionQuotesEnvelope {
    #[serde(default)]
    pub quotes: HashMap<String, Quote>,
}

/// Envelope of the option snapshot endpoints.
#[derive(Debug, Deserialize)]
pub(crate) struct OptionSnapshotsEnvelope {
    #[serde(default)]
    pub snapshots: HashMap<String, OptionSnapshot>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

/// Alpaca error body.
#[derive(Debug, Deserialize)]
pub(crate) struct AlpacaErrorBody {
    #[serde(default)]
    pub code: Option<i64>,
    pub message: String,
}
