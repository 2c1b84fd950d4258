//! Order resolution.
//!
//! Turns a structurally valid order request into exactly one brokerage
//! [`OrderIntent`], checking the fields each order type requires. Resolution
//! is pure and synchronous; a request either resolves completely or fails
//! with a [`ValidationError`].

use crate::models::{
    MultiLegOrderRequest, OptionLeg, OptionOrderRequest, OrderRequest, OrderSide, OrderType,
    PositionIntent, TimeInForce,
};
use alpaca_client::{OptionLegIntent, OrderClass, OrderFields, OrderIntent};
use rust_decimal::Decimal;
use thiserror::Error;

/// Minimum number of legs in a multi-leg order.
pub const MIN_LEGS: usize = 2;

/// Maximum number of legs in a multi-leg order.
pub const MAX_LEGS: usize = 4;

/// Semantic validation failure of an order request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Limit order without a limit price.
    #[error("limit_price required for limit orders")]
    MissingLimitPrice,

    /// Stop order without a stop price.
    #[error("stop_price required for stop orders")]
    MissingStopPrice,

    /// Stop-limit order missing either price.
    #[error("limit_price and stop_price required for stop_limit orders")]
    MissingStopLimitPrices,

    /// Multi-leg order with fewer than two legs.
    #[error("At least 2 legs are required for multi-leg orders")]
    TooFewLegs,

    /// Multi-leg order with more than four legs.
    #[error("At most 4 legs are allowed for multi-leg orders")]
    TooManyLegs,

    /// Order type not accepted for equity orders.
    #[error("Unsupported order type: {0}")]
    UnsupportedOrderType(OrderType),

    /// Order type not accepted for single-leg option orders.
    #[error("Unsupported order type for options: {0}")]
    UnsupportedOptionOrderType(OrderType),

    /// Order type not accepted for multi-leg orders.
    #[error("Unsupported order type for multi-leg: {0}")]
    UnsupportedMultiLegOrderType(OrderType),
}

/// Resolves an equity order request.
///
/// # Errors
/// Returns [`ValidationError`] when a price required by the order type is
/// missing.
pub fn resolve_equity_order(request: OrderRequest) -> Result<OrderIntent, ValidationError> {
    let mut fields = OrderFields {
        symbol: Some(request.symbol),
        qty: request.qty,
        notional: request.notional,
        side: Some(to_wire_side(request.side)),
        time_in_force: to_wire_time_in_force(request.time_in_force),
        extended_hours: Some(request.extended_hours),
        client_order_id: request.client_order_id,
        ..Default::default()
    };

    if request.order_type == OrderType::TrailingStop {
        fields.notional = None;
        return Ok(OrderIntent::TrailingStop {
            fields,
            trail_price: request.trail_price,
            trail_percent: request.trail_percent,
        });
    }

    priced_intent(
        ValidationError::UnsupportedOrderType,
        request.order_type,
        fields,
        request.limit_price,
        request.stop_price,
    )
}

/// Resolves a single-leg option order request.
///
/// # Errors
/// Returns [`ValidationError`] when a required price is missing or the order
/// type is `trailing_stop`.
pub fn resolve_option_order(request: OptionOrderRequest) -> Result<OrderIntent, ValidationError> {
    let fields = OrderFields {
        symbol: Some(request.symbol),
        qty: Some(Decimal::from(request.qty)),
        side: Some(to_wire_side(request.side)),
        time_in_force: to_wire_time_in_force(request.time_in_force),
        position_intent: request.position_intent.map(to_wire_position_intent),
        ..Default::default()
    };

    priced_intent(
        ValidationError::UnsupportedOptionOrderType,
        request.order_type,
        fields,
        request.limit_price,
        request.stop_price,
    )
}

/// Resolves a multi-leg option order request.
///
/// The leg count is checked before the order type.
///
/// # Errors
/// Returns [`ValidationError`] when the leg count is outside 2..=4, the order
/// type is neither market nor limit, or a limit order has no limit price.
pub fn resolve_multi_leg_order(
    request: MultiLegOrderRequest,
) -> Result<OrderIntent, ValidationError> {
    if request.legs.len() < MIN_LEGS {
        return Err(ValidationError::TooFewLegs);
    }
    if request.legs.len() > MAX_LEGS {
        return Err(ValidationError::TooManyLegs);
    }

    let fields = OrderFields {
        qty: Some(Decimal::from(request.qty)),
        time_in_force: to_wire_time_in_force(request.time_in_force),
        order_class: Some(OrderClass::Mleg),
        legs: Some(request.legs.into_iter().map(to_leg_intent).collect()),
        ..Default::default()
    };

    match request.order_type {
        OrderType::Market => Ok(OrderIntent::Market { fields }),
        OrderType::Limit => {
            let limit_price = request
                .limit_price
                .ok_or(ValidationError::MissingLimitPrice)?;
            Ok(OrderIntent::Limit {
                fields,
                limit_price,
            })
        }
        order_type => Err(ValidationError::UnsupportedMultiLegOrderType(order_type)),
    }
}

/// Builds a market, limit, stop or stop-limit intent. `unsupported` builds
/// the error for order types the caller does not accept here.
fn priced_intent(
    unsupported: fn(OrderType) -> ValidationError,
    order_type: OrderType,
    mut fields: OrderFields,
    limit_price: Option<Decimal>,
    stop_price: Option<Decimal>,
) -> Result<OrderIntent, ValidationError> {
    match order_type {
        OrderType::Market => Ok(OrderIntent::Market { fields }),
        OrderType::Limit => {
            let limit_price = limit_price.ok_or(ValidationError::MissingLimitPrice)?;
            Ok(OrderIntent::Limit {
                fields,
                limit_price,
            })
        }
        OrderType::Stop => {
            let stop_price = stop_price.ok_or(ValidationError::MissingStopPrice)?;
            Ok(OrderIntent::Stop { fields, stop_price })
        }
        OrderType::StopLimit => match (limit_price, stop_price) {
            (Some(limit_price), Some(stop_price)) => {
                fields.notional = None;
                Ok(OrderIntent::StopLimit {
                    fields,
                    limit_price,
                    stop_price,
                })
            }
            _ => Err(ValidationError::MissingStopLimitPrices),
        },
        OrderType::TrailingStop => Err(unsupported(order_type)),
    }
}

fn to_leg_intent(leg: OptionLeg) -> OptionLegIntent {
    OptionLegIntent {
        symbol: leg.symbol,
        ratio_qty: leg.ratio_qty,
        side: leg.side.map(to_wire_side),
        position_intent: leg.position_intent.map(to_wire_position_intent),
    }
}

fn to_wire_side(side: OrderSide) -> alpaca_client::OrderSide {
    match side {
        OrderSide::Buy => alpaca_client::OrderSide::Buy,
        OrderSide::Sell => alpaca_client::OrderSide::Sell,
    }
}

fn to_wire_time_in_force(tif: TimeInForce) -> alpaca_client::TimeInForce {
    match tif {
        TimeInForce::Day => alpaca_client::TimeInForce::Day,
        TimeInForce::Gtc => alpaca_client::TimeInForce::Gtc,
        TimeInForce::Opg => alpaca_client::TimeInForce::Opg,
        TimeInForce::Cls => alpaca_client::TimeInForce::Cls,
        TimeInForce::Ioc => alpaca_client::TimeInForce::Ioc,
        TimeInForce::Fok => alpaca_client::TimeInForce::Fok,
    }
}

fn to_wire_position_intent(intent: PositionIntent) -> alpaca_client::PositionIntent {
    match intent {
        PositionIntent::BuyToOpen => alpaca_client::PositionIntent::BuyToOpen,
        PositionIntent::BuyToClose => alpaca_client::PositionIntent::BuyToClose,
        PositionIntent::SellToOpen => alpaca_client::PositionIntent::SellToOpen,
        PositionIntent::SellToClose => alpaca_client::PositionIntent::SellToClose,
    }
}
