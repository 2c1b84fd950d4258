//! Route configuration.

use crate::api::handlers;
use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;

/// Creates the API router.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Account
        .route("/account", get(handlers::get_account))
        .route("/clock", get(handlers::get_clock))
        // Orders
        .route(
            "/orders",
            post(handlers::submit_order)
                .get(handlers::list_orders)
                .delete(handlers::cancel_all_orders),
        )
        .route(
            "/orders/{order_id}",
            get(handlers::get_order).delete(handlers::cancel_order),
        )
        // Positions
        .route("/positions", get(handlers::list_positions))
        .route(
            "/positions/{symbol}",
            get(handlers::get_position).delete(handlers::close_position),
        )
        // Market data
        .route("/quotes/{symbol}", get(handlers::get_stock_quote))
        // Options
        .route("/options/contracts", get(handlers::list_option_contracts))
        .route(
            "/options/contracts/{symbol_or_id}",
            get(handlers::get_option_contract),
        )
        .route(
            "/options/chain/{underlying_symbol}",
            get(handlers::get_option_chain),
        )
        .route("/options/quotes/{symbol}", get(handlers::get_option_quote))
        .route(
            "/options/snapshots/{symbol}",
            get(handlers::get_option_snapshot),
        )
        .route("/options/orders", post(handlers::submit_option_order))
        .route(
            "/options/orders/multi-leg",
            post(handlers::submit_multi_leg_order),
        )
        .route(
            "/options/exercise/{symbol_or_id}",
            post(handlers::exercise_option),
        )
        .with_state(state)
}
