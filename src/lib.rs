//! # Alpaca Paper Trading API - REST API Server
//!
//! A REST facade over the [Alpaca](https://alpaca.markets) brokerage API for
//! paper trading equities and options. Requests are validated, resolved into
//! Alpaca order shapes and forwarded; Alpaca's responses are returned as JSON.
//! Built with [Axum](https://crates.io/crates/axum) and documented through
//! [utoipa](https://crates.io/crates/utoipa).
//!
//! ## Key Features
//!
//! - **Order Resolution**: Market, limit, stop, stop-limit and trailing stop
//!   equity orders, single-leg option orders and 2 to 4 leg option strategies,
//!   each checked for the prices its type requires before submission.
//!
//! - **Two-Stage Validation**: Malformed payloads are rejected with `422`,
//!   well-formed but incomplete orders with `400` and a readable message.
//!
//! - **Market Data**: Latest stock and option quotes, option snapshots and
//!   full option chains.
//!
//! - **OpenAPI Documentation**: Swagger UI at `/swagger-ui/`.
//!
//! ## Architecture
//!
//! ```text
//! HTTP request
//!   └── models     (schema: JSON body / query string → typed request, 422)
//!         └── resolver   (semantic: request → OrderIntent, 400)
//!               └── broker     (Broker trait → alpaca_client::AlpacaClient)
//!                     └── Alpaca REST (errors → 404 / 502)
//! ```
//!
//! ## Module Structure
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`api`] | Route handlers and router configuration |
//! | [`broker`] | Brokerage trait consumed by the handlers |
//! | [`config`] | TOML and environment configuration |
//! | [`error`] | API error types with `IntoResponse` implementation |
//! | [`models`] | Request/response DTOs with OpenAPI schemas |
//! | [`resolver`] | Order request to order intent resolution |
//! | [`state`] | Application state management |
//!
//! ## API Endpoints
//!
//! ### Account
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/health` | Health check |
//! | GET | `/account` | Trading account |
//! | GET | `/clock` | Market clock |
//!
//! ### Orders & Positions
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/orders` | Submit equity order |
//! | GET | `/orders?status=open` | List orders |
//! | GET | `/orders/{order_id}` | Get order |
//! | DELETE | `/orders/{order_id}` | Cancel order |
//! | DELETE | `/orders` | Cancel all orders |
//! | GET | `/positions` | List positions |
//! | GET | `/positions/{symbol}` | Get position |
//! | DELETE | `/positions/{symbol}` | Close position (optional qty/percentage body) |
//! | GET | `/quotes/{symbol}` | Latest stock quote |
//!
//! ### Options
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/options/contracts` | Search contracts |
//! | GET | `/options/contracts/{symbol_or_id}` | Get contract |
//! | GET | `/options/chain/{underlying_symbol}` | Option chain snapshots |
//! | GET | `/options/quotes/{symbol}` | Latest option quote |
//! | GET | `/options/snapshots/{symbol}` | Option snapshot |
//! | POST | `/options/orders` | Submit option order |
//! | POST | `/options/orders/multi-leg` | Submit multi-leg order |
//! | POST | `/options/exercise/{symbol_or_id}` | Exercise position |
//!
//! ## Example Usage
//!
//! ### Starting the Server
//!
//! ```bash
//! # Credentials (or put them in .env)
//! export ALPACA_API_KEY=...
//! export ALPACA_SECRET_KEY=...
//!
//! cargo run
//!
//! # With custom host/port
//! HOST=127.0.0.1 PORT=3000 cargo run
//!
//! # With a config file
//! CONFIG_PATH=config.toml cargo run
//! ```
//!
//! ### API Requests
//!
//! ```bash
//! # Buy 10 shares of AAPL at market
//! curl -X POST http://localhost:8080/orders \
//!   -H "Content-Type: application/json" \
//!   -d '{"symbol": "AAPL", "qty": 10, "side": "buy", "type": "market"}'
//!
//! # Bull call spread
//! curl -X POST http://localhost:8080/options/orders/multi-leg \
//!   -H "Content-Type: application/json" \
//!   -d '{"qty": 1, "type": "limit", "limit_price": 1.50, "legs": [
//!         {"symbol": "AAPL250117C00150000", "ratio_qty": 1, "side": "buy", "position_intent": "buy_to_open"},
//!         {"symbol": "AAPL250117C00160000", "ratio_qty": 1, "side": "sell", "position_intent": "sell_to_open"}]}'
//!
//! # Close half of a position
//! curl -X DELETE http://localhost:8080/positions/AAPL \
//!   -H "Content-Type: application/json" -d '{"percentage": 50}'
//! ```
//!
//! ## Dependencies
//!
//! - **axum** (0.8): Async web framework
//! - **tower-http** (0.6): HTTP middleware (CORS, tracing)
//! - **alpaca-client**: Typed Alpaca REST client (workspace crate, reqwest)
//! - **utoipa** (5.4): OpenAPI documentation generation
//! - **tokio** (1.49): Async runtime
//! - **serde** (1.0): Serialization/deserialization
//! - **rust_decimal**: Exact prices and quantities
//! - **tracing** (0.1): Structured logging

pub mod api;
pub mod broker;
pub mod config;
pub mod error;
pub mod models;
pub mod resolver;
pub mod state;
