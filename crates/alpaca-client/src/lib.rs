//! HTTP client library for the Alpaca trading and market data APIs.
//!
//! This crate provides a typed HTTP client for the subset of Alpaca's REST
//! endpoints used by the paper trading API server: account and clock, order
//! submission and management, positions, stock and option quotes, option
//! contracts, chains and snapshots, and option exercise.
//!
//! # Example
//!
//! ```no_run
//! use alpaca_client::{AlpacaClient, ClientConfig, Credentials};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), alpaca_client::Error> {
//!     let client = AlpacaClient::new(ClientConfig::paper(Credentials::new(
//!         "key-id".into(),
//!         "secret".into(),
//!     )))?;
//!
//!     let clock = client.get_clock().await?;
//!     println!("Market open: {}", clock.is_open);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::{
    AlpacaClient, ClientConfig, Credentials, DATA_BASE_URL, LIVE_TRADING_BASE_URL,
    PAPER_TRADING_BASE_URL,
};
pub use error::Error;
pub use types::*;
