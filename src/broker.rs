//! Brokerage port consumed by the HTTP layer.

use alpaca_client::{
    Account, AlpacaClient, CancelStatus, ClosePositionOptions, Clock, Error, OptionChain,
    OptionChainQuery, OptionContract, OptionContractsPage, OptionContractsQuery, OptionSnapshot,
    Order, OrderIntent, OrderQuery, Position, Quote,
};
use async_trait::async_trait;

/// Brokerage capabilities used by the REST handlers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Broker: Send + Sync {
    /// Gets the trading account.
    async fn get_account(&self) -> Result<Account, Error>;

    /// Gets the market clock.
    async fn get_clock(&self) -> Result<Clock, Error>;

    /// Submits an equity, option or multi-leg order.
    async fn submit_order(&self, intent: OrderIntent) -> Result<Order, Error>;

    /// Lists orders.
    async fn get_orders(&self, query: OrderQuery) -> Result<Vec<Order>, Error>;

    /// Gets an order by ID.
    async fn get_order(&self, order_id: &str) -> Result<Order, Error>;

    /// Cancels an order by ID.
    async fn cancel_order(&self, order_id: &str) -> Result<(), Error>;

    /// Cancels all open orders.
    async fn cancel_orders(&self) -> Result<Vec<CancelStatus>, Error>;

    /// Lists open positions.
    async fn get_all_positions(&self) -> Result<Vec<Position>, Error>;

    /// Gets the open position for a symbol.
    async fn get_open_position(&self, symbol: &str) -> Result<Position, Error>;

    /// Closes a position; `None` closes it entirely.
    async fn close_position(
        &self,
        symbol: &str,
        options: Option<ClosePositionOptions>,
    ) -> Result<Order, Error>;

    /// Gets the latest stock quote.
    async fn get_stock_latest_quote(&self, symbol: &str) -> Result<Quote, Error>;

    /// Lists option contracts.
    async fn get_option_contracts(
        &self,
        query: OptionContractsQuery,
    ) -> Result<OptionContractsPage, Error>;

    /// Gets an option contract by symbol or ID.
    async fn get_option_contract(&self, symbol_or_id: &str) -> Result<OptionContract, Error>;

    /// Gets every snapshot of an underlying's option chain.
    async fn get_option_chain(
        &self,
        underlying_symbol: &str,
        query: OptionChainQuery,
    ) -> Result<OptionChain, Error>;

    /// Gets the latest option quote, if any.
    async fn get_option_latest_quote(&self, symbol: &str) -> Result<Option<Quote>, Error>;

    /// Gets the option snapshot, if any.
    async fn get_option_snapshot(&self, symbol: &str) -> Result<Option<OptionSnapshot>, Error>;

    /// Exercises a held option position.
    async fn exercise_option(&self, symbol_or_id: &str) -> Result<(), Error>;
}

#[async_trait]
impl Broker for AlpacaClient {
    async fn get_account(&self) -> Result<Account, Error> {
        AlpacaClient::get_account(self).await
    }

    async fn get_clock(&self) -> Result<Clock, Error> {
        AlpacaClient::get_clock(self).await
    }

    async fn submit_order(&self, intent: OrderIntent) -> Result<Order, Error> {
        AlpacaClient::submit_order(self, &intent).await
    }

    async fn get_orders(&self, query: OrderQuery) -> Result<Vec<Order>, Error> {
        AlpacaClient::get_orders(self, &query).await
    }

    async fn get_order(&self, order_id: &str) -> Result<Order, Error> {
        AlpacaClient::get_order(self, order_id).await
    }

    async fn cancel_order(&self, order_id: &str) -> Result<(), Error> {
        AlpacaClient::cancel_order(self, order_id).await
    }

    async fn cancel_orders(&self) -> Result<Vec<CancelStatus>, Error> {
        AlpacaClient::cancel_orders(self).await
    }

    async fn get_all_positions(&self) -> Result<Vec<Position>, Error> {
        AlpacaClient::get_all_positions(self).await
    }

    async fn get_open_position(&self, symbol: &str) -> Result<Position, Error> {
        AlpacaClient::get_open_position(self, symbol).await
    }

    async fn close_position(
        &self,
        symbol: &str,
        options: Option<ClosePositionOptions>,
    ) -> Result<Order, Error> {
        AlpacaClient::close_position(self, symbol, options.as_ref()).await
    }

    async fn get_stock_latest_quote(&self, symbol: &str) -> Result<Quote, Error> {
        AlpacaClient::get_stock_latest_quote(self, symbol).await
    }

    async fn get_option_contracts(
        &self,
        query: OptionContractsQuery,
    ) -> Result<OptionContractsPage, Error> {
        AlpacaClient::get_option_contracts(self, &query).await
    }

    async fn get_option_contract(&self, symbol_or_id: &str) -> Result<OptionContract, Error> {
        AlpacaClient::get_option_contract(self, symbol_or_id).await
    }

    async fn get_option_chain(
        &self,
        underlying_symbol: &str,
        query: OptionChainQuery,
    ) -> Result<OptionChain, Error> {
        AlpacaClient::get_option_chain(self, underlying_symbol, &query).await
    }

    async fn get_option_latest_quote(&self, symbol: &str) -> Result<Option<Quote>, Error> {
        AlpacaClient::get_option_latest_quote(self, symbol).await
    }

    async fn get_option_snapshot(&self, symbol: &str) -> Result<Option<OptionSnapshot>, Error> {
        AlpacaClient::get_option_snapshot(self, symbol).await
    }

    async fn exercise_option(&self, symbol_or_id: &str) -> Result<(), Error> {
        AlpacaClient::exercise_option(self, symbol_or_id).await
    }
}
