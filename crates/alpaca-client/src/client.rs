//! HTTP client for the Alpaca REST APIs.

use crate::error::Error;
use crate::types::*;
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use std::collections::HashSet;
use std::time::Duration;
use tracing::debug;
use url::Url;

#[cfg(test)]
mod tests;

/// Trading API base URL for paper accounts.
pub const PAPER_TRADING_BASE_URL: &str = "https://paper-api.alpaca.markets";

/// Trading API base URL for live accounts.
pub const LIVE_TRADING_BASE_URL: &str = "https://api.alpaca.markets";

/// Market data API base URL.
pub const DATA_BASE_URL: &str = "https://data.alpaca.markets";

const API_KEY_HEADER: &str = "APCA-API-KEY-ID";
const API_SECRET_HEADER: &str = "APCA-API-SECRET-KEY";

/// Alpaca API credentials.
#[derive(Clone)]
pub struct Credentials {
    api_key: String,
    secret_key: String,
}

impl Credentials {
    /// Creates new credentials.
    #[must_use]
    pub fn new(api_key: String, secret_key: String) -> Self {
        Self {
            api_key,
            secret_key,
        }
    }

    /// Returns the API key ID.
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Returns the API secret key.
    #[must_use]
    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    fn is_empty(&self) -> bool {
        self.api_key.is_empty() || self.secret_key.is_empty()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"[REDACTED]")
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API credentials.
    pub credentials: Credentials,
    /// Trading API base URL.
    pub trading_base_url: String,
    /// Market data API base URL.
    pub data_base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Configuration for a paper trading account.
    #[must_use]
    pub fn paper(credentials: Credentials) -> Self {
        Self {
            credentials,
            trading_base_url: PAPER_TRADING_BASE_URL.to_string(),
            data_base_url: DATA_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Configuration for a live trading account.
    #[must_use]
    pub fn live(credentials: Credentials) -> Self {
        Self {
            trading_base_url: LIVE_TRADING_BASE_URL.to_string(),
            ..Self::paper(credentials)
        }
    }
}

/// HTTP client for the Alpaca trading and market data APIs.
#[derive(Debug, Clone)]
pub struct AlpacaClient {
    client: Client,
    credentials: Credentials,
    trading_base_url: Url,
    data_base_url: Url,
}

impl AlpacaClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    /// Returns error if the credentials are empty, a base URL is invalid or
    /// the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        if config.credentials.is_empty() {
            return Err(Error::MissingCredentials);
        }
        let trading_base_url = parse_base_url(&config.trading_base_url)?;
        let data_base_url = parse_base_url(&config.data_base_url)?;

        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            credentials: config.credentials,
            trading_base_url,
            data_base_url,
        })
    }

    // ========================================================================
    // Account & Clock
    // ========================================================================

    /// Gets the trading account.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn get_account(&self) -> Result<Account, Error> {
        let url = self.trading_url(&["v2", "account"])?;
        self.get(url).await
    }

    /// Gets the market clock.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn get_clock(&self) -> Result<Clock, Error> {
        let url = self.trading_url(&["v2", "clock"])?;
        self.get(url).await
    }

    // ========================================================================
    // Orders
    // ========================================================================

    /// Submits an order.
    ///
    /// # Errors
    /// Returns error if the request fails or the order is rejected.
    pub async fn submit_order(&self, intent: &OrderIntent) -> Result<Order, Error> {
        let url = self.trading_url(&["v2", "orders"])?;
        debug!("POST {} ({})", url, intent.order_type());
        let resp = self.authorized(self.client.post(url)).json(intent).send().await?;
        self.handle_response(resp).await
    }

    /// Lists orders matching the query.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn get_orders(&self, query: &OrderQuery) -> Result<Vec<Order>, Error> {
        let url = with_query(self.trading_url(&["v2", "orders"])?, query)?;
        self.get(url).await
    }

    /// Gets an order by its broker ID.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn get_order(&self, order_id: &str) -> Result<Order, Error> {
        let url = self.trading_url(&["v2", "orders", order_id])?;
        self.get(url).await
    }

    /// Cancels an order by its broker ID.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn cancel_order(&self, order_id: &str) -> Result<(), Error> {
        let url = self.trading_url(&["v2", "orders", order_id])?;
        debug!("DELETE {}", url);
        let resp = self.authorized(self.client.delete(url)).send().await?;
        self.handle_empty_response(resp).await
    }

    /// Cancels all open orders.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn cancel_orders(&self) -> Result<Vec<CancelStatus>, Error> {
        let url = self.trading_url(&["v2", "orders"])?;
        debug!("DELETE {}", url);
        let resp = self.authorized(self.client.delete(url)).send().await?;
        self.handle_response(resp).await
    }

    // ========================================================================
    // Positions
    // ========================================================================

    /// Lists all open positions.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn get_all_positions(&self) -> Result<Vec<Position>, Error> {
        let url = self.trading_url(&["v2", "positions"])?;
        self.get(url).await
    }

    /// Gets the open position for a symbol.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn get_open_position(&self, symbol: &str) -> Result<Position, Error> {
        let url = self.trading_url(&["v2", "positions", symbol])?;
        self.get(url).await
    }

    /// Closes a position, fully or partially.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn close_position(
        &self,
        symbol: &str,
        options: Option<&ClosePositionOptions>,
    ) -> Result<Order, Error> {
        let mut url = self.trading_url(&["v2", "positions", symbol])?;
        if let Some(options) = options {
            url = with_query(url, options)?;
        }
        debug!("DELETE {}", url);
        let resp = self.authorized(self.client.delete(url)).send().await?;
        self.handle_response(resp).await
    }

    /// Exercises a held option position.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn exercise_option(&self, symbol_or_id: &str) -> Result<(), Error> {
        let url = self.trading_url(&["v2", "positions", symbol_or_id, "exercise"])?;
        debug!("POST {}", url);
        let resp = self.authorized(self.client.post(url)).send().await?;
        self.handle_empty_response(resp).await
    }

    // ========================================================================
    // Option Contracts
    // ========================================================================

    /// Lists option contracts matching the query.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn get_option_contracts(
        &self,
        query: &OptionContractsQuery,
    ) -> Result<OptionContractsPage, Error> {
        let url = with_query(self.trading_url(&["v2", "options", "contracts"])?, query)?;
        self.get(url).await
    }

    /// Gets an option contract by symbol or ID.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn get_option_contract(&self, symbol_or_id: &str) -> Result<OptionContract, Error> {
        let url = self.trading_url(&["v2", "options", "contracts", symbol_or_id])?;
        self.get(url).await
    }

    // ========================================================================
    // Market Data
    // ========================================================================

    /// Gets the latest quote for a stock.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn get_stock_latest_quote(&self, symbol: &str) -> Result<Quote, Error> {
        let url = self.data_url(&["v2", "stocks", symbol, "quotes", "latest"])?;
        let envelope: LatestStockQuoteEnvelope = self.get(url).await?;
        let mut quote = envelope.quote;
        quote.symbol = Some(symbol.to_string());
        Ok(quote)
    }

    /// Gets the latest quote for an option contract.
    ///
    /// Returns `None` when Alpaca has no quote for the symbol.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn get_option_latest_quote(&self, symbol: &str) -> Result<Option<Quote>, Error> {
        let url = with_query(
            self.data_url(&["v1beta1", "options", "quotes", "latest"])?,
            &[("symbols", symbol)],
        )?;
        let mut envelope: LatestOptionQuotesEnvelope = self.get(url).await?;
        Ok(envelope.quotes.remove(symbol).map(|mut quote| {
            quote.symbol = Some(symbol.to_string());
            quote
        }))
    }

    /// Gets the snapshot for an option contract.
    ///
    /// Returns `None` when Alpaca has no snapshot for the symbol.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn get_option_snapshot(&self, symbol: &str) -> Result<Option<OptionSnapshot>, Error> {
        let url = with_query(
            self.data_url(&["v1beta1", "options", "snapshots"])?,
            &[("symbols", symbol)],
        )?;
        let mut envelope: OptionSnapshotsEnvelope = self.get(url).await?;
        Ok(envelope.snapshots.remove(symbol).map(|mut snapshot| {
            snapshot.symbol = Some(symbol.to_string());
            snapshot
        }))
    }

    /// Gets the option chain for an underlying, walking every page.
    ///
    /// Paging stops on an empty or missing token, or on a token that was
    /// already requested.
    ///
    /// # Errors
    /// Returns error if any page request fails.
    pub async fn get_option_chain(
        &self,
        underlying_symbol: &str,
        query: &OptionChainQuery,
    ) -> Result<OptionChain, Error> {
        let base = self.data_url(&["v1beta1", "options", "snapshots", underlying_symbol])?;
        let mut query = query.clone();
        let mut chain = OptionChain::new();
        let mut seen_tokens = HashSet::new();

        loop {
            let url = with_query(base.clone(), &query)?;
            let page: OptionSnapshotsEnvelope = self.get(url).await?;

            for (symbol, mut snapshot) in page.snapshots {
                snapshot.symbol = Some(symbol.clone());
                chain.insert(symbol, snapshot);
            }

            let token = match page.next_page_token {
                Some(token) if !token.is_empty() => token,
                _ => break,
            };
            if !seen_tokens.insert(token.clone()) {
                debug!("Repeated page token for {}, stopping", underlying_symbol);
                break;
            }
            query.page_token = Some(token);
        }

        debug!(
            "Fetched {} option snapshots for {}",
            chain.len(),
            underlying_symbol
        );
        Ok(chain)
    }

    // ========================================================================
    // Internal Helpers
    // ========================================================================

    fn trading_url(&self, segments: &[&str]) -> Result<Url, Error> {
        endpoint(&self.trading_base_url, segments)
    }

    fn data_url(&self, segments: &[&str]) -> Result<Url, Error> {
        endpoint(&self.data_base_url, segments)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header(API_KEY_HEADER, self.credentials.api_key())
            .header(API_SECRET_HEADER, self.credentials.secret_key())
    }

    async fn get<T: serde::de::DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        debug!("GET {}", url);
        let resp = self.authorized(self.client.get(url)).send().await?;
        self.handle_response(resp).await
    }

    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let status = resp.status();

        if status.is_success() {
            let bytes = resp.bytes().await?;
            Ok(serde_json::from_slice(&bytes)?)
        } else {
            Err(error_from_response(resp).await)
        }
    }

    async fn handle_empty_response(&self, resp: reqwest::Response) -> Result<(), Error> {
        if resp.status().is_success() {
            Ok(())
        } else {
            Err(error_from_response(resp).await)
        }
    }
}

fn parse_base_url(raw: &str) -> Result<Url, Error> {
    let url = Url::parse(raw)?;
    if url.cannot_be_a_base() {
        return Err(Error::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase));
    }
    Ok(url)
}

/// Appends `segments` to the path of `base`, percent-encoding each one.
///
/// Empty, `.` and `..` segments are rejected so a caller-supplied ID can
/// never address a different endpoint.
fn endpoint(base: &Url, segments: &[&str]) -> Result<Url, Error> {
    if let Some(segment) = segments
        .iter()
        .find(|s| s.is_empty() || **s == "." || **s == "..")
    {
        return Err(Error::InvalidPathSegment((*segment).to_string()));
    }

    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| Error::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Sets the URL-encoded query on `url`, if it encodes to anything.
fn with_query<Q: Serialize + ?Sized>(mut url: Url, query: &Q) -> Result<Url, Error> {
    let params = serde_urlencoded::to_string(query)?;
    if !params.is_empty() {
        url.set_query(Some(&params));
    }
    Ok(url)
}

/// Builds a client error from a non-success response.
async fn error_from_response(resp: reqwest::Response) -> Error {
    let status = resp.status().as_u16();
    let text = resp.text().await.unwrap_or_default();
    let message = error_message(&text);

    if status == 404 {
        Error::NotFound(message)
    } else {
        Error::Api { status, message }
    }
}

/// Extracts the message of an Alpaca error body, falling back to the raw text.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<AlpacaErrorBody>(body) {
        Ok(AlpacaErrorBody {
            code: Some(code),
            message,
        }) => format!("{} (code {})", message, code),
        Ok(AlpacaErrorBody {
            code: None,
            message,
        }) => message,
        Err(_) => body.to_string(),
    }
}
