//! Application state management.

use crate::broker::Broker;
use crate::config::{Config, ConfigError, credentials_from_env};
use alpaca_client::AlpacaClient;
use std::sync::Arc;
use tracing::info;

/// Error building the application state.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// Configuration or credentials are invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The brokerage client could not be created.
    #[error("failed to create Alpaca client: {0}")]
    Client(#[from] alpaca_client::Error),
}

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Brokerage the handlers forward to.
    pub broker: Arc<dyn Broker>,
}

impl AppState {
    /// Creates a new application state around a broker.
    #[must_use]
    pub fn new(broker: Arc<dyn Broker>) -> Self {
        Self { broker }
    }

    /// Creates the application state from configuration, reading the Alpaca
    /// credentials from the environment.
    ///
    /// # Errors
    /// Returns error if the credentials are missing or the client cannot be
    /// built.
    pub fn from_config(config: &Config) -> Result<Self, StateError> {
        let credentials = credentials_from_env()?;
        let client = AlpacaClient::new(config.alpaca.client_config(credentials))?;

        info!(
            "Alpaca client ready ({} trading)",
            if config.alpaca.paper { "paper" } else { "live" }
        );

        Ok(Self::new(Arc::new(client)))
    }
}
