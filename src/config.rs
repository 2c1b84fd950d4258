//! Configuration module for loading the TOML file and environment overrides.

use alpaca_client::{ClientConfig, Credentials};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Environment variable holding the config file path.
pub const CONFIG_PATH_ENV: &str = "CONFIG_PATH";

/// Config file read when `CONFIG_PATH` is unset and the file exists.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Environment variable holding the Alpaca API key ID.
pub const API_KEY_ENV: &str = "ALPACA_API_KEY";

/// Environment variable holding the Alpaca secret key.
pub const SECRET_KEY_ENV: &str = "ALPACA_SECRET_KEY";

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse TOML configuration.
    #[error("failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// Required environment variable not set.
    #[error("missing environment variable: {0}")]
    MissingEnvVar(String),
    /// Environment variable set but empty.
    #[error("environment variable is empty: {0}")]
    EmptyValue(String),
    /// Invalid configuration value.
    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
    /// Alpaca connection configuration.
    pub alpaca: AlpacaConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port number to listen on.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// Alpaca connection configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AlpacaConfig {
    /// Use the paper trading endpoint.
    pub paper: bool,
    /// Trading API base URL override.
    pub trading_base_url: Option<String>,
    /// Market data API base URL override.
    pub data_base_url: Option<String>,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for AlpacaConfig {
    fn default() -> Self {
        Self {
            paper: true,
            trading_base_url: None,
            data_base_url: None,
            timeout_secs: 30,
        }
    }
}

impl AlpacaConfig {
    /// Builds the brokerage client configuration for these settings.
    #[must_use]
    pub fn client_config(&self, credentials: Credentials) -> ClientConfig {
        let mut config = if self.paper {
            ClientConfig::paper(credentials)
        } else {
            ClientConfig::live(credentials)
        };

        if let Some(url) = &self.trading_base_url {
            config.trading_base_url = url.clone();
        }
        if let Some(url) = &self.data_base_url {
            config.data_base_url = url.clone();
        }
        config.timeout = Duration::from_secs(self.timeout_secs);
        config
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file.
    ///
    /// # Errors
    /// Returns error if file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Arguments
    /// * `content` - TOML content as string.
    ///
    /// # Errors
    /// Returns error if content cannot be parsed.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the configuration the server starts with.
    ///
    /// Reads the file named by `CONFIG_PATH`, or `config.toml` when present,
    /// then applies the `HOST` and `PORT` environment overrides.
    ///
    /// # Errors
    /// Returns error if the file cannot be loaded or an override is invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::load(path)?,
            Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::load(DEFAULT_CONFIG_PATH)?,
            Err(_) => Self::default(),
        };

        config.apply_overrides(std::env::var("HOST").ok(), std::env::var("PORT").ok())?;
        Ok(config)
    }

    /// Applies host and port overrides.
    ///
    /// # Errors
    /// Returns error if the port is not a valid number.
    pub fn apply_overrides(
        &mut self,
        host: Option<String>,
        port: Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(host) = host {
            self.server.host = host;
        }
        if let Some(port) = port {
            self.server.port = port
                .parse()
                .map_err(|_| ConfigError::InvalidValue(format!("PORT must be a number: {}", port)))?;
        }
        self.validate()
    }

    /// Validates the configuration values.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.host.is_empty() {
            return Err(ConfigError::InvalidValue(
                "server host cannot be empty".to_string(),
            ));
        }
        if self.alpaca.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue(
                "alpaca timeout_secs must be positive".to_string(),
            ));
        }
        for url in [&self.alpaca.trading_base_url, &self.alpaca.data_base_url]
            .into_iter()
            .flatten()
        {
            if url.is_empty() {
                return Err(ConfigError::InvalidValue(
                    "alpaca base URL cannot be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}

/// Reads Alpaca credentials from `ALPACA_API_KEY` and `ALPACA_SECRET_KEY`.
///
/// # Errors
/// Returns error if either variable is missing or empty.
pub fn credentials_from_env() -> Result<Credentials, ConfigError> {
    credentials_from(
        std::env::var(API_KEY_ENV).ok(),
        std::env::var(SECRET_KEY_ENV).ok(),
    )
}

fn credentials_from(
    api_key: Option<String>,
    secret_key: Option<String>,
) -> Result<Credentials, ConfigError> {
    let api_key = required(API_KEY_ENV, api_key)?;
    let secret_key = required(SECRET_KEY_ENV, secret_key)?;
    Ok(Credentials::new(api_key, secret_key))
}

fn required(name: &str, value: Option<String>) -> Result<String, ConfigError> {
    match value {
        None => Err(ConfigError::MissingEnvVar(name.to_string())),
        Some(value) if value.trim().is_empty() => Err(ConfigError::EmptyValue(name.to_string())),
        Some(value) => Ok(value),
    }
}
