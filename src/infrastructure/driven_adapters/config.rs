//! Application Configuration
//!
//! Loads configuration from files and environment variables.

use config::{Config, ConfigError, Environment, File, FileFormat};
use rust_decimal::Decimal;
use serde::Deserialize;

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Origins allowed by CORS; empty or `"*"` allows any origin
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

/// Per-client rate limiting
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    pub requests_per_second: u64,
    pub burst_size: u32,
}

/// One directed entry of the rate table
#[derive(Debug, Clone, Deserialize)]
pub struct RateEntryConfig {
    pub base: String,
    pub quote: String,
    pub rate: Decimal,
}

/// Exchange reference data
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeConfig {
    /// Flat fee charged in the source currency of every quote
    pub fee: Decimal,
    pub max_amount: Decimal,
    pub currencies: Vec<String>,
    #[serde(default)]
    pub rates: Vec<RateEntryConfig>,
}

/// One registered network
#[derive(Debug, Clone, Deserialize)]
pub struct NetworkConfig {
    pub chain_id: i64,
    pub name: String,
    pub rpc_url: String,
    #[serde(default)]
    pub test_net: bool,
    pub block_explorer_url: String,
    pub native_currency: String,
    #[serde(default = "default_true")]
    pub active: bool,
}

/// Blockchain network registry
#[derive(Debug, Clone, Deserialize)]
pub struct BlockchainConfig {
    #[serde(default)]
    pub networks: Vec<NetworkConfig>,
}

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub rate_limit: RateLimitConfig,
    pub exchange: ExchangeConfig,
    pub blockchain: BlockchainConfig,
}

fn default_true() -> bool {
    true
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `config/default` is missing or any source
    /// fails to parse into `AppConfig`.
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "default".into());

        Config::builder()
            // Start with default config
            .add_source(File::with_name("config/default").required(true))
            // Merge environment-specific config if it exists
            .add_source(File::with_name(&format!("config/{run_mode}")).required(false))
            // Override with environment variables (e.g., APP__SERVER__PORT)
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?
            .try_deserialize()
    }

    /// Build configuration from an in-memory TOML document
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the document is not valid TOML or does not
    /// match `AppConfig`.
    pub fn from_toml_str(document: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from_str(document, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}
