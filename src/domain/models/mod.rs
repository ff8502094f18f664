//! Domain Models
//!
//! Pure domain entities and value objects representing business concepts.

pub mod currency;
pub mod network;

pub use currency::{ConversionQuote, CurrencyCode, ExchangeRate, QuoteSide};
pub use network::{ChainId, CreateNetworkData, ExplorerTarget, Network};
