//! Domain Layer
//!
//! Contains the core business logic, domain models, and gateway traits (ports).
//! This layer has no dependencies on infrastructure.

pub mod gateways;
pub mod models;

pub use gateways::{NetworkRepository, RateRepository};
pub use models::currency::{ConversionQuote, CurrencyCode, ExchangeRate, QuoteSide};
pub use models::network::{ChainId, CreateNetworkData, ExplorerTarget, Network};
