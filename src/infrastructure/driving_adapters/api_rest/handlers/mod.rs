//! HTTP Handlers
//!
//! One module per route group.

pub mod blockchain;
pub mod exchange;

pub use blockchain::BlockchainRoutes;
pub use exchange::ExchangeRoutes;
