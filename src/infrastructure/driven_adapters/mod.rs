//! Driven Adapters
//!
//! Implementations of gateway traits for external systems:
//! - Configuration
//! - Config-seeded reference data repositories

pub mod config;
pub mod network_repository;
pub mod rate_repository;

pub use config::AppConfig;
pub use network_repository::InMemoryNetworkRepository;
pub use rate_repository::InMemoryRateRepository;
