//! Rate Repository Gateway
//!
//! Abstract trait defining the contract for currency and rate lookups.

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::domain::models::currency::{CurrencyCode, ExchangeRate};
use crate::shared::errors::RepositoryError;

/// Repository trait for exchange reference data
#[async_trait]
pub trait RateRepository: Send + Sync {
    /// All supported currencies, in display order
    async fn currencies(&self) -> Result<Vec<CurrencyCode>, RepositoryError>;

    /// Whether `code` is a supported currency
    async fn is_supported(&self, code: &CurrencyCode) -> Result<bool, RepositoryError>;

    /// The directed rate `base -> quote`, if one is configured
    async fn find_rate(&self, base: &CurrencyCode, quote: &CurrencyCode) -> Result<Option<Decimal>, RepositoryError>;

    /// Every configured rate out of `base`, in display order of the quote currency
    async fn rates_from(&self, base: &CurrencyCode) -> Result<Vec<ExchangeRate>, RepositoryError>;
}
