//! Get Rates Use Case
//!
//! Retrieves every configured rate out of a base currency.

use std::sync::Arc;

use crate::domain::gateways::RateRepository;
use crate::domain::models::currency::{CurrencyCode, ExchangeRate};
use crate::shared::errors::UseCaseError;

/// Use case for getting the rates of a base currency
pub struct GetRatesUseCase {
    rate_repository: Arc<dyn RateRepository>,
}

impl GetRatesUseCase {
    /// Create a new GetRatesUseCase
    #[must_use]
    pub fn new(rate_repository: Arc<dyn RateRepository>) -> Self {
        Self { rate_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if `base` is not a supported currency.
    pub async fn execute(&self, base: &CurrencyCode) -> Result<Vec<ExchangeRate>, UseCaseError> {
        tracing::debug!(%base, "Getting exchange rates");

        if !self.rate_repository.is_supported(base).await? {
            tracing::warn!(%base, "Currency not supported");
            return Err(UseCaseError::NotFound {
                resource: "Currency".to_string(),
                id: base.to_string(),
            });
        }

        let rates = self.rate_repository.rates_from(base).await?;
        tracing::debug!(%base, count = rates.len(), "Found exchange rates");
        Ok(rates)
    }
}
