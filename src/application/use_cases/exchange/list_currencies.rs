//! List Currencies Use Case
//!
//! Lists the supported currencies in display order.

use std::sync::Arc;

use crate::domain::gateways::RateRepository;
use crate::domain::models::currency::CurrencyCode;
use crate::shared::errors::UseCaseError;

/// Use case for listing supported currencies
pub struct ListCurrenciesUseCase {
    rate_repository: Arc<dyn RateRepository>,
}

impl ListCurrenciesUseCase {
    #[must_use]
    pub fn new(rate_repository: Arc<dyn RateRepository>) -> Self {
        Self { rate_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if the rate table cannot be read.
    pub async fn execute(&self) -> Result<Vec<CurrencyCode>, UseCaseError> {
        let currencies = self.rate_repository.currencies().await?;
        tracing::debug!(count = currencies.len(), "Listed currencies");
        Ok(currencies)
    }
}
