//! In-Memory Rate Repository
//!
//! Rate table seeded once from configuration and never mutated afterwards.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::domain::gateways::RateRepository;
use crate::domain::models::currency::{CurrencyCode, ExchangeRate};
use crate::infrastructure::driven_adapters::config::ExchangeConfig;
use crate::shared::errors::RepositoryError;

/// Read-only rate table keyed by directed currency pair
#[derive(Debug, Clone)]
pub struct InMemoryRateRepository {
    currencies: Vec<CurrencyCode>,
    rates: HashMap<(CurrencyCode, CurrencyCode), Decimal>,
}

impl InMemoryRateRepository {
    /// Seed the repository from the `[exchange]` configuration section
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Seed` for malformed or duplicate currency
    /// codes, rates referencing unlisted currencies, self-rates, duplicate
    /// pairs or non-positive rates.
    pub fn from_config(config: &ExchangeConfig) -> Result<Self, RepositoryError> {
        let mut currencies = Vec::with_capacity(config.currencies.len());
        let mut seen = HashSet::new();
        for raw in &config.currencies {
            let code = parse_seed_code(raw)?;
            if !seen.insert(code.clone()) {
                return Err(RepositoryError::Seed(format!("currency {code} is listed twice")));
            }
            currencies.push(code);
        }

        let mut rates = HashMap::with_capacity(config.rates.len());
        for entry in &config.rates {
            let base = parse_seed_code(&entry.base)?;
            let quote = parse_seed_code(&entry.quote)?;

            for code in [&base, &quote] {
                if !seen.contains(code) {
                    return Err(RepositoryError::Seed(format!("rate references unlisted currency {code}")));
                }
            }
            if base == quote {
                return Err(RepositoryError::Seed(format!("rate {base}->{quote} converts a currency to itself")));
            }
            if entry.rate <= Decimal::ZERO {
                return Err(RepositoryError::Seed(format!("rate {base}->{quote} must be positive")));
            }
            if rates.insert((base.clone(), quote.clone()), entry.rate).is_some() {
                return Err(RepositoryError::Seed(format!("rate {base}->{quote} is defined twice")));
            }
        }

        tracing::debug!(currencies = currencies.len(), rates = rates.len(), "Rate table seeded");
        Ok(Self { currencies, rates })
    }
}

fn parse_seed_code(raw: &str) -> Result<CurrencyCode, RepositoryError> {
    CurrencyCode::parse(raw).map_err(|e| RepositoryError::Seed(e.to_string()))
}

#[async_trait]
impl RateRepository for InMemoryRateRepository {
    async fn currencies(&self) -> Result<Vec<CurrencyCode>, RepositoryError> {
        Ok(self.currencies.clone())
    }

    async fn is_supported(&self, code: &CurrencyCode) -> Result<bool, RepositoryError> {
        Ok(self.currencies.contains(code))
    }

    async fn find_rate(&self, base: &CurrencyCode, quote: &CurrencyCode) -> Result<Option<Decimal>, RepositoryError> {
        Ok(self.rates.get(&(base.clone(), quote.clone())).copied())
    }

    async fn rates_from(&self, base: &CurrencyCode) -> Result<Vec<ExchangeRate>, RepositoryError> {
        let rates = self
            .currencies
            .iter()
            .filter_map(|quote| {
                self.rates.get(&(base.clone(), quote.clone())).map(|rate| ExchangeRate {
                    base: base.clone(),
                    quote: quote.clone(),
                    rate: *rate,
                })
            })
            .collect();
        Ok(rates)
    }
}
