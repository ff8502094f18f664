//! Quote Conversion Use Case
//!
//! Prices a conversion between two supported currencies using the directed
//! rate table and the flat exchange fee.

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::domain::gateways::RateRepository;
use crate::domain::models::currency::{ConversionQuote, CurrencyCode, QuoteSide};
use crate::shared::errors::{DomainError, UseCaseError};

/// Input of a conversion quote
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    pub from: CurrencyCode,
    pub to: CurrencyCode,
    pub side: QuoteSide,
    pub amount: Decimal,
}

/// Use case for quoting a currency conversion
pub struct QuoteConversionUseCase {
    rate_repository: Arc<dyn RateRepository>,
    fee: Decimal,
    max_amount: Decimal,
}

impl QuoteConversionUseCase {
    /// Create a new QuoteConversionUseCase
    #[must_use]
    pub fn new(rate_repository: Arc<dyn RateRepository>, fee: Decimal, max_amount: Decimal) -> Self {
        Self {
            rate_repository,
            fee,
            max_amount,
        }
    }

    /// Execute the use case
    ///
    /// The source amount is priced with `from -> to`; a requested target
    /// amount is priced with `to -> from`. Rates are never inverted.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Domain` if the amount is not positive or exceeds
    /// the configured maximum.
    /// Returns `UseCaseError::NotFound` if either currency is unsupported or
    /// the directed rate is missing.
    pub async fn execute(&self, request: ConversionRequest) -> Result<ConversionQuote, UseCaseError> {
        let ConversionRequest { from, to, side, amount } = request;
        tracing::debug!(%from, %to, side = side.as_str(), %amount, "Quoting conversion");

        if amount > self.max_amount {
            return Err(DomainError::InvalidAmount(format!("amount must be at most {}", self.max_amount)).into());
        }

        for code in [&from, &to] {
            if !self.rate_repository.is_supported(code).await? {
                tracing::warn!(currency = %code, "Currency not supported");
                return Err(UseCaseError::NotFound {
                    resource: "Currency".to_string(),
                    id: code.to_string(),
                });
            }
        }

        let rate = if from == to {
            Decimal::ONE
        } else {
            let (base, quote) = match side {
                QuoteSide::From => (&from, &to),
                QuoteSide::To => (&to, &from),
            };
            self.rate_repository.find_rate(base, quote).await?.ok_or_else(|| {
                tracing::warn!(%base, %quote, "Exchange rate not configured");
                UseCaseError::NotFound {
                    resource: "ExchangeRate".to_string(),
                    id: format!("{base}->{quote}"),
                }
            })?
        };

        let quote = ConversionQuote::price(from, to, side, amount, rate, self.fee)?;
        tracing::debug!(
            source = %quote.source_amount(),
            target = %quote.target_amount(),
            "Conversion quoted"
        );
        Ok(quote)
    }
}
