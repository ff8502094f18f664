//! Exchange DTOs
//!
//! Data transfer objects for the exchange endpoints.

use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::use_cases::exchange::ConversionRequest;
use crate::domain::models::currency::{ConversionQuote, CurrencyCode, ExchangeRate, QuoteSide};
use crate::shared::errors::DomainError;

lazy_static! {
    /// Regex for validating ISO-4217 style currency codes
    static ref CURRENCY_CODE_REGEX: Regex = Regex::new(r"^[A-Za-z]{3}$").expect("valid regex");
}

/// Validates a three-letter currency code
fn validate_currency_code(code: &str) -> Result<(), validator::ValidationError> {
    if CURRENCY_CODE_REGEX.is_match(code) {
        Ok(())
    } else {
        let mut error = validator::ValidationError::new("currency_code");
        error.message = Some("Currency code must be exactly three letters".into());
        Err(error)
    }
}

/// Validates that an amount is a positive decimal number
fn validate_amount(amount: &str) -> Result<(), validator::ValidationError> {
    match Decimal::from_str(amount.trim()) {
        Ok(value) if value > Decimal::ZERO => Ok(()),
        Ok(_) => {
            let mut error = validator::ValidationError::new("amount");
            error.message = Some("Amount must be greater than 0".into());
            Err(error)
        }
        Err(_) => {
            let mut error = validator::ValidationError::new("amount");
            error.message = Some("Amount must be a decimal number".into());
            Err(error)
        }
    }
}

/// Validates the quote side
fn validate_side(side: &str) -> Result<(), validator::ValidationError> {
    if side.eq_ignore_ascii_case("from") || side.eq_ignore_ascii_case("to") {
        Ok(())
    } else {
        let mut error = validator::ValidationError::new("side");
        error.message = Some("Side must be either 'from' or 'to'".into());
        Err(error)
    }
}

/// Query string of `GET /exchange/quote`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct QuoteQueryDto {
    #[validate(custom(function = "validate_currency_code"))]
    pub from: String,

    #[validate(custom(function = "validate_currency_code"))]
    pub to: String,

    #[validate(custom(function = "validate_amount"))]
    pub amount: String,

    #[validate(custom(function = "validate_side"))]
    pub side: Option<String>,
}

impl TryFrom<QuoteQueryDto> for ConversionRequest {
    type Error = DomainError;

    fn try_from(dto: QuoteQueryDto) -> Result<Self, Self::Error> {
        let amount = Decimal::from_str(dto.amount.trim())
            .map_err(|_| DomainError::InvalidAmount(format!("'{}' is not a decimal number", dto.amount)))?;
        let side = match dto.side.as_deref() {
            Some(side) if side.eq_ignore_ascii_case("to") => QuoteSide::To,
            _ => QuoteSide::From,
        };

        Ok(Self {
            from: CurrencyCode::parse(&dto.from)?,
            to: CurrencyCode::parse(&dto.to)?,
            side,
            amount,
        })
    }
}

/// One rate out of the requested base
#[derive(Debug, Clone, Serialize)]
pub struct RateDto {
    pub currency: String,
    pub rate: f64,
}

/// Response of `GET /exchange/rates/:base`
#[derive(Debug, Clone, Serialize)]
pub struct RatesResponseDto {
    pub base: String,
    pub rates: Vec<RateDto>,
}

impl RatesResponseDto {
    #[must_use]
    pub fn new(base: &CurrencyCode, rates: Vec<ExchangeRate>) -> Self {
        Self {
            base: base.to_string(),
            rates: rates
                .into_iter()
                .map(|r| RateDto {
                    currency: r.quote.to_string(),
                    rate: r.rate.try_into().unwrap_or(0.0),
                })
                .collect(),
        }
    }
}

/// Response of `GET /exchange/quote`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponseDto {
    pub from: String,
    pub to: String,
    pub side: String,
    pub rate: f64,
    pub source_amount: f64,
    pub target_amount: f64,
    pub fee: f64,
    pub total_cost: f64,
    pub effective_rate: f64,
}

impl From<ConversionQuote> for QuoteResponseDto {
    fn from(quote: ConversionQuote) -> Self {
        Self {
            from: quote.source_currency().to_string(),
            to: quote.target_currency().to_string(),
            side: quote.side().as_str().to_string(),
            rate: quote.rate().try_into().unwrap_or(0.0),
            source_amount: quote.source_amount().try_into().unwrap_or(0.0),
            target_amount: quote.target_amount().try_into().unwrap_or(0.0),
            fee: quote.fee().try_into().unwrap_or(0.0),
            total_cost: quote.total_cost().try_into().unwrap_or(0.0),
            effective_rate: quote.effective_rate().try_into().unwrap_or(0.0),
        }
    }
}
