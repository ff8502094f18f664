//! Currency Domain Models
//!
//! Currency codes, directed exchange rates and conversion quotes.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::shared::errors::DomainError;

/// Decimal places kept on converted amounts
pub const AMOUNT_SCALE: u32 = 2;

/// Decimal places kept on the effective rate of a quote
pub const RATE_SCALE: u32 = 4;

/// Newtype wrapper for an upper-case, three-letter currency code
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Parse a currency code, normalising it to upper case
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCurrencyCode` unless the input is exactly
    /// three ASCII letters (surrounding whitespace is ignored).
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let trimmed = value.trim();
        if trimmed.len() == 3 && trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            Ok(Self(trimmed.to_ascii_uppercase()))
        } else {
            Err(DomainError::InvalidCurrencyCode(value.to_string()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for CurrencyCode {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

/// A directed rate: one unit of `base` buys `rate` units of `quote`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeRate {
    pub base: CurrencyCode,
    pub quote: CurrencyCode,
    pub rate: Decimal,
}

/// Which side of the conversion the requested amount refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteSide {
    /// The amount is what the customer pays
    #[default]
    From,
    /// The amount is what the customer receives
    To,
}

impl QuoteSide {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::From => "from",
            Self::To => "to",
        }
    }
}

/// Rounds a monetary amount half away from zero
#[must_use]
pub fn round_amount(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(AMOUNT_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// A priced conversion between two currencies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionQuote {
    from: CurrencyCode,
    to: CurrencyCode,
    side: QuoteSide,
    rate: Decimal,
    source_amount: Decimal,
    target_amount: Decimal,
    fee: Decimal,
}

impl ConversionQuote {
    /// Price a conversion
    ///
    /// `rate` must be the directed rate for the requested side: `from -> to`
    /// when pricing the source amount, `to -> from` when pricing the target
    /// amount.
    ///
    /// `amount` is rounded to two places before pricing, so both sides of a
    /// quote carry the same precision.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAmount` when the rounded `amount` is not
    /// positive or the product overflows.
    pub fn price(
        from: CurrencyCode,
        to: CurrencyCode,
        side: QuoteSide,
        amount: Decimal,
        rate: Decimal,
        fee: Decimal,
    ) -> Result<Self, DomainError> {
        let amount = round_amount(amount);
        if amount <= Decimal::ZERO {
            return Err(DomainError::InvalidAmount("amount must be greater than 0".to_string()));
        }

        let converted = amount
            .checked_mul(rate)
            .map(round_amount)
            .ok_or_else(|| DomainError::InvalidAmount("amount is too large".to_string()))?;

        let (source_amount, target_amount) = match side {
            QuoteSide::From => (amount, converted),
            QuoteSide::To => (converted, amount),
        };

        Ok(Self {
            from,
            to,
            side,
            rate,
            source_amount,
            target_amount,
            fee,
        })
    }

    // Getters

    #[must_use]
    pub fn source_currency(&self) -> &CurrencyCode {
        &self.from
    }

    #[must_use]
    pub fn target_currency(&self) -> &CurrencyCode {
        &self.to
    }

    #[must_use]
    pub fn side(&self) -> QuoteSide {
        self.side
    }

    #[must_use]
    pub fn rate(&self) -> Decimal {
        self.rate
    }

    #[must_use]
    pub fn source_amount(&self) -> Decimal {
        self.source_amount
    }

    #[must_use]
    pub fn target_amount(&self) -> Decimal {
        self.target_amount
    }

    #[must_use]
    pub fn fee(&self) -> Decimal {
        self.fee
    }

    /// Source amount plus the flat fee, both in the source currency
    #[must_use]
    pub fn total_cost(&self) -> Decimal {
        self.source_amount + self.fee
    }

    /// Target units received per source unit, rounded to four places
    #[must_use]
    pub fn effective_rate(&self) -> Decimal {
        if self.source_amount.is_zero() {
            return Decimal::ZERO;
        }
        (self.target_amount / self.source_amount)
            .round_dp_with_strategy(RATE_SCALE, RoundingStrategy::MidpointAwayFromZero)
    }
}
