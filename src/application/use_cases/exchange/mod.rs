//! Exchange Use Cases
//!
//! Currency reference data and conversion pricing. Nothing here executes a
//! trade.

mod get_rates;
mod list_currencies;
mod quote_conversion;

pub use get_rates::GetRatesUseCase;
pub use list_currencies::ListCurrenciesUseCase;
pub use quote_conversion::{ConversionRequest, QuoteConversionUseCase};
