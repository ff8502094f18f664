//! Use Cases
//!
//! Application-specific business rules.
//! Each use case is a single-purpose struct with an execute() method.

pub mod blockchain;
pub mod exchange;

pub use blockchain::{GetActiveNetworksUseCase, GetExplorerLinkUseCase, GetNetworkByChainIdUseCase};
pub use exchange::{ConversionRequest, GetRatesUseCase, ListCurrenciesUseCase, QuoteConversionUseCase};
