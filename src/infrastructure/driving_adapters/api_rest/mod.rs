//! REST API Module
//!
//! Contains the application assembler, HTTP handlers, DTOs, and middleware
//! for the REST API.

pub mod assembler;
pub mod dto;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use crate::application::use_cases::blockchain::{
    GetActiveNetworksUseCase, GetExplorerLinkUseCase, GetNetworkByChainIdUseCase,
};
use crate::application::use_cases::exchange::{GetRatesUseCase, ListCurrenciesUseCase, QuoteConversionUseCase};
use crate::infrastructure::driven_adapters::config::AppConfig;
use crate::infrastructure::driven_adapters::{InMemoryNetworkRepository, InMemoryRateRepository};
use crate::shared::errors::RepositoryError;

pub use assembler::{assemble, create_application, Application, RouteProvider};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub list_currencies_use_case: Arc<ListCurrenciesUseCase>,
    pub get_rates_use_case: Arc<GetRatesUseCase>,
    pub quote_conversion_use_case: Arc<QuoteConversionUseCase>,
    pub get_active_networks_use_case: Arc<GetActiveNetworksUseCase>,
    pub get_network_by_chain_id_use_case: Arc<GetNetworkByChainIdUseCase>,
    pub get_explorer_link_use_case: Arc<GetExplorerLinkUseCase>,
}

impl AppState {
    /// Seed the repositories from configuration and wire every use case
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Seed` if the exchange or blockchain sections
    /// contain invalid reference data.
    pub fn from_config(config: AppConfig) -> Result<Self, RepositoryError> {
        // Create repositories
        let rate_repository = Arc::new(InMemoryRateRepository::from_config(&config.exchange)?);
        let network_repository = Arc::new(InMemoryNetworkRepository::from_config(&config.blockchain)?);

        // Create use cases
        let list_currencies_use_case = Arc::new(ListCurrenciesUseCase::new(rate_repository.clone()));
        let get_rates_use_case = Arc::new(GetRatesUseCase::new(rate_repository.clone()));
        let quote_conversion_use_case = Arc::new(QuoteConversionUseCase::new(
            rate_repository,
            config.exchange.fee,
            config.exchange.max_amount,
        ));
        let get_active_networks_use_case = Arc::new(GetActiveNetworksUseCase::new(network_repository.clone()));
        let get_network_by_chain_id_use_case = Arc::new(GetNetworkByChainIdUseCase::new(network_repository.clone()));
        let get_explorer_link_use_case = Arc::new(GetExplorerLinkUseCase::new(network_repository));

        Ok(Self {
            config: Arc::new(config),
            list_currencies_use_case,
            get_rates_use_case,
            quote_conversion_use_case,
            get_active_networks_use_case,
            get_network_by_chain_id_use_case,
            get_explorer_link_use_case,
        })
    }
}
