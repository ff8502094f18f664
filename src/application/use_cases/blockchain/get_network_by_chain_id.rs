//! Get Network By Chain ID Use Case
//!
//! Retrieves a single active network by its chain ID.

use std::sync::Arc;

use crate::domain::gateways::NetworkRepository;
use crate::domain::models::network::{ChainId, Network};
use crate::shared::errors::UseCaseError;

/// Use case for getting a network by chain ID
pub struct GetNetworkByChainIdUseCase {
    network_repository: Arc<dyn NetworkRepository>,
}

impl GetNetworkByChainIdUseCase {
    /// Create a new GetNetworkByChainIdUseCase
    #[must_use]
    pub fn new(network_repository: Arc<dyn NetworkRepository>) -> Self {
        Self { network_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if no active network has this chain ID.
    /// Returns `UseCaseError::Repository` if the registry cannot be read.
    pub async fn execute(&self, chain_id: ChainId) -> Result<Network, UseCaseError> {
        tracing::debug!(%chain_id, "Getting network by chain ID");

        let network = self
            .network_repository
            .find_by_chain_id(chain_id)
            .await?
            .ok_or_else(|| {
                tracing::warn!(%chain_id, "Network not found");
                UseCaseError::NotFound {
                    resource: "Network".to_string(),
                    id: chain_id.to_string(),
                }
            })?;

        tracing::debug!(%chain_id, "Network found");
        Ok(network)
    }
}
