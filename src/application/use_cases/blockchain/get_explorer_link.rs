//! Get Explorer Link Use Case
//!
//! Builds a block explorer URL for a transaction or address on a registered
//! network.

use std::sync::Arc;

use crate::domain::gateways::NetworkRepository;
use crate::domain::models::network::{ChainId, ExplorerTarget};
use crate::shared::errors::UseCaseError;

/// Use case for building block explorer links
pub struct GetExplorerLinkUseCase {
    network_repository: Arc<dyn NetworkRepository>,
}

impl GetExplorerLinkUseCase {
    /// Create a new GetExplorerLinkUseCase
    #[must_use]
    pub fn new(network_repository: Arc<dyn NetworkRepository>) -> Self {
        Self { network_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if no active network has this chain ID.
    pub async fn execute(&self, chain_id: ChainId, target: ExplorerTarget<'_>) -> Result<String, UseCaseError> {
        let network = self
            .network_repository
            .find_by_chain_id(chain_id)
            .await?
            .ok_or_else(|| UseCaseError::NotFound {
                resource: "Network".to_string(),
                id: chain_id.to_string(),
            })?;

        let url = network.explorer_url(target);
        tracing::debug!(%chain_id, %url, "Built explorer link");
        Ok(url)
    }
}
