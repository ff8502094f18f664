//! Network Repository Gateway
//!
//! Abstract trait defining the contract for network lookups.

use async_trait::async_trait;

use crate::domain::models::network::{ChainId, Network};
use crate::shared::errors::RepositoryError;

/// Repository trait for Network read operations
#[async_trait]
pub trait NetworkRepository: Send + Sync {
    /// Find an active network by its chain ID
    async fn find_by_chain_id(&self, chain_id: ChainId) -> Result<Option<Network>, RepositoryError>;

    /// Find all active networks, sorted by name ascending
    async fn find_all_active(&self) -> Result<Vec<Network>, RepositoryError>;
}
