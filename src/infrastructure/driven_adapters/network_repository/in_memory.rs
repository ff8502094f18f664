//! In-Memory Network Repository
//!
//! Network registry seeded once from configuration.

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::domain::gateways::NetworkRepository;
use crate::domain::models::network::{ChainId, CreateNetworkData, Network};
use crate::infrastructure::driven_adapters::config::{BlockchainConfig, NetworkConfig};
use crate::shared::errors::RepositoryError;

/// Read-only registry keyed by chain id
#[derive(Debug, Clone, Default)]
pub struct InMemoryNetworkRepository {
    networks: BTreeMap<ChainId, Network>,
}

impl InMemoryNetworkRepository {
    /// Build a registry from already-validated networks
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Seed` if two networks share a chain id.
    pub fn new(networks: Vec<Network>) -> Result<Self, RepositoryError> {
        let mut by_chain_id = BTreeMap::new();
        for network in networks {
            let chain_id = network.chain_id();
            if by_chain_id.insert(chain_id, network).is_some() {
                return Err(RepositoryError::Seed(format!("chain_id {chain_id} is registered twice")));
            }
        }
        Ok(Self { networks: by_chain_id })
    }

    /// Seed the registry from the `[blockchain]` configuration section
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Seed` if a network is invalid or two
    /// networks share a chain id.
    pub fn from_config(config: &BlockchainConfig) -> Result<Self, RepositoryError> {
        let networks = config
            .networks
            .iter()
            .map(|entry| Network::new(CreateNetworkData::from(entry)).map_err(|e| RepositoryError::Seed(e.to_string())))
            .collect::<Result<Vec<_>, _>>()?;

        let repository = Self::new(networks)?;
        tracing::debug!(networks = repository.networks.len(), "Network registry seeded");
        Ok(repository)
    }
}

impl From<&NetworkConfig> for CreateNetworkData {
    fn from(entry: &NetworkConfig) -> Self {
        Self {
            chain_id: entry.chain_id,
            name: entry.name.clone(),
            rpc_url: entry.rpc_url.clone(),
            test_net: entry.test_net,
            block_explorer_url: entry.block_explorer_url.clone(),
            native_currency: entry.native_currency.clone(),
            active: entry.active,
        }
    }
}

#[async_trait]
impl NetworkRepository for InMemoryNetworkRepository {
    async fn find_by_chain_id(&self, chain_id: ChainId) -> Result<Option<Network>, RepositoryError> {
        Ok(self.networks.get(&chain_id).filter(|n| n.active()).cloned())
    }

    async fn find_all_active(&self) -> Result<Vec<Network>, RepositoryError> {
        let mut networks: Vec<Network> = self.networks.values().filter(|n| n.active()).cloned().collect();
        networks.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(networks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn network(chain_id: i64, name: &str) -> Network {
        network_with_status(chain_id, name, true)
    }

    fn network_with_status(chain_id: i64, name: &str, active: bool) -> Network {
        Network::new(CreateNetworkData {
            chain_id,
            name: name.to_string(),
            rpc_url: "https://rpc.example.com".to_string(),
            test_net: false,
            block_explorer_url: "https://explorer.example.com".to_string(),
            native_currency: "ETH".to_string(),
            active,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn should_sort_active_networks_by_name() {
        let repo = InMemoryNetworkRepository::new(vec![
            network(137, "Polygon"),
            network(1, "Ethereum"),
            network(42161, "Arbitrum One"),
        ])
        .unwrap();

        let names: Vec<String> = repo
            .find_all_active()
            .await
            .unwrap()
            .iter()
            .map(|n| n.name().to_string())
            .collect();
        assert_eq!(names, vec!["Arbitrum One", "Ethereum", "Polygon"]);
    }

    #[tokio::test]
    async fn should_hide_inactive_networks() {
        let repo = InMemoryNetworkRepository::new(vec![network(1, "Ethereum"), network_with_status(56, "BNB", false)]).unwrap();

        assert_eq!(repo.find_all_active().await.unwrap().len(), 1);
        assert!(repo.find_by_chain_id(ChainId::new(56).unwrap()).await.unwrap().is_none());
        assert!(repo.find_by_chain_id(ChainId::new(1).unwrap()).await.unwrap().is_some());
    }

    #[test]
    fn should_reject_duplicate_chain_ids() {
        let result = InMemoryNetworkRepository::new(vec![network(1, "Ethereum"), network(1, "Ethereum Again")]);
        assert!(matches!(result, Err(RepositoryError::Seed(_))));
    }

    #[test]
    fn should_reject_invalid_network_config() {
        let config = BlockchainConfig {
            networks: vec![NetworkConfig {
                chain_id: 0,
                name: "Broken".to_string(),
                rpc_url: "https://rpc.example.com".to_string(),
                test_net: false,
                block_explorer_url: "https://explorer.example.com".to_string(),
                native_currency: "ETH".to_string(),
                active: true,
            }],
        };
        assert!(matches!(
            InMemoryNetworkRepository::from_config(&config),
            Err(RepositoryError::Seed(_))
        ));
    }
}
