//! Get Active Networks Use Case
//!
//! Retrieves all active networks, sorted by name, optionally filtered on
//! whether they are test networks.

use std::sync::Arc;

use crate::domain::gateways::NetworkRepository;
use crate::domain::models::network::Network;
use crate::shared::errors::UseCaseError;

/// Use case for getting all active networks
pub struct GetActiveNetworksUseCase {
    network_repository: Arc<dyn NetworkRepository>,
}

impl GetActiveNetworksUseCase {
    /// Create a new GetActiveNetworksUseCase
    #[must_use]
    pub fn new(network_repository: Arc<dyn NetworkRepository>) -> Self {
        Self { network_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if the registry cannot be read.
    pub async fn execute(&self, test_net: Option<bool>) -> Result<Vec<Network>, UseCaseError> {
        tracing::debug!(?test_net, "Getting all active networks");

        let networks: Vec<Network> = self
            .network_repository
            .find_all_active()
            .await?
            .into_iter()
            .filter(|n| test_net.map_or(true, |wanted| n.test_net() == wanted))
            .collect();

        tracing::debug!(count = networks.len(), "Found active networks");
        Ok(networks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::network::{ChainId, CreateNetworkData};
    use crate::shared::errors::RepositoryError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockNetworkRepository {
        find_all_active_result: Mutex<Option<Result<Vec<Network>, RepositoryError>>>,
    }

    impl MockNetworkRepository {
        fn new() -> Self {
            Self {
                find_all_active_result: Mutex::new(None),
            }
        }

        fn with_find_all_active(self, result: Result<Vec<Network>, RepositoryError>) -> Self {
            *self.find_all_active_result.lock().unwrap() = Some(result);
            self
        }
    }

    #[async_trait]
    impl NetworkRepository for MockNetworkRepository {
        async fn find_by_chain_id(&self, _chain_id: ChainId) -> Result<Option<Network>, RepositoryError> {
            Ok(None)
        }

        async fn find_all_active(&self) -> Result<Vec<Network>, RepositoryError> {
            self.find_all_active_result
                .lock()
                .unwrap()
                .take()
                .unwrap_or(Ok(vec![]))
        }
    }

    fn create_test_network(chain_id: i64, name: &str, test_net: bool) -> Network {
        Network::new(CreateNetworkData {
            chain_id,
            name: name.to_string(),
            rpc_url: "https://example.com".to_string(),
            test_net,
            block_explorer_url: "https://explorer.example.com".to_string(),
            native_currency: "ETH".to_string(),
            active: true,
        })
        .expect("valid test data")
    }

    #[tokio::test]
    async fn should_return_empty_list_when_no_active_networks() {
        let repo = Arc::new(MockNetworkRepository::new().with_find_all_active(Ok(vec![])));

        let use_case = GetActiveNetworksUseCase::new(repo);
        let result = use_case.execute(None).await;

        assert!(result.is_ok());
        assert!(result.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_return_active_networks() {
        let networks = vec![
            create_test_network(1, "Ethereum", false),
            create_test_network(137, "Polygon", false),
        ];
        let repo = Arc::new(MockNetworkRepository::new().with_find_all_active(Ok(networks)));

        let use_case = GetActiveNetworksUseCase::new(repo);
        let result = use_case.execute(None).await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn should_filter_on_test_net_flag() {
        let networks = vec![
            create_test_network(1, "Ethereum", false),
            create_test_network(11_155_111, "Sepolia", true),
        ];
        let repo = Arc::new(MockNetworkRepository::new().with_find_all_active(Ok(networks)));

        let use_case = GetActiveNetworksUseCase::new(repo);
        let test_nets = use_case.execute(Some(true)).await.unwrap();

        assert_eq!(test_nets.len(), 1);
        assert_eq!(test_nets[0].name(), "Sepolia");
    }

    #[tokio::test]
    async fn should_propagate_repository_errors() {
        let repo = Arc::new(
            MockNetworkRepository::new().with_find_all_active(Err(RepositoryError::Seed("registry unavailable".to_string()))),
        );

        let use_case = GetActiveNetworksUseCase::new(repo);
        let result = use_case.execute(None).await;

        assert!(matches!(result, Err(UseCaseError::Repository(_))));
    }
}
