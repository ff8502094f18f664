//! Blockchain Use Cases
//!
//! Read-only queries over the registered blockchain networks.

mod get_active_networks;
mod get_explorer_link;
mod get_network_by_chain_id;

pub use get_active_networks::GetActiveNetworksUseCase;
pub use get_explorer_link::GetExplorerLinkUseCase;
pub use get_network_by_chain_id::GetNetworkByChainIdUseCase;
