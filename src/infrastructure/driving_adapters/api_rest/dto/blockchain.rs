//! Blockchain DTOs
//!
//! Data transfer objects for the blockchain network endpoints.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::network::{ChainId, Network};

lazy_static! {
    /// Regex for validating Ethereum addresses
    static ref ETHEREUM_ADDRESS_REGEX: Regex = Regex::new(r"^0x[a-fA-F0-9]{40}$").expect("valid regex");

    /// Regex for validating transaction hashes
    static ref TX_HASH_REGEX: Regex = Regex::new(r"^0x[a-fA-F0-9]{64}$").expect("valid regex");
}

/// Validates an Ethereum address format
fn validate_ethereum_address(address: &str) -> Result<(), validator::ValidationError> {
    if ETHEREUM_ADDRESS_REGEX.is_match(address) {
        Ok(())
    } else {
        let mut error = validator::ValidationError::new("ethereum_address");
        error.message = Some("Invalid Ethereum address format (must be 0x followed by 40 hex characters)".into());
        Err(error)
    }
}

/// Validates a transaction hash format
fn validate_tx_hash(hash: &str) -> Result<(), validator::ValidationError> {
    if TX_HASH_REGEX.is_match(hash) {
        Ok(())
    } else {
        let mut error = validator::ValidationError::new("tx_hash");
        error.message = Some("Invalid transaction hash format (must be 0x followed by 64 hex characters)".into());
        Err(error)
    }
}

/// Query string of `GET /blockchain/networks`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworksQueryDto {
    pub test_net: Option<bool>,
}

/// Path of `GET /blockchain/networks/:chain_id/explorer/tx/:hash`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ExplorerTxPathDto {
    pub chain_id: String,

    #[validate(custom(function = "validate_tx_hash"))]
    pub hash: String,
}

/// Path of `GET /blockchain/networks/:chain_id/explorer/address/:address`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ExplorerAddressPathDto {
    pub chain_id: String,

    #[validate(custom(function = "validate_ethereum_address"))]
    pub address: String,
}

/// Network response DTO
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkResponseDto {
    pub chain_id: i64,
    pub name: String,
    pub rpc_url: String,
    pub test_net: bool,
    pub block_explorer_url: String,
    pub native_currency: String,
}

impl From<Network> for NetworkResponseDto {
    fn from(network: Network) -> Self {
        Self::from(&network)
    }
}

impl From<&Network> for NetworkResponseDto {
    fn from(network: &Network) -> Self {
        Self {
            chain_id: network.chain_id().value(),
            name: network.name().to_string(),
            rpc_url: network.rpc_url().to_string(),
            test_net: network.test_net(),
            block_explorer_url: network.block_explorer_url().to_string(),
            native_currency: network.native_currency().to_string(),
        }
    }
}

/// Explorer link response DTO
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplorerLinkResponseDto {
    pub chain_id: i64,
    pub url: String,
}

impl ExplorerLinkResponseDto {
    #[must_use]
    pub fn new(chain_id: ChainId, url: String) -> Self {
        Self {
            chain_id: chain_id.value(),
            url,
        }
    }
}
