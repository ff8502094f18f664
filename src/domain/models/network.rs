//! Network Domain Model
//!
//! Represents a blockchain network known to the registry.

use crate::shared::errors::DomainError;

/// Newtype wrapper for an EVM chain id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChainId(i64);

impl ChainId {
    /// Create a ChainId, rejecting zero and negative values
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidChainId` if `value` is not positive.
    pub fn new(value: i64) -> Result<Self, DomainError> {
        if value > 0 {
            Ok(Self(value))
        } else {
            Err(DomainError::InvalidChainId(value.to_string()))
        }
    }

    #[must_use]
    pub fn value(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ChainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for ChainId {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let parsed = value
            .parse::<i64>()
            .map_err(|_| DomainError::InvalidChainId(value.to_string()))?;
        Self::new(parsed)
    }
}

/// Data required to register a Network
#[derive(Debug, Clone)]
pub struct CreateNetworkData {
    pub chain_id: i64,
    pub name: String,
    pub rpc_url: String,
    pub test_net: bool,
    pub block_explorer_url: String,
    pub native_currency: String,
    pub active: bool,
}

/// What an explorer link should point at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplorerTarget<'a> {
    Transaction(&'a str),
    Address(&'a str),
}

/// Network domain entity representing a blockchain network
#[derive(Debug, Clone)]
pub struct Network {
    chain_id: ChainId,
    name: String,
    rpc_url: String,
    test_net: bool,
    block_explorer_url: String,
    native_currency: String,
    active: bool,
}

impl Network {
    /// Create a new Network from registration data
    ///
    /// # Errors
    ///
    /// Returns `DomainError` if the chain id is not positive, the name or
    /// native currency is blank, or either URL is not an http(s) URL.
    pub fn new(data: CreateNetworkData) -> Result<Self, DomainError> {
        let chain_id = ChainId::new(data.chain_id)?;

        if data.name.trim().is_empty() {
            return Err(DomainError::InvalidState(format!("network {chain_id} has an empty name")));
        }
        if data.native_currency.trim().is_empty() {
            return Err(DomainError::InvalidState(format!(
                "network {chain_id} has an empty native currency"
            )));
        }
        for url in [&data.rpc_url, &data.block_explorer_url] {
            if !is_http_url(url) {
                return Err(DomainError::InvalidState(format!(
                    "network {chain_id} has an invalid URL '{url}'"
                )));
            }
        }

        Ok(Self {
            chain_id,
            name: data.name,
            rpc_url: data.rpc_url,
            test_net: data.test_net,
            block_explorer_url: data.block_explorer_url,
            native_currency: data.native_currency,
            active: data.active,
        })
    }

    /// Build a block explorer link for a transaction or an address
    #[must_use]
    pub fn explorer_url(&self, target: ExplorerTarget<'_>) -> String {
        let base = self.block_explorer_url.trim_end_matches('/');
        match target {
            ExplorerTarget::Transaction(hash) => format!("{base}/tx/{hash}"),
            ExplorerTarget::Address(address) => format!("{base}/address/{address}"),
        }
    }

    // Getters

    #[must_use]
    pub fn chain_id(&self) -> ChainId {
        self.chain_id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }

    #[must_use]
    pub fn test_net(&self) -> bool {
        self.test_net
    }

    #[must_use]
    pub fn block_explorer_url(&self) -> &str {
        &self.block_explorer_url
    }

    #[must_use]
    pub fn native_currency(&self) -> &str {
        &self.native_currency
    }

    #[must_use]
    pub fn active(&self) -> bool {
        self.active
    }
}

fn is_http_url(url: &str) -> bool {
    url.strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .is_some_and(|rest| !rest.is_empty() && !rest.starts_with('/'))
}
