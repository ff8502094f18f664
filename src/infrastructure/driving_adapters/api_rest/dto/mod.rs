//! Data Transfer Objects
//!
//! Request and response DTOs for the REST API.

pub mod blockchain;
pub mod exchange;

pub use blockchain::{
    ExplorerAddressPathDto, ExplorerLinkResponseDto, ExplorerTxPathDto, NetworkResponseDto, NetworksQueryDto,
};
pub use exchange::{QuoteQueryDto, QuoteResponseDto, RatesResponseDto};
