//! Blockchain Handlers
//!
//! HTTP handlers for the read-only network registry.

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    routing::get,
    Json, Router,
};
use validator::Validate;

use crate::domain::models::network::{ChainId, ExplorerTarget};
use crate::infrastructure::driving_adapters::api_rest::assembler::RouteProvider;
use crate::infrastructure::driving_adapters::api_rest::dto::blockchain::{
    ExplorerAddressPathDto, ExplorerLinkResponseDto, ExplorerTxPathDto, NetworkResponseDto, NetworksQueryDto,
};
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Route group mounted under `/blockchain`
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockchainRoutes;

impl RouteProvider for BlockchainRoutes {
    fn name(&self) -> &'static str {
        "blockchain"
    }

    fn router(&self) -> Router<AppState> {
        Router::new().nest("/blockchain", router())
    }
}

/// Create the router for blockchain endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/networks", get(get_active_networks))
        .route("/networks/:chain_id", get(get_network_by_chain_id))
        .route("/networks/:chain_id/explorer/tx/:hash", get(get_transaction_link))
        .route("/networks/:chain_id/explorer/address/:address", get(get_address_link))
}

/// GET /blockchain/networks - Active networks sorted by name
///
/// # Responses
///
/// * 200 OK - List of active networks, optionally filtered with `testNet`
/// * 400 Bad Request - Malformed query string
#[axum::debug_handler]
async fn get_active_networks(
    State(state): State<AppState>,
    query: Result<Query<NetworksQueryDto>, QueryRejection>,
) -> Result<Json<Vec<NetworkResponseDto>>, ApiError> {
    let Query(query) = query.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

    let networks = state.get_active_networks_use_case.execute(query.test_net).await?;

    let response: Vec<NetworkResponseDto> = networks.into_iter().map(NetworkResponseDto::from).collect();
    Ok(Json(response))
}

/// GET /blockchain/networks/:chain_id - A network by chain ID
///
/// # Responses
///
/// * 200 OK - Network found
/// * 400 Bad Request - `chain_id` is not a positive integer
/// * 404 Not Found - Network does not exist or is inactive
#[axum::debug_handler]
async fn get_network_by_chain_id(
    State(state): State<AppState>,
    Path(chain_id): Path<String>,
) -> Result<Json<NetworkResponseDto>, ApiError> {
    let chain_id = ChainId::try_from(chain_id.as_str())?;

    let network = state.get_network_by_chain_id_use_case.execute(chain_id).await?;

    Ok(Json(NetworkResponseDto::from(network)))
}

/// GET /blockchain/networks/:chain_id/explorer/tx/:hash - Explorer link for a transaction
#[axum::debug_handler]
async fn get_transaction_link(
    State(state): State<AppState>,
    Path(path): Path<ExplorerTxPathDto>,
) -> Result<Json<ExplorerLinkResponseDto>, ApiError> {
    path.validate()?;
    let chain_id = ChainId::try_from(path.chain_id.as_str())?;

    let url = state
        .get_explorer_link_use_case
        .execute(chain_id, ExplorerTarget::Transaction(&path.hash))
        .await?;

    Ok(Json(ExplorerLinkResponseDto::new(chain_id, url)))
}

/// GET /blockchain/networks/:chain_id/explorer/address/:address - Explorer link for an address
#[axum::debug_handler]
async fn get_address_link(
    State(state): State<AppState>,
    Path(path): Path<ExplorerAddressPathDto>,
) -> Result<Json<ExplorerLinkResponseDto>, ApiError> {
    path.validate()?;
    let chain_id = ChainId::try_from(path.chain_id.as_str())?;

    let url = state
        .get_explorer_link_use_case
        .execute(chain_id, ExplorerTarget::Address(&path.address))
        .await?;

    Ok(Json(ExplorerLinkResponseDto::new(chain_id, url)))
}
