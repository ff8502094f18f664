//! Exchange Handlers
//!
//! HTTP handlers for currency reference data and conversion quotes.

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    routing::get,
    Json, Router,
};
use validator::Validate;

use crate::application::use_cases::exchange::ConversionRequest;
use crate::domain::models::currency::CurrencyCode;
use crate::infrastructure::driving_adapters::api_rest::assembler::RouteProvider;
use crate::infrastructure::driving_adapters::api_rest::dto::exchange::{
    QuoteQueryDto, QuoteResponseDto, RatesResponseDto,
};
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Route group mounted under `/exchange`
#[derive(Debug, Clone, Copy, Default)]
pub struct ExchangeRoutes;

impl RouteProvider for ExchangeRoutes {
    fn name(&self) -> &'static str {
        "exchange"
    }

    fn router(&self) -> Router<AppState> {
        Router::new().nest("/exchange", router())
    }
}

/// Create the router for exchange endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/currencies", get(list_currencies))
        .route("/rates/:base", get(get_rates))
        .route("/quote", get(quote_conversion))
}

/// GET /exchange/currencies - List supported currencies
///
/// # Responses
///
/// * 200 OK - Currency codes in display order
#[axum::debug_handler]
async fn list_currencies(State(state): State<AppState>) -> Result<Json<Vec<String>>, ApiError> {
    let currencies = state.list_currencies_use_case.execute().await?;

    Ok(Json(currencies.iter().map(ToString::to_string).collect()))
}

/// GET /exchange/rates/:base - Rates out of a base currency
///
/// # Responses
///
/// * 200 OK - Every configured rate out of `base`
/// * 400 Bad Request - Malformed currency code
/// * 404 Not Found - Unsupported currency
#[axum::debug_handler]
async fn get_rates(
    State(state): State<AppState>,
    Path(base): Path<String>,
) -> Result<Json<RatesResponseDto>, ApiError> {
    let base = CurrencyCode::parse(&base)?;

    let rates = state.get_rates_use_case.execute(&base).await?;

    Ok(Json(RatesResponseDto::new(&base, rates)))
}

/// GET /exchange/quote - Price a conversion
///
/// Query: `from`, `to`, `amount`, optional `side` (`from` | `to`).
///
/// # Responses
///
/// * 200 OK - Priced quote
/// * 400 Bad Request - Missing or invalid parameters
/// * 404 Not Found - Unsupported currency or missing rate
#[axum::debug_handler]
async fn quote_conversion(
    State(state): State<AppState>,
    query: Result<Query<QuoteQueryDto>, QueryRejection>,
) -> Result<Json<QuoteResponseDto>, ApiError> {
    let Query(dto) = query.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

    // Validate DTO
    dto.validate()?;

    let request = ConversionRequest::try_from(dto)?;
    let quote = state.quote_conversion_use_case.execute(request).await?;

    Ok(Json(QuoteResponseDto::from(quote)))
}
