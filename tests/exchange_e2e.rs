//! End-to-end tests for the exchange route group

mod common;

use axum::http::StatusCode;

use common::{assert_close, ErrorResponse, QuoteResponse, RatesResponse, TestApp};

// ============================================================================
// GET /exchange/currencies
// ============================================================================

#[tokio::test]
async fn test_list_currencies_in_configured_order() {
    let app = TestApp::new();

    let (status, currencies): (_, Vec<String>) = app.get_json("/exchange/currencies").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(currencies, vec!["USD", "EUR", "GBP", "JPY"]);
}

// ============================================================================
// GET /exchange/rates/:base
// ============================================================================

#[tokio::test]
async fn test_get_rates_for_base() {
    let app = TestApp::new();

    let (status, rates): (_, RatesResponse) = app.get_json("/exchange/rates/usd").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(rates.base, "USD");
    let currencies: Vec<&str> = rates.rates.iter().map(|r| r.currency.as_str()).collect();
    assert_eq!(currencies, vec!["EUR", "GBP", "JPY"]);
    assert_close(rates.rates[2].rate, 150.59);
}

#[tokio::test]
async fn test_get_rates_for_unknown_base() {
    let app = TestApp::new();

    let (status, error): (_, ErrorResponse) = app.get_json("/exchange/rates/CHF").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error.error.code, "NOT_FOUND");
}

#[tokio::test]
async fn test_get_rates_for_malformed_base() {
    let app = TestApp::new();

    let (status, error): (_, ErrorResponse) = app.get_json("/exchange/rates/US").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error.error.code, "INVALID_CURRENCY");
}

// ============================================================================
// GET /exchange/quote
// ============================================================================

#[tokio::test]
async fn test_quote_source_amount() {
    let app = TestApp::new();

    let (status, quote): (_, QuoteResponse) = app.get_json("/exchange/quote?from=USD&to=EUR&amount=100").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(quote.side, "from");
    assert_close(quote.rate, 0.92);
    assert_close(quote.source_amount, 100.0);
    assert_close(quote.target_amount, 92.0);
    assert_close(quote.fee, 2.5);
    assert_close(quote.total_cost, 102.5);
    assert_close(quote.effective_rate, 0.92);
}

#[tokio::test]
async fn test_quote_target_amount_uses_reverse_rate() {
    let app = TestApp::new();

    let (status, quote): (_, QuoteResponse) =
        app.get_json("/exchange/quote?from=USD&to=EUR&amount=92&side=to").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(quote.side, "to");
    assert_close(quote.rate, 1.09);
    assert_close(quote.source_amount, 100.28);
    assert_close(quote.target_amount, 92.0);
    assert_close(quote.total_cost, 102.78);
}

#[tokio::test]
async fn test_quote_rounds_to_two_decimals() {
    let app = TestApp::new();

    let (status, quote): (_, QuoteResponse) = app.get_json("/exchange/quote?from=JPY&to=USD&amount=75").await;

    assert_eq!(status, StatusCode::OK);
    assert_close(quote.target_amount, 0.5);
}

#[tokio::test]
async fn test_quote_same_currency_rounds_input_amount() {
    let app = TestApp::new();

    let (status, quote): (_, QuoteResponse) = app.get_json("/exchange/quote?from=USD&to=USD&amount=10.005").await;

    assert_eq!(status, StatusCode::OK);
    assert_close(quote.rate, 1.0);
    assert_close(quote.source_amount, 10.01);
    assert_close(quote.target_amount, 10.01);
    assert_close(quote.total_cost, 12.51);
    assert_close(quote.effective_rate, 1.0);
}

#[tokio::test]
async fn test_quote_missing_directed_rate() {
    let app = TestApp::new();

    let (status, error): (_, ErrorResponse) = app.get_json("/exchange/quote?from=GBP&to=EUR&amount=10").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(error.error.message.contains("GBP->EUR"));
}

#[tokio::test]
async fn test_quote_missing_parameter() {
    let app = TestApp::new();

    let (status, error): (_, ErrorResponse) = app.get_json("/exchange/quote?from=USD&to=EUR").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error.error.code, "BAD_REQUEST");
}

#[tokio::test]
async fn test_quote_non_positive_amount() {
    let app = TestApp::new();

    let (status, error): (_, ErrorResponse) = app.get_json("/exchange/quote?from=USD&to=EUR&amount=0").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error.error.code, "VALIDATION_ERROR");
    let details = error.error.details.unwrap();
    assert_eq!(details[0].field, "amount");
}

#[tokio::test]
async fn test_quote_amount_above_maximum() {
    let app = TestApp::new();

    let (status, error): (_, ErrorResponse) =
        app.get_json("/exchange/quote?from=USD&to=EUR&amount=2000000").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error.error.code, "INVALID_AMOUNT");
}
