//! Common test utilities for e2e tests
//!
//! Builds the assembled application from an inline configuration and
//! provides helpers for issuing requests against it.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tower::util::ServiceExt;

use fluxnext_api::infrastructure::driven_adapters::config::AppConfig;
use fluxnext_api::infrastructure::driving_adapters::api_rest::{assemble, AppState};

/// Test configuration: a reduced rate table and three networks, one inactive
pub const TEST_CONFIG: &str = r#"
[server]
host = "127.0.0.1"
port = 0
allowed_origins = ["http://localhost:3000"]

[rate_limit]
enabled = false
requests_per_second = 1000
burst_size = 1000

[exchange]
fee = 2.5
max_amount = 1000000
currencies = ["USD", "EUR", "GBP", "JPY"]
rates = [
    { base = "USD", quote = "EUR", rate = 0.92 },
    { base = "USD", quote = "GBP", rate = 0.79 },
    { base = "USD", quote = "JPY", rate = 150.59 },
    { base = "EUR", quote = "USD", rate = 1.09 },
    { base = "JPY", quote = "USD", rate = 0.0066 },
]

[[blockchain.networks]]
chain_id = 137
name = "Polygon"
rpc_url = "https://polygon-rpc.com"
block_explorer_url = "https://polygonscan.com/"
native_currency = "POL"

[[blockchain.networks]]
chain_id = 1
name = "Ethereum Mainnet"
rpc_url = "https://eth.llamarpc.com"
block_explorer_url = "https://etherscan.io"
native_currency = "ETH"

[[blockchain.networks]]
chain_id = 11155111
name = "Sepolia"
rpc_url = "https://rpc.sepolia.org"
test_net = true
block_explorer_url = "https://sepolia.etherscan.io"
native_currency = "ETH"

[[blockchain.networks]]
chain_id = 56
name = "BNB Smart Chain"
rpc_url = "https://bsc-dataseed.binance.org"
block_explorer_url = "https://bscscan.com"
native_currency = "BNB"
active = false
"#;

/// Test application context
pub struct TestApp {
    pub router: Router,
}

impl TestApp {
    /// Assemble the application exactly as the server binary does
    pub fn new() -> Self {
        let config = AppConfig::from_toml_str(TEST_CONFIG).expect("Failed to parse test config");
        let state = AppState::from_config(config).expect("Failed to seed test state");
        let router = assemble().expect("Failed to assemble application").into_router(state);

        Self { router }
    }

    /// Issue a GET request and return the status and raw body
    pub async fn get(&self, uri: &str) -> (StatusCode, Vec<u8>) {
        self.send(Request::builder().uri(uri).body(Body::empty()).unwrap()).await
    }

    /// Issue a GET request and deserialize the JSON body
    pub async fn get_json<T: DeserializeOwned>(&self, uri: &str) -> (StatusCode, T) {
        let (status, body) = self.get(uri).await;
        let parsed = serde_json::from_slice(&body)
            .unwrap_or_else(|e| panic!("Failed to parse body of {uri}: {e}: {}", String::from_utf8_lossy(&body)));
        (status, parsed)
    }

    /// Send an arbitrary request
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body.to_vec())
    }
}

/// Rates response structure for deserialization
#[derive(Debug, Deserialize)]
pub struct RatesResponse {
    pub base: String,
    pub rates: Vec<RateEntry>,
}

#[derive(Debug, Deserialize)]
pub struct RateEntry {
    pub currency: String,
    pub rate: f64,
}

/// Quote response structure for deserialization
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub from: String,
    pub to: String,
    pub side: String,
    pub rate: f64,
    pub source_amount: f64,
    pub target_amount: f64,
    pub fee: f64,
    pub total_cost: f64,
    pub effective_rate: f64,
}

/// Network response structure for deserialization
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkResponse {
    pub chain_id: i64,
    pub name: String,
    pub rpc_url: String,
    pub test_net: bool,
    pub block_explorer_url: String,
    pub native_currency: String,
}

/// Explorer link response structure for deserialization
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplorerLinkResponse {
    pub chain_id: i64,
    pub url: String,
}

/// Error response structure for deserialization
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    pub request_id: Option<String>,
    pub timestamp: String,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub details: Option<Vec<FieldError>>,
}

#[derive(Debug, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Approximate equality for amounts that travel as JSON floats
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
