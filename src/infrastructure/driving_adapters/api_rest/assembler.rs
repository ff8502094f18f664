//! Application Assembler
//!
//! Builds the single HTTP application by attaching route groups in a fixed
//! order, then hands it to the server with the shared middleware stack.
//!
//! ```text
//! create_application() ──► attach(exchange) ──► attach(blockchain) ──► into_router(state)
//!      unassembled                                    assembled           servable
//! ```

use axum::http::HeaderValue;
use axum::{middleware, Router};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::infrastructure::driving_adapters::api_rest::handlers::{BlockchainRoutes, ExchangeRoutes};
use crate::infrastructure::driving_adapters::api_rest::middleware::request_id_middleware;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::{ApiError, AssemblyError, UseCaseError};

/// A route group that can be mounted onto the application
///
/// Implementors return their bindings already nested under their own prefix.
pub trait RouteProvider: Send + Sync {
    /// Stable name of the group; each name is attached at most once
    fn name(&self) -> &'static str;

    /// The group's route bindings
    fn router(&self) -> Router<AppState>;
}

/// The application under assembly
///
/// Owns the merged route table and the names of the attached groups, in
/// attachment order.
pub struct Application {
    router: Router<AppState>,
    routers: Vec<&'static str>,
}

impl std::fmt::Debug for Application {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Application").field("routers", &self.routers).finish_non_exhaustive()
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}

impl Application {
    /// Create an application with no route groups attached
    #[must_use]
    pub fn new() -> Self {
        Self {
            router: Router::new(),
            routers: Vec::new(),
        }
    }

    /// Merge a route group's bindings into the application
    ///
    /// Overlapping paths between groups follow axum's merge policy and panic
    /// at startup.
    ///
    /// # Errors
    ///
    /// Returns `AssemblyError::DuplicateRouter` if a group with the same name
    /// is already attached; the application is left unchanged.
    pub fn attach(&mut self, provider: &dyn RouteProvider) -> Result<(), AssemblyError> {
        let name = provider.name();
        if self.routers.contains(&name) {
            return Err(AssemblyError::DuplicateRouter(name));
        }

        self.router = std::mem::take(&mut self.router).merge(provider.router());
        self.routers.push(name);
        tracing::debug!(router = name, position = self.routers.len(), "Route group attached");
        Ok(())
    }

    /// Names of the attached route groups, in attachment order
    #[must_use]
    pub fn routers(&self) -> &[&'static str] {
        &self.routers
    }

    /// Apply the shared middleware stack and state, producing the router the
    /// server runs
    pub fn into_router(self, state: AppState) -> Router {
        let cors = cors_layer(&state.config.server.allowed_origins);

        self.router
            .fallback(route_not_found)
            .layer(TraceLayer::new_for_http())
            .layer(cors)
            .layer(middleware::from_fn(request_id_middleware))
            .with_state(state)
    }
}

/// Create an empty application
#[must_use]
pub fn create_application() -> Application {
    Application::new()
}

/// Create the application and attach every route group: exchange, then
/// blockchain
///
/// # Errors
///
/// Returns `AssemblyError` if a route group is attached twice.
pub fn assemble() -> Result<Application, AssemblyError> {
    let mut application = create_application();
    application.attach(&ExchangeRoutes)?;
    application.attach(&BlockchainRoutes)?;

    tracing::info!(routers = ?application.routers(), "Application assembled");
    Ok(application)
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if allowed_origins.is_empty() || allowed_origins.iter().any(|o| o == "*") {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(origins))
}

async fn route_not_found(uri: axum::http::Uri) -> ApiError {
    ApiError::UseCase(UseCaseError::NotFound {
        resource: "Route".to_string(),
        id: uri.path().to_string(),
    })
}
