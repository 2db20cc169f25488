//! HTTP API layer with Axum routes and middleware.
//!
//! This crate provides:
//! - Calculation routes over the core calculators
//! - Error-to-response mapping and a query extractor that uses it
//! - Health check and not-found fallback
//! - Security header middleware

pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use tarif_core::currency::CurrencyConverter;
use tarif_shared::AppConfig;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::ApiError;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Converter over the fixed rate table.
    pub converter: Arc<CurrencyConverter>,
    /// Service name reported by the health check.
    pub service_name: Arc<str>,
}

impl AppState {
    /// Builds the state from configuration.
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        Self {
            converter: Arc::new(CurrencyConverter::default()),
            service_name: Arc::from(config.service.name.as_str()),
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    routes::api_routes()
        .fallback(routes::route_not_found)
        .method_not_allowed_fallback(routes::route_not_found)
        .layer(axum::middleware::from_fn(middleware::security_headers))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
