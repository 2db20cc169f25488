//! API route definitions.

use axum::{Router, extract::OriginalUri};
use tarif_shared::AppError;

use crate::{AppState, error::ApiError};

pub mod currencies;
pub mod discount;
pub mod health;
pub mod vat;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(currencies::routes())
        .merge(vat::routes())
        .merge(discount::routes())
}

/// Fallback for unknown paths and unsupported methods.
pub async fn route_not_found(OriginalUri(uri): OriginalUri) -> ApiError {
    AppError::NotFound(uri.to_string()).into()
}

/// Treats an empty query value the same as an absent one.
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
