//! Request extractors.

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use tarif_shared::AppError;

use crate::error::ApiError;

/// Query string extractor that rejects with the JSON error body.
///
/// Wraps [`Query`]; a query string that does not deserialize into `T`
/// (a repeated parameter, for one) is a validation error.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryParams<T>(pub T);

impl<T, S> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Query::<T>::from_request_parts(parts, state)
            .await
            .map(|Query(value)| Self(value))
            .map_err(|rejection| {
                ApiError::from(AppError::Validation(format!(
                    "query parameters must be well-formed: {}",
                    rejection.body_text()
                )))
            })
    }
}
