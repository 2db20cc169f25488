//! Error responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{SecondsFormat, Utc};
use serde_json::json;
use tarif_core::CalcError;
use tarif_shared::AppError;
use tracing::{error, warn};

/// Message sent in place of internal failure details.
pub const GENERIC_INTERNAL_MESSAGE: &str = "An unexpected error occurred";

/// Current time as ISO-8601 UTC with milliseconds.
#[must_use]
pub fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Error returned by route handlers.
#[derive(Debug)]
pub enum ApiError {
    /// Required query parameters absent or empty; rejected before any calculation.
    MissingParameters {
        /// Which parameters are required.
        message: &'static str,
        /// Sample URL for the route.
        example: &'static str,
    },
    /// Any other application error.
    App(AppError),
}

impl ApiError {
    /// Creates a missing-parameters error.
    #[must_use]
    pub const fn missing_parameters(message: &'static str, example: &'static str) -> Self {
        Self::MissingParameters { message, example }
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self::App(err)
    }
}

impl From<CalcError> for ApiError {
    fn from(err: CalcError) -> Self {
        Self::App(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingParameters { message, example } => {
                warn!(reason = message, "Missing required parameters");
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "error": "Bad Request",
                        "message": message,
                        "example": example,
                        "timestamp": timestamp()
                    })),
                )
                    .into_response()
            }
            Self::App(err) => {
                let status = StatusCode::from_u16(err.status_code())
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                let body = match &err {
                    AppError::Validation(message) => {
                        warn!(reason = %message, "Request rejected");
                        json!({
                            "error": err.error_code(),
                            "message": message,
                            "timestamp": timestamp()
                        })
                    }
                    AppError::NotFound(path) => json!({
                        "error": err.error_code(),
                        "message": format!("The route {path} does not exist")
                    }),
                    AppError::Internal(message) => {
                        error!(error = %message, "Request failed");
                        json!({
                            "error": err.error_code(),
                            "message": GENERIC_INTERNAL_MESSAGE,
                            "timestamp": timestamp()
                        })
                    }
                };
                (status, Json(body)).into_response()
            }
        }
    }
}
