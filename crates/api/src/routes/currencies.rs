//! Currency conversion routes.

use axum::{
    Json, Router,
    extract::State,
    routing::get,
};
use serde::{Deserialize, Serialize};
use tarif_core::{Numeric, currency::ConversionResult};
use tracing::debug;

use super::present;
use crate::{AppState, error::ApiError, extract::QueryParams};

/// Creates the currency routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/convert", get(convert))
        .route("/currencies", get(list_currencies))
}

/// Query parameters for a conversion.
#[derive(Debug, Deserialize)]
pub struct ConvertQuery {
    /// Source currency code, any case.
    pub from: Option<String>,
    /// Target currency code, any case.
    pub to: Option<String>,
    /// Amount to convert.
    pub amount: Option<String>,
}

/// Response listing the supported source currencies.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrenciesResponse {
    /// Currency codes, in table order.
    pub supported_currencies: Vec<&'static str>,
    /// Number of codes.
    pub count: usize,
}

/// GET `/convert?from=EUR&to=USD&amount=100` - Convert an amount.
async fn convert(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<ConvertQuery>,
) -> Result<Json<ConversionResult>, ApiError> {
    let (Some(from), Some(to), Some(amount)) = (
        present(query.from.as_deref()),
        present(query.to.as_deref()),
        present(query.amount.as_deref()),
    ) else {
        return Err(ApiError::missing_parameters(
            "the \"from\", \"to\" and \"amount\" parameters are required",
            "/convert?from=EUR&to=USD&amount=100",
        ));
    };

    let result = state.converter.convert(
        &from.to_uppercase(),
        &to.to_uppercase(),
        Numeric::parse(amount),
    )?;

    debug!(
        from = %result.from,
        to = %result.to,
        amount = %result.original_amount,
        converted = %result.converted_amount,
        "Currency converted"
    );

    Ok(Json(result))
}

/// GET `/currencies` - List supported source currencies.
async fn list_currencies(State(state): State<AppState>) -> Json<CurrenciesResponse> {
    let currencies = state.converter.supported_currencies();
    Json(CurrenciesResponse {
        count: currencies.len(),
        supported_currencies: currencies,
    })
}
