//! VAT routes.

use axum::{Json, Router, routing::get};
use serde::Deserialize;
use tarif_core::{
    Numeric,
    vat::{VatBreakdown, VatCalculator},
};
use tracing::debug;

use super::present;
use crate::{AppState, error::ApiError, extract::QueryParams};

/// Creates the VAT routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/tva", get(calculate_ttc))
        .route("/tva/reverse", get(calculate_ht))
}

/// Query parameters for the forward calculation.
#[derive(Debug, Deserialize)]
pub struct TtcQuery {
    /// Amount excluding tax.
    pub ht: Option<String>,
    /// VAT rate in percent.
    pub taux: Option<String>,
}

/// Query parameters for the reverse calculation.
#[derive(Debug, Deserialize)]
pub struct HtQuery {
    /// Amount including tax.
    pub ttc: Option<String>,
    /// VAT rate in percent.
    pub taux: Option<String>,
}

/// GET `/tva?ht=100&taux=20` - Tax-inclusive total from a tax-exclusive amount.
async fn calculate_ttc(
    QueryParams(query): QueryParams<TtcQuery>,
) -> Result<Json<VatBreakdown>, ApiError> {
    let (Some(ht), Some(taux)) = (present(query.ht.as_deref()), present(query.taux.as_deref()))
    else {
        return Err(ApiError::missing_parameters(
            "the \"ht\" and \"taux\" parameters are required",
            "/tva?ht=100&taux=20",
        ));
    };

    let result = VatCalculator::calculate_ttc(Numeric::parse(ht), Numeric::parse(taux))?;
    debug!(ht = %result.ht, rate = %result.rate, ttc = %result.ttc, "TTC calculated");
    Ok(Json(result))
}

/// GET `/tva/reverse?ttc=120&taux=20` - Tax-exclusive amount from a total.
async fn calculate_ht(
    QueryParams(query): QueryParams<HtQuery>,
) -> Result<Json<VatBreakdown>, ApiError> {
    let (Some(ttc), Some(taux)) = (present(query.ttc.as_deref()), present(query.taux.as_deref()))
    else {
        return Err(ApiError::missing_parameters(
            "the \"ttc\" and \"taux\" parameters are required",
            "/tva/reverse?ttc=120&taux=20",
        ));
    };

    let result = VatCalculator::calculate_ht(Numeric::parse(ttc), Numeric::parse(taux))?;
    debug!(ttc = %result.ttc, rate = %result.rate, ht = %result.ht, "HT calculated");
    Ok(Json(result))
}
