//! Discount routes.

use axum::{Json, Router, routing::get};
use serde::Deserialize;
use tarif_core::{
    Numeric,
    discount::{DiscountBreakdown, DiscountCalculator},
};
use tracing::debug;

use super::present;
use crate::{AppState, error::ApiError, extract::QueryParams};

/// Creates the discount routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/remise", get(apply_discount))
        .route("/remise/calculate", get(calculate_percentage))
}

/// Query parameters for applying a discount.
#[derive(Debug, Deserialize)]
pub struct ApplyDiscountQuery {
    /// Price before the discount.
    pub prix: Option<String>,
    /// Discount in percent.
    pub pourcentage: Option<String>,
}

/// Query parameters for deriving a discount percentage.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountPercentageQuery {
    /// Price before the discount.
    pub prix_initial: Option<String>,
    /// Price after the discount.
    pub prix_final: Option<String>,
}

/// GET `/remise?prix=100&pourcentage=10` - Apply a discount.
async fn apply_discount(
    QueryParams(query): QueryParams<ApplyDiscountQuery>,
) -> Result<Json<DiscountBreakdown>, ApiError> {
    let (Some(prix), Some(pourcentage)) = (
        present(query.prix.as_deref()),
        present(query.pourcentage.as_deref()),
    ) else {
        return Err(ApiError::missing_parameters(
            "the \"prix\" and \"pourcentage\" parameters are required",
            "/remise?prix=100&pourcentage=10",
        ));
    };

    let result =
        DiscountCalculator::apply_discount(Numeric::parse(prix), Numeric::parse(pourcentage))?;
    debug!(
        price = %result.initial_price,
        percentage = %result.percentage,
        final_price = %result.final_price,
        "Discount applied"
    );
    Ok(Json(result))
}

/// GET `/remise/calculate?prixInitial=100&prixFinal=90` - Derive the discount percentage.
async fn calculate_percentage(
    QueryParams(query): QueryParams<DiscountPercentageQuery>,
) -> Result<Json<DiscountBreakdown>, ApiError> {
    let (Some(prix_initial), Some(prix_final)) = (
        present(query.prix_initial.as_deref()),
        present(query.prix_final.as_deref()),
    ) else {
        return Err(ApiError::missing_parameters(
            "the \"prixInitial\" and \"prixFinal\" parameters are required",
            "/remise/calculate?prixInitial=100&prixFinal=90",
        ));
    };

    let result = DiscountCalculator::calculate_discount_percentage(
        Numeric::parse(prix_initial),
        Numeric::parse(prix_final),
    )?;
    debug!(
        initial_price = %result.initial_price,
        final_price = %result.final_price,
        percentage = %result.percentage,
        "Discount percentage calculated"
    );
    Ok(Json(result))
}
