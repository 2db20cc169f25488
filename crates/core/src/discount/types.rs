//! Discount result types.

use rust_decimal::Decimal;
use serde::Serialize;

/// Initial price, discount percentage, discount amount and final price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiscountBreakdown {
    /// Price before the discount.
    #[serde(rename = "prixInitial", with = "crate::numeric::json_number")]
    pub initial_price: Decimal,
    /// Discount in percent.
    #[serde(rename = "pourcentage", with = "crate::numeric::json_number")]
    pub percentage: Decimal,
    /// Amount taken off.
    #[serde(rename = "montantRemise", with = "crate::numeric::json_number")]
    pub discount_amount: Decimal,
    /// Price after the discount.
    #[serde(rename = "prixFinal", with = "crate::numeric::json_number")]
    pub final_price: Decimal,
}
