//! Currency conversion result.

use rust_decimal::Decimal;
use serde::Serialize;

/// Outcome of a conversion.
///
/// `converted_amount` is `round2(original_amount * rate)`; the input amount is
/// echoed as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    /// Source currency code.
    pub from: String,
    /// Target currency code.
    pub to: String,
    /// Amount as supplied.
    #[serde(with = "crate::numeric::json_number")]
    pub original_amount: Decimal,
    /// Amount in the target currency, rounded to cents.
    #[serde(with = "crate::numeric::json_number")]
    pub converted_amount: Decimal,
    /// Rate applied.
    #[serde(with = "crate::numeric::json_number")]
    pub rate: Decimal,
}
