//! VAT result types.

use rust_decimal::Decimal;
use serde::Serialize;

/// Tax-exclusive amount, rate, tax and tax-inclusive total.
///
/// The side the caller supplied is echoed as given; the derived sides are
/// rounded to cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VatBreakdown {
    /// Amount excluding tax (HT).
    #[serde(with = "crate::numeric::json_number")]
    pub ht: Decimal,
    /// VAT rate in percent.
    #[serde(rename = "taux", with = "crate::numeric::json_number")]
    pub rate: Decimal,
    /// Tax amount.
    #[serde(rename = "montantTva", with = "crate::numeric::json_number")]
    pub vat_amount: Decimal,
    /// Amount including tax (TTC).
    #[serde(with = "crate::numeric::json_number")]
    pub ttc: Decimal,
}
