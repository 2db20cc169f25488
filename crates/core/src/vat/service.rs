//! VAT calculator.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::types::VatBreakdown;
use crate::error::{CalcError, CalcResult};
use crate::numeric::{Numeric, round2};

const HUNDRED: Decimal = dec!(100);

/// Stateless VAT calculator.
pub struct VatCalculator;

impl VatCalculator {
    /// Computes the tax and the tax-inclusive total from a tax-exclusive amount.
    ///
    /// `vat_amount = round2(ht * rate / 100)`, `ttc = round2(ht + vat_amount)`.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use tarif_core::vat::VatCalculator;
    ///
    /// let result = VatCalculator::calculate_ttc(dec!(100), dec!(20)).unwrap();
    /// assert_eq!(result.ttc, dec!(120));
    /// ```
    pub fn calculate_ttc(
        ht: impl Into<Numeric>,
        rate: impl Into<Numeric>,
    ) -> CalcResult<VatBreakdown> {
        let ht = ht.into().non_negative(CalcError::InvalidHt, "HT amount")?;
        let rate = Self::validate_rate(rate.into())?;

        let vat_amount = ht
            .checked_mul(rate)
            .map(|v| v / HUNDRED)
            .ok_or(CalcError::Overflow("VAT amount"))?;
        let vat_amount = round2(vat_amount);
        let ttc = ht
            .checked_add(vat_amount)
            .ok_or(CalcError::Overflow("TTC amount"))?;

        Ok(VatBreakdown {
            ht,
            rate,
            vat_amount,
            ttc: round2(ttc),
        })
    }

    /// Recovers the tax-exclusive amount from a tax-inclusive total.
    ///
    /// `ht = round2(ttc / (1 + rate / 100))`, then `vat_amount = round2(ttc - ht)`.
    /// The tax is the residual of the subtraction, not `ht * rate` re-applied,
    /// so `ht + vat_amount` always gives back `ttc` to the cent.
    pub fn calculate_ht(
        ttc: impl Into<Numeric>,
        rate: impl Into<Numeric>,
    ) -> CalcResult<VatBreakdown> {
        let ttc = ttc.into().non_negative(CalcError::InvalidTtc, "TTC amount")?;
        let rate = Self::validate_rate(rate.into())?;

        let divisor = Decimal::ONE + rate / HUNDRED;
        let ht = round2(ttc / divisor);
        let vat_amount = round2(ttc - ht);

        Ok(VatBreakdown {
            ht,
            rate,
            vat_amount,
            ttc,
        })
    }

    fn validate_rate(rate: Numeric) -> CalcResult<Decimal> {
        rate.within(Decimal::ZERO, HUNDRED, CalcError::InvalidVatRate)
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use crate::error::ErrorKind;
    use rstest::rstest;

    #[rstest]
    #[case(dec!(100), dec!(20), dec!(20), dec!(120))]
    #[case(dec!(100), dec!(0), dec!(0), dec!(100))]
    #[case(dec!(100), dec!(100), dec!(100), dec!(200))]
    #[case(dec!(19.99), dec!(5.5), dec!(1.10), dec!(21.09))]
    #[case(dec!(0.05), dec!(10), dec!(0.01), dec!(0.06))]
    #[case(dec!(0), dec!(20), dec!(0), dec!(0))]
    fn test_calculate_ttc(
        #[case] ht: Decimal,
        #[case] rate: Decimal,
        #[case] vat_amount: Decimal,
        #[case] ttc: Decimal,
    ) {
        let result = VatCalculator::calculate_ttc(ht, rate).unwrap();
        assert_eq!(result.ht, ht);
        assert_eq!(result.rate, rate);
        assert_eq!(result.vat_amount, vat_amount);
        assert_eq!(result.ttc, ttc);
    }

    #[rstest]
    #[case(dec!(120), dec!(20), dec!(100), dec!(20))]
    #[case(dec!(100), dec!(0), dec!(100), dec!(0))]
    #[case(dec!(100), dec!(20), dec!(83.33), dec!(16.67))]
    #[case(dec!(21.09), dec!(5.5), dec!(19.99), dec!(1.10))]
    #[case(dec!(10), dec!(100), dec!(5), dec!(5))]
    fn test_calculate_ht(
        #[case] ttc: Decimal,
        #[case] rate: Decimal,
        #[case] ht: Decimal,
        #[case] vat_amount: Decimal,
    ) {
        let result = VatCalculator::calculate_ht(ttc, rate).unwrap();
        assert_eq!(result.ttc, ttc);
        assert_eq!(result.rate, rate);
        assert_eq!(result.ht, ht);
        assert_eq!(result.vat_amount, vat_amount);
    }

    #[rstest]
    #[case(dec!(-100).into(), dec!(20).into(), CalcError::InvalidHt)]
    #[case(Numeric::NotANumber, dec!(20).into(), CalcError::InvalidHt)]
    #[case(dec!(100).into(), dec!(150).into(), CalcError::InvalidVatRate)]
    #[case(dec!(100).into(), dec!(-1).into(), CalcError::InvalidVatRate)]
    #[case(dec!(100).into(), Numeric::NotANumber, CalcError::InvalidVatRate)]
    #[case(dec!(-100).into(), dec!(150).into(), CalcError::InvalidHt)]
    fn test_calculate_ttc_rejects(
        #[case] ht: Numeric,
        #[case] rate: Numeric,
        #[case] expected: CalcError,
    ) {
        assert_eq!(VatCalculator::calculate_ttc(ht, rate).unwrap_err(), expected);
    }

    #[rstest]
    #[case(dec!(-1).into(), dec!(20).into(), CalcError::InvalidTtc)]
    #[case(Numeric::NotANumber, dec!(20).into(), CalcError::InvalidTtc)]
    #[case(dec!(120).into(), dec!(100.01).into(), CalcError::InvalidVatRate)]
    fn test_calculate_ht_rejects(
        #[case] ttc: Numeric,
        #[case] rate: Numeric,
        #[case] expected: CalcError,
    ) {
        assert_eq!(VatCalculator::calculate_ht(ttc, rate).unwrap_err(), expected);
    }

    #[test]
    fn test_calculate_ttc_overflow_is_internal() {
        let err = VatCalculator::calculate_ttc(Decimal::MAX, dec!(100)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Internal);
    }

    #[test]
    fn test_serialized_field_names() {
        let result = VatCalculator::calculate_ht(dec!(120), dec!(20)).unwrap();
        assert_eq!(
            serde_json::to_string(&result).unwrap(),
            r#"{"ht":100,"taux":20,"montantTva":20,"ttc":120}"#
        );
    }

    #[test]
    fn test_out_of_range_inputs() {
        assert_eq!(
            VatCalculator::calculate_ttc(Numeric::parse("1e29"), dec!(20)).unwrap_err(),
            CalcError::Overflow("HT amount")
        );
        assert_eq!(
            VatCalculator::calculate_ttc(dec!(100), Numeric::parse("1e29")).unwrap_err(),
            CalcError::InvalidVatRate
        );
        assert_eq!(
            VatCalculator::calculate_ht(Numeric::parse("-1e29"), dec!(20)).unwrap_err(),
            CalcError::InvalidTtc
        );
    }
}
