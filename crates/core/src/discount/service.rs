//! Discount calculator.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::types::DiscountBreakdown;
use crate::error::{CalcError, CalcResult};
use crate::numeric::{Numeric, round2};

const HUNDRED: Decimal = dec!(100);

/// Stateless discount calculator.
pub struct DiscountCalculator;

impl DiscountCalculator {
    /// Applies `percentage` to `price`.
    ///
    /// `discount_amount = round2(price * percentage / 100)`,
    /// `final_price = round2(price - discount_amount)`.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use tarif_core::discount::DiscountCalculator;
    ///
    /// let result = DiscountCalculator::apply_discount(dec!(100), dec!(10)).unwrap();
    /// assert_eq!(result.final_price, dec!(90));
    /// ```
    pub fn apply_discount(
        price: impl Into<Numeric>,
        percentage: impl Into<Numeric>,
    ) -> CalcResult<DiscountBreakdown> {
        let price = price.into().non_negative(CalcError::InvalidPrice, "price")?;
        let percentage = percentage.into().within(
            Decimal::ZERO,
            HUNDRED,
            CalcError::InvalidDiscountPercentage,
        )?;

        let discount_amount = price
            .checked_mul(percentage)
            .map(|v| v / HUNDRED)
            .ok_or(CalcError::Overflow("discount amount"))?;
        let discount_amount = round2(discount_amount);

        Ok(DiscountBreakdown {
            initial_price: price,
            percentage,
            discount_amount,
            final_price: round2(price - discount_amount),
        })
    }

    /// Derives the discount percentage that takes `initial_price` to `final_price`.
    ///
    /// Checks run in order: initial price strictly positive, final price
    /// non-negative, final price not above initial price. The percentage is
    /// computed from the already rounded discount amount.
    pub fn calculate_discount_percentage(
        initial_price: impl Into<Numeric>,
        final_price: impl Into<Numeric>,
    ) -> CalcResult<DiscountBreakdown> {
        let initial_price = initial_price
            .into()
            .positive(CalcError::InvalidInitialPrice, "initial price")?;
        let final_price = final_price
            .into()
            .non_negative(CalcError::InvalidFinalPrice, "final price")?;
        if final_price > initial_price {
            return Err(CalcError::FinalPriceExceedsInitial);
        }

        let discount_amount = round2(initial_price - final_price);
        // initial_price > 0 was checked above
        let percentage = (discount_amount / initial_price)
            .checked_mul(HUNDRED)
            .ok_or(CalcError::Overflow("discount percentage"))?;

        Ok(DiscountBreakdown {
            initial_price,
            percentage: round2(percentage),
            discount_amount,
            final_price,
        })
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(dec!(100), dec!(10), dec!(10), dec!(90))]
    #[case(dec!(100), dec!(0), dec!(0), dec!(100))]
    #[case(dec!(100), dec!(100), dec!(100), dec!(0))]
    #[case(dec!(49.99), dec!(15), dec!(7.50), dec!(42.49))]
    #[case(dec!(0), dec!(50), dec!(0), dec!(0))]
    fn test_apply_discount(
        #[case] price: Decimal,
        #[case] percentage: Decimal,
        #[case] discount_amount: Decimal,
        #[case] final_price: Decimal,
    ) {
        let result = DiscountCalculator::apply_discount(price, percentage).unwrap();
        assert_eq!(result.initial_price, price);
        assert_eq!(result.percentage, percentage);
        assert_eq!(result.discount_amount, discount_amount);
        assert_eq!(result.final_price, final_price);
    }

    #[rstest]
    #[case(dec!(100), dec!(90), dec!(10), dec!(10))]
    #[case(dec!(100), dec!(100), dec!(0), dec!(0))]
    #[case(dec!(100), dec!(0), dec!(100), dec!(100))]
    #[case(dec!(30), dec!(20), dec!(10), dec!(33.33))]
    #[case(dec!(3), dec!(1), dec!(2), dec!(66.67))]
    fn test_calculate_discount_percentage(
        #[case] initial_price: Decimal,
        #[case] final_price: Decimal,
        #[case] discount_amount: Decimal,
        #[case] percentage: Decimal,
    ) {
        let result =
            DiscountCalculator::calculate_discount_percentage(initial_price, final_price).unwrap();
        assert_eq!(result.initial_price, initial_price);
        assert_eq!(result.final_price, final_price);
        assert_eq!(result.discount_amount, discount_amount);
        assert_eq!(result.percentage, percentage);
    }

    #[rstest]
    #[case(dec!(-100).into(), dec!(10).into(), CalcError::InvalidPrice)]
    #[case(Numeric::NotANumber, dec!(10).into(), CalcError::InvalidPrice)]
    #[case(dec!(100).into(), dec!(150).into(), CalcError::InvalidDiscountPercentage)]
    #[case(dec!(100).into(), dec!(-0.5).into(), CalcError::InvalidDiscountPercentage)]
    #[case(dec!(100).into(), Numeric::NotANumber, CalcError::InvalidDiscountPercentage)]
    fn test_apply_discount_rejects(
        #[case] price: Numeric,
        #[case] percentage: Numeric,
        #[case] expected: CalcError,
    ) {
        assert_eq!(
            DiscountCalculator::apply_discount(price, percentage).unwrap_err(),
            expected
        );
    }

    #[rstest]
    #[case(dec!(0).into(), dec!(0).into(), CalcError::InvalidInitialPrice)]
    #[case(dec!(-10).into(), dec!(-20).into(), CalcError::InvalidInitialPrice)]
    #[case(dec!(-10).into(), Numeric::NotANumber, CalcError::InvalidInitialPrice)]
    #[case(Numeric::NotANumber, dec!(5).into(), CalcError::InvalidInitialPrice)]
    #[case(dec!(100).into(), dec!(-1).into(), CalcError::InvalidFinalPrice)]
    #[case(dec!(100).into(), Numeric::NotANumber, CalcError::InvalidFinalPrice)]
    #[case(dec!(100).into(), dec!(100.01).into(), CalcError::FinalPriceExceedsInitial)]
    fn test_calculate_discount_percentage_rejects(
        #[case] initial_price: Numeric,
        #[case] final_price: Numeric,
        #[case] expected: CalcError,
    ) {
        assert_eq!(
            DiscountCalculator::calculate_discount_percentage(initial_price, final_price)
                .unwrap_err(),
            expected
        );
    }

    #[test]
    fn test_serialized_field_names() {
        let result = DiscountCalculator::apply_discount(dec!(100), dec!(10)).unwrap();
        assert_eq!(
            serde_json::to_string(&result).unwrap(),
            r#"{"prixInitial":100,"pourcentage":10,"montantRemise":10,"prixFinal":90}"#
        );
    }

    #[test]
    fn test_price_beyond_decimal_range_is_internal() {
        let err = DiscountCalculator::apply_discount(Numeric::parse("1e40"), dec!(10)).unwrap_err();
        assert_eq!(err, CalcError::Overflow("price"));
        let err = DiscountCalculator::calculate_discount_percentage(
            dec!(100),
            Numeric::parse("-1e40"),
        )
        .unwrap_err();
        assert_eq!(err, CalcError::InvalidFinalPrice);
    }
}
