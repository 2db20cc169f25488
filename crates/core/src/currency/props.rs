//! Property-based tests for currency conversion.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::exchange::FIXED_RATES;
use super::service::CurrencyConverter;
use crate::numeric::round2;

/// Strategy to generate non-negative amounts (0.000 to 1,000,000.000).
fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000_000i64).prop_map(|milli| Decimal::new(milli, 3))
}

/// Strategy to pick one supported (from, to) pair.
fn supported_pair() -> impl Strategy<Value = (&'static str, &'static str)> {
    let pairs: Vec<(&'static str, &'static str)> = FIXED_RATES
        .iter()
        .flat_map(|(from, targets)| targets.iter().map(move |(to, _)| (*from, *to)))
        .collect();
    prop::sample::select(pairs)
}

/// Strategy to pick a pair absent from the table.
fn unsupported_pair() -> impl Strategy<Value = (&'static str, &'static str)> {
    prop::sample::select(vec![
        ("EUR", "GBP"),
        ("GBP", "USD"),
        ("GBP", "EUR"),
        ("USD", "EUR"),
        ("JPY", "USD"),
        ("USD", "JPY"),
    ])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Converted amount is the rounded product of amount and the rate `rate_of` reports.
    #[test]
    fn prop_convert_matches_rate_of((from, to) in supported_pair(), amount in amount()) {
        let converter = CurrencyConverter::default();
        let rate = converter.rate_of(from, to).unwrap();
        let result = converter.convert(from, to, amount).unwrap();

        prop_assert_eq!(result.rate, rate);
        prop_assert_eq!(result.converted_amount, round2(amount * rate));
        prop_assert_eq!(result.original_amount, amount);
    }

    /// Converted amounts never carry more than two decimal places.
    #[test]
    fn prop_convert_rounds_to_cents((from, to) in supported_pair(), amount in amount()) {
        let result = CurrencyConverter::default().convert(from, to, amount).unwrap();
        prop_assert!(result.converted_amount.scale() <= 2);
    }

    /// Pairs outside the table fail whatever the amount.
    #[test]
    fn prop_unsupported_pair_fails((from, to) in unsupported_pair(), amount in amount()) {
        let converter = CurrencyConverter::default();
        prop_assert!(converter.convert(from, to, amount).is_err());
        prop_assert!(converter.rate_of(from, to).is_err());
    }
}
