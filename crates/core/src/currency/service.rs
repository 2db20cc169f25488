//! Currency converter over a fixed rate table.

use rust_decimal::Decimal;

use super::conversion::ConversionResult;
use super::exchange::ExchangeRateTable;
use crate::error::{CalcError, CalcResult};
use crate::numeric::{Numeric, round2};

/// Converts amounts between the currencies of an [`ExchangeRateTable`].
///
/// Currency codes must already be upper-case; the table is matched exactly.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrencyConverter {
    table: ExchangeRateTable,
}

impl CurrencyConverter {
    /// Creates a converter over `table`.
    #[must_use]
    pub const fn new(table: ExchangeRateTable) -> Self {
        Self { table }
    }

    /// Converts `amount` from `from` to `to`.
    ///
    /// Checks run in a fixed order and the first failure wins: both codes
    /// present, source supported, pair supported, amount a number `>= 0`.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use tarif_core::currency::CurrencyConverter;
    ///
    /// let result = CurrencyConverter::default().convert("EUR", "USD", dec!(100)).unwrap();
    /// assert_eq!(result.converted_amount, dec!(110));
    /// ```
    pub fn convert(
        &self,
        from: &str,
        to: &str,
        amount: impl Into<Numeric>,
    ) -> CalcResult<ConversionResult> {
        let rate = self.validate_pair(from, to)?;
        let amount = amount
            .into()
            .non_negative(CalcError::InvalidAmount, "amount")?;

        let converted = amount
            .checked_mul(rate)
            .ok_or(CalcError::Overflow("converted amount"))?;

        Ok(ConversionResult {
            from: from.to_string(),
            to: to.to_string(),
            original_amount: amount,
            converted_amount: round2(converted),
            rate,
        })
    }

    /// Returns the raw rate for a pair.
    pub fn rate_of(&self, from: &str, to: &str) -> CalcResult<Decimal> {
        self.table
            .rate(from, to)
            .ok_or_else(|| CalcError::RateUnavailable {
                from: from.to_string(),
                to: to.to_string(),
            })
    }

    /// Source currencies of the table, in definition order.
    #[must_use]
    pub fn supported_currencies(&self) -> Vec<&'static str> {
        self.table.sources().collect()
    }

    fn validate_pair(&self, from: &str, to: &str) -> CalcResult<Decimal> {
        if from.is_empty() || to.is_empty() {
            return Err(CalcError::MissingCurrency);
        }
        if !self.table.has_source(from) {
            return Err(CalcError::UnsupportedSourceCurrency(from.to_string()));
        }
        self.table
            .rate(from, to)
            .ok_or_else(|| CalcError::UnsupportedPair {
                from: from.to_string(),
                to: to.to_string(),
            })
    }
}
