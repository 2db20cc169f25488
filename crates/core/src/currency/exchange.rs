//! Fixed exchange rate table.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Target currency and its rate (1 source = rate target).
pub type RateEntry = (&'static str, Decimal);

/// Source currency and the targets it converts to.
pub type RateRow = (&'static str, &'static [RateEntry]);

/// Rates served by the service.
///
/// NOT transitively closed: EUR→GBP and GBP→USD are absent even though a
/// composed rate exists. Unsupported means absent.
pub const FIXED_RATES: &[RateRow] = &[
    ("EUR", &[("USD", dec!(1.1)), ("EUR", dec!(1))]),
    ("USD", &[("GBP", dec!(0.8)), ("USD", dec!(1))]),
    ("GBP", &[("GBP", dec!(1))]),
];

/// Immutable source → target → rate mapping, in definition order.
#[derive(Debug, Clone, Copy)]
pub struct ExchangeRateTable {
    rows: &'static [RateRow],
}

impl ExchangeRateTable {
    /// Creates a table over the given rows. Codes are expected upper-case.
    #[must_use]
    pub const fn new(rows: &'static [RateRow]) -> Self {
        Self { rows }
    }

    /// The fixed production table.
    #[must_use]
    pub const fn fixed() -> Self {
        Self::new(FIXED_RATES)
    }

    /// Returns true if `from` has a row in the table.
    #[must_use]
    pub fn has_source(&self, from: &str) -> bool {
        self.targets(from).is_some()
    }

    /// Returns the rate for the pair, if present.
    #[must_use]
    pub fn rate(&self, from: &str, to: &str) -> Option<Decimal> {
        self.targets(from)?
            .iter()
            .find(|(code, _)| *code == to)
            .map(|(_, rate)| *rate)
    }

    /// Source currencies in definition order.
    pub fn sources(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rows.iter().map(|(code, _)| *code)
    }

    fn targets(&self, from: &str) -> Option<&'static [RateEntry]> {
        self.rows
            .iter()
            .find(|(code, _)| *code == from)
            .map(|(_, targets)| *targets)
    }
}

impl Default for ExchangeRateTable {
    fn default() -> Self {
        Self::fixed()
    }
}
