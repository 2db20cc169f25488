//! Numeric inputs and cent rounding.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Inputs are parsed straight from text into `Decimal`.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{CalcError, CalcResult};

/// Integer digits beyond which a literal cannot fit in a `Decimal`.
const MAX_INTEGER_DIGITS: i64 = 29;

/// Fractional digits past which a literal rounds to zero.
const MAX_FRACTION_DIGITS: i64 = 40;

/// Rounds to two decimal places, midpoints away from zero.
#[must_use]
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// A caller-supplied number.
///
/// Calculators take this rather than `Decimal` so that an unparseable input is
/// rejected by the same check, and in the same order, as an out-of-range one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Numeric {
    /// A number that fits in a `Decimal`.
    Finite(Decimal),
    /// A finite number whose magnitude exceeds `Decimal::MAX`.
    OutOfRange {
        /// Sign of the value.
        negative: bool,
    },
    /// Not a finite number.
    NotANumber,
}

impl Numeric {
    /// Parses the longest numeric prefix of `raw`.
    ///
    /// Leading whitespace is skipped and trailing text ignored, so `"12.5 EUR"`
    /// reads as 12.5. Accepts `[+-]digits[.digits][e[+-]digits]`; either the
    /// integer or the fraction part may be empty, not both. Digits past the
    /// 28th decimal place are rounded away, so `"1e-30"` reads as zero.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let bytes = raw.trim_start().as_bytes();
        let mut pos = 0;

        let negative = match bytes.first() {
            Some(b'-') => {
                pos += 1;
                true
            }
            Some(b'+') => {
                pos += 1;
                false
            }
            _ => false,
        };

        let int_start = pos;
        pos = skip_digits(bytes, pos);
        let int_digits = &bytes[int_start..pos];

        let mut frac_digits: &[u8] = &[];
        if bytes.get(pos) == Some(&b'.') {
            let frac_end = skip_digits(bytes, pos + 1);
            if frac_end > pos + 1 {
                frac_digits = &bytes[pos + 1..frac_end];
                pos = frac_end;
            }
        }

        if int_digits.is_empty() && frac_digits.is_empty() {
            return Self::NotANumber;
        }

        let mut exponent: i64 = 0;
        if matches!(bytes.get(pos), Some(b'e' | b'E')) {
            let mut exp_pos = pos + 1;
            let exp_negative = match bytes.get(exp_pos) {
                Some(b'-') => {
                    exp_pos += 1;
                    true
                }
                Some(b'+') => {
                    exp_pos += 1;
                    false
                }
                _ => false,
            };
            let exp_end = skip_digits(bytes, exp_pos);
            let magnitude = bytes[exp_pos..exp_end].iter().fold(0_i64, |acc, b| {
                acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
            });
            exponent = if exp_negative { -magnitude } else { magnitude };
        }

        let digits: Vec<u8> = int_digits.iter().chain(frac_digits).copied().collect();
        let leading_zeros = digits.iter().take_while(|b| **b == b'0').count();
        let significant = &digits[leading_zeros..];
        if significant.is_empty() {
            return Self::Finite(Decimal::ZERO);
        }

        // Position of the decimal point relative to the first significant digit.
        let point = to_i64(int_digits.len())
            .saturating_sub(to_i64(leading_zeros))
            .saturating_add(exponent);
        if point > MAX_INTEGER_DIGITS {
            return Self::OutOfRange { negative };
        }
        if point < -MAX_FRACTION_DIGITS {
            return Self::Finite(Decimal::ZERO);
        }

        let literal = plain_literal(negative, significant, point);
        match Decimal::from_str(&literal) {
            // "-0" reads as plain zero
            Ok(value) if value.is_zero() => Self::Finite(Decimal::ZERO),
            Ok(value) => Self::Finite(value),
            Err(_) => Self::OutOfRange { negative },
        }
    }

    /// Returns the decimal value, if it fits in a `Decimal`.
    #[must_use]
    pub const fn value(self) -> Option<Decimal> {
        match self {
            Self::Finite(value) => Some(value),
            Self::OutOfRange { .. } | Self::NotANumber => None,
        }
    }

    /// Accepts a value in `[min, max]`, otherwise fails with `invalid`.
    pub(crate) fn within(
        self,
        min: Decimal,
        max: Decimal,
        invalid: CalcError,
    ) -> CalcResult<Decimal> {
        match self {
            Self::Finite(v) if v >= min && v <= max => Ok(v),
            _ => Err(invalid),
        }
    }

    /// Accepts a value of zero or more.
    ///
    /// A positive value too large for `Decimal` is an overflow while computing
    /// `what`, not a caller error.
    pub(crate) fn non_negative(
        self,
        invalid: CalcError,
        what: &'static str,
    ) -> CalcResult<Decimal> {
        self.accept(|v| v >= Decimal::ZERO, invalid, what)
    }

    /// Accepts a strictly positive value, with the same overflow rule as
    /// [`Numeric::non_negative`].
    pub(crate) fn positive(self, invalid: CalcError, what: &'static str) -> CalcResult<Decimal> {
        self.accept(|v| v > Decimal::ZERO, invalid, what)
    }

    fn accept(
        self,
        check: impl FnOnce(Decimal) -> bool,
        invalid: CalcError,
        what: &'static str,
    ) -> CalcResult<Decimal> {
        match self {
            Self::Finite(v) if check(v) => Ok(v),
            Self::OutOfRange { negative: false } => Err(CalcError::Overflow(what)),
            _ => Err(invalid),
        }
    }
}

impl From<Decimal> for Numeric {
    fn from(value: Decimal) -> Self {
        Self::Finite(value)
    }
}

impl From<Option<Decimal>> for Numeric {
    fn from(value: Option<Decimal>) -> Self {
        value.map_or(Self::NotANumber, Self::Finite)
    }
}

/// Serializes a `Decimal` as a JSON number in its shortest form, so `110.0`
/// goes out as `110`.
pub(crate) mod json_number {
    use rust_decimal::Decimal;
    use serde::Serializer;

    pub fn serialize<S: Serializer>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::arbitrary_precision::serialize(&value.normalize(), serializer)
    }
}

fn skip_digits(bytes: &[u8], mut pos: usize) -> usize {
    while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
        pos += 1;
    }
    pos
}

fn to_i64(len: usize) -> i64 {
    i64::try_from(len).unwrap_or(i64::MAX)
}

/// Writes `0.d1d2... * 10^point` without an exponent.
fn plain_literal(negative: bool, significant: &[u8], point: i64) -> String {
    let digits: String = significant.iter().map(|b| char::from(*b)).collect();
    let mut literal = String::with_capacity(digits.len() + 48);
    if negative {
        literal.push('-');
    }
    match usize::try_from(point) {
        Ok(0) | Err(_) => {
            literal.push_str("0.");
            let zeros = usize::try_from(point.unsigned_abs()).unwrap_or(0);
            literal.extend(std::iter::repeat_n('0', zeros));
            literal.push_str(&digits);
        }
        Ok(int_len) if int_len >= digits.len() => {
            literal.push_str(&digits);
            literal.extend(std::iter::repeat_n('0', int_len - digits.len()));
        }
        Ok(int_len) => {
            literal.push_str(&digits[..int_len]);
            literal.push('.');
            literal.push_str(&digits[int_len..]);
        }
    }
    literal
}
