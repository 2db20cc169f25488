//! Calculation error types.
//!
//! Every failure carries a human-readable message. Whether it is the caller's fault
//! or ours is an explicit [`ErrorKind`], never inferred from the message text.

use tarif_shared::AppError;
use thiserror::Error;

/// Result type for calculation operations.
pub type CalcResult<T> = Result<T, CalcError>;

/// Which side of the contract a failure falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input out of contract; reported back to the caller.
    Validation,
    /// Anything else; the message stays server-side.
    Internal,
}

/// Errors raised by the calculators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Source or target currency code is empty.
    #[error("the \"from\" and \"to\" parameters are required")]
    MissingCurrency,

    /// Source currency has no row in the rate table.
    #[error("source currency \"{0}\" is not supported")]
    UnsupportedSourceCurrency(String),

    /// The pair is absent from the rate table.
    #[error("conversion from {from} to {to} is not supported")]
    UnsupportedPair {
        /// Source currency.
        from: String,
        /// Target currency.
        to: String,
    },

    /// Raw rate lookup failed.
    #[error("exchange rate not available for {from} to {to}")]
    RateUnavailable {
        /// Source currency.
        from: String,
        /// Target currency.
        to: String,
    },

    /// Conversion amount is negative or not a number.
    #[error("amount must be a positive number")]
    InvalidAmount,

    /// Tax-exclusive amount is negative or not a number.
    #[error("HT amount must be a positive number")]
    InvalidHt,

    /// Tax-inclusive amount is negative or not a number.
    #[error("TTC amount must be a positive number")]
    InvalidTtc,

    /// VAT rate outside [0, 100].
    #[error("VAT rate must be a number between 0 and 100")]
    InvalidVatRate,

    /// Price is negative or not a number.
    #[error("price must be a positive number")]
    InvalidPrice,

    /// Discount percentage outside [0, 100].
    #[error("discount percentage must be a number between 0 and 100")]
    InvalidDiscountPercentage,

    /// Initial price is zero, negative or not a number.
    #[error("initial price must be a positive non-zero number")]
    InvalidInitialPrice,

    /// Final price is negative or not a number.
    #[error("final price must be a positive number")]
    InvalidFinalPrice,

    /// Final price above initial price.
    #[error("final price cannot exceed initial price, it must be at most the initial price")]
    FinalPriceExceedsInitial,

    /// Intermediate result out of decimal range.
    #[error("arithmetic overflow while computing {0}")]
    Overflow(&'static str),
}

impl CalcError {
    /// Classifies this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Overflow(_) => ErrorKind::Internal,
            _ => ErrorKind::Validation,
        }
    }
}

impl From<CalcError> for AppError {
    fn from(err: CalcError) -> Self {
        match err.kind() {
            ErrorKind::Validation => Self::Validation(err.to_string()),
            ErrorKind::Internal => Self::Internal(err.to_string()),
        }
    }
}
