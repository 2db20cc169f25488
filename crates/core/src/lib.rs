//! Core calculations for Tarif.
//!
//! This crate contains pure calculation logic with ZERO web dependencies.
//! Every operation validates its inputs, computes in `Decimal`, and rounds
//! derived amounts to cents.
//!
//! # Modules
//!
//! - `currency` - Conversion over a fixed exchange rate table
//! - `vat` - Tax-inclusive and tax-exclusive amounts
//! - `discount` - Applying and deriving percentage discounts
//! - `numeric` - Lenient number parsing and cent rounding
//! - `error` - Tagged calculation errors

pub mod currency;
pub mod discount;
pub mod error;
pub mod numeric;
pub mod vat;

pub use error::{CalcError, CalcResult, ErrorKind};
pub use numeric::{Numeric, round2};
