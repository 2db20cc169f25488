//! Currency conversion over a fixed exchange rate table.

pub mod conversion;
pub mod exchange;
pub mod service;

#[cfg(test)]
mod props;

pub use conversion::ConversionResult;
pub use exchange::{ExchangeRateTable, FIXED_RATES};
pub use service::CurrencyConverter;
