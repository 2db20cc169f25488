//! Percentage discounts: applying one, or deriving it from two prices.

pub mod service;
pub mod types;


pub use service::DiscountCalculator;
pub use types::DiscountBreakdown;
