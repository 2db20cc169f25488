//! VAT calculation, forward (HT → TTC) and reverse (TTC → HT).

pub mod service;
pub mod types;


pub use service::VatCalculator;
pub use types::VatBreakdown;
