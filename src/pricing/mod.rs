//! Fare pricing for flight searches.
//!
//! `engine` holds the configurable pricing rules, `calculators` the pure
//! money math. `requests` and `responses` are the JSON DTOs of the search API.

pub mod calculators;
pub mod engine;
pub mod requests;
pub mod responses;
pub mod routes;

// Re-export commonly used items
pub use calculators::{round_money, to_money, MONEY_SCALE};
pub use engine::{DaysRule, PriceEngine};
pub use crate::error::PricingError;
pub use routes::router;
