//! Flight search with rule-based fare pricing.
//!
//! A [`catalog::Catalog`] of airlines and flights is combined with a
//! [`pricing::PriceEngine`] by [`search::SearchService`], which the axum
//! router in [`pricing::routes`] exposes over HTTP.

pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod pricing;
pub mod search;

use std::sync::Arc;

pub use catalog::Catalog;
pub use error::{AppError, PricingError};
pub use models::{PassengerGroup, PassengerType};
pub use pricing::PriceEngine;
pub use search::{SearchResult, SearchService};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub search: Arc<SearchService>,
    pub currency: String,
}

impl AppState {
    pub fn new(search: SearchService, currency: impl Into<String>) -> Self {
        Self {
            search: Arc::new(search),
            currency: currency.into(),
        }
    }
}
