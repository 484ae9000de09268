//! Response DTOs for the search API.

use rust_decimal::Decimal;
use serde::Serialize;

/// Money value for JSON responses
#[derive(Debug, Clone, Serialize)]
pub struct MoneyResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
}

/// One priced flight
#[derive(Debug, Serialize)]
pub struct FlightPriceResponse {
    pub flight_code: String,
    pub price: MoneyResponse,
}

/// Response for a route search
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub origin: String,
    pub destination: String,
    pub days_to_departure: i64,
    pub results: Vec<FlightPriceResponse>,
}

/// Service health
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub flights: usize,
}

/// Generic pricing error response
#[derive(Debug, Serialize)]
pub struct PricingErrorResponse {
    pub error_type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}
