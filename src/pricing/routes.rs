//! HTTP route handlers for flight search and pricing.

use axum::{extract::State, routing::get, routing::post, Json, Router};
use chrono::Local;

use crate::error::{AppError, Result};
use crate::AppState;

use super::requests::SearchRequest;
use super::responses::{FlightPriceResponse, HealthResponse, MoneyResponse, SearchResponse};
use crate::search::days_to_departure;

/// Build the pricing API router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/search", post(search))
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        flights: state.search.catalog().flight_count(),
    })
}

/// Price all flights on a route
async fn search(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResponse>> {
    let origin = request.origin.trim();
    let destination = request.destination.trim();
    if origin.is_empty() || destination.is_empty() {
        return Err(AppError::BadRequest(
            "origin and destination are mandatory".to_string(),
        ));
    }

    let today = request.today.unwrap_or_else(|| Local::now().date_naive());
    let departure = request.departure.to_datetime();

    let results = state
        .search
        .search(origin, destination, today, departure, &request.passengers)
        .into_iter()
        .map(|result| FlightPriceResponse {
            flight_code: result.flight_code,
            price: MoneyResponse {
                amount: result.price,
                currency: state.currency.clone(),
            },
        })
        .collect();

    Ok(Json(SearchResponse {
        origin: origin.to_string(),
        destination: destination.to_string(),
        days_to_departure: days_to_departure(today, departure),
        results,
    }))
}
