//! Request DTOs for the search API.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Deserialize;

use crate::models::PassengerGroup;

/// Departure given either as a calendar date (midnight) or a date and time.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
pub enum DepartureInput {
    DateTime(NaiveDateTime),
    Date(NaiveDate),
}

impl DepartureInput {
    pub fn to_datetime(self) -> NaiveDateTime {
        match self {
            DepartureInput::DateTime(dt) => dt,
            DepartureInput::Date(date) => date.and_time(NaiveTime::default()),
        }
    }
}

/// Request to search and price flights on a route
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub origin: String,
    pub destination: String,
    pub departure: DepartureInput,
    /// Reference date; defaults to the server's local date.
    #[serde(default)]
    pub today: Option<NaiveDate>,
    #[serde(default)]
    pub passengers: Vec<PassengerGroup>,
}
