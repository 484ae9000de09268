//! Passenger categories and booking groups

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fare category of a traveler.
///
/// Used as the key for airline fixed prices and passenger-type coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PassengerType {
    Adult,
    Child,
    Infant,
}

impl PassengerType {
    pub const ALL: [PassengerType; 3] = [Self::Adult, Self::Child, Self::Infant];

    pub fn as_str(&self) -> &'static str {
        match self {
            PassengerType::Adult => "ADULT",
            PassengerType::Child => "CHILD",
            PassengerType::Infant => "INFANT",
        }
    }
}

impl fmt::Display for PassengerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Number of travelers of one type in a booking request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassengerGroup {
    #[serde(rename = "type")]
    pub passenger_type: PassengerType,
    pub count: u32,
}

impl PassengerGroup {
    pub fn new(passenger_type: PassengerType, count: u32) -> Self {
        Self {
            passenger_type,
            count,
        }
    }
}
