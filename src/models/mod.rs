//! Domain models shared by the catalog, pricing engine and search.

pub mod flight;
pub mod passenger;

pub use flight::{Airline, AirlineId, Airport, FixedPrices, Flight, Route};
pub use passenger::{PassengerGroup, PassengerType};
