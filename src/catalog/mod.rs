//! In-memory flight catalog.
//!
//! Airlines live in a table addressed by `AirlineId`; flights reference their
//! operating airline by id and are grouped by exact route in registration order.

pub mod seed;

use rust_decimal::Decimal;
use std::collections::HashMap;
use tracing::debug;

use crate::error::PricingError;
use crate::models::{Airline, AirlineId, Airport, Flight, PassengerType, Route};

pub use seed::{load_seed, CatalogSeed};

/// Length of the IATA airline designator that prefixes a flight code.
const AIRLINE_DESIGNATOR_LEN: usize = 2;

#[derive(Debug, Default)]
pub struct Catalog {
    airports: HashMap<String, Airport>,
    airlines: Vec<Airline>,
    airline_index: HashMap<String, AirlineId>,
    flights: HashMap<Route, Vec<Flight>>,
}

fn require(value: &str, field: &str) -> Result<(), PricingError> {
    if value.trim().is_empty() {
        return Err(PricingError::invalid(format!("{} is mandatory", field)));
    }
    Ok(())
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_airport(&mut self, code: &str, name: &str) -> Result<(), PricingError> {
        require(code, "Airport code")?;
        require(name, "Airport name")?;

        self.airports.insert(
            code.to_string(),
            Airport {
                code: code.to_string(),
                name: name.to_string(),
            },
        );
        Ok(())
    }

    /// Register an airline. An existing code keeps its id, fixed prices and
    /// flights; only the name is replaced.
    pub fn add_airline(&mut self, code: &str, name: &str) -> Result<AirlineId, PricingError> {
        require(code, "Airline code")?;
        require(name, "Airline name")?;

        if let Some(&id) = self.airline_index.get(code) {
            self.airlines[id.0].name = name.to_string();
            debug!("Airline {} renamed to {}", code, name);
            return Ok(id);
        }

        let id = AirlineId(self.airlines.len());
        self.airlines.push(Airline::new(code, name));
        self.airline_index.insert(code.to_string(), id);
        Ok(id)
    }

    pub fn add_passenger_type_fixed_price(
        &mut self,
        airline_code: &str,
        passenger_type: PassengerType,
        price: Decimal,
    ) -> Result<(), PricingError> {
        require(airline_code, "Airline code")?;
        if price < Decimal::ZERO {
            return Err(PricingError::invalid("Negative fixed prices not allowed"));
        }

        let id = self.airline_id(airline_code)?;
        self.airlines[id.0].set_fixed_price(passenger_type, price);
        debug!(
            "Fixed price for {} on {} set to {}",
            passenger_type, airline_code, price
        );
        Ok(())
    }

    /// Register a flight. The operating airline is taken from the first two
    /// characters of the flight code and must already be registered.
    pub fn add_flight(
        &mut self,
        origin: &str,
        destination: &str,
        flight_code: &str,
        base_price: Decimal,
    ) -> Result<(), PricingError> {
        require(origin, "Origin")?;
        require(destination, "Destination")?;
        require(flight_code, "Flight code")?;
        if base_price <= Decimal::ZERO {
            return Err(PricingError::invalid(format!(
                "Base price of {} must be positive",
                flight_code
            )));
        }

        let designator = flight_code
            .get(..AIRLINE_DESIGNATOR_LEN)
            .filter(|_| flight_code.len() > AIRLINE_DESIGNATOR_LEN)
            .ok_or_else(|| {
                PricingError::invalid(format!(
                    "Flight code {} has no airline designator and number",
                    flight_code
                ))
            })?;
        let airline = self.airline_id(designator)?;

        let flight = Flight::new(
            origin.to_string(),
            destination.to_string(),
            airline,
            flight_code.to_string(),
            base_price,
        );
        self.flights
            .entry(Route::new(origin, destination))
            .or_default()
            .push(flight);
        Ok(())
    }

    /// Flights on the exact `origin -> destination` route, in registration order.
    pub fn flights_by_route(&self, origin: &str, destination: &str) -> &[Flight] {
        self.flights
            .get(&Route::new(origin, destination))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn airline(&self, id: AirlineId) -> &Airline {
        &self.airlines[id.0]
    }

    pub fn airline_by_code(&self, code: &str) -> Option<&Airline> {
        self.airline_index.get(code).map(|id| self.airline(*id))
    }

    pub fn airport(&self, code: &str) -> Option<&Airport> {
        self.airports.get(code)
    }

    pub fn flight_count(&self) -> usize {
        self.flights.values().map(Vec::len).sum()
    }

    fn airline_id(&self, code: &str) -> Result<AirlineId, PricingError> {
        self.airline_index
            .get(code)
            .copied()
            .ok_or_else(|| PricingError::not_found(format!("Airline {} not found", code)))
    }
}
