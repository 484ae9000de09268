//! Catalog entities: airlines, airports and flights

use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;

use super::passenger::PassengerType;

/// Fixed per-passenger prices of an airline, keyed by passenger type.
pub type FixedPrices = HashMap<PassengerType, Decimal>;

/// Index of an airline in the catalog's airline table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AirlineId(pub(crate) usize);

/// Operating carrier
#[derive(Debug, Clone, Serialize)]
pub struct Airline {
    pub code: String,
    pub name: String,
    fixed_prices: FixedPrices,
}

impl Airline {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            fixed_prices: HashMap::new(),
        }
    }

    /// Fixed price for a passenger type, bypassing route pricing.
    ///
    /// A later call for the same type replaces the earlier price.
    pub fn set_fixed_price(&mut self, passenger_type: PassengerType, price: Decimal) {
        self.fixed_prices.insert(passenger_type, price);
    }

    pub fn fixed_prices(&self) -> &FixedPrices {
        &self.fixed_prices
    }

    pub fn fixed_price(&self, passenger_type: PassengerType) -> Option<Decimal> {
        self.fixed_prices.get(&passenger_type).copied()
    }
}

/// Airport reference data
#[derive(Debug, Clone, Serialize)]
pub struct Airport {
    pub code: String,
    pub name: String,
}

/// Ordered origin/destination pair used as the exact flight lookup key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Route {
    pub origin: String,
    pub destination: String,
}

impl Route {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
        }
    }
}

/// A scheduled flight on a single route.
#[derive(Debug, Clone)]
pub struct Flight {
    origin: String,
    destination: String,
    airline: AirlineId,
    flight_code: String,
    base_price: Decimal,
}

impl Flight {
    pub(crate) fn new(
        origin: String,
        destination: String,
        airline: AirlineId,
        flight_code: String,
        base_price: Decimal,
    ) -> Self {
        Self {
            origin,
            destination,
            airline,
            flight_code,
            base_price,
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn airline(&self) -> AirlineId {
        self.airline
    }

    pub fn flight_code(&self) -> &str {
        &self.flight_code
    }

    pub fn base_price(&self) -> Decimal {
        self.base_price
    }
}
