//! JSON seed file for the catalog and pricing rules.
//!
//! Registrations are applied in document order through the same validated
//! operations used programmatically, so an invalid entry aborts the load.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

use crate::error::{PricingError, Result};
use crate::models::PassengerType;
use crate::pricing::PriceEngine;

use super::Catalog;

#[derive(Debug, Deserialize)]
pub struct AirportSeed {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct AirlineSeed {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub fixed_prices: BTreeMap<PassengerType, Decimal>,
}

#[derive(Debug, Deserialize)]
pub struct FlightSeed {
    pub origin: String,
    pub destination: String,
    pub flight_code: String,
    pub base_price: Decimal,
}

/// Days band; a missing `max` means open-ended.
#[derive(Debug, Deserialize)]
pub struct DaysRuleSeed {
    pub min: i64,
    #[serde(default)]
    pub max: Option<i64>,
    pub coefficient: Decimal,
}

#[derive(Debug, Default, Deserialize)]
pub struct RulesSeed {
    #[serde(default)]
    pub days_to_departure: Vec<DaysRuleSeed>,
    #[serde(default)]
    pub passenger_types: BTreeMap<PassengerType, Decimal>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CatalogSeed {
    #[serde(default)]
    pub airports: Vec<AirportSeed>,
    #[serde(default)]
    pub airlines: Vec<AirlineSeed>,
    #[serde(default)]
    pub flights: Vec<FlightSeed>,
    #[serde(default)]
    pub rules: RulesSeed,
}

impl CatalogSeed {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build the catalog and pricing engine described by this seed.
    pub fn build(&self) -> std::result::Result<(Catalog, PriceEngine), PricingError> {
        let mut catalog = Catalog::new();
        for airport in &self.airports {
            catalog.add_airport(&airport.code, &airport.name)?;
        }
        for airline in &self.airlines {
            catalog.add_airline(&airline.code, &airline.name)?;
            for (passenger_type, price) in &airline.fixed_prices {
                catalog.add_passenger_type_fixed_price(&airline.code, *passenger_type, *price)?;
            }
        }
        for flight in &self.flights {
            catalog.add_flight(
                &flight.origin,
                &flight.destination,
                &flight.flight_code,
                flight.base_price,
            )?;
        }

        let mut engine = PriceEngine::new();
        for rule in &self.rules.days_to_departure {
            engine.add_days_to_departure_rule(
                rule.min,
                rule.max.unwrap_or(i64::MAX),
                rule.coefficient,
            )?;
        }
        for (passenger_type, coefficient) in &self.rules.passenger_types {
            engine.add_passenger_type_rule(*passenger_type, *coefficient)?;
        }

        Ok((catalog, engine))
    }
}

/// Read and build a seed file.
pub fn load_seed(path: impl AsRef<Path>) -> Result<(Catalog, PriceEngine)> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)?;
    let (catalog, engine) = CatalogSeed::from_json(&json)?.build()?;
    info!(
        "Loaded catalog from {}: {} flights, {} days rules, {} passenger type rules",
        path.display(),
        catalog.flight_count(),
        engine.days_rules().len(),
        engine.passenger_type_rules().len()
    );
    Ok((catalog, engine))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use rust_decimal_macros::dec;

    const SAMPLE: &str = include_str!("../../data/catalog.json");

    #[test]
    fn test_sample_catalog_builds() {
        let (catalog, engine) = CatalogSeed::from_json(SAMPLE).unwrap().build().unwrap();

        assert_eq!(catalog.flights_by_route("AMS", "FRA").len(), 3);
        assert_eq!(catalog.airport("FRA").map(|a| a.name.as_str()), Some("Frankfurt"));
        assert_eq!(
            catalog
                .airline_by_code("U2")
                .and_then(|a| a.fixed_price(PassengerType::Infant)),
            Some(dec!(19.90))
        );
        assert_eq!(engine.days_rules().len(), 4);
        assert_eq!(engine.days_coefficient(10_000), Some(dec!(0.80)));
        assert_eq!(
            engine.passenger_type_coefficient(PassengerType::Child),
            Some(dec!(0.67))
        );
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let (catalog, engine) = CatalogSeed::from_json("{}").unwrap().build().unwrap();
        assert_eq!(catalog.flight_count(), 0);
        assert!(engine.days_rules().is_empty());
    }

    #[test]
    fn test_flight_before_airline_fails() {
        let seed = CatalogSeed::from_json(
            r#"{
                "flights": [
                    {"origin": "CPH", "destination": "FRA", "flight_code": "IB2818", "base_price": "186.00"}
                ]
            }"#,
        )
        .unwrap();

        assert!(matches!(seed.build(), Err(PricingError::NotFound(_))));
    }

    #[test]
    fn test_invalid_rule_fails() {
        let seed = CatalogSeed::from_json(
            r#"{"rules": {"days_to_departure": [{"min": 10, "max": 2, "coefficient": "1.00"}]}}"#,
        )
        .unwrap();

        assert!(matches!(seed.build(), Err(PricingError::InvalidArgument(_))));
    }

    #[test]
    fn test_missing_coefficient_is_parse_error() {
        let result = CatalogSeed::from_json(r#"{"rules": {"passenger_types": {"CHILD": null}}}"#);
        assert!(matches!(result, Err(AppError::Json(_))));
    }

    #[test]
    fn test_load_seed_missing_file() {
        let result = load_seed("does/not/exist.json");
        assert!(matches!(result, Err(AppError::Io(_))));
    }
}
