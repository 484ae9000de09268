//! Rule-based fare pricing.
//!
//! The engine owns two rule sets, both registered at configuration time:
//! days-to-departure bands, evaluated in registration order with the first
//! matching band winning, and passenger-type coefficients, one per type with
//! the last registration winning. Airline fixed prices bypass both.

use rust_decimal::Decimal;
use std::collections::HashMap;
use tracing::debug;

use crate::error::PricingError;
use crate::models::{FixedPrices, PassengerGroup, PassengerType};

use super::calculators::{apply_coefficients, group_subtotal, to_money};

/// Multiply by `coefficient` when days-to-departure is within `[min_days, max_days]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaysRule {
    pub min_days: i64,
    pub max_days: i64,
    pub coefficient: Decimal,
}

impl DaysRule {
    pub fn matches(&self, days_to_departure: i64) -> bool {
        days_to_departure >= self.min_days && days_to_departure <= self.max_days
    }

    fn overlaps(&self, other: &DaysRule) -> bool {
        self.min_days <= other.max_days && other.min_days <= self.max_days
    }
}

#[derive(Debug, Clone, Default)]
pub struct PriceEngine {
    days_rules: Vec<DaysRule>,
    type_rules: HashMap<PassengerType, Decimal>,
}

impl PriceEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a days-to-departure band. Use `i64::MAX` as `max` for an open-ended band.
    pub fn add_days_to_departure_rule(
        &mut self,
        min: i64,
        max: i64,
        coefficient: Decimal,
    ) -> Result<(), PricingError> {
        if min > max {
            return Err(PricingError::invalid(format!(
                "min must be <= max (got {} > {})",
                min, max
            )));
        }
        if min < 0 {
            return Err(PricingError::invalid("Negative days to departure not allowed"));
        }
        if coefficient < Decimal::ZERO {
            return Err(PricingError::invalid("Negative coefficients not allowed"));
        }

        let rule = DaysRule {
            min_days: min,
            max_days: max,
            coefficient,
        };
        if let Some(earlier) = self.days_rules.iter().find(|r| r.overlaps(&rule)) {
            debug!(
                "Days rule [{}, {}] overlaps earlier rule [{}, {}]; earlier rule takes precedence",
                min, max, earlier.min_days, earlier.max_days
            );
        }
        debug!("Registered days rule [{}, {}] -> {}", min, max, coefficient);
        self.days_rules.push(rule);
        Ok(())
    }

    /// Register the coefficient for a passenger type, replacing any earlier one.
    pub fn add_passenger_type_rule(
        &mut self,
        passenger_type: PassengerType,
        coefficient: Decimal,
    ) -> Result<(), PricingError> {
        if coefficient < Decimal::ZERO {
            return Err(PricingError::invalid("Negative coefficients not allowed"));
        }

        if let Some(previous) = self.type_rules.insert(passenger_type, coefficient) {
            debug!(
                "Passenger type rule for {} replaced ({} -> {})",
                passenger_type, previous, coefficient
            );
        } else {
            debug!("Registered passenger type rule {} -> {}", passenger_type, coefficient);
        }
        Ok(())
    }

    pub fn days_rules(&self) -> &[DaysRule] {
        &self.days_rules
    }

    pub fn passenger_type_rules(&self) -> &HashMap<PassengerType, Decimal> {
        &self.type_rules
    }

    /// Coefficient of the first registered band containing `days_to_departure`.
    pub fn days_coefficient(&self, days_to_departure: i64) -> Option<Decimal> {
        self.days_rules
            .iter()
            .find(|rule| rule.matches(days_to_departure))
            .map(|rule| rule.coefficient)
    }

    pub fn passenger_type_coefficient(&self, passenger_type: PassengerType) -> Option<Decimal> {
        self.type_rules.get(&passenger_type).copied()
    }

    /// Total price of all passenger groups for one flight.
    ///
    /// A fixed price for the group's type replaces the whole rule chain.
    /// Otherwise the base price is multiplied by the matching days coefficient
    /// and the type coefficient. The accumulated total is rounded once, to
    /// cents, half-to-even.
    pub fn calculate_price(
        &self,
        base_price: Decimal,
        fixed_prices: &FixedPrices,
        days_to_departure: i64,
        passengers: &[PassengerGroup],
    ) -> Decimal {
        let days_coefficient = self.days_coefficient(days_to_departure);

        let total: Decimal = passengers
            .iter()
            .map(|group| {
                let unit_price = match fixed_prices.get(&group.passenger_type) {
                    Some(fixed) => *fixed,
                    None => apply_coefficients(
                        base_price,
                        days_coefficient,
                        self.passenger_type_coefficient(group.passenger_type),
                    ),
                };
                group_subtotal(unit_price, group.count)
            })
            .sum();

        to_money(total)
    }
}
