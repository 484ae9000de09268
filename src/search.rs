//! Flight search: route lookup plus per-flight pricing.

use chrono::{Local, NaiveDate, NaiveDateTime, Timelike};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::catalog::Catalog;
use crate::models::PassengerGroup;
use crate::pricing::PriceEngine;

/// A priced flight
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub flight_code: String,
    pub price: Decimal,
}

/// Whole days from the start of `today` to `departure`.
///
/// `today` is taken at midnight; `departure` keeps its time of day and the
/// fractional day is truncated toward zero. Negative when departure is before
/// today.
pub fn days_to_departure(today: NaiveDate, departure: NaiveDateTime) -> i64 {
    let days = departure.date().signed_duration_since(today).num_days();
    let after_midnight = departure.num_seconds_from_midnight() > 0 || departure.nanosecond() > 0;
    if days < 0 && after_midnight {
        days + 1
    } else {
        days
    }
}

/// Read-only search facade over a configured catalog and pricing engine.
///
/// Both are owned and never mutated after construction, so a shared
/// reference can serve concurrent searches without locking.
#[derive(Debug)]
pub struct SearchService {
    catalog: Catalog,
    engine: PriceEngine,
}

impl SearchService {
    pub fn new(catalog: Catalog, engine: PriceEngine) -> Self {
        Self { catalog, engine }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn engine(&self) -> &PriceEngine {
        &self.engine
    }

    /// Price every flight on `origin -> destination` for the given passengers.
    ///
    /// Results follow catalog registration order. An unknown route yields an
    /// empty list.
    pub fn search(
        &self,
        origin: &str,
        destination: &str,
        today: NaiveDate,
        departure: NaiveDateTime,
        passengers: &[PassengerGroup],
    ) -> Vec<SearchResult> {
        let days = days_to_departure(today, departure);
        let flights = self.catalog.flights_by_route(origin, destination);
        debug!(
            "Search {} -> {}: {} flights, {} days to departure",
            origin,
            destination,
            flights.len(),
            days
        );

        flights
            .iter()
            .map(|flight| {
                let airline = self.catalog.airline(flight.airline());
                let price = self.engine.calculate_price(
                    flight.base_price(),
                    airline.fixed_prices(),
                    days,
                    passengers,
                );
                SearchResult {
                    flight_code: flight.flight_code().to_string(),
                    price,
                }
            })
            .collect()
    }

    /// Same as [`SearchService::search`] with `today` set to the local date.
    pub fn search_from_today(
        &self,
        origin: &str,
        destination: &str,
        departure: NaiveDateTime,
        passengers: &[PassengerGroup],
    ) -> Vec<SearchResult> {
        self.search(origin, destination, Local::now().date_naive(), departure, passengers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogSeed;
    use crate::models::PassengerType::{Adult, Child, Infant};
    use rust_decimal_macros::dec;
    use std::collections::HashSet;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(h, min, 0).unwrap()
    }

    fn sample_service() -> SearchService {
        let seed = CatalogSeed::from_json(include_str!("../data/catalog.json")).unwrap();
        let (catalog, engine) = seed.build().unwrap();
        SearchService::new(catalog, engine)
    }

    fn as_set(results: Vec<SearchResult>) -> HashSet<(String, String)> {
        results
            .into_iter()
            .map(|r| (r.flight_code, r.price.to_string()))
            .collect()
    }

    fn expected(items: &[(&str, &str)]) -> HashSet<(String, String)> {
        items
            .iter()
            .map(|(code, price)| (code.to_string(), price.to_string()))
            .collect()
    }

    // ==================== days_to_departure tests ====================

    #[test]
    fn test_days_to_departure_whole_days() {
        assert_eq!(days_to_departure(date(2017, 1, 1), at(2017, 2, 1, 0, 0)), 31);
        assert_eq!(days_to_departure(date(2017, 1, 1), at(2017, 1, 1, 0, 0)), 0);
        assert_eq!(days_to_departure(date(2016, 12, 31), at(2017, 1, 1, 0, 0)), 1);
    }

    #[test]
    fn test_days_to_departure_ignores_time_of_day_forward() {
        assert_eq!(days_to_departure(date(2017, 1, 1), at(2017, 1, 1, 23, 59)), 0);
        assert_eq!(days_to_departure(date(2017, 1, 1), at(2017, 1, 2, 12, 0)), 1);
    }

    #[test]
    fn test_days_to_departure_in_the_past() {
        assert_eq!(days_to_departure(date(2017, 1, 1), at(2016, 12, 30, 0, 0)), -2);
        assert_eq!(days_to_departure(date(2017, 1, 1), at(2016, 12, 30, 12, 0)), -1);
        assert_eq!(days_to_departure(date(2017, 1, 1), at(2016, 12, 31, 12, 0)), 0);
    }

    #[test]
    fn test_days_to_departure_across_leap_day() {
        assert_eq!(days_to_departure(date(2016, 2, 28), at(2016, 3, 1, 8, 0)), 2);
        assert_eq!(days_to_departure(date(2017, 2, 28), at(2017, 3, 1, 8, 0)), 1);
    }

    // ==================== search tests ====================

    #[test]
    fn test_one_adult_31_days_ams_fra() {
        let service = sample_service();
        let passengers = [PassengerGroup::new(Adult, 1)];

        let results =
            service.search("AMS", "FRA", date(2017, 1, 1), at(2017, 2, 1, 0, 0), &passengers);

        assert_eq!(results.len(), 3);
        assert_eq!(
            as_set(results),
            expected(&[("TK2372", "157.60"), ("TK2659", "198.40"), ("LH5909", "90.40")])
        );
    }

    #[test]
    fn test_family_15_days_lhr_ist() {
        let service = sample_service();
        let passengers = [
            PassengerGroup::new(Adult, 2),
            PassengerGroup::new(Child, 1),
            PassengerGroup::new(Infant, 1),
        ];

        let results =
            service.search("LHR", "IST", date(2017, 1, 1), at(2017, 1, 16, 0, 0), &passengers);

        assert_eq!(
            as_set(results),
            expected(&[("TK8891", "806.00"), ("LH1085", "481.19")])
        );
    }

    #[test]
    fn test_adult_and_children_2_days_bcn_mad() {
        let service = sample_service();
        let passengers = [PassengerGroup::new(Adult, 1), PassengerGroup::new(Child, 2)];

        let results =
            service.search("BCN", "MAD", date(2017, 1, 1), at(2017, 1, 3, 0, 0), &passengers);

        assert_eq!(
            as_set(results),
            expected(&[("IB2171", "909.09"), ("LH5496", "1028.43")])
        );
    }

    #[test]
    fn test_route_without_flights_is_empty() {
        let service = sample_service();
        let passengers = [PassengerGroup::new(Adult, 1)];

        let results =
            service.search("CDG", "FRA", date(2017, 1, 1), at(2017, 1, 15, 0, 0), &passengers);
        assert!(results.is_empty());
    }

    #[test]
    fn test_empty_passengers_prices_every_flight_at_zero() {
        let service = sample_service();

        let results = service.search("AMS", "FRA", date(2017, 1, 1), at(2017, 2, 1, 0, 0), &[]);
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|r| r.price == Decimal::ZERO));
    }

    #[test]
    fn test_departure_in_the_past_uses_base_price() {
        let service = sample_service();
        let passengers = [PassengerGroup::new(Adult, 1)];

        let results =
            service.search("AMS", "FRA", date(2017, 1, 10), at(2017, 1, 1, 0, 0), &passengers);
        assert!(as_set(results).contains(&("TK2372".to_string(), "197.00".to_string())));
    }

    #[test]
    fn test_search_from_today_prices_with_open_ended_band() {
        let service = sample_service();
        let passengers = [PassengerGroup::new(Adult, 1)];
        let departure = (Local::now().date_naive() + chrono::Duration::days(400))
            .and_hms_opt(9, 0, 0)
            .unwrap();

        let results = service.search_from_today("AMS", "FRA", departure, &passengers);
        assert!(results
            .iter()
            .any(|r| r.flight_code == "LH5909" && r.price == dec!(90.40)));
    }
}
