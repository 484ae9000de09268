//! Core pricing calculation functions.
//!
//! Pure functions for fare math - no catalog access.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

/// Number of decimal places of a priced total.
pub const MONEY_SCALE: u32 = 2;

/// Round to specified decimal places using banker's rounding (ROUND_HALF_EVEN).
///
/// Banker's rounding rounds to the nearest even number when the value is exactly
/// halfway between two possibilities. This reduces cumulative rounding bias.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use flight_fares::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(2));   // rounds to even
/// assert_eq!(round_money(dec!(3.5), 0), dec!(4));   // rounds to even
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// Round a final total to cents and pin its scale to exactly two places,
/// so `15` is reported as `15.00`.
pub fn to_money(amount: Decimal) -> Decimal {
    let mut rounded = round_money(amount, MONEY_SCALE);
    rounded.rescale(MONEY_SCALE);
    rounded
}

/// Unit price of a non-fixed passenger: base price times the days coefficient
/// and the passenger-type coefficient, whichever apply. No rounding.
pub fn apply_coefficients(
    base_price: Decimal,
    days_coefficient: Option<Decimal>,
    type_coefficient: Option<Decimal>,
) -> Decimal {
    let with_days = days_coefficient.map_or(base_price, |c| base_price * c);
    type_coefficient.map_or(with_days, |c| with_days * c)
}

/// Price of `count` passengers at `unit_price` each. No rounding.
pub fn group_subtotal(unit_price: Decimal, count: u32) -> Decimal {
    unit_price * Decimal::from(count)
}
