//! Cent rounding for paycheck components.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places in a whole-cent amount.
pub const CENT_DECIMAL_PLACES: u32 = 2;

/// Floors an amount to whole cents, rounding toward negative infinity.
///
/// `1.509999` becomes `1.50` and `-1.501` becomes `-1.51`. The result always
/// carries two decimal places. Fractional cents are dropped rather than
/// rounded; each paycheck component is floored on its own before any totals
/// are taken.
///
/// # Examples
///
/// ```
/// use benefits_engine::calculation::floor_to_cent;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let floored = floor_to_cent(Decimal::from_str("461.538461").unwrap());
/// assert_eq!(floored.to_string(), "461.53");
/// assert_eq!(floor_to_cent(Decimal::from(92)).to_string(), "92.00");
/// ```
pub fn floor_to_cent(amount: Decimal) -> Decimal {
    let mut floored =
        amount.round_dp_with_strategy(CENT_DECIMAL_PLACES, RoundingStrategy::ToNegativeInfinity);
    floored.rescale(CENT_DECIMAL_PLACES);
    floored
}
