//! Age calculation.

use chrono::{Datelike, NaiveDate};

/// Returns the age in completed years on `as_of` for someone born on `date_of_birth`.
///
/// The birthday counts as reached once `as_of` is on or after the same month
/// and day, so a 29 February birthday is reached on 1 March in common years.
/// A date of birth after `as_of` gives zero or a negative age.
///
/// # Examples
///
/// ```
/// use benefits_engine::calculation::calculate_age;
/// use chrono::NaiveDate;
///
/// let dob = NaiveDate::from_ymd_opt(1974, 1, 2).unwrap();
/// assert_eq!(calculate_age(dob, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()), 49);
/// assert_eq!(calculate_age(dob, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()), 50);
/// ```
pub fn calculate_age(date_of_birth: NaiveDate, as_of: NaiveDate) -> i32 {
    let age = as_of.year() - date_of_birth.year();
    if (date_of_birth.month(), date_of_birth.day()) > (as_of.month(), as_of.day()) {
        age - 1
    } else {
        age
    }
}
