//! Age resolution against a fixed reference date.

use chrono::{Datelike, NaiveDate};

/// Computes the whole-year age at `reference_date` for someone born on
/// `birth_date`.
///
/// The year difference is decremented by one when the reference month/day
/// falls before the birth month/day. Comparing month and day directly (not
/// elapsed days) keeps Feb-29 birthdays exact in non-leap years.
///
/// `reference_date` is the schedule's effective date, never the wall clock.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use premium_engine::calculation::age_at;
///
/// let reference = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
/// let birth = NaiveDate::from_ymd_opt(1985, 3, 1).unwrap();
/// assert_eq!(age_at(birth, reference), 40);
/// ```
pub fn age_at(birth_date: NaiveDate, reference_date: NaiveDate) -> i32 {
    let mut age = reference_date.year() - birth_date.year();
    if (reference_date.month(), reference_date.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age
}
