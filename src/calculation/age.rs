//! Whole-year age calculation.

use chrono::{Datelike, NaiveDate};

/// Returns the number of whole years elapsed from `date_of_birth` to `as_of`.
///
/// The age increases on the anniversary of the birth date, not after a
/// fixed number of days. Someone born on 29 February turns a year older on
/// 1 March in non-leap years.
///
/// # Examples
///
/// ```
/// use paycheck_engine::calculation::age_in_years;
/// use chrono::NaiveDate;
///
/// let dob = NaiveDate::from_ymd_opt(1976, 1, 15).unwrap();
/// let day_before = NaiveDate::from_ymd_opt(2026, 1, 14).unwrap();
/// let birthday = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
///
/// assert_eq!(age_in_years(dob, day_before), 49);
/// assert_eq!(age_in_years(dob, birthday), 50);
/// ```
pub fn age_in_years(date_of_birth: NaiveDate, as_of: NaiveDate) -> i32 {
    let mut age = as_of.year() - date_of_birth.year();
    if (as_of.month(), as_of.day()) < (date_of_birth.month(), date_of_birth.day()) {
        age -= 1;
    }
    age
}
