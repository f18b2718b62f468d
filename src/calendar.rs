//! Gregorian calendar arithmetic shared by every date representation.

use crate::consts::{CENTURY_CYCLE, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE};
use crate::types::Month;

/// Returns `true` if `year` is a leap year under the Gregorian rule.
pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Returns the number of the last day of `month` in `year`, taking leap years into account.
pub const fn last_day_of_month(month: Month, year: i32) -> u8 {
    if matches!(month, Month::February) && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        month.last_day()
    }
}

/// Returns the number of leap years from 1900 to `year` inclusive.
///
/// 1900 itself is not a leap year and contributes nothing, so every year up to
/// 1903 yields 0. Meaningful for years from 1899 onwards.
pub const fn leap_year_count(year: i32) -> i32 {
    let leap4 = (year - 1896) / LEAP_YEAR_CYCLE;
    let leap100 = (year - 1800) / CENTURY_CYCLE;
    let leap400 = (year - 1600) / GREGORIAN_CYCLE;
    leap4 - leap100 + leap400
}
