//! Immutable calendar dates with day precision and spreadsheet-style serial numbers.
//!
//! A [`SpreadsheetDate`] is a single day between 1 January 1900 and 31 December 9999,
//! with no time of day or time zone. Each one carries an ordinal day number (1 January
//! 1900 = 2) alongside its day, month and year. The [`DayDate`] trait supplies the
//! arithmetic, weekday navigation and comparisons on top of that ordinal.
//!
//! ```
//! use day_date::{DayDate, Month, SpreadsheetDate, Weekday};
//!
//! let may31 = SpreadsheetDate::new(31, Month::May, 2004)?;
//! assert_eq!(may31.add_months(1)?.to_string(), "30-June-2004");
//!
//! let friday = SpreadsheetDate::new(9, Month::November, 2001)?;
//! assert_eq!(friday.weekday(), Weekday::Friday);
//! assert_eq!(friday.nearest_weekday(Weekday::Monday)?.day(), 12);
//! # Ok::<(), day_date::DateError>(())
//! ```

#[macro_use]
mod logging;

mod calendar;
mod consts;
mod day_date;
mod factory;
mod interval;
mod names;
mod prelude;
mod spreadsheet;
mod types;

pub use calendar::{is_leap_year, last_day_of_month, leap_year_count};
pub use consts::*;
pub use day_date::DayDate;
pub use factory::{DateFactory, SpreadsheetDateFactory};
pub use interval::DateInterval;
pub use names::{EnglishNames, NameStyle, NameTable};
pub use spreadsheet::SpreadsheetDate;
pub use types::{Month, WeekInMonth, Weekday};

/// Error type for constructing, parsing and moving dates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Year outside the supported range.
    #[error("Invalid year: {0} (must be {min}-{max})", min = MIN_YEAR, max = MAX_YEAR)]
    YearOutOfRange(i64),

    /// Day that does not exist in the given month.
    #[error("Invalid day {day} for {month} {year}")]
    DayOutOfRange { day: u8, month: Month, year: i32 },

    /// Ordinal day number outside the supported range.
    #[error("Invalid ordinal: {0} (must be {min}-{max})", min = EARLIEST_ORDINAL, max = LATEST_ORDINAL)]
    OrdinalOutOfRange(i64),

    /// Month index outside 1..=12.
    #[error("Invalid month index: {0}")]
    InvalidMonth(i32),

    /// Weekday index outside 1..=7.
    #[error("Invalid weekday index: {0}")]
    InvalidWeekday(i32),

    /// Text that names no month.
    #[error("{0:?} is not a valid month")]
    UnrecognizedMonth(String),

    /// Text that names no weekday.
    #[error("{0:?} is not a valid weekday")]
    UnrecognizedWeekday(String),

    /// Text that is not shaped like a date.
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),
}

impl DateError {
    /// Returns `true` for errors caused by a year, day or ordinal outside the supported range.
    pub const fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            Self::YearOutOfRange(_) | Self::DayOutOfRange { .. } | Self::OrdinalOutOfRange(_)
        )
    }
}

#[cfg(test)]
mod test_utils {
    use crate::SpreadsheetDate;

    /// Builds a date from day, month index and year, panicking on invalid input.
    pub(crate) fn date(day: u8, month: i32, year: i32) -> SpreadsheetDate {
        SpreadsheetDate::from_index(day, month, year).expect("test date must be valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            DateError::YearOutOfRange(1899).to_string(),
            "Invalid year: 1899 (must be 1900-9999)"
        );
        assert_eq!(
            DateError::DayOutOfRange {
                day:   30,
                month: Month::February,
                year:  2004,
            }
            .to_string(),
            "Invalid day 30 for February 2004"
        );
        assert_eq!(
            DateError::OrdinalOutOfRange(1).to_string(),
            "Invalid ordinal: 1 (must be 2-2958465)"
        );
        assert_eq!(DateError::InvalidMonth(13).to_string(), "Invalid month index: 13");
        assert_eq!(
            DateError::UnrecognizedWeekday("Funday".to_owned()).to_string(),
            "\"Funday\" is not a valid weekday"
        );
    }

    #[test]
    fn test_error_grouping() {
        assert!(DateError::YearOutOfRange(0).is_out_of_range());
        assert!(DateError::OrdinalOutOfRange(0).is_out_of_range());
        assert!(!DateError::InvalidWeekday(0).is_out_of_range());
        assert!(!DateError::InvalidFormat(String::new()).is_out_of_range());
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<DateError>();
    }

    #[test]
    fn test_dates_are_shareable_across_threads() {
        let d = test_utils::date(1, 1, 2000);
        let handle = std::thread::spawn(move || d.add_days(1));
        assert_eq!(handle.join().unwrap(), Ok(test_utils::date(2, 1, 2000)));
    }

    #[test]
    fn test_constants() {
        assert_eq!(MIN_YEAR, 1900);
        assert_eq!(MAX_YEAR, 9999);
        assert_eq!(EARLIEST_ORDINAL, 2);
        assert_eq!(LATEST_ORDINAL, 2_958_465);
    }
}
