//! Construction strategies for date representations.
//!
//! Code that has to build dates without caring which [`DayDate`] it gets takes a
//! `DateFactory` value and asks it for dates.

use crate::DateError;
use crate::consts::{MAX_YEAR, MIN_YEAR};
use crate::day_date::DayDate;
use crate::spreadsheet::SpreadsheetDate;
use crate::types::Month;

/// Builds dates of one concrete representation.
pub trait DateFactory {
    type Date: DayDate;

    /// Earliest year the representation supports
    fn minimum_year(&self) -> i32;

    /// Latest year the representation supports
    fn maximum_year(&self) -> i32;

    /// # Errors
    /// Returns `DateError::OrdinalOutOfRange` if the ordinal is not representable.
    fn make_date(&self, ordinal: i32) -> Result<Self::Date, DateError> {
        Self::Date::from_ordinal(ordinal)
    }

    /// # Errors
    /// Returns a range error if the triple is not representable.
    fn make(&self, day: u8, month: Month, year: i32) -> Result<Self::Date, DateError> {
        Self::Date::from_dmy(day, month, year)
    }

    /// # Errors
    /// Returns `DateError::InvalidMonth` for a bad month index, otherwise as [`DateFactory::make`].
    fn make_from_index(&self, day: u8, month: i32, year: i32) -> Result<Self::Date, DateError> {
        self.make(day, Month::from_index(month)?, year)
    }
}

/// Builds [`SpreadsheetDate`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SpreadsheetDateFactory;

impl DateFactory for SpreadsheetDateFactory {
    type Date = SpreadsheetDate;

    fn minimum_year(&self) -> i32 {
        MIN_YEAR
    }

    fn maximum_year(&self) -> i32 {
        MAX_YEAR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_mondays<F: DateFactory>(factory: &F, year: i32) -> Result<Vec<F::Date>, DateError> {
        use crate::types::{WeekInMonth, Weekday};

        Month::ALL
            .into_iter()
            .map(|month| factory.make(1, month, year)?.weekday_in_month(WeekInMonth::First, Weekday::Monday))
            .collect()
    }

    #[test]
    fn test_year_bounds() {
        let factory = SpreadsheetDateFactory;
        assert_eq!(factory.minimum_year(), 1900);
        assert_eq!(factory.maximum_year(), 9999);
        assert!(factory.make(1, Month::January, factory.minimum_year()).is_ok());
        assert!(factory.make(31, Month::December, factory.maximum_year()).is_ok());
        assert!(factory.make(31, Month::December, factory.minimum_year() - 1).is_err());
        assert!(factory.make(1, Month::January, factory.maximum_year() + 1).is_err());
    }

    #[test]
    fn test_make_variants_agree() {
        let factory = SpreadsheetDateFactory;
        let by_month = factory.make(15, Month::April, 2000).unwrap();
        let by_index = factory.make_from_index(15, 4, 2000).unwrap();
        let by_ordinal = factory.make_date(by_month.ordinal()).unwrap();
        assert_eq!(by_month, by_index);
        assert_eq!(by_month, by_ordinal);
    }

    #[test]
    fn test_make_errors() {
        let factory = SpreadsheetDateFactory;
        assert_eq!(factory.make_from_index(1, 13, 2000), Err(DateError::InvalidMonth(13)));
        assert_eq!(factory.make_date(1), Err(DateError::OrdinalOutOfRange(1)));
    }

    #[test]
    fn test_generic_over_factory() {
        let mondays = first_mondays(&SpreadsheetDateFactory, 2001).unwrap();
        let days: Vec<u8> = mondays.iter().map(DayDate::day).collect();
        assert_eq!(days, [1, 5, 5, 2, 7, 4, 2, 6, 3, 1, 5, 3]);
    }
}
