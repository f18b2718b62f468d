//! Dates numbered the way spreadsheet tools number them.
//!
//! 1 January 1900 is day 2 and 31 December 9999 is day 2 958 465. Day 1 is never
//! produced: the spreadsheet numbering counts a 29 February 1900 that never existed,
//! so starting one day later keeps the numbers aligned from March 1900 onwards while
//! the calendar fields follow the real Gregorian rule.

use crate::calendar::{is_leap_year, last_day_of_month, leap_year_count};
use crate::consts::{
    DATE_SEPARATOR, DAYS_BEFORE_MONTH, DAYS_PER_YEAR, EARLIEST_ORDINAL, LATEST_ORDINAL, LEAP_DAYS_BEFORE_MONTH,
    MAX_YEAR, MIN_DAY, MIN_YEAR,
};
use crate::day_date::DayDate;
use crate::names::{EnglishNames, NameTable};
use crate::types::{Month, Weekday};
use crate::DateError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// An immutable calendar day between 1 January 1900 and 31 December 9999.
///
/// Holds both the ordinal day number and the day/month/year it stands for; the two
/// always agree. Equality, ordering and hashing look at the ordinal only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct SpreadsheetDate {
    ordinal: i32,
    day:     u8,
    month:   Month,
    year:    i32,
}

impl SpreadsheetDate {
    /// Creates a date from a day, month and year.
    ///
    /// # Errors
    /// Returns `DateError::YearOutOfRange` if the year is outside 1900..=9999, or
    /// `DateError::DayOutOfRange` if the day does not exist in that month.
    pub fn new(day: u8, month: Month, year: i32) -> Result<Self, DateError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            debug!("rejected year {year}: must be {MIN_YEAR}..={MAX_YEAR}");
            return Err(DateError::YearOutOfRange(i64::from(year)));
        }
        if !(MIN_DAY..=last_day_of_month(month, year)).contains(&day) {
            debug!("rejected day {day} for {month} {year}");
            return Err(DateError::DayOutOfRange { day, month, year });
        }

        Ok(Self {
            ordinal: ordinal_from_dmy(day, month, year),
            day,
            month,
            year,
        })
    }

    /// Creates a date from a day, a month index (1 = January) and a year.
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` for a bad month index, otherwise as [`SpreadsheetDate::new`].
    pub fn from_index(day: u8, month: i32, year: i32) -> Result<Self, DateError> {
        Self::new(day, Month::from_index(month)?, year)
    }

    /// Parses `DD-Month-YYYY`, where the month may be a long name, an abbreviation
    /// or a number from `names`.
    ///
    /// # Errors
    /// Returns `DateError::InvalidFormat` if the text does not have that shape, and the
    /// month lookup or range errors otherwise.
    pub fn parse_with<N: NameTable + ?Sized>(s: &str, names: &N) -> Result<Self, DateError> {
        let trimmed = s.trim();
        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        let [day, month, year] = parts.as_slice() else {
            return Err(DateError::InvalidFormat(format!(
                "expected DD{DATE_SEPARATOR}Month{DATE_SEPARATOR}YYYY, got {trimmed:?}"
            )));
        };

        let day = day
            .parse::<u8>()
            .map_err(|_| DateError::InvalidFormat(format!("invalid day {day:?}")))?;
        let year = year
            .parse::<i32>()
            .map_err(|_| DateError::InvalidFormat(format!("invalid year {year:?}")))?;
        let month = Month::parse_with(month, names)?;

        Self::new(day, month, year)
    }
}

/// Ordinal of the given day, month and year. The inputs must already be valid.
const fn ordinal_from_dmy(day: u8, month: Month, year: i32) -> i32 {
    let yy = (year - MIN_YEAR) * DAYS_PER_YEAR + leap_year_count(year - 1);
    let mut mm = DAYS_BEFORE_MONTH[month as usize];
    if month.index() > Month::February.index() && is_leap_year(year) {
        mm += 1;
    }
    yy + mm + day as i32 + 1
}

/// Year containing `ordinal`, which must already be in range.
fn year_from_ordinal(ordinal: i32) -> i32 {
    let days = ordinal - EARLIEST_ORDINAL;
    // Ignoring leap days overestimates; subtracting too many of them underestimates.
    let overestimate = MIN_YEAR + days / DAYS_PER_YEAR;
    let underestimate = MIN_YEAR + (days - leap_year_count(overestimate)) / DAYS_PER_YEAR;
    if underestimate == overestimate {
        return underestimate;
    }

    let mut candidate = underestimate;
    while ordinal_from_dmy(MIN_DAY, Month::January, candidate) <= ordinal {
        candidate += 1;
    }
    trace!("ordinal {ordinal}: year estimate {underestimate}..={overestimate} resolved to {}", candidate - 1);
    candidate - 1
}

const fn days_before_month_table(year: i32) -> &'static [i32; 14] {
    if is_leap_year(year) { &LEAP_DAYS_BEFORE_MONTH } else { &DAYS_BEFORE_MONTH }
}

impl DayDate for SpreadsheetDate {
    fn from_ordinal(ordinal: i32) -> Result<Self, DateError> {
        if !(EARLIEST_ORDINAL..=LATEST_ORDINAL).contains(&ordinal) {
            debug!("rejected ordinal {ordinal}: must be {EARLIEST_ORDINAL}..={LATEST_ORDINAL}");
            return Err(DateError::OrdinalOutOfRange(i64::from(ordinal)));
        }

        let year = year_from_ordinal(ordinal);
        let first_of_year = ordinal_from_dmy(MIN_DAY, Month::January, year);
        let days_before = days_before_month_table(year);

        // The month is the last one whose first day is not after the ordinal.
        let month = Month::ALL
            .into_iter()
            .take_while(|month| first_of_year + days_before[*month as usize] - 1 < ordinal)
            .last()
            .unwrap_or(Month::January);

        let day = ordinal - first_of_year - days_before[month as usize] + 1;
        let day = u8::try_from(day).map_err(|_| DateError::OrdinalOutOfRange(i64::from(ordinal)))?;

        Ok(Self {
            ordinal,
            day,
            month,
            year,
        })
    }

    fn from_dmy(day: u8, month: Month, year: i32) -> Result<Self, DateError> {
        Self::new(day, month, year)
    }

    fn ordinal(&self) -> i32 {
        self.ordinal
    }

    fn year(&self) -> i32 {
        self.year
    }

    fn month(&self) -> Month {
        self.month
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn weekday_at_ordinal_zero() -> Weekday {
        Weekday::Saturday
    }
}

impl PartialEq for SpreadsheetDate {
    fn eq(&self, other: &Self) -> bool {
        self.ordinal == other.ordinal
    }
}

impl Eq for SpreadsheetDate {}

impl Hash for SpreadsheetDate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ordinal.hash(state);
    }
}

impl PartialOrd for SpreadsheetDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SpreadsheetDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ordinal.cmp(&other.ordinal)
    }
}

impl fmt::Display for SpreadsheetDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_string(&EnglishNames))
    }
}

impl FromStr for SpreadsheetDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with(s, &EnglishNames)
    }
}

impl TryFrom<i32> for SpreadsheetDate {
    type Error = DateError;

    fn try_from(ordinal: i32) -> Result<Self, Self::Error> {
        Self::from_ordinal(ordinal)
    }
}

impl From<SpreadsheetDate> for i32 {
    fn from(date: SpreadsheetDate) -> Self {
        date.ordinal
    }
}

impl TryFrom<(i32, u8, u8)> for SpreadsheetDate {
    type Error = DateError;

    /// Builds a date from a `(year, month, day)` triple.
    fn try_from((year, month, day): (i32, u8, u8)) -> Result<Self, Self::Error> {
        Self::from_index(day, i32::from(month), year)
    }
}
