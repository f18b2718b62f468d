use crate::DateError;
use crate::consts::DAYS_IN_MONTH;
use crate::names::{EnglishNames, NameStyle, NameTable, matches_ignore_case};
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A month of the Gregorian year, indexed from January = 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum Month {
    January = 1,
    February = 2,
    March = 3,
    April = 4,
    May = 5,
    June = 6,
    July = 7,
    August = 8,
    September = 9,
    October = 10,
    November = 11,
    December = 12,
}

impl Month {
    /// All months in calendar order
    pub const ALL: [Self; 12] = [
        Self::January,
        Self::February,
        Self::March,
        Self::April,
        Self::May,
        Self::June,
        Self::July,
        Self::August,
        Self::September,
        Self::October,
        Self::November,
        Self::December,
    ];

    /// Looks a month up by its index (1 = January, 12 = December).
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the index is outside `1..=12`.
    pub fn from_index(index: i32) -> Result<Self, DateError> {
        Self::ALL
            .into_iter()
            .find(|month| month.index() == index)
            .ok_or(DateError::InvalidMonth(index))
    }

    /// Maps a zero-based month offset onto a month, wrapping every twelve.
    pub(crate) const fn from_offset(offset: i64) -> Self {
        match offset.rem_euclid(12) {
            0 => Self::January,
            1 => Self::February,
            2 => Self::March,
            3 => Self::April,
            4 => Self::May,
            5 => Self::June,
            6 => Self::July,
            7 => Self::August,
            8 => Self::September,
            9 => Self::October,
            10 => Self::November,
            _ => Self::December,
        }
    }

    /// Returns the 1-based month index
    #[inline]
    pub const fn index(self) -> i32 {
        self as i32
    }

    /// Number of days in this month in a non-leap year
    #[inline]
    pub const fn last_day(self) -> u8 {
        DAYS_IN_MONTH[self as usize]
    }

    /// Quarter of the year this month falls in (1..=4)
    pub const fn quarter(self) -> u8 {
        (self as u8 - 1) / 3 + 1
    }

    /// Parses a month from its long name, its abbreviation or its index, ignoring case.
    ///
    /// # Errors
    /// Returns `DateError::UnrecognizedMonth` if the text matches no name in `names`
    /// and is not a valid month index.
    pub fn parse_with<N: NameTable + ?Sized>(s: &str, names: &N) -> Result<Self, DateError> {
        let trimmed = s.trim();
        let by_name = Self::ALL.into_iter().find(|month| {
            matches_ignore_case(trimmed, names.month_name(*month, NameStyle::Long))
                || matches_ignore_case(trimmed, names.month_name(*month, NameStyle::Short))
        });
        if let Some(month) = by_name {
            return Ok(month);
        }

        trimmed
            .parse::<i32>()
            .ok()
            .and_then(|index| Self::from_index(index).ok())
            .ok_or_else(|| DateError::UnrecognizedMonth(trimmed.to_owned()))
    }

    /// Returns the name of this month in `names`
    pub fn to_name<N: NameTable + ?Sized>(self, names: &N, style: NameStyle) -> &str {
        names.month_name(self, style)
    }
}

impl FromStr for Month {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with(s, &EnglishNames)
    }
}

impl TryFrom<i32> for Month {
    type Error = DateError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::from_index(value)
    }
}

impl From<Month> for i32 {
    fn from(month: Month) -> Self {
        month.index()
    }
}

/// A day of the week, indexed from Sunday = 1 through Saturday = 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum Weekday {
    Sunday = 1,
    Monday = 2,
    Tuesday = 3,
    Wednesday = 4,
    Thursday = 5,
    Friday = 6,
    Saturday = 7,
}

impl Weekday {
    /// All weekdays, starting from Sunday
    pub const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Looks a weekday up by its index (1 = Sunday, 7 = Saturday).
    ///
    /// # Errors
    /// Returns `DateError::InvalidWeekday` if the index is outside `1..=7`.
    pub fn from_index(index: i32) -> Result<Self, DateError> {
        Self::ALL
            .into_iter()
            .find(|weekday| weekday.index() == index)
            .ok_or(DateError::InvalidWeekday(index))
    }

    /// Maps a day offset counted from Sunday onto a weekday, wrapping every seven.
    pub(crate) const fn from_offset(offset: i32) -> Self {
        match offset.rem_euclid(7) {
            0 => Self::Sunday,
            1 => Self::Monday,
            2 => Self::Tuesday,
            3 => Self::Wednesday,
            4 => Self::Thursday,
            5 => Self::Friday,
            _ => Self::Saturday,
        }
    }

    /// Returns the weekday index (1 = Sunday)
    #[inline]
    pub const fn index(self) -> i32 {
        self as i32
    }

    /// Parses a weekday from its long name or its abbreviation, ignoring case.
    ///
    /// # Errors
    /// Returns `DateError::UnrecognizedWeekday` if the text matches no name in `names`.
    pub fn parse_with<N: NameTable + ?Sized>(s: &str, names: &N) -> Result<Self, DateError> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|weekday| {
                matches_ignore_case(trimmed, names.weekday_name(*weekday, NameStyle::Long))
                    || matches_ignore_case(trimmed, names.weekday_name(*weekday, NameStyle::Short))
            })
            .ok_or_else(|| DateError::UnrecognizedWeekday(trimmed.to_owned()))
    }

    /// Returns the name of this weekday in `names`
    pub fn to_name<N: NameTable + ?Sized>(self, names: &N, style: NameStyle) -> &str {
        names.weekday_name(self, style)
    }
}

impl FromStr for Weekday {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with(s, &EnglishNames)
    }
}

impl TryFrom<i32> for Weekday {
    type Error = DateError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::from_index(value)
    }
}

impl From<Weekday> for i32 {
    fn from(weekday: Weekday) -> Self {
        weekday.index()
    }
}

/// Which occurrence of a weekday within a month to select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum WeekInMonth {
    First,
    Second,
    Third,
    Fourth,
    Last,
}

impl WeekInMonth {
    /// Returns the occurrence number, with `Last` encoded as 0
    pub const fn index(self) -> i32 {
        match self {
            Self::First => 1,
            Self::Second => 2,
            Self::Third => 3,
            Self::Fourth => 4,
            Self::Last => 0,
        }
    }
}
