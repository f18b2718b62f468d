use crate::DateError;
use crate::calendar::last_day_of_month;
use crate::consts::{DATE_SEPARATOR, DAYS_PER_WEEK, MIN_DAY, MONTHS_PER_YEAR};
use crate::interval::DateInterval;
use crate::names::{NameStyle, NameTable};
use crate::types::{Month, WeekInMonth, Weekday};

/// A calendar day with no time-of-day or time zone, identified by an ordinal day number.
///
/// Implementors supply construction, the ordinal and its calendar fields, and the weekday
/// that ordinal zero would fall on. Arithmetic, navigation and comparison are provided on
/// top of those and always return new values.
pub trait DayDate: Copy + Sized {
    /// Creates a date from its ordinal day number.
    ///
    /// # Errors
    /// Returns `DateError::OrdinalOutOfRange` if the ordinal is not representable.
    fn from_ordinal(ordinal: i32) -> Result<Self, DateError>;

    /// Creates a date from a day, month and year.
    ///
    /// # Errors
    /// Returns `DateError::YearOutOfRange` or `DateError::DayOutOfRange` if the triple
    /// is not representable.
    fn from_dmy(day: u8, month: Month, year: i32) -> Result<Self, DateError>;

    /// The ordinal day number
    fn ordinal(&self) -> i32;

    fn year(&self) -> i32;

    fn month(&self) -> Month;

    /// Day of the month, starting at 1
    fn day(&self) -> u8;

    /// The weekday ordinal zero would fall on in this numbering
    fn weekday_at_ordinal_zero() -> Weekday;

    fn weekday(&self) -> Weekday {
        let offset = Self::weekday_at_ordinal_zero().index() - Weekday::Sunday.index();
        Weekday::from_offset(self.ordinal() + offset)
    }

    /// Returns the date `days` after this one (`days` may be negative).
    ///
    /// # Errors
    /// Returns `DateError::OrdinalOutOfRange` if the result leaves the supported range.
    fn add_days(&self, days: i32) -> Result<Self, DateError> {
        let target = i64::from(self.ordinal()) + i64::from(days);
        let ordinal = i32::try_from(target).map_err(|_| DateError::OrdinalOutOfRange(target))?;
        Self::from_ordinal(ordinal)
    }

    /// Returns the date `months` after this one (`months` may be negative).
    ///
    /// The day is pulled back to the end of the resulting month when it would overflow
    /// it, so 31 May + 1 month is 30 June.
    ///
    /// # Errors
    /// Returns `DateError::YearOutOfRange` if the result leaves the supported range.
    fn add_months(&self, months: i32) -> Result<Self, DateError> {
        let this_month = MONTHS_PER_YEAR * i64::from(self.year()) + i64::from(self.month().index()) - 1;
        let result_month = this_month + i64::from(months);
        let year = result_month.div_euclid(MONTHS_PER_YEAR);
        let year = i32::try_from(year).map_err(|_| DateError::YearOutOfRange(year))?;
        let month = Month::from_offset(result_month);
        Self::from_dmy(clamp_day(self.day(), month, year), month, year)
    }

    /// Returns the same day and month `years` later, with 29 February falling back to
    /// the 28th in non-leap years.
    ///
    /// # Errors
    /// Returns `DateError::YearOutOfRange` if the result leaves the supported range.
    fn add_years(&self, years: i32) -> Result<Self, DateError> {
        let year = i64::from(self.year()) + i64::from(years);
        let year = i32::try_from(year).map_err(|_| DateError::YearOutOfRange(year))?;
        let month = self.month();
        Self::from_dmy(clamp_day(self.day(), month, year), month, year)
    }

    /// The latest date strictly before this one that falls on `target`.
    ///
    /// # Errors
    /// Returns `DateError::OrdinalOutOfRange` if that date is not representable.
    fn previous_weekday(&self, target: Weekday) -> Result<Self, DateError> {
        let mut offset = target.index() - self.weekday().index();
        if offset >= 0 {
            offset -= DAYS_PER_WEEK;
        }
        self.add_days(offset)
    }

    /// The earliest date strictly after this one that falls on `target`.
    ///
    /// # Errors
    /// Returns `DateError::OrdinalOutOfRange` if that date is not representable.
    fn following_weekday(&self, target: Weekday) -> Result<Self, DateError> {
        let mut offset = target.index() - self.weekday().index();
        if offset <= 0 {
            offset += DAYS_PER_WEEK;
        }
        self.add_days(offset)
    }

    /// The date falling on `target` closest to this one, which is this date itself when
    /// it already falls on `target`.
    ///
    /// Up to three days ahead wins over four days back.
    ///
    /// # Errors
    /// Returns `DateError::OrdinalOutOfRange` if that date is not representable.
    fn nearest_weekday(&self, target: Weekday) -> Result<Self, DateError> {
        let forward = (target.index() - self.weekday().index()).rem_euclid(DAYS_PER_WEEK);
        let backward = forward - DAYS_PER_WEEK;
        if forward > 3 { self.add_days(backward) } else { self.add_days(forward) }
    }

    /// The last day of this date's month.
    ///
    /// # Errors
    /// Returns an error only if the implementor cannot represent that day.
    fn end_of_month(&self) -> Result<Self, DateError> {
        let month = self.month();
        let year = self.year();
        Self::from_dmy(last_day_of_month(month, year), month, year)
    }

    /// The given occurrence of `weekday` within this date's month.
    ///
    /// # Errors
    /// Returns `DateError::OrdinalOutOfRange` if that date is not representable.
    fn weekday_in_month(&self, week: WeekInMonth, weekday: Weekday) -> Result<Self, DateError> {
        if week == WeekInMonth::Last {
            let last = self.end_of_month()?;
            let back = (last.weekday().index() - weekday.index()).rem_euclid(DAYS_PER_WEEK);
            return last.add_days(-back);
        }

        let first = Self::from_dmy(MIN_DAY, self.month(), self.year())?;
        let ahead = (weekday.index() - first.weekday().index()).rem_euclid(DAYS_PER_WEEK);
        first.add_days(ahead + DAYS_PER_WEEK * (week.index() - 1))
    }

    /// Days from `other` to this date; positive when this date is later.
    fn days_since<D: DayDate>(&self, other: &D) -> i32 {
        self.ordinal() - other.ordinal()
    }

    fn is_on<D: DayDate>(&self, other: &D) -> bool {
        self.ordinal() == other.ordinal()
    }

    fn is_before<D: DayDate>(&self, other: &D) -> bool {
        self.ordinal() < other.ordinal()
    }

    fn is_on_or_before<D: DayDate>(&self, other: &D) -> bool {
        self.ordinal() <= other.ordinal()
    }

    fn is_after<D: DayDate>(&self, other: &D) -> bool {
        self.ordinal() > other.ordinal()
    }

    fn is_on_or_after<D: DayDate>(&self, other: &D) -> bool {
        self.ordinal() >= other.ordinal()
    }

    /// Whether this date lies between `d1` and `d2` inclusive. The order of the bounds
    /// does not matter.
    fn is_in_range<D: DayDate>(&self, d1: &D, d2: &D) -> bool {
        self.is_in_range_with(d1, d2, DateInterval::Closed)
    }

    /// Like [`DayDate::is_in_range`], with `interval` deciding whether the bounds count.
    fn is_in_range_with<D: DayDate>(&self, d1: &D, d2: &D, interval: DateInterval) -> bool {
        interval.contains(self.ordinal(), d1.ordinal(), d2.ordinal())
    }

    /// Converts to `(year, month, day, hour, minute, second)` for handing to a date-time
    /// type. The time of day is always midnight.
    fn to_host_tuple(&self) -> (i32, u8, u8, u8, u8, u8) {
        (self.year(), self.month() as u8, self.day(), 0, 0, 0)
    }

    /// Formats as `DD-MonthName-YYYY` using the long month names from `names`.
    fn to_display_string<N: NameTable + ?Sized>(&self, names: &N) -> String {
        format!(
            "{:02}{DATE_SEPARATOR}{}{DATE_SEPARATOR}{}",
            self.day(),
            names.month_name(self.month(), NameStyle::Long),
            self.year()
        )
    }
}

fn clamp_day(day: u8, month: Month, year: i32) -> u8 {
    day.min(last_day_of_month(month, year))
}
