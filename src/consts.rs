/// Earliest supported year (inclusive)
pub const MIN_YEAR: i32 = 1900;
/// Latest supported year (inclusive)
pub const MAX_YEAR: i32 = 9999;

/// Ordinal of 1 January 1900. Ordinal 1 is never produced.
pub const EARLIEST_ORDINAL: i32 = 2;
/// Ordinal of 31 December 9999
pub const LATEST_ORDINAL: i32 = 2_958_465;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Days elapsed in a non-leap year before the first day of month `m` (1-indexed).
/// Index 13 holds the length of the whole year.
pub(crate) const DAYS_BEFORE_MONTH: [i32; 14] = [0, 0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334, 365];

/// Leap year counterpart of [`DAYS_BEFORE_MONTH`].
pub(crate) const LEAP_DAYS_BEFORE_MONTH: [i32; 14] = [0, 0, 31, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335, 366];

/// Days in a non-leap year
pub(crate) const DAYS_PER_YEAR: i32 = 365;
/// Days in a week
pub(crate) const DAYS_PER_WEEK: i32 = 7;
/// Months in a year
pub(crate) const MONTHS_PER_YEAR: i64 = 12;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Separator between the day, month and year of a displayed date
pub const DATE_SEPARATOR: char = '-';
