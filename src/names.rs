//! Month and weekday name tables used for display and parsing.

use crate::prelude::*;
use crate::types::{Month, Weekday};

/// Selects between the full and abbreviated form of a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum NameStyle {
    #[default]
    Long,
    Short,
}

/// An enumerable table of month and weekday names.
///
/// Implementations decide the language; parsing compares against every entry
/// of the table ignoring case.
pub trait NameTable {
    /// Returns the name of `month` in the requested style
    fn month_name(&self, month: Month, style: NameStyle) -> &str;

    /// Returns the name of `weekday` in the requested style
    fn weekday_name(&self, weekday: Weekday, style: NameStyle) -> &str;
}

/// English month and weekday names, with three-letter abbreviations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EnglishNames;

const ENGLISH_MONTHS: [(&str, &str); 12] = [
    ("January", "Jan"),
    ("February", "Feb"),
    ("March", "Mar"),
    ("April", "Apr"),
    ("May", "May"),
    ("June", "Jun"),
    ("July", "Jul"),
    ("August", "Aug"),
    ("September", "Sep"),
    ("October", "Oct"),
    ("November", "Nov"),
    ("December", "Dec"),
];

// Indexed from Sunday, matching `Weekday::index() - 1`.
const ENGLISH_WEEKDAYS: [(&str, &str); 7] = [
    ("Sunday", "Sun"),
    ("Monday", "Mon"),
    ("Tuesday", "Tue"),
    ("Wednesday", "Wed"),
    ("Thursday", "Thu"),
    ("Friday", "Fri"),
    ("Saturday", "Sat"),
];

const fn pick(entry: (&'static str, &'static str), style: NameStyle) -> &'static str {
    match style {
        NameStyle::Long => entry.0,
        NameStyle::Short => entry.1,
    }
}

impl NameTable for EnglishNames {
    fn month_name(&self, month: Month, style: NameStyle) -> &str {
        pick(ENGLISH_MONTHS[month as usize - 1], style)
    }

    fn weekday_name(&self, weekday: Weekday, style: NameStyle) -> &str {
        pick(ENGLISH_WEEKDAYS[weekday as usize - 1], style)
    }
}

/// Compares two names ignoring case, including non-ASCII letters.
pub(crate) fn matches_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}
