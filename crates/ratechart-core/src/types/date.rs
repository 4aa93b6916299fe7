//! Date types for chart generation.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::{RateChartError, RateChartResult};

/// A calendar date keyed by its compact `YYYYMMDD` form.
///
/// This is a newtype wrapper around `chrono::NaiveDate`. Comparisons and
/// arithmetic always operate on the parsed date; the compact string is only
/// the wire representation.
///
/// # Example
///
/// ```rust
/// use ratechart_core::types::Date;
///
/// let date = Date::parse("20240131").unwrap();
/// assert_eq!(date.add_days(1).to_string(), "20240201");
/// assert_eq!(date.year_month().to_string(), "202401");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `RateChartError::MalformedDate` if the date is invalid.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> RateChartResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| {
                RateChartError::malformed_date(format!("{year:04}{month:02}{day:02}"))
            })
    }

    /// Parses an 8-digit `YYYYMMDD` string.
    ///
    /// # Errors
    ///
    /// Returns `RateChartError::MalformedDate` if the string is not exactly
    /// eight ASCII digits or does not name a real calendar day.
    pub fn parse(s: &str) -> RateChartResult<Self> {
        if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(RateChartError::malformed_date(format!(
                "expected YYYYMMDD, got '{s}'"
            )));
        }

        // All eight bytes are ASCII digits, so these slices and parses cannot fail.
        let year: i32 = s[0..4].parse().unwrap_or_default();
        let month: u32 = s[4..6].parse().unwrap_or_default();
        let day: u32 = s[6..8].parse().unwrap_or_default();

        Self::from_ymd(year, month, day)
            .map_err(|_| RateChartError::malformed_date(format!("not a calendar date: '{s}'")))
    }

    /// Returns today's date in the local time zone.
    #[must_use]
    pub fn today() -> Self {
        Date(chrono::Local::now().date_naive())
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the year and month this date falls in.
    #[must_use]
    pub fn year_month(&self) -> YearMonth {
        YearMonth {
            year: self.year(),
            month: self.month(),
        }
    }

    /// Adds a number of days to the date.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }

    /// Number of whole calendar months from `self` to `other`.
    ///
    /// Counts month boundaries only (`year * 12 + month` difference), so
    /// 2024-01-31 to 2024-02-01 is one month and any two days in the same
    /// month are zero months apart.
    #[must_use]
    pub fn months_between(&self, other: &Date) -> i32 {
        other.year_month().ordinal() - self.year_month().ordinal()
    }

    /// Returns the day of week.
    #[must_use]
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Checks if the date is a weekend (Saturday or Sunday).
    #[must_use]
    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Checks if the date is a weekday (Monday through Friday).
    #[must_use]
    pub fn is_weekday(&self) -> bool {
        !self.is_weekend()
    }

    /// Iterates every calendar day from `self` through `end` inclusive.
    ///
    /// Yields nothing when `end` precedes `self`.
    pub fn iter_through(self, end: Date) -> impl Iterator<Item = Date> {
        self.0
            .iter_days()
            .take_while(move |d| *d <= end.0)
            .map(Date)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y%m%d"))
    }
}

impl FromStr for Date {
    type Err = RateChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Date::parse(s)
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

impl Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Date::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// A calendar month, displayed as the 6-character `YYYYMM` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    /// Calendar year.
    pub year: i32,
    /// Month of year (1-12).
    pub month: u32,
}

impl YearMonth {
    /// Advances by a (possibly negative) number of months.
    #[must_use]
    pub fn plus_months(&self, months: i32) -> Self {
        let total = self.ordinal() + months;
        YearMonth {
            year: total.div_euclid(12),
            month: total.rem_euclid(12) as u32 + 1,
        }
    }

    /// Returns the number of days in this month.
    #[must_use]
    pub fn days_in_month(&self) -> u32 {
        match self.month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if is_leap_year(self.year) => 29,
            _ => 28,
        }
    }

    /// Checks whether `date` falls inside this month.
    #[must_use]
    pub fn contains(&self, date: &Date) -> bool {
        date.year_month() == *self
    }

    fn ordinal(&self) -> i32 {
        self.year * 12 + self.month as i32 - 1
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}{:02}", self.year, self.month)
    }
}

/// Helper function to check if a year is a leap year.
fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}
