//! Inclusive date range.

use std::fmt;

use super::Date;
use crate::error::{RateChartError, RateChartResult};

/// An inclusive `[start, end]` date range with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: Date,
    end: Date,
}

impl DateRange {
    /// Creates a range, rejecting inverted bounds.
    ///
    /// # Errors
    ///
    /// Returns `RateChartError::MalformedDate` if `start > end`.
    pub fn new(start: Date, end: Date) -> RateChartResult<Self> {
        if start > end {
            return Err(RateChartError::malformed_date(format!(
                "fromDate {start} is after toDate {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// Parses a range from two `YYYYMMDD` strings.
    ///
    /// # Errors
    ///
    /// Returns `RateChartError::MalformedDate` if either string is invalid
    /// or the bounds are inverted.
    pub fn parse(from: &str, to: &str) -> RateChartResult<Self> {
        Self::new(Date::parse(from)?, Date::parse(to)?)
    }

    /// First day of the range.
    #[must_use]
    pub fn start(&self) -> Date {
        self.start
    }

    /// Last day of the range.
    #[must_use]
    pub fn end(&self) -> Date {
        self.end
    }

    /// Whole calendar months between start and end.
    #[must_use]
    pub fn months_between(&self) -> u32 {
        // Non-negative because start <= end.
        self.start.months_between(&self.end).unsigned_abs()
    }

    /// Iterates every calendar day in the range.
    pub fn days(&self) -> impl Iterator<Item = Date> {
        self.start.iter_through(self.end)
    }

    /// Checks whether `date` lies inside the range.
    #[must_use]
    pub fn contains(&self, date: &Date) -> bool {
        self.start <= *date && *date <= self.end
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}
