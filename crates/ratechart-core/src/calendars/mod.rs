//! Business day calendars.
//!
//! This module provides:
//! - The [`Calendar`] trait for business day rules
//! - [`HolidaySet`], a Saturday/Sunday calendar with runtime-loaded holidays
//! - [`build_business_days`], which lists the business days of a date range

mod holiday_set;

pub use holiday_set::HolidaySet;

use crate::error::RateChartResult;
use crate::types::{Date, DateRange};

/// Trait for business day calendars.
///
/// Calendars determine which days are business days vs holidays.
pub trait Calendar: Send + Sync {
    /// Returns the name of the calendar.
    fn name(&self) -> &'static str;

    /// Returns true if the date is a business day.
    fn is_business_day(&self, date: Date) -> bool;

    /// Returns true if the date is a holiday.
    fn is_holiday(&self, date: Date) -> bool {
        !self.is_business_day(date)
    }

    /// Returns the next business day on or after the given date.
    fn next_business_day(&self, date: Date) -> Date {
        let mut result = date;
        while !self.is_business_day(result) {
            result = result.add_days(1);
        }
        result
    }

    /// Returns the previous business day on or before the given date.
    fn previous_business_day(&self, date: Date) -> Date {
        let mut result = date;
        while !self.is_business_day(result) {
            result = result.add_days(-1);
        }
        result
    }

    /// Lists the business days of `range` in ascending order.
    fn business_days_in(&self, range: &DateRange) -> Vec<Date> {
        range.days().filter(|d| self.is_business_day(*d)).collect()
    }
}

/// A simple weekend-only calendar (no holidays).
///
/// Used when holiday data is not available.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendCalendar;

impl Calendar for WeekendCalendar {
    fn name(&self) -> &'static str {
        "Weekend Only"
    }

    fn is_business_day(&self, date: Date) -> bool {
        date.is_weekday()
    }
}

/// Lists every business day in `[from, to]`: weekdays not in `holidays`.
///
/// The result is in ascending date order and depends only on the inputs.
///
/// # Errors
///
/// Returns `RateChartError::MalformedDate` if `from > to`.
pub fn build_business_days(
    from: Date,
    to: Date,
    holidays: &HolidaySet,
) -> RateChartResult<Vec<Date>> {
    let range = DateRange::new(from, to)?;
    Ok(holidays.business_days_in(&range))
}
