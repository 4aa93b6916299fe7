//! Holiday set loaded at runtime from an external source.
//!
//! # Example
//!
//! ```
//! use ratechart_core::calendars::{Calendar, HolidaySet};
//! use ratechart_core::types::Date;
//!
//! let holidays = HolidaySet::from_date_keys(["20240101", "20240209"]).unwrap();
//!
//! assert!(!holidays.is_business_day(Date::parse("20240101").unwrap()));
//! assert!(holidays.is_business_day(Date::parse("20240102").unwrap()));
//! ```

use std::collections::hash_set;
use std::collections::HashSet;

use super::Calendar;
use crate::error::RateChartResult;
use crate::types::Date;

/// A set of public holidays on top of a Saturday/Sunday weekend.
///
/// Holidays are unique and unordered. The set is built once per chart
/// request and never shared between requests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidaySet {
    dates: HashSet<Date>,
}

impl HolidaySet {
    /// Create an empty holiday set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a holiday set from a list of dates.
    pub fn from_dates(dates: impl IntoIterator<Item = Date>) -> Self {
        Self {
            dates: dates.into_iter().collect(),
        }
    }

    /// Create a holiday set from `YYYYMMDD` keys.
    ///
    /// # Errors
    ///
    /// Returns `RateChartError::MalformedDate` on the first invalid key.
    pub fn from_date_keys<I, S>(keys: I) -> RateChartResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        keys.into_iter()
            .map(|k| Date::parse(k.as_ref()))
            .collect::<RateChartResult<HashSet<_>>>()
            .map(|dates| Self { dates })
    }

    /// Add a holiday. Returns false if it was already present.
    pub fn insert(&mut self, date: Date) -> bool {
        self.dates.insert(date)
    }

    /// Check whether `date` is a listed holiday.
    #[must_use]
    pub fn contains(&self, date: &Date) -> bool {
        self.dates.contains(date)
    }

    /// Number of distinct holidays.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns true if no holidays are listed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Iterate the holidays in no particular order.
    pub fn iter(&self) -> hash_set::Iter<'_, Date> {
        self.dates.iter()
    }

    /// Holidays in ascending date order.
    #[must_use]
    pub fn sorted(&self) -> Vec<Date> {
        let mut dates: Vec<Date> = self.dates.iter().copied().collect();
        dates.sort_unstable();
        dates
    }
}

impl Calendar for HolidaySet {
    fn name(&self) -> &'static str {
        "Holiday Set"
    }

    fn is_business_day(&self, date: Date) -> bool {
        date.is_weekday() && !self.contains(&date)
    }
}

impl FromIterator<Date> for HolidaySet {
    fn from_iter<T: IntoIterator<Item = Date>>(iter: T) -> Self {
        Self::from_dates(iter)
    }
}

impl Extend<Date> for HolidaySet {
    fn extend<T: IntoIterator<Item = Date>>(&mut self, iter: T) {
        self.dates.extend(iter);
    }
}

impl<'a> IntoIterator for &'a HolidaySet {
    type Item = &'a Date;
    type IntoIter = hash_set::Iter<'a, Date>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
