//! # Ratechart Ext HTTP
//!
//! Holiday sources for the Ratechart service.
//!
//! This crate provides:
//! - [`DataPortalHolidaySource`]: the public data portal's special-day service
//! - [`StaticHolidaySource`]: a fixed holiday list, for tests and offline runs
//! - [`EmptyHolidaySource`]: no holidays at all, the degraded default

#![warn(missing_docs)]
#![warn(clippy::all)]

mod portal;
mod response;

pub use portal::*;
pub use response::parse_holiday_response;

use async_trait::async_trait;
use ratechart_core::calendars::HolidaySet;
use ratechart_core::types::Date;
use ratechart_traits::error::TraitError;
use ratechart_traits::holidays::HolidaySource;

// =============================================================================
// STATIC AND EMPTY SOURCES
// =============================================================================

/// Empty holiday source: every weekday is a business day.
pub struct EmptyHolidaySource;

#[async_trait]
impl HolidaySource for EmptyHolidaySource {
    fn name(&self) -> &str {
        "empty"
    }

    async fn holidays_for_year(&self, _year: i32) -> Result<HolidaySet, TraitError> {
        Ok(HolidaySet::new())
    }
}

/// Holiday source over a fixed list of dates.
#[derive(Debug, Clone, Default)]
pub struct StaticHolidaySource {
    holidays: HolidaySet,
}

impl StaticHolidaySource {
    /// Create a source serving `holidays`.
    pub fn new(holidays: HolidaySet) -> Self {
        Self { holidays }
    }

    /// Create a source from `YYYYMMDD` keys.
    pub fn from_date_keys<I, S>(keys: I) -> Result<Self, TraitError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        HolidaySet::from_date_keys(keys)
            .map(Self::new)
            .map_err(|e| TraitError::InvalidInput(e.to_string()))
    }
}

#[async_trait]
impl HolidaySource for StaticHolidaySource {
    fn name(&self) -> &str {
        "static"
    }

    async fn holidays_for_year(&self, year: i32) -> Result<HolidaySet, TraitError> {
        Ok(self
            .holidays
            .iter()
            .copied()
            .filter(|d: &Date| d.year() == year)
            .collect())
    }
}
