//! Holiday source traits.
//!
//! A [`HolidaySource`] supplies the public holidays of one calendar year.
//! Holiday data is semi-static and fetched on demand, once per chart request.

use async_trait::async_trait;
use ratechart_core::calendars::HolidaySet;

use crate::error::TraitError;

/// Trait for public holiday providers.
#[async_trait]
pub trait HolidaySource: Send + Sync {
    /// Source name, used in logs.
    fn name(&self) -> &str;

    /// Get the public holidays of `year`.
    ///
    /// Callers treat any error as "no holidays known".
    async fn holidays_for_year(&self, year: i32) -> Result<HolidaySet, TraitError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratechart_core::types::Date;

    struct NewYearOnly;

    #[async_trait]
    impl HolidaySource for NewYearOnly {
        fn name(&self) -> &str {
            "new-year"
        }

        async fn holidays_for_year(&self, year: i32) -> Result<HolidaySet, TraitError> {
            let date = Date::from_ymd(year, 1, 1)
                .map_err(|e| TraitError::InvalidInput(e.to_string()))?;
            Ok(HolidaySet::from_dates([date]))
        }
    }

    #[tokio::test]
    async fn test_source_as_trait_object() {
        let source: Box<dyn HolidaySource> = Box::new(NewYearOnly);
        let holidays = source.holidays_for_year(2024).await.unwrap();
        assert_eq!(holidays.len(), 1);
        assert!(holidays.contains(&Date::parse("20240101").unwrap()));
        assert_eq!(source.name(), "new-year");
    }
}
