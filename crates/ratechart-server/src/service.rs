//! Chart generation service.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use ratechart_core::allocation::{AllocationParams, ProfitRateAllocator};
use ratechart_core::calendars::{build_business_days, HolidaySet};
use ratechart_core::types::{ChartPoint, Date, DateRange};
use ratechart_core::{RateChartError, RateChartResult};
use ratechart_traits::holidays::HolidaySource;

/// Default holiday lookup timeout.
pub const DEFAULT_HOLIDAY_TIMEOUT: Duration = Duration::from_secs(3);

/// Generates random profit-rate charts over business days.
///
/// Holidays are fetched once per request for the current calendar year. A
/// failed or slow lookup degrades to an empty holiday set, so the chart then
/// only skips weekends.
pub struct ChartService {
    holidays: Arc<dyn HolidaySource>,
    allocator: ProfitRateAllocator,
    holiday_timeout: Duration,
}

impl ChartService {
    /// Create a service over a holiday source.
    pub fn new(holidays: Arc<dyn HolidaySource>, params: AllocationParams) -> Self {
        Self {
            holidays,
            allocator: ProfitRateAllocator::new(params),
            holiday_timeout: DEFAULT_HOLIDAY_TIMEOUT,
        }
    }

    /// Set the holiday lookup timeout.
    pub fn with_holiday_timeout(mut self, timeout: Duration) -> Self {
        self.holiday_timeout = timeout;
        self
    }

    /// Generate a chart for `[from_date, to_date]`, both `YYYYMMDD`.
    ///
    /// Business-day building and allocation run on the blocking pool.
    ///
    /// # Errors
    ///
    /// Returns `RateChartError::MalformedDate` for an invalid date or an
    /// inverted range. Holiday failures are not errors.
    pub async fn random_chart(
        &self,
        from_date: &str,
        to_date: &str,
    ) -> RateChartResult<Vec<ChartPoint>> {
        let range = DateRange::parse(from_date, to_date)?;
        let holidays = self.load_holidays(Date::today().year()).await;
        let holiday_count = holidays.len();

        let allocator = self.allocator;
        let points = tokio::task::spawn_blocking(move || {
            let business_days = build_business_days(range.start(), range.end(), &holidays)?;
            let mut rng = rand::thread_rng();
            allocator.allocate(&mut rng, range.start(), range.end(), &business_days)
        })
        .await
        .map_err(|e| RateChartError::internal(format!("chart task failed: {e}")))??;

        info!(
            "Generated {} chart points for {} ({} holidays known)",
            points.len(),
            range,
            holiday_count
        );
        Ok(points)
    }

    async fn load_holidays(&self, year: i32) -> HolidaySet {
        let lookup = self.holidays.holidays_for_year(year);
        match tokio::time::timeout(self.holiday_timeout, lookup).await {
            Ok(Ok(holidays)) => {
                debug!(
                    "Loaded {} holidays for {} from {}",
                    holidays.len(),
                    year,
                    self.holidays.name()
                );
                holidays
            }
            Ok(Err(e)) => {
                let e = RateChartError::from(e);
                warn!(
                    "Holiday lookup via {} failed, using weekends only: {}",
                    self.holidays.name(),
                    e
                );
                HolidaySet::new()
            }
            Err(_) => {
                warn!(
                    "Holiday lookup via {} timed out after {:?}, using weekends only",
                    self.holidays.name(),
                    self.holiday_timeout
                );
                HolidaySet::new()
            }
        }
    }
}
