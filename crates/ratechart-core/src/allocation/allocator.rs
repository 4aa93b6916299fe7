//! Hierarchical random profit-rate allocation.

use rand::Rng;
use rust_decimal::Decimal;

use super::params::AllocationParams;
use super::precision::{round_sig2, truncate_rate};
use crate::error::{RateChartError, RateChartResult};
use crate::types::{ChartPoint, Date, DateRange, YearMonth};

/// Resolution of a uniform draw: `u = k / 10^12` with `k` in `[0, 10^12)`.
const UNIT_SCALE: u32 = 12;
const UNIT_STEPS: i64 = 1_000_000_000_000;

/// Distributes one random target rate over the months of a range, then over
/// the business days of each month.
///
/// For month `i` of the range:
///
/// ```text
/// monthly_rate = round_sig2(target / month_count) * (i + 1) + variation
/// ```
///
/// and for business day `j` of that month, with `prev` the previous month's
/// rate (zero before the first month):
///
/// ```text
/// daily_rate = prev + round_sig2((monthly_rate - prev) / (days_in_month * (j + 1))) + variation
/// ```
///
/// Each daily rate is truncated to two decimals and the first point is
/// pinned to zero.
///
/// # Example
///
/// ```rust
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use ratechart_core::allocation::ProfitRateAllocator;
/// use ratechart_core::calendars::{build_business_days, HolidaySet};
/// use ratechart_core::types::Date;
/// use rust_decimal::Decimal;
///
/// let from = Date::parse("20240101").unwrap();
/// let to = Date::parse("20240331").unwrap();
/// let days = build_business_days(from, to, &HolidaySet::new()).unwrap();
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let series = ProfitRateAllocator::default().allocate(&mut rng, from, to, &days).unwrap();
///
/// assert_eq!(series.len(), days.len());
/// assert_eq!(series[0].rate, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfitRateAllocator {
    params: AllocationParams,
}

/// A generated series together with the values that shaped it.
#[derive(Debug, Clone, PartialEq)]
pub struct Allocation {
    /// One point per business day, ascending.
    pub points: Vec<ChartPoint>,
    /// Intermediate values of the allocation.
    pub trace: AllocationTrace,
}

/// Intermediate values of one allocation run.
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationTrace {
    /// Total rate distributed over the range.
    pub target_rate: Decimal,
    /// Whole calendar months between the range bounds.
    pub month_count: u32,
    /// Divisor applied to the target rate (`month_count`, or one when zero).
    pub divisor: Decimal,
    /// Per-month records, one for each calendar month the range touches.
    pub months: Vec<MonthTrace>,
}

/// Allocation record for one calendar month.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthTrace {
    /// The month, displayed as `YYYYMM`.
    pub year_month: YearMonth,
    /// Trend component of the month's rate.
    pub monthly_base: Decimal,
    /// Random component of the month's rate, after rounding.
    pub variation: Decimal,
    /// `monthly_base + variation`.
    pub monthly_rate: Decimal,
    /// Business days the month contributed to the series.
    pub business_days: usize,
}

impl ProfitRateAllocator {
    /// Creates an allocator with the given parameters.
    #[must_use]
    pub fn new(params: AllocationParams) -> Self {
        Self { params }
    }

    /// Returns the allocation parameters.
    #[must_use]
    pub fn params(&self) -> &AllocationParams {
        &self.params
    }

    /// Generates one point per business day in `business_days`.
    ///
    /// `business_days` must be in ascending order, as produced by
    /// [`build_business_days`](crate::calendars::build_business_days). Days
    /// outside the months spanned by `[from, to]` are ignored.
    ///
    /// # Errors
    ///
    /// Returns `RateChartError::MalformedDate` if `from > to`.
    pub fn allocate<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        from: Date,
        to: Date,
        business_days: &[Date],
    ) -> RateChartResult<Vec<ChartPoint>> {
        self.allocate_traced(rng, from, to, business_days)
            .map(|allocation| allocation.points)
    }

    /// Like [`allocate`](Self::allocate), also returning the allocation trace.
    pub fn allocate_traced<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        from: Date,
        to: Date,
        business_days: &[Date],
    ) -> RateChartResult<Allocation> {
        let range = DateRange::new(from, to)?;
        Ok(self.allocate_with(|| unit_draw(rng), &range, business_days))
    }

    fn allocate_with<F>(&self, mut draw: F, range: &DateRange, business_days: &[Date]) -> Allocation
    where
        F: FnMut() -> Decimal,
    {
        let p = &self.params;
        let target_rate = (draw() + p.random_offset) * p.target_multiplier - p.target_shift;

        let month_count = range.months_between();
        let divisor = match month_divisor(month_count) {
            Ok(divisor) => divisor,
            Err(e) => {
                log::debug!("{e}; allocating {range} as a single month");
                Decimal::ONE
            }
        };
        let monthly_step = round_sig2(target_rate / divisor);

        let first_month = range.start().year_month();
        let mut points = Vec::with_capacity(business_days.len());
        let mut months = Vec::with_capacity(month_count as usize + 1);
        let mut previous_rate = Decimal::ZERO;
        let mut cursor = 0;

        for i in 0..=month_count {
            let year_month = first_month.plus_months(i as i32);
            let monthly_base = monthly_step * Decimal::from(i + 1);
            let variation = round_sig2((draw() + p.random_offset) * p.variation_range);
            let monthly_rate = monthly_base + variation;

            let month_days = month_slice(business_days, &mut cursor, year_month);
            let days_in_month = month_days.len();

            for (j, &date) in month_days.iter().enumerate() {
                let steps = Decimal::from(days_in_month * (j + 1));
                let daily_base = previous_rate + round_sig2((monthly_rate - previous_rate) / steps);
                let daily_variation = round_sig2((draw() + p.random_offset) * p.variation_range);
                points.push(ChartPoint::new(date, truncate_rate(daily_base + daily_variation)));
            }

            months.push(MonthTrace {
                year_month,
                monthly_base,
                variation,
                monthly_rate,
                business_days: days_in_month,
            });
            previous_rate = monthly_rate;
        }

        if let Some(first) = points.first_mut() {
            first.rate = Decimal::ZERO;
        }

        Allocation {
            points,
            trace: AllocationTrace {
                target_rate,
                month_count,
                divisor,
                months,
            },
        }
    }
}

/// Business days of `year_month`, advancing `cursor` past them.
///
/// Days of earlier months are skipped; `days` must be ascending.
fn month_slice<'a>(days: &'a [Date], cursor: &mut usize, year_month: YearMonth) -> &'a [Date] {
    while *cursor < days.len() && days[*cursor].year_month() < year_month {
        *cursor += 1;
    }
    let start = *cursor;
    while *cursor < days.len() && days[*cursor].year_month() == year_month {
        *cursor += 1;
    }
    &days[start..*cursor]
}

/// Month count as a divisor; zero months cannot divide the target.
fn month_divisor(month_count: u32) -> RateChartResult<Decimal> {
    if month_count == 0 {
        Err(RateChartError::division_degenerate("month count"))
    } else {
        Ok(Decimal::from(month_count))
    }
}

/// Uniform draw on `[0, 1)`.
fn unit_draw<R: Rng + ?Sized>(rng: &mut R) -> Decimal {
    Decimal::new(rng.gen_range(0..UNIT_STEPS), UNIT_SCALE)
}
