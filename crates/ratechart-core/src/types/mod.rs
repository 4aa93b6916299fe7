//! Domain types for chart generation.
//!
//! - [`Date`]: Calendar date keyed by its `YYYYMMDD` form
//! - [`YearMonth`]: Calendar month keyed by its `YYYYMM` form
//! - [`DateRange`]: Inclusive, validated date range
//! - [`ChartPoint`]: Dated profit rate

mod chart;
mod date;
mod range;

pub use chart::ChartPoint;
pub use date::{Date, YearMonth};
pub use range::DateRange;
