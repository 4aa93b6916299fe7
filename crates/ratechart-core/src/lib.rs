//! # Ratechart Core
//!
//! Core types and algorithms for synthetic profit-rate charts.
//!
//! This crate provides the building blocks used by the Ratechart service:
//!
//! - **Types**: `Date`, `YearMonth`, `DateRange` and `ChartPoint`
//! - **Business Day Calendars**: weekend rules plus runtime-loaded holiday sets
//! - **Allocation**: the hierarchical random allocator producing one rate per business day
//!
//! ## Example
//!
//! ```rust
//! use ratechart_core::prelude::*;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let from = Date::parse("20240101").unwrap();
//! let to = Date::parse("20240630").unwrap();
//! let holidays = HolidaySet::from_date_keys(["20240101", "20240301"]).unwrap();
//!
//! let days = build_business_days(from, to, &holidays).unwrap();
//! let mut rng = StdRng::seed_from_u64(2024);
//! let chart = ProfitRateAllocator::default()
//!     .allocate(&mut rng, from, to, &days)
//!     .unwrap();
//!
//! assert_eq!(chart.len(), days.len());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::trivially_copy_pass_by_ref)]

pub mod allocation;
pub mod calendars;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::allocation::{AllocationParams, ProfitRateAllocator};
    pub use crate::calendars::{build_business_days, Calendar, HolidaySet, WeekendCalendar};
    pub use crate::error::{RateChartError, RateChartResult};
    pub use crate::types::{ChartPoint, Date, DateRange, YearMonth};
}

// Re-export commonly used types at crate root
pub use error::{RateChartError, RateChartResult};
pub use types::{ChartPoint, Date, DateRange};
