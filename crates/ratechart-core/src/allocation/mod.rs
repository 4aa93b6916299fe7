//! Random profit-rate allocation.
//!
//! A single target rate is drawn for the whole range, spread linearly over
//! its calendar months with a random monthly variation, then spread over
//! the business days of each month with a random daily variation.
//!
//! - [`ProfitRateAllocator`]: the allocation itself
//! - [`AllocationParams`]: the constants shaping the random draws
//! - [`precision`]: two-significant-digit rounding and final truncation

mod allocator;
mod params;
pub mod precision;

pub use allocator::{Allocation, AllocationTrace, MonthTrace, ProfitRateAllocator};
pub use params::AllocationParams;
