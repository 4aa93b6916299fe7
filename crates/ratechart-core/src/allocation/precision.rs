//! Precision control for allocated rates.
//!
//! Two distinct operations are applied during allocation and must not be
//! merged:
//!
//! - [`round_sig2`] limits an intermediate value to two significant digits
//!   (`0.7272 -> 0.72`, `123.4 -> 120`). It bounds the magnitude of the
//!   month-to-month and day-to-day steps.
//! - [`truncate_rate`] cuts a final rate to two fractional digits
//!   (`3.168 -> 3.16`).
//!
//! Both truncate toward zero.

use rust_decimal::{Decimal, RoundingStrategy};

/// Significant digits kept by intermediate rounding.
pub const SIGNIFICANT_DIGITS: u32 = 2;

/// Fractional digits of a finalized rate.
pub const RATE_DECIMALS: u32 = 2;

/// Limits `value` to [`SIGNIFICANT_DIGITS`] significant digits, toward zero.
#[must_use]
pub fn round_sig2(value: Decimal) -> Decimal {
    if value.is_zero() {
        return Decimal::ZERO;
    }
    // Only fails on overflow, which cannot happen when discarding digits.
    value
        .round_sf_with_strategy(SIGNIFICANT_DIGITS, RoundingStrategy::ToZero)
        .unwrap_or(value)
}

/// Truncates `value` to [`RATE_DECIMALS`] fractional digits, toward zero.
#[must_use]
pub fn truncate_rate(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(RATE_DECIMALS, RoundingStrategy::ToZero)
}

/// Returns true if `value` carries no more than [`RATE_DECIMALS`] fractional digits.
#[must_use]
pub fn is_finalized(value: Decimal) -> bool {
    value.normalize().scale() <= RATE_DECIMALS
}
