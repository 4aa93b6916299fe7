//! Chart point type.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Date;

/// One point of a generated profit-rate series.
///
/// Serialized as `{"x": "YYYYMMDD", "y": 1.23}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Business day the rate applies to.
    #[serde(rename = "x")]
    pub date: Date,
    /// Cumulative profit rate in percent.
    #[serde(rename = "y")]
    pub rate: Decimal,
}

impl ChartPoint {
    /// Creates a new chart point.
    #[must_use]
    pub fn new(date: Date, rate: Decimal) -> Self {
        Self { date, rate }
    }
}

impl fmt::Display for ChartPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.date, self.rate)
    }
}
