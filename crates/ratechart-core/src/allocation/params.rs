//! Allocation parameters.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{RateChartError, RateChartResult};

/// Constants shaping the random allocation.
///
/// With `u` uniform on `[0, 1)`:
///
/// - target rate = `(u + random_offset) * target_multiplier - target_shift`
/// - variation = `(u + random_offset) * variation_range`
///
/// The defaults give a target in `[2.5, 13.5)` and a variation in `[1.5, 4.5)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllocationParams {
    /// Offset added to every uniform draw.
    pub random_offset: Decimal,
    /// Scale applied to the target draw.
    pub target_multiplier: Decimal,
    /// Amount subtracted from the scaled target draw.
    pub target_shift: Decimal,
    /// Scale applied to each monthly and daily variation draw.
    pub variation_range: Decimal,
}

impl Default for AllocationParams {
    fn default() -> Self {
        Self {
            random_offset: Decimal::new(5, 1),
            target_multiplier: Decimal::from(11),
            target_shift: Decimal::from(3),
            variation_range: Decimal::from(3),
        }
    }
}

impl AllocationParams {
    /// Half-open `[low, high)` bounds of the target rate.
    #[must_use]
    pub fn target_bounds(&self) -> (Decimal, Decimal) {
        (
            self.random_offset * self.target_multiplier - self.target_shift,
            (Decimal::ONE + self.random_offset) * self.target_multiplier - self.target_shift,
        )
    }

    /// Half-open `[low, high)` bounds of a variation draw, before rounding.
    #[must_use]
    pub fn variation_bounds(&self) -> (Decimal, Decimal) {
        (
            self.random_offset * self.variation_range,
            (Decimal::ONE + self.random_offset) * self.variation_range,
        )
    }

    /// Checks that every scale is positive and the offset is non-negative.
    pub fn validate(&self) -> RateChartResult<()> {
        if self.random_offset.is_sign_negative() {
            return Err(RateChartError::config_error(format!(
                "random_offset must be non-negative, got {}",
                self.random_offset
            )));
        }
        if self.target_multiplier <= Decimal::ZERO {
            return Err(RateChartError::config_error(format!(
                "target_multiplier must be positive, got {}",
                self.target_multiplier
            )));
        }
        if self.variation_range <= Decimal::ZERO {
            return Err(RateChartError::config_error(format!(
                "variation_range must be positive, got {}",
                self.variation_range
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_bounds() {
        let params = AllocationParams::default();
        assert_eq!(params.target_bounds(), (dec!(2.5), dec!(13.5)));
        assert_eq!(params.variation_bounds(), (dec!(1.5), dec!(4.5)));
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_positive_scale() {
        let params = AllocationParams {
            variation_range: dec!(0),
            ..AllocationParams::default()
        };
        assert!(params.validate().is_err());

        let params = AllocationParams {
            target_multiplier: dec!(-1),
            ..AllocationParams::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let params: AllocationParams = serde_json::from_str(r#"{"variation_range": 2}"#).unwrap();
        assert_eq!(params.variation_range, dec!(2));
        assert_eq!(params.target_multiplier, dec!(11));
    }
}
