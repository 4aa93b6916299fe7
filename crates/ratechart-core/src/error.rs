//! Error types for the Ratechart library.
//!
//! This module defines the error types used throughout Ratechart,
//! providing structured error handling with context.

use thiserror::Error;

/// A specialized Result type for Ratechart operations.
pub type RateChartResult<T> = Result<T, RateChartError>;

/// The main error type for Ratechart operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RateChartError {
    /// Invalid date string or inverted date range.
    #[error("Malformed date: {message}")]
    MalformedDate {
        /// Description of the date error.
        message: String,
    },

    /// Holiday data could not be fetched or parsed.
    #[error("Holiday source error: {reason}")]
    HolidaySource {
        /// Description of what went wrong.
        reason: String,
    },

    /// A divisor resolved to zero where a division is required.
    #[error("Degenerate division: {what} is zero")]
    DivisionDegenerate {
        /// The quantity that resolved to zero.
        what: String,
    },

    /// Configuration error.
    #[error("Configuration error: {reason}")]
    ConfigError {
        /// Description of the configuration error.
        reason: String,
    },

    /// Chart generation did not complete.
    #[error("Internal error: {reason}")]
    Internal {
        /// Description of the failure.
        reason: String,
    },
}

impl RateChartError {
    /// Creates a malformed date error.
    #[must_use]
    pub fn malformed_date(message: impl Into<String>) -> Self {
        Self::MalformedDate {
            message: message.into(),
        }
    }

    /// Creates a holiday source error.
    #[must_use]
    pub fn holiday_source(reason: impl Into<String>) -> Self {
        Self::HolidaySource {
            reason: reason.into(),
        }
    }

    /// Creates a degenerate division error.
    #[must_use]
    pub fn division_degenerate(what: impl Into<String>) -> Self {
        Self::DivisionDegenerate { what: what.into() }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config_error(reason: impl Into<String>) -> Self {
        Self::ConfigError {
            reason: reason.into(),
        }
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(reason: impl Into<String>) -> Self {
        Self::Internal {
            reason: reason.into(),
        }
    }
}
