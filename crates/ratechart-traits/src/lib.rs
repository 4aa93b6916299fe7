//! # Ratechart Traits
//!
//! Trait definitions for Ratechart's external data sources.
//!
//! This crate contains ONLY trait definitions with no runtime dependencies.
//! Implementations live in extension crates such as `ratechart-ext-http`.
//!
//! ## Module Structure
//!
//! - [`holidays`]: Traits for public holiday sources
//! - [`error`]: The error type shared by all sources

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod holidays;

// Re-export commonly used types
pub use error::TraitError;
pub use holidays::HolidaySource;
