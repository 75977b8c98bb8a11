//! Datemath - calendar arithmetic and date/time utilities
//!
//! This library provides a set of independent, pure date/time calculations
//! on top of chrono: timestamp conversion, calendar queries (quarters, leap
//! years, month lengths), period membership, weekday search (next Friday,
//! Friday the 13th), week numbers, weekend counting, and work-schedule
//! generation over a date range.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`parse`] - String to date/time parsing (multi-format)
//! * [`format`] - Date and time rendering
//! * [`query`] - Scalar/boolean derivations (timestamps, quarters, ...)
//! * [`period`] - Inclusive date/time ranges
//! * [`search`] - Next-weekday and week-number calculations
//! * [`schedule`] - Weekend counting and work-schedule generation
//!
//! Every function is stateless and safe to call concurrently; day-stepping
//! loops mutate only locally-owned copies, never caller values.

/// Fixed tables, conversion factors, and format strings
pub mod constants;

/// Error types for parsing and calendar validation
pub mod error;

/// Date and time rendering functions
pub mod format;

/// String to date/time parsing functions
pub mod parse;

/// Inclusive date/time periods
pub mod period;

/// Scalar and boolean derivations over date values
pub mod query;

/// Calendar search: weekday occurrences and week numbers
pub mod search;

/// Weekend counting and work-schedule generation
pub mod schedule;

// Re-export the core types for convenient access
pub use error::DateError;
pub use period::Period;
