//! Error types for date parsing and calendar validation.

/// Common error type for all fallible operations in this crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DateError {
    /// A date/time string that none of the supported formats accept.
    #[error("unrecognized date/time string: '{input}'")]
    Parse {
        /// The string that failed to parse.
        input: String,
        /// The error from the last format attempted.
        #[source]
        source: chrono::ParseError,
    },

    /// A month number outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u32,
    },

    /// A work schedule pattern with no work days in its cycle.
    #[error("work schedule pattern must include at least one work day per cycle")]
    EmptyWorkPattern,

    /// A calendar computation that left the representable year range.
    #[error("date out of range near year {year}")]
    OutOfRange {
        /// The year at which the computation fell out of range.
        year: i32,
    },
}
