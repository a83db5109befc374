use thiserror::Error;

/// Errors raised when building the engine's value types from text or
/// out-of-range numbers.
///
/// The streak math itself never fails; these only surface at the edges,
/// when a caller hands in something that is not a valid day, frame or month.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid calendar day '{input}', expected YYYY-MM-DD")]
    InvalidDay { input: String },

    #[error("invalid timestamp '{input}': {reason}")]
    InvalidTimestamp { input: String, reason: String },

    #[error("invalid time zone '{input}', expected utc, local or an offset like +02:00")]
    InvalidFrame { input: String },

    #[error("invalid month {year}-{month:02}")]
    InvalidMonth { year: i32, month: u32 },
}
