//! Error types for calendar conversions.

use thiserror::Error;

/// Errors from Julian Day, solar-term, or lunisolar calendar computation.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Calendar date does not exist (e.g. February 30).
    #[error("invalid calendar date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Date is outside the range the lunisolar tables are computed for.
    #[error("year {0} outside supported range 1901..=2099")]
    OutOfRange(i32),
    /// UTC offset is not within -14h..=+14h.
    #[error("UTC offset {0} h out of range")]
    InvalidOffset(f64),
    /// Iterative search did not converge.
    #[error("no convergence: {0}")]
    NoConvergence(&'static str),
}
