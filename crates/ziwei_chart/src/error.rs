//! Error type for chart generation.

use thiserror::Error;
use ziwei_base::BaseError;
use ziwei_time::TimeError;

/// Errors from input parsing or chart assembly.
///
/// Generation either returns a complete chart or one of these; there is no
/// partial result.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ChartError {
    /// Unparseable date or a date outside 1901-01-01..=2099-12-31.
    #[error("invalid date: {0}")]
    InvalidDate(String),
    /// Hour bucket outside 1..=12.
    #[error("invalid hour bucket {0}: expected 1..=12")]
    InvalidHourBucket(i64),
    /// Neither an IANA zone name nor a UTC offset.
    #[error("unknown timezone: {0:?}")]
    UnknownTimezone(String),
    /// A sexagenary or placement table was indexed outside its domain.
    #[error(transparent)]
    Base(#[from] BaseError),
    /// Calendar conversion failed.
    #[error(transparent)]
    Time(#[from] TimeError),
    /// JSON encoding failed.
    #[error("serialization failed: {0}")]
    Serialize(String),
}

impl ChartError {
    /// Whether the error was caused by caller input rather than a defect.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidDate(_)
                | Self::InvalidHourBucket(_)
                | Self::UnknownTimezone(_)
                | Self::Time(TimeError::OutOfRange(_) | TimeError::InvalidDate { .. })
        )
    }
}

impl From<serde_json::Error> for ChartError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialize(e.to_string())
    }
}
