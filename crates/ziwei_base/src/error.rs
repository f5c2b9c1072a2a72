//! Error types for sexagenary and placement calculations.

use thiserror::Error;
use ziwei_time::TimeError;

/// Errors from Bazi, palace, Ju, or star-placement calculations.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum BaseError {
    /// An index fell outside a lookup table's domain. Never expected for
    /// validated inputs; indicates a programming or data-integrity defect.
    #[error("table lookup out of domain: {0}")]
    TableLookup(String),
    /// Lunar date or month value outside 1..=12 / 1..=30.
    #[error("invalid lunar value: {0}")]
    InvalidLunar(String),
    /// Error from calendar conversion.
    #[error("time error: {0}")]
    Time(#[from] TimeError),
}
