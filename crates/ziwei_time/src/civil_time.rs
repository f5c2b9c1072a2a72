//! Local civil date/time at a fixed UTC offset.
//!
//! Provides `CivilTime`, the canonical wall-clock representation used
//! throughout the engine. Conversion to/from Julian Date (UT) applies the
//! offset; no leap-second or ΔT handling is needed at chart precision.

use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::julian::{calendar_to_jd, days_in_month, jd_to_calendar};

/// Largest accepted magnitude of a UTC offset, in hours.
pub const MAX_OFFSET_HOURS: f64 = 14.0;

/// Local calendar date/time with the UTC offset in force at that moment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CivilTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
    /// Hours east of UTC (e.g. `8.0` for China Standard Time).
    pub offset_hours: f64,
}

impl CivilTime {
    /// Build a civil time, validating the calendar fields and the offset.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
        offset_hours: f64,
    ) -> Result<Self, TimeError> {
        let valid_day = days_in_month(year, month).is_some_and(|n| (1..=n).contains(&day));
        if !valid_day || hour > 23 || minute > 59 || !(0.0..60.0).contains(&second) {
            return Err(TimeError::InvalidDate { year, month, day });
        }
        if !offset_hours.is_finite() || offset_hours.abs() > MAX_OFFSET_HOURS {
            return Err(TimeError::InvalidOffset(offset_hours));
        }
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            offset_hours,
        })
    }

    /// Convert to a Julian Date in UT by removing the UTC offset.
    pub fn to_jd_ut(&self) -> f64 {
        let day_frac = self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second / 86_400.0;
        calendar_to_jd(self.year, self.month, day_frac) - self.offset_hours / 24.0
    }

    /// Convert a Julian Date (UT) to wall-clock time at `offset_hours`.
    pub fn from_jd_ut(jd_ut: f64, offset_hours: f64) -> Self {
        let (year, month, day_frac) = jd_to_calendar(jd_ut + offset_hours / 24.0);
        let day = day_frac.floor() as u32;
        let total_seconds = day_frac.fract() * 86_400.0;
        let hour = (total_seconds / 3600.0).floor() as u32;
        let minute = ((total_seconds % 3600.0) / 60.0).floor() as u32;
        let second = total_seconds % 60.0;
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            offset_hours,
        }
    }
}

impl std::fmt::Display for CivilTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let offset_minutes = (self.offset_hours * 60.0).round() as i32;
        let sign = if offset_minutes < 0 { '-' } else { '+' };
        let abs = offset_minutes.abs();
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}{}{:02}:{:02}",
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second.floor() as u32,
            sign,
            abs / 60,
            abs % 60
        )
    }
}
