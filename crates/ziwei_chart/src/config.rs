//! Chart generation options.

use serde::{Deserialize, Serialize};
use ziwei_time::LeapMonthPolicy;

/// Which boundary starts the chart year used for year-keyed stars, Sihua
/// and palace stems. The Bazi year pillar always turns at Lichun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YearBoundary {
    /// The Sun reaching 315° (Lichun).
    #[default]
    SolarTerm,
    /// The first day of the lunar year.
    LunarNewYear,
}

/// Configuration for chart generation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Year boundary for the chart year.
    pub year_boundary: YearBoundary,
    /// How leap-month dates map to a month number.
    pub leap_month: LeapMonthPolicy,
    /// UTC offset (hours) on which lunar months are reckoned. `None` uses
    /// the birth timezone's offset.
    pub calendar_offset_hours: Option<f64>,
}

impl ChartConfig {
    pub fn with_year_boundary(mut self, year_boundary: YearBoundary) -> Self {
        self.year_boundary = year_boundary;
        self
    }

    pub fn with_leap_month(mut self, leap_month: LeapMonthPolicy) -> Self {
        self.leap_month = leap_month;
        self
    }

    /// Reckon lunar months at a fixed offset, e.g. `8.0` for the
    /// traditional China Standard Time calendar.
    pub fn with_calendar_offset(mut self, offset_hours: f64) -> Self {
        self.calendar_offset_hours = Some(offset_hours);
        self
    }

    /// Offset used for the lunar calendar given the birth offset.
    pub fn calendar_offset(&self, birth_offset_hours: f64) -> f64 {
        self.calendar_offset_hours.unwrap_or(birth_offset_hours)
    }
}
