//! Chart request parsing: birth date, hour bucket and timezone.
//!
//! Dates are ISO-8601 calendar dates (`YYYY-MM-DD`). The hour bucket is
//! one of the twelve two-hour windows (1 = Zi, 23:00–01:00); each bucket
//! is taken at its representative local hour `2·(b − 1)`, so bucket 1 means
//! 00:00 of the given date. Timezones are IANA names or fixed UTC offsets.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Offset, TimeDelta, TimeZone};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use ziwei_base::Branch;
use ziwei_time::{CivilTime, MAX_YEAR, MIN_YEAR};

use crate::error::ChartError;

/// Largest accepted UTC offset, in minutes.
const MAX_OFFSET_MINUTES: i32 = 14 * 60;

/// Step and number of steps used to walk back out of a daylight-saving gap.
const GAP_STEP_MINUTES: i64 = 30;
const MAX_GAP_STEPS: i64 = 48;

/// One of the twelve two-hour birth windows, 1..=12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct HourBucket(u8);

impl HourBucket {
    pub fn new(bucket: i64) -> Result<Self, ChartError> {
        if (1..=12).contains(&bucket) {
            Ok(Self(bucket as u8))
        } else {
            Err(ChartError::InvalidHourBucket(bucket))
        }
    }

    /// Bucket number 1..=12.
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Hour branch of the window (bucket 1 = Zi).
    pub const fn branch(self) -> Branch {
        Branch::from_index(self.0 - 1)
    }

    /// Local clock hour representing the window.
    pub const fn local_hour(self) -> u32 {
        2 * (self.0 as u32 - 1)
    }

    /// Clock range of the window, e.g. `23:00-01:00`.
    pub fn window(self) -> String {
        let start = (self.local_hour() + 23) % 24;
        format!("{start:02}:00-{:02}:00", (start + 2) % 24)
    }
}

impl TryFrom<u8> for HourBucket {
    type Error = ChartError;

    fn try_from(b: u8) -> Result<Self, Self::Error> {
        Self::new(b as i64)
    }
}

impl From<HourBucket> for u8 {
    fn from(b: HourBucket) -> Self {
        b.0
    }
}

/// Birth timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum TimeZoneSpec {
    /// Fixed offset east of UTC, in minutes.
    Fixed(i32),
    /// IANA zone; the offset follows its rules at the birth time.
    Named(Tz),
}

impl TimeZoneSpec {
    /// Parse `Z`, `UTC`, `UTC+8`, `GMT-03:30`, `+08:00`, `-0530` or an IANA name.
    pub fn parse(s: &str) -> Result<Self, ChartError> {
        let s = s.trim();
        if let Some(minutes) = parse_fixed_offset(s) {
            return Ok(Self::Fixed(minutes));
        }
        s.parse::<Tz>()
            .map(Self::Named)
            .map_err(|_| ChartError::UnknownTimezone(s.to_string()))
    }

    /// UTC offset in hours in force at a local date and hour.
    ///
    /// For a local time skipped by a daylight-saving jump the offset in
    /// force just before the jump is used; for a repeated local time the
    /// earlier one wins.
    pub fn offset_hours_at(&self, date: NaiveDate, hour: u32) -> Result<f64, ChartError> {
        match self {
            Self::Fixed(minutes) => Ok(*minutes as f64 / 60.0),
            Self::Named(tz) => {
                let local = date
                    .and_hms_opt(hour, 0, 0)
                    .ok_or_else(|| ChartError::InvalidDate(format!("{date} {hour:02}:00")))?;
                let offset = (0..=MAX_GAP_STEPS)
                    .find_map(|step| {
                        let earlier = local - TimeDelta::minutes(step * GAP_STEP_MINUTES);
                        tz.offset_from_local_datetime(&earlier).earliest()
                    })
                    .ok_or_else(|| {
                        ChartError::InvalidDate(format!("{date} {hour:02}:00 in {}", tz.name()))
                    })?;
                Ok(offset.fix().local_minus_utc() as f64 / 3600.0)
            }
        }
    }

    /// UTC offset in hours in force at a UTC instant.
    pub fn offset_hours_at_utc(&self, utc: NaiveDateTime) -> f64 {
        match self {
            Self::Fixed(minutes) => *minutes as f64 / 60.0,
            Self::Named(tz) => {
                tz.offset_from_utc_datetime(&utc).fix().local_minus_utc() as f64 / 3600.0
            }
        }
    }
}

/// Offset in minutes for the fixed-offset spellings, `None` otherwise.
fn parse_fixed_offset(s: &str) -> Option<i32> {
    let upper = s.to_ascii_uppercase();
    let rest = match upper.as_str() {
        "Z" | "UTC" | "GMT" => return Some(0),
        u => u
            .strip_prefix("UTC")
            .or_else(|| u.strip_prefix("GMT"))
            .unwrap_or(u),
    };
    let (sign, digits) = match rest.as_bytes().first()? {
        b'+' => (1, &rest[1..]),
        b'-' => (-1, &rest[1..]),
        _ => return None,
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit() || c == ':') {
        return None;
    }
    let (hours, minutes) = match digits.split_once(':') {
        Some((h, m)) if m.len() == 2 => (h, m),
        Some(_) => return None,
        None => match digits.len() {
            1 | 2 => (digits, "0"),
            3 | 4 => digits.split_at(digits.len() - 2),
            _ => return None,
        },
    };
    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    if minutes >= 60 {
        return None;
    }
    let total = hours * 60 + minutes;
    (total <= MAX_OFFSET_MINUTES).then_some(sign * total)
}

impl Display for TimeZoneSpec {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fixed(0) => f.write_str("UTC"),
            Self::Fixed(m) => {
                let sign = if *m < 0 { '-' } else { '+' };
                let a = m.abs();
                write!(f, "UTC{sign}{:02}:{:02}", a / 60, a % 60)
            }
            Self::Named(tz) => f.write_str(tz.name()),
        }
    }
}

impl FromStr for TimeZoneSpec {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<TimeZoneSpec> for String {
    fn from(tz: TimeZoneSpec) -> Self {
        tz.to_string()
    }
}

impl TryFrom<String> for TimeZoneSpec {
    type Error = ChartError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

/// Parse a `YYYY-MM-DD` date inside the supported range.
pub fn parse_date(s: &str) -> Result<NaiveDate, ChartError> {
    let date = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| ChartError::InvalidDate(format!("{s:?}: {e}")))?;
    if !(MIN_YEAR..=MAX_YEAR).contains(&date.year()) {
        return Err(ChartError::InvalidDate(format!(
            "{date} outside {MIN_YEAR}-01-01..={MAX_YEAR}-12-31"
        )));
    }
    Ok(date)
}

/// A validated chart request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChartRequest {
    pub date: NaiveDate,
    pub hour: HourBucket,
    pub timezone: TimeZoneSpec,
}

impl ChartRequest {
    /// Validate raw inputs.
    pub fn parse(date: &str, hour_bucket: i64, timezone: &str) -> Result<Self, ChartError> {
        Ok(Self {
            date: parse_date(date)?,
            hour: HourBucket::new(hour_bucket)?,
            timezone: TimeZoneSpec::parse(timezone)?,
        })
    }

    /// UTC offset in hours at the birth moment.
    pub fn offset_hours(&self) -> Result<f64, ChartError> {
        self.timezone
            .offset_hours_at(self.date, self.hour.local_hour())
    }

    /// Birth moment as local civil time.
    pub fn civil_time(&self) -> Result<CivilTime, ChartError> {
        let offset = self.offset_hours()?;
        Ok(CivilTime::new(
            self.date.year(),
            self.date.month(),
            self.date.day(),
            self.hour.local_hour(),
            0,
            0.0,
            offset,
        )?)
    }
}
