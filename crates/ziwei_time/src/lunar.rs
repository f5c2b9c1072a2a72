//! Chinese lunisolar calendar.
//!
//! A lunar month begins on the civil day holding a new moon. Month 11 is
//! the month containing the winter solstice (270°). When thirteen new moons
//! separate two consecutive month-11 starts, the first month that contains
//! no principal term (a multiple of 30° of solar longitude) is intercalary
//! and repeats the number of the month before it.
//!
//! All day arithmetic is in Julian Day Numbers of civil days at a fixed
//! UTC offset; the traditional calendar uses UTC+8.

use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::julian::{days_in_month, jd_day_number};
use crate::lunation::{LUNATION_EPOCH_JD, SYNODIC_MONTH_DAYS, lunation_before, new_moon_day};
use crate::solar::solar_longitude_deg;

/// First civil year the calendar is computed for.
pub const MIN_YEAR: i32 = 1901;
/// Last civil year the calendar is computed for.
pub const MAX_YEAR: i32 = 2099;

/// JD of the lunation epoch's civil day.
const EPOCH_DAY: i64 = 2_415_021;

/// A date in the lunisolar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LunarDate {
    /// Lunar year, numbered by the civil year in which it begins.
    pub year: i32,
    /// Month number 1..=12 (a leap month repeats the previous number).
    pub month: u8,
    /// Day of month 1..=30.
    pub day: u8,
    /// Whether `month` is the intercalary repeat.
    pub is_leap: bool,
}

/// How a leap-month date is folded into a regular month number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeapMonthPolicy {
    /// Days 1–15 count as the base month, days 16+ as the next month.
    #[default]
    SplitAtMidMonth,
    /// The whole leap month counts as the base month.
    AsBaseMonth,
    /// The whole leap month counts as the next month.
    AsNextMonth,
}

const MONTH_GLYPHS: [&str; 12] = [
    "正月", "二月", "三月", "四月", "五月", "六月", "七月", "八月", "九月", "十月", "冬月", "腊月",
];

const DAY_TENS: [&str; 4] = ["初", "十", "廿", "三"];
const DAY_UNITS: [&str; 10] = ["一", "二", "三", "四", "五", "六", "七", "八", "九", "十"];

impl LunarDate {
    /// Month number used for chart placement after applying the leap policy.
    ///
    /// Non-leap dates return `month` unchanged; rolling past month 12 wraps to 1.
    pub fn effective_month(&self, policy: LeapMonthPolicy) -> u8 {
        if !self.is_leap {
            return self.month;
        }
        let roll = match policy {
            LeapMonthPolicy::SplitAtMidMonth => self.day >= 16,
            LeapMonthPolicy::AsBaseMonth => false,
            LeapMonthPolicy::AsNextMonth => true,
        };
        if roll { self.month % 12 + 1 } else { self.month }
    }

    /// Traditional month name, e.g. `闰二月` or `腊月`.
    pub fn month_glyph(&self) -> String {
        let name = MONTH_GLYPHS[(self.month as usize + 11) % 12];
        if self.is_leap {
            format!("闰{name}")
        } else {
            name.to_string()
        }
    }

    /// Traditional day name, e.g. `初五`, `廿三`, `三十`.
    pub fn day_glyph(&self) -> String {
        match self.day {
            10 => "初十".to_string(),
            20 => "二十".to_string(),
            30 => "三十".to_string(),
            d => {
                let d = d as usize;
                format!("{}{}", DAY_TENS[d / 10], DAY_UNITS[(d % 10).max(1) - 1])
            }
        }
    }
}

impl std::fmt::Display for LunarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.month_glyph(), self.day_glyph())
    }
}

/// Index (0..12) of the 30° sector the Sun occupies at the start of a civil day.
fn sun_sector_at_day_start(day_number: i64, offset_hours: f64) -> u8 {
    let jd_ut = day_number as f64 - 0.5 - offset_hours / 24.0;
    (solar_longitude_deg(jd_ut) / 30.0).floor() as u8
}

/// Civil day on which month 11 (holding the winter solstice) of `year` starts.
fn month_eleven_start(year: i32, offset_hours: f64) -> i64 {
    let days = jd_day_number(year, 12, 31) - EPOCH_DAY;
    let k = (days as f64 / SYNODIC_MONTH_DAYS).floor() as i64;
    let nm = new_moon_day(k, offset_hours);
    // New moon already past the solstice: the month started one lunation earlier.
    if sun_sector_at_day_start(nm, offset_hours) >= 9 {
        new_moon_day(k - 1, offset_hours)
    } else {
        nm
    }
}

/// Months after month 11 at which the leap month falls, for a 13-month year.
fn leap_month_offset(month_eleven: i64, offset_hours: f64) -> i64 {
    let k = ((month_eleven as f64 - LUNATION_EPOCH_JD) / SYNODIC_MONTH_DAYS + 0.5).floor() as i64;
    let mut i = 1;
    let mut arc = sun_sector_at_day_start(new_moon_day(k + i, offset_hours), offset_hours);
    loop {
        let last = arc;
        i += 1;
        arc = sun_sector_at_day_start(new_moon_day(k + i, offset_hours), offset_hours);
        if arc == last || i >= 14 {
            break;
        }
    }
    i - 1
}

/// Convert a Gregorian civil date to the lunisolar calendar.
///
/// `offset_hours` fixes the meridian on which new moons are assigned to
/// civil days (8.0 for the traditional calendar).
pub fn lunar_from_solar(
    year: i32,
    month: u32,
    day: u32,
    offset_hours: f64,
) -> Result<LunarDate, TimeError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(TimeError::OutOfRange(year));
    }
    if !days_in_month(year, month).is_some_and(|n| (1..=n).contains(&day)) {
        return Err(TimeError::InvalidDate { year, month, day });
    }

    let day_number = jd_day_number(year, month, day);
    // True new moons stray up to ~14 h from the mean, so step back until
    // the month start is not after the requested day.
    let mut k = lunation_before(day_number as f64) + 1;
    let mut month_start = new_moon_day(k, offset_hours);
    while month_start > day_number {
        k -= 1;
        month_start = new_moon_day(k, offset_hours);
    }

    let (mut lunar_year, a11, b11) = {
        let this_eleven = month_eleven_start(year, offset_hours);
        if this_eleven >= month_start {
            (year, month_eleven_start(year - 1, offset_hours), this_eleven)
        } else {
            (year + 1, this_eleven, month_eleven_start(year + 1, offset_hours))
        }
    };

    let lunar_day = day_number - month_start + 1;
    let diff = (month_start - a11) / 29;
    let mut is_leap = false;
    let mut lunar_month = diff + 11;
    if b11 - a11 > 365 {
        let leap_diff = leap_month_offset(a11, offset_hours);
        if diff >= leap_diff {
            lunar_month = diff + 10;
            is_leap = diff == leap_diff;
        }
    }
    if lunar_month > 12 {
        lunar_month -= 12;
    }
    if lunar_month >= 11 && diff < 4 {
        lunar_year -= 1;
    }

    if !(1..=30).contains(&lunar_day) || !(1..=12).contains(&lunar_month) {
        return Err(TimeError::NoConvergence("lunar month boundaries"));
    }

    Ok(LunarDate {
        year: lunar_year,
        month: lunar_month as u8,
        day: lunar_day as u8,
        is_leap,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leap(month: u8, day: u8) -> LunarDate {
        LunarDate {
            year: 2023,
            month,
            day,
            is_leap: true,
        }
    }

    #[test]
    fn split_policy_day_15_stays() {
        assert_eq!(leap(2, 15).effective_month(LeapMonthPolicy::SplitAtMidMonth), 2);
    }

    #[test]
    fn split_policy_day_16_rolls_forward() {
        assert_eq!(leap(2, 16).effective_month(LeapMonthPolicy::SplitAtMidMonth), 3);
    }

    #[test]
    fn split_policy_wraps_december() {
        assert_eq!(leap(12, 20).effective_month(LeapMonthPolicy::SplitAtMidMonth), 1);
    }

    #[test]
    fn other_policies() {
        assert_eq!(leap(4, 28).effective_month(LeapMonthPolicy::AsBaseMonth), 4);
        assert_eq!(leap(4, 2).effective_month(LeapMonthPolicy::AsNextMonth), 5);
    }

    #[test]
    fn non_leap_ignores_policy() {
        let d = LunarDate {
            year: 2023,
            month: 7,
            day: 25,
            is_leap: false,
        };
        assert_eq!(d.effective_month(LeapMonthPolicy::SplitAtMidMonth), 7);
        assert_eq!(d.effective_month(LeapMonthPolicy::AsNextMonth), 7);
    }

    #[test]
    fn glyphs() {
        let d = LunarDate {
            year: 1989,
            month: 12,
            day: 5,
            is_leap: false,
        };
        assert_eq!(d.to_string(), "腊月初五");
        assert_eq!(leap(2, 1).to_string(), "闰二月初一");
        assert_eq!(leap(1, 10).day_glyph(), "初十");
        assert_eq!(leap(1, 11).day_glyph(), "十一");
        assert_eq!(leap(1, 20).day_glyph(), "二十");
        assert_eq!(leap(1, 23).day_glyph(), "廿三");
        assert_eq!(leap(1, 30).day_glyph(), "三十");
        assert_eq!(leap(11, 3).month_glyph(), "闰冬月");
    }

    #[test]
    fn rejects_out_of_range_year() {
        assert_eq!(lunar_from_solar(1850, 1, 1, 8.0), Err(TimeError::OutOfRange(1850)));
    }

    #[test]
    fn rejects_impossible_day() {
        assert!(matches!(
            lunar_from_solar(2023, 4, 31, 8.0),
            Err(TimeError::InvalidDate { .. })
        ));
    }
}
