//! Four Pillars (Bazi): year, month, day and hour sexagenary pairs.
//!
//! - Year and month pillars follow solar longitude: the year turns at
//!   Lichun (315°) and the month every 30° after it.
//! - The day pillar is a continuous 60-day count from the Julian Day Number.
//! - The hour pillar follows the two-hour branch windows, Zi spanning
//!   23:00–01:00.

use serde::{Deserialize, Serialize};
use ziwei_time::{CivilTime, jd_day_number, month_step_from_longitude, solar_longitude_deg};

use crate::ganzhi::{Branch, GanZhi, Stem, ganzhi_from_year};

/// Calibration so that JDN 2451545 (2000-01-01) maps to WuWu (54).
pub const DAY_CYCLE_OFFSET: i64 = 49;

/// The four pillars of a birth moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bazi {
    pub year: GanZhi,
    pub month: GanZhi,
    pub day: GanZhi,
    pub hour: GanZhi,
}

impl Bazi {
    /// The four pillars in year, month, day, hour order.
    pub fn pillars(&self) -> [GanZhi; 4] {
        [self.year, self.month, self.day, self.hour]
    }
}

impl std::fmt::Display for Bazi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} {}", self.year, self.month, self.day, self.hour)
    }
}

/// Civil year adjusted for the Lichun boundary.
///
/// January/February moments before the Sun reaches 315° still belong to the
/// previous sexagenary year.
pub fn bazi_year(civil_year: i32, civil_month: u32, solar_lon_deg: f64) -> i32 {
    if civil_month <= 2 && (270.0..315.0).contains(&solar_lon_deg) {
        civil_year - 1
    } else {
        civil_year
    }
}

/// Year pillar for an (already adjusted) sexagenary year.
pub fn year_pillar(bazi_year: i32) -> GanZhi {
    ganzhi_from_year(bazi_year)
}

/// Stem of the first (Yin) month for a year stem, by the Five Tigers rule.
pub const fn first_month_stem(year_stem: Stem) -> Stem {
    Stem::from_index((year_stem.index() % 5) * 2 + 2)
}

/// Month pillar from the year stem and solar longitude.
pub fn month_pillar(year_stem: Stem, solar_lon_deg: f64) -> GanZhi {
    let step = month_step_from_longitude(solar_lon_deg);
    GanZhi {
        stem: first_month_stem(year_stem).offset(step as i32),
        branch: Branch::Yin.offset(step as i32),
    }
}

/// Day pillar for a civil date.
pub fn day_pillar(year: i32, month: u32, day: u32) -> GanZhi {
    let jdn = jd_day_number(year, month, day);
    GanZhi::from_cycle_index((jdn + DAY_CYCLE_OFFSET).rem_euclid(60) as u8)
}

/// Branch of the two-hour window containing a clock hour (0..=23).
pub const fn hour_branch(hour: u32) -> Branch {
    Branch::from_index((((hour + 1) / 2) % 12) as u8)
}

/// Stem of the Zi hour for a day stem, by the Five Rats rule.
pub const fn zi_hour_stem(day_stem: Stem) -> Stem {
    Stem::from_index((day_stem.index() % 5) * 2)
}

/// Hour pillar from the day stem and clock hour.
pub fn hour_pillar(day_stem: Stem, hour: u32) -> GanZhi {
    let branch = hour_branch(hour);
    GanZhi {
        stem: zi_hour_stem(day_stem).offset(branch.index() as i32),
        branch,
    }
}

/// Compute all four pillars for a civil moment.
///
/// The day pillar uses the local civil date; year and month pillars use the
/// solar longitude at the corresponding UT instant.
pub fn compute_bazi(t: &CivilTime) -> Bazi {
    let lon = solar_longitude_deg(t.to_jd_ut());
    let year = year_pillar(bazi_year(t.year, t.month, lon));
    let month = month_pillar(year.stem, lon);
    let day = day_pillar(t.year, t.month, t.day);
    let hour = hour_pillar(day.stem, t.hour);
    Bazi {
        year,
        month,
        day,
        hour,
    }
}
