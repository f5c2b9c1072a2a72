//! Calendar conversions for chart generation.
//!
//! This crate provides:
//! - Julian Date ↔ Gregorian calendar conversions
//! - Civil (wall-clock) time at a fixed UTC offset
//! - Apparent solar longitude and the 24 solar terms
//! - New-moon instants and the Chinese lunisolar calendar

pub mod civil_time;
pub mod error;
pub mod julian;
pub mod lunar;
pub mod lunation;
pub mod solar;
pub mod util;

pub use civil_time::CivilTime;
pub use error::TimeError;
pub use julian::{
    J2000_JD, SECONDS_PER_DAY, calendar_to_jd, days_in_month, is_leap_year, jd_day_number,
    jd_to_calendar,
};
pub use lunar::{LeapMonthPolicy, LunarDate, MAX_YEAR, MIN_YEAR, lunar_from_solar};
pub use lunation::{SYNODIC_MONTH_DAYS, new_moon_day, new_moon_jd};
pub use solar::{
    ALL_SOLAR_TERMS, SolarTerm, SolarTermEvent, month_step_from_longitude, solar_longitude_deg,
    solar_term_from_longitude, solar_terms_for_year, sun_reaches_longitude,
};
pub use util::{normalize_360, normalize_pm180};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn civil_time_at_j2000() {
        let t = CivilTime::new(2000, 1, 1, 12, 0, 0.0, 0.0).unwrap();
        assert!((t.to_jd_ut() - J2000_JD).abs() < 1e-9);
    }

    #[test]
    fn lichun_opens_month_step_zero() {
        let jd = sun_reaches_longitude(SolarTerm::Lichun.longitude_deg(), J2000_JD + 34.0).unwrap();
        assert_eq!(month_step_from_longitude(solar_longitude_deg(jd + 0.01)), 0);
        assert_eq!(month_step_from_longitude(solar_longitude_deg(jd - 0.01)), 11);
    }
}
