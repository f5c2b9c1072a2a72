//! Julian Date ↔ Gregorian calendar conversions.
//!
//! Standard civil-calendar formulas (Meeus, *Astronomical Algorithms*, ch. 7).
//! January and February are counted as months 13 and 14 of the prior year
//! so the Gregorian leap-day term falls at the end of the computational year.

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds in one day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Convert a Gregorian calendar date to a Julian Date.
///
/// `day_frac` carries the time of day, e.g. `1.5` is noon on the 1st.
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let a = (y as f64 / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y as f64 + 4716.0)).floor() + (30.6001 * (m as f64 + 1.0)).floor() + day_frac + b
        - 1524.5
}

/// Convert a Julian Date back to `(year, month, day_frac)`.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let z = (jd + 0.5).floor();
    let f = jd + 0.5 - z;
    let a = if z < 2_299_161.0 {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();
    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };
    (year as i32, month as u32, day)
}

/// Integer Julian Day Number of a civil date (the JD at noon of that day).
pub fn jd_day_number(year: i32, month: u32, day: u32) -> i64 {
    (calendar_to_jd(year, month, day as f64) + 0.5).floor() as i64
}

/// Whether `year` is a Gregorian leap year.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a Gregorian month, or `None` for a month outside 1..=12.
pub const fn days_in_month(year: i32, month: u32) -> Option<u32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 if is_leap_year(year) => Some(29),
        2 => Some(28),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_noon() {
        assert!((calendar_to_jd(2000, 1, 1.5) - J2000_JD).abs() < 1e-9);
    }

    #[test]
    fn sputnik_launch() {
        // Meeus example 7.a: 1957 Oct 4.81 = JD 2436116.31
        assert!((calendar_to_jd(1957, 10, 4.81) - 2_436_116.31).abs() < 1e-6);
    }

    #[test]
    fn inverse_of_calendar_to_jd() {
        let (y, m, d) = jd_to_calendar(2_436_116.31);
        assert_eq!((y, m), (1957, 10));
        assert!((d - 4.81).abs() < 1e-6);
    }

    #[test]
    fn day_number_of_j2000() {
        assert_eq!(jd_day_number(2000, 1, 1), 2_451_545);
        assert_eq!(jd_day_number(1900, 1, 1), 2_415_021);
    }

    #[test]
    fn february_lengths() {
        assert_eq!(days_in_month(2000, 2), Some(29));
        assert_eq!(days_in_month(1900, 2), Some(28));
        assert_eq!(days_in_month(2024, 2), Some(29));
        assert_eq!(days_in_month(2023, 13), None);
    }
}
