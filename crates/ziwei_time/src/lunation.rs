//! New-moon instants.
//!
//! Lunation `k` counts mean synodic months from the new moon of
//! 1900-01-01. The instant is the mean conjunction plus the largest
//! periodic terms in the Sun's and Moon's anomalies and the Moon's
//! argument of latitude, minus ΔT. Accuracy is a few minutes, which is
//! enough to decide the civil day of each new moon.

/// Mean synodic month in days.
pub const SYNODIC_MONTH_DAYS: f64 = 29.530_588_853;

/// Julian Date of the mean new moon used as lunation 0.
pub const LUNATION_EPOCH_JD: f64 = 2_415_021.076_998_695;

/// Julian Date (UT) of new moon number `k`.
pub fn new_moon_jd(k: i64) -> f64 {
    let k = k as f64;
    let t = k / 1236.85;
    let t2 = t * t;
    let t3 = t2 * t;
    let dr = std::f64::consts::PI / 180.0;

    let mut jd = 2_415_020.759_33 + 29.530_588_68 * k + 0.000_117_8 * t2 - 0.000_000_155 * t3;
    jd += 0.000_33 * ((166.56 + 132.87 * t - 0.009_173 * t2) * dr).sin();

    // Sun's mean anomaly, Moon's mean anomaly, Moon's argument of latitude
    let m = (359.2242 + 29.105_356_08 * k - 0.000_033_3 * t2 - 0.000_003_47 * t3) * dr;
    let mpr = (306.0253 + 385.816_918_06 * k + 0.010_730_6 * t2 + 0.000_012_36 * t3) * dr;
    let f = (21.2964 + 390.670_506_46 * k - 0.001_652_8 * t2 - 0.000_002_39 * t3) * dr;

    let c1 = (0.1734 - 0.000_393 * t) * m.sin() + 0.0021 * (2.0 * m).sin()
        - 0.4068 * mpr.sin()
        + 0.0161 * (2.0 * mpr).sin()
        - 0.0004 * (3.0 * mpr).sin()
        + 0.0104 * (2.0 * f).sin()
        - 0.0051 * (m + mpr).sin()
        - 0.0074 * (m - mpr).sin()
        + 0.0004 * (2.0 * f + m).sin()
        - 0.0004 * (2.0 * f - m).sin()
        - 0.0006 * (2.0 * f + mpr).sin()
        + 0.0010 * (2.0 * f - mpr).sin()
        + 0.0005 * (2.0 * mpr + m).sin();

    let delta_t = if t < -11.0 {
        0.001 + 0.000_839 * t + 0.000_226_1 * t2 - 0.000_008_45 * t3 - 0.000_000_081 * t * t3
    } else {
        -0.000_278 + 0.000_265 * t + 0.000_262 * t2
    };

    jd + c1 - delta_t
}

/// Julian Day Number of the civil day (at `offset_hours`) holding new moon `k`.
pub fn new_moon_day(k: i64, offset_hours: f64) -> i64 {
    (new_moon_jd(k) + 0.5 + offset_hours / 24.0).floor() as i64
}

/// Index of the last lunation whose mean instant precedes `jd`.
pub fn lunation_before(jd: f64) -> i64 {
    ((jd - LUNATION_EPOCH_JD) / SYNODIC_MONTH_DAYS).floor() as i64
}
