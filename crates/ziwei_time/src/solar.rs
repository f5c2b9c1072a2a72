//! Apparent solar longitude and the 24 solar terms.
//!
//! The Sun's ecliptic longitude is computed with the low-precision
//! mean-longitude / equation-of-center model, accurate to roughly 0.01°
//! (a quarter of an hour of solar motion) over 1900–2100. That is enough to
//! place solar-term boundaries for month and year pillars.
//!
//! Solar terms occur every 15°. Term index 0 is Lichun (315°), which opens
//! the first month of the sexagenary year. Even-indexed terms are the
//! sectional terms (jie) that open months; odd-indexed ones are the
//! principal terms (zhongqi, multiples of 30°) used by the lunar calendar.

use serde::{Deserialize, Serialize};

use crate::civil_time::CivilTime;
use crate::error::TimeError;
use crate::julian::{J2000_JD, calendar_to_jd};
use crate::util::{normalize_360, normalize_pm180};

/// Mean daily motion of the Sun in longitude (deg/day).
pub const MEAN_DAILY_MOTION_DEG: f64 = 0.985_647_4;

/// Longitude at which the sexagenary year begins (Lichun).
pub const YEAR_START_LONGITUDE_DEG: f64 = 315.0;

/// Span of one solar term in degrees.
pub const TERM_SPAN_DEG: f64 = 15.0;

const MAX_ITERATIONS: usize = 50;
const CONVERGENCE_DEG: f64 = 1e-7;

/// Apparent geocentric ecliptic longitude of the Sun, degrees in [0, 360).
pub fn solar_longitude_deg(jd_ut: f64) -> f64 {
    let d = jd_ut - J2000_JD;
    let mean_lon = 280.460 + MEAN_DAILY_MOTION_DEG * d;
    let g = (357.528 + 0.985_600_3 * d).to_radians();
    normalize_360(mean_lon + 1.915 * g.sin() + 0.020 * (2.0 * g).sin())
}

/// The 24 solar terms, starting at Lichun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum SolarTerm {
    Lichun,
    Yushui,
    Jingzhe,
    Chunfen,
    Qingming,
    Guyu,
    Lixia,
    Xiaoman,
    Mangzhong,
    Xiazhi,
    Xiaoshu,
    Dashu,
    Liqiu,
    Chushu,
    Bailu,
    Qiufen,
    Hanlu,
    Shuangjiang,
    Lidong,
    Xiaoxue,
    Daxue,
    Dongzhi,
    Xiaohan,
    Dahan,
}

/// All 24 terms in order (index 0 = Lichun).
pub const ALL_SOLAR_TERMS: [SolarTerm; 24] = [
    SolarTerm::Lichun,
    SolarTerm::Yushui,
    SolarTerm::Jingzhe,
    SolarTerm::Chunfen,
    SolarTerm::Qingming,
    SolarTerm::Guyu,
    SolarTerm::Lixia,
    SolarTerm::Xiaoman,
    SolarTerm::Mangzhong,
    SolarTerm::Xiazhi,
    SolarTerm::Xiaoshu,
    SolarTerm::Dashu,
    SolarTerm::Liqiu,
    SolarTerm::Chushu,
    SolarTerm::Bailu,
    SolarTerm::Qiufen,
    SolarTerm::Hanlu,
    SolarTerm::Shuangjiang,
    SolarTerm::Lidong,
    SolarTerm::Xiaoxue,
    SolarTerm::Daxue,
    SolarTerm::Dongzhi,
    SolarTerm::Xiaohan,
    SolarTerm::Dahan,
];

const TERM_GLYPHS: [&str; 24] = [
    "立春", "雨水", "惊蛰", "春分", "清明", "谷雨", "立夏", "小满", "芒种", "夏至", "小暑", "大暑",
    "立秋", "处暑", "白露", "秋分", "寒露", "霜降", "立冬", "小雪", "大雪", "冬至", "小寒", "大寒",
];

impl SolarTerm {
    /// 0-based index (Lichun=0 .. Dahan=23).
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Chinese name of the term.
    pub fn glyph(self) -> &'static str {
        TERM_GLYPHS[self.index() as usize]
    }

    /// Pinyin name of the term.
    pub fn name(self) -> &'static str {
        match self {
            Self::Lichun => "Lichun",
            Self::Yushui => "Yushui",
            Self::Jingzhe => "Jingzhe",
            Self::Chunfen => "Chunfen",
            Self::Qingming => "Qingming",
            Self::Guyu => "Guyu",
            Self::Lixia => "Lixia",
            Self::Xiaoman => "Xiaoman",
            Self::Mangzhong => "Mangzhong",
            Self::Xiazhi => "Xiazhi",
            Self::Xiaoshu => "Xiaoshu",
            Self::Dashu => "Dashu",
            Self::Liqiu => "Liqiu",
            Self::Chushu => "Chushu",
            Self::Bailu => "Bailu",
            Self::Qiufen => "Qiufen",
            Self::Hanlu => "Hanlu",
            Self::Shuangjiang => "Shuangjiang",
            Self::Lidong => "Lidong",
            Self::Xiaoxue => "Xiaoxue",
            Self::Daxue => "Daxue",
            Self::Dongzhi => "Dongzhi",
            Self::Xiaohan => "Xiaohan",
            Self::Dahan => "Dahan",
        }
    }

    /// Solar longitude at which the term begins.
    pub fn longitude_deg(self) -> f64 {
        normalize_360(YEAR_START_LONGITUDE_DEG + TERM_SPAN_DEG * self.index() as f64)
    }

    /// Principal terms (zhongqi) sit on multiples of 30°.
    pub fn is_principal(self) -> bool {
        self.index() % 2 == 1
    }
}

/// The solar term in force at a given solar longitude.
pub fn solar_term_from_longitude(lon_deg: f64) -> SolarTerm {
    let idx = (normalize_360(lon_deg - YEAR_START_LONGITUDE_DEG) / TERM_SPAN_DEG).floor() as usize;
    ALL_SOLAR_TERMS[idx.min(23)]
}

/// Index (0..12) of the 30° month step since Lichun at a given longitude.
///
/// Step 0 begins at 315° (Lichun), step 11 at 285° (Xiaohan).
pub fn month_step_from_longitude(lon_deg: f64) -> u8 {
    let step = (normalize_360(lon_deg - YEAR_START_LONGITUDE_DEG) / 30.0).floor() as u8;
    step.min(11)
}

/// Find the moment (JD UT) the Sun reaches `target_deg`, starting near `jd_guess`.
///
/// The guess should be within a few days of the answer; the iteration steps
/// by the longitude residual over the mean daily motion.
pub fn sun_reaches_longitude(target_deg: f64, jd_guess: f64) -> Result<f64, TimeError> {
    let mut jd = jd_guess;
    for _ in 0..MAX_ITERATIONS {
        let residual = normalize_pm180(target_deg - solar_longitude_deg(jd));
        jd += residual / MEAN_DAILY_MOTION_DEG;
        if residual.abs() < CONVERGENCE_DEG {
            return Ok(jd);
        }
    }
    Err(TimeError::NoConvergence("solar longitude search"))
}

/// A solar term and the moment it begins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolarTermEvent {
    /// Which term begins.
    pub term: SolarTerm,
    /// Julian Date (UT) of the term.
    pub jd_ut: f64,
    /// Wall-clock time of the term at the requested offset.
    pub local: CivilTime,
}

/// All 24 terms whose moments fall in the civil year `year`, in time order.
pub fn solar_terms_for_year(
    year: i32,
    offset_hours: f64,
) -> Result<Vec<SolarTermEvent>, TimeError> {
    // The Sun sits near 280° on January 1st.
    let jan1 = calendar_to_jd(year, 1, 1.0);
    let mut events = ALL_SOLAR_TERMS
        .iter()
        .map(|&term| {
            let lon = term.longitude_deg();
            let guess = jan1 + normalize_360(lon - 280.0) / MEAN_DAILY_MOTION_DEG;
            let jd_ut = sun_reaches_longitude(lon, guess)?;
            Ok(SolarTermEvent {
                term,
                jd_ut,
                local: CivilTime::from_jd_ut(jd_ut, offset_hours),
            })
        })
        .collect::<Result<Vec<_>, TimeError>>()?;
    events.sort_by(|a, b| a.jd_ut.total_cmp(&b.jd_ut));
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longitude_at_j2000() {
        // Apparent solar longitude at J2000.0 is ~280.37°
        let lon = solar_longitude_deg(J2000_JD);
        assert!((lon - 280.37).abs() < 0.02, "lon = {lon}");
    }

    #[test]
    fn term_longitudes() {
        assert!((SolarTerm::Lichun.longitude_deg() - 315.0).abs() < 1e-12);
        assert!((SolarTerm::Chunfen.longitude_deg() - 0.0).abs() < 1e-12);
        assert!((SolarTerm::Xiazhi.longitude_deg() - 90.0).abs() < 1e-12);
        assert!((SolarTerm::Dongzhi.longitude_deg() - 270.0).abs() < 1e-12);
        assert!((SolarTerm::Dahan.longitude_deg() - 300.0).abs() < 1e-12);
    }

    #[test]
    fn principal_terms_are_multiples_of_30() {
        for term in ALL_SOLAR_TERMS {
            let on_30 = term.longitude_deg() % 30.0 == 0.0;
            assert_eq!(term.is_principal(), on_30, "{}", term.name());
        }
    }

    #[test]
    fn term_from_longitude_boundaries() {
        assert_eq!(solar_term_from_longitude(315.0), SolarTerm::Lichun);
        assert_eq!(solar_term_from_longitude(314.999), SolarTerm::Dahan);
        assert_eq!(solar_term_from_longitude(0.0), SolarTerm::Chunfen);
        assert_eq!(solar_term_from_longitude(359.9), SolarTerm::Jingzhe);
    }

    #[test]
    fn month_steps() {
        assert_eq!(month_step_from_longitude(315.0), 0);
        assert_eq!(month_step_from_longitude(344.9), 0);
        assert_eq!(month_step_from_longitude(345.0), 1);
        assert_eq!(month_step_from_longitude(280.0), 10);
        assert_eq!(month_step_from_longitude(290.0), 11);
        assert_eq!(month_step_from_longitude(314.99), 11);
    }

    #[test]
    fn glyphs_and_names_nonempty() {
        for term in ALL_SOLAR_TERMS {
            assert!(!term.glyph().is_empty());
            assert!(!term.name().is_empty());
        }
    }

    #[test]
    fn search_converges_on_target() {
        let jd = sun_reaches_longitude(90.0, calendar_to_jd(2021, 6, 18.0)).unwrap();
        assert!(normalize_pm180(solar_longitude_deg(jd) - 90.0).abs() < 1e-6);
    }

    #[test]
    fn year_has_24_terms_in_order() {
        let events = solar_terms_for_year(2024, 8.0).unwrap();
        assert_eq!(events.len(), 24);
        assert_eq!(events[0].term, SolarTerm::Xiaohan);
        assert_eq!(events[23].term, SolarTerm::Dongzhi);
        for w in events.windows(2) {
            assert!(w[0].jd_ut < w[1].jd_ut);
        }
        assert!(events.iter().all(|e| e.local.year == 2024));
    }
}
