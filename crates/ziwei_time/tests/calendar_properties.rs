//! Property tests for the calendar conversions.

use proptest::prelude::*;

use ziwei_time::{
    CivilTime, days_in_month, jd_day_number, jd_to_calendar, lunar_from_solar, solar_longitude_deg,
};

fn civil_date() -> impl Strategy<Value = (i32, u32, u32)> {
    (1901i32..=2099, 1u32..=12).prop_flat_map(|(y, m)| {
        let last = days_in_month(y, m).unwrap_or(28);
        (Just(y), Just(m), 1u32..=last)
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a day number converts back to the same civil date.
    #[test]
    fn property_day_number_round_trip((y, m, d) in civil_date()) {
        let jdn = jd_day_number(y, m, d);
        let (y2, m2, d2) = jd_to_calendar(jdn as f64);
        prop_assert_eq!((y2, m2, d2.floor() as u32), (y, m, d));
    }

    /// PROPERTY: solar longitude is always normalized.
    #[test]
    fn property_longitude_normalized((y, m, d) in civil_date(), hour in 0u32..24) {
        let t = CivilTime::new(y, m, d, hour, 0, 0.0, 8.0).unwrap();
        let lon = solar_longitude_deg(t.to_jd_ut());
        prop_assert!((0.0..360.0).contains(&lon));
    }

    /// PROPERTY: consecutive civil days advance the lunar day by one or start a new month.
    #[test]
    fn property_lunar_days_are_contiguous((y, m, d) in civil_date()) {
        prop_assume!(!(y == 2099 && m == 12 && d == 31));
        let (ny, nm, nd) = jd_to_calendar((jd_day_number(y, m, d) + 1) as f64);
        let today = lunar_from_solar(y, m, d, 8.0).unwrap();
        let tomorrow = lunar_from_solar(ny, nm, nd.floor() as u32, 8.0).unwrap();
        prop_assert!((1..=30).contains(&today.day));
        if tomorrow.day == 1 {
            prop_assert!(today.day >= 29);
        } else {
            prop_assert_eq!(tomorrow.day, today.day + 1);
            prop_assert_eq!(tomorrow.month, today.month);
            prop_assert_eq!(tomorrow.is_leap, today.is_leap);
        }
    }
}
