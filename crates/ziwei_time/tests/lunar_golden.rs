//! Golden tests for the lunisolar calendar.
//!
//! Reference dates from published Chinese calendars (UTC+8).

use ziwei_time::{LeapMonthPolicy, LunarDate, TimeError, lunar_from_solar};

fn lunar(year: i32, month: u32, day: u32) -> LunarDate {
    lunar_from_solar(year, month, day, 8.0).unwrap()
}

fn expect(date: LunarDate, year: i32, month: u8, day: u8, is_leap: bool) {
    assert_eq!(
        date,
        LunarDate {
            year,
            month,
            day,
            is_leap
        }
    );
}

#[test]
fn new_year_days() {
    expect(lunar(1901, 2, 19), 1901, 1, 1, false);
    expect(lunar(1950, 2, 17), 1950, 1, 1, false);
    expect(lunar(1984, 2, 2), 1984, 1, 1, false);
    expect(lunar(1985, 2, 20), 1985, 1, 1, false);
    expect(lunar(2024, 2, 10), 2024, 1, 1, false);
}

#[test]
fn eve_of_new_year_belongs_to_previous_year() {
    expect(lunar(1901, 2, 18), 1900, 12, 30, false);
    expect(lunar(2024, 2, 9), 2023, 12, 30, false);
}

#[test]
fn first_of_january_1990() {
    expect(lunar(1990, 1, 1), 1989, 12, 5, false);
}

#[test]
fn first_of_january_2000() {
    expect(lunar(2000, 1, 1), 1999, 11, 25, false);
}

#[test]
fn leap_second_month_2023() {
    expect(lunar(2023, 3, 21), 2023, 2, 30, false);
    expect(lunar(2023, 3, 22), 2023, 2, 1, true);
    expect(lunar(2023, 4, 19), 2023, 2, 29, true);
    expect(lunar(2023, 4, 20), 2023, 3, 1, false);
}

#[test]
fn leap_fourth_month_2020() {
    expect(lunar(2020, 5, 23), 2020, 4, 1, true);
    expect(lunar(2020, 6, 21), 2020, 5, 1, false);
}

#[test]
fn leap_sixth_month_2017() {
    expect(lunar(2017, 7, 23), 2017, 6, 1, true);
    expect(lunar(2017, 8, 21), 2017, 6, 30, true);
    expect(lunar(2017, 8, 22), 2017, 7, 1, false);
}

#[test]
fn leap_eleventh_month_2033() {
    expect(lunar(2033, 12, 22), 2033, 11, 1, true);
}

#[test]
fn new_moon_later_than_mean_lunation() {
    // The true new moon of 1939-04-20 trails the mean one by over half a day.
    expect(lunar(1939, 4, 19), 1939, 2, 30, false);
    expect(lunar(2009, 3, 26), 2009, 2, 30, false);
}

#[test]
fn leap_dates_fold_by_policy() {
    // Leap 2nd month 2023: day 15 is 2023-04-05, day 16 is 2023-04-06
    let d15 = lunar(2023, 4, 5);
    let d16 = lunar(2023, 4, 6);
    assert_eq!((d15.month, d15.day, d15.is_leap), (2, 15, true));
    assert_eq!((d16.month, d16.day, d16.is_leap), (2, 16, true));
    assert_eq!(d15.effective_month(LeapMonthPolicy::SplitAtMidMonth), 2);
    assert_eq!(d16.effective_month(LeapMonthPolicy::SplitAtMidMonth), 3);
}

#[test]
fn offset_moves_new_moon_day() {
    // New moon at 2024-02-09 22:59 UT: already Feb 10 in UTC+8, still Feb 9 at UTC.
    let utc = lunar_from_solar(2024, 2, 9, 0.0).unwrap();
    assert_eq!((utc.year, utc.month, utc.day), (2024, 1, 1));
}

#[test]
fn range_limits() {
    assert!(lunar_from_solar(2099, 12, 31, 8.0).is_ok());
    assert_eq!(
        lunar_from_solar(2100, 1, 1, 8.0),
        Err(TimeError::OutOfRange(2100))
    );
    assert_eq!(
        lunar_from_solar(1900, 12, 31, 8.0),
        Err(TimeError::OutOfRange(1900))
    );
}
