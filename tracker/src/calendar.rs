//! Calendar date math for the savings grid.
//!
//! All functions here are pure and total over valid inputs: any
//! `(month0, year)` pair with `month0` in 0-11 produces an answer, never an
//! error. Month indices are zero-based throughout to match the wire format
//! of [`MonthKey`].

use chrono::{Datelike, NaiveDate};
use shared::MonthKey;

/// Number of days in the given month, accounting for leap years.
pub fn days_in_month(month0: u32, year: i32) -> u32 {
    match month0 {
        1 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        3 | 5 | 8 | 10 => 30,
        _ => 31,
    }
}

/// Gregorian leap-year rule.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Weekday of day 1 of the month, as the calendar-grid offset
/// (0 = Sunday, 1 = Monday, ..., 6 = Saturday).
pub fn first_weekday(month0: u32, year: i32) -> u32 {
    match NaiveDate::from_ymd_opt(year, month0 + 1, 1) {
        Some(date) => date.weekday().num_days_from_sunday(),
        // month0 out of range; grid falls back to no offset
        None => 0,
    }
}

/// Human-readable name for a zero-based month index.
pub fn month_name(month0: u32) -> &'static str {
    match month0 {
        0 => "January",
        1 => "February",
        2 => "March",
        3 => "April",
        4 => "May",
        5 => "June",
        6 => "July",
        7 => "August",
        8 => "September",
        9 => "October",
        10 => "November",
        11 => "December",
        _ => "Invalid Month",
    }
}

/// Month key one month before the given one, rolling the year back at January.
pub fn previous_month(key: MonthKey) -> MonthKey {
    if key.month0 == 0 {
        MonthKey { year: key.year - 1, month0: 11 }
    } else {
        MonthKey { year: key.year, month0: key.month0 - 1 }
    }
}

/// Month key one month after the given one, rolling the year forward at December.
pub fn next_month(key: MonthKey) -> MonthKey {
    if key.month0 == 11 {
        MonthKey { year: key.year + 1, month0: 0 }
    } else {
        MonthKey { year: key.year, month0: key.month0 + 1 }
    }
}
