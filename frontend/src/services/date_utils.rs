//! Helpers for the `YYYY-MM-DD` date strings that flow between
//! `<input type="date">` fields, the backend, and display labels.

use chrono::{Datelike, Duration, NaiveDate};
use shared::DayOfWeek;

/// Today's date as `YYYY-MM-DD`, from the browser clock.
pub fn current_date() -> String {
    use js_sys::Date;
    let now = Date::new_0();
    let year = now.get_full_year();
    let month = now.get_month() + 1; // JavaScript months are 0-indexed
    let day = now.get_date();

    format!("{:04}-{:02}-{:02}", year as u32, month as u32, day as u32)
}

pub fn parse_date(date_str: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").ok()
}

/// Which weekday a `YYYY-MM-DD` date falls on, in the backend's 0=Sunday
/// convention.
pub fn weekday_of(date_str: &str) -> Option<DayOfWeek> {
    parse_date(date_str).map(|date| DayOfWeek::from_weekday(date.weekday()))
}

/// The date `days` away from `date_str` (negative for the past), as
/// `YYYY-MM-DD`. Unparseable input comes back unchanged.
pub fn shift_date(date_str: &str, days: i64) -> String {
    match parse_date(date_str) {
        Some(date) => (date + Duration::days(days)).format("%Y-%m-%d").to_string(),
        None => date_str.to_string(),
    }
}

/// Display label for a `YYYY-MM-DD` date, e.g. "Monday, July 14, 2025".
/// Falls back to the raw string when it does not parse.
pub fn format_date_display(date_str: &str) -> String {
    let Some(date) = parse_date(date_str) else {
        return date_str.to_string();
    };
    let weekday = DayOfWeek::from_weekday(date.weekday()).label();
    format!(
        "{}, {} {}, {}",
        weekday,
        month_name(date.month()),
        date.day(),
        date.year()
    )
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January", 2 => "February", 3 => "March", 4 => "April",
        5 => "May", 6 => "June", 7 => "July", 8 => "August",
        9 => "September", 10 => "October", 11 => "November", 12 => "December",
        _ => "January",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_parse_date() {
        let date = parse_date("2025-07-14").unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2025, 7, 14));
        assert!(parse_date("14/07/2025").is_none());
        assert!(parse_date("").is_none());
    }

    #[test]
    fn test_weekday_of() {
        // 2025-07-14 is a Monday
        assert_eq!(weekday_of("2025-07-14"), Some(DayOfWeek::Monday));
        assert_eq!(weekday_of("2025-07-13"), Some(DayOfWeek::Sunday));
        assert_eq!(weekday_of("not a date"), None);
    }

    #[test]
    fn test_shift_date() {
        assert_eq!(shift_date("2025-07-14", 1), "2025-07-15");
        assert_eq!(shift_date("2025-07-14", -1), "2025-07-13");
        // Month and year boundaries
        assert_eq!(shift_date("2025-12-31", 1), "2026-01-01");
        assert_eq!(shift_date("garbage", 1), "garbage");
    }

    #[test]
    fn test_format_date_display() {
        assert_eq!(format_date_display("2025-07-14"), "Monday, July 14, 2025");
        assert_eq!(format_date_display("oops"), "oops");
    }
}
