/// Utilities for date and time formatting
///
/// Provides consistent date/time display across the application.
use chrono::{Datelike, NaiveDate};

/// Format a calendar date as DD.MM.YYYY
/// Example: 2026-03-02 -> "02.03.2026"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// English month name for a 1-based month number.
/// Out-of-range input falls back to the number itself.
pub fn month_name(month: u32) -> String {
    const NAMES: [&str; 12] = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];
    match NAMES.get(month.wrapping_sub(1) as usize) {
        Some(name) => (*name).to_string(),
        None => month.to_string(),
    }
}

/// Calendar header label, e.g. "March 2026"
pub fn month_year_label(year: i32, month: u32) -> String {
    format!("{} {}", month_name(month), year)
}

/// Short weekday header label for a date ("Sun", "Mon", ...)
pub fn weekday_short(date: NaiveDate) -> &'static str {
    const NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
    NAMES[date.weekday().num_days_from_sunday() as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        assert_eq!(format_date(date), "02.03.2026");
    }

    #[test]
    fn test_month_labels() {
        assert_eq!(month_name(3), "March");
        assert_eq!(month_year_label(2026, 3), "March 2026");
        assert_eq!(month_name(0), "0");
        assert_eq!(month_name(13), "13");
    }

    #[test]
    fn test_weekday_short() {
        // 2026-03-01 is a Sunday
        let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        assert_eq!(weekday_short(date), "Sun");
        assert_eq!(weekday_short(date.succ_opt().unwrap()), "Mon");
    }
}
