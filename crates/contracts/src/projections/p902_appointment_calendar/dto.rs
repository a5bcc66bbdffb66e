use crate::domain::a004_appointment::Appointment;
use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Reference month of the calendar view.
///
/// `month` follows the 1-12 calendar convention. Callers holding an
/// out-of-range month (e.g. after naive arithmetic) should go through
/// [`MonthRef::normalize`]; navigation via [`next`](Self::next) /
/// [`previous`](Self::previous) always yields a normalized reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthRef {
    pub year: i32,
    pub month: u32,
}

impl MonthRef {
    pub fn new(year: i32, month: u32) -> Self {
        Self::normalize(year, month as i64)
    }

    /// Roll an arbitrary month offset into a valid `(year, 1..=12)` pair.
    ///
    /// The resulting year is clamped just inside chrono's representable
    /// range, so `first_day` and grid construction stay total even for
    /// astronomical input.
    pub fn normalize(year: i32, month: i64) -> Self {
        let zero_based = month.saturating_sub(1);
        let year_shift = zero_based.div_euclid(12);
        let month = (zero_based.rem_euclid(12) + 1) as u32;
        let year = (year as i64 + year_shift).clamp(
            NaiveDate::MIN.year() as i64 + 1,
            NaiveDate::MAX.year() as i64 - 1,
        ) as i32;
        Self { year, month }
    }

    /// The following month, rolling the year at December
    pub fn next(&self) -> Self {
        Self::normalize(self.year, self.month as i64 + 1)
    }

    /// The preceding month, rolling the year at January
    pub fn previous(&self) -> Self {
        Self::normalize(self.year, self.month as i64 - 1)
    }

    /// First day of the month
    pub fn first_day(&self) -> NaiveDate {
        // Normalized months always form a valid date: the month is 1..=12
        // and the year is clamped inside chrono's range.
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .expect("normalized month reference within chrono date range")
    }

    /// Last day of the month, via last-day-of-month arithmetic (handles
    /// variable month lengths and leap years without a lookup table)
    pub fn last_day(&self) -> NaiveDate {
        self.next().first_day() - Duration::days(1)
    }

    pub fn days_in_month(&self) -> u32 {
        self.last_day().day()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Header label of the month view, e.g. "March 2026"
    pub fn label(&self) -> String {
        crate::shared::date_utils::month_year_label(self.year, self.month)
    }
}

/// One of the 42 day slots of a month view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarDayCell {
    /// Day-of-month number shown in the cell (1-31)
    #[serde(rename = "dayNumber")]
    pub day_number: u32,
    /// False for the grayed leading/trailing days of adjacent months
    #[serde(rename = "inDisplayedMonth")]
    pub in_displayed_month: bool,
    /// Full calendar date used for event bucketing
    pub date: NaiveDate,
    /// Appointments of this day, in source order
    pub events: Vec<Appointment>,
}
