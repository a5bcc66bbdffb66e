//! Month-view calendar grid.
//!
//! Builds the fixed 6x7 grid of a month view: leading days of the previous
//! month up to the first-of-month weekday (weeks start on Sunday), the days
//! of the displayed month, and trailing days of the next month padding the
//! grid to exactly 42 cells. Appointments are bucketed into cells by exact
//! date match, keeping their source order within a cell.

pub mod dto;

pub use dto::{CalendarDayCell, MonthRef};

use crate::domain::a004_appointment::Appointment;
use chrono::{Datelike, Duration};

/// Cell count of the month view, six full weeks
pub const GRID_CELLS: usize = 42;

/// Build the 42-cell grid for a month.
///
/// The cells carry strictly consecutive dates starting at the Sunday on or
/// before the first of the month, so every event dated inside the grid's
/// range lands in exactly one cell. Out-of-range months are normalized
/// before building, see [`MonthRef::normalize`].
pub fn build_grid(month: MonthRef, events: &[Appointment]) -> Vec<CalendarDayCell> {
    let month = MonthRef::new(month.year, month.month);
    let first = month.first_day();
    let leading = first.weekday().num_days_from_sunday() as i64;
    let start = first - Duration::days(leading);

    (0..GRID_CELLS as i64)
        .map(|offset| {
            let date = start + Duration::days(offset);
            CalendarDayCell {
                day_number: date.day(),
                in_displayed_month: month.contains(date),
                events: events.iter().filter(|e| e.date == date).cloned().collect(),
                date,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a004_appointment::AppointmentDto;
    use chrono::NaiveDate;

    fn appointment(date: NaiveDate, customer: &str, start: &str) -> Appointment {
        Appointment::new_for_insert(&AppointmentDto {
            id: None,
            date,
            start_time: start.to_string(),
            end_time: "18:00".to_string(),
            service: "Hair".to_string(),
            customer_name: customer.to_string(),
            customer_avatar: None,
            status: None,
        })
    }

    #[test]
    fn grid_always_has_42_consecutive_cells() {
        for (year, month) in [(2026, 3), (2024, 2), (2025, 12), (2023, 1)] {
            let grid = build_grid(MonthRef::new(year, month), &[]);
            assert_eq!(grid.len(), GRID_CELLS);
            for pair in grid.windows(2) {
                assert_eq!(pair[1].date, pair[0].date + Duration::days(1));
            }
            assert_eq!(grid[0].date.weekday().num_days_from_sunday(), 0);
        }
    }

    #[test]
    fn march_2026_starts_on_sunday_with_no_leading_days() {
        // March 1st 2026 is a Sunday: 0 leading, 31 current, 11 trailing
        let grid = build_grid(MonthRef::new(2026, 3), &[]);
        assert_eq!(grid[0].date, NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
        assert!(grid[0].in_displayed_month);
        assert_eq!(grid.iter().filter(|c| c.in_displayed_month).count(), 31);
        assert!(!grid[31].in_displayed_month);
        assert_eq!(grid[31].day_number, 1);
        assert_eq!(grid[41].date, NaiveDate::from_ymd_opt(2026, 4, 11).unwrap());
    }

    #[test]
    fn february_2024_spans_leap_day() {
        // February 1st 2024 is a Thursday: 4 leading cells from January
        let grid = build_grid(MonthRef::new(2024, 2), &[]);
        assert_eq!(grid[0].date, NaiveDate::from_ymd_opt(2024, 1, 28).unwrap());
        assert!(!grid[3].in_displayed_month);
        assert!(grid[4].in_displayed_month);
        assert_eq!(grid.iter().filter(|c| c.in_displayed_month).count(), 29);
        assert_eq!(grid[32].date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(grid[41].date, NaiveDate::from_ymd_opt(2024, 3, 9).unwrap());
    }

    #[test]
    fn events_land_in_exactly_one_cell() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        let events = vec![appointment(date, "Sarah Johnson", "09:00")];
        let grid = build_grid(MonthRef::new(2026, 3), &events);
        let carrying: Vec<&CalendarDayCell> =
            grid.iter().filter(|c| !c.events.is_empty()).collect();
        assert_eq!(carrying.len(), 1);
        assert_eq!(carrying[0].date, date);
        assert_eq!(carrying[0].day_number, 2);
        assert_eq!(carrying[0].events[0].customer_name, "Sarah Johnson");
    }

    #[test]
    fn same_day_events_keep_source_order() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 6).unwrap();
        let events = vec![
            appointment(date, "Jessica Wilson", "15:00"),
            appointment(date, "Amanda Brown", "09:30"),
        ];
        let grid = build_grid(MonthRef::new(2026, 3), &events);
        let cell = grid.iter().find(|c| c.date == date).unwrap();
        // Source order, not clock order
        assert_eq!(cell.events[0].customer_name, "Jessica Wilson");
        assert_eq!(cell.events[1].customer_name, "Amanda Brown");
    }

    #[test]
    fn adjacent_month_cells_collect_their_events() {
        // An event on a trailing next-month day is still visible in the grid
        let date = NaiveDate::from_ymd_opt(2026, 4, 3).unwrap();
        let events = vec![appointment(date, "Emily Davis", "11:00")];
        let grid = build_grid(MonthRef::new(2026, 3), &events);
        let cell = grid.iter().find(|c| c.date == date).unwrap();
        assert!(!cell.in_displayed_month);
        assert_eq!(cell.events.len(), 1);
    }

    #[test]
    fn events_outside_the_grid_range_are_dropped() {
        let events = vec![appointment(
            NaiveDate::from_ymd_opt(2026, 7, 15).unwrap(),
            "Jennifer White",
            "10:00",
        )];
        let grid = build_grid(MonthRef::new(2026, 3), &events);
        assert!(grid.iter().all(|c| c.events.is_empty()));
    }

    #[test]
    fn month_navigation_rolls_the_year() {
        assert_eq!(MonthRef::new(2025, 12).next(), MonthRef::new(2026, 1));
        assert_eq!(MonthRef::new(2026, 1).previous(), MonthRef::new(2025, 12));
        assert_eq!(MonthRef::new(2026, 6).next(), MonthRef::new(2026, 7));
    }

    #[test]
    fn days_in_month_handles_lengths_and_leap_years() {
        assert_eq!(MonthRef::new(2026, 3).days_in_month(), 31);
        assert_eq!(MonthRef::new(2026, 4).days_in_month(), 30);
        assert_eq!(MonthRef::new(2024, 2).days_in_month(), 29);
        assert_eq!(MonthRef::new(2025, 2).days_in_month(), 28);
        assert_eq!(MonthRef::new(2000, 2).days_in_month(), 29);
        assert_eq!(MonthRef::new(1900, 2).days_in_month(), 28);
    }

    #[test]
    fn normalize_rolls_out_of_range_months() {
        assert_eq!(MonthRef::normalize(2026, 13), MonthRef::new(2027, 1));
        assert_eq!(MonthRef::normalize(2026, 0), MonthRef::new(2025, 12));
        assert_eq!(MonthRef::normalize(2026, -11), MonthRef::new(2024, 12));
        assert_eq!(MonthRef::new(2026, 3).label(), "March 2026");
    }

    #[test]
    fn astronomical_input_is_clamped_instead_of_panicking() {
        let extremes = [
            MonthRef::normalize(i32::MAX, i64::MAX),
            MonthRef::normalize(i32::MIN, i64::MIN),
        ];
        for month in extremes {
            assert!((1..=12).contains(&month.month));
            let grid = build_grid(month, &[]);
            assert_eq!(grid.len(), GRID_CELLS);
            assert!(grid.iter().any(|c| c.in_displayed_month));
        }
    }
}
