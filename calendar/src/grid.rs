//! Calendar grid geometry: the 6×7 month grid, Sunday-first weeks, and the
//! hour rows shown by day and week views.

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;

use chrono::{Datelike, Duration, NaiveDate};

/// First hour row shown in day and week views.
pub const FIRST_HOUR: u32 = 8;
/// Last hour row shown in day and week views (inclusive).
pub const LAST_HOUR: u32 = 18;
/// Number of cells in the month grid (6 weeks of 7 days).
pub const MONTH_GRID_CELLS: usize = 42;

/// One cell of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub date: NaiveDate,
    /// False for leading/trailing days borrowed from adjacent months.
    pub in_month: bool,
    pub is_today: bool,
}

/// Hour rows shown by day/week views, in order.
pub fn day_hours() -> impl Iterator<Item = u32> {
    FIRST_HOUR..=LAST_HOUR
}

/// True when `hour` has a row in day/week views.
#[must_use]
pub fn is_grid_hour(hour: u32) -> bool {
    (FIRST_HOUR..=LAST_HOUR).contains(&hour)
}

/// 12-hour label for an hour row, e.g. `"8 AM"`, `"12 PM"`.
#[must_use]
pub fn hour_label(hour: u32) -> String {
    let suffix = if hour < 12 { "AM" } else { "PM" };
    let display = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{display} {suffix}")
}

/// First day of the month containing `date`.
#[must_use]
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.day0()))
}

/// Sunday starting the week that contains `date`.
#[must_use]
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_sunday()))
}

/// The seven dates (Sunday..Saturday) of the week containing `reference`.
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn week_days(reference: NaiveDate) -> [NaiveDate; 7] {
    let start = week_start(reference);
    std::array::from_fn(|i| start + Duration::days(i as i64))
}

/// The 42 cells of the month grid for the month containing `reference`.
///
/// The grid starts on the Sunday on or before the first of the month, so
/// leading days come from the previous month and the remainder is filled with
/// days of the following month.
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn month_grid(reference: NaiveDate, today: NaiveDate) -> Vec<GridCell> {
    let first = month_start(reference);
    let start = week_start(first);
    (0..MONTH_GRID_CELLS as i64)
        .map(|i| {
            let date = start + Duration::days(i);
            GridCell { date, in_month: date.month() == first.month() && date.year() == first.year(), is_today: date == today }
        })
        .collect()
}

/// First and last date covered by the month grid of `reference`.
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn month_grid_bounds(reference: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = week_start(month_start(reference));
    (start, start + Duration::days(MONTH_GRID_CELLS as i64 - 1))
}
