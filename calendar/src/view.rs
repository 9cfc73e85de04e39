//! View modes, the date range each view shows, toolbar navigation, and the
//! toolbar label.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::grid::{month_grid_bounds, week_start};

/// Days listed by the agenda view starting at the reference date.
pub const AGENDA_DAYS: i64 = 7;

/// Calendar presentation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarView {
    Day,
    #[default]
    Week,
    Month,
    Agenda,
}

impl CalendarView {
    pub const ALL: [Self; 4] = [Self::Day, Self::Week, Self::Month, Self::Agenda];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Agenda => "agenda",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "day" => Some(Self::Day),
            "week" => Some(Self::Week),
            "month" => Some(Self::Month),
            "agenda" => Some(Self::Agenda),
            _ => None,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Day => "Day",
            Self::Week => "Week",
            Self::Month => "Month",
            Self::Agenda => "Agenda",
        }
    }
}

/// Toolbar navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
    Today,
}

/// Inclusive span of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of dates in the range.
    #[must_use]
    pub fn len_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Every date in the range, in order.
    pub fn dates(self) -> impl Iterator<Item = NaiveDate> {
        let start = self.start;
        (0..self.len_days()).map(move |offset| start + Duration::days(offset))
    }
}

/// Dates shown by `view` around `reference`.
#[must_use]
pub fn visible_range(view: CalendarView, reference: NaiveDate) -> DateRange {
    match view {
        CalendarView::Day => DateRange { start: reference, end: reference },
        CalendarView::Week => {
            let start = week_start(reference);
            DateRange { start, end: start + Duration::days(6) }
        }
        CalendarView::Month => {
            let (start, end) = month_grid_bounds(reference);
            DateRange { start, end }
        }
        CalendarView::Agenda => DateRange { start: reference, end: reference + Duration::days(AGENDA_DAYS - 1) },
    }
}

/// New reference date after a toolbar navigation.
///
/// Month steps keep the day of month when possible and otherwise clamp to the
/// last day of the target month (Jan 31 → Feb 28).
#[must_use]
pub fn navigate(view: CalendarView, reference: NaiveDate, direction: Direction, today: NaiveDate) -> NaiveDate {
    let forward = match direction {
        Direction::Today => return today,
        Direction::Next => true,
        Direction::Previous => false,
    };
    match view {
        CalendarView::Day => step_days(reference, 1, forward),
        CalendarView::Week => step_days(reference, 7, forward),
        CalendarView::Agenda => step_days(reference, AGENDA_DAYS, forward),
        CalendarView::Month => {
            let stepped = if forward {
                reference.checked_add_months(Months::new(1))
            } else {
                reference.checked_sub_months(Months::new(1))
            };
            stepped.unwrap_or(reference)
        }
    }
}

fn step_days(date: NaiveDate, days: i64, forward: bool) -> NaiveDate {
    if forward { date + Duration::days(days) } else { date - Duration::days(days) }
}

/// Toolbar title for the current view.
#[must_use]
pub fn range_label(view: CalendarView, reference: NaiveDate) -> String {
    match view {
        CalendarView::Day => reference.format("%A, %B %-d, %Y").to_string(),
        CalendarView::Month => reference.format("%B %Y").to_string(),
        CalendarView::Week | CalendarView::Agenda => span_label(visible_range(view, reference)),
    }
}

fn span_label(range: DateRange) -> String {
    if range.start.year() == range.end.year() {
        format!("{} – {}", range.start.format("%b %-d"), range.end.format("%b %-d, %Y"))
    } else {
        format!("{} – {}", range.start.format("%b %-d, %Y"), range.end.format("%b %-d, %Y"))
    }
}
