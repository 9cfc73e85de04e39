//! Event-to-slot bucketing for the day, week, and month views.
//!
//! Day and week views key slots by `(date, hour)` for the hour rows
//! 8 AM through 6 PM; month view keys slots by date across the 42-cell grid.
//! Events starting on a visible date but outside the hour rows land in no
//! slot and are reported through [`Buckets::overflow`] instead. Within a slot
//! events keep their input order.

#[cfg(test)]
#[path = "bucket_test.rs"]
mod bucket_test;

use std::collections::BTreeMap;

use chrono::{NaiveDate, TimeZone};

use crate::event::CalendarEvent;
use crate::grid::is_grid_hour;
use crate::view::{CalendarView, visible_range};

/// Address of one calendar cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SlotKey {
    /// One hour row of one day (day and week views).
    Hour { date: NaiveDate, hour: u32 },
    /// A whole day (month view).
    Day(NaiveDate),
}

/// Result of bucketing a set of events for one view.
#[derive(Debug, Clone, Default)]
pub struct Buckets<'a> {
    slots: BTreeMap<SlotKey, Vec<&'a CalendarEvent>>,
    overflow: Vec<&'a CalendarEvent>,
}

impl<'a> Buckets<'a> {
    /// Events in `key`, in input order. Empty when nothing landed there.
    #[must_use]
    pub fn get(&self, key: &SlotKey) -> &[&'a CalendarEvent] {
        self.slots.get(key).map_or(&[], Vec::as_slice)
    }

    /// Events on a visible day whose start hour has no row.
    #[must_use]
    pub fn overflow(&self) -> &[&'a CalendarEvent] {
        &self.overflow
    }

    /// Overflow events that start on `date`.
    pub fn overflow_on<Tz: TimeZone>(&self, date: NaiveDate, tz: &Tz) -> Vec<&'a CalendarEvent> {
        self.overflow.iter().copied().filter(|e| e.start_date(tz) == date).collect()
    }

    /// Occupied slots in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&SlotKey, &Vec<&'a CalendarEvent>)> {
        self.slots.iter()
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn occupied(&self) -> usize {
        self.slots.len()
    }

    /// Number of events placed in slots (overflow excluded).
    #[must_use]
    pub fn placed(&self) -> usize {
        self.slots.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty() && self.overflow.is_empty()
    }
}

/// Assign events to the slots of `view` around `reference`.
///
/// Start instants are read in `tz`. Agenda view does no bucketing and yields
/// empty buckets; use [`crate::agenda::agenda`] for it.
pub fn bucket<'a, I, Tz>(events: I, view: CalendarView, reference: NaiveDate, tz: &Tz) -> Buckets<'a>
where
    I: IntoIterator<Item = &'a CalendarEvent>,
    Tz: TimeZone,
{
    let mut out = Buckets::default();
    if view == CalendarView::Agenda {
        return out;
    }

    let range = visible_range(view, reference);
    for event in events {
        let local = event.start.with_timezone(tz);
        let date = local.date_naive();
        if !range.contains(date) {
            continue;
        }
        let key = match view {
            CalendarView::Month => SlotKey::Day(date),
            _ => {
                let hour = event.start_hour(tz);
                if !is_grid_hour(hour) {
                    out.overflow.push(event);
                    continue;
                }
                SlotKey::Hour { date, hour }
            }
        };
        out.slots.entry(key).or_default().push(event);
    }
    out
}
