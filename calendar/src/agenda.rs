//! Agenda listing: events sorted by start and grouped by calendar date.

#[cfg(test)]
#[path = "agenda_test.rs"]
mod agenda_test;

use chrono::{NaiveDate, TimeZone};

use crate::event::CalendarEvent;
use crate::view::DateRange;

/// Events starting on one date, earliest first.
#[derive(Debug, Clone, PartialEq)]
pub struct AgendaDay<'a> {
    pub date: NaiveDate,
    pub events: Vec<&'a CalendarEvent>,
}

/// Sort `events` by start (stable) and group them by start date in `tz`.
///
/// When `range` is given, only events whose start date falls inside it are
/// listed. Dates without events are omitted.
pub fn agenda<'a, I, Tz>(events: I, range: Option<DateRange>, tz: &Tz) -> Vec<AgendaDay<'a>>
where
    I: IntoIterator<Item = &'a CalendarEvent>,
    Tz: TimeZone,
{
    let mut sorted: Vec<(NaiveDate, &'a CalendarEvent)> = events
        .into_iter()
        .map(|event| (event.start_date(tz), event))
        .filter(|(date, _)| range.is_none_or(|r| r.contains(*date)))
        .collect();
    sorted.sort_by_key(|(_, event)| event.start);

    let mut days: Vec<AgendaDay<'a>> = Vec::new();
    for (date, event) in sorted {
        match days.last_mut() {
            Some(day) if day.date == date => day.events.push(event),
            _ => days.push(AgendaDay { date, events: vec![event] }),
        }
    }
    days
}
