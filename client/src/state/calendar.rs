//! Calendar page state: events, current view, filter, and selection.
//!
//! DESIGN
//! ======
//! Events start from the bundled fixtures and are edited in memory only.
//! Bucketing and grid math live in the `calendar` crate; this container only
//! holds what the user has chosen.

#[cfg(test)]
#[path = "calendar_test.rs"]
mod calendar_test;

use calendar::{CalendarEvent, CalendarView, Direction, EventDraft, EventError, EventFilter, EventType, navigate};
use chrono::{DateTime, Days, NaiveDate, TimeZone, Utc};

#[derive(Clone, Debug, Default)]
pub struct CalendarState {
    pub events: Vec<CalendarEvent>,
    pub view: CalendarView,
    pub reference: NaiveDate,
    /// Current date in the viewer's zone; drives the today highlight.
    pub today: NaiveDate,
    pub filter: EventFilter,
    pub selected_event: Option<String>,
    pub form_open: bool,
    /// Start prefilled into the create form, e.g. from a clicked hour cell.
    pub form_start: Option<DateTime<Utc>>,
}

impl CalendarState {
    #[must_use]
    pub fn new(events: Vec<CalendarEvent>, today: NaiveDate) -> Self {
        Self { events, reference: today, today, ..Self::default() }
    }

    /// Adopt the browser's date. A view still parked on the old today follows
    /// it; one the user has navigated away from stays put.
    pub fn set_today(&mut self, today: NaiveDate) {
        if self.reference == self.today {
            self.reference = today;
        }
        self.today = today;
    }

    pub fn navigate(&mut self, direction: Direction, today: NaiveDate) {
        self.reference = navigate(self.view, self.reference, direction, today);
    }

    pub fn set_view(&mut self, view: CalendarView) {
        self.view = view;
    }

    /// Drill into one date from the month grid.
    pub fn open_day(&mut self, date: NaiveDate) {
        self.reference = date;
        self.view = CalendarView::Day;
    }

    /// Events passing the filter, in stored order.
    #[must_use]
    pub fn visible_events(&self) -> Vec<&CalendarEvent> {
        self.filter.apply(&self.events)
    }

    #[must_use]
    pub fn selected(&self) -> Option<&CalendarEvent> {
        let id = self.selected_event.as_deref()?;
        self.events.iter().find(|e| e.id == id)
    }

    pub fn select(&mut self, id: Option<String>) {
        self.selected_event = id;
    }

    pub fn open_form(&mut self, start: Option<DateTime<Utc>>) {
        self.form_open = true;
        self.form_start = start;
    }

    pub fn close_form(&mut self) {
        self.form_open = false;
        self.form_start = None;
    }

    /// Validate and add a new event, closing the form on success.
    ///
    /// # Errors
    ///
    /// The draft's [`EventError`]; the form stays open.
    pub fn add_event(&mut self, draft: EventDraft, id: String) -> Result<(), EventError> {
        let event = draft.into_event(id)?;
        self.events.push(event);
        self.close_form();
        Ok(())
    }

    /// Remove an event by id. Returns whether it existed.
    pub fn delete_event(&mut self, id: &str) -> bool {
        let before = self.events.len();
        self.events.retain(|e| e.id != id);
        if self.selected_event.as_deref() == Some(id) {
            self.selected_event = None;
        }
        self.events.len() != before
    }

    /// Move an event to `new_start`, keeping its duration.
    pub fn reschedule(&mut self, id: &str, new_start: DateTime<Utc>) -> bool {
        let Some(event) = self.events.iter_mut().find(|e| e.id == id) else {
            return false;
        };
        *event = event.rescheduled(new_start);
        true
    }

    /// Other non-canceled events whose time range intersects event `id`.
    #[must_use]
    pub fn conflicts(&self, id: &str) -> Vec<&CalendarEvent> {
        let Some(target) = self.events.iter().find(|e| e.id == id) else {
            return Vec::new();
        };
        self.events.iter().filter(|e| e.id != id && !e.is_canceled() && e.overlaps(target)).collect()
    }

    /// Scheduled or tentative events starting at or after `now`, soonest first.
    #[must_use]
    pub fn upcoming(&self, now: DateTime<Utc>, kind: Option<EventType>, limit: usize) -> Vec<&CalendarEvent> {
        let mut upcoming: Vec<&CalendarEvent> = self
            .events
            .iter()
            .filter(|e| !e.is_canceled() && e.start >= now && kind.is_none_or(|k| e.kind == k))
            .collect();
        upcoming.sort_by_key(|e| e.start);
        upcoming.truncate(limit);
        upcoming
    }

    /// Non-canceled interviews starting in the Sunday-to-Saturday week of `today`.
    #[must_use]
    pub fn interviews_in_week<Tz: TimeZone>(&self, today: NaiveDate, tz: &Tz) -> usize {
        let start = calendar::grid::week_start(today);
        let end = start.checked_add_days(Days::new(6)).unwrap_or(start);
        self.events
            .iter()
            .filter(|e| e.kind == EventType::Interview && !e.is_canceled())
            .filter(|e| (start..=end).contains(&e.start_date(tz)))
            .count()
    }
}
