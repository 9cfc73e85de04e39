//! Event filtering applied before bucketing.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use std::collections::BTreeSet;

use crate::event::{CalendarEvent, EventStatus, EventType};

/// Which events the calendar shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventFilter {
    include_types: BTreeSet<EventType>,
    include_statuses: BTreeSet<EventStatus>,
    search: String,
}

impl Default for EventFilter {
    fn default() -> Self {
        Self {
            include_types: EventType::ALL.into_iter().collect(),
            include_statuses: [EventStatus::Scheduled, EventStatus::Tentative].into_iter().collect(),
            search: String::new(),
        }
    }
}

impl EventFilter {
    #[must_use]
    pub fn includes_type(&self, kind: EventType) -> bool {
        self.include_types.contains(&kind)
    }

    #[must_use]
    pub fn includes_status(&self, status: EventStatus) -> bool {
        self.include_statuses.contains(&status)
    }

    pub fn toggle_type(&mut self, kind: EventType) {
        if !self.include_types.remove(&kind) {
            self.include_types.insert(kind);
        }
    }

    pub fn toggle_status(&mut self, status: EventStatus) {
        if !self.include_statuses.remove(&status) {
            self.include_statuses.insert(status);
        }
    }

    /// Shortcut for including or hiding canceled events.
    pub fn set_show_canceled(&mut self, show: bool) {
        if show {
            self.include_statuses.insert(EventStatus::Canceled);
        } else {
            self.include_statuses.remove(&EventStatus::Canceled);
        }
    }

    #[must_use]
    pub fn shows_canceled(&self) -> bool {
        self.includes_status(EventStatus::Canceled)
    }

    pub fn set_search(&mut self, search: &str) {
        search.trim().to_lowercase().clone_into(&mut self.search);
    }

    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Case-insensitive match of the search text against the title and notes.
    #[must_use]
    pub fn matches(&self, event: &CalendarEvent) -> bool {
        if !self.includes_type(event.kind) || !self.includes_status(event.status) {
            return false;
        }
        if self.search.is_empty() {
            return true;
        }
        event.title.to_lowercase().contains(&self.search)
            || event.notes.as_deref().is_some_and(|n| n.to_lowercase().contains(&self.search))
    }

    /// Matching events in input order.
    pub fn apply<'a>(&self, events: &'a [CalendarEvent]) -> Vec<&'a CalendarEvent> {
        events.iter().filter(|e| self.matches(e)).collect()
    }
}
