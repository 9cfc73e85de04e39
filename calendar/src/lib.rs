//! Calendar data model and view derivation for the recruiting scheduler.
//!
//! This crate is UI-framework agnostic so the client can consume it directly
//! when rendering day, week, month, and agenda views. It never touches the
//! DOM or the clock; callers pass the reference date and the time zone used
//! to read event instants.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`event`] | Event records, form drafts, validation, time-range math |
//! | [`bucket`] | Event-to-slot bucketing for day/week/month views |
//! | [`agenda`] | Sorted, date-grouped agenda listing |
//! | [`grid`] | Month grid, week days, and hour rows |
//! | [`view`] | View modes, visible ranges, navigation, toolbar labels |
//! | [`filter`] | Type/status/search filtering applied before bucketing |

pub mod agenda;
pub mod bucket;
pub mod event;
pub mod filter;
pub mod grid;
pub mod view;

pub use agenda::{AgendaDay, agenda};
pub use bucket::{Buckets, SlotKey, bucket};
pub use event::{Attendee, CalendarEvent, EventDraft, EventError, EventStatus, EventType, Location, Rsvp};
pub use filter::EventFilter;
pub use grid::{GridCell, month_grid, week_days};
pub use view::{CalendarView, DateRange, Direction, navigate, range_label, visible_range};
