//! Calendar event records, the create-event form model, and time-range math.
//!
//! Instants are stored in UTC. The `timezone` field is carried for display
//! only; every computation that needs a wall-clock reading takes the zone as
//! an explicit argument.

#[cfg(test)]
#[path = "event_test.rs"]
mod event_test;

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// Error returned when an [`EventDraft`] or a stored record cannot become a
/// [`CalendarEvent`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EventError {
    /// Title is empty after trimming.
    #[error("event title is required")]
    EmptyTitle,
    /// End instant is equal to or earlier than the start instant.
    #[error("event must end after it starts (start {start}, end {end})")]
    EndNotAfterStart { start: DateTime<Utc>, end: DateTime<Utc> },
    /// A video location was given without a meeting URL.
    #[error("video meetings need a meeting URL")]
    MissingVideoUrl,
}

/// What the meeting is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Interview,
    ClientMeeting,
    Intake,
    Internal,
    Other,
}

impl EventType {
    pub const ALL: [Self; 5] = [Self::Interview, Self::ClientMeeting, Self::Intake, Self::Internal, Self::Other];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Interview => "Interview",
            Self::ClientMeeting => "Client meeting",
            Self::Intake => "Intake",
            Self::Internal => "Internal",
            Self::Other => "Other",
        }
    }

    /// BEM modifier used by event cards, e.g. `event-card--interview`.
    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Interview => "interview",
            Self::ClientMeeting => "client-meeting",
            Self::Intake => "intake",
            Self::Internal => "internal",
            Self::Other => "other",
        }
    }

    /// Parse the wire name (`"client_meeting"`) back into a type.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "interview" => Some(Self::Interview),
            "client_meeting" => Some(Self::ClientMeeting),
            "intake" => Some(Self::Intake),
            "internal" => Some(Self::Internal),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Interview => "interview",
            Self::ClientMeeting => "client_meeting",
            Self::Intake => "intake",
            Self::Internal => "internal",
            Self::Other => "other",
        }
    }
}

/// Scheduling status of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Scheduled,
    Tentative,
    Canceled,
}

impl EventStatus {
    pub const ALL: [Self; 3] = [Self::Scheduled, Self::Tentative, Self::Canceled];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Scheduled => "Scheduled",
            Self::Tentative => "Tentative",
            Self::Canceled => "Canceled",
        }
    }
}

/// Attendee response state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rsvp {
    #[default]
    Pending,
    Accepted,
    Declined,
    Tentative,
}

/// One invited participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendee {
    pub id: String,
    #[serde(default)]
    pub rsvp: Rsvp,
}

/// Where the meeting takes place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Location {
    Video { provider: String, url: String },
    Onsite { room: String, address: String },
}

impl Location {
    /// Single-line summary for cards and detail panels.
    #[must_use]
    pub fn summary(&self) -> String {
        match self {
            Self::Video { provider, .. } => format!("{provider} (video)"),
            Self::Onsite { room, address } if room.is_empty() => address.clone(),
            Self::Onsite { room, address } => format!("{room}, {address}"),
        }
    }
}

/// A scheduled calendar entry.
///
/// Deserialization rejects records whose end is not after their start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawEvent")]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: EventType,
    pub status: EventStatus,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub timezone: String,
    pub attendees: Vec<Attendee>,
    pub location: Location,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidate_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Wire shape of [`CalendarEvent`] before the time range is checked.
#[derive(Deserialize)]
struct RawEvent {
    id: String,
    title: String,
    #[serde(rename = "type")]
    kind: EventType,
    status: EventStatus,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    timezone: String,
    #[serde(default)]
    attendees: Vec<Attendee>,
    location: Location,
    #[serde(default)]
    candidate_id: Option<String>,
    #[serde(default)]
    job_id: Option<String>,
    #[serde(default)]
    notes: Option<String>,
}

impl TryFrom<RawEvent> for CalendarEvent {
    type Error = EventError;

    fn try_from(raw: RawEvent) -> Result<Self, Self::Error> {
        check_range(raw.start, raw.end)?;
        Ok(Self {
            id: raw.id,
            title: raw.title,
            kind: raw.kind,
            status: raw.status,
            start: raw.start,
            end: raw.end,
            timezone: raw.timezone,
            attendees: raw.attendees,
            location: raw.location,
            candidate_id: raw.candidate_id,
            job_id: raw.job_id,
            notes: raw.notes,
        })
    }
}

fn check_range(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<(), EventError> {
    if end <= start {
        return Err(EventError::EndNotAfterStart { start, end });
    }
    Ok(())
}


impl CalendarEvent {
    /// Whole minutes between start and end.
    #[must_use]
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Duration in fractional hours; drives the height of an event card.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn span_hours(&self) -> f64 {
        (self.end - self.start).num_seconds() as f64 / 3600.0
    }

    /// Minutes past the start hour as a fraction of an hour, read in `tz`.
    #[must_use]
    pub fn slot_offset_fraction<Tz: TimeZone>(&self, tz: &Tz) -> f64 {
        f64::from(self.start.with_timezone(tz).minute()) / 60.0
    }

    /// Calendar date of the start instant in `tz`.
    #[must_use]
    pub fn start_date<Tz: TimeZone>(&self, tz: &Tz) -> NaiveDate {
        self.start.with_timezone(tz).date_naive()
    }

    /// Hour of day (0-23) of the start instant in `tz`.
    #[must_use]
    pub fn start_hour<Tz: TimeZone>(&self, tz: &Tz) -> u32 {
        self.start.with_timezone(tz).hour()
    }

    /// Whether the half-open intervals `[start, end)` of both events intersect.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    #[must_use]
    pub fn is_canceled(&self) -> bool {
        self.status == EventStatus::Canceled
    }

    /// Copy of this event moved to `new_start`, keeping its duration.
    #[must_use]
    pub fn rescheduled(&self, new_start: DateTime<Utc>) -> Self {
        let duration: Duration = self.end - self.start;
        Self { start: new_start, end: new_start + duration, ..self.clone() }
    }

    /// `"9:30 AM – 10:15 AM"` in `tz`.
    #[must_use]
    pub fn time_label<Tz: TimeZone>(&self, tz: &Tz) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        format!(
            "{} – {}",
            self.start.with_timezone(tz).format("%-I:%M %p"),
            self.end.with_timezone(tz).format("%-I:%M %p")
        )
    }
}

/// Create-event form contents before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct EventDraft {
    pub title: String,
    pub kind: EventType,
    pub status: EventStatus,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub timezone: String,
    pub attendees: Vec<Attendee>,
    pub location: Location,
    pub candidate_id: Option<String>,
    pub job_id: Option<String>,
    pub notes: Option<String>,
}

impl EventDraft {
    /// Check the draft without consuming it.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule: empty title, `end <= start`, or a
    /// video location without a URL.
    pub fn validate(&self) -> Result<(), EventError> {
        if self.title.trim().is_empty() {
            return Err(EventError::EmptyTitle);
        }
        check_range(self.start, self.end)?;
        if let Location::Video { url, .. } = &self.location {
            if url.trim().is_empty() {
                return Err(EventError::MissingVideoUrl);
            }
        }
        Ok(())
    }

    /// Validate and build the event under a caller-generated id.
    ///
    /// # Errors
    ///
    /// See [`EventDraft::validate`].
    pub fn into_event(self, id: String) -> Result<CalendarEvent, EventError> {
        self.validate()?;
        Ok(CalendarEvent {
            id,
            title: self.title.trim().to_owned(),
            kind: self.kind,
            status: self.status,
            start: self.start,
            end: self.end,
            timezone: self.timezone,
            attendees: self.attendees,
            location: self.location,
            candidate_id: self.candidate_id.filter(|v| !v.is_empty()),
            job_id: self.job_id.filter(|v| !v.is_empty()),
            notes: self.notes.filter(|v| !v.trim().is_empty()),
        })
    }
}
