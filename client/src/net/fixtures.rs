//! Static JSON data sets compiled into the client.

#[cfg(test)]
#[path = "fixtures_test.rs"]
mod fixtures_test;

use calendar::CalendarEvent;
use serde::de::DeserializeOwned;

use super::types::{Candidate, Client, InterviewStat, Job, Note};

/// Names accepted by [`raw`], also served by the server under `/api/fixtures/{name}`.
pub const FIXTURE_NAMES: [&str; 6] = ["jobs", "candidates", "clients", "notes", "events", "interview_stats"];

const JOBS: &str = include_str!("../../fixtures/jobs.json");
const CANDIDATES: &str = include_str!("../../fixtures/candidates.json");
const CLIENTS: &str = include_str!("../../fixtures/clients.json");
const NOTES: &str = include_str!("../../fixtures/notes.json");
const EVENTS: &str = include_str!("../../fixtures/events.json");
const INTERVIEW_STATS: &str = include_str!("../../fixtures/interview_stats.json");

#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("fixture {name} is malformed: {source}")]
    Malformed {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Raw JSON text of the fixture called `name`.
#[must_use]
pub fn raw(name: &str) -> Option<&'static str> {
    match name {
        "jobs" => Some(JOBS),
        "candidates" => Some(CANDIDATES),
        "clients" => Some(CLIENTS),
        "notes" => Some(NOTES),
        "events" => Some(EVENTS),
        "interview_stats" => Some(INTERVIEW_STATS),
        _ => None,
    }
}

fn parse<T: DeserializeOwned>(name: &'static str, text: &str) -> Result<Vec<T>, FixtureError> {
    serde_json::from_str(text).map_err(|source| FixtureError::Malformed { name, source })
}

/// Events one by one, so a record with an inverted time range is logged and
/// skipped instead of discarding the whole calendar.
fn parse_events(text: &str) -> Result<Vec<CalendarEvent>, FixtureError> {
    let records: Vec<serde_json::Value> = parse("events", text)?;
    Ok(records
        .into_iter()
        .filter_map(|record| match serde_json::from_value::<CalendarEvent>(record) {
            Ok(event) => Some(event),
            Err(err) => {
                log::warn!("skipping fixture event: {err}");
                None
            }
        })
        .collect())
}

/// Every data set, parsed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Fixtures {
    pub jobs: Vec<Job>,
    pub candidates: Vec<Candidate>,
    pub clients: Vec<Client>,
    pub notes: Vec<Note>,
    pub events: Vec<CalendarEvent>,
    pub interview_stats: Vec<InterviewStat>,
}

impl Fixtures {
    /// # Errors
    ///
    /// [`FixtureError::Malformed`] naming the first data set that fails to parse.
    pub fn load() -> Result<Self, FixtureError> {
        Ok(Self {
            jobs: parse("jobs", JOBS)?,
            candidates: parse("candidates", CANDIDATES)?,
            clients: parse("clients", CLIENTS)?,
            notes: parse("notes", NOTES)?,
            events: parse_events(EVENTS)?,
            interview_stats: parse("interview_stats", INTERVIEW_STATS)?,
        })
    }

    /// Like [`Fixtures::load`], but logs a failure and starts empty.
    #[must_use]
    pub fn load_or_empty() -> Self {
        Self::load().unwrap_or_else(|err| {
            log::error!("fixtures unavailable: {err}");
            Self::default()
        })
    }
}
