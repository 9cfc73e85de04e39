use chrono::{DateTime, TimeZone, Utc};

use super::*;
use crate::event::{EventStatus, EventType, Location};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn at(y: i32, mo: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, 0, 0).single().expect("valid instant")
}

fn event(id: &str, start: DateTime<Utc>) -> CalendarEvent {
    CalendarEvent {
        id: id.to_owned(),
        title: id.to_owned(),
        kind: EventType::Internal,
        status: EventStatus::Scheduled,
        start,
        end: start + chrono::Duration::hours(1),
        timezone: "UTC".to_owned(),
        attendees: Vec::new(),
        location: Location::Video { provider: "Meet".to_owned(), url: "https://meet".to_owned() },
        candidate_id: None,
        job_id: None,
        notes: None,
    }
}

#[test]
fn agenda_sorts_and_groups_by_date() {
    let events = vec![
        event("c", at(2025, 3, 6, 9)),
        event("a", at(2025, 3, 5, 7)),
        event("b", at(2025, 3, 5, 20)),
    ];
    let days = agenda(&events, None, &Utc);
    assert_eq!(days.len(), 2);
    assert_eq!(days[0].date, date(2025, 3, 5));
    let first: Vec<&str> = days[0].events.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(first, vec!["a", "b"]);
    assert_eq!(days[1].events[0].id, "c");
}

#[test]
fn agenda_sort_is_stable_for_equal_starts() {
    let events = vec![event("x", at(2025, 3, 5, 9)), event("y", at(2025, 3, 5, 9)), event("z", at(2025, 3, 5, 9))];
    let days = agenda(&events, None, &Utc);
    let order: Vec<&str> = days[0].events.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(order, vec!["x", "y", "z"]);
}

#[test]
fn agenda_respects_range() {
    let events = vec![event("in", at(2025, 3, 5, 9)), event("out", at(2025, 3, 20, 9))];
    let range = DateRange { start: date(2025, 3, 5), end: date(2025, 3, 11) };
    let days = agenda(&events, Some(range), &Utc);
    assert_eq!(days.len(), 1);
    assert_eq!(days[0].events[0].id, "in");
}

#[test]
fn agenda_of_nothing_is_empty() {
    let events: Vec<CalendarEvent> = Vec::new();
    assert!(agenda(&events, None, &Utc).is_empty());
}
