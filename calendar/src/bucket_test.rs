use chrono::{DateTime, FixedOffset, TimeZone, Utc};

use super::*;
use crate::event::{EventStatus, EventType, Location};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).single().expect("valid instant")
}

fn event(id: &str, start: DateTime<Utc>) -> CalendarEvent {
    CalendarEvent {
        id: id.to_owned(),
        title: format!("Event {id}"),
        kind: EventType::Interview,
        status: EventStatus::Scheduled,
        start,
        end: start + chrono::Duration::minutes(45),
        timezone: "UTC".to_owned(),
        attendees: Vec::new(),
        location: Location::Onsite { room: "1".to_owned(), address: "HQ".to_owned() },
        candidate_id: None,
        job_id: None,
        notes: None,
    }
}

fn ids(events: &[&CalendarEvent]) -> Vec<String> {
    events.iter().map(|e| e.id.clone()).collect()
}

// =============================================================
// Day / week
// =============================================================

#[test]
fn nine_am_event_lands_only_in_nine_am_slot() {
    let events = vec![event("a", at(2025, 3, 5, 9, 15))];
    let buckets = bucket(&events, CalendarView::Day, date(2025, 3, 5), &Utc);
    assert_eq!(buckets.occupied(), 1);
    assert_eq!(ids(buckets.get(&SlotKey::Hour { date: date(2025, 3, 5), hour: 9 })), vec!["a"]);
    assert!(buckets.get(&SlotKey::Hour { date: date(2025, 3, 5), hour: 10 }).is_empty());
}

#[test]
fn seven_am_event_lands_in_no_slot_and_is_reported_as_overflow() {
    let events = vec![event("early", at(2025, 3, 5, 7, 0)), event("late", at(2025, 3, 5, 19, 0))];
    let buckets = bucket(&events, CalendarView::Week, date(2025, 3, 5), &Utc);
    assert_eq!(buckets.placed(), 0);
    assert_eq!(ids(buckets.overflow()), vec!["early", "late"]);
    assert_eq!(buckets.overflow_on(date(2025, 3, 5), &Utc).len(), 2);
    assert!(buckets.overflow_on(date(2025, 3, 6), &Utc).is_empty());
}

#[test]
fn boundary_hours_eight_and_eighteen_are_slotted() {
    let events = vec![event("a", at(2025, 3, 5, 8, 0)), event("b", at(2025, 3, 5, 18, 59))];
    let buckets = bucket(&events, CalendarView::Day, date(2025, 3, 5), &Utc);
    assert_eq!(buckets.placed(), 2);
    assert!(buckets.overflow().is_empty());
}

#[test]
fn day_view_ignores_other_days() {
    let events = vec![event("a", at(2025, 3, 4, 9, 0)), event("b", at(2025, 3, 5, 9, 0))];
    let buckets = bucket(&events, CalendarView::Day, date(2025, 3, 5), &Utc);
    assert_eq!(buckets.placed(), 1);
    assert!(buckets.overflow().is_empty());
}

#[test]
fn week_view_spans_sunday_to_saturday() {
    let events = vec![
        event("sat-before", at(2025, 3, 1, 10, 0)),
        event("sun", at(2025, 3, 2, 10, 0)),
        event("sat", at(2025, 3, 8, 10, 0)),
        event("sun-after", at(2025, 3, 9, 10, 0)),
    ];
    let buckets = bucket(&events, CalendarView::Week, date(2025, 3, 5), &Utc);
    assert_eq!(buckets.placed(), 2);
    assert_eq!(ids(buckets.get(&SlotKey::Hour { date: date(2025, 3, 2), hour: 10 })), vec!["sun"]);
    assert_eq!(ids(buckets.get(&SlotKey::Hour { date: date(2025, 3, 8), hour: 10 })), vec!["sat"]);
}

#[test]
fn same_slot_keeps_input_order() {
    let events = vec![
        event("second", at(2025, 3, 5, 9, 45)),
        event("first", at(2025, 3, 5, 9, 0)),
        event("third", at(2025, 3, 5, 9, 30)),
    ];
    let buckets = bucket(&events, CalendarView::Day, date(2025, 3, 5), &Utc);
    assert_eq!(
        ids(buckets.get(&SlotKey::Hour { date: date(2025, 3, 5), hour: 9 })),
        vec!["second", "first", "third"]
    );
}

#[test]
fn hour_is_read_in_the_supplied_zone() {
    let events = vec![event("a", at(2025, 3, 5, 14, 0))];
    let east = FixedOffset::east_opt(5 * 3600).expect("offset");
    let buckets = bucket(&events, CalendarView::Day, date(2025, 3, 5), &east);
    assert_eq!(ids(buckets.get(&SlotKey::Hour { date: date(2025, 3, 5), hour: 19 })), Vec::<String>::new());
    assert_eq!(ids(buckets.overflow()), vec!["a"]);
}

// =============================================================
// Month
// =============================================================

#[test]
fn month_buckets_by_start_date_ignoring_time() {
    let events = vec![
        event("morning", at(2025, 3, 5, 6, 0)),
        event("evening", at(2025, 3, 5, 21, 0)),
        event("other", at(2025, 3, 6, 12, 0)),
    ];
    let buckets = bucket(&events, CalendarView::Month, date(2025, 3, 17), &Utc);
    assert_eq!(ids(buckets.get(&SlotKey::Day(date(2025, 3, 5)))), vec!["morning", "evening"]);
    assert_eq!(ids(buckets.get(&SlotKey::Day(date(2025, 3, 6)))), vec!["other"]);
    assert!(buckets.overflow().is_empty());
}

#[test]
fn month_includes_leading_and_trailing_grid_days() {
    let events = vec![
        event("lead", at(2025, 2, 23, 12, 0)),
        event("trail", at(2025, 4, 5, 12, 0)),
        event("outside", at(2025, 4, 6, 12, 0)),
    ];
    let buckets = bucket(&events, CalendarView::Month, date(2025, 3, 17), &Utc);
    assert_eq!(buckets.placed(), 2);
    assert_eq!(ids(buckets.get(&SlotKey::Day(date(2025, 2, 23)))), vec!["lead"]);
}

#[test]
fn month_cells_hold_only_their_own_date_and_no_event_repeats() {
    let events: Vec<CalendarEvent> = (0..30u32)
        .map(|i| event(&format!("e{i}"), at(2025, 3, 1 + (i % 28), (i * 5) % 24, 0)))
        .collect();
    let buckets = bucket(&events, CalendarView::Month, date(2025, 3, 1), &Utc);
    let mut seen = std::collections::HashSet::new();
    for (key, slot) in buckets.iter() {
        let SlotKey::Day(cell_date) = key else {
            panic!("month view produced an hour slot");
        };
        for e in slot {
            assert_eq!(e.start_date(&Utc), *cell_date);
            assert!(seen.insert(e.id.clone()), "event {} appears twice", e.id);
        }
    }
    assert_eq!(seen.len(), events.len());
}

// =============================================================
// Agenda
// =============================================================

#[test]
fn agenda_view_does_not_bucket() {
    let events = vec![event("a", at(2025, 3, 5, 9, 0))];
    let buckets = bucket(&events, CalendarView::Agenda, date(2025, 3, 5), &Utc);
    assert!(buckets.is_empty());
}

#[test]
fn bucket_accepts_filtered_references() {
    let events = vec![event("a", at(2025, 3, 5, 9, 0)), event("b", at(2025, 3, 5, 10, 0))];
    let only_b: Vec<&CalendarEvent> = events.iter().filter(|e| e.id == "b").collect();
    let buckets = bucket(only_b, CalendarView::Day, date(2025, 3, 5), &Utc);
    assert_eq!(buckets.placed(), 1);
}
