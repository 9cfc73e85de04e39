//! Day, week, month and agenda renderings of the calendar.
//!
//! DESIGN
//! ======
//! Every view re-derives its layout from `CalendarState` on each change:
//! filter, then `calendar::bucket` (or `calendar::agenda`), then render.
//! Events are read in the browser's local time zone. Dragging a chip onto
//! another hour cell or day cell reschedules it, keeping its duration and its
//! minutes past the hour.

#[cfg(test)]
#[path = "calendar_views_test.rs"]
mod calendar_views_test;

use calendar::grid::{day_hours, hour_label};
use calendar::{CalendarEvent, CalendarView, SlotKey, agenda, bucket, month_grid, visible_range, week_days};
use chrono::{DateTime, Datelike, Local, NaiveDate, TimeZone, Timelike, Utc};
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::state::calendar::CalendarState;

/// Chips shown in one month cell before collapsing into "+N more".
pub const MONTH_CELL_LIMIT: usize = 3;

/// Smallest card height as a fraction of an hour row, so short events stay
/// clickable.
const MIN_SPAN_FRACTION: f64 = 0.25;

const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Dates shown as columns by the day and week views.
#[must_use]
pub fn grid_days(state: &CalendarState) -> Vec<NaiveDate> {
    match state.view {
        CalendarView::Day => vec![state.reference],
        _ => week_days(state.reference).to_vec(),
    }
}

/// Inline position of an event card inside its hour cell.
#[must_use]
pub fn chip_style<Tz: TimeZone>(event: &CalendarEvent, tz: &Tz) -> String {
    let top = event.slot_offset_fraction(tz) * 100.0;
    let height = event.span_hours().max(MIN_SPAN_FRACTION) * 100.0;
    format!("top: {top:.2}%; height: {height:.2}%;")
}

/// Local `date` at `hour:00` as a UTC instant.
#[must_use]
pub fn slot_start<Tz: TimeZone>(date: NaiveDate, hour: u32, tz: &Tz) -> Option<DateTime<Utc>> {
    let naive = date.and_hms_opt(hour, 0, 0)?;
    tz.from_local_datetime(&naive).earliest().map(|dt| dt.with_timezone(&Utc))
}

/// New start for `event` dropped on `date`, at `hour` when given or at its
/// current hour otherwise. Minutes past the hour are kept.
#[must_use]
pub fn moved_start<Tz: TimeZone>(
    event: &CalendarEvent,
    date: NaiveDate,
    hour: Option<u32>,
    tz: &Tz,
) -> Option<DateTime<Utc>> {
    let local = event.start.with_timezone(tz);
    let naive = date.and_hms_opt(hour.unwrap_or_else(|| local.hour()), local.minute(), 0)?;
    tz.from_local_datetime(&naive).earliest().map(|dt| dt.with_timezone(&Utc))
}

/// Split a cell's events into the visible chips and the hidden count.
#[must_use]
pub fn split_for_cell<T>(mut events: Vec<T>, limit: usize) -> (Vec<T>, usize) {
    let hidden = events.len().saturating_sub(limit);
    events.truncate(limit);
    (events, hidden)
}

/// The active view.
#[component]
pub fn CalendarViews() -> impl IntoView {
    let calendar = expect_context::<RwSignal<CalendarState>>();
    let dragging = RwSignal::new(None::<String>);

    move || match calendar.with(|s| s.view) {
        CalendarView::Day | CalendarView::Week => view! { <TimeGrid dragging=dragging/> }.into_any(),
        CalendarView::Month => view! { <MonthGrid dragging=dragging/> }.into_any(),
        CalendarView::Agenda => view! { <AgendaList/> }.into_any(),
    }
}

fn drop_on(calendar: RwSignal<CalendarState>, dragging: RwSignal<Option<String>>, date: NaiveDate, hour: Option<u32>) {
    let Some(id) = dragging.get_untracked() else {
        return;
    };
    dragging.set(None);
    calendar.update(|s| {
        let start = s.events.iter().find(|e| e.id == id).and_then(|e| moved_start(e, date, hour, &Local));
        match start {
            Some(start) => {
                s.reschedule(&id, start);
            }
            None => log::warn!("cannot reschedule {id} to {date}"),
        }
    });
}

#[component]
fn TimeGrid(dragging: RwSignal<Option<String>>) -> impl IntoView {
    let calendar = expect_context::<RwSignal<CalendarState>>();

    view! {
        <div class="time-grid" style=move || format!("--day-count: {};", calendar.with(grid_days).len())>
            <div class="time-grid__corner"></div>
            {move || {
                calendar
                    .with(grid_days)
                    .into_iter()
                    .map(|date| {
                        view! {
                            <div class="time-grid__day-head" class:time-grid__day-head--today=move || calendar.with(|s| s.today) == date>
                                {date.format("%a %-d").to_string()}
                            </div>
                        }
                    })
                    .collect_view()
            }}
            <div class="time-grid__hour time-grid__hour--overflow">"Other"</div>
            {move || {
                calendar
                    .with(|s| {
                        let buckets = bucket(s.visible_events(), s.view, s.reference, &Local);
                        grid_days(s)
                            .into_iter()
                            .map(|date| buckets.overflow_on(date, &Local).into_iter().cloned().collect::<Vec<_>>())
                            .collect::<Vec<_>>()
                    })
                    .into_iter()
                    .map(|events| {
                        view! {
                            <div class="time-grid__overflow">
                                {events
                                    .into_iter()
                                    .map(|event| view! { <EventChip event=event dragging=dragging/> })
                                    .collect_view()}
                            </div>
                        }
                    })
                    .collect_view()
            }}
            {move || {
                let rows = calendar
                    .with(|s| {
                        let buckets = bucket(s.visible_events(), s.view, s.reference, &Local);
                        let days = grid_days(s);
                        day_hours()
                            .map(|hour| {
                                let cells = days
                                    .iter()
                                    .map(|&date| {
                                        let events: Vec<CalendarEvent> = buckets
                                            .get(&SlotKey::Hour { date, hour })
                                            .iter()
                                            .map(|e| (*e).clone())
                                            .collect();
                                        (date, events)
                                    })
                                    .collect::<Vec<_>>();
                                (hour, cells)
                            })
                            .collect::<Vec<_>>()
                    });
                rows.into_iter()
                    .map(|(hour, cells)| {
                        view! {
                            <div class="time-grid__hour">{hour_label(hour)}</div>
                            {cells
                                .into_iter()
                                .map(|(date, events)| {
                                    view! {
                                        <div
                                            class="time-grid__cell"
                                            on:click=move |_| {
                                                calendar.update(|s| s.open_form(slot_start(date, hour, &Local)));
                                            }
                                            on:dragover=|ev: leptos::ev::DragEvent| ev.prevent_default()
                                            on:drop=move |ev: leptos::ev::DragEvent| {
                                                ev.prevent_default();
                                                drop_on(calendar, dragging, date, Some(hour));
                                            }
                                        >
                                            {events
                                                .into_iter()
                                                .map(|event| {
                                                    view! { <EventChip event=event dragging=dragging positioned=true/> }
                                                })
                                                .collect_view()}
                                        </div>
                                    }
                                })
                                .collect_view()}
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
fn MonthGrid(dragging: RwSignal<Option<String>>) -> impl IntoView {
    let calendar = expect_context::<RwSignal<CalendarState>>();

    view! {
        <div class="month-grid">
            {WEEKDAY_LABELS.into_iter().map(|d| view! { <div class="month-grid__weekday">{d}</div> }).collect_view()}
            {move || {
                let cells = calendar
                    .with(|s| {
                        let buckets = bucket(s.visible_events(), CalendarView::Month, s.reference, &Local);
                        month_grid(s.reference, s.today)
                            .into_iter()
                            .map(|cell| {
                                let events: Vec<CalendarEvent> =
                                    buckets.get(&SlotKey::Day(cell.date)).iter().map(|e| (*e).clone()).collect();
                                (cell, events)
                            })
                            .collect::<Vec<_>>()
                    });
                cells
                    .into_iter()
                    .map(|(cell, events)| {
                        let (shown, hidden) = split_for_cell(events, MONTH_CELL_LIMIT);
                        let date = cell.date;
                        view! {
                            <div
                                class="month-grid__cell"
                                class:month-grid__cell--outside=!cell.in_month
                                class:month-grid__cell--today=cell.is_today
                                on:dragover=|ev: leptos::ev::DragEvent| ev.prevent_default()
                                on:drop=move |ev: leptos::ev::DragEvent| {
                                    ev.prevent_default();
                                    drop_on(calendar, dragging, date, None);
                                }
                            >
                                <button class="month-grid__date" on:click=move |_| calendar.update(|s| s.open_day(date))>
                                    {date.day()}
                                </button>
                                {shown
                                    .into_iter()
                                    .map(|event| view! { <EventChip event=event dragging=dragging/> })
                                    .collect_view()}
                                {(hidden > 0)
                                    .then(|| {
                                        view! {
                                            <button
                                                class="month-grid__more"
                                                on:click=move |_| calendar.update(|s| s.open_day(date))
                                            >
                                                {format!("+{hidden} more")}
                                            </button>
                                        }
                                    })}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
fn AgendaList() -> impl IntoView {
    let calendar = expect_context::<RwSignal<CalendarState>>();

    move || {
        let days = calendar.with(|s| {
            let range = visible_range(CalendarView::Agenda, s.reference);
            agenda(s.visible_events(), Some(range), &Local)
                .into_iter()
                .map(|day| (day.date, day.events.into_iter().cloned().collect::<Vec<_>>()))
                .collect::<Vec<_>>()
        });
        if days.is_empty() {
            return view! { <p class="agenda__empty">"Nothing scheduled in this range."</p> }.into_any();
        }
        view! {
            <div class="agenda">
                {days
                    .into_iter()
                    .map(|(date, events)| {
                        view! {
                            <section class="agenda__day">
                                <h3 class="agenda__date">{date.format("%A, %B %-d").to_string()}</h3>
                                {events.into_iter().map(|event| view! { <AgendaRow event=event/> }).collect_view()}
                            </section>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_any()
    }
}

#[component]
fn AgendaRow(event: CalendarEvent) -> impl IntoView {
    let calendar = expect_context::<RwSignal<CalendarState>>();
    let id = event.id.clone();
    let class = format!("agenda__row event--{}", event.kind.css_modifier());

    view! {
        <button
            class=class
            class:agenda__row--canceled=event.is_canceled()
            on:click=move |_| calendar.update(|s| s.select(Some(id.clone())))
        >
            <span class="agenda__time">{event.time_label(&Local)}</span>
            <span class="agenda__title">{event.title.clone()}</span>
            <span class="agenda__kind">{event.kind.label()}</span>
            <span class="agenda__location">{event.location.summary()}</span>
        </button>
    }
}

#[component]
fn EventChip(
    event: CalendarEvent,
    dragging: RwSignal<Option<String>>,
    #[prop(optional)] positioned: bool,
) -> impl IntoView {
    let calendar = expect_context::<RwSignal<CalendarState>>();
    let style = if positioned { chip_style(&event, &Local) } else { String::new() };
    let class = format!("event-chip event--{}", event.kind.css_modifier());
    let title = format!("{} ({})", event.title, event.time_label(&Local));

    let selected = {
        let id = event.id.clone();
        move || calendar.with(|s| s.selected_event.as_deref() == Some(id.as_str()))
    };
    let on_click = {
        let id = event.id.clone();
        move |ev: leptos::ev::MouseEvent| {
            ev.stop_propagation();
            calendar.update(|s| s.select(Some(id.clone())));
        }
    };
    let on_drag_start = {
        let id = event.id.clone();
        move |_| dragging.set(Some(id.clone()))
    };

    view! {
        <div
            class=class
            class:event-chip--positioned=positioned
            class:event-chip--selected=selected
            class:event-chip--canceled=event.is_canceled()
            style=style
            title=title
            draggable="true"
            on:click=on_click
            on:dragstart=on_drag_start
            on:dragend=move |_| dragging.set(None)
        >
            <span class="event-chip__time">{event.start.with_timezone(&Local).format("%-I:%M").to_string()}</span>
            <span class="event-chip__title">{event.title.clone()}</span>
        </div>
    }
}
