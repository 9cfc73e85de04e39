//! Dashboard page: headline counts, the interview chart, and upcoming
//! interviews.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here is derived from the shared domain containers; the page
//! owns no state of its own.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use calendar::EventType;
use chrono::{Local, NaiveDate, TimeZone, Utc};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::interview_chart::InterviewChart;
use crate::components::stat_card::StatCard;
use crate::state::calendar::CalendarState;
use crate::state::notes::NotesState;
use crate::state::pipeline::PipelineState;
use crate::state::ui::Section;

/// Upcoming interviews listed under the chart.
const UPCOMING_LIMIT: usize = 5;

/// Headline figures across the app's data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub open_jobs: usize,
    pub active_candidates: usize,
    pub interviews_this_week: usize,
    pub notes: usize,
}

impl DashboardStats {
    #[must_use]
    pub fn collect<Tz: TimeZone>(
        pipeline: &PipelineState,
        calendar: &CalendarState,
        notes: &NotesState,
        today: NaiveDate,
        tz: &Tz,
    ) -> Self {
        Self {
            open_jobs: pipeline.open_jobs(),
            active_candidates: pipeline.active_candidates(),
            interviews_this_week: calendar.interviews_in_week(today, tz),
            notes: notes.notes.len(),
        }
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let pipeline = expect_context::<RwSignal<PipelineState>>();
    let calendar = expect_context::<RwSignal<CalendarState>>();
    let notes = expect_context::<RwSignal<NotesState>>();

    let stats = Memo::new(move |_| {
        pipeline.with(|p| calendar.with(|c| notes.with(|n| DashboardStats::collect(p, c, n, c.today, &Local))))
    });
    let figure = move |pick: fn(&DashboardStats) -> usize| Signal::derive(move || pick(&stats.get()).to_string());

    let rows = move || {
        calendar.with(|c| {
            pipeline.with(|p| {
                c.upcoming(Utc::now(), Some(EventType::Interview), UPCOMING_LIMIT)
                    .into_iter()
                    .map(|e| (e.clone(), p.candidate(e.candidate_id.as_deref()).map(|c| c.name.clone())))
                    .collect::<Vec<_>>()
            })
        })
    };
    let upcoming = move || {
        rows()
            .into_iter()
            .map(|(event, candidate)| {
                let when = event.start.with_timezone(&Local).format("%a %b %-d").to_string();
                view! {
                    <li class="upcoming__item">
                        <span class="upcoming__when">{when} " · " {event.time_label(&Local)}</span>
                        <span class="upcoming__title">{event.title.clone()}</span>
                        {candidate.map(|name| view! { <span class="upcoming__candidate">{name}</span> })}
                    </li>
                }
            })
            .collect_view()
    };
    let has_upcoming = move || !rows().is_empty();

    view! {
        <div class="dashboard-page">
            <h1>"Dashboard"</h1>
            <section class="dashboard-page__stats">
                <StatCard label="Open jobs" value=figure(|s| s.open_jobs) />
                <StatCard label="Active candidates" value=figure(|s| s.active_candidates) hint="Not hired or rejected" />
                <StatCard label="Interviews this week" value=figure(|s| s.interviews_this_week) />
                <StatCard label="Notes" value=figure(|s| s.notes) />
            </section>
            <InterviewChart />
            <section class="upcoming">
                <header class="upcoming__header">
                    <h2>"Upcoming interviews"</h2>
                    <A href=Section::Calendar.path() attr:class="upcoming__all">
                        "Open calendar"
                    </A>
                </header>
                <Show when=has_upcoming fallback=|| view! { <p class="upcoming__empty">"Nothing scheduled."</p> }>
                    <ul class="upcoming__list">{upcoming}</ul>
                </Show>
            </section>
        </div>
    }
}
