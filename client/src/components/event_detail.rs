//! Side panel for the selected calendar event.

use calendar::Location;
use chrono::Local;
use leptos::prelude::*;

use crate::state::calendar::CalendarState;
use crate::state::pipeline::PipelineState;

#[component]
pub fn EventDetail() -> impl IntoView {
    let calendar = expect_context::<RwSignal<CalendarState>>();
    let pipeline = expect_context::<RwSignal<PipelineState>>();
    let selected = move || calendar.with(|s| s.selected().cloned());

    move || {
        selected().map(|event| {
            let id = event.id.clone();
            let (candidate, job) = pipeline.with(|p| {
                (
                    p.candidate(event.candidate_id.as_deref()).map(|c| c.name.clone()),
                    p.job(event.job_id.as_deref()).map(|j| j.title.clone()),
                )
            });
            let conflicts = calendar.with(|s| s.conflicts(&event.id).len());
            let link = match &event.location {
                Location::Video { url, .. } => Some(url.clone()),
                Location::Onsite { .. } => None,
            };
            let class = format!("event-detail event--{}", event.kind.css_modifier());
            view! {
                <aside class=class>
                    <header class="event-detail__header">
                        <h3>{event.title.clone()}</h3>
                        <button
                            class="btn event-detail__close"
                            aria-label="Close"
                            on:click=move |_| calendar.update(|s| s.select(None))
                        >
                            "✕"
                        </button>
                    </header>
                    <dl class="event-detail__fields">
                        <dt>"Type"</dt>
                        <dd>{event.kind.label()}</dd>
                        <dt>"Status"</dt>
                        <dd>{event.status.label()}</dd>
                        <dt>"When"</dt>
                        <dd>
                            {event.start.with_timezone(&Local).format("%A, %B %-d").to_string()} " · "
                            {event.time_label(&Local)} {format!(" ({} min)", event.duration_minutes())}
                        </dd>
                        {(conflicts > 0)
                            .then(|| {
                                view! {
                                    <dt>"Conflicts"</dt>
                                    <dd class="event-detail__conflicts">
                                        {format!("Overlaps {conflicts} other event(s)")}
                                    </dd>
                                }
                            })}
                        <dt>"Time zone"</dt>
                        <dd>{event.timezone.clone()}</dd>
                        <dt>"Where"</dt>
                        <dd>
                            {event.location.summary()}
                            {link.map(|url| view! { <a class="event-detail__join" href=url target="_blank" rel="noopener">"Join"</a> })}
                        </dd>
                        <dt>"Candidate"</dt>
                        <dd>{candidate.unwrap_or_else(|| "—".to_owned())}</dd>
                        <dt>"Job"</dt>
                        <dd>{job.unwrap_or_else(|| "—".to_owned())}</dd>
                        <dt>"Attendees"</dt>
                        <dd>{event.attendees.len()}</dd>
                    </dl>
                    {event.notes.clone().map(|notes| view! { <p class="event-detail__notes">{notes}</p> })}
                    <button
                        class="btn btn--danger"
                        on:click=move |_| {
                            calendar.update(|s| {
                                s.delete_event(&id);
                            });
                        }
                    >
                        "Delete event"
                    </button>
                </aside>
            }
        })
    }
}
