//! Create-event dialog for the calendar.
//!
//! The form edits an [`EventFormFields`] of raw input text; submission parses
//! it into a `calendar::EventDraft`, which validates and becomes an event
//! under a fresh UUID.

#[cfg(test)]
#[path = "event_form_test.rs"]
mod event_form_test;

use calendar::{Attendee, EventDraft, EventError, EventStatus, EventType, Location, Rsvp};
use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use leptos::prelude::*;

use crate::state::calendar::CalendarState;
use crate::state::pipeline::PipelineState;
use crate::util::datetime::{format_local_input, parse_local_input};

/// Zones offered by the form. Stored on the event for display only.
pub const TIMEZONES: [&str; 6] =
    ["America/New_York", "America/Chicago", "America/Denver", "America/Los_Angeles", "Europe/London", "UTC"];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("start time is missing or invalid")]
    InvalidStart,
    #[error("end time is missing or invalid")]
    InvalidEnd,
    #[error(transparent)]
    Event(#[from] EventError),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LocationKind {
    #[default]
    Video,
    Onsite,
}

/// Raw form contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventFormFields {
    pub title: String,
    pub kind: EventType,
    pub status: EventStatus,
    /// `datetime-local` text.
    pub start: String,
    pub end: String,
    pub timezone: String,
    pub location_kind: LocationKind,
    pub provider: String,
    pub url: String,
    pub room: String,
    pub address: String,
    pub candidate_id: String,
    pub job_id: String,
    pub notes: String,
}

impl Default for EventFormFields {
    fn default() -> Self {
        Self {
            title: String::new(),
            kind: EventType::Interview,
            status: EventStatus::Scheduled,
            start: String::new(),
            end: String::new(),
            timezone: TIMEZONES[0].to_owned(),
            location_kind: LocationKind::Video,
            provider: "Zoom".to_owned(),
            url: String::new(),
            room: String::new(),
            address: String::new(),
            candidate_id: String::new(),
            job_id: String::new(),
            notes: String::new(),
        }
    }
}

impl EventFormFields {
    /// Blank form with a one-hour slot starting at `start`.
    #[must_use]
    pub fn starting_at<Tz: TimeZone>(start: Option<DateTime<Utc>>, tz: &Tz) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        let mut fields = Self::default();
        if let Some(start) = start {
            fields.start = format_local_input(start, tz);
            fields.end = format_local_input(start + Duration::hours(1), tz);
        }
        fields
    }

    /// Parse the raw text into a draft. The draft still needs validating.
    ///
    /// # Errors
    ///
    /// [`FormError::InvalidStart`] / [`FormError::InvalidEnd`] for unparseable
    /// times.
    pub fn to_draft<Tz: TimeZone>(&self, tz: &Tz) -> Result<EventDraft, FormError> {
        let start = parse_local_input(&self.start, tz).ok_or(FormError::InvalidStart)?;
        let end = parse_local_input(&self.end, tz).ok_or(FormError::InvalidEnd)?;
        let location = match self.location_kind {
            LocationKind::Video => {
                Location::Video { provider: self.provider.trim().to_owned(), url: self.url.trim().to_owned() }
            }
            LocationKind::Onsite => {
                Location::Onsite { room: self.room.trim().to_owned(), address: self.address.trim().to_owned() }
            }
        };
        let candidate_id = non_empty(&self.candidate_id);
        let attendees = candidate_id.iter().map(|id| Attendee { id: id.clone(), rsvp: Rsvp::Pending }).collect();
        Ok(EventDraft {
            title: self.title.clone(),
            kind: self.kind,
            status: self.status,
            start,
            end,
            timezone: self.timezone.clone(),
            attendees,
            location,
            candidate_id,
            job_id: non_empty(&self.job_id),
            notes: non_empty(&self.notes),
        })
    }

    /// Parse and validate in one step.
    ///
    /// # Errors
    ///
    /// Any parse or validation failure.
    pub fn validated<Tz: TimeZone>(&self, tz: &Tz) -> Result<EventDraft, FormError> {
        let draft = self.to_draft(tz)?;
        draft.validate()?;
        Ok(draft)
    }
}

fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

#[component]
pub fn EventForm() -> impl IntoView {
    let calendar = expect_context::<RwSignal<CalendarState>>();
    let pipeline = expect_context::<RwSignal<PipelineState>>();
    let fields = RwSignal::new(EventFormFields::starting_at(calendar.with_untracked(|s| s.form_start), &Local));
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let draft = match fields.with_untracked(|f| f.validated(&Local)) {
            Ok(draft) => draft,
            Err(err) => {
                error.set(Some(err.to_string()));
                return;
            }
        };
        let id = uuid::Uuid::new_v4().to_string();
        match calendar.try_update(|s| s.add_event(draft, id)) {
            Some(Err(err)) => error.set(Some(err.to_string())),
            Some(Ok(())) | None => error.set(None),
        }
    };

    let text_input = move |label: &'static str,
                           input_type: &'static str,
                           get: fn(&EventFormFields) -> &String,
                           set: fn(&mut EventFormFields, String)| {
        view! {
            <label class="form-field">
                <span class="form-field__label">{label}</span>
                <input
                    type=input_type
                    prop:value=move || fields.with(|f| get(f).clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        fields.update(|f| set(f, value));
                    }
                />
            </label>
        }
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| calendar.update(CalendarState::close_form)>
            <form class="modal event-form" on:submit=on_submit on:click=|ev| ev.stop_propagation()>
                <h2>"New event"</h2>
                {text_input("Title", "text", |f| &f.title, |f, v| f.title = v)}
                <label class="form-field">
                    <span class="form-field__label">"Type"</span>
                    <select on:change=move |ev| {
                        if let Some(kind) = EventType::parse(&event_target_value(&ev)) {
                            fields.update(|f| f.kind = kind);
                        }
                    }>
                        {EventType::ALL
                            .into_iter()
                            .map(|kind| {
                                view! {
                                    <option value=kind.as_str() selected=move || fields.with(|f| f.kind == kind)>
                                        {kind.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </label>
                <label class="form-field form-field--inline">
                    <input
                        type="checkbox"
                        prop:checked=move || fields.with(|f| f.status == EventStatus::Tentative)
                        on:change=move |ev| {
                            let status = if event_target_checked(&ev) { EventStatus::Tentative } else { EventStatus::Scheduled };
                            fields.update(|f| f.status = status);
                        }
                    />
                    "Tentative"
                </label>
                {text_input("Start", "datetime-local", |f| &f.start, |f, v| f.start = v)}
                {text_input("End", "datetime-local", |f| &f.end, |f, v| f.end = v)}
                <label class="form-field">
                    <span class="form-field__label">"Time zone"</span>
                    <select on:change=move |ev| {
                        let tz = event_target_value(&ev);
                        fields.update(|f| f.timezone = tz);
                    }>
                        {TIMEZONES
                            .into_iter()
                            .map(|tz| {
                                view! {
                                    <option value=tz selected=move || fields.with(|f| f.timezone == tz)>
                                        {tz}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </label>
                <fieldset class="form-field">
                    <legend>"Location"</legend>
                    <label>
                        <input
                            type="radio"
                            name="location-kind"
                            prop:checked=move || fields.with(|f| f.location_kind == LocationKind::Video)
                            on:change=move |_| fields.update(|f| f.location_kind = LocationKind::Video)
                        />
                        "Video"
                    </label>
                    <label>
                        <input
                            type="radio"
                            name="location-kind"
                            prop:checked=move || fields.with(|f| f.location_kind == LocationKind::Onsite)
                            on:change=move |_| fields.update(|f| f.location_kind = LocationKind::Onsite)
                        />
                        "Onsite"
                    </label>
                </fieldset>
                <Show
                    when=move || fields.with(|f| f.location_kind == LocationKind::Video)
                    fallback=move || {
                        view! {
                            {text_input("Room", "text", |f| &f.room, |f, v| f.room = v)}
                            {text_input("Address", "text", |f| &f.address, |f, v| f.address = v)}
                        }
                    }
                >
                    {text_input("Provider", "text", |f| &f.provider, |f, v| f.provider = v)}
                    {text_input("Meeting URL", "url", |f| &f.url, |f, v| f.url = v)}
                </Show>
                <label class="form-field">
                    <span class="form-field__label">"Candidate"</span>
                    <select on:change=move |ev| {
                        let id = event_target_value(&ev);
                        fields.update(|f| f.candidate_id = id);
                    }>
                        <option value="">"None"</option>
                        {move || {
                            pipeline
                                .with(|p| p.candidates.iter().map(|c| (c.id.clone(), c.name.clone())).collect::<Vec<_>>())
                                .into_iter()
                                .map(|(id, name)| view! { <option value=id>{name}</option> })
                                .collect_view()
                        }}
                    </select>
                </label>
                <label class="form-field">
                    <span class="form-field__label">"Job"</span>
                    <select on:change=move |ev| {
                        let id = event_target_value(&ev);
                        fields.update(|f| f.job_id = id);
                    }>
                        <option value="">"None"</option>
                        {move || {
                            pipeline
                                .with(|p| p.jobs.iter().map(|j| (j.id.clone(), j.title.clone())).collect::<Vec<_>>())
                                .into_iter()
                                .map(|(id, title)| view! { <option value=id>{title}</option> })
                                .collect_view()
                        }}
                    </select>
                </label>
                <label class="form-field">
                    <span class="form-field__label">"Notes"</span>
                    <textarea
                        prop:value=move || fields.with(|f| f.notes.clone())
                        on:input=move |ev| {
                            let notes = event_target_value(&ev);
                            fields.update(|f| f.notes = notes);
                        }
                    ></textarea>
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="form-error" role="alert">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="modal__actions">
                    <button type="button" class="btn" on:click=move |_| calendar.update(CalendarState::close_form)>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn--primary">"Create"</button>
                </div>
            </form>
        </div>
    }
}
