//! Create/edit dialog for a note.

use chrono::Utc;
use leptos::prelude::*;

use crate::state::notes::{NoteDraft, NotesState};
use crate::state::pipeline::PipelineState;

#[component]
pub fn NoteEditor() -> impl IntoView {
    let notes = expect_context::<RwSignal<NotesState>>();
    let pipeline = expect_context::<RwSignal<PipelineState>>();

    let editing = notes.with_untracked(|n| n.editing.clone());
    let draft = RwSignal::new(
        notes.with_untracked(|n| editing.as_deref().and_then(|id| n.note(id)).map(NoteDraft::from_note).unwrap_or_default()),
    );
    let error = RwSignal::new(None::<String>);
    let heading = if editing.is_some() { "Edit note" } else { "New note" };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let current = draft.get_untracked();
        let now = Utc::now();
        let result = notes.try_update(|n| match editing.as_deref() {
            Some(id) => n.update(id, current, now),
            None => n.create(current, uuid::Uuid::new_v4().to_string(), now),
        });
        match result {
            Some(Err(err)) => error.set(Some(err.to_string())),
            Some(Ok(())) | None => error.set(None),
        }
    };

    let link_select = move |label: &'static str,
                            options: fn(&PipelineState) -> Vec<(String, String)>,
                            get: fn(&NoteDraft) -> Option<String>,
                            set: fn(&mut NoteDraft, Option<String>)| {
        view! {
            <label class="form-field">
                <span class="form-field__label">{label}</span>
                <select on:change=move |ev| {
                    let id = event_target_value(&ev);
                    draft.update(|d| set(d, (!id.is_empty()).then_some(id)));
                }>
                    <option value="">"None"</option>
                    {move || {
                        let current = draft.with(get);
                        pipeline
                            .with(options)
                            .into_iter()
                            .map(|(id, name)| {
                                let selected = current.as_deref() == Some(id.as_str());
                                view! {
                                    <option value=id selected=selected>
                                        {name}
                                    </option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
            </label>
        }
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| notes.update(NotesState::close_editor)>
            <form class="modal note-editor" on:submit=on_submit on:click=|ev| ev.stop_propagation()>
                <h2>{heading}</h2>
                <label class="form-field">
                    <span class="form-field__label">"Title"</span>
                    <input
                        type="text"
                        prop:value=move || draft.with(|d| d.title.clone())
                        on:input=move |ev| {
                            let title = event_target_value(&ev);
                            draft.update(|d| d.title = title);
                        }
                    />
                </label>
                <label class="form-field">
                    <span class="form-field__label">"Body"</span>
                    <textarea
                        rows="8"
                        prop:value=move || draft.with(|d| d.body.clone())
                        on:input=move |ev| {
                            let body = event_target_value(&ev);
                            draft.update(|d| d.body = body);
                        }
                    ></textarea>
                </label>
                <label class="form-field">
                    <span class="form-field__label">"Tags (comma separated)"</span>
                    <input
                        type="text"
                        prop:value=move || draft.with(|d| d.tags.clone())
                        on:input=move |ev| {
                            let tags = event_target_value(&ev);
                            draft.update(|d| d.tags = tags);
                        }
                    />
                </label>
                {link_select(
                    "Client",
                    |p| p.clients.iter().map(|c| (c.id.clone(), c.name.clone())).collect(),
                    |d| d.client_id.clone(),
                    |d, v| d.client_id = v,
                )}
                {link_select(
                    "Job",
                    |p| p.jobs.iter().map(|j| (j.id.clone(), j.title.clone())).collect(),
                    |d| d.job_id.clone(),
                    |d, v| d.job_id = v,
                )}
                {link_select(
                    "Candidate",
                    |p| p.candidates.iter().map(|c| (c.id.clone(), c.name.clone())).collect(),
                    |d| d.candidate_id.clone(),
                    |d, v| d.candidate_id = v,
                )}
                <Show when=move || error.get().is_some()>
                    <p class="form-error" role="alert">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="modal__actions">
                    <button type="button" class="btn" on:click=move |_| notes.update(NotesState::close_editor)>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn--primary">"Save"</button>
                </div>
            </form>
        </div>
    }
}
