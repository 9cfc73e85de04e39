//! Notes page: search, link filter, pinned-first list, and the editor dialog.

#[cfg(test)]
#[path = "notes_test.rs"]
mod notes_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::note_card::NoteCard;
use crate::components::note_editor::NoteEditor;
use crate::state::notes::{LinkFilter, NotesState};
use crate::state::pipeline::PipelineState;

/// `<select>` value for a link filter: `""` or `"{kind}:{id}"`.
#[must_use]
pub fn link_value(filter: &LinkFilter) -> String {
    match filter {
        LinkFilter::All => String::new(),
        LinkFilter::Client(id) => format!("client:{id}"),
        LinkFilter::Job(id) => format!("job:{id}"),
        LinkFilter::Candidate(id) => format!("candidate:{id}"),
    }
}

/// Inverse of [`link_value`]; anything unrecognized shows all notes.
#[must_use]
pub fn parse_link_value(raw: &str) -> LinkFilter {
    match raw.split_once(':') {
        Some(("client", id)) if !id.is_empty() => LinkFilter::Client(id.to_owned()),
        Some(("job", id)) if !id.is_empty() => LinkFilter::Job(id.to_owned()),
        Some(("candidate", id)) if !id.is_empty() => LinkFilter::Candidate(id.to_owned()),
        _ => LinkFilter::All,
    }
}

#[component]
pub fn NotesPage() -> impl IntoView {
    let notes = expect_context::<RwSignal<NotesState>>();
    let pipeline = expect_context::<RwSignal<PipelineState>>();
    let search = RwSignal::new(notes.with_untracked(|n| n.search().to_owned()));

    // Rebuild the dialog whenever a different note is opened.
    let editor = Memo::new(move |_| notes.with(|n| n.composing.then(|| n.editing.clone())));

    let link_options = move || {
        let current = notes.with(|n| link_value(&n.link));
        pipeline.with(|p| {
            let groups: [(&str, Vec<(LinkFilter, String)>); 3] = [
                ("Clients", p.clients.iter().map(|c| (LinkFilter::Client(c.id.clone()), c.name.clone())).collect()),
                ("Jobs", p.jobs.iter().map(|j| (LinkFilter::Job(j.id.clone()), j.title.clone())).collect()),
                (
                    "Candidates",
                    p.candidates.iter().map(|c| (LinkFilter::Candidate(c.id.clone()), c.name.clone())).collect(),
                ),
            ];
            groups
                .into_iter()
                .map(|(label, options)| {
                    let options = options
                        .into_iter()
                        .map(|(filter, name)| {
                            let value = link_value(&filter);
                            let selected = value == current;
                            view! {
                                <option value=value selected=selected>
                                    {name}
                                </option>
                            }
                        })
                        .collect_view();
                    view! { <optgroup label=label>{options}</optgroup> }
                })
                .collect_view()
        })
    };

    let list = move || {
        let visible: Vec<_> = notes.with(|n| n.visible().into_iter().cloned().collect());
        if visible.is_empty() {
            return view! { <p class="notes-page__empty">"No notes match."</p> }.into_any();
        }
        view! {
            <div class="notes-page__list">
                {visible.into_iter().map(|note| view! { <NoteCard note=note /> }).collect_view()}
            </div>
        }
        .into_any()
    };

    view! {
        <div class="notes-page">
            <header class="notes-page__header">
                <h1>"Notes"</h1>
                <button class="btn btn--primary" on:click=move |_| notes.update(NotesState::open_new)>
                    "+ New note"
                </button>
            </header>
            <div class="notes-page__filters">
                <input
                    type="search"
                    placeholder="Search notes"
                    prop:value=move || search.get()
                    on:input=move |ev| {
                        let raw = event_target_value(&ev);
                        notes.update(|n| n.set_search(&raw));
                        search.set(raw);
                    }
                />
                <select on:change=move |ev| {
                    let filter = parse_link_value(&event_target_value(&ev));
                    notes.update(|n| n.link = filter);
                }>
                    <option value="">"All records"</option>
                    {link_options}
                </select>
            </div>
            {list}
            {move || editor.get().map(|_| view! { <NoteEditor /> })}
        </div>
    }
}
