//! One note in the notes list.

#[cfg(test)]
#[path = "note_card_test.rs"]
mod note_card_test;

use chrono::Local;
use leptos::prelude::*;

use crate::net::types::Note;
use crate::state::notes::NotesState;
use crate::state::pipeline::PipelineState;
use crate::util::datetime::short_label;

/// Longest body excerpt shown on a card, in characters.
const EXCERPT_CHARS: usize = 180;

/// First `max_chars` characters of `body`, ellipsized when cut.
#[must_use]
pub fn excerpt(body: &str, max_chars: usize) -> String {
    let body = body.trim();
    match body.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}…", body[..cut].trim_end()),
        None => body.to_owned(),
    }
}

#[component]
pub fn NoteCard(note: Note) -> impl IntoView {
    let notes = expect_context::<RwSignal<NotesState>>();
    let pipeline = expect_context::<RwSignal<PipelineState>>();

    let links: Vec<String> = pipeline.with_untracked(|p| {
        [
            p.client(note.client_id.as_deref()).map(|c| c.name.clone()),
            p.job(note.job_id.as_deref()).map(|j| j.title.clone()),
            p.candidate(note.candidate_id.as_deref()).map(|c| c.name.clone()),
        ]
        .into_iter()
        .flatten()
        .collect()
    });

    let open_id = note.id.clone();
    let pin_id = note.id.clone();
    let delete_id = note.id.clone();

    view! {
        <article class="note-card" class:note-card--pinned=note.pinned>
            <header class="note-card__header">
                <button class="note-card__title" on:click=move |_| notes.update(|n| n.open_existing(&open_id))>
                    {note.title.clone()}
                </button>
                <button
                    class="btn btn--small note-card__pin"
                    title=if note.pinned { "Unpin" } else { "Pin" }
                    on:click=move |_| {
                        notes.update(|n| {
                            n.toggle_pin(&pin_id);
                        });
                    }
                >
                    {if note.pinned { "📌" } else { "📍" }}
                </button>
            </header>
            <p class="note-card__body">{excerpt(&note.body, EXCERPT_CHARS)}</p>
            <ul class="note-card__tags">
                {note.tags.iter().map(|tag| view! { <li class="tag">{tag.clone()}</li> }).collect_view()}
            </ul>
            <footer class="note-card__footer">
                <span class="note-card__links">{links.join(" · ")}</span>
                <span class="note-card__updated">{format!("Updated {}", short_label(note.updated_at, &Local))}</span>
                <button
                    class="btn btn--small btn--danger"
                    on:click=move |_| {
                        notes.update(|n| {
                            n.delete(&delete_id);
                        });
                    }
                >
                    "Delete"
                </button>
            </footer>
        </article>
    }
}
