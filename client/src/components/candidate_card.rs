//! Candidate card shown in a pipeline stage column.
//!
//! Stage moves update `PipelineState` in place; there is no backend to
//! confirm them.

use leptos::prelude::*;

use crate::net::types::Candidate;
use crate::state::pipeline::{PipelineState, rating_stars};

#[component]
pub fn CandidateCard(candidate: Candidate) -> impl IntoView {
    let pipeline = expect_context::<RwSignal<PipelineState>>();
    let can_retreat = candidate.stage.previous().is_some();
    let can_advance = candidate.stage.next().is_some();
    let active = candidate.stage.is_active();

    let id = candidate.id.clone();
    let selected = {
        let id = id.clone();
        move || pipeline.with(|p| p.selected_candidate.as_deref() == Some(id.as_str()))
    };
    let on_select = {
        let id = id.clone();
        move |_| pipeline.update(|p| p.selected_candidate = Some(id.clone()))
    };
    let on_retreat = {
        let id = id.clone();
        move |ev: leptos::ev::MouseEvent| {
            stage_action(pipeline, &ev, &id, |p, id| {
                p.retreat(id);
            });
        }
    };
    let on_advance = {
        let id = id.clone();
        move |ev: leptos::ev::MouseEvent| {
            stage_action(pipeline, &ev, &id, |p, id| {
                p.advance(id);
            });
        }
    };
    let on_reject = move |ev: leptos::ev::MouseEvent| {
        stage_action(pipeline, &ev, &id, |p, id| {
            p.reject(id);
        });
    };

    view! {
        <article class="candidate-card" class:candidate-card--selected=selected on:click=on_select>
            <header class="candidate-card__header">
                <span class="candidate-card__name">{candidate.name.clone()}</span>
                <span class="candidate-card__rating" title=format!("{} of 5", candidate.rating)>
                    {rating_stars(candidate.rating)}
                </span>
            </header>
            <p class="candidate-card__title">{candidate.title.clone()}</p>
            <p class="candidate-card__applied">{format!("Applied {}", candidate.applied_at.format("%b %-d, %Y"))}</p>
            <ul class="candidate-card__tags">
                {candidate.tags.iter().map(|tag| view! { <li class="tag">{tag.clone()}</li> }).collect_view()}
            </ul>
            <footer class="candidate-card__actions">
                <button class="btn btn--small" disabled=!can_retreat on:click=on_retreat title="Previous stage">
                    "◀"
                </button>
                <button class="btn btn--small" disabled=!can_advance on:click=on_advance title="Next stage">
                    "▶"
                </button>
                {active
                    .then(|| {
                        view! {
                            <button class="btn btn--small btn--danger" on:click=on_reject title="Reject">
                                "✕"
                            </button>
                        }
                    })}
            </footer>
        </article>
    }
}

fn stage_action(
    pipeline: RwSignal<PipelineState>,
    ev: &leptos::ev::MouseEvent,
    id: &str,
    op: fn(&mut PipelineState, &str),
) {
    ev.stop_propagation();
    pipeline.update(|p| op(p, id));
}
