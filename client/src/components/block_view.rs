//! Read-only rendering of the resume page and its blocks.
//!
//! DESIGN
//! ======
//! The sheet is what PDF export rasterizes, so it carries only document
//! content. Selection is shown with a class on the block wrapper; editing
//! happens in the side panel. Blocks can be dragged onto one another to
//! reorder them (array-move semantics, see `resume::order`).

#[cfg(test)]
#[path = "block_view_test.rs"]
mod block_view_test;

use chrono::Utc;
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use resume::{BlockData, BlockKind, EditorEvent, ResumeBlock, TemplateId};

use crate::state::resume::ResumeState;

/// DOM id of the sheet; PDF export looks it up by this id.
pub const RESUME_PAGE_ID: &str = "resume-page";
/// A4 width at 96 CSS pixels per inch.
pub const PAGE_WIDTH_PX: f64 = 794.0;
/// A4 height at 96 CSS pixels per inch.
pub const PAGE_HEIGHT_PX: f64 = 1123.0;

/// Section title printed above a block; the header block has none.
#[must_use]
pub fn section_heading(kind: BlockKind) -> Option<&'static str> {
    match kind {
        BlockKind::Header => None,
        BlockKind::Summary => Some("Profile"),
        BlockKind::Experience => Some("Experience"),
        BlockKind::Education => Some("Education"),
        BlockKind::Skills => Some("Skills"),
    }
}

#[must_use]
pub fn sheet_class(template: TemplateId) -> String {
    format!("resume-sheet resume-sheet--{}", template.as_str())
}

#[must_use]
pub fn sheet_style(accent: &str) -> String {
    format!("--accent: {accent}; width: {PAGE_WIDTH_PX}px; min-height: {PAGE_HEIGHT_PX}px;")
}

/// The printable page with every block in document order.
#[component]
pub fn ResumeSheet() -> impl IntoView {
    let resume = expect_context::<RwSignal<ResumeState>>();
    let dragging = RwSignal::new(None::<String>);

    // Selection changes must not rebuild the blocks; a rebuild mid-gesture
    // would drop the element the browser is about to drag.
    let blocks = Memo::new(move |_| resume.with(|s| s.document().blocks.clone()));
    let template = Memo::new(move |_| resume.with(|s| s.document().template_id));

    view! {
        <div
            id=RESUME_PAGE_ID
            class=move || sheet_class(template.get())
            style=move || sheet_style(template.get().template().accent)
        >
            {move || {
                blocks
                    .get()
                    .into_iter()
                    .map(|block| view! { <BlockFrame block=block dragging=dragging /> })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
fn BlockFrame(block: ResumeBlock, dragging: RwSignal<Option<String>>) -> impl IntoView {
    let resume = expect_context::<RwSignal<ResumeState>>();
    let id = block.id.clone();

    let selected = {
        let id = id.clone();
        move || resume.with(|s| s.editor.phase.selected() == Some(id.as_str()))
    };
    let on_drag_start = {
        let id = id.clone();
        move |_ev: leptos::ev::DragEvent| dragging.set(Some(id.clone()))
    };
    let on_drop = {
        let id = id.clone();
        move |ev: leptos::ev::DragEvent| {
            ev.prevent_default();
            let Some(from) = dragging.get_untracked() else {
                return;
            };
            dragging.set(None);
            if from == id {
                return;
            }
            resume.update(|s| {
                s.dispatch(EditorEvent::Reorder { from, to: id.clone() }, Utc::now());
            });
        }
    };

    let kind = block.kind();
    view! {
        <section
            class=format!("resume-block resume-block--{}", kind.as_str())
            class:resume-block--selected=selected
            class:resume-block--drop-target=move || dragging.with(|d| d.is_some())
            data-block-id=id
            draggable="true"
            on:dragstart=on_drag_start
            on:dragover=|ev: leptos::ev::DragEvent| ev.prevent_default()
            on:dragend=move |_| dragging.set(None)
            on:drop=on_drop
        >
            {section_heading(kind).map(|title| view! { <h2 class="resume-block__heading">{title}</h2> })}
            <BlockView data=block.data />
        </section>
    }
}

#[component]
pub fn BlockView(data: BlockData) -> impl IntoView {
    match data {
        BlockData::Header(header) => {
            let contact = header.contact_line().join("  ·  ");
            view! {
                <header class="resume-header">
                    <h1 class="resume-header__name">{header.name.clone()}</h1>
                    <p class="resume-header__title">{header.title.clone()}</p>
                    <p class="resume-header__contact">{contact}</p>
                </header>
            }
            .into_any()
        }
        BlockData::Summary(summary) => view! { <p class="resume-summary">{summary.text}</p> }.into_any(),
        BlockData::Experience(experience) => view! {
            <ul class="resume-entries">
                {experience
                    .entries
                    .into_iter()
                    .map(|entry| {
                        let period = entry.period_label();
                        view! {
                            <li class="resume-entry">
                                <div class="resume-entry__top">
                                    <strong>{entry.role}</strong>
                                    <span class="resume-entry__period">{period}</span>
                                </div>
                                <div class="resume-entry__org">{entry.company}</div>
                                <p class="resume-entry__body">{entry.description}</p>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        }
        .into_any(),
        BlockData::Education(education) => view! {
            <ul class="resume-entries">
                {education
                    .entries
                    .into_iter()
                    .map(|entry| {
                        let period = entry.period_label();
                        view! {
                            <li class="resume-entry">
                                <div class="resume-entry__top">
                                    <strong>{entry.degree}</strong>
                                    <span class="resume-entry__period">{period}</span>
                                </div>
                                <div class="resume-entry__org">{entry.school}</div>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        }
        .into_any(),
        BlockData::Skills(skills) => view! {
            <ul class="resume-skills">
                {skills.items.into_iter().map(|skill| view! { <li class="resume-skill">{skill}</li> }).collect_view()}
            </ul>
        }
        .into_any(),
    }
}
