//! Resume builder page: canvas, editor panel, and PDF export.
//!
//! SYSTEM CONTEXT
//! ==============
//! Export deselects first so the selection outline is not rasterized, then
//! hands the sheet to `util::pdf_export`. Failures are alerted, not retried.

use chrono::{Local, Utc};
use leptos::prelude::*;
use resume::EditorEvent;

use crate::components::block_editor::BlockEditor;
use crate::components::block_view::RESUME_PAGE_ID;
use crate::components::resume_canvas::ResumeCanvas;
use crate::state::resume::ResumeState;
use crate::util::pdf_export;

#[component]
pub fn ResumePage() -> impl IntoView {
    let resume = expect_context::<RwSignal<ResumeState>>();
    let exporting = move || resume.with(|s| s.exporting);

    let on_export = move |_| {
        if resume.with_untracked(|s| s.exporting) {
            return;
        }
        resume.update(|s| {
            s.dispatch(EditorEvent::Deselect, Utc::now());
            s.exporting = true;
        });
        leptos::task::spawn_local(async move {
            match pdf_export::export_element(RESUME_PAGE_ID).await {
                Ok(pages) => log::info!("resume exported ({pages} page(s))"),
                Err(err) => {
                    log::warn!("resume export failed: {err}");
                    pdf_export::alert(&pdf_export::failure_message(&err));
                }
            }
            resume.update(|s| s.exporting = false);
        });
    };

    view! {
        <div class="resume-page">
            <header class="resume-page__header">
                <h1>"Resume Builder"</h1>
                <span class="resume-page__saved">
                    {move || {
                        let saved = resume.with(|s| s.document().updated_at).with_timezone(&Local);
                        format!("Saved {}", saved.format("%b %-d, %H:%M"))
                    }}
                </span>
                <button class="btn btn--primary" disabled=exporting on:click=on_export>
                    {move || if exporting() { "Exporting…" } else { "Export PDF" }}
                </button>
            </header>
            <div class="resume-page__body">
                <ResumeCanvas />
                <BlockEditor />
            </div>
        </div>
    }
}
