//! Resume builder state: the document editor plus the canvas camera.
//!
//! SYSTEM CONTEXT
//! ==============
//! The document is read from `localStorage` once on mount and written back
//! wholesale after every mutation (last write wins). Read failures fall back
//! to the starter document; write failures are logged and ignored.

#[cfg(test)]
#[path = "resume_test.rs"]
mod resume_test;

use canvas::engine::{Action, CURSOR_IDLE, EngineCore};
use chrono::{DateTime, Utc};
use resume::{BlockData, Editor, EditorEvent, Effect, ResumeDocument, STORAGE_KEY};

use crate::util::ui_persistence;

#[derive(Clone, Debug)]
pub struct ResumeState {
    pub editor: Editor,
    pub canvas: EngineCore,
    /// CSS cursor for the canvas viewport.
    pub cursor: String,
    pub exporting: bool,
}

impl ResumeState {
    #[must_use]
    pub fn new(document: ResumeDocument) -> Self {
        Self { editor: Editor::new(document), canvas: EngineCore::new(), cursor: CURSOR_IDLE.to_owned(), exporting: false }
    }

    /// Load the stored document, or the starter document.
    #[must_use]
    pub fn load(now: DateTime<Utc>) -> Self {
        let raw = ui_persistence::load_raw(STORAGE_KEY);
        let (document, err) = ResumeDocument::load_or_starter(raw.as_deref(), now);
        if let Some(err) = err {
            log::warn!("stored resume unreadable, using starter document: {err}");
        }
        Self::new(document)
    }

    /// Swap in the stored document, keeping the camera and cursor.
    pub fn restore(&mut self, now: DateTime<Utc>) {
        self.editor = Self::load(now).editor;
    }

    #[must_use]
    pub fn document(&self) -> &ResumeDocument {
        &self.editor.document
    }

    /// Apply an editor event and run its effects. Rejected events are logged
    /// and leave the state unchanged; returns whether the event applied.
    pub fn dispatch(&mut self, event: EditorEvent, now: DateTime<Utc>) -> bool {
        match self.editor.apply(event, now) {
            Ok(effects) => {
                for effect in effects {
                    match effect {
                        Effect::Persist(document) => persist(&document),
                    }
                }
                true
            }
            Err(err) => {
                log::warn!("resume edit rejected: {err}");
                false
            }
        }
    }

    /// Edit a copy of block `id`'s payload and dispatch it. Returns false
    /// when the block is gone or the edit is rejected.
    pub fn edit_block(&mut self, id: &str, now: DateTime<Utc>, mutate: impl FnOnce(&mut BlockData)) -> bool {
        let Some(mut data) = self.document().block(id).map(|b| b.data.clone()) else {
            return false;
        };
        mutate(&mut data);
        self.dispatch(EditorEvent::Edit { id: id.to_owned(), data }, now)
    }

    /// Carry out actions returned by the canvas engine. Camera changes need
    /// no work here; the view re-reads the engine state.
    pub fn apply_canvas_actions(&mut self, actions: Vec<Action>, now: DateTime<Utc>) {
        for action in actions {
            match action {
                Action::RenderNeeded => {}
                Action::SetCursor(cursor) => self.cursor = cursor,
                Action::SelectBlock(id) => {
                    self.dispatch(EditorEvent::Select(id), now);
                }
                Action::ClearSelection => {
                    self.dispatch(EditorEvent::Deselect, now);
                }
            }
        }
    }
}

fn persist(document: &ResumeDocument) {
    let result = document.encode().map_err(|e| e.to_string()).and_then(|raw| {
        ui_persistence::save_raw(STORAGE_KEY, &raw).map_err(|e| e.to_string())
    });
    if let Err(err) = result {
        log::warn!("resume autosave failed: {err}");
    }
}
