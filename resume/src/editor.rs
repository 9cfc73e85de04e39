//! Editor state machine for the resume builder.
//!
//! SYSTEM CONTEXT
//! ==============
//! The resume page renders a [`ResumeDocument`] and routes every user action
//! through [`Editor::apply`]. The editor owns both the document and the
//! selection phase; the host only renders and performs the returned effects.
//!
//! PHASES
//! ======
//! `Idle` -> `BlockSelected` on select, -> `Editing` on the first field
//! change, -> `Idle` on deselect. Edits are applied synchronously; there is
//! no save step. Removing the selected block returns to `Idle`.
//!
//! Every document mutation bumps `updated_at` and yields one
//! [`Effect::Persist`] carrying the full document.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use chrono::{DateTime, Utc};

use crate::blocks::{BlockData, BlockKind, ResumeBlock};
use crate::document::{ResumeDocument, TemplateId};
use crate::order::{self, OrderError};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    BlockSelected(String),
    Editing(String),
}

impl Phase {
    /// Id of the selected block in either non-idle phase.
    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::BlockSelected(id) | Self::Editing(id) => Some(id),
        }
    }
}

/// User intent fed to [`Editor::apply`].
#[derive(Clone, Debug, PartialEq)]
pub enum EditorEvent {
    Select(String),
    Deselect,
    /// Replace a block's payload. The kind must match the existing block.
    Edit { id: String, data: BlockData },
    /// Append a block with default content and select it.
    Add { id: String, kind: BlockKind },
    Remove(String),
    /// Drag-and-drop: move `from` to `to`'s position.
    Reorder { from: String, to: String },
    MoveUp(String),
    MoveDown(String),
    SetTemplate(TemplateId),
}

/// Side effect for the host to perform after a transition.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Write the document to storage.
    Persist(ResumeDocument),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditorError {
    #[error(transparent)]
    Order(#[from] OrderError),
    #[error("block {id} is {expected:?}, got {found:?} payload")]
    KindMismatch { id: String, expected: BlockKind, found: BlockKind },
    #[error("block id already in use: {0}")]
    DuplicateId(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Editor {
    pub document: ResumeDocument,
    pub phase: Phase,
}

impl Editor {
    #[must_use]
    pub fn new(document: ResumeDocument) -> Self {
        Self { document, phase: Phase::Idle }
    }

    #[must_use]
    pub fn selected_block(&self) -> Option<&ResumeBlock> {
        self.phase.selected().and_then(|id| self.document.block(id))
    }

    /// Apply one event at time `now`.
    ///
    /// # Errors
    ///
    /// Unknown ids, payload kind mismatches and duplicate ids are rejected and
    /// leave both the document and the phase unchanged.
    pub fn apply(&mut self, event: EditorEvent, now: DateTime<Utc>) -> Result<Vec<Effect>, EditorError> {
        match event {
            EditorEvent::Select(id) => {
                order::position(&self.document.blocks, &id)?;
                if self.phase.selected() != Some(id.as_str()) {
                    self.phase = Phase::BlockSelected(id);
                }
                Ok(Vec::new())
            }
            EditorEvent::Deselect => {
                self.phase = Phase::Idle;
                Ok(Vec::new())
            }
            EditorEvent::Edit { id, data } => {
                let block = self.document.block_mut(&id).ok_or_else(|| OrderError::NotFound(id.clone()))?;
                if block.kind() != data.kind() {
                    return Err(EditorError::KindMismatch { id, expected: block.kind(), found: data.kind() });
                }
                block.data = data;
                self.phase = Phase::Editing(id);
                Ok(self.persist(now))
            }
            EditorEvent::Add { id, kind } => {
                if self.document.block(&id).is_some() {
                    return Err(EditorError::DuplicateId(id));
                }
                self.document.blocks.push(ResumeBlock::with_defaults(id.clone(), kind));
                self.phase = Phase::BlockSelected(id);
                Ok(self.persist(now))
            }
            EditorEvent::Remove(id) => {
                order::remove(&mut self.document.blocks, &id)?;
                if self.phase.selected() == Some(id.as_str()) {
                    self.phase = Phase::Idle;
                }
                Ok(self.persist(now))
            }
            EditorEvent::Reorder { from, to } => {
                order::reorder(&mut self.document.blocks, &from, &to)?;
                Ok(self.persist(now))
            }
            EditorEvent::MoveUp(id) => {
                let moved = order::move_up(&mut self.document.blocks, &id)?;
                Ok(if moved { self.persist(now) } else { Vec::new() })
            }
            EditorEvent::MoveDown(id) => {
                let moved = order::move_down(&mut self.document.blocks, &id)?;
                Ok(if moved { self.persist(now) } else { Vec::new() })
            }
            EditorEvent::SetTemplate(template_id) => {
                self.document.template_id = template_id;
                Ok(self.persist(now))
            }
        }
    }

    fn persist(&mut self, now: DateTime<Utc>) -> Vec<Effect> {
        self.document.updated_at = now;
        vec![Effect::Persist(self.document.clone())]
    }
}
