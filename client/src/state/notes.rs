//! Notes page state: in-memory CRUD, pinning, search, and link filtering.

#[cfg(test)]
#[path = "notes_test.rs"]
mod notes_test;

use chrono::{DateTime, Utc};

use crate::net::types::Note;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NoteError {
    #[error("a note needs a title")]
    EmptyTitle,
    #[error("note not found: {0}")]
    NotFound(String),
}

/// Restrict the list to notes linked to one record.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LinkFilter {
    #[default]
    All,
    Client(String),
    Job(String),
    Candidate(String),
}

impl LinkFilter {
    #[must_use]
    pub fn matches(&self, note: &Note) -> bool {
        match self {
            Self::All => true,
            Self::Client(id) => note.client_id.as_deref() == Some(id.as_str()),
            Self::Job(id) => note.job_id.as_deref() == Some(id.as_str()),
            Self::Candidate(id) => note.candidate_id.as_deref() == Some(id.as_str()),
        }
    }
}

/// Editor form contents. Tags are comma separated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub body: String,
    pub tags: String,
    pub client_id: Option<String>,
    pub job_id: Option<String>,
    pub candidate_id: Option<String>,
}

impl NoteDraft {
    #[must_use]
    pub fn from_note(note: &Note) -> Self {
        Self {
            title: note.title.clone(),
            body: note.body.clone(),
            tags: note.tags.join(", "),
            client_id: note.client_id.clone(),
            job_id: note.job_id.clone(),
            candidate_id: note.candidate_id.clone(),
        }
    }

    fn title(&self) -> Result<String, NoteError> {
        let title = self.title.trim();
        if title.is_empty() { Err(NoteError::EmptyTitle) } else { Ok(title.to_owned()) }
    }
}

/// Split comma-separated tags, trimmed, without blanks or case-insensitive
/// duplicates.
#[must_use]
pub fn parse_tags(raw: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        if !tags.iter().any(|t| t.eq_ignore_ascii_case(tag)) {
            tags.push(tag.to_owned());
        }
    }
    tags
}

fn link(id: Option<String>) -> Option<String> {
    id.filter(|v| !v.trim().is_empty())
}

#[derive(Clone, Debug, Default)]
pub struct NotesState {
    pub notes: Vec<Note>,
    search: String,
    pub link: LinkFilter,
    /// Id of the note open in the editor; `None` with `composing` means a new note.
    pub editing: Option<String>,
    pub composing: bool,
}

impl NotesState {
    #[must_use]
    pub fn new(notes: Vec<Note>) -> Self {
        Self { notes, ..Self::default() }
    }

    pub fn set_search(&mut self, search: &str) {
        search.trim().to_lowercase().clone_into(&mut self.search);
    }

    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    fn matches_search(&self, note: &Note) -> bool {
        self.search.is_empty()
            || note.title.to_lowercase().contains(&self.search)
            || note.body.to_lowercase().contains(&self.search)
            || note.tags.iter().any(|t| t.to_lowercase().contains(&self.search))
    }

    /// Filtered notes, pinned first, then most recently updated.
    #[must_use]
    pub fn visible(&self) -> Vec<&Note> {
        let mut notes: Vec<&Note> =
            self.notes.iter().filter(|n| self.link.matches(n) && self.matches_search(n)).collect();
        notes.sort_by(|a, b| b.pinned.cmp(&a.pinned).then_with(|| b.updated_at.cmp(&a.updated_at)));
        notes
    }

    #[must_use]
    pub fn note(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// # Errors
    ///
    /// [`NoteError::EmptyTitle`] for a blank title.
    pub fn create(&mut self, draft: NoteDraft, id: String, now: DateTime<Utc>) -> Result<(), NoteError> {
        let title = draft.title()?;
        self.notes.push(Note {
            id,
            title,
            body: draft.body.trim().to_owned(),
            tags: parse_tags(&draft.tags),
            pinned: false,
            client_id: link(draft.client_id),
            job_id: link(draft.job_id),
            candidate_id: link(draft.candidate_id),
            created_at: now,
            updated_at: now,
        });
        self.close_editor();
        Ok(())
    }

    /// # Errors
    ///
    /// [`NoteError::EmptyTitle`] or [`NoteError::NotFound`]; nothing changes.
    pub fn update(&mut self, id: &str, draft: NoteDraft, now: DateTime<Utc>) -> Result<(), NoteError> {
        let title = draft.title()?;
        let note = self.notes.iter_mut().find(|n| n.id == id).ok_or_else(|| NoteError::NotFound(id.to_owned()))?;
        note.title = title;
        note.body = draft.body.trim().to_owned();
        note.tags = parse_tags(&draft.tags);
        note.client_id = link(draft.client_id);
        note.job_id = link(draft.job_id);
        note.candidate_id = link(draft.candidate_id);
        note.updated_at = now;
        self.close_editor();
        Ok(())
    }

    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.notes.len();
        self.notes.retain(|n| n.id != id);
        if self.editing.as_deref() == Some(id) {
            self.close_editor();
        }
        self.notes.len() != before
    }

    /// Flip the pin. Returns the new pin state, or `None` for an unknown id.
    pub fn toggle_pin(&mut self, id: &str) -> Option<bool> {
        let note = self.notes.iter_mut().find(|n| n.id == id)?;
        note.pinned = !note.pinned;
        Some(note.pinned)
    }

    pub fn open_new(&mut self) {
        self.editing = None;
        self.composing = true;
    }

    pub fn open_existing(&mut self, id: &str) {
        if self.note(id).is_some() {
            self.editing = Some(id.to_owned());
            self.composing = true;
        }
    }

    pub fn close_editor(&mut self) {
        self.editing = None;
        self.composing = false;
    }
}
