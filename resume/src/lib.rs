//! Resume document model for the resume builder.
//!
//! This crate is UI-framework agnostic. It owns the typed block payloads, the
//! block ordering operations, the persisted document codec, the editor state
//! machine, and the page-splitting contract used by PDF export. The Leptos
//! client renders the document and feeds user input through [`editor::Editor`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`blocks`] | Block kinds, per-kind payloads, list-editing helpers |
//! | [`order`] | Reorder, move, remove, and look up blocks by id |
//! | [`document`] | `ResumeDocument`, templates, `localStorage` codec |
//! | [`editor`] | Selection/editing phases and the mutation reducer |
//! | [`paginate`] | A4 page slicing for the rasterized resume |

pub mod blocks;
pub mod document;
pub mod editor;
pub mod order;
pub mod paginate;

pub use blocks::{
    BlockData, BlockKind, EducationData, EducationEntry, EducationField, ExperienceData, ExperienceEntry,
    ExperienceField, HeaderData, HeaderField, ResumeBlock, SkillsData, SummaryData,
};
pub use document::{DocumentError, ResumeDocument, STORAGE_KEY, TEMPLATES, Template, TemplateId};
pub use editor::{Editor, EditorError, EditorEvent, Effect, Phase};
pub use order::OrderError;
pub use paginate::{PageSlice, PaginateError};
