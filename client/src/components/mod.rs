//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and interaction surfaces while reading and
//! writing shared state from Leptos context providers.

pub mod app_header;
pub mod block_editor;
pub mod block_view;
pub mod calendar_toolbar;
pub mod calendar_views;
pub mod candidate_card;
pub mod event_detail;
pub mod event_form;
pub mod interview_chart;
pub mod note_card;
pub mod note_editor;
pub mod resume_canvas;
pub mod stat_card;
