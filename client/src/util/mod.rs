//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod canvas_input;
pub mod chart;
pub mod dark_mode;
pub mod datetime;
pub mod pdf_export;
pub mod ui_persistence;
