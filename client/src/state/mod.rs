//! Domain state containers provided through Leptos context.
//!
//! DESIGN
//! ======
//! Each page domain owns exactly one container, provided by `App` as
//! `RwSignal<T>`. Containers are plain structs with synchronous methods so
//! every transition is testable without a browser.

pub mod calendar;
pub mod notes;
pub mod pipeline;
pub mod resume;
pub mod ui;
