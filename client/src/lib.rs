//! # client
//!
//! Leptos front-end for Hireboard, a recruiting workspace: dashboard,
//! interview calendar, candidate pipeline, notes, and a block-based resume
//! builder with PDF export.
//!
//! Rendered on the server (`ssr`) and hydrated in the browser (`hydrate`).
//! Domain logic lives in the `calendar`, `canvas` and `resume` crates; this
//! crate owns pages, components, page state, static data, and the browser
//! bridges (storage, theme, PDF export).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("logger already installed: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
