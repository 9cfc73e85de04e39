//! Pan/zoom engine for the resume builder canvas.
//!
//! This crate is UI-framework agnostic. It owns the camera math that keeps the
//! content point under the cursor fixed while zooming, the pointer gesture
//! state machine for panning, and a small engine core that turns raw input
//! events into [`engine::Action`]s. The Leptos host wires DOM events to the
//! engine and applies the resulting camera as a CSS transform.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Testable [`engine::EngineCore`] and the actions it emits |
//! | [`camera`] | Camera, canvas view state, wheel/drag/button transforms |
//! | [`input`] | Input event types and the gesture state machine |
//! | [`consts`] | Zoom limits, zoom steps, canvas defaults |

pub mod camera;
pub mod consts;
pub mod engine;
pub mod input;
