//! Input model: modifier keys, mouse buttons, pointer targets, and the gesture
//! state machine.
//!
//! `InputState` is the active gesture tracked between pointer-down and
//! pointer-up. The only drag gesture on the resume canvas is panning; clicks on
//! blocks are reported to the host as selection requests instead.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::Point;

/// Modifier keys down when a canvas event fired.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    /// Command on macOS.
    pub meta: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Primary,
    Middle,
    Secondary,
}

impl Button {
    /// From `MouseEvent.button`; unknown values count as primary.
    #[must_use]
    pub fn from_dom(button: i16) -> Self {
        match button {
            1 => Self::Middle,
            2 => Self::Secondary,
            _ => Self::Primary,
        }
    }
}

/// `KeyboardEvent.key`, e.g. `"Escape"` or `"+"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

/// Scroll distance in CSS pixels; positive `dy` scrolls down and zooms out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelDelta {
    pub dx: f64,
    pub dy: f64,
}

/// What the pointer landed on at pointer-down, as determined by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointerTarget {
    /// Empty canvas around or behind the page.
    Background,
    /// A resume block, by id.
    Block(String),
}

/// Gesture in progress between pointer-down and pointer-up.
#[derive(Debug, Clone, Default)]
pub enum InputState {
    #[default]
    Idle,
    /// Background drag moving the camera.
    Panning {
        /// Last pointer position in screen space; each move pans by the
        /// difference.
        last_screen: Point,
        /// Whether the pointer has moved since pointer-down. A press without
        /// movement on the background counts as a click.
        moved: bool,
    },
}

impl InputState {
    #[must_use]
    pub fn is_panning(&self) -> bool {
        matches!(self, Self::Panning { .. })
    }
}
