use crate::camera::{Camera, CanvasState, DragDelta, Point, on_drag, on_wheel};
use crate::input::{Button, InputState, Key, Modifiers, PointerTarget, WheelDelta};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Cursor shown while idle over the canvas background.
pub const CURSOR_IDLE: &str = "grab";
/// Cursor shown while panning.
pub const CURSOR_PANNING: &str = "grabbing";

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Camera or chrome changed; re-apply the transform.
    RenderNeeded,
    /// Change the CSS cursor of the canvas element.
    SetCursor(String),
    /// A block was clicked and should become the selection.
    SelectBlock(String),
    /// The background was clicked (or Escape pressed); clear the selection.
    ClearSelection,
}

/// Engine state for the resume canvas.
///
/// Holds no browser handles, so every input path is testable natively.
#[derive(Debug, Clone)]
pub struct EngineCore {
    pub state: CanvasState,
    pub input: InputState,
    pub viewport_width: f64,
    pub viewport_height: f64,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self { state: CanvasState::default(), input: InputState::default(), viewport_width: 0.0, viewport_height: 0.0 }
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Viewport ---

    /// Update viewport dimensions in CSS pixels.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport_width = width.max(0.0);
        self.viewport_height = height.max(0.0);
    }

    /// Centre a content box (the resume page) in the viewport.
    pub fn center_content(&mut self, content_width: f64, content_height: f64) -> Vec<Action> {
        self.state.camera =
            self.state.camera.centered_on(content_width, content_height, self.viewport_width, self.viewport_height);
        vec![Action::RenderNeeded]
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button, target: PointerTarget) -> Vec<Action> {
        match (button, target) {
            (Button::Secondary, _) => Vec::new(),
            (Button::Primary, PointerTarget::Block(id)) => vec![Action::SelectBlock(id)],
            (Button::Primary | Button::Middle, _) => {
                self.input = InputState::Panning { last_screen: screen_pt, moved: false };
                self.state.is_dragging = true;
                vec![Action::SetCursor(CURSOR_PANNING.to_owned())]
            }
        }
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point, _modifiers: Modifiers) -> Vec<Action> {
        let InputState::Panning { last_screen, .. } = self.input else {
            return Vec::new();
        };
        let delta = DragDelta { dx: screen_pt.x - last_screen.x, dy: screen_pt.y - last_screen.y };
        self.input = InputState::Panning { last_screen: screen_pt, moved: true };
        if delta.dx == 0.0 && delta.dy == 0.0 {
            return Vec::new();
        }
        self.state = on_drag(delta, &self.state);
        vec![Action::RenderNeeded]
    }

    pub fn on_pointer_up(&mut self, _screen_pt: Point, _button: Button) -> Vec<Action> {
        let was = std::mem::take(&mut self.input);
        self.state.is_dragging = false;
        match was {
            InputState::Idle => Vec::new(),
            InputState::Panning { moved: false, .. } => {
                vec![Action::SetCursor(CURSOR_IDLE.to_owned()), Action::ClearSelection]
            }
            InputState::Panning { moved: true, .. } => vec![Action::SetCursor(CURSOR_IDLE.to_owned())],
        }
    }

    /// Pointer left the window or capture was lost mid-gesture.
    pub fn on_pointer_cancel(&mut self) -> Vec<Action> {
        if !self.input.is_panning() {
            return Vec::new();
        }
        self.input = InputState::Idle;
        self.state.is_dragging = false;
        vec![Action::SetCursor(CURSOR_IDLE.to_owned())]
    }

    pub fn on_wheel(&mut self, screen_pt: Point, delta: WheelDelta, _modifiers: Modifiers) -> Vec<Action> {
        if delta.dy == 0.0 {
            return Vec::new();
        }
        self.state = on_wheel(screen_pt, delta.dy, &self.state);
        vec![Action::RenderNeeded]
    }

    pub fn on_key_down(&mut self, key: &Key, modifiers: Modifiers) -> Vec<Action> {
        if modifiers.ctrl || modifiers.meta || modifiers.alt {
            return Vec::new();
        }
        match key.0.as_str() {
            "+" | "=" => self.zoom_in(),
            "-" | "_" => self.zoom_out(),
            "0" => self.reset_view(),
            "Escape" => vec![Action::ClearSelection],
            _ => Vec::new(),
        }
    }

    // --- Toolbar ---

    pub fn zoom_in(&mut self) -> Vec<Action> {
        self.state.camera = self.state.camera.zoom_in();
        vec![Action::RenderNeeded]
    }

    pub fn zoom_out(&mut self) -> Vec<Action> {
        self.state.camera = self.state.camera.zoom_out();
        vec![Action::RenderNeeded]
    }

    pub fn reset_view(&mut self) -> Vec<Action> {
        self.state.camera = Camera::default();
        vec![Action::RenderNeeded]
    }

    pub fn toggle_grid(&mut self) -> Vec<Action> {
        self.state.show_grid = !self.state.show_grid;
        vec![Action::RenderNeeded]
    }

    pub fn set_background(&mut self, color: &str) -> Vec<Action> {
        if self.state.background_color == color {
            return Vec::new();
        }
        color.clone_into(&mut self.state.background_color);
        vec![Action::RenderNeeded]
    }

    // --- Queries ---

    /// The current camera state.
    #[must_use]
    pub fn camera(&self) -> Camera {
        self.state.camera
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging
    }
}
