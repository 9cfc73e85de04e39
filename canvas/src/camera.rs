//! Camera math for the resume canvas.
//!
//! The page is drawn with `transform: translate(pan) scale(zoom)` and a
//! top-left origin, so `screen = world * zoom + pan`. Every zoom path clamps
//! into `[ZOOM_MIN, ZOOM_MAX]`; pan is unconstrained.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    BUTTON_ZOOM_STEP, DEFAULT_BACKGROUND, GRID_SPACING, WHEEL_ZOOM_IN_FACTOR, WHEEL_ZOOM_OUT_FACTOR, ZOOM_MAX, ZOOM_MIN,
};

/// A position in viewport pixels (screen) or page pixels (world).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Screen-space drag delta in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragDelta {
    pub dx: f64,
    pub dy: f64,
}

/// Clamp a zoom factor into `[ZOOM_MIN, ZOOM_MAX]`.
#[must_use]
pub fn clamp_zoom(zoom: f64) -> f64 {
    zoom.clamp(ZOOM_MIN, ZOOM_MAX)
}

/// Discrete multiplicative step for one wheel event. The magnitude of
/// `delta_y` is ignored; only its sign matters.
#[must_use]
pub fn wheel_zoom_factor(delta_y: f64) -> f64 {
    if delta_y > 0.0 { WHEEL_ZOOM_OUT_FACTOR } else { WHEEL_ZOOM_IN_FACTOR }
}

/// Camera state for pan/zoom on the canvas.
///
/// `pan_x` / `pan_y` are in CSS pixels and unconstrained.
/// `zoom` is a scale factor (1.0 = no zoom) kept within `[0.1, 3]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub pan_x: f64,
    pub pan_y: f64,
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { pan_x: 0.0, pan_y: 0.0, zoom: 1.0 }
    }
}

impl Camera {
    /// Viewport pixel to page coordinates.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point::new((screen.x - self.pan_x) / self.zoom, (screen.y - self.pan_y) / self.zoom)
    }

    /// Page coordinates to viewport pixel; inverse of [`Camera::screen_to_world`].
    #[must_use]
    pub fn world_to_screen(&self, world: Point) -> Point {
        Point::new(world.x * self.zoom + self.pan_x, world.y * self.zoom + self.pan_y)
    }

    /// Zoom to `target` (clamped) keeping the world point under `pointer`
    /// fixed on screen. Non-finite targets leave the camera unchanged.
    #[must_use]
    pub fn zoomed_at(self, pointer: Point, target: f64) -> Self {
        if !target.is_finite() {
            return self;
        }
        let zoom = clamp_zoom(target);
        let content = self.screen_to_world(pointer);
        Self {
            pan_x: pointer.x - content.x * zoom,
            pan_y: pointer.y - content.y * zoom,
            zoom,
        }
    }

    /// One wheel event at `pointer`.
    #[must_use]
    pub fn wheel_zoomed(self, pointer: Point, delta_y: f64) -> Self {
        self.zoomed_at(pointer, self.zoom * wheel_zoom_factor(delta_y))
    }

    /// Translate by a screen-space delta.
    #[must_use]
    pub fn panned(self, delta: DragDelta) -> Self {
        Self { pan_x: self.pan_x + delta.dx, pan_y: self.pan_y + delta.dy, ..self }
    }

    /// Additive zoom step around the pan origin. Pans are left untouched, so
    /// the view does not stay centred the way wheel zoom stays on the pointer.
    #[must_use]
    pub fn stepped(self, step: f64) -> Self {
        Self { zoom: clamp_zoom(self.zoom + step), ..self }
    }

    #[must_use]
    pub fn zoom_in(self) -> Self {
        self.stepped(BUTTON_ZOOM_STEP)
    }

    #[must_use]
    pub fn zoom_out(self) -> Self {
        self.stepped(-BUTTON_ZOOM_STEP)
    }

    /// Pan so that a `width × height` content box is centred in the viewport
    /// at the current zoom.
    #[must_use]
    pub fn centered_on(self, content_width: f64, content_height: f64, viewport_width: f64, viewport_height: f64) -> Self {
        Self {
            pan_x: (viewport_width - content_width * self.zoom) * 0.5,
            pan_y: (viewport_height - content_height * self.zoom) * 0.5,
            ..self
        }
    }

    /// Zoom as a rounded percentage for the toolbar readout.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn zoom_percent(&self) -> i64 {
        (self.zoom * 100.0).round() as i64
    }

    /// CSS transform for the content layer. Requires `transform-origin: 0 0`.
    #[must_use]
    pub fn transform_css(&self) -> String {
        format!("translate({}px, {}px) scale({})", self.pan_x, self.pan_y, self.zoom)
    }
}

/// Transient view state of the resume canvas. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasState {
    pub camera: Camera,
    pub is_dragging: bool,
    pub background_color: String,
    pub show_grid: bool,
}

impl Default for CanvasState {
    fn default() -> Self {
        Self {
            camera: Camera::default(),
            is_dragging: false,
            background_color: DEFAULT_BACKGROUND.to_owned(),
            show_grid: true,
        }
    }
}

impl CanvasState {
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.camera.zoom
    }

    /// Inline style for the canvas backdrop. The grid image itself comes from
    /// the stylesheet; this scales and offsets it to follow the camera.
    #[must_use]
    pub fn grid_css(&self) -> String {
        if !self.show_grid {
            return format!("background-color: {};", self.background_color);
        }
        let size = GRID_SPACING * self.camera.zoom;
        format!(
            "background-color: {}; background-size: {size}px {size}px; background-position: {}px {}px;",
            self.background_color, self.camera.pan_x, self.camera.pan_y
        )
    }
}

/// Wheel zoom toward `pointer`.
#[must_use]
pub fn on_wheel(pointer: Point, delta_y: f64, state: &CanvasState) -> CanvasState {
    CanvasState { camera: state.camera.wheel_zoomed(pointer, delta_y), ..state.clone() }
}

/// Drag pan by a screen delta.
#[must_use]
pub fn on_drag(delta: DragDelta, state: &CanvasState) -> CanvasState {
    CanvasState { camera: state.camera.panned(delta), ..state.clone() }
}
