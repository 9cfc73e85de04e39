//! Shared numeric constants for the canvas crate.

// ── Zoom ────────────────────────────────────────────────────────

/// Smallest allowed zoom factor.
pub const ZOOM_MIN: f64 = 0.1;

/// Largest allowed zoom factor.
pub const ZOOM_MAX: f64 = 3.0;

/// Multiplier applied per wheel event scrolling down (zoom out).
pub const WHEEL_ZOOM_OUT_FACTOR: f64 = 0.95;

/// Multiplier applied per wheel event scrolling up (zoom in).
pub const WHEEL_ZOOM_IN_FACTOR: f64 = 1.05;

/// Additive zoom step used by the toolbar buttons and keyboard shortcuts.
pub const BUTTON_ZOOM_STEP: f64 = 0.1;

// ── Canvas chrome ───────────────────────────────────────────────

/// Default canvas background behind the resume page.
pub const DEFAULT_BACKGROUND: &str = "#f3f4f6";

/// Grid line spacing in world units.
pub const GRID_SPACING: f64 = 24.0;
