#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

fn cam(pan_x: f64, pan_y: f64, zoom: f64) -> Camera {
    Camera { pan_x, pan_y, zoom }
}

// --- Conversions ---

#[test]
fn camera_default_is_identity() {
    let c = Camera::default();
    assert_eq!((c.pan_x, c.pan_y, c.zoom), (0.0, 0.0, 1.0));
    assert!(point_approx_eq(c.screen_to_world(Point::new(50.0, 75.0)), Point::new(50.0, 75.0)));
}

#[test]
fn screen_to_world_with_pan_and_zoom() {
    let c = cam(100.0, 50.0, 2.0);
    let world = c.screen_to_world(Point::new(140.0, 90.0));
    assert!(point_approx_eq(world, Point::new(20.0, 20.0)));
}

#[test]
fn world_to_screen_inverts_screen_to_world() {
    let c = cam(-37.5, 12.25, 0.8);
    let screen = Point::new(321.0, -44.0);
    assert!(point_approx_eq(c.world_to_screen(c.screen_to_world(screen)), screen));
}

// --- Wheel zoom ---

#[test]
fn wheel_factor_depends_only_on_sign() {
    assert_eq!(wheel_zoom_factor(1.0), 0.95);
    assert_eq!(wheel_zoom_factor(480.0), 0.95);
    assert_eq!(wheel_zoom_factor(-3.0), 1.05);
    assert_eq!(wheel_zoom_factor(0.0), 1.05);
}

#[test]
fn wheel_up_zooms_in_by_five_percent() {
    let c = Camera::default().wheel_zoomed(Point::new(0.0, 0.0), -100.0);
    assert!(approx_eq(c.zoom, 1.05));
}

#[test]
fn wheel_down_zooms_out_by_five_percent() {
    let c = Camera::default().wheel_zoomed(Point::new(0.0, 0.0), 100.0);
    assert!(approx_eq(c.zoom, 0.95));
}

#[test]
fn wheel_zoom_keeps_content_under_pointer() {
    let pointer = Point::new(412.0, 233.0);
    let mut c = cam(-80.0, 40.0, 1.3);
    for delta in [-1.0, -1.0, 5.0, -120.0, 3.0, 3.0, 3.0] {
        let before = c.screen_to_world(pointer);
        c = c.wheel_zoomed(pointer, delta);
        let after = c.screen_to_world(pointer);
        assert!(point_approx_eq(before, after), "content drifted: {before:?} -> {after:?}");
    }
}

#[test]
fn wheel_zoom_at_clamp_still_keeps_pointer_fixed() {
    let pointer = Point::new(10.0, 20.0);
    let c = cam(5.0, 5.0, 2.99);
    let before = c.screen_to_world(pointer);
    let zoomed = c.wheel_zoomed(pointer, -1.0);
    assert_eq!(zoomed.zoom, 3.0);
    assert!(point_approx_eq(before, zoomed.screen_to_world(pointer)));
}

#[test]
fn derivation_matches_formula() {
    let c = cam(30.0, -10.0, 1.0);
    let pointer = Point::new(130.0, 90.0);
    let z = c.wheel_zoomed(pointer, -1.0);
    // content = (130 - 30) / 1 = 100; new pan = 130 - 100 * 1.05
    assert!(approx_eq(z.pan_x, 130.0 - 100.0 * 1.05));
    assert!(approx_eq(z.pan_y, 90.0 - 100.0 * 1.05));
}

#[test]
fn zoomed_at_ignores_non_finite_targets() {
    let c = cam(1.0, 2.0, 1.5);
    assert_eq!(c.zoomed_at(Point::new(0.0, 0.0), f64::NAN), c);
    assert_eq!(c.zoomed_at(Point::new(0.0, 0.0), f64::INFINITY), c);
}

// --- Drag ---

#[test]
fn pan_adds_delta_unclamped() {
    let c = cam(10.0, 10.0, 2.0).panned(DragDelta { dx: -50_000.0, dy: 7.5 });
    assert_eq!(c.pan_x, -49_990.0);
    assert_eq!(c.pan_y, 17.5);
    assert_eq!(c.zoom, 2.0);
}

// --- Buttons ---

#[test]
fn buttons_step_by_a_tenth_and_leave_pan() {
    let c = cam(33.0, 44.0, 1.0).zoom_in();
    assert!(approx_eq(c.zoom, 1.1));
    assert_eq!((c.pan_x, c.pan_y), (33.0, 44.0));
    let c = c.zoom_out().zoom_out();
    assert!(approx_eq(c.zoom, 0.9));
    assert_eq!((c.pan_x, c.pan_y), (33.0, 44.0));
}

#[test]
fn buttons_clamp_at_bounds() {
    let mut c = Camera::default();
    for _ in 0..40 {
        c = c.zoom_in();
    }
    assert_eq!(c.zoom, ZOOM_MAX);
    for _ in 0..80 {
        c = c.zoom_out();
    }
    assert_eq!(c.zoom, ZOOM_MIN);
}

#[test]
fn zoom_stays_in_bounds_for_any_event_sequence() {
    let mut c = Camera::default();
    let pointer = Point::new(200.0, 100.0);
    // Deterministic pseudo-random walk over wheel and button events.
    let mut seed: u64 = 0x2545_F491_4F6C_DD1D;
    for _ in 0..2_000 {
        seed ^= seed << 13;
        seed ^= seed >> 7;
        seed ^= seed << 17;
        c = match seed % 4 {
            0 => c.wheel_zoomed(pointer, 1.0),
            1 => c.wheel_zoomed(pointer, -1.0),
            2 => c.zoom_in(),
            _ => c.zoom_out(),
        };
        assert!((ZOOM_MIN..=ZOOM_MAX).contains(&c.zoom), "zoom escaped bounds: {}", c.zoom);
    }
}

// --- Helpers ---

#[test]
fn centered_on_places_content_mid_viewport() {
    let c = cam(0.0, 0.0, 0.5).centered_on(800.0, 1000.0, 1200.0, 900.0);
    assert!(approx_eq(c.pan_x, 400.0));
    assert!(approx_eq(c.pan_y, 200.0));
}

#[test]
fn zoom_percent_rounds() {
    assert_eq!(cam(0.0, 0.0, 1.05).zoom_percent(), 105);
    assert_eq!(cam(0.0, 0.0, 0.1).zoom_percent(), 10);
}

#[test]
fn transform_css_lists_translate_then_scale() {
    assert_eq!(cam(12.5, -4.0, 1.5).transform_css(), "translate(12.5px, -4px) scale(1.5)");
}

// --- CanvasState ---

#[test]
fn canvas_state_defaults() {
    let s = CanvasState::default();
    assert_eq!(s.zoom(), 1.0);
    assert!(!s.is_dragging);
    assert!(s.show_grid);
    assert_eq!(s.background_color, DEFAULT_BACKGROUND);
}

#[test]
fn on_wheel_and_on_drag_only_touch_the_camera() {
    let s = CanvasState { background_color: "#fff".to_owned(), show_grid: false, ..CanvasState::default() };
    let zoomed = on_wheel(Point::new(10.0, 10.0), -1.0, &s);
    assert!(approx_eq(zoomed.zoom(), 1.05));
    assert_eq!(zoomed.background_color, "#fff");
    assert!(!zoomed.show_grid);
    let dragged = on_drag(DragDelta { dx: 3.0, dy: 4.0 }, &zoomed);
    assert!(approx_eq(dragged.camera.pan_x, zoomed.camera.pan_x + 3.0));
    assert!(approx_eq(dragged.camera.pan_y, zoomed.camera.pan_y + 4.0));
    assert_eq!(dragged.zoom(), zoomed.zoom());
}

#[test]
fn grid_css_scales_with_zoom_and_hides() {
    let mut s = CanvasState::default();
    s.camera = cam(5.0, 6.0, 2.0);
    let css = s.grid_css();
    assert!(css.contains("background-size: 48px 48px"));
    assert!(css.contains("background-position: 5px 6px"));
    s.show_grid = false;
    assert!(!s.grid_css().contains("background-size"));
}

#[test]
fn canvas_state_serializes() {
    let json = serde_json::to_value(CanvasState::default()).expect("serialize");
    assert_eq!(json["camera"]["zoom"], 1.0);
    assert_eq!(json["show_grid"], true);
}
