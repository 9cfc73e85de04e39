#![allow(clippy::float_cmp)]

use super::*;
use crate::consts::{ZOOM_MAX, ZOOM_MIN};

// =============================================================
// Helpers
// =============================================================

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn no_modifiers() -> Modifiers {
    Modifiers::default()
}

fn key(name: &str) -> Key {
    Key(name.to_owned())
}

fn has_render_needed(actions: &[Action]) -> bool {
    actions.contains(&Action::RenderNeeded)
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn core_new_is_idle_identity() {
    let core = EngineCore::new();
    assert_eq!(core.camera(), Camera::default());
    assert!(!core.is_dragging());
    assert!(matches!(core.input, InputState::Idle));
    assert_eq!(core.viewport_width, 0.0);
}

#[test]
fn set_viewport_clamps_negative_sizes() {
    let mut core = EngineCore::new();
    core.set_viewport(-5.0, 600.0);
    assert_eq!(core.viewport_width, 0.0);
    assert_eq!(core.viewport_height, 600.0);
}

#[test]
fn center_content_uses_viewport() {
    let mut core = EngineCore::new();
    core.set_viewport(1000.0, 800.0);
    let actions = core.center_content(600.0, 400.0);
    assert!(has_render_needed(&actions));
    assert_eq!(core.camera().pan_x, 200.0);
    assert_eq!(core.camera().pan_y, 200.0);
}

// =============================================================
// Panning
// =============================================================

#[test]
fn background_drag_pans_by_pointer_delta() {
    let mut core = EngineCore::new();
    let down = core.on_pointer_down(pt(100.0, 100.0), Button::Primary, PointerTarget::Background);
    assert_eq!(down, vec![Action::SetCursor(CURSOR_PANNING.to_owned())]);
    assert!(core.is_dragging());

    let moved = core.on_pointer_move(pt(130.0, 90.0), no_modifiers());
    assert!(has_render_needed(&moved));
    let moved = core.on_pointer_move(pt(140.0, 95.0), no_modifiers());
    assert!(has_render_needed(&moved));
    assert_eq!(core.camera().pan_x, 40.0);
    assert_eq!(core.camera().pan_y, -5.0);

    let up = core.on_pointer_up(pt(140.0, 95.0), Button::Primary);
    assert_eq!(up, vec![Action::SetCursor(CURSOR_IDLE.to_owned())]);
    assert!(!core.is_dragging());
    assert!(matches!(core.input, InputState::Idle));
}

#[test]
fn move_without_gesture_does_nothing() {
    let mut core = EngineCore::new();
    assert!(core.on_pointer_move(pt(10.0, 10.0), no_modifiers()).is_empty());
    assert_eq!(core.camera(), Camera::default());
}

#[test]
fn zero_delta_move_emits_no_render() {
    let mut core = EngineCore::new();
    core.on_pointer_down(pt(5.0, 5.0), Button::Primary, PointerTarget::Background);
    assert!(core.on_pointer_move(pt(5.0, 5.0), no_modifiers()).is_empty());
}

#[test]
fn background_click_without_move_clears_selection() {
    let mut core = EngineCore::new();
    core.on_pointer_down(pt(5.0, 5.0), Button::Primary, PointerTarget::Background);
    let up = core.on_pointer_up(pt(5.0, 5.0), Button::Primary);
    assert!(up.contains(&Action::ClearSelection));
}

#[test]
fn drag_then_release_keeps_selection() {
    let mut core = EngineCore::new();
    core.on_pointer_down(pt(5.0, 5.0), Button::Primary, PointerTarget::Background);
    core.on_pointer_move(pt(9.0, 5.0), no_modifiers());
    let up = core.on_pointer_up(pt(9.0, 5.0), Button::Primary);
    assert!(!up.contains(&Action::ClearSelection));
}

#[test]
fn primary_on_block_selects_without_panning() {
    let mut core = EngineCore::new();
    let actions = core.on_pointer_down(pt(5.0, 5.0), Button::Primary, PointerTarget::Block("b-1".to_owned()));
    assert_eq!(actions, vec![Action::SelectBlock("b-1".to_owned())]);
    assert!(!core.is_dragging());
}

#[test]
fn middle_button_pans_even_over_blocks() {
    let mut core = EngineCore::new();
    core.on_pointer_down(pt(0.0, 0.0), Button::Middle, PointerTarget::Block("b-1".to_owned()));
    assert!(core.is_dragging());
}

#[test]
fn secondary_button_is_ignored() {
    let mut core = EngineCore::new();
    assert!(core.on_pointer_down(pt(0.0, 0.0), Button::Secondary, PointerTarget::Background).is_empty());
    assert!(!core.is_dragging());
}

#[test]
fn cancel_ends_pan() {
    let mut core = EngineCore::new();
    core.on_pointer_down(pt(0.0, 0.0), Button::Primary, PointerTarget::Background);
    assert_eq!(core.on_pointer_cancel(), vec![Action::SetCursor(CURSOR_IDLE.to_owned())]);
    assert!(!core.is_dragging());
    assert!(core.on_pointer_cancel().is_empty());
}

#[test]
fn pointer_up_when_idle_is_noop() {
    let mut core = EngineCore::new();
    assert!(core.on_pointer_up(pt(0.0, 0.0), Button::Primary).is_empty());
}

// =============================================================
// Wheel
// =============================================================

#[test]
fn wheel_zooms_toward_pointer() {
    let mut core = EngineCore::new();
    let pointer = pt(300.0, 200.0);
    let before = core.camera().screen_to_world(pointer);
    let actions = core.on_wheel(pointer, WheelDelta { dx: 0.0, dy: -53.0 }, no_modifiers());
    assert!(has_render_needed(&actions));
    assert!((core.camera().zoom - 1.05).abs() < 1e-12);
    let after = core.camera().screen_to_world(pointer);
    assert!((before.x - after.x).abs() < 1e-9 && (before.y - after.y).abs() < 1e-9);
}

#[test]
fn horizontal_only_wheel_is_ignored() {
    let mut core = EngineCore::new();
    assert!(core.on_wheel(pt(0.0, 0.0), WheelDelta { dx: 12.0, dy: 0.0 }, no_modifiers()).is_empty());
    assert_eq!(core.camera().zoom, 1.0);
}

// =============================================================
// Keyboard and toolbar
// =============================================================

#[test]
fn keyboard_zoom_shortcuts() {
    let mut core = EngineCore::new();
    core.on_key_down(&key("+"), no_modifiers());
    assert!((core.camera().zoom - 1.1).abs() < 1e-12);
    core.on_key_down(&key("-"), no_modifiers());
    core.on_key_down(&key("-"), no_modifiers());
    assert!((core.camera().zoom - 0.9).abs() < 1e-12);
    core.state.camera.pan_x = 99.0;
    core.on_key_down(&key("0"), no_modifiers());
    assert_eq!(core.camera(), Camera::default());
}

#[test]
fn keyboard_shortcuts_ignore_ctrl_combos() {
    let mut core = EngineCore::new();
    let ctrl = Modifiers { ctrl: true, ..Modifiers::default() };
    assert!(core.on_key_down(&key("+"), ctrl).is_empty());
    assert_eq!(core.camera().zoom, 1.0);
}

#[test]
fn escape_clears_selection() {
    let mut core = EngineCore::new();
    assert_eq!(core.on_key_down(&key("Escape"), no_modifiers()), vec![Action::ClearSelection]);
}

#[test]
fn toolbar_zoom_respects_bounds() {
    let mut core = EngineCore::new();
    for _ in 0..50 {
        core.zoom_in();
    }
    assert_eq!(core.camera().zoom, ZOOM_MAX);
    for _ in 0..50 {
        core.zoom_out();
    }
    assert_eq!(core.camera().zoom, ZOOM_MIN);
}

#[test]
fn toggle_grid_flips() {
    let mut core = EngineCore::new();
    assert!(core.state.show_grid);
    core.toggle_grid();
    assert!(!core.state.show_grid);
}

#[test]
fn set_background_only_renders_on_change() {
    let mut core = EngineCore::new();
    assert!(has_render_needed(&core.set_background("#ffffff")));
    assert!(core.set_background("#ffffff").is_empty());
    assert_eq!(core.state.background_color, "#ffffff");
}
