//! DOM-to-engine input mapping for the resume canvas.
//!
//! Pointer and wheel positions are taken relative to the viewport element's
//! bounding box rather than `offsetX/Y`, which are relative to whichever child
//! was hit and so jump as the pointer crosses block boundaries.

#[cfg(test)]
#[path = "canvas_input_test.rs"]
mod canvas_input_test;

use canvas::camera::Point;
use canvas::input::Modifiers;

/// Attribute carrying a block id on each rendered resume block.
pub const BLOCK_ID_ATTR: &str = "data-block-id";

/// Keys whose browser default (page zoom, scrolling) would fight the canvas.
#[must_use]
pub fn should_prevent_default_key(key: &str) -> bool {
    matches!(key, "+" | "=" | "-" | "_" | "0" | "Escape")
}

#[must_use]
pub fn map_modifiers(shift: bool, ctrl: bool, alt: bool, meta: bool) -> Modifiers {
    Modifiers { shift, ctrl, alt, meta }
}

/// Client coordinates to viewport-local coordinates.
#[must_use]
pub fn local_point(client_x: f64, client_y: f64, origin_left: f64, origin_top: f64) -> Point {
    Point::new(client_x - origin_left, client_y - origin_top)
}

#[cfg(feature = "hydrate")]
pub fn viewport_point(client_x: i32, client_y: i32, viewport: &web_sys::HtmlDivElement) -> Point {
    let rect = viewport.get_bounding_client_rect();
    local_point(f64::from(client_x), f64::from(client_y), rect.left(), rect.top())
}

/// Block under the event target, if any.
#[cfg(feature = "hydrate")]
pub fn pointer_target(ev: &leptos::ev::PointerEvent) -> canvas::input::PointerTarget {
    use canvas::input::PointerTarget;
    use wasm_bindgen::JsCast;

    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest(&format!("[{BLOCK_ID_ATTR}]")).ok().flatten())
        .and_then(|el| el.get_attribute(BLOCK_ID_ATTR))
        .map_or(PointerTarget::Background, PointerTarget::Block)
}

/// True when the event started on a form control inside the canvas.
#[cfg(feature = "hydrate")]
pub fn hits_control(ev: &leptos::ev::PointerEvent) -> bool {
    use wasm_bindgen::JsCast;

    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest("button, input, textarea, select").ok().flatten())
        .is_some()
}
