//! Dark mode initialization and toggle.
//!
//! Reads the user's preference from `localStorage` and applies a
//! `data-theme` attribute to the `<html>` element. Toggle writes back to
//! `localStorage` and updates that attribute. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! safely no-op to keep server rendering deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::util::ui_persistence;

pub const STORAGE_KEY: &str = "hireboard_dark_mode";

/// Attribute value for the `data-theme` attribute.
#[must_use]
pub fn theme_name(enabled: bool) -> &'static str {
    if enabled { "dark" } else { "light" }
}

/// Parse a stored preference. Anything but `"true"`/`"false"` is unknown.
#[must_use]
pub fn parse_preference(raw: &str) -> Option<bool> {
    match raw {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Read the dark mode preference.
///
/// Returns the stored preference, or the system preference when none is
/// stored.
pub fn read_preference() -> bool {
    if let Some(stored) = ui_persistence::load_raw(STORAGE_KEY).as_deref().and_then(parse_preference) {
        return stored;
    }
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            if let Err(e) = el.set_attribute("data-theme", theme_name(enabled)) {
                log::warn!("failed to set theme attribute: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Toggle dark mode and persist the new preference.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    if let Err(e) = ui_persistence::save_raw(STORAGE_KEY, if next { "true" } else { "false" }) {
        log::warn!("failed to persist dark mode preference: {e}");
    }
    next
}
