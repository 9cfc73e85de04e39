//! Top navigation bar shared by every route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered once by `App` outside `Routes`, so it reads the router location to
//! highlight the active section instead of receiving it as a prop.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::state::ui::{Section, UiState};
use crate::util::dark_mode;

#[component]
pub fn AppHeader() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let location = use_location();
    let active = move || Section::from_path(&location.pathname.get());

    let on_toggle_dark = move |_| {
        let next = dark_mode::toggle(ui.get_untracked().dark_mode);
        ui.update(|u| u.dark_mode = next);
    };
    let on_toggle_nav = move |_| ui.update(|u| u.nav_open = !u.nav_open);

    view! {
        <header class="app-header">
            <A href="/" attr:class="app-header__brand">
                "Hireboard"
            </A>
            <button
                class="btn app-header__menu"
                on:click=on_toggle_nav
                aria-label="Toggle navigation"
                aria-expanded=move || ui.get().nav_open.to_string()
            >
                "☰"
            </button>
            <nav class="app-header__nav" class:app-header__nav--open=move || ui.get().nav_open>
                {Section::ALL
                    .into_iter()
                    .map(|section| {
                        view! {
                            <A href=section.path() attr:class="app-header__link">
                                <span
                                    class="app-header__label"
                                    class:app-header__label--active=move || active() == Some(section)
                                    on:click=move |_| ui.update(|u| u.nav_open = false)
                                >
                                    {section.label()}
                                </span>
                            </A>
                        }
                    })
                    .collect_view()}
            </nav>
            <span class="app-header__spacer"></span>
            <button class="btn app-header__dark-toggle" on:click=on_toggle_dark title="Toggle dark mode">
                {move || if ui.get().dark_mode { "☀" } else { "☾" }}
            </button>
        </header>
    }
}
