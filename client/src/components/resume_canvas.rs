//! Pan/zoom viewport hosting the resume sheet.
//!
//! SYSTEM CONTEXT
//! ==============
//! DOM events are mapped to engine inputs (`util::canvas_input`), fed to the
//! `canvas` engine held in `ResumeState`, and the returned actions are applied
//! there. The sheet is positioned with a single CSS transform from the camera.
//!
//! TRADE-OFFS
//! ==========
//! Pointer capture is taken only for background pans. Presses on a block are
//! left alone so native drag-and-drop reordering still starts.

use chrono::Utc;
use leptos::prelude::*;

use crate::components::block_view::{PAGE_HEIGHT_PX, PAGE_WIDTH_PX, ResumeSheet};
use crate::state::resume::ResumeState;

/// Background presets offered in the toolbar.
const BACKGROUNDS: [(&str, &str); 4] =
    [("Gray", canvas::consts::DEFAULT_BACKGROUND), ("White", "#ffffff"), ("Slate", "#e2e8f0"), ("Sand", "#f5f0e6")];

#[component]
pub fn ResumeCanvas() -> impl IntoView {
    let resume = expect_context::<RwSignal<ResumeState>>();
    let viewport_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let Some(viewport) = viewport_ref.get() else {
            return;
        };
        let rect = viewport.get_bounding_client_rect();
        resume.update(|s| {
            s.canvas.set_viewport(rect.width(), rect.height());
            let actions = s.canvas.center_content(PAGE_WIDTH_PX, PAGE_HEIGHT_PX);
            s.apply_canvas_actions(actions, Utc::now());
        });
    });

    let on_pointer_down = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::PointerEvent| {
                use canvas::input::{Button, PointerTarget};

                use crate::util::canvas_input::{hits_control, pointer_target, viewport_point};

                if hits_control(&ev) {
                    return;
                }
                let Some(viewport) = viewport_ref.get_untracked() else {
                    return;
                };
                let target = pointer_target(&ev);
                if matches!(target, PointerTarget::Background) {
                    ev.prevent_default();
                    let _ = viewport.set_pointer_capture(ev.pointer_id());
                }
                let _ = viewport.focus();
                let point = viewport_point(ev.client_x(), ev.client_y(), &viewport);
                resume.update(|s| {
                    let actions = s.canvas.on_pointer_down(point, Button::from_dom(ev.button()), target);
                    s.apply_canvas_actions(actions, Utc::now());
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_move = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::PointerEvent| {
                use crate::util::canvas_input::{map_modifiers, viewport_point};

                if !resume.with_untracked(|s| s.canvas.is_dragging()) {
                    return;
                }
                let Some(viewport) = viewport_ref.get_untracked() else {
                    return;
                };
                let point = viewport_point(ev.client_x(), ev.client_y(), &viewport);
                let modifiers = map_modifiers(ev.shift_key(), ev.ctrl_key(), ev.alt_key(), ev.meta_key());
                resume.update(|s| {
                    let actions = s.canvas.on_pointer_move(point, modifiers);
                    s.apply_canvas_actions(actions, Utc::now());
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_up = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::PointerEvent| {
                use canvas::input::Button;

                use crate::util::canvas_input::viewport_point;

                let Some(viewport) = viewport_ref.get_untracked() else {
                    return;
                };
                if viewport.has_pointer_capture(ev.pointer_id()) {
                    let _ = viewport.release_pointer_capture(ev.pointer_id());
                }
                let point = viewport_point(ev.client_x(), ev.client_y(), &viewport);
                resume.update(|s| {
                    let actions = s.canvas.on_pointer_up(point, Button::from_dom(ev.button()));
                    s.apply_canvas_actions(actions, Utc::now());
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_cancel = move |_ev: leptos::ev::PointerEvent| {
        resume.update(|s| {
            let actions = s.canvas.on_pointer_cancel();
            s.apply_canvas_actions(actions, Utc::now());
        });
    };

    let on_wheel = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::WheelEvent| {
                use canvas::input::WheelDelta;

                use crate::util::canvas_input::{map_modifiers, viewport_point};

                ev.prevent_default();
                let Some(viewport) = viewport_ref.get_untracked() else {
                    return;
                };
                let point = viewport_point(ev.client_x(), ev.client_y(), &viewport);
                let modifiers = map_modifiers(ev.shift_key(), ev.ctrl_key(), ev.alt_key(), ev.meta_key());
                let delta = WheelDelta { dx: ev.delta_x(), dy: ev.delta_y() };
                resume.update(|s| {
                    let actions = s.canvas.on_wheel(point, delta, modifiers);
                    s.apply_canvas_actions(actions, Utc::now());
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::WheelEvent| {}
        }
    };

    let on_key_down = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::KeyboardEvent| {
                use canvas::input::Key;

                use crate::util::canvas_input::{map_modifiers, should_prevent_default_key};

                let key = ev.key();
                if should_prevent_default_key(&key) {
                    ev.prevent_default();
                }
                let modifiers = map_modifiers(ev.shift_key(), ev.ctrl_key(), ev.alt_key(), ev.meta_key());
                resume.update(|s| {
                    let actions = s.canvas.on_key_down(&Key(key), modifiers);
                    s.apply_canvas_actions(actions, Utc::now());
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::KeyboardEvent| {}
        }
    };

    view! {
        <div class="resume-canvas-wrap">
            <CanvasControls />
            <div
                class="resume-canvas"
                node_ref=viewport_ref
                tabindex="0"
                style=move || resume.with(|s| format!("{} cursor: {};", s.canvas.state.grid_css(), s.cursor))
                on:pointerdown=on_pointer_down
                on:pointermove=on_pointer_move
                on:pointerup=on_pointer_up
                on:pointercancel=on_pointer_cancel
                on:wheel=on_wheel
                on:keydown=on_key_down
            >
                <div
                    class="resume-canvas__content"
                    style=move || {
                        resume.with(|s| format!("transform: {}; transform-origin: 0 0;", s.canvas.camera().transform_css()))
                    }
                >
                    <ResumeSheet />
                </div>
            </div>
        </div>
    }
}

#[component]
fn CanvasControls() -> impl IntoView {
    let resume = expect_context::<RwSignal<ResumeState>>();
    let run = move |op: fn(&mut canvas::engine::EngineCore) -> Vec<canvas::engine::Action>| {
        resume.update(|s| {
            let actions = op(&mut s.canvas);
            s.apply_canvas_actions(actions, Utc::now());
        });
    };

    view! {
        <div class="canvas-controls">
            <button class="btn btn--small" title="Zoom out" on:click=move |_| run(canvas::engine::EngineCore::zoom_out)>
                "−"
            </button>
            <span class="canvas-controls__zoom">
                {move || format!("{}%", resume.with(|s| s.canvas.camera().zoom_percent()))}
            </span>
            <button class="btn btn--small" title="Zoom in" on:click=move |_| run(canvas::engine::EngineCore::zoom_in)>
                "+"
            </button>
            <button class="btn btn--small" title="Reset view" on:click=move |_| run(canvas::engine::EngineCore::reset_view)>
                "Reset"
            </button>
            <button
                class="btn btn--small"
                class:btn--active=move || resume.with(|s| s.canvas.state.show_grid)
                on:click=move |_| run(canvas::engine::EngineCore::toggle_grid)
            >
                "Grid"
            </button>
            <select
                class="canvas-controls__background"
                title="Background"
                on:change=move |ev| {
                    let color = event_target_value(&ev);
                    resume.update(|s| {
                        let actions = s.canvas.set_background(&color);
                        s.apply_canvas_actions(actions, Utc::now());
                    });
                }
            >
                {BACKGROUNDS
                    .into_iter()
                    .map(|(label, color)| {
                        view! {
                            <option
                                value=color
                                selected=move || resume.with(|s| s.canvas.state.background_color == color)
                            >
                                {label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
