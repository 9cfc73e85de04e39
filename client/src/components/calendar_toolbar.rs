//! Calendar navigation, view switcher and filters.

use calendar::{CalendarView, Direction, EventType, range_label};
use leptos::prelude::*;

use crate::state::calendar::CalendarState;

#[component]
pub fn CalendarToolbar() -> impl IntoView {
    let calendar = expect_context::<RwSignal<CalendarState>>();
    let go = move |direction: Direction| {
        calendar.update(|s| {
            let today = s.today;
            s.navigate(direction, today);
        });
    };
    // Raw input text; the filter keeps only the normalized form.
    let search = RwSignal::new(calendar.with_untracked(|s| s.filter.search().to_owned()));

    view! {
        <div class="calendar-toolbar">
            <div class="calendar-toolbar__nav">
                <button class="btn" on:click=move |_| go(Direction::Previous) aria-label="Previous">
                    "‹"
                </button>
                <button class="btn" on:click=move |_| go(Direction::Today)>
                    "Today"
                </button>
                <button class="btn" on:click=move |_| go(Direction::Next) aria-label="Next">
                    "›"
                </button>
                <h2 class="calendar-toolbar__label">{move || calendar.with(|s| range_label(s.view, s.reference))}</h2>
            </div>
            <div class="calendar-toolbar__views" role="tablist">
                {CalendarView::ALL
                    .into_iter()
                    .map(|view| {
                        view! {
                            <button
                                class="btn calendar-toolbar__view"
                                class:btn--active=move || calendar.with(|s| s.view == view)
                                role="tab"
                                on:click=move |_| calendar.update(|s| s.set_view(view))
                            >
                                {view.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <button class="btn btn--primary" on:click=move |_| calendar.update(|s| s.open_form(None))>
                "+ New event"
            </button>
        </div>
        <div class="calendar-filters">
            <input
                class="calendar-filters__search"
                type="search"
                placeholder="Search events"
                prop:value=move || search.get()
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    calendar.update(|s| s.filter.set_search(&value));
                    search.set(value);
                }
            />
            {EventType::ALL
                .into_iter()
                .map(|kind| {
                    view! {
                        <label class=format!("calendar-filters__type event--{}", kind.css_modifier())>
                            <input
                                type="checkbox"
                                prop:checked=move || calendar.with(|s| s.filter.includes_type(kind))
                                on:change=move |_| calendar.update(|s| s.filter.toggle_type(kind))
                            />
                            {kind.label()}
                        </label>
                    }
                })
                .collect_view()}
            <label class="calendar-filters__canceled">
                <input
                    type="checkbox"
                    prop:checked=move || calendar.with(|s| s.filter.shows_canceled())
                    on:change=move |ev| {
                        let show = event_target_checked(&ev);
                        calendar.update(|s| s.filter.set_show_canceled(show));
                    }
                />
                "Show canceled"
            </label>
        </div>
    }
}
