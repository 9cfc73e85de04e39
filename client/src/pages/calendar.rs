//! Calendar page: toolbar, the active view, event detail, and the
//! new-event dialog.

use leptos::prelude::*;

use crate::components::calendar_toolbar::CalendarToolbar;
use crate::components::calendar_views::CalendarViews;
use crate::components::event_detail::EventDetail;
use crate::components::event_form::EventForm;
use crate::state::calendar::CalendarState;

#[component]
pub fn CalendarPage() -> impl IntoView {
    let calendar = expect_context::<RwSignal<CalendarState>>();
    let form_open = move || calendar.with(|s| s.form_open);

    view! {
        <div class="calendar-page">
            <CalendarToolbar />
            <div class="calendar-page__body">
                <CalendarViews />
                <EventDetail />
            </div>
            <Show when=form_open>
                <EventForm />
            </Show>
        </div>
    }
}
