//! Bar chart of daily interview counts.
//!
//! Plain DOM bars; heights come from [`crate::util::chart::bars`] so the
//! scaling rule is tested without a browser.

use leptos::prelude::*;

use crate::app::InterviewStats;
use crate::util::chart::{self, CHART_MAX_PX};

#[component]
pub fn InterviewChart() -> impl IntoView {
    let stats = expect_context::<RwSignal<InterviewStats>>();
    let bars = move || chart::bars(&stats.get().0, CHART_MAX_PX);
    let total = move || chart::total(&stats.get().0);

    view! {
        <section class="interview-chart">
            <header class="interview-chart__header">
                <h2>"Interviews"</h2>
                <span class="interview-chart__total">{move || format!("{} in the last {} days", total(), stats.get().0.len())}</span>
            </header>
            <Show
                when=move || !stats.get().0.is_empty()
                fallback=|| view! { <p class="interview-chart__empty">"No interview data yet."</p> }
            >
                <div class="interview-chart__bars" style=format!("height: {CHART_MAX_PX}px;")>
                    {move || {
                        bars()
                            .into_iter()
                            .map(|bar| {
                                let title = format!("{}: {} interview(s)", bar.date.format("%b %-d"), bar.count);
                                view! {
                                    <div class="interview-chart__column" title=title>
                                        <span class="interview-chart__count">{bar.count}</span>
                                        <div
                                            class="interview-chart__bar"
                                            class:interview-chart__bar--peak=bar.is_peak
                                            style=format!("height: {:.1}px;", bar.height_px)
                                        ></div>
                                        <span class="interview-chart__label">{bar.label}</span>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </Show>
        </section>
    }
}
