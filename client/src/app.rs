//! Root application component with routing and context providers.

use chrono::{Local, Utc};
use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use resume::ResumeDocument;

use crate::components::app_header::AppHeader;
use crate::net::fixtures::Fixtures;
use crate::net::types::InterviewStat;
use crate::pages::{
    calendar::CalendarPage, dashboard::DashboardPage, landing::LandingPage, notes::NotesPage,
    pipeline::PipelinePage, resume::ResumePage,
};
use crate::state::{
    calendar::CalendarState, notes::NotesState, pipeline::PipelineState, resume::ResumeState, ui::UiState,
};
use crate::util::dark_mode;

/// Daily interview counts for the dashboard chart. Read-only after load.
#[derive(Clone, Debug, Default)]
pub struct InterviewStats(pub Vec<InterviewStat>);

/// HTML shell rendered on the server for SSR + hydration.
///
/// The PDF export bridge calls the `html2canvas` and `jspdf` globals, so both
/// scripts load ahead of the WASM bundle.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script src="https://cdn.jsdelivr.net/npm/html2canvas@1.4.1/dist/html2canvas.min.js" defer></script>
                <script src="https://cdn.jsdelivr.net/npm/jspdf@2.5.1/dist/jspdf.umd.min.js" defer></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides every page's state container and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let fixtures = Fixtures::load_or_empty();
    // UTC on both sides of hydration; the browser's own date lands in the
    // effect below.
    let today = Utc::now().date_naive();

    let ui = RwSignal::new(UiState::default());
    let calendar = RwSignal::new(CalendarState::new(fixtures.events, today));
    let pipeline = RwSignal::new(PipelineState::new(fixtures.jobs, fixtures.candidates, fixtures.clients));
    let notes = RwSignal::new(NotesState::new(fixtures.notes));
    let stats = RwSignal::new(InterviewStats(fixtures.interview_stats));
    // Server render uses the starter document; the stored one replaces it
    // once the browser mounts.
    let resume = RwSignal::new(ResumeState::new(ResumeDocument::starter(Utc::now())));

    provide_context(ui);
    provide_context(calendar);
    provide_context(pipeline);
    provide_context(notes);
    provide_context(stats);
    provide_context(resume);

    // Effects only run in the browser.
    Effect::new(move || {
        let enabled = dark_mode::read_preference();
        dark_mode::apply(enabled);
        ui.update(|u| u.dark_mode = enabled);
        resume.update(|s| s.restore(Utc::now()));
        calendar.update(|s| s.set_today(Local::now().date_naive()));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/hireboard.css"/>
        <Title text="Hireboard"/>

        <Router>
            <AppHeader/>
            <main class="app-main">
                <Routes fallback=|| view! { <p class="app-main__missing">"Page not found."</p> }>
                    <Route path=StaticSegment("") view=LandingPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("calendar") view=CalendarPage/>
                    <Route path=StaticSegment("pipeline") view=PipelinePage/>
                    <Route path=StaticSegment("notes") view=NotesPage/>
                    <Route path=StaticSegment("resume") view=ResumePage/>
                </Routes>
            </main>
        </Router>
    }
}
