//! Public marketing page at `/`.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::ui::Section;

struct Feature {
    section: Section,
    title: &'static str,
    body: &'static str,
}

const FEATURES: [Feature; 5] = [
    Feature {
        section: Section::Calendar,
        title: "Schedule without the back-and-forth",
        body: "Day, week, month and agenda views of every interview and client meeting. Drag an event to \
               reschedule it.",
    },
    Feature {
        section: Section::Pipeline,
        title: "See every candidate at a glance",
        body: "Stage columns for each open role, with ratings, tags and one-click moves along the funnel.",
    },
    Feature {
        section: Section::Notes,
        title: "Notes that stay connected",
        body: "Link notes to clients, jobs and candidates, pin what matters and search everything.",
    },
    Feature {
        section: Section::Resume,
        title: "Build a polished resume",
        body: "Arrange blocks on a zoomable canvas, pick a template and export a print-ready PDF.",
    },
    Feature {
        section: Section::Dashboard,
        title: "Know where the week stands",
        body: "Open roles, active candidates and interview volume in one place.",
    },
];

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing">
            <section class="landing__hero">
                <h1>"Recruiting, organized."</h1>
                <p class="landing__lead">
                    "Hireboard brings your calendar, pipeline, notes and candidate resumes into one workspace."
                </p>
                <div class="landing__cta">
                    <A href=Section::Dashboard.path() attr:class="btn btn--primary">
                        "Open dashboard"
                    </A>
                    <A href=Section::Resume.path() attr:class="btn">
                        "Try the resume builder"
                    </A>
                </div>
            </section>
            <section class="landing__features">
                {FEATURES
                    .iter()
                    .map(|feature| {
                        view! {
                            <article class="landing__feature">
                                <h2>{feature.title}</h2>
                                <p>{feature.body}</p>
                                <A href=feature.section.path() attr:class="landing__feature-link">
                                    {format!("Go to {} →", feature.section.label())}
                                </A>
                            </article>
                        }
                    })
                    .collect_view()}
            </section>
        </div>
    }
}
