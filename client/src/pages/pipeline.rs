//! Pipeline page: jobs list, candidates by stage, and candidate detail.
//!
//! SYSTEM CONTEXT
//! ==============
//! One search box filters both the jobs list (by title) and the candidates
//! (by name or title). The raw text lives here; `PipelineState` keeps the
//! normalized form.

use leptos::prelude::*;

use crate::components::candidate_card::CandidateCard;
use crate::net::types::JobStatus;
use crate::state::pipeline::{PipelineState, SortKey, rating_stars};

#[component]
pub fn PipelinePage() -> impl IntoView {
    let pipeline = expect_context::<RwSignal<PipelineState>>();
    let search = RwSignal::new(pipeline.with_untracked(|p| p.search().to_owned()));

    view! {
        <div class="pipeline-page">
            <aside class="pipeline-page__jobs">
                <label class="form-field">
                    <span class="form-field__label">"Status"</span>
                    <select on:change=move |ev| {
                        let status = JobStatus::parse(&event_target_value(&ev));
                        pipeline.update(|p| p.job_status = status);
                    }>
                        <option value="">"All jobs"</option>
                        {JobStatus::ALL
                            .into_iter()
                            .map(|status| {
                                view! {
                                    <option
                                        value=status.as_str()
                                        selected=move || pipeline.with(|p| p.job_status == Some(status))
                                    >
                                        {status.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </label>
                <JobList />
            </aside>
            <section class="pipeline-page__board">
                <div class="pipeline-page__controls">
                    <input
                        type="search"
                        placeholder="Search jobs and candidates"
                        prop:value=move || search.get()
                        on:input=move |ev| {
                            let raw = event_target_value(&ev);
                            pipeline.update(|p| p.set_search(&raw));
                            search.set(raw);
                        }
                    />
                    <select on:change=move |ev| {
                        if let Some(sort) = SortKey::parse(&event_target_value(&ev)) {
                            pipeline.update(|p| p.sort = sort);
                        }
                    }>
                        {SortKey::ALL
                            .into_iter()
                            .map(|key| {
                                view! {
                                    <option value=key.as_str() selected=move || pipeline.with(|p| p.sort == key)>
                                        {key.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
                <StageColumns />
            </section>
            <CandidateDetail />
        </div>
    }
}

#[component]
fn JobList() -> impl IntoView {
    let pipeline = expect_context::<RwSignal<PipelineState>>();

    let rows = move || {
        pipeline.with(|p| {
            p.visible_jobs()
                .into_iter()
                .map(|job| {
                    let client = p.client_name_for_job(job).unwrap_or("No client").to_owned();
                    (job.clone(), client, p.active_for_job(&job.id))
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <ul class="job-list">
            <li>
                <button
                    class="job-list__item"
                    class:job-list__item--selected=move || pipeline.with(|p| p.selected_job.is_none())
                    on:click=move |_| pipeline.update(|p| p.selected_job = None)
                >
                    "All candidates"
                </button>
            </li>
            {move || {
                rows()
                    .into_iter()
                    .map(|(job, client, active)| {
                        let id = job.id.clone();
                        let selected = {
                            let id = id.clone();
                            move || pipeline.with(|p| p.selected_job.as_deref() == Some(id.as_str()))
                        };
                        view! {
                            <li>
                                <button
                                    class="job-list__item"
                                    class:job-list__item--selected=selected
                                    on:click=move |_| pipeline.update(|p| p.selected_job = Some(id.clone()))
                                >
                                    <span class="job-list__title">{job.title.clone()}</span>
                                    <span class="job-list__meta">{format!("{client} · {}", job.location)}</span>
                                    <span class=format!("job-list__status job-status--{}", job.status.as_str())>
                                        {job.status.label()}
                                    </span>
                                    <span class="job-list__count">{format!("{active} active")}</span>
                                </button>
                            </li>
                        }
                    })
                    .collect_view()
            }}
        </ul>
    }
}

#[component]
fn StageColumns() -> impl IntoView {
    let pipeline = expect_context::<RwSignal<PipelineState>>();
    let columns = move || {
        pipeline.with(|p| {
            p.by_stage()
                .into_iter()
                .map(|(stage, list)| (stage, list.into_iter().cloned().collect::<Vec<_>>()))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="stage-columns">
            {move || {
                columns()
                    .into_iter()
                    .map(|(stage, candidates)| {
                        view! {
                            <section class="stage-column">
                                <header class="stage-column__header">
                                    <h3>{stage.label()}</h3>
                                    <span class="stage-column__count">{candidates.len()}</span>
                                </header>
                                {candidates
                                    .into_iter()
                                    .map(|candidate| view! { <CandidateCard candidate=candidate /> })
                                    .collect_view()}
                            </section>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
fn CandidateDetail() -> impl IntoView {
    let pipeline = expect_context::<RwSignal<PipelineState>>();

    move || {
        pipeline.with(|p| {
            let candidate = p.candidate(p.selected_candidate.as_deref())?;
            let job = p.job(candidate.job_id.as_deref());
            let job_title = job.map_or_else(|| "—".to_owned(), |j| j.title.clone());
            let client = job.and_then(|j| p.client_name_for_job(j)).unwrap_or("—").to_owned();
            Some(view! {
                <aside class="candidate-detail">
                    <header class="candidate-detail__header">
                        <h3>{candidate.name.clone()}</h3>
                        <button
                            class="btn"
                            aria-label="Close"
                            on:click=move |_| pipeline.update(|p| p.selected_candidate = None)
                        >
                            "✕"
                        </button>
                    </header>
                    <dl class="candidate-detail__fields">
                        <dt>"Current title"</dt>
                        <dd>{candidate.title.clone()}</dd>
                        <dt>"Email"</dt>
                        <dd>
                            <a href=format!("mailto:{}", candidate.email)>{candidate.email.clone()}</a>
                        </dd>
                        <dt>"Job"</dt>
                        <dd>{job_title}</dd>
                        <dt>"Client"</dt>
                        <dd>{client}</dd>
                        <dt>"Stage"</dt>
                        <dd>{candidate.stage.label()}</dd>
                        <dt>"Rating"</dt>
                        <dd>{rating_stars(candidate.rating)}</dd>
                        <dt>"Applied"</dt>
                        <dd>{candidate.applied_at.format("%B %-d, %Y").to_string()}</dd>
                    </dl>
                </aside>
            })
        })
    }
}
