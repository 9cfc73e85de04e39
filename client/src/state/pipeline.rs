//! Pipeline page state: jobs, candidates by stage, search and sort.
//!
//! DESIGN
//! ======
//! Stage changes are optimistic in-memory updates; there is no server to
//! confirm them. Relationships are id lookups against the loaded lists.

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod pipeline_test;

use std::cmp::Reverse;

use crate::net::types::{Candidate, Client, Job, JobStatus, Stage, find_by_id};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    RatingDesc,
    AppliedNewest,
    AppliedOldest,
    Name,
}

impl SortKey {
    pub const ALL: [Self; 4] = [Self::RatingDesc, Self::AppliedNewest, Self::AppliedOldest, Self::Name];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::RatingDesc => "Highest rated",
            Self::AppliedNewest => "Newest applicants",
            Self::AppliedOldest => "Oldest applicants",
            Self::Name => "Name",
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::RatingDesc => "rating",
            Self::AppliedNewest => "newest",
            Self::AppliedOldest => "oldest",
            Self::Name => "name",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == raw)
    }
}

#[derive(Clone, Debug, Default)]
pub struct PipelineState {
    pub jobs: Vec<Job>,
    pub candidates: Vec<Candidate>,
    pub clients: Vec<Client>,
    pub selected_job: Option<String>,
    /// `None` shows jobs of every status.
    pub job_status: Option<JobStatus>,
    search: String,
    pub sort: SortKey,
    pub selected_candidate: Option<String>,
}

impl PipelineState {
    #[must_use]
    pub fn new(jobs: Vec<Job>, candidates: Vec<Candidate>, clients: Vec<Client>) -> Self {
        let selected_job = jobs.iter().find(|j| j.status == JobStatus::Open).map(|j| j.id.clone());
        Self { jobs, candidates, clients, selected_job, ..Self::default() }
    }

    pub fn set_search(&mut self, search: &str) {
        search.trim().to_lowercase().clone_into(&mut self.search);
    }

    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Jobs passing the status filter and matching the search by title.
    #[must_use]
    pub fn visible_jobs(&self) -> Vec<&Job> {
        self.jobs
            .iter()
            .filter(|j| self.job_status.is_none_or(|s| j.status == s))
            .filter(|j| self.search.is_empty() || j.title.to_lowercase().contains(&self.search))
            .collect()
    }

    /// Candidates for the selected job (all when none is selected), matching
    /// the search by name or current title, in the chosen order.
    #[must_use]
    pub fn visible_candidates(&self) -> Vec<&Candidate> {
        let mut list: Vec<&Candidate> = self
            .candidates
            .iter()
            .filter(|c| self.selected_job.is_none() || c.job_id == self.selected_job)
            .filter(|c| {
                self.search.is_empty()
                    || c.name.to_lowercase().contains(&self.search)
                    || c.title.to_lowercase().contains(&self.search)
            })
            .collect();
        match self.sort {
            SortKey::RatingDesc => list.sort_by_key(|c| (Reverse(c.rating), c.name.to_lowercase())),
            SortKey::AppliedNewest => list.sort_by_key(|c| Reverse(c.applied_at)),
            SortKey::AppliedOldest => list.sort_by_key(|c| c.applied_at),
            SortKey::Name => list.sort_by_key(|c| c.name.to_lowercase()),
        }
        list
    }

    /// Visible candidates grouped into every stage column, in funnel order.
    #[must_use]
    pub fn by_stage(&self) -> Vec<(Stage, Vec<&Candidate>)> {
        let visible = self.visible_candidates();
        Stage::ALL
            .into_iter()
            .map(|stage| (stage, visible.iter().copied().filter(|c| c.stage == stage).collect()))
            .collect()
    }

    /// Move a candidate one stage forward. Returns the new stage.
    pub fn advance(&mut self, candidate_id: &str) -> Option<Stage> {
        self.move_stage(candidate_id, Stage::next)
    }

    /// Move a candidate one stage back. Returns the new stage.
    pub fn retreat(&mut self, candidate_id: &str) -> Option<Stage> {
        self.move_stage(candidate_id, Stage::previous)
    }

    pub fn reject(&mut self, candidate_id: &str) -> bool {
        let Some(c) = self.candidates.iter_mut().find(|c| c.id == candidate_id) else {
            return false;
        };
        c.stage = Stage::Rejected;
        true
    }

    fn move_stage(&mut self, candidate_id: &str, step: fn(Stage) -> Option<Stage>) -> Option<Stage> {
        let c = self.candidates.iter_mut().find(|c| c.id == candidate_id)?;
        let next = step(c.stage)?;
        c.stage = next;
        Some(next)
    }

    #[must_use]
    pub fn job(&self, id: Option<&str>) -> Option<&Job> {
        find_by_id(&self.jobs, id, |j| j.id.as_str())
    }

    #[must_use]
    pub fn client(&self, id: Option<&str>) -> Option<&Client> {
        find_by_id(&self.clients, id, |c| c.id.as_str())
    }

    #[must_use]
    pub fn candidate(&self, id: Option<&str>) -> Option<&Candidate> {
        find_by_id(&self.candidates, id, |c| c.id.as_str())
    }

    #[must_use]
    pub fn client_name_for_job(&self, job: &Job) -> Option<&str> {
        self.client(job.client_id.as_deref()).map(|c| c.name.as_str())
    }

    #[must_use]
    pub fn open_jobs(&self) -> usize {
        self.jobs.iter().filter(|j| j.status == JobStatus::Open).count()
    }

    #[must_use]
    pub fn active_candidates(&self) -> usize {
        self.candidates.iter().filter(|c| c.stage.is_active()).count()
    }

    /// Candidates applied to `job_id` that are still in the funnel.
    #[must_use]
    pub fn active_for_job(&self, job_id: &str) -> usize {
        self.candidates.iter().filter(|c| c.job_id.as_deref() == Some(job_id) && c.stage.is_active()).count()
    }
}

/// `"★★★☆☆"` for a 1-5 rating.
#[must_use]
pub fn rating_stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}
