//! Record types for jobs, candidates, clients, notes, and dashboard stats.
//!
//! DESIGN
//! ======
//! Records are flat and refer to each other by optional id. Lookups against
//! the static lists resolve a dangling id to `None`, never an error.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    pub name: String,
    pub industry: String,
    pub contact_name: String,
    pub contact_email: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Open,
    OnHold,
    Closed,
}

impl JobStatus {
    pub const ALL: [Self; 3] = [Self::Open, Self::OnHold, Self::Closed];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::OnHold => "On hold",
            Self::Closed => "Closed",
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::OnHold => "on_hold",
            Self::Closed => "closed",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub client_id: Option<String>,
    pub status: JobStatus,
    pub location: String,
    pub openings: u32,
    pub posted_at: NaiveDate,
}

/// Pipeline stage, in funnel order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Applied,
    Screening,
    Interview,
    Offer,
    Hired,
    Rejected,
}

impl Stage {
    pub const ALL: [Self; 6] = [Self::Applied, Self::Screening, Self::Interview, Self::Offer, Self::Hired, Self::Rejected];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Applied => "Applied",
            Self::Screening => "Screening",
            Self::Interview => "Interview",
            Self::Offer => "Offer",
            Self::Hired => "Hired",
            Self::Rejected => "Rejected",
        }
    }

    /// Next stage along the funnel. `Hired` and `Rejected` are terminal.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Applied => Some(Self::Screening),
            Self::Screening => Some(Self::Interview),
            Self::Interview => Some(Self::Offer),
            Self::Offer => Some(Self::Hired),
            Self::Hired | Self::Rejected => None,
        }
    }

    /// Previous stage along the funnel. A rejected candidate has none.
    #[must_use]
    pub fn previous(self) -> Option<Self> {
        match self {
            Self::Applied | Self::Rejected => None,
            Self::Screening => Some(Self::Applied),
            Self::Interview => Some(Self::Screening),
            Self::Offer => Some(Self::Interview),
            Self::Hired => Some(Self::Offer),
        }
    }

    /// Still moving through the funnel.
    #[must_use]
    pub fn is_active(self) -> bool {
        !matches!(self, Self::Hired | Self::Rejected)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    pub email: String,
    pub title: String,
    #[serde(default)]
    pub job_id: Option<String>,
    pub stage: Stage,
    /// 1 to 5 stars.
    pub rating: u8,
    pub applied_at: NaiveDate,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub pinned: bool,
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default)]
    pub job_id: Option<String>,
    #[serde(default)]
    pub candidate_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Interviews held on one day.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewStat {
    pub date: NaiveDate,
    pub count: u32,
}

/// Find a record by id in a static list.
pub fn find_by_id<'a, T, F>(items: &'a [T], id: Option<&str>, id_of: F) -> Option<&'a T>
where
    F: Fn(&T) -> &str,
{
    let id = id?;
    items.iter().find(|item| id_of(item) == id)
}
