//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the domain containers so
//! header and navigation controls can evolve independently of page data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Top-level sections reachable from the app header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Dashboard,
    Calendar,
    Pipeline,
    Notes,
    Resume,
}

impl Section {
    pub const ALL: [Self; 5] = [Self::Dashboard, Self::Calendar, Self::Pipeline, Self::Notes, Self::Resume];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Calendar => "Calendar",
            Self::Pipeline => "Pipeline",
            Self::Notes => "Notes",
            Self::Resume => "Resume Builder",
        }
    }

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Dashboard => "/dashboard",
            Self::Calendar => "/calendar",
            Self::Pipeline => "/pipeline",
            Self::Notes => "/notes",
            Self::Resume => "/resume",
        }
    }

    /// Section owning `pathname`, if any.
    #[must_use]
    pub fn from_path(pathname: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| pathname == s.path() || pathname.starts_with(&format!("{}/", s.path())))
    }
}

#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
    /// Mobile navigation drawer.
    pub nav_open: bool,
}
