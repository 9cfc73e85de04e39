//! Typed resume blocks.
//!
//! A block is `{"id", "type", "data"}` on the wire, where `type` selects the
//! payload shape held in `data`. Every payload is a plain struct so the editor
//! and the renderer can match exhaustively on [`BlockData`].

#[cfg(test)]
#[path = "blocks_test.rs"]
mod blocks_test;

use serde::{Deserialize, Serialize};

/// The five block kinds a resume can contain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Header,
    Summary,
    Experience,
    Education,
    Skills,
}

impl BlockKind {
    /// Kinds in the order the "add block" palette lists them.
    pub const ALL: [Self; 5] = [Self::Header, Self::Summary, Self::Experience, Self::Education, Self::Skills];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Summary => "summary",
            Self::Experience => "experience",
            Self::Education => "education",
            Self::Skills => "skills",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Header => "Header",
            Self::Summary => "Summary",
            Self::Experience => "Experience",
            Self::Education => "Education",
            Self::Skills => "Skills",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == raw)
    }

    /// Initial payload for a freshly added block of this kind.
    #[must_use]
    pub fn default_data(self) -> BlockData {
        match self {
            Self::Header => BlockData::Header(HeaderData {
                name: "Your Name".to_owned(),
                title: "Professional Title".to_owned(),
                ..HeaderData::default()
            }),
            Self::Summary => BlockData::Summary(SummaryData {
                text: "A short summary of your experience and goals.".to_owned(),
            }),
            Self::Experience => BlockData::Experience(ExperienceData { entries: vec![ExperienceEntry::default()] }),
            Self::Education => BlockData::Education(EducationData { entries: vec![EducationEntry::default()] }),
            Self::Skills => BlockData::Skills(SkillsData::default()),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderData {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub website: String,
}

impl HeaderData {
    /// Non-empty contact fields in display order.
    #[must_use]
    pub fn contact_line(&self) -> Vec<&str> {
        [&self.email, &self.phone, &self.location, &self.website]
            .into_iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

/// Editable text fields of [`HeaderData`], in form order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderField {
    Name,
    Title,
    Email,
    Phone,
    Location,
    Website,
}

impl HeaderField {
    pub const ALL: [Self; 6] = [Self::Name, Self::Title, Self::Email, Self::Phone, Self::Location, Self::Website];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Full name",
            Self::Title => "Title",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Location => "Location",
            Self::Website => "Website",
        }
    }

    #[must_use]
    pub fn get(self, data: &HeaderData) -> &str {
        match self {
            Self::Name => &data.name,
            Self::Title => &data.title,
            Self::Email => &data.email,
            Self::Phone => &data.phone,
            Self::Location => &data.location,
            Self::Website => &data.website,
        }
    }

    pub fn set(self, data: &mut HeaderData, value: String) {
        let slot = match self {
            Self::Name => &mut data.name,
            Self::Title => &mut data.title,
            Self::Email => &mut data.email,
            Self::Phone => &mut data.phone,
            Self::Location => &mut data.location,
            Self::Website => &mut data.website,
        };
        *slot = value;
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryData {
    pub text: String,
}

/// One position held. An empty `end_date` means the role is current.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub company: String,
    pub role: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

impl ExperienceEntry {
    #[must_use]
    pub fn period_label(&self) -> String {
        period_label(&self.start_date, &self.end_date)
    }
}

/// Editable text fields of [`ExperienceEntry`], in form order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExperienceField {
    Company,
    Role,
    StartDate,
    EndDate,
    Description,
}

impl ExperienceField {
    pub const ALL: [Self; 5] = [Self::Company, Self::Role, Self::StartDate, Self::EndDate, Self::Description];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Company => "Company",
            Self::Role => "Role",
            Self::StartDate => "Start",
            Self::EndDate => "End",
            Self::Description => "Description",
        }
    }

    #[must_use]
    pub fn get(self, entry: &ExperienceEntry) -> &str {
        match self {
            Self::Company => &entry.company,
            Self::Role => &entry.role,
            Self::StartDate => &entry.start_date,
            Self::EndDate => &entry.end_date,
            Self::Description => &entry.description,
        }
    }

    pub fn set(self, entry: &mut ExperienceEntry, value: String) {
        let slot = match self {
            Self::Company => &mut entry.company,
            Self::Role => &mut entry.role,
            Self::StartDate => &mut entry.start_date,
            Self::EndDate => &mut entry.end_date,
            Self::Description => &mut entry.description,
        };
        *slot = value;
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EducationEntry {
    pub school: String,
    pub degree: String,
    pub start_date: String,
    pub end_date: String,
}

impl EducationEntry {
    #[must_use]
    pub fn period_label(&self) -> String {
        period_label(&self.start_date, &self.end_date)
    }
}

/// Editable text fields of [`EducationEntry`], in form order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EducationField {
    School,
    Degree,
    StartDate,
    EndDate,
}

impl EducationField {
    pub const ALL: [Self; 4] = [Self::School, Self::Degree, Self::StartDate, Self::EndDate];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::School => "School",
            Self::Degree => "Degree",
            Self::StartDate => "Start",
            Self::EndDate => "End",
        }
    }

    #[must_use]
    pub fn get(self, entry: &EducationEntry) -> &str {
        match self {
            Self::School => &entry.school,
            Self::Degree => &entry.degree,
            Self::StartDate => &entry.start_date,
            Self::EndDate => &entry.end_date,
        }
    }

    pub fn set(self, entry: &mut EducationEntry, value: String) {
        let slot = match self {
            Self::School => &mut entry.school,
            Self::Degree => &mut entry.degree,
            Self::StartDate => &mut entry.start_date,
            Self::EndDate => &mut entry.end_date,
        };
        *slot = value;
    }
}

fn period_label(start: &str, end: &str) -> String {
    let start = start.trim();
    let end = end.trim();
    match (start.is_empty(), end.is_empty()) {
        (true, true) => String::new(),
        (true, false) => end.to_owned(),
        (false, true) => format!("{start} – Present"),
        (false, false) => format!("{start} – {end}"),
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceData {
    pub entries: Vec<ExperienceEntry>,
}

impl ExperienceData {
    /// Append a blank entry and return its index.
    pub fn add_entry(&mut self) -> usize {
        self.entries.push(ExperienceEntry::default());
        self.entries.len() - 1
    }

    /// Remove the entry at `index`; out-of-range indices are ignored.
    pub fn remove_entry(&mut self, index: usize) -> Option<ExperienceEntry> {
        (index < self.entries.len()).then(|| self.entries.remove(index))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationData {
    pub entries: Vec<EducationEntry>,
}

impl EducationData {
    /// Append a blank entry and return its index.
    pub fn add_entry(&mut self) -> usize {
        self.entries.push(EducationEntry::default());
        self.entries.len() - 1
    }

    /// Remove the entry at `index`; out-of-range indices are ignored.
    pub fn remove_entry(&mut self, index: usize) -> Option<EducationEntry> {
        (index < self.entries.len()).then(|| self.entries.remove(index))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillsData {
    pub items: Vec<String>,
}

impl SkillsData {
    /// Add a skill, trimmed. Blank input and case-insensitive duplicates are
    /// rejected; returns whether the list changed.
    pub fn add(&mut self, skill: &str) -> bool {
        let skill = skill.trim();
        if skill.is_empty() || self.contains(skill) {
            return false;
        }
        self.items.push(skill.to_owned());
        true
    }

    /// Remove a skill by case-insensitive name; returns whether it was present.
    pub fn remove(&mut self, skill: &str) -> bool {
        let before = self.items.len();
        let needle = skill.trim().to_lowercase();
        self.items.retain(|item| item.to_lowercase() != needle);
        self.items.len() != before
    }

    #[must_use]
    pub fn contains(&self, skill: &str) -> bool {
        let needle = skill.trim().to_lowercase();
        self.items.iter().any(|item| item.to_lowercase() == needle)
    }
}

/// Block payload, tagged by kind.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum BlockData {
    Header(HeaderData),
    Summary(SummaryData),
    Experience(ExperienceData),
    Education(EducationData),
    Skills(SkillsData),
}

impl BlockData {
    #[must_use]
    pub fn kind(&self) -> BlockKind {
        match self {
            Self::Header(_) => BlockKind::Header,
            Self::Summary(_) => BlockKind::Summary,
            Self::Experience(_) => BlockKind::Experience,
            Self::Education(_) => BlockKind::Education,
            Self::Skills(_) => BlockKind::Skills,
        }
    }
}

/// One ordered content unit of a resume.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeBlock {
    pub id: String,
    #[serde(flatten)]
    pub data: BlockData,
}

impl ResumeBlock {
    #[must_use]
    pub fn new(id: impl Into<String>, data: BlockData) -> Self {
        Self { id: id.into(), data }
    }

    /// A new block of `kind` with its default payload.
    #[must_use]
    pub fn with_defaults(id: impl Into<String>, kind: BlockKind) -> Self {
        Self::new(id, kind.default_data())
    }

    #[must_use]
    pub fn kind(&self) -> BlockKind {
        self.data.kind()
    }
}
