//! The persisted resume document and its `localStorage` codec.
//!
//! The browser holds exactly one document under [`STORAGE_KEY`]. It is read
//! once on mount and overwritten wholesale after every mutation, so the last
//! writer wins. A missing or unreadable blob falls back to
//! [`ResumeDocument::starter`].

#[cfg(test)]
#[path = "document_test.rs"]
mod document_test;

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::blocks::{
    BlockData, EducationData, EducationEntry, ExperienceData, ExperienceEntry, HeaderData, ResumeBlock, SkillsData,
    SummaryData,
};

/// `localStorage` key holding the serialized document.
pub const STORAGE_KEY: &str = "hireboard_resume_document";

/// Id of the document created when nothing is stored yet.
pub const STARTER_DOCUMENT_ID: &str = "resume-1";

/// Error returned when decoding or encoding a stored document.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("invalid resume document json: {0}")]
    Json(#[from] serde_json::Error),
    /// Two blocks share an id, which would make ordering ambiguous.
    #[error("duplicate block id: {0}")]
    DuplicateBlockId(String),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateId {
    #[default]
    Modern,
    Classic,
    Minimal,
}

impl TemplateId {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Modern => "modern",
            Self::Classic => "classic",
            Self::Minimal => "minimal",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        TEMPLATES.iter().map(|t| t.id).find(|id| id.as_str() == raw)
    }

    #[must_use]
    pub fn template(self) -> &'static Template {
        match self {
            Self::Modern => &TEMPLATES[0],
            Self::Classic => &TEMPLATES[1],
            Self::Minimal => &TEMPLATES[2],
        }
    }
}

/// Visual preset applied to the whole page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Template {
    pub id: TemplateId,
    pub label: &'static str,
    pub accent: &'static str,
}

pub const TEMPLATES: [Template; 3] = [
    Template { id: TemplateId::Modern, label: "Modern", accent: "#2563eb" },
    Template { id: TemplateId::Classic, label: "Classic", accent: "#1f2937" },
    Template { id: TemplateId::Minimal, label: "Minimal", accent: "#6b7280" },
];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeDocument {
    pub id: String,
    pub template_id: TemplateId,
    pub blocks: Vec<ResumeBlock>,
    pub updated_at: DateTime<Utc>,
}

impl ResumeDocument {
    /// The sample document shown on first visit.
    #[must_use]
    pub fn starter(now: DateTime<Utc>) -> Self {
        let blocks = vec![
            ResumeBlock::new(
                "header",
                BlockData::Header(HeaderData {
                    name: "Alex Morgan".to_owned(),
                    title: "Senior Software Engineer".to_owned(),
                    email: "alex.morgan@example.com".to_owned(),
                    phone: "(555) 123-4567".to_owned(),
                    location: "San Francisco, CA".to_owned(),
                    website: String::new(),
                }),
            ),
            ResumeBlock::new(
                "summary",
                BlockData::Summary(SummaryData {
                    text: "Engineer with eight years of experience building reliable web platforms and leading \
                           small product teams."
                        .to_owned(),
                }),
            ),
            ResumeBlock::new(
                "experience",
                BlockData::Experience(ExperienceData {
                    entries: vec![ExperienceEntry {
                        company: "Northwind Labs".to_owned(),
                        role: "Senior Software Engineer".to_owned(),
                        start_date: "2021".to_owned(),
                        end_date: String::new(),
                        description: "Led the rebuild of the scheduling platform.".to_owned(),
                    }],
                }),
            ),
            ResumeBlock::new(
                "education",
                BlockData::Education(EducationData {
                    entries: vec![EducationEntry {
                        school: "State University".to_owned(),
                        degree: "B.S. Computer Science".to_owned(),
                        start_date: "2012".to_owned(),
                        end_date: "2016".to_owned(),
                    }],
                }),
            ),
            ResumeBlock::new(
                "skills",
                BlockData::Skills(SkillsData {
                    items: ["Rust", "TypeScript", "PostgreSQL", "System Design"].into_iter().map(str::to_owned).collect(),
                }),
            ),
        ];
        Self { id: STARTER_DOCUMENT_ID.to_owned(), template_id: TemplateId::default(), blocks, updated_at: now }
    }

    #[must_use]
    pub fn template(&self) -> &'static Template {
        self.template_id.template()
    }

    #[must_use]
    pub fn block(&self, id: &str) -> Option<&ResumeBlock> {
        self.blocks.iter().find(|b| b.id == id)
    }

    pub fn block_mut(&mut self, id: &str) -> Option<&mut ResumeBlock> {
        self.blocks.iter_mut().find(|b| b.id == id)
    }

    /// Decode a stored blob and check block ids are unique.
    ///
    /// # Errors
    ///
    /// [`DocumentError::Json`] for malformed input,
    /// [`DocumentError::DuplicateBlockId`] when two blocks share an id.
    pub fn decode(raw: &str) -> Result<Self, DocumentError> {
        let doc: Self = serde_json::from_str(raw)?;
        let mut seen = HashSet::new();
        for block in &doc.blocks {
            if !seen.insert(block.id.as_str()) {
                return Err(DocumentError::DuplicateBlockId(block.id.clone()));
            }
        }
        Ok(doc)
    }

    /// # Errors
    ///
    /// [`DocumentError::Json`] if serialization fails.
    pub fn encode(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode `raw` if present, falling back to the starter document.
    ///
    /// The decode error, if any, is returned alongside so the caller can log
    /// it; it is never surfaced to the user.
    #[must_use]
    pub fn load_or_starter(raw: Option<&str>, now: DateTime<Utc>) -> (Self, Option<DocumentError>) {
        match raw.map(Self::decode) {
            Some(Ok(doc)) => (doc, None),
            Some(Err(err)) => (Self::starter(now), Some(err)),
            None => (Self::starter(now), None),
        }
    }
}
