//! Paper record model.
//!
//! # Responsibility
//! - Define the immutable paper record shared by filtering, plotting and
//!   listing use-cases.
//! - Convert loosely-typed catalog entries into validated records.
//!
//! # Invariants
//! - `title`, `journal` and every author name are non-empty.
//! - `authors` contains at least one name.
//! - `month` is within `1..=12`.
//! - `codes` keep their declared order.

use crate::model::code::{ClassificationCode, CodeParseError};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier of a record: its position in the loaded catalog table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub usize);

impl Display for RecordId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Publication period as an exact (year, month) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Period {
    pub year: i32,
    /// Month in `1..=12`.
    pub month: u8,
}

impl Period {
    pub fn new(year: i32, month: u8) -> Self {
        Self { year, month }
    }

    /// Dropdown label, e.g. `01/2026`.
    pub fn label(&self) -> String {
        format!("{:02}/{}", self.month, self.year)
    }
}

/// Canonical, validated paper record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaperRecord {
    pub id: RecordId,
    pub title: String,
    pub authors: Vec<String>,
    pub journal: String,
    /// Serialized as `jel_codes` to match the catalog schema.
    #[serde(rename = "jel_codes")]
    pub codes: Vec<ClassificationCode>,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub url: Option<String>,
    pub year: i32,
    pub month: u8,
    pub volume: Option<u32>,
    pub issue: Option<u32>,
    pub pages: Option<String>,
    pub doi: Option<String>,
}

impl PaperRecord {
    pub fn period(&self) -> Period {
        Period::new(self.year, self.month)
    }

    /// Returns whether any code's category letter is one of `letters`.
    pub fn has_any_letter<'a, I>(&self, letters: I) -> bool
    where
        I: IntoIterator<Item = &'a str> + Clone,
    {
        self.codes.iter().any(|code| {
            letters
                .clone()
                .into_iter()
                .any(|letter| letter.eq_ignore_ascii_case(code.category_letter()))
        })
    }

    /// Comma-joined code list in declaration order.
    pub fn codes_label(&self) -> String {
        self.codes
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Bibliographic line for paper cards, e.g. `Vol. 116, No. 1, pp. 1-51 (1/2026)`.
    pub fn citation_line(&self) -> String {
        let mut parts = Vec::new();
        if let Some(volume) = self.volume {
            parts.push(format!("Vol. {volume}"));
        }
        if let Some(issue) = self.issue {
            parts.push(format!("No. {issue}"));
        }
        if let Some(pages) = self.pages.as_deref().filter(|value| !value.is_empty()) {
            parts.push(format!("pp. {pages}"));
        }
        let period = format!("({}/{})", self.month, self.year);
        if parts.is_empty() {
            period
        } else {
            format!("{} {period}", parts.join(", "))
        }
    }
}

/// Catalog wire shape of one paper, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperEntry {
    pub title: String,
    pub authors: Vec<String>,
    pub journal: String,
    #[serde(default)]
    pub jel_codes: Vec<String>,
    #[serde(rename = "abstract", default)]
    pub abstract_text: String,
    #[serde(default)]
    pub url: Option<String>,
    pub year: i32,
    pub month: u32,
    #[serde(default)]
    pub volume: Option<u32>,
    #[serde(default)]
    pub issue: Option<u32>,
    #[serde(default)]
    pub pages: Option<String>,
    #[serde(default)]
    pub doi: Option<String>,
}

/// Structural violation found while validating a catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaperValidationError {
    EmptyTitle,
    MissingAuthors,
    EmptyAuthor { position: usize },
    EmptyJournal,
    InvalidMonth(u32),
    InvalidCode {
        position: usize,
        source: CodeParseError,
    },
}

impl Display for PaperValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "paper title must not be empty"),
            Self::MissingAuthors => write!(f, "paper must list at least one author"),
            Self::EmptyAuthor { position } => {
                write!(f, "author at position {position} must not be empty")
            }
            Self::EmptyJournal => write!(f, "paper journal must not be empty"),
            Self::InvalidMonth(month) => write!(f, "month must be within 1..=12, got {month}"),
            Self::InvalidCode { position, source } => {
                write!(f, "code at position {position} is invalid: {source}")
            }
        }
    }
}

impl Error for PaperValidationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidCode { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl PaperEntry {
    /// Validates this entry and assigns it a stable record id.
    ///
    /// Blank optional text fields (`url`, `pages`, `doi`) are normalized to `None`.
    pub fn into_record(self, id: RecordId) -> Result<PaperRecord, PaperValidationError> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(PaperValidationError::EmptyTitle);
        }
        if self.authors.is_empty() {
            return Err(PaperValidationError::MissingAuthors);
        }
        if let Some(position) = self
            .authors
            .iter()
            .position(|author| author.trim().is_empty())
        {
            return Err(PaperValidationError::EmptyAuthor { position });
        }
        let journal = self.journal.trim().to_string();
        if journal.is_empty() {
            return Err(PaperValidationError::EmptyJournal);
        }
        let month = u8::try_from(self.month)
            .ok()
            .filter(|month| (1..=12).contains(month))
            .ok_or(PaperValidationError::InvalidMonth(self.month))?;

        let codes = self
            .jel_codes
            .iter()
            .enumerate()
            .map(|(position, raw)| {
                ClassificationCode::parse(raw)
                    .map_err(|source| PaperValidationError::InvalidCode { position, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PaperRecord {
            id,
            title,
            authors: self
                .authors
                .into_iter()
                .map(|author| author.trim().to_string())
                .collect(),
            journal,
            codes,
            abstract_text: self.abstract_text,
            url: non_blank(self.url),
            year: self.year,
            month,
            volume: self.volume,
            issue: self.issue,
            pages: non_blank(self.pages),
            doi: non_blank(self.doi),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}
