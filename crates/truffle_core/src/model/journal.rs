//! Journal display styles.
//!
//! # Responsibility
//! - Map journal names to a display color and short label.
//! - Preserve declaration order, which drives filter-button ordering.
//!
//! # Invariants
//! - Journal names are unique within one registry.
//! - Lookups never fail: unknown journals resolve to [`DEFAULT_JOURNAL_COLOR`]
//!   and a 3-character truncation of the name.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fallback color for journals without a declared style.
pub const DEFAULT_JOURNAL_COLOR: &str = "#888888";
const FALLBACK_LABEL_CHARS: usize = 3;

static HEX_COLOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("valid color regex"));

/// Display style declared for one journal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalStyle {
    /// Full journal name, as referenced by paper records.
    pub name: String,
    /// `#RRGGBB` color used for series, badges and headers.
    pub color: String,
    /// Short label used in checkboxes, legend and hover text.
    pub short_label: String,
}

/// Declaration-level error for journal styles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JournalStyleError {
    EmptyName,
    EmptyLabel(String),
    InvalidColor { journal: String, color: String },
    Duplicate(String),
}

impl Display for JournalStyleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "journal name must not be empty"),
            Self::EmptyLabel(journal) => {
                write!(f, "journal `{journal}` must declare a short label")
            }
            Self::InvalidColor { journal, color } => write!(
                f,
                "journal `{journal}` has invalid color `{color}` (expected #RRGGBB)"
            ),
            Self::Duplicate(journal) => write!(f, "journal `{journal}` is declared twice"),
        }
    }
}

impl Error for JournalStyleError {}

/// Ordered, validated set of journal styles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JournalStyles {
    entries: Vec<JournalStyle>,
}

impl JournalStyles {
    /// Validates and wraps styles, keeping declaration order.
    pub fn new(entries: Vec<JournalStyle>) -> Result<Self, JournalStyleError> {
        for (position, style) in entries.iter().enumerate() {
            if style.name.trim().is_empty() {
                return Err(JournalStyleError::EmptyName);
            }
            if style.short_label.trim().is_empty() {
                return Err(JournalStyleError::EmptyLabel(style.name.clone()));
            }
            if !HEX_COLOR_RE.is_match(style.color.as_str()) {
                return Err(JournalStyleError::InvalidColor {
                    journal: style.name.clone(),
                    color: style.color.clone(),
                });
            }
            if entries[..position].iter().any(|prev| prev.name == style.name) {
                return Err(JournalStyleError::Duplicate(style.name.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// Declared styles in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &JournalStyle> {
        self.entries.iter()
    }

    /// Journal names in declaration order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|style| style.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, journal: &str) -> Option<&JournalStyle> {
        self.entries.iter().find(|style| style.name == journal)
    }

    pub fn contains(&self, journal: &str) -> bool {
        self.get(journal).is_some()
    }

    /// Resolves a journal name or short label (case-insensitive) to the
    /// declared full name.
    pub fn resolve_name(&self, name_or_label: &str) -> Option<&str> {
        let needle = name_or_label.trim();
        self.entries
            .iter()
            .find(|style| {
                style.name.eq_ignore_ascii_case(needle)
                    || style.short_label.eq_ignore_ascii_case(needle)
            })
            .map(|style| style.name.as_str())
    }

    /// Display color, falling back to [`DEFAULT_JOURNAL_COLOR`].
    pub fn color_for(&self, journal: &str) -> &str {
        self.get(journal)
            .map(|style| style.color.as_str())
            .unwrap_or(DEFAULT_JOURNAL_COLOR)
    }

    /// Short label, falling back to the first three characters of the name.
    pub fn short_label_for(&self, journal: &str) -> String {
        match self.get(journal) {
            Some(style) => style.short_label.clone(),
            None => journal.chars().take(FALLBACK_LABEL_CHARS).collect(),
        }
    }
}
