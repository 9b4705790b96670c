//! Static paper catalog: loading, validation and the read-only record store.
//!
//! # Responsibility
//! - Load the catalog from the embedded JSON table or an override file.
//! - Validate every entry once, at load time, and fail fast on structural
//!   violations.
//! - Own the loaded records and hand out read-only references.
//!
//! # Invariants
//! - A store is never partially loaded: one bad entry rejects the catalog.
//! - Every record's journal has a declared journal style.
//! - `RecordId(n)` is the position of the record in the catalog table.

use crate::model::journal::JournalStyleError;
use crate::model::paper::PaperValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

mod load;
mod store;

pub use load::{load_catalog, load_embedded, load_from_path, load_from_str, EMBEDDED_CATALOG};
pub use store::{PaperRepository, RecordStore};

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Where the catalog is read from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CatalogSource {
    /// Catalog compiled into the binary.
    #[default]
    Embedded,
    /// JSON file with the same schema as the embedded catalog.
    File(PathBuf),
}

/// Load-time catalog failure.
#[derive(Debug)]
pub enum CatalogError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Json(serde_json::Error),
    InvalidJournalStyle(JournalStyleError),
    InvalidRecord {
        index: usize,
        source: PaperValidationError,
    },
    UnknownJournal {
        index: usize,
        journal: String,
    },
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read catalog `{}`: {source}", path.display())
            }
            Self::Json(err) => write!(f, "catalog is not valid JSON: {err}"),
            Self::InvalidJournalStyle(err) => write!(f, "invalid journal style: {err}"),
            Self::InvalidRecord { index, source } => {
                write!(f, "invalid paper at index {index}: {source}")
            }
            Self::UnknownJournal { index, journal } => write!(
                f,
                "paper at index {index} references journal `{journal}` without a declared style"
            ),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json(err) => Some(err),
            Self::InvalidJournalStyle(err) => Some(err),
            Self::InvalidRecord { source, .. } => Some(source),
            Self::UnknownJournal { .. } => None,
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<JournalStyleError> for CatalogError {
    fn from(value: JournalStyleError) -> Self {
        Self::InvalidJournalStyle(value)
    }
}

impl CatalogError {
    /// Stable short code used in structured log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "catalog_io",
            Self::Json(_) => "catalog_json",
            Self::InvalidJournalStyle(_) => "invalid_journal_style",
            Self::InvalidRecord { .. } => "invalid_record",
            Self::UnknownJournal { .. } => "unknown_journal",
        }
    }
}
