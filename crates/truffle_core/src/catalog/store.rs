//! Read-only record store.
//!
//! # Invariants
//! - Records are never mutated after construction; callers only receive
//!   shared references.
//! - Scan-based queries preserve catalog order.
//! - `distinct_journals` follows journal style declaration order, not data
//!   order.

use crate::model::code::ClassificationCode;
use crate::model::journal::JournalStyles;
use crate::model::paper::{PaperRecord, Period, RecordId};
use std::collections::BTreeSet;

/// Read access to a loaded paper catalog.
///
/// Implementors provide the backing table; scan helpers are derived.
pub trait PaperRepository {
    /// Every record in catalog order.
    fn all_records(&self) -> &[PaperRecord];
    /// Journal styles in declaration order.
    fn journal_styles(&self) -> &JournalStyles;

    fn get(&self, id: RecordId) -> Option<&PaperRecord> {
        self.all_records().get(id.0).filter(|record| record.id == id)
    }

    fn records_by_journal(&self, journal: &str) -> Vec<&PaperRecord> {
        self.all_records()
            .iter()
            .filter(|record| record.journal == journal)
            .collect()
    }

    fn records_by_period(&self, year: i32, month: u8) -> Vec<&PaperRecord> {
        let period = Period::new(year, month);
        self.all_records()
            .iter()
            .filter(|record| record.period() == period)
            .collect()
    }

    /// Journal names for filter buttons, in declaration order.
    fn distinct_journals(&self) -> Vec<&str> {
        self.journal_styles().names()
    }

    /// Distinct publication periods present in the catalog, newest first.
    fn period_options(&self) -> Vec<Period> {
        let periods = self
            .all_records()
            .iter()
            .map(PaperRecord::period)
            .collect::<BTreeSet<_>>();
        periods.into_iter().rev().collect()
    }

    /// Distinct codes referenced by any record, sorted.
    fn unique_codes(&self) -> Vec<ClassificationCode> {
        let codes = self
            .all_records()
            .iter()
            .flat_map(|record| record.codes.iter().cloned())
            .collect::<BTreeSet<_>>();
        codes.into_iter().collect()
    }
}

impl<T: PaperRepository + ?Sized> PaperRepository for &T {
    fn all_records(&self) -> &[PaperRecord] {
        (**self).all_records()
    }

    fn journal_styles(&self) -> &JournalStyles {
        (**self).journal_styles()
    }
}

/// In-memory catalog table loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<PaperRecord>,
    journals: JournalStyles,
}

impl RecordStore {
    /// Wraps already validated records.
    ///
    /// Use `catalog::load_*` for untrusted input; this constructor assumes
    /// ids match positions and journals are declared.
    pub fn new(records: Vec<PaperRecord>, journals: JournalStyles) -> Self {
        Self { records, journals }
    }

    pub fn all_records(&self) -> &[PaperRecord] {
        &self.records
    }

    pub fn journal_styles(&self) -> &JournalStyles {
        &self.journals
    }
}

impl PaperRepository for RecordStore {
    fn all_records(&self) -> &[PaperRecord] {
        &self.records
    }

    fn journal_styles(&self) -> &JournalStyles {
        &self.journals
    }
}
