//! Conjunctive filter engine.
//!
//! # Invariants
//! - Journal predicate: empty selection means "show nothing", not "no filter".
//! - Period predicate: exact (year, month) equality when set.
//! - Topic predicate: no filter when empty; otherwise a record matches if any
//!   of its code letters is selected.

use crate::catalog::PaperRepository;
use crate::model::paper::{PaperRecord, Period};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Current filter selections, rebuilt by the host on every render.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Selected full journal names.
    pub journals: BTreeSet<String>,
    /// Exact publication period, or `None` for all periods.
    pub period: Option<Period>,
    /// Selected category letters (uppercase).
    pub topics: BTreeSet<String>,
}

impl FilterCriteria {
    /// Initial selection state: every declared journal checked, no period or
    /// topic restriction.
    pub fn all_journals<R: PaperRepository + ?Sized>(repo: &R) -> Self {
        Self {
            journals: repo
                .distinct_journals()
                .into_iter()
                .map(str::to_string)
                .collect(),
            period: None,
            topics: BTreeSet::new(),
        }
    }

    /// Selection limited to the given journal names.
    pub fn for_journals<I, S>(journals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            journals: journals.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Clears every journal checkbox ("Deselect All").
    pub fn deselect_all_journals(&mut self) {
        self.journals.clear();
    }

    pub fn with_period(mut self, period: Option<Period>) -> Self {
        self.period = period;
        self
    }

    /// Adds a topic letter; input is normalized to uppercase.
    pub fn with_topic(mut self, letter: &str) -> Self {
        let normalized = letter.trim().to_ascii_uppercase();
        if !normalized.is_empty() {
            self.topics.insert(normalized);
        }
        self
    }

    /// Whether `record` passes all three predicates.
    pub fn matches(&self, record: &PaperRecord) -> bool {
        self.journals.contains(&record.journal)
            && self.period.map_or(true, |period| record.period() == period)
            && (self.topics.is_empty()
                || record.has_any_letter(self.topics.iter().map(String::as_str)))
    }
}

/// Applies `criteria` to `records`, keeping input order.
pub fn apply<'a, I>(records: I, criteria: &FilterCriteria) -> Vec<&'a PaperRecord>
where
    I: IntoIterator<Item = &'a PaperRecord>,
{
    // "Deselect all" is an explicit show-nothing policy.
    if criteria.journals.is_empty() {
        debug!("event=filter_apply module=filter status=ok reason=no_journals matched=0");
        return Vec::new();
    }

    let mut scanned = 0usize;
    let filtered = records
        .into_iter()
        .inspect(|_| scanned += 1)
        .filter(|record| criteria.matches(record))
        .collect::<Vec<_>>();

    debug!(
        "event=filter_apply module=filter status=ok scanned={} matched={} journals={} period={} topics={}",
        scanned,
        filtered.len(),
        criteria.journals.len(),
        criteria
            .period
            .map(|period| period.label())
            .unwrap_or_else(|| "all".to_string()),
        criteria.topics.len()
    );
    filtered
}

#[cfg(test)]
mod tests {
    use super::FilterCriteria;

    #[test]
    fn with_topic_normalizes_and_skips_blank_letters() {
        let criteria = FilterCriteria::default().with_topic(" j ").with_topic("  ");
        assert_eq!(
            criteria.topics.iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["J"]
        );
    }

    #[test]
    fn deselect_all_clears_journals_only() {
        let mut criteria = FilterCriteria::for_journals(["Econometrica"]).with_topic("C");
        criteria.deselect_all_journals();
        assert!(criteria.journals.is_empty());
        assert_eq!(criteria.topics.len(), 1);
    }
}
