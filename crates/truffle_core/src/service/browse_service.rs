//! Browse use-case service.
//!
//! # Responsibility
//! - Produce the graph view (filtered plot with reconciled highlight).
//! - Produce the paper listing grouped by journal.
//! - Expose legend and period dropdown data.
//!
//! # Invariants
//! - Every call is a pure function of the repository, the passed criteria and
//!   the passed highlight state; the service holds no session state.
//! - Listing order is `journal ASC, title ASC`.

use crate::catalog::PaperRepository;
use crate::filter::engine::{apply, FilterCriteria};
use crate::model::paper::{PaperRecord, Period};
use crate::plot::assembler::{PlotAssembler, PlotSpec};
use crate::plot::highlight::HighlightState;
use serde::Serialize;

/// Result of one graph render pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphView {
    pub plot: PlotSpec,
    /// Number of papers passing the filter (plotted or not).
    pub displayed: usize,
    /// Highlight state after reconciliation with the filtered set.
    pub highlight: HighlightState,
}

/// Papers of one journal in the listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JournalSection<'a> {
    /// Full journal name used as section header.
    pub journal: String,
    pub color: String,
    pub papers: Vec<&'a PaperRecord>,
}

/// Legend entry for one declared journal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    pub journal: String,
    pub color: String,
    pub short_label: String,
}

/// Dropdown option for the period filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodOption {
    pub period: Period,
    pub label: String,
}

/// Browse facade over a paper repository.
pub struct BrowseService<R: PaperRepository> {
    repo: R,
}

impl<R: PaperRepository> BrowseService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Default selections: every journal, all periods, all topics.
    pub fn default_criteria(&self) -> FilterCriteria {
        FilterCriteria::all_journals(&self.repo)
    }

    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<&PaperRecord> {
        apply(self.repo.all_records(), criteria)
    }

    /// Filters, reconciles `highlight` against the result, then builds the plot.
    pub fn graph(&self, criteria: &FilterCriteria, highlight: &mut HighlightState) -> GraphView {
        let filtered = self.filter(criteria);
        highlight.reconcile(&filtered);
        let plot = PlotAssembler::new(self.repo.journal_styles())
            .build(filtered.iter().copied(), highlight.active());

        GraphView {
            plot,
            displayed: filtered.len(),
            highlight: *highlight,
        }
    }

    /// Filtered papers sorted by journal then title, grouped by journal.
    pub fn paper_listing(&self, criteria: &FilterCriteria) -> Vec<JournalSection<'_>> {
        let mut papers = self.filter(criteria);
        papers.sort_by(|a, b| {
            a.journal
                .cmp(&b.journal)
                .then_with(|| a.title.cmp(&b.title))
        });

        let styles = self.repo.journal_styles();
        let mut sections: Vec<JournalSection<'_>> = Vec::new();
        for paper in papers {
            if let Some(section) = sections
                .last_mut()
                .filter(|section| section.journal == paper.journal)
            {
                section.papers.push(paper);
                continue;
            }
            sections.push(JournalSection {
                journal: paper.journal.clone(),
                color: styles.color_for(&paper.journal).to_string(),
                papers: vec![paper],
            });
        }
        sections
    }

    pub fn legend(&self) -> Vec<LegendEntry> {
        self.repo
            .journal_styles()
            .iter()
            .map(|style| LegendEntry {
                journal: style.name.clone(),
                color: style.color.clone(),
                short_label: style.short_label.clone(),
            })
            .collect()
    }

    /// Period options, newest first.
    pub fn period_options(&self) -> Vec<PeriodOption> {
        self.repo
            .period_options()
            .into_iter()
            .map(|period| PeriodOption {
                period,
                label: period.label(),
            })
            .collect()
    }
}
