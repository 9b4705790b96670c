//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level browse functions to Dart via FRB.
//! - Own the process-wide catalog; callers own filter and highlight state.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Failures are reported through the envelope `message`, never thrown.

use log::{error, warn};
use std::path::PathBuf;
use std::sync::OnceLock;
use truffle_core::taxonomy::jel::describe;
use truffle_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, load_catalog,
    ping as ping_inner, to_plotly_figure, BrowseService, CatalogSource, FilterCriteria,
    HighlightState, PaperRecord, Period, RecordId, RecordStore,
};

static CATALOG: OnceLock<Result<RecordStore, String>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Reconfiguration attempts with different level or directory return error.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Journal filter button / legend entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalItem {
    pub name: String,
    pub short_label: String,
    /// `#RRGGBB`.
    pub color: String,
}

/// Period dropdown entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodItem {
    pub year: i32,
    pub month: u32,
    /// `MM/YYYY`.
    pub label: String,
}

/// Filter selections sent by the UI on every render pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowseFilter {
    /// Selected journals by full name; `None` selects all, empty selects none.
    pub journals: Option<Vec<String>>,
    /// Exact period; ignored unless both parts are set.
    pub year: Option<i32>,
    pub month: Option<u32>,
    /// Selected category letters; empty disables topic filtering.
    pub topics: Vec<String>,
}

/// Paper card shown in the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaperItem {
    pub record_id: u32,
    pub title: String,
    pub authors: Vec<String>,
    pub journal: String,
    pub journal_label: String,
    pub color: String,
    pub codes: Vec<String>,
    pub citation: String,
    pub abstract_text: String,
    pub url: Option<String>,
}

/// Listing response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowsePapersResponse {
    pub ok: bool,
    /// Sorted by journal then title.
    pub papers: Vec<PaperItem>,
    pub message: String,
}

/// Graph response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseGraphResponse {
    pub ok: bool,
    /// Plotly figure (`data` + `layout`) as JSON text.
    pub figure_json: String,
    /// Number of papers passing the filter.
    pub displayed: u32,
    /// Highlight after reconciliation; the UI must store this value.
    pub highlighted: Option<u32>,
    pub message: String,
}

impl BrowseGraphResponse {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            figure_json: String::new(),
            displayed: 0,
            highlighted: None,
            message: message.into(),
        }
    }
}

/// Journals in declaration order.
///
/// # FFI contract
/// - Sync call; first call loads the catalog.
/// - Returns an empty list when the catalog failed to load.
#[flutter_rust_bridge::frb(sync)]
pub fn catalog_journals() -> Vec<JournalItem> {
    let Ok(store) = catalog() else {
        return Vec::new();
    };
    store
        .journal_styles()
        .iter()
        .map(|style| JournalItem {
            name: style.name.clone(),
            short_label: style.short_label.clone(),
            color: style.color.clone(),
        })
        .collect()
}

/// Distinct publication periods, newest first.
#[flutter_rust_bridge::frb(sync)]
pub fn catalog_periods() -> Vec<PeriodItem> {
    let Ok(store) = catalog() else {
        return Vec::new();
    };
    BrowseService::new(store)
        .period_options()
        .into_iter()
        .map(|option| PeriodItem {
            year: option.period.year,
            month: u32::from(option.period.month),
            label: option.label,
        })
        .collect()
}

/// Filtered paper listing.
///
/// # FFI contract
/// - Sync call, in-memory execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn browse_papers(filter: BrowseFilter) -> BrowsePapersResponse {
    let store = match catalog() {
        Ok(store) => store,
        Err(message) => {
            return BrowsePapersResponse {
                ok: false,
                papers: Vec::new(),
                message: format!("browse_papers failed: {message}"),
            };
        }
    };

    let service = BrowseService::new(store);
    let criteria = to_criteria(store, &filter);
    let papers = service
        .paper_listing(&criteria)
        .into_iter()
        .flat_map(|section| section.papers)
        .map(|paper| to_paper_item(store, paper))
        .collect::<Vec<_>>();
    let message = if papers.is_empty() {
        "No papers.".to_string()
    } else {
        format!("Showing {} paper(s).", papers.len())
    };
    BrowsePapersResponse {
        ok: true,
        papers,
        message,
    }
}

/// Renders the JEL plot for the current filter and highlight.
///
/// Input semantics:
/// - `highlighted`: record id from the previous response or a click's
///   `customdata`; cleared when that record is filtered out.
///
/// # FFI contract
/// - Sync call, in-memory execution.
/// - Never panics; `figure_json` is empty only when `ok` is false.
#[flutter_rust_bridge::frb(sync)]
pub fn browse_graph(filter: BrowseFilter, highlighted: Option<u32>) -> BrowseGraphResponse {
    let store = match catalog() {
        Ok(store) => store,
        Err(message) => {
            return BrowseGraphResponse::failure(format!("browse_graph failed: {message}"))
        }
    };

    let service = BrowseService::new(store);
    let criteria = to_criteria(store, &filter);
    let mut state = match highlighted {
        Some(id) => HighlightState::Selected(record_id_from_ffi(id)),
        None => HighlightState::Unselected,
    };
    let view = service.graph(&criteria, &mut state);

    let figure_json = match serde_json::to_string(&to_plotly_figure(&view.plot)) {
        Ok(json) => json,
        Err(err) => {
            error!("event=ffi_graph module=ffi status=error error={err}");
            return BrowseGraphResponse::failure(format!("browse_graph failed: {err}"));
        }
    };
    BrowseGraphResponse {
        ok: true,
        figure_json,
        displayed: u32::try_from(view.displayed).unwrap_or(u32::MAX),
        highlighted: view.highlight.active().and_then(record_id_to_ffi),
        message: format!("Displaying {} paper(s).", view.displayed),
    }
}

/// Human-readable description of one JEL code.
#[flutter_rust_bridge::frb(sync)]
pub fn describe_code(code: String) -> String {
    describe(&code)
}

fn catalog() -> Result<&'static RecordStore, &'static str> {
    CATALOG
        .get_or_init(|| {
            let source = resolve_catalog_source();
            load_catalog(&source).map_err(|err| err.to_string())
        })
        .as_ref()
        .map_err(String::as_str)
}

fn resolve_catalog_source() -> CatalogSource {
    if let Ok(raw) = std::env::var("TRUFFLE_CATALOG") {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return CatalogSource::File(PathBuf::from(trimmed));
        }
    }
    CatalogSource::Embedded
}

fn to_criteria(store: &RecordStore, filter: &BrowseFilter) -> FilterCriteria {
    let mut criteria = match &filter.journals {
        None => FilterCriteria::all_journals(store),
        Some(names) => FilterCriteria::for_journals(names.iter().map(String::as_str)),
    };

    let period = match (filter.year, filter.month) {
        (Some(year), Some(month)) => match u8::try_from(month) {
            Ok(month) if (1..=12).contains(&month) => Some(Period::new(year, month)),
            _ => {
                warn!("event=ffi_filter module=ffi status=ignored month={month}");
                None
            }
        },
        _ => None,
    };
    criteria = criteria.with_period(period);
    for topic in &filter.topics {
        criteria = criteria.with_topic(topic);
    }
    criteria
}

/// Ids that do not fit `usize` can never match a record and reconcile away.
fn record_id_from_ffi(id: u32) -> RecordId {
    RecordId(usize::try_from(id).unwrap_or(usize::MAX))
}

fn record_id_to_ffi(id: RecordId) -> Option<u32> {
    let converted = u32::try_from(id.0).ok();
    if converted.is_none() {
        warn!("event=ffi_record_id module=ffi status=error record_id={id} reason=overflow");
    }
    converted
}

fn to_paper_item(store: &RecordStore, paper: &PaperRecord) -> PaperItem {
    let styles = store.journal_styles();
    PaperItem {
        record_id: record_id_to_ffi(paper.id).unwrap_or(u32::MAX),
        title: paper.title.clone(),
        authors: paper.authors.clone(),
        journal: paper.journal.clone(),
        journal_label: styles.short_label_for(&paper.journal),
        color: styles.color_for(&paper.journal).to_string(),
        codes: paper.codes.iter().map(ToString::to_string).collect(),
        citation: paper.citation_line(),
        abstract_text: paper.abstract_text.clone(),
        url: paper.url.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        browse_graph, browse_papers, catalog_journals, catalog_periods, core_version,
        describe_code, init_logging, ping, record_id_from_ffi, record_id_to_ffi, BrowseFilter,
    };
    use truffle_core::RecordId;

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn journals_and_periods_come_from_embedded_catalog() {
        let labels = catalog_journals()
            .into_iter()
            .map(|journal| journal.short_label)
            .collect::<Vec<_>>();
        assert_eq!(labels, vec!["AER", "QJE", "Econometrica", "JPE", "REStud"]);

        let periods = catalog_periods()
            .into_iter()
            .map(|period| period.label)
            .collect::<Vec<_>>();
        assert_eq!(periods, vec!["02/2026", "01/2026"]);
    }

    #[test]
    fn browse_papers_with_no_journals_is_empty() {
        let response = browse_papers(BrowseFilter {
            journals: Some(Vec::new()),
            ..Default::default()
        });
        assert!(response.ok, "{}", response.message);
        assert!(response.papers.is_empty());
    }

    #[test]
    fn browse_papers_filters_by_period() {
        let response = browse_papers(BrowseFilter {
            year: Some(2026),
            month: Some(2),
            ..Default::default()
        });
        assert!(response.ok, "{}", response.message);
        assert_eq!(response.papers.len(), 9);
        assert!(response.papers.iter().all(|p| p.journal_label == "QJE"));
    }

    #[test]
    fn browse_graph_clears_highlight_filtered_out() {
        let all = browse_graph(BrowseFilter::default(), Some(0));
        assert!(all.ok, "{}", all.message);
        assert_eq!(all.highlighted, Some(0));
        assert_eq!(all.displayed, 43);
        assert!(all.figure_json.contains("\"JEL Grid\""));

        let qje_only = browse_graph(
            BrowseFilter {
                journals: Some(vec!["Quarterly Journal of Economics".to_string()]),
                ..Default::default()
            },
            Some(0),
        );
        assert!(qje_only.ok, "{}", qje_only.message);
        assert_eq!(qje_only.highlighted, None);
    }

    #[test]
    fn describe_code_falls_back_to_category() {
        assert_eq!(describe_code("ZZ99".to_string()), "Unknown");
        assert!(!describe_code("E52".to_string()).is_empty());
    }

    #[test]
    fn record_ids_convert_without_truncation() {
        assert_eq!(record_id_from_ffi(7), RecordId(7));
        assert_eq!(record_id_to_ffi(RecordId(7)), Some(7));
        assert_eq!(record_id_to_ffi(RecordId(u32::MAX as usize)), Some(u32::MAX));
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn oversized_record_id_is_not_truncated() {
        let wrapped = RecordId(u32::MAX as usize + 1);
        assert_eq!(record_id_to_ffi(wrapped), None);
    }
}
