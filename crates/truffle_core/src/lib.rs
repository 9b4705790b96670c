//! Core domain logic for truffle, the economics paper browser.
//! This crate is the single source of truth for catalog, filter and plot rules.

pub mod catalog;
pub mod filter;
pub mod logging;
pub mod model;
pub mod plot;
pub mod service;
pub mod taxonomy;

pub use catalog::{
    load_catalog, load_embedded, load_from_path, load_from_str, CatalogError, CatalogResult,
    CatalogSource, PaperRepository, RecordStore,
};
pub use filter::engine::{apply, FilterCriteria};
pub use logging::{
    default_log_level, init_logging, init_logging_with_target, logging_status, LogTarget,
    LoggingError,
};
pub use model::code::{ClassificationCode, CodeParseError};
pub use model::journal::{JournalStyle, JournalStyleError, JournalStyles, DEFAULT_JOURNAL_COLOR};
pub use model::paper::{PaperEntry, PaperRecord, PaperValidationError, Period, RecordId};
pub use plot::assembler::{
    reference_layer, DrawMode, PlotAssembler, PlotLayout, PlotSeries, PlotSpec, ReferenceLayer,
    SeriesWeight,
};
pub use plot::coords::{to_coordinates, PlotPoint};
pub use plot::figure::to_plotly_figure;
pub use plot::highlight::HighlightState;
pub use service::browse_service::{
    BrowseService, GraphView, JournalSection, LegendEntry, PeriodOption,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
