//! Catalog loading entry points.
//!
//! # Side effects
//! - Emits `catalog_load` logging events with duration and status.

use super::store::RecordStore;
use super::{CatalogError, CatalogResult, CatalogSource};
use crate::model::journal::{JournalStyle, JournalStyles};
use crate::model::paper::{PaperEntry, RecordId};
use log::{error, info};
use serde::Deserialize;
use std::path::Path;
use std::time::Instant;

/// Catalog JSON compiled into the crate.
pub const EMBEDDED_CATALOG: &str = include_str!("../../data/catalog.json");

#[derive(Debug, Deserialize)]
struct CatalogFile {
    journals: Vec<JournalStyle>,
    papers: Vec<PaperEntry>,
}

/// Loads the catalog from the given source.
pub fn load_catalog(source: &CatalogSource) -> CatalogResult<RecordStore> {
    match source {
        CatalogSource::Embedded => load_embedded(),
        CatalogSource::File(path) => load_from_path(path),
    }
}

/// Loads the embedded catalog.
pub fn load_embedded() -> CatalogResult<RecordStore> {
    load_logged("embedded", || load_from_str(EMBEDDED_CATALOG))
}

/// Loads a catalog JSON file from disk.
pub fn load_from_path(path: impl AsRef<Path>) -> CatalogResult<RecordStore> {
    let path = path.as_ref();
    load_logged("file", || {
        let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        load_from_str(&text)
    })
}

/// Parses and validates catalog JSON text.
///
/// # Errors
/// - `Json` when the text does not match the catalog schema.
/// - `InvalidJournalStyle` for empty, duplicate or badly colored styles.
/// - `InvalidRecord` / `UnknownJournal` for the first offending paper.
pub fn load_from_str(json: &str) -> CatalogResult<RecordStore> {
    let file: CatalogFile = serde_json::from_str(json)?;
    let journals = JournalStyles::new(file.journals)?;

    let mut records = Vec::with_capacity(file.papers.len());
    for (index, entry) in file.papers.into_iter().enumerate() {
        let record = entry
            .into_record(RecordId(index))
            .map_err(|source| CatalogError::InvalidRecord { index, source })?;
        if !journals.contains(&record.journal) {
            return Err(CatalogError::UnknownJournal {
                index,
                journal: record.journal,
            });
        }
        records.push(record);
    }

    Ok(RecordStore::new(records, journals))
}

fn load_logged(
    mode: &str,
    load: impl FnOnce() -> CatalogResult<RecordStore>,
) -> CatalogResult<RecordStore> {
    let started_at = Instant::now();
    info!("event=catalog_load module=catalog status=start mode={mode}");

    match load() {
        Ok(store) => {
            info!(
                "event=catalog_load module=catalog status=ok mode={} duration_ms={} records={} journals={}",
                mode,
                started_at.elapsed().as_millis(),
                store.all_records().len(),
                store.journal_styles().len()
            );
            Ok(store)
        }
        Err(err) => {
            error!(
                "event=catalog_load module=catalog status=error mode={} duration_ms={} error_code={} error={}",
                mode,
                started_at.elapsed().as_millis(),
                err.code(),
                err
            );
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::load_embedded;

    #[test]
    fn embedded_catalog_is_valid() {
        let store = load_embedded().expect("embedded catalog should load");
        assert_eq!(store.all_records().len(), 43);
        assert_eq!(store.journal_styles().len(), 5);
    }
}
