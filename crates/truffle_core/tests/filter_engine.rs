use serde_json::{json, Value};
use truffle_core::{apply, load_embedded, load_from_str, FilterCriteria, PaperRecord, Period, RecordStore};

const AER: &str = "American Economic Review";
const QJE: &str = "Quarterly Journal of Economics";
const ECMA: &str = "Econometrica";

fn paper(title: &str, journal: &str, year: i32, month: u32, codes: &[&str]) -> Value {
    json!({
        "title": title,
        "authors": ["An Author"],
        "journal": journal,
        "jel_codes": codes,
        "year": year,
        "month": month,
    })
}

/// Five records across three journals.
fn store() -> RecordStore {
    let text = json!({
        "journals": [
            {"name": AER, "color": "#E63946", "short_label": "AER"},
            {"name": QJE, "color": "#2A9D8F", "short_label": "QJE"},
            {"name": ECMA, "color": "#457B9D", "short_label": "Econometrica"},
        ],
        "papers": [
            paper("p0", AER, 2026, 1, &["J24", "D91"]),
            paper("p1", QJE, 2026, 2, &["E52"]),
            paper("p2", ECMA, 2026, 1, &["C11", "C13"]),
            paper("p3", AER, 2026, 2, &["Q54"]),
            paper("p4", QJE, 2025, 1, &[]),
        ],
    })
    .to_string();
    load_from_str(&text).unwrap()
}

fn titles(records: &[&PaperRecord]) -> Vec<String> {
    records.iter().map(|record| record.title.clone()).collect()
}

#[test]
fn empty_journal_selection_returns_nothing_regardless_of_other_predicates() {
    let store = store();
    let criteria = FilterCriteria::default()
        .with_period(Some(Period::new(2026, 1)))
        .with_topic("J");
    assert!(apply(store.all_records(), &criteria).is_empty());

    let mut criteria = FilterCriteria::all_journals(&store);
    criteria.deselect_all_journals();
    assert!(apply(store.all_records(), &criteria).is_empty());
}

#[test]
fn unset_period_and_topics_return_input_unchanged() {
    let store = store();
    let criteria = FilterCriteria::all_journals(&store);
    let filtered = apply(store.all_records(), &criteria);

    assert_eq!(filtered.len(), store.all_records().len());
    for (kept, original) in filtered.iter().zip(store.all_records()) {
        assert_eq!(*kept, original);
    }
}

#[test]
fn two_of_three_journals_keeps_matching_records_in_order() {
    let store = store();
    let criteria = FilterCriteria::for_journals([AER, ECMA]);
    let filtered = apply(store.all_records(), &criteria);

    assert_eq!(titles(&filtered), vec!["p0", "p2", "p3"]);
}

#[test]
fn period_requires_exact_year_and_month() {
    let store = store();
    let criteria =
        FilterCriteria::all_journals(&store).with_period(Some(Period::new(2026, 1)));
    assert_eq!(titles(&apply(store.all_records(), &criteria)), vec!["p0", "p2"]);

    // Same month, different year must not match.
    let criteria =
        FilterCriteria::all_journals(&store).with_period(Some(Period::new(2025, 2)));
    assert!(apply(store.all_records(), &criteria).is_empty());
}

#[test]
fn topic_matches_when_any_code_letter_is_selected() {
    let store = store();
    let criteria = FilterCriteria::all_journals(&store).with_topic("d").with_topic("Q");
    assert_eq!(titles(&apply(store.all_records(), &criteria)), vec!["p0", "p3"]);

    // Records without codes never match a topic filter.
    let criteria = FilterCriteria::all_journals(&store).with_topic("J");
    assert_eq!(titles(&apply(store.all_records(), &criteria)), vec!["p0"]);
}

#[test]
fn predicates_compose_conjunctively() {
    let store = store();
    let criteria = FilterCriteria::for_journals([AER, QJE])
        .with_period(Some(Period::new(2026, 2)))
        .with_topic("E");
    assert_eq!(titles(&apply(store.all_records(), &criteria)), vec!["p1"]);
}

#[test]
fn embedded_catalog_filters_by_journal_and_issue() {
    let store = load_embedded().unwrap();
    let criteria = FilterCriteria::for_journals([QJE]).with_period(Some(Period::new(2026, 2)));
    let filtered = apply(store.all_records(), &criteria);

    assert_eq!(filtered.len(), 9);
    assert!(filtered.iter().all(|record| record.journal == QJE && record.month == 2));
}

#[test]
fn topic_matches_leading_letter_of_multi_letter_code() {
    let text = json!({
        "journals": [{"name": AER, "color": "#E63946", "short_label": "AER"}],
        "papers": [
            paper("odd", AER, 2026, 1, &["ZZ99"]),
            paper("plain", AER, 2026, 1, &["Z13"]),
            paper("other", AER, 2026, 1, &["A10"]),
        ],
    })
    .to_string();
    let store = load_from_str(&text).unwrap();

    let criteria = FilterCriteria::all_journals(&store).with_topic("Z");
    assert_eq!(titles(&apply(store.all_records(), &criteria)), vec!["odd", "plain"]);
}
