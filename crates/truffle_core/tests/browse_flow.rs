use serde_json::{json, Value};
use truffle_core::{
    load_embedded, load_from_str, BrowseService, FilterCriteria, HighlightState, Period,
    PlotAssembler, RecordId, RecordStore, SeriesWeight,
};

const AER: &str = "American Economic Review";
const JPE: &str = "Journal of Political Economy";

fn paper(title: &str, journal: &str, month: u32, codes: &[&str]) -> Value {
    json!({
        "title": title,
        "authors": ["An Author"],
        "journal": journal,
        "jel_codes": codes,
        "year": 2026,
        "month": month,
    })
}

fn store() -> RecordStore {
    let text = json!({
        "journals": [
            {"name": JPE, "color": "#6A994E", "short_label": "JPE"},
            {"name": AER, "color": "#E63946", "short_label": "AER"},
        ],
        "papers": [
            paper("Zeta", AER, 1, &["J24"]),
            paper("Beta", JPE, 1, &["I21", "J13"]),
            paper("Alpha", AER, 2, &["E52", "E58"]),
            paper("Gamma", JPE, 2, &["D91"]),
            paper("Delta", AER, 1, &["ZZ99"]),
        ],
    })
    .to_string();
    load_from_str(&text).unwrap()
}

#[test]
fn filtering_out_highlighted_record_resets_highlight() {
    let service = BrowseService::new(store());
    let mut highlight = HighlightState::default();
    let all = service.default_criteria();

    highlight.select(RecordId(3));
    let view = service.graph(&all, &mut highlight);
    assert_eq!(view.highlight, HighlightState::Selected(RecordId(3)));
    assert_eq!(
        view.plot.highlighted_series().map(|s| s.record_id),
        Some(RecordId(3))
    );

    // Record 3 is a JPE paper; keep only AER.
    let aer_only = FilterCriteria::for_journals([AER]);
    let view = service.graph(&aer_only, &mut highlight);
    assert_eq!(highlight, HighlightState::Unselected);
    assert_eq!(view.highlight, HighlightState::Unselected);
    assert!(view.plot.highlighted_series().is_none());
    assert!(view
        .plot
        .series
        .iter()
        .all(|s| s.weight == SeriesWeight::Neutral));
}

#[test]
fn highlight_survives_filter_change_that_keeps_its_record() {
    let service = BrowseService::new(store());
    let mut highlight = HighlightState::Selected(RecordId(2));

    let criteria = FilterCriteria::for_journals([AER]);
    let view = service.graph(&criteria, &mut highlight);

    assert_eq!(highlight, HighlightState::Selected(RecordId(2)));
    let weights = view
        .plot
        .series
        .iter()
        .map(|s| (s.record_id, s.weight))
        .collect::<Vec<_>>();
    assert_eq!(
        weights,
        vec![
            (RecordId(0), SeriesWeight::Dimmed),
            (RecordId(2), SeriesWeight::Highlighted),
        ]
    );
}

#[test]
fn graph_counts_filtered_papers_including_unplottable_ones() {
    let service = BrowseService::new(store());
    let mut highlight = HighlightState::default();
    let criteria = FilterCriteria::for_journals([AER]).with_period(Some(Period::new(2026, 1)));

    let view = service.graph(&criteria, &mut highlight);
    assert_eq!(view.displayed, 2);
    assert_eq!(view.plot.series.len(), 1);
}

#[test]
fn deselect_all_shows_nothing() {
    let service = BrowseService::new(store());
    let mut highlight = HighlightState::Selected(RecordId(0));
    let mut criteria = service.default_criteria();
    criteria.deselect_all_journals();

    let view = service.graph(&criteria, &mut highlight);
    assert_eq!(view.displayed, 0);
    assert!(view.plot.series.is_empty());
    assert_eq!(highlight, HighlightState::Unselected);
    assert!(service.paper_listing(&criteria).is_empty());
}

#[test]
fn paper_listing_sorts_by_journal_then_title_and_groups() {
    let service = BrowseService::new(store());
    let sections = service.paper_listing(&service.default_criteria());

    let layout = sections
        .iter()
        .map(|section| {
            (
                section.journal.as_str(),
                section
                    .papers
                    .iter()
                    .map(|p| p.title.as_str())
                    .collect::<Vec<_>>(),
            )
        })
        .collect::<Vec<_>>();
    assert_eq!(
        layout,
        vec![
            (AER, vec!["Alpha", "Delta", "Zeta"]),
            (JPE, vec!["Beta", "Gamma"]),
        ]
    );
    assert_eq!(sections[0].color, "#E63946");
}

#[test]
fn legend_and_periods_follow_declaration_and_recency() {
    let service = BrowseService::new(store());

    let legend = service
        .legend()
        .into_iter()
        .map(|entry| entry.short_label)
        .collect::<Vec<_>>();
    assert_eq!(legend, vec!["JPE", "AER"]);

    let periods = service
        .period_options()
        .into_iter()
        .map(|option| option.label)
        .collect::<Vec<_>>();
    assert_eq!(periods, vec!["02/2026", "01/2026"]);
}

#[test]
fn embedded_catalog_default_graph_plots_every_paper() {
    let store = load_embedded().unwrap();
    let service = BrowseService::new(&store);
    let mut highlight = HighlightState::default();

    let view = service.graph(&service.default_criteria(), &mut highlight);
    assert_eq!(view.displayed, 43);
    assert_eq!(view.plot.series.len(), 43);
}

#[test]
fn clearing_highlight_restores_neutral_series() {
    let store = store();
    let mut highlight = HighlightState::default();
    highlight.select(RecordId(1));
    assert_eq!(highlight.active(), Some(RecordId(1)));

    highlight.clear();
    assert_eq!(highlight.active(), None);

    let spec = PlotAssembler::new(store.journal_styles())
        .build(store.all_records(), highlight.active());
    assert!(!spec.series.is_empty());
    assert!(spec.highlighted_series().is_none());
    assert!(spec
        .series
        .iter()
        .all(|s| s.weight == SeriesWeight::Neutral));
}
