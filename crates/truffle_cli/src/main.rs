//! `truffle` command-line render host.
//!
//! # Responsibility
//! - Load the catalog once, run one browse use-case, print the result.
//! - Keep all filtering and plotting rules in `truffle_core`.

mod args;

use anyhow::{Context, Result};
use args::{Cli, Command};
use clap::Parser;
use log::info;
use std::process::ExitCode;
use truffle_core::taxonomy::jel::{describe, describe_code};
use truffle_core::{
    init_logging, init_logging_with_target, load_catalog, to_plotly_figure, BrowseService,
    CatalogSource, ClassificationCode, HighlightState, JournalSection, LogTarget,
    PaperRepository, RecordId, RecordStore,
};

const DEFAULT_STDERR_LEVEL: &str = "warn";

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    init_cli_logging(cli.log_level.as_deref(), cli.log_dir.as_deref())?;

    let source = match cli.catalog {
        Some(path) => CatalogSource::File(path),
        None => CatalogSource::Embedded,
    };
    let store = load_catalog(&source).context("failed to load paper catalog")?;
    let service = BrowseService::new(&store);

    match cli.command {
        Command::Journals => print_journals(&store),
        Command::Periods => {
            for option in service.period_options() {
                println!("{}", option.label);
            }
        }
        Command::Papers { filter, json } => {
            let criteria = filter.to_criteria(&store)?;
            let sections = service.paper_listing(&criteria);
            if json {
                println!("{}", serde_json::to_string_pretty(&sections)?);
            } else {
                print_sections(&store, &sections);
            }
        }
        Command::Plot {
            filter,
            highlight,
            pretty,
        } => {
            let criteria = filter.to_criteria(&store)?;
            let mut state = match highlight {
                Some(id) => HighlightState::Selected(RecordId(id)),
                None => HighlightState::Unselected,
            };
            let view = service.graph(&criteria, &mut state);
            info!(
                "event=cli_plot module=cli status=ok displayed={} series={}",
                view.displayed,
                view.plot.series.len()
            );
            if highlight.is_some() && state == HighlightState::Unselected {
                eprintln!("note: highlighted record is not in the filtered set; highlight cleared");
            }

            let figure = to_plotly_figure(&view.plot);
            let rendered = if pretty {
                serde_json::to_string_pretty(&figure)?
            } else {
                serde_json::to_string(&figure)?
            };
            println!("{rendered}");
        }
        Command::Describe { codes } => {
            for code in codes {
                println!("{}", describe_line(&code));
            }
        }
    }
    Ok(())
}

fn init_cli_logging(level: Option<&str>, log_dir: Option<&str>) -> Result<()> {
    match log_dir {
        Some(dir) => {
            let level = level.unwrap_or_else(|| truffle_core::default_log_level());
            init_logging(level, dir).context("failed to initialize file logging")
        }
        None => {
            let level = level.unwrap_or(DEFAULT_STDERR_LEVEL);
            init_logging_with_target(level, LogTarget::Stderr)
                .context("failed to initialize stderr logging")
        }
    }
}

/// `CODE<TAB>description`, with the code in normalized form when it parses.
fn describe_line(raw: &str) -> String {
    match ClassificationCode::parse(raw) {
        Ok(code) => format!("{code}\t{}", describe_code(&code)),
        Err(_) => format!("{}\t{}", raw.trim(), describe(raw)),
    }
}

fn print_journals(store: &RecordStore) {
    let styles = store.journal_styles();
    for name in store.distinct_journals() {
        println!(
            "{:<14} {}  {}",
            styles.short_label_for(name),
            styles.color_for(name),
            name
        );
    }
}

fn print_sections(store: &RecordStore, sections: &[JournalSection<'_>]) {
    let total = sections.iter().map(|s| s.papers.len()).sum::<usize>();
    println!("{total} papers");

    let styles = store.journal_styles();
    for section in sections {
        println!();
        println!("{}", section.journal);
        let label = styles.short_label_for(&section.journal);
        for paper in &section.papers {
            println!("  [{}] #{} {}", label, paper.id, paper.title);
            println!("      {}", paper.authors.join(", "));
            println!("      {}", paper.citation_line());
            if !paper.codes.is_empty() {
                println!("      JEL: {}", paper.codes_label());
            }
            if let Some(url) = &paper.url {
                println!("      {url}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::describe_line;

    #[test]
    fn describe_line_prints_normalized_code() {
        assert_eq!(describe_line("a5"), "A05\tGeneral Economics and Teaching");
        assert_eq!(describe_line(" e52 "), "E52\tMonetary Policy");
    }

    #[test]
    fn describe_line_keeps_unparseable_input() {
        assert_eq!(describe_line("J-24"), "J-24\tUnknown");
    }
}
