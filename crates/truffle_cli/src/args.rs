//! Command-line arguments.
//!
//! # Responsibility
//! - Declare the `truffle` command surface.
//! - Turn filter flags into a core `FilterCriteria`.

use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use truffle_core::{FilterCriteria, PaperRepository, Period};

#[derive(Parser, Debug)]
#[command(name = "truffle")]
#[command(about = "Browse top economics journal papers and their JEL code map")]
#[command(version)]
pub struct Cli {
    /// Catalog JSON file (defaults to the embedded catalog)
    #[arg(long, global = true, env = "TRUFFLE_CATALOG", value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Log level: trace|debug|info|warn|error
    #[arg(long, global = true, env = "TRUFFLE_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files (stderr when unset)
    #[arg(long, global = true, env = "TRUFFLE_LOG_DIR", value_name = "DIR")]
    pub log_dir: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List journals in filter-button order
    Journals,
    /// List publication periods, newest first
    Periods,
    /// List filtered papers grouped by journal
    Papers {
        #[command(flatten)]
        filter: FilterArgs,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the JEL plot as a Plotly figure
    Plot {
        #[command(flatten)]
        filter: FilterArgs,
        /// Record id to highlight
        #[arg(long, value_name = "ID")]
        highlight: Option<usize>,
        /// Pretty-print the figure JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Describe JEL codes
    Describe {
        #[arg(required = true, value_name = "CODE")]
        codes: Vec<String>,
    },
}

#[derive(Args, Debug, Default, Clone)]
pub struct FilterArgs {
    /// Journal to include, by full name or short label (repeatable; default: all)
    #[arg(long = "journal", value_name = "JOURNAL")]
    pub journals: Vec<String>,

    /// Select no journals at all
    #[arg(long, conflicts_with = "journals")]
    pub no_journals: bool,

    /// Exact publication period, `YYYY-MM` or `MM/YYYY`
    #[arg(long, value_name = "PERIOD", value_parser = parse_period)]
    pub period: Option<Period>,

    /// JEL category letter to include (repeatable; default: all)
    #[arg(long = "topic", value_name = "LETTER")]
    pub topics: Vec<String>,
}

impl FilterArgs {
    /// Builds criteria against the loaded catalog's journal styles.
    pub fn to_criteria<R: PaperRepository>(&self, repo: &R) -> Result<FilterCriteria> {
        let mut criteria = if self.no_journals {
            FilterCriteria::default()
        } else if self.journals.is_empty() {
            FilterCriteria::all_journals(repo)
        } else {
            let styles = repo.journal_styles();
            let mut names = Vec::with_capacity(self.journals.len());
            for requested in &self.journals {
                match styles.resolve_name(requested) {
                    Some(name) => names.push(name.to_string()),
                    None => bail!(
                        "unknown journal `{requested}`; expected one of: {}",
                        styles.names().join(", ")
                    ),
                }
            }
            FilterCriteria::for_journals(names)
        };

        criteria = criteria.with_period(self.period);
        for topic in &self.topics {
            criteria = criteria.with_topic(topic);
        }
        Ok(criteria)
    }
}

/// Parses `YYYY-MM` or `MM/YYYY`.
pub fn parse_period(raw: &str) -> Result<Period, String> {
    let raw = raw.trim();
    let (year, month) = if let Some((year, month)) = raw.split_once('-') {
        (year, month)
    } else if let Some((month, year)) = raw.split_once('/') {
        (year, month)
    } else {
        return Err(format!("invalid period `{raw}`; expected YYYY-MM or MM/YYYY"));
    };

    let year = year
        .parse::<i32>()
        .map_err(|_| format!("invalid year in period `{raw}`"))?;
    let month = month
        .parse::<u8>()
        .ok()
        .filter(|month| (1..=12).contains(month))
        .ok_or_else(|| format!("invalid month in period `{raw}`"))?;
    Ok(Period::new(year, month))
}

#[cfg(test)]
mod tests {
    use super::{parse_period, Cli, Command};
    use clap::{CommandFactory, Parser};
    use truffle_core::{load_embedded, Period};

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_period_accepts_both_layouts() {
        assert_eq!(parse_period("2026-01"), Ok(Period::new(2026, 1)));
        assert_eq!(parse_period("02/2026"), Ok(Period::new(2026, 2)));
        assert!(parse_period("2026-13").is_err());
        assert!(parse_period("January").is_err());
    }

    #[test]
    fn journal_flags_resolve_short_labels() {
        let cli = Cli::try_parse_from([
            "truffle", "papers", "--journal", "qje", "--journal", "Econometrica", "--topic", "j",
        ])
        .unwrap();
        let Command::Papers { filter, .. } = cli.command else {
            panic!("expected papers command");
        };

        let store = load_embedded().unwrap();
        let criteria = filter.to_criteria(&store).unwrap();
        assert_eq!(
            criteria.journals.iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["Econometrica", "Quarterly Journal of Economics"]
        );
        assert!(criteria.topics.contains("J"));
        assert_eq!(criteria.period, None);
    }

    #[test]
    fn no_journals_yields_empty_selection() {
        let cli = Cli::try_parse_from(["truffle", "plot", "--no-journals", "--highlight", "3"])
            .unwrap();
        let Command::Plot {
            filter, highlight, ..
        } = cli.command
        else {
            panic!("expected plot command");
        };

        let store = load_embedded().unwrap();
        assert!(filter.to_criteria(&store).unwrap().journals.is_empty());
        assert_eq!(highlight, Some(3));
    }

    #[test]
    fn unknown_journal_is_rejected() {
        let filter = super::FilterArgs {
            journals: vec!["JF".to_string()],
            ..Default::default()
        };
        let store = load_embedded().unwrap();
        let err = filter.to_criteria(&store).unwrap_err();
        assert!(err.to_string().contains("unknown journal `JF`"));
    }
}
