//! Plot spec assembly.
//!
//! # Responsibility
//! - Build one series per plottable record with highlight-aware weights.
//! - Provide the static reference grid drawn beneath all series.
//!
//! # Invariants
//! - Series order follows input record order.
//! - A single-point series is drawn as markers only; two or more points are
//!   connected.
//! - The reference layer is identical for every build.

use crate::model::journal::JournalStyles;
use crate::model::paper::{PaperRecord, RecordId};
use crate::plot::coords::{to_coordinates, PlotPoint};
use crate::taxonomy::jel::{describe, format_code, letter_axis};
use log::debug;
use once_cell::sync::Lazy;
use serde::Serialize;

const SERIES_NAME_CHARS: usize = 30;
const REFERENCE_STEP: u8 = 5;
const REFERENCE_MAX: u8 = 99;
const REFERENCE_MARKER_SIZE: f64 = 8.0;
const REFERENCE_MARKER_COLOR: &str = "rgba(200,200,200,0.3)";
const REFERENCE_MARKER_SYMBOL: &str = "square";
const REFERENCE_LAYER_NAME: &str = "JEL Grid";

static REFERENCE_LAYER: Lazy<ReferenceLayer> = Lazy::new(ReferenceLayer::build);

/// Visual weight of a series relative to the current highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesWeight {
    /// No highlight active.
    Neutral,
    /// This series is the highlighted record.
    Highlighted,
    /// Another record is highlighted.
    Dimmed,
}

impl SeriesWeight {
    pub fn for_record(id: RecordId, highlighted: Option<RecordId>) -> Self {
        match highlighted {
            None => Self::Neutral,
            Some(active) if active == id => Self::Highlighted,
            Some(_) => Self::Dimmed,
        }
    }

    pub fn opacity(self) -> f64 {
        match self {
            Self::Neutral => 0.8,
            Self::Highlighted => 1.0,
            Self::Dimmed => 0.15,
        }
    }

    pub fn line_width(self) -> f64 {
        match self {
            Self::Neutral => 2.0,
            Self::Highlighted => 4.0,
            Self::Dimmed => 1.5,
        }
    }

    pub fn marker_size(self) -> f64 {
        match self {
            Self::Neutral => 6.0,
            Self::Highlighted => 10.0,
            Self::Dimmed => 5.0,
        }
    }
}

/// Trace drawing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DrawMode {
    #[serde(rename = "markers")]
    Markers,
    #[serde(rename = "lines+markers")]
    LinesAndMarkers,
}

impl DrawMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Markers => "markers",
            Self::LinesAndMarkers => "lines+markers",
        }
    }
}

/// Resolved style attributes of one series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesStyle {
    pub color: String,
    pub line_width: f64,
    pub marker_size: f64,
    pub opacity: f64,
}

/// Hover metadata of one series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeriesHover {
    pub title: String,
    pub journal_label: String,
    /// Mapped codes in plotted order, comma-joined.
    pub codes: String,
}

impl SeriesHover {
    /// Hover markup: bold title, italic journal label, code list.
    pub fn text(&self) -> String {
        format!(
            "<b>{}</b><br><i>{}</i><br>JEL: {}",
            self.title, self.journal_label, self.codes
        )
    }
}

/// One paper's visual series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotSeries {
    pub record_id: RecordId,
    /// Truncated title used as trace name.
    pub name: String,
    pub points: Vec<PlotPoint>,
    pub mode: DrawMode,
    pub weight: SeriesWeight,
    pub style: SeriesStyle,
    pub hover: SeriesHover,
}

/// Point of the static reference grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferencePoint {
    pub x: usize,
    pub y: u8,
    pub code: String,
    pub hover_text: String,
}

/// Faint, non-interactive grid of every (letter, multiple-of-5) code.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferenceLayer {
    pub name: &'static str,
    pub marker_size: f64,
    pub marker_color: &'static str,
    pub marker_symbol: &'static str,
    pub points: Vec<ReferencePoint>,
}

impl ReferenceLayer {
    fn build() -> Self {
        let mut points = Vec::new();
        for (x, letter) in letter_axis().iter().enumerate() {
            for y in (0..=REFERENCE_MAX).step_by(usize::from(REFERENCE_STEP)) {
                let code = format_code(letter, y);
                let hover_text = format!("<b>{code}</b><br>{}", describe(&code));
                points.push(ReferencePoint {
                    x,
                    y,
                    code,
                    hover_text,
                });
            }
        }
        Self {
            name: REFERENCE_LAYER_NAME,
            marker_size: REFERENCE_MARKER_SIZE,
            marker_color: REFERENCE_MARKER_COLOR,
            marker_symbol: REFERENCE_MARKER_SYMBOL,
            points,
        }
    }
}

/// Shared reference layer, built on first use.
pub fn reference_layer() -> &'static ReferenceLayer {
    &REFERENCE_LAYER
}

/// Figure-level layout settings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotLayout {
    /// X tick labels; tick values are their indices.
    pub x_tick_labels: Vec<&'static str>,
    pub y_range: (f64, f64),
    pub y_tick_step: u32,
    pub height: u32,
    pub plot_background: &'static str,
    pub paper_background: &'static str,
    pub grid_color: &'static str,
    pub font_color: &'static str,
    pub font_family: &'static str,
    /// Left, right, top, bottom margins in pixels.
    pub margins: (u32, u32, u32, u32),
}

impl Default for PlotLayout {
    fn default() -> Self {
        Self {
            x_tick_labels: letter_axis().to_vec(),
            y_range: (-2.0, 100.0),
            y_tick_step: 10,
            height: 450,
            plot_background: "#fafafa",
            paper_background: "#ffffff",
            grid_color: "#e8e8e8",
            font_color: "#333",
            font_family: "Source Serif Pro, Georgia, serif",
            margins: (40, 20, 40, 20),
        }
    }
}

/// Complete, render-ready plot description.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotSpec {
    /// Drawn first, beneath every series.
    pub background: &'static ReferenceLayer,
    pub series: Vec<PlotSeries>,
    pub layout: PlotLayout,
}

impl PlotSpec {
    /// Series currently drawn in highlighted weight.
    pub fn highlighted_series(&self) -> Option<&PlotSeries> {
        self.series
            .iter()
            .find(|series| series.weight == SeriesWeight::Highlighted)
    }
}

/// Builds plot specs using journal styles for colors and labels.
#[derive(Debug, Clone, Copy)]
pub struct PlotAssembler<'a> {
    styles: &'a JournalStyles,
}

impl<'a> PlotAssembler<'a> {
    pub fn new(styles: &'a JournalStyles) -> Self {
        Self { styles }
    }

    /// Builds the plot for `records`, weighting series against `highlighted`.
    ///
    /// Records with no mappable code are skipped.
    pub fn build<'r, I>(&self, records: I, highlighted: Option<RecordId>) -> PlotSpec
    where
        I: IntoIterator<Item = &'r PaperRecord>,
    {
        let mut skipped = 0usize;
        let series = records
            .into_iter()
            .filter_map(|record| {
                let built = self.series_for(record, highlighted);
                if built.is_none() {
                    skipped += 1;
                }
                built
            })
            .collect::<Vec<_>>();

        debug!(
            "event=plot_build module=plot status=ok series={} skipped_unmapped={} highlighted={}",
            series.len(),
            skipped,
            highlighted
                .map(|id| id.to_string())
                .unwrap_or_else(|| "none".to_string())
        );

        PlotSpec {
            background: reference_layer(),
            series,
            layout: PlotLayout::default(),
        }
    }

    fn series_for(&self, record: &PaperRecord, highlighted: Option<RecordId>) -> Option<PlotSeries> {
        let points = to_coordinates(record);
        if points.is_empty() {
            return None;
        }

        let weight = SeriesWeight::for_record(record.id, highlighted);
        let mode = if points.len() == 1 {
            DrawMode::Markers
        } else {
            DrawMode::LinesAndMarkers
        };
        let codes = points
            .iter()
            .map(|point| point.code.to_string())
            .collect::<Vec<_>>()
            .join(", ");

        Some(PlotSeries {
            record_id: record.id,
            name: record.title.chars().take(SERIES_NAME_CHARS).collect(),
            mode,
            weight,
            style: SeriesStyle {
                color: self.styles.color_for(&record.journal).to_string(),
                line_width: weight.line_width(),
                marker_size: weight.marker_size(),
                opacity: weight.opacity(),
            },
            hover: SeriesHover {
                title: record.title.clone(),
                journal_label: self.styles.short_label_for(&record.journal),
                codes,
            },
            points,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{reference_layer, SeriesWeight};
    use crate::model::paper::RecordId;

    #[test]
    fn weight_table_matches_modes() {
        let neutral = SeriesWeight::for_record(RecordId(1), None);
        let highlighted = SeriesWeight::for_record(RecordId(1), Some(RecordId(1)));
        let dimmed = SeriesWeight::for_record(RecordId(2), Some(RecordId(1)));

        assert_eq!(neutral, SeriesWeight::Neutral);
        assert_eq!(
            (neutral.opacity(), neutral.line_width(), neutral.marker_size()),
            (0.8, 2.0, 6.0)
        );
        assert_eq!(highlighted, SeriesWeight::Highlighted);
        assert_eq!(
            (highlighted.opacity(), highlighted.line_width(), highlighted.marker_size()),
            (1.0, 4.0, 10.0)
        );
        assert_eq!(dimmed, SeriesWeight::Dimmed);
        assert_eq!(
            (dimmed.opacity(), dimmed.line_width(), dimmed.marker_size()),
            (0.15, 1.5, 5.0)
        );
    }

    #[test]
    fn reference_layer_covers_axis_in_steps_of_five() {
        let layer = reference_layer();
        assert_eq!(layer.points.len(), 20 * 20);
        assert_eq!(layer.points[0].code, "A00");
        assert_eq!(layer.points[1].code, "A05");
        assert_eq!(layer.points.last().map(|p| p.code.as_str()), Some("Z95"));
        assert!(layer.points.iter().all(|p| p.y % 5 == 0 && p.y <= 95));
    }

    #[test]
    fn reference_hover_falls_back_to_category_name() {
        let layer = reference_layer();
        let d05 = layer
            .points
            .iter()
            .find(|p| p.code == "D05")
            .expect("D05 grid point");
        assert_eq!(d05.hover_text, "<b>D05</b><br>Microeconomics");
    }
}
