//! Plotly figure export.
//!
//! The figure JSON is consumed as-is by web and Flutter render hosts.

use crate::plot::assembler::{PlotLayout, PlotSeries, PlotSpec, ReferenceLayer};
use serde_json::{json, Value};

const HOVER_SUFFIX: &str = "<extra></extra>";

/// Renders `spec` as a Plotly figure with `data` and `layout` keys.
///
/// The reference layer is always the first trace.
pub fn to_plotly_figure(spec: &PlotSpec) -> Value {
    let mut data = Vec::with_capacity(spec.series.len() + 1);
    data.push(reference_trace(spec.background));
    data.extend(spec.series.iter().map(series_trace));

    json!({
        "data": data,
        "layout": layout_json(&spec.layout),
    })
}

fn reference_trace(layer: &ReferenceLayer) -> Value {
    json!({
        "type": "scatter",
        "x": layer.points.iter().map(|p| p.x).collect::<Vec<_>>(),
        "y": layer.points.iter().map(|p| p.y).collect::<Vec<_>>(),
        "mode": "markers",
        "marker": {
            "size": layer.marker_size,
            "color": layer.marker_color,
            "symbol": layer.marker_symbol,
        },
        "hovertemplate": format!("%{{text}}{HOVER_SUFFIX}"),
        "text": layer.points.iter().map(|p| p.hover_text.as_str()).collect::<Vec<_>>(),
        "showlegend": false,
        "name": layer.name,
    })
}

fn series_trace(series: &PlotSeries) -> Value {
    let mut trace = json!({
        "type": "scatter",
        "x": series.points.iter().map(|p| p.x).collect::<Vec<_>>(),
        "y": series.points.iter().map(|p| p.y).collect::<Vec<_>>(),
        "mode": series.mode.as_str(),
        "marker": {
            "size": series.style.marker_size,
            "color": series.style.color,
        },
        "opacity": series.style.opacity,
        "hovertemplate": format!("{}{HOVER_SUFFIX}", series.hover.text()),
        "customdata": vec![series.record_id.0; series.points.len()],
        "showlegend": false,
        "name": series.name,
    });
    if series.points.len() > 1 {
        trace["line"] = json!({
            "color": series.style.color,
            "width": series.style.line_width,
        });
    }
    trace
}

fn layout_json(layout: &PlotLayout) -> Value {
    let (y_min, y_max) = layout.y_range;
    let (left, right, top, bottom) = layout.margins;
    json!({
        "plot_bgcolor": layout.plot_background,
        "paper_bgcolor": layout.paper_background,
        "font": { "color": layout.font_color, "family": layout.font_family },
        "xaxis": {
            "tickmode": "array",
            "tickvals": (0..layout.x_tick_labels.len()).collect::<Vec<_>>(),
            "ticktext": layout.x_tick_labels,
            "title": null,
            "gridcolor": layout.grid_color,
            "showgrid": true,
            "zeroline": false,
            "tickfont": { "size": 11, "color": "#555" },
            "side": "top",
            "fixedrange": true,
        },
        "yaxis": {
            "title": null,
            "range": [y_min, y_max],
            "gridcolor": layout.grid_color,
            "showgrid": true,
            "zeroline": false,
            "tickfont": { "size": 10, "color": "#555" },
            "dtick": layout.y_tick_step,
            "fixedrange": true,
        },
        "margin": { "l": left, "r": right, "t": top, "b": bottom },
        "height": layout.height,
        "hovermode": "closest",
        "showlegend": false,
        "dragmode": false,
    })
}
