//! Code list to plot coordinate mapping.

use crate::model::code::ClassificationCode;
use crate::model::paper::PaperRecord;
use crate::taxonomy::jel::axis_index;
use serde::Serialize;

/// One mapped code: x is the letter-axis index, y the numeric part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlotPoint {
    pub x: usize,
    pub y: u8,
    pub code: ClassificationCode,
}

/// Maps a record's codes to coordinates sorted by `(x, y)`.
///
/// Codes whose letter is not on the axis are dropped. The sort is stable, so
/// duplicate codes keep declaration order.
pub fn to_coordinates(record: &PaperRecord) -> Vec<PlotPoint> {
    let mut points = record
        .codes
        .iter()
        .filter_map(|code| {
            axis_index(code.letter()).map(|x| PlotPoint {
                x,
                y: code.number(),
                code: code.clone(),
            })
        })
        .collect::<Vec<_>>();
    points.sort_by_key(|point| (point.x, point.y));
    points
}
