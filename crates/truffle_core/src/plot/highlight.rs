//! Highlight selection state.
//!
//! # Invariants
//! - A highlight is keyed by stable `RecordId`, not list position.
//! - After `reconcile`, a `Selected` state always refers to a record in the
//!   current filtered set.

use crate::model::paper::{PaperRecord, RecordId};
use log::info;
use serde::{Deserialize, Serialize};

/// Which record, if any, is the focus of the plot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "record_id", rename_all = "snake_case")]
pub enum HighlightState {
    #[default]
    Unselected,
    Selected(RecordId),
}

impl HighlightState {
    pub fn select(&mut self, id: RecordId) {
        *self = Self::Selected(id);
    }

    pub fn clear(&mut self) {
        *self = Self::Unselected;
    }

    /// Click semantics: selecting the highlighted record again deselects it.
    pub fn toggle(&mut self, id: RecordId) {
        *self = match *self {
            Self::Selected(current) if current == id => Self::Unselected,
            _ => Self::Selected(id),
        };
    }

    /// Highlighted record id, if any.
    pub fn active(&self) -> Option<RecordId> {
        match self {
            Self::Unselected => None,
            Self::Selected(id) => Some(*id),
        }
    }

    /// Applies a filter change: drops the highlight when its record is no
    /// longer in `filtered`.
    ///
    /// Returns `true` when the state was reset.
    pub fn reconcile(&mut self, filtered: &[&PaperRecord]) -> bool {
        let Self::Selected(id) = *self else {
            return false;
        };
        if filtered.iter().any(|record| record.id == id) {
            return false;
        }

        info!(
            "event=highlight_reset module=plot status=ok record_id={} reason=filtered_out",
            id
        );
        *self = Self::Unselected;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::HighlightState;
    use crate::model::paper::RecordId;

    #[test]
    fn toggle_selects_then_deselects_same_record() {
        let mut state = HighlightState::default();
        state.toggle(RecordId(2));
        assert_eq!(state.active(), Some(RecordId(2)));

        state.toggle(RecordId(4));
        assert_eq!(state.active(), Some(RecordId(4)));

        state.toggle(RecordId(4));
        assert_eq!(state, HighlightState::Unselected);
    }

    #[test]
    fn reconcile_is_noop_when_unselected() {
        let mut state = HighlightState::Unselected;
        assert!(!state.reconcile(&[]));
        assert_eq!(state, HighlightState::Unselected);
    }

    #[test]
    fn serializes_with_state_tag() {
        let json = serde_json::to_value(HighlightState::Selected(RecordId(3))).unwrap();
        assert_eq!(json, serde_json::json!({"state": "selected", "record_id": 3}));
    }
}
