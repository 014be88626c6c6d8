//! Party selection for highlighting.
//!
//! Selection state belongs to the caller; the layout engine never tracks
//! it. An empty selection means every party is shown at full opacity.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::party::{total_seats, Party};

/// Opacity of a seat whose party is selected (or when nothing is selected).
pub const SEAT_OPACITY_SELECTED: f32 = 1.0;
/// Opacity of a seat whose party is not selected.
pub const SEAT_OPACITY_DIMMED: f32 = 0.2;
pub const SHADOW_OPACITY_SELECTED: f32 = 0.8;
pub const SHADOW_OPACITY_DIMMED: f32 = 0.0;

/// Set of highlighted party ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    selected: BTreeSet<i64>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip a party in or out of the selection.
    ///
    /// Selecting every one of `party_count` parties is the same as selecting
    /// none, so the selection resets to empty.
    pub fn toggle(&mut self, party_id: i64, party_count: usize) {
        if !self.selected.remove(&party_id) {
            self.selected.insert(party_id);
        }
        if self.selected.len() >= party_count {
            self.selected.clear();
        }
    }

    /// Background click: drop the whole selection.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Whether seats of `party_id` are highlighted.
    pub fn is_selected(&self, party_id: i64) -> bool {
        self.selected.is_empty() || self.selected.contains(&party_id)
    }

    pub fn selected_ids(&self) -> impl Iterator<Item = i64> + '_ {
        self.selected.iter().copied()
    }

    /// Seats held by the highlighted parties, and their share of all seats
    /// in whole percent (rounded down).
    pub fn selected_seats(&self, parties: &[Party]) -> (u64, u32) {
        let total = total_seats(parties);
        let seats: u64 = parties
            .iter()
            .filter(|p| self.is_selected(p.id))
            .map(|p| u64::from(p.seats))
            .sum();
        let percent = if total == 0 { 0 } else { 100 * seats / total };
        (seats, percent as u32)
    }

    pub fn seat_opacity(&self, party_id: i64) -> f32 {
        if self.is_selected(party_id) {
            SEAT_OPACITY_SELECTED
        } else {
            SEAT_OPACITY_DIMMED
        }
    }

    pub fn shadow_opacity(&self, party_id: i64) -> f32 {
        if self.is_selected(party_id) {
            SHADOW_OPACITY_SELECTED
        } else {
            SHADOW_OPACITY_DIMMED
        }
    }
}
