//! Read-only view of a board for the presentation layer.

use serde::{Deserialize, Serialize};

use super::outcome::BoardPhase;
use crate::cards::Card;

/// Everything a renderer needs to draw the board and its labels.
///
/// `in_play` is in slot order; `selected` is in selection order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub in_play: Vec<Card>,
    pub selected: Vec<Card>,
    pub retired: usize,
    pub remaining: usize,
    pub matches_found: u32,
    pub matches_rejected: u32,
    /// `None` when hints are unlimited.
    pub hints_left: Option<u32>,
    pub phase: BoardPhase,
}

impl BoardSnapshot {
    /// Check whether the card in `slot` is selected.
    #[must_use]
    pub fn is_slot_selected(&self, slot: usize) -> bool {
        self.in_play
            .get(slot)
            .is_some_and(|card| self.selected.contains(card))
    }
}
