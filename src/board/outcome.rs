//! Results of board operations.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Where dealt cards are placed on the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DealPosition {
    /// Append after the last slot.
    #[default]
    End,
    /// Insert starting at this slot, clamped to the board length.
    /// Successive cards go into successive slots.
    Slot(usize),
}

/// Result of submitting the current selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    /// Selection was not exactly three cards; nothing changed.
    Pending,
    /// The three cards formed a Set and were retired.
    Matched,
    /// The three cards did not form a Set; they stay in play.
    Rejected,
}

impl MatchOutcome {
    /// Check if the submission was evaluated (matched or rejected).
    #[must_use]
    pub fn is_resolved(self) -> bool {
        !matches!(self, MatchOutcome::Pending)
    }
}

/// Result of spending a hint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HintOutcome {
    /// This card belongs to a Set on the board and is now selected.
    Revealed(Card),
    /// Every card of the first Set on the board is already selected.
    AlreadySelected,
    /// The board had no Set; this many cards were dealt instead.
    Dealt(usize),
    /// The board has no Set and the deck is empty.
    NoMatch,
    /// The hint budget is spent; nothing changed.
    NoHintsLeft,
}

/// Observable state of a session between operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardPhase {
    /// Accepting selections.
    AwaitingSelection,
    /// Every card has been dealt and no Set remains. Terminal.
    Won,
}
