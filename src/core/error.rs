//! Board error types.

use derive_more::{Display, Error};

use crate::cards::Card;

/// Errors returned by board operations.
///
/// All errors are local to the call that produced them; the board is
/// left unchanged when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// A deal asked for more cards than remain undrawn.
    #[display("cannot deal {requested} cards: only {remaining} left in the deck")]
    DeckExhausted { requested: usize, remaining: usize },

    /// A selection referred to a card that is not on the board.
    #[display("card {card} is not in play")]
    CardNotInPlay { card: Card },

    /// The board configuration is unusable.
    #[display("invalid board config: {reason}")]
    InvalidConfig { reason: String },
}

/// Result alias for board operations.
pub type BoardResult<T> = Result<T, BoardError>;
