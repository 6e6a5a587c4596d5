//! # set-board
//!
//! Board and deck state machine for the Set card-matching puzzle.
//!
//! ## Design Principles
//!
//! 1. **Pure rule, stateful board**: the matching rule is a pure
//!    function of three cards; all mutable state lives in one
//!    explicitly constructed `BoardEngine`.
//!
//! 2. **Injectable randomness**: every card drawn goes through a
//!    `DrawSource`, so a session can be replayed exactly.
//!
//! 3. **Always solvable**: the board grows in steps of three while it
//!    has no Set. Any 21 cards contain a Set, so growth is bounded.
//!
//! ## Modules
//!
//! - `cards`: attributes, the card value type, the deck
//! - `rules`: the matching rule and Set search
//! - `core`: draw sources, configuration, errors
//! - `board`: the board engine and its outcomes
//! - `python`: PyO3 bindings (feature `python`)

pub mod board;
pub mod cards;
pub mod core;
pub mod rules;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::board::{
    BoardEngine, BoardPhase, BoardSnapshot, DealPosition, HintOutcome, MatchOutcome,
};

pub use crate::cards::{Attribute, Card, Color, Count, Deck, Shade, Shape, CARD_COUNT};

pub use crate::core::{
    BoardConfig, BoardError, BoardResult, DrawSource, GameRng, GameRngState, ScriptedDraw,
};

pub use crate::rules::{find_match, is_match, third_card};
