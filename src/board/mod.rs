//! Board state machine: dealing, selection, submission, growth.
//!
//! ## Key Types
//!
//! - `BoardEngine`: one game session over the 81-card deck
//! - `MatchOutcome`: result of submitting a selection
//! - `HintOutcome`: result of spending a hint
//! - `BoardPhase`: awaiting selection or won
//! - `BoardSnapshot`: serializable view for the presentation layer

pub mod engine;
pub mod outcome;
pub mod snapshot;

pub use engine::BoardEngine;
pub use outcome::{BoardPhase, DealPosition, HintOutcome, MatchOutcome};
pub use snapshot::BoardSnapshot;
