//! Matching rule for card triples.
//!
//! The board engine calls into these functions but never interprets
//! attributes directly.

pub mod matching;

pub use matching::{all_same_or_all_different, count_matches, find_match, is_match, third_card};
