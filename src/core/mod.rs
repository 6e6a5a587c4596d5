//! Core engine types: draw sources, configuration, errors.
//!
//! These are the ambient pieces the board is built on. None of them
//! know what a Set is.

pub mod config;
pub mod error;
pub mod rng;

pub use config::BoardConfig;
pub use error::{BoardError, BoardResult};
pub use rng::{DrawSource, GameRng, GameRngState, ScriptedDraw};
