//! Board configuration.
//!
//! A `BoardConfig` fixes the shape of a session: how many cards are
//! dealt up front, how the board grows when it has no Set, and how many
//! hints the player gets.

use serde::{Deserialize, Serialize};

use super::error::{BoardError, BoardResult};
use crate::cards::CARD_COUNT;

/// Board configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Cards dealt at the start (default: 12).
    /// Also the floor the board is refilled to after a Set is removed.
    pub initial_size: usize,

    /// Cards added per growth step when the board has no Set (default: 3).
    pub growth_step: usize,

    /// Largest board automatic growth will build (default: 21).
    /// Any 21 cards contain a Set, so growth never needs to go further.
    pub max_size: usize,

    /// Grow the board automatically whenever it has no Set.
    /// When false, the player calls `deal_extra` instead.
    pub auto_grow: bool,

    /// Number of `request_hint` calls allowed (`None` = unlimited).
    pub hint_limit: Option<u32>,

    /// Seed for the default draw source.
    pub seed: u64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            initial_size: 12,
            growth_step: 3,
            max_size: 21,
            auto_grow: true,
            hint_limit: Some(5),
            seed: 42,
        }
    }
}

impl BoardConfig {
    /// Set the initial (and floor) board size.
    #[must_use]
    pub fn with_initial_size(mut self, size: usize) -> Self {
        self.initial_size = size;
        self
    }

    /// Set the growth step.
    #[must_use]
    pub fn with_growth_step(mut self, step: usize) -> Self {
        self.growth_step = step;
        self
    }

    /// Set the largest board automatic growth may build.
    #[must_use]
    pub fn with_max_size(mut self, size: usize) -> Self {
        self.max_size = size;
        self
    }

    /// Enable or disable automatic growth.
    #[must_use]
    pub fn with_auto_grow(mut self, enabled: bool) -> Self {
        self.auto_grow = enabled;
        self
    }

    /// Set the hint budget.
    #[must_use]
    pub fn with_hint_limit(mut self, limit: Option<u32>) -> Self {
        self.hint_limit = limit;
        self
    }

    /// Set the seed for the default draw source.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check that the configuration describes a playable board.
    pub fn validate(&self) -> BoardResult<()> {
        let invalid = |reason: String| Err(BoardError::InvalidConfig { reason });

        if self.initial_size == 0 {
            return invalid("initial_size must be at least 1".into());
        }
        if self.initial_size > CARD_COUNT {
            return invalid(format!(
                "initial_size {} exceeds the {CARD_COUNT}-card deck",
                self.initial_size
            ));
        }
        if self.growth_step == 0 {
            return invalid("growth_step must be at least 1".into());
        }
        if self.max_size < self.initial_size {
            return invalid(format!(
                "max_size {} is below initial_size {}",
                self.max_size, self.initial_size
            ));
        }
        if self.max_size > CARD_COUNT {
            return invalid(format!(
                "max_size {} exceeds the {CARD_COUNT}-card deck",
                self.max_size
            ));
        }
        Ok(())
    }
}
