//! The board state machine.
//!
//! `BoardEngine` owns one session: the deck, the undrawn pool, the cards
//! in play, the retired cards, the current selection and the counters.
//! Every mutation goes through `deal`, `submit` or one of the hint/extra
//! operations, and each leaves the three card partitions consistent.
//!
//! ## Lifecycle
//!
//! ```
//! use set_board::board::{BoardEngine, MatchOutcome};
//! use set_board::core::BoardConfig;
//! use set_board::rules::find_match;
//!
//! let mut board = BoardEngine::new(BoardConfig::default()).unwrap();
//! assert!(board.in_play().len() >= 12);
//!
//! let [i, j, k] = find_match(board.in_play()).unwrap();
//! for slot in [i, j, k] {
//!     let card = board.card_at(slot).unwrap();
//!     board.toggle_select(card).unwrap();
//! }
//! assert_eq!(board.submit(), MatchOutcome::Matched);
//! assert_eq!(board.matches_found(), 1);
//! ```

use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use tracing::{debug, info, instrument, trace, warn};

use super::outcome::{BoardPhase, DealPosition, HintOutcome, MatchOutcome};
use super::snapshot::BoardSnapshot;
use crate::cards::{Card, Deck};
use crate::core::{BoardConfig, BoardError, BoardResult, DrawSource, GameRng};
use crate::rules::{find_match, is_match};

/// One game session.
///
/// Generic over the draw source so tests can script the deal order.
/// Live games use `GameRng` seeded from `BoardConfig::seed`.
#[derive(Clone, Debug)]
pub struct BoardEngine<D: DrawSource = GameRng> {
    config: BoardConfig,
    deck: Deck,

    /// Cards not yet dealt, kept in deck order.
    undrawn: Vec<Card>,

    /// Cards on the board; index is the slot.
    in_play: Vec<Card>,

    /// Cards removed by confirmed Sets, in retirement order.
    retired: Vec<Card>,

    selection: SmallVec<[Card; 3]>,

    matches_found: u32,
    matches_rejected: u32,
    hints_used: u32,

    draw: D,
}

impl BoardEngine<GameRng> {
    /// Start a session dealt by a `GameRng` seeded from `config.seed`.
    pub fn new(config: BoardConfig) -> BoardResult<Self> {
        let rng = GameRng::new(config.seed);
        Self::with_draw(config, rng)
    }
}

impl<D: DrawSource> BoardEngine<D> {
    /// Start a session dealt by the given draw source.
    ///
    /// Validates the config and deals the initial board.
    pub fn with_draw(config: BoardConfig, draw: D) -> BoardResult<Self> {
        config.validate()?;

        let deck = Deck::standard();
        let undrawn = deck.cards().to_vec();
        let initial_size = config.initial_size;

        let mut engine = Self {
            config,
            deck,
            undrawn,
            in_play: Vec::with_capacity(21),
            retired: Vec::new(),
            selection: SmallVec::new(),
            matches_found: 0,
            matches_rejected: 0,
            hints_used: 0,
            draw,
        };

        engine.deal(initial_size, DealPosition::End)?;
        Ok(engine)
    }

    // === Dealing ===

    /// Deal `count` cards from the undrawn pool onto the board.
    ///
    /// All or nothing: if fewer than `count` cards remain, nothing is
    /// dealt and `DeckExhausted` is returned. With auto-growth enabled,
    /// the board is then grown until it holds a Set.
    #[instrument(skip(self), fields(board = self.in_play.len()))]
    pub fn deal(&mut self, count: usize, at: DealPosition) -> BoardResult<()> {
        let remaining = self.remaining_in_deck();
        if count > remaining {
            warn!(count, remaining, "deal refused: deck exhausted");
            return Err(BoardError::DeckExhausted {
                requested: count,
                remaining,
            });
        }

        let dealt = self.place(count, at);
        debug!(dealt, board = self.in_play.len(), "dealt cards");

        if self.config.auto_grow {
            self.grow();
        }
        debug_assert!(self.is_consistent());
        Ok(())
    }

    /// Deal a growth step by hand when the board has no Set.
    ///
    /// Returns `Ok(false)` without dealing if a Set is already on the
    /// board.
    #[instrument(skip(self))]
    pub fn deal_extra(&mut self) -> BoardResult<bool> {
        if self.has_match() {
            debug!("extra cards refused: board already has a Set");
            return Ok(false);
        }
        self.deal(self.config.growth_step, DealPosition::End)?;
        Ok(true)
    }

    /// Draw one card from the undrawn pool.
    fn draw_card(&mut self) -> Option<Card> {
        let bound = self.undrawn.len();
        if bound == 0 {
            return None;
        }

        let index = self.draw.next_index(bound);
        if index >= bound {
            warn!(index, bound, "draw source index out of range");
        }
        Some(self.undrawn.remove(index % bound))
    }

    /// Place up to `count` cards, stopping early if the deck runs out.
    ///
    /// Returns the number of cards placed.
    fn place(&mut self, count: usize, at: DealPosition) -> usize {
        let mut slot = match at {
            DealPosition::End => self.in_play.len(),
            DealPosition::Slot(i) => i.min(self.in_play.len()),
        };

        let mut placed = 0;
        for _ in 0..count {
            let Some(card) = self.draw_card() else {
                break;
            };
            self.in_play.insert(slot, card);
            slot += 1;
            placed += 1;
        }
        placed
    }

    /// Add growth steps until the board has a Set, the deck is empty, or
    /// the board reaches `max_size`.
    ///
    /// Returns the number of cards added.
    fn grow(&mut self) -> usize {
        let mut added = 0;
        while self.in_play.len() < self.config.max_size
            && !self.undrawn.is_empty()
            && !self.has_match()
        {
            let step = self
                .config
                .growth_step
                .min(self.config.max_size - self.in_play.len());
            added += self.place(step, DealPosition::End);
            debug!(board = self.in_play.len(), "no Set on board, grew");
        }
        added
    }

    // === Matching ===

    /// Check whether any three cards in play form a Set.
    #[must_use]
    pub fn has_match(&self) -> bool {
        find_match(&self.in_play).is_some()
    }

    /// A card from the first Set on the board that isn't selected yet.
    ///
    /// Returns `None` when there is no Set, or when all three cards of
    /// the first Set are already selected. Does not change the board.
    #[must_use]
    pub fn find_hint(&self) -> Option<Card> {
        let triple = find_match(&self.in_play)?;
        triple
            .into_iter()
            .map(|slot| self.in_play[slot])
            .find(|&card| !self.is_selected(card))
    }

    /// Spend a hint.
    ///
    /// Selects a card from a Set on the board. If the board has no Set, a
    /// growth step is dealt instead.
    #[instrument(skip(self))]
    pub fn request_hint(&mut self) -> HintOutcome {
        if let Some(limit) = self.config.hint_limit {
            if self.hints_used >= limit {
                debug!(limit, "hint refused: budget spent");
                return HintOutcome::NoHintsLeft;
            }
        }
        self.hints_used += 1;

        if !self.has_match() {
            if self.undrawn.is_empty() {
                return HintOutcome::NoMatch;
            }
            let dealt = self.place(self.config.growth_step, DealPosition::End);
            if self.config.auto_grow {
                self.grow();
            }
            debug!(dealt, "hint found no Set, dealt extra cards");
            return HintOutcome::Dealt(dealt);
        }

        match self.find_hint() {
            Some(card) => {
                self.selection.push(card);
                debug!(%card, "hint revealed");
                HintOutcome::Revealed(card)
            }
            None => HintOutcome::AlreadySelected,
        }
    }

    // === Selection ===

    /// Flip a card's selection.
    ///
    /// Returns whether the card is now selected.
    #[instrument(skip(self, card), fields(card = %card))]
    pub fn toggle_select(&mut self, card: Card) -> BoardResult<bool> {
        if !self.in_play.contains(&card) {
            warn!("toggle of a card not in play");
            return Err(BoardError::CardNotInPlay { card });
        }

        if let Some(pos) = self.selection.iter().position(|&c| c == card) {
            self.selection.remove(pos);
            trace!(selected = self.selection.len(), "deselected");
            Ok(false)
        } else {
            self.selection.push(card);
            trace!(selected = self.selection.len(), "selected");
            Ok(true)
        }
    }

    /// Deselect everything.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Evaluate the selection.
    ///
    /// Anything other than exactly three selected cards is `Pending` and
    /// changes nothing. A Set is retired, each vacated slot is refilled
    /// while the board is below `initial_size` and cards remain, and the
    /// board is grown if it no longer holds a Set. Either way the
    /// selection is cleared.
    #[instrument(skip(self))]
    pub fn submit(&mut self) -> MatchOutcome {
        if self.selection.len() != 3 {
            trace!(selected = self.selection.len(), "submit pending");
            return MatchOutcome::Pending;
        }

        let chosen = std::mem::take(&mut self.selection);
        if !is_match(chosen[0], chosen[1], chosen[2]) {
            self.matches_rejected += 1;
            debug!(rejected = self.matches_rejected, "not a Set");
            return MatchOutcome::Rejected;
        }

        self.matches_found += 1;
        for card in chosen {
            let Some(slot) = self.slot_of(card) else {
                continue;
            };
            self.in_play.remove(slot);
            self.retired.push(card);

            if self.in_play.len() < self.config.initial_size {
                self.place(1, DealPosition::Slot(slot));
            }
        }

        if self.config.auto_grow {
            self.grow();
        }

        debug!(
            found = self.matches_found,
            board = self.in_play.len(),
            remaining = self.remaining_in_deck(),
            "Set retired"
        );
        if self.is_won() {
            info!(
                found = self.matches_found,
                rejected = self.matches_rejected,
                "board cleared"
            );
        }
        debug_assert!(self.is_consistent());
        MatchOutcome::Matched
    }

    // === Session state ===

    /// True once every card is dealt and no Set remains on the board.
    #[must_use]
    pub fn is_won(&self) -> bool {
        !self.has_match() && self.in_play.len() + self.retired.len() == self.deck.len()
    }

    /// Current phase of the session.
    #[must_use]
    pub fn phase(&self) -> BoardPhase {
        if self.is_won() {
            BoardPhase::Won
        } else {
            BoardPhase::AwaitingSelection
        }
    }

    /// Cards not yet dealt.
    #[must_use]
    pub fn remaining_in_deck(&self) -> usize {
        self.deck.len() - self.in_play.len() - self.retired.len()
    }

    /// Check that undrawn, in-play and retired partition the deck and
    /// that the selection only holds cards in play.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let mut seen = FxHashSet::default();
        let all = self
            .undrawn
            .iter()
            .chain(&self.in_play)
            .chain(&self.retired);

        for &card in all {
            if !self.deck.contains(card) || !seen.insert(card) {
                return false;
            }
        }

        seen.len() == self.deck.len()
            && self.selection.iter().all(|card| self.in_play.contains(card))
    }

    // === Views ===

    /// Cards in play, in slot order.
    #[must_use]
    pub fn in_play(&self) -> &[Card] {
        &self.in_play
    }

    /// Card in the given slot.
    #[must_use]
    pub fn card_at(&self, slot: usize) -> Option<Card> {
        self.in_play.get(slot).copied()
    }

    /// Slot holding the given card.
    #[must_use]
    pub fn slot_of(&self, card: Card) -> Option<usize> {
        self.in_play.iter().position(|&c| c == card)
    }

    /// Retired cards, in retirement order.
    #[must_use]
    pub fn retired(&self) -> &[Card] {
        &self.retired
    }

    #[must_use]
    pub fn retired_count(&self) -> usize {
        self.retired.len()
    }

    /// Selected cards, in selection order.
    #[must_use]
    pub fn selected(&self) -> &[Card] {
        &self.selection
    }

    #[must_use]
    pub fn is_selected(&self, card: Card) -> bool {
        self.selection.contains(&card)
    }

    #[must_use]
    pub fn matches_found(&self) -> u32 {
        self.matches_found
    }

    #[must_use]
    pub fn matches_rejected(&self) -> u32 {
        self.matches_rejected
    }

    #[must_use]
    pub fn hints_used(&self) -> u32 {
        self.hints_used
    }

    /// Hints remaining, or `None` when unlimited.
    #[must_use]
    pub fn hints_left(&self) -> Option<u32> {
        self.config
            .hint_limit
            .map(|limit| limit.saturating_sub(self.hints_used))
    }

    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// The draw source, e.g. to capture `GameRng::state` for a replay.
    #[must_use]
    pub fn draw_source(&self) -> &D {
        &self.draw
    }

    /// Capture the board for rendering.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            in_play: self.in_play.clone(),
            selected: self.selection.to_vec(),
            retired: self.retired.len(),
            remaining: self.remaining_in_deck(),
            matches_found: self.matches_found,
            matches_rejected: self.matches_rejected,
            hints_left: self.hints_left(),
            phase: self.phase(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScriptedDraw;

    fn ordered(config: BoardConfig) -> BoardEngine<ScriptedDraw> {
        BoardEngine::with_draw(config, ScriptedDraw::in_order()).unwrap()
    }

    fn ordinal(n: usize) -> Card {
        Card::from_ordinal(n).unwrap()
    }

    fn select(engine: &mut BoardEngine<ScriptedDraw>, ordinals: &[usize]) {
        for &n in ordinals {
            assert!(engine.toggle_select(ordinal(n)).unwrap());
        }
    }

    #[test]
    fn test_in_order_deal() {
        let engine = ordered(BoardConfig::default());
        let expected: Vec<Card> = (0..12).map(ordinal).collect();
        assert_eq!(engine.in_play(), expected.as_slice());
        assert_eq!(engine.remaining_in_deck(), 69);
        assert!(engine.is_consistent());
    }

    #[test]
    fn test_deal_at_slot() {
        let mut engine = ordered(BoardConfig::default());
        engine.deal(2, DealPosition::Slot(1)).unwrap();
        assert_eq!(engine.card_at(0), Some(ordinal(0)));
        assert_eq!(engine.card_at(1), Some(ordinal(12)));
        assert_eq!(engine.card_at(2), Some(ordinal(13)));
        assert_eq!(engine.card_at(3), Some(ordinal(1)));
        assert_eq!(engine.in_play().len(), 14);
    }

    #[test]
    fn test_deal_slot_is_clamped() {
        let mut engine = ordered(BoardConfig::default());
        engine.deal(1, DealPosition::Slot(500)).unwrap();
        assert_eq!(engine.card_at(12), Some(ordinal(12)));
    }

    #[test]
    fn test_deal_exhausted_changes_nothing() {
        let mut engine = ordered(BoardConfig::default());
        let before = engine.snapshot();

        let err = engine.deal(70, DealPosition::End).unwrap_err();
        assert_eq!(
            err,
            BoardError::DeckExhausted {
                requested: 70,
                remaining: 69
            }
        );
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn test_replacements_fill_vacated_slots() {
        let mut engine = ordered(BoardConfig::default());
        select(&mut engine, &[0, 1, 2]);

        assert_eq!(engine.submit(), MatchOutcome::Matched);
        assert_eq!(engine.card_at(0), Some(ordinal(12)));
        assert_eq!(engine.card_at(1), Some(ordinal(13)));
        assert_eq!(engine.card_at(2), Some(ordinal(14)));
        assert_eq!(engine.card_at(3), Some(ordinal(3)));
        assert_eq!(engine.retired(), &[ordinal(0), ordinal(1), ordinal(2)]);
    }

    #[test]
    fn test_no_replacement_above_floor() {
        let mut engine = ordered(BoardConfig::default());
        engine.deal(3, DealPosition::End).unwrap();
        assert_eq!(engine.in_play().len(), 15);

        select(&mut engine, &[0, 1, 2]);
        assert_eq!(engine.submit(), MatchOutcome::Matched);
        assert_eq!(engine.in_play().len(), 12);
        assert_eq!(engine.remaining_in_deck(), 66);
        assert_eq!(engine.card_at(0), Some(ordinal(3)));
    }

    #[test]
    fn test_selection_order_does_not_matter() {
        let mut engine = ordered(BoardConfig::default());
        select(&mut engine, &[2, 0, 1]);
        assert_eq!(engine.submit(), MatchOutcome::Matched);
    }

    #[test]
    fn test_toggle_twice_deselects() {
        let mut engine = ordered(BoardConfig::default());
        assert!(engine.toggle_select(ordinal(5)).unwrap());
        assert!(!engine.toggle_select(ordinal(5)).unwrap());
        assert!(engine.selected().is_empty());
    }

    #[test]
    fn test_toggle_card_not_in_play() {
        let mut engine = ordered(BoardConfig::default());
        let card = ordinal(40);
        assert_eq!(
            engine.toggle_select(card),
            Err(BoardError::CardNotInPlay { card })
        );
    }

    #[test]
    fn test_more_than_three_selected_is_pending() {
        let mut engine = ordered(BoardConfig::default());
        select(&mut engine, &[0, 1, 2, 3]);
        assert_eq!(engine.submit(), MatchOutcome::Pending);
        assert_eq!(engine.selected().len(), 4);
    }

    #[test]
    fn test_find_hint_skips_selected() {
        let mut engine = ordered(BoardConfig::default());
        assert_eq!(engine.find_hint(), Some(ordinal(0)));

        engine.toggle_select(ordinal(0)).unwrap();
        assert_eq!(engine.find_hint(), Some(ordinal(1)));

        engine.toggle_select(ordinal(1)).unwrap();
        engine.toggle_select(ordinal(2)).unwrap();
        assert_eq!(engine.find_hint(), None);
    }

    #[test]
    fn test_request_hint_selects_and_spends_budget() {
        let config = BoardConfig::default().with_hint_limit(Some(2));
        let mut engine = ordered(config);

        assert_eq!(engine.request_hint(), HintOutcome::Revealed(ordinal(0)));
        assert!(engine.is_selected(ordinal(0)));
        assert_eq!(engine.request_hint(), HintOutcome::Revealed(ordinal(1)));
        assert_eq!(engine.hints_left(), Some(0));
        assert_eq!(engine.request_hint(), HintOutcome::NoHintsLeft);
        assert_eq!(engine.hints_used(), 2);
    }

    #[test]
    fn test_request_hint_all_selected() {
        let mut engine = ordered(BoardConfig::default().with_hint_limit(None));
        select(&mut engine, &[0, 1, 2]);
        assert_eq!(engine.request_hint(), HintOutcome::AlreadySelected);
        assert_eq!(engine.hints_left(), None);
    }

    #[test]
    fn test_small_initial_board_grows() {
        // Two cards can never hold a Set.
        let engine = ordered(BoardConfig::default().with_initial_size(2));
        assert_eq!(engine.in_play().len(), 5);
        assert!(engine.has_match());
    }

    #[test]
    fn test_phase_starts_awaiting_selection() {
        let engine = ordered(BoardConfig::default());
        assert_eq!(engine.phase(), BoardPhase::AwaitingSelection);
        assert!(!engine.is_won());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = BoardConfig::default().with_growth_step(0);
        let result = BoardEngine::with_draw(config, ScriptedDraw::in_order());
        assert!(matches!(result, Err(BoardError::InvalidConfig { .. })));
    }

    #[test]
    fn test_seeded_engines_match() {
        let a = BoardEngine::new(BoardConfig::default().with_seed(9)).unwrap();
        let b = BoardEngine::new(BoardConfig::default().with_seed(9)).unwrap();
        assert_eq!(a.in_play(), b.in_play());
        assert_eq!(a.draw_source().state(), b.draw_source().state());
        assert_eq!(a.draw_source().seed(), 9);
    }
}
