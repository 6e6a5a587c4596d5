//! Board and card bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::board::{BoardEngine, HintOutcome, MatchOutcome};
use crate::cards::{Attribute, Card};
use crate::core::{BoardConfig, BoardError};

fn to_py_err(err: BoardError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Python wrapper for Card.
#[pyclass(name = "Card")]
#[derive(Clone, Copy, Debug)]
pub struct PyCard(pub Card);

#[pymethods]
impl PyCard {
    /// Create a card from its deck ordinal (0-80).
    #[new]
    fn new(ordinal: usize) -> PyResult<Self> {
        Card::from_ordinal(ordinal)
            .map(Self)
            .ok_or_else(|| PyValueError::new_err(format!("no card with ordinal {ordinal}")))
    }

    #[getter]
    fn ordinal(&self) -> usize {
        self.0.ordinal()
    }

    #[getter]
    fn color(&self) -> &'static str {
        self.0.color.name()
    }

    #[getter]
    fn shape(&self) -> &'static str {
        self.0.shape.name()
    }

    #[getter]
    fn count(&self) -> u8 {
        self.0.count.value()
    }

    #[getter]
    fn shade(&self) -> &'static str {
        self.0.shade.name()
    }

    /// Image key, e.g. `greenovalfilled1`.
    #[getter]
    fn asset_name(&self) -> String {
        self.0.asset_name()
    }

    fn __repr__(&self) -> String {
        format!("Card({})", self.0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        self.0.ordinal() as u64
    }
}

/// Python wrapper for a seeded board session.
#[pyclass(name = "Board")]
pub struct PyBoard {
    inner: BoardEngine,
}

#[pymethods]
impl PyBoard {
    /// Start a session.
    #[new]
    #[pyo3(signature = (seed=42, auto_grow=true, hint_limit=Some(5)))]
    fn new(seed: u64, auto_grow: bool, hint_limit: Option<u32>) -> PyResult<Self> {
        let config = BoardConfig::default()
            .with_seed(seed)
            .with_auto_grow(auto_grow)
            .with_hint_limit(hint_limit);
        let inner = BoardEngine::new(config).map_err(to_py_err)?;
        Ok(Self { inner })
    }

    /// Cards in play, in slot order.
    fn in_play(&self) -> Vec<PyCard> {
        self.inner.in_play().iter().copied().map(PyCard).collect()
    }

    fn selected(&self) -> Vec<PyCard> {
        self.inner.selected().iter().copied().map(PyCard).collect()
    }

    /// Flip a card's selection; returns whether it is now selected.
    fn toggle_select(&mut self, card: PyCard) -> PyResult<bool> {
        self.inner.toggle_select(card.0).map_err(to_py_err)
    }

    /// Evaluate the selection: "pending", "matched" or "rejected".
    fn submit(&mut self) -> &'static str {
        match self.inner.submit() {
            MatchOutcome::Pending => "pending",
            MatchOutcome::Matched => "matched",
            MatchOutcome::Rejected => "rejected",
        }
    }

    fn find_hint(&self) -> Option<PyCard> {
        self.inner.find_hint().map(PyCard)
    }

    /// Spend a hint. Returns the revealed card, or `None` if no card was
    /// revealed (already selected, cards dealt, no Set, or budget spent).
    fn request_hint(&mut self) -> Option<PyCard> {
        match self.inner.request_hint() {
            HintOutcome::Revealed(card) => Some(PyCard(card)),
            _ => None,
        }
    }

    /// Deal extra cards if the board has no Set.
    fn deal_extra(&mut self) -> PyResult<bool> {
        self.inner.deal_extra().map_err(to_py_err)
    }

    fn has_match(&self) -> bool {
        self.inner.has_match()
    }

    fn is_won(&self) -> bool {
        self.inner.is_won()
    }

    #[getter]
    fn remaining_in_deck(&self) -> usize {
        self.inner.remaining_in_deck()
    }

    #[getter]
    fn retired_count(&self) -> usize {
        self.inner.retired_count()
    }

    #[getter]
    fn matches_found(&self) -> u32 {
        self.inner.matches_found()
    }

    #[getter]
    fn matches_rejected(&self) -> u32 {
        self.inner.matches_rejected()
    }

    #[getter]
    fn hints_left(&self) -> Option<u32> {
        self.inner.hints_left()
    }

    fn __repr__(&self) -> String {
        format!(
            "Board(in_play={}, remaining={}, found={})",
            self.inner.in_play().len(),
            self.inner.remaining_in_deck(),
            self.inner.matches_found()
        )
    }
}
