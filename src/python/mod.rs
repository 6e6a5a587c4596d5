//! Python bindings for the set-board engine.
//!
//! Lets a Python front end (pygame or otherwise) drive the board while
//! keeping rendering and input handling on its side.
//!
//! # Quick Start
//!
//! ```python
//! import set_board
//!
//! board = set_board.Board(seed=42)
//! for card in board.in_play():
//!     print(card.asset_name)
//!
//! hint = board.find_hint()
//! board.toggle_select(hint)
//! outcome = board.submit()   # "pending", "matched" or "rejected"
//! ```

use pyo3::prelude::*;

mod py_board;

pub use py_board::*;

/// set_board: board and deck state machine for the Set puzzle.
#[pymodule]
fn set_board(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCard>()?;
    m.add_class::<PyBoard>()?;
    Ok(())
}
