//! Python bindings for the memory game.
//!
//! This module is a host binding: Python owns the event loop, forwards
//! clicks and elapsed time, and repaints from the board and HUD.
//!
//! # Quick Start
//!
//! ```python
//! import memory_match as mm
//!
//! game = mm.MemoryGame(seed=42, store_path="scores.json")
//!
//! game.click(0)
//! game.click(5)
//! game.advance_ms(1000)   # mismatches flip back, timer ticks
//!
//! print(game)             # text grid
//! print(game.score, game.timer, game.best_time)
//! ```

use pyo3::prelude::*;

mod py_game;

pub use py_game::*;

/// memory_match: a memory-matching card game engine.
#[pymodule]
fn memory_match(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyMemoryGame>()?;
    Ok(())
}
