//! Game bindings for Python.

use std::path::PathBuf;
use std::time::Duration;

use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;

use crate::core::GameConfig;
use crate::games::memory::MemoryGame;
use crate::rules::ClickOutcome;
use crate::store::{FileStore, KeyValueStore, MemoryStore};

type DynStore = Box<dyn KeyValueStore + Send>;

/// Python wrapper for MemoryGame.
#[pyclass(name = "MemoryGame")]
pub struct PyMemoryGame {
    game: MemoryGame<DynStore>,
}

#[pymethods]
impl PyMemoryGame {
    /// Create and load a new game.
    ///
    /// # Arguments
    /// - seed: RNG seed for deterministic deals (random if omitted)
    /// - store_path: JSON file for the best time (in-memory if omitted)
    /// - mismatch_delay_ms: how long a mismatched pair stays face up
    #[new]
    #[pyo3(signature = (seed = None, store_path = None, mismatch_delay_ms = 1000))]
    fn new(
        seed: Option<u64>,
        store_path: Option<PathBuf>,
        mismatch_delay_ms: u64,
    ) -> PyResult<Self> {
        let store: DynStore = match store_path {
            Some(path) => Box::new(
                FileStore::new(&path).map_err(|e| PyErr::new::<PyIOError, _>(e.to_string()))?,
            ),
            None => Box::new(MemoryStore::new()),
        };

        let config = GameConfig {
            seed,
            mismatch_delay_ms,
            ..GameConfig::default()
        };
        let game = MemoryGame::load(config, store)
            .map_err(|e| PyErr::new::<PyValueError, _>(e.to_string()))?;
        Ok(Self { game })
    }

    /// Click the card at `index`. Returns False if the click was ignored.
    fn click(&mut self, index: usize) -> bool {
        !matches!(self.game.click(index), ClickOutcome::Ignored(_))
    }

    /// Let `ms` milliseconds pass.
    fn advance_ms(&mut self, ms: u64) {
        self.game.advance(Duration::from_millis(ms));
    }

    /// Start a fresh deal.
    fn restart(&mut self) {
        self.game.restart();
    }

    /// Identity of each card, in board order.
    fn identities(&self) -> Vec<String> {
        self.game
            .board()
            .elements()
            .iter()
            .map(|e| e.identity.clone())
            .collect()
    }

    /// Face-up flag of each card.
    fn flipped(&self) -> Vec<bool> {
        self.game.board().elements().iter().map(|e| e.flipped).collect()
    }

    /// Matched flag of each card.
    fn matched(&self) -> Vec<bool> {
        self.game.board().elements().iter().map(|e| e.matched).collect()
    }

    /// Events since the last call, as JSON strings.
    fn drain_events(&mut self) -> PyResult<Vec<String>> {
        self.game
            .drain_events()
            .iter()
            .map(|event| {
                serde_json::to_string(event)
                    .map_err(|e| PyErr::new::<PyValueError, _>(e.to_string()))
            })
            .collect()
    }

    /// Popup messages `(time, best_time)` while the win popup is visible.
    fn popup(&self) -> Option<(String, String)> {
        self.game
            .hud()
            .popup
            .as_ref()
            .filter(|p| p.visible)
            .map(|p| (p.time_message.clone(), p.best_time_message.clone()))
    }

    #[getter]
    fn score(&self) -> u32 {
        self.game.session().score
    }

    #[getter]
    fn elapsed_seconds(&self) -> u32 {
        self.game.session().elapsed_seconds
    }

    /// Timer display text.
    #[getter]
    fn timer(&self) -> String {
        self.game.hud().timer.clone()
    }

    #[getter]
    fn best_time(&self) -> Option<u32> {
        self.game.best_time()
    }

    #[getter]
    fn is_won(&self) -> bool {
        self.game.is_won()
    }

    #[getter]
    fn generation(&self) -> u64 {
        self.game.generation().raw()
    }

    fn __str__(&self) -> String {
        self.game.board().to_string()
    }

    fn __repr__(&self) -> String {
        let session = self.game.session();
        format!(
            "MemoryGame(gen={}, score={}, elapsed={}s, status={})",
            self.game.generation().raw(),
            session.score,
            session.elapsed_seconds,
            if self.game.is_won() { "won" } else { "ongoing" }
        )
    }
}
