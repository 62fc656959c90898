//! Memory-matching game.
//!
//! Sixteen face-down cards, eight identities. Reveal two at a time: a match
//! stays face up and scores a point, a mismatch flips back after a second.
//! The clock starts on load and stops when every pair is found; the fastest
//! time is kept in the persistent store.
//!
//! This module is the win detector and the popup/restart controller, and
//! the single entry point hosts talk to.

mod game;

pub use game::{MemoryGame, WinSummary};
