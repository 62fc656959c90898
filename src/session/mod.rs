//! Session tracking: score, elapsed time, best time.

pub mod tracker;

pub use tracker::{GameSession, SessionTracker};
