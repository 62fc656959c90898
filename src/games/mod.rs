//! Game implementations built on the engine.
//!
//! - `memory`: the memory-matching game

pub mod memory;
