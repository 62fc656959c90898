//! Match engine: the flip/compare/lock state machine.
//!
//! Each card moves `Hidden → Revealed → {Matched | Hidden}`. Globally the
//! engine is in one of three `Selection` states:
//! - `None`: next click starts a pair
//! - `OnePending`: next click completes the pair and evaluates it
//! - `Locked`: a mismatched pair is showing; every click is ignored
//!
//! At most one pair is ever being evaluated.

pub mod engine;

pub use engine::{Click, ClickOutcome, IgnoreReason, MatchEngine, Selection};
