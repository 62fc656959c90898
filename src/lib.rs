//! # memory-match
//!
//! A memory-matching card game engine: sixteen face-down cards, revealed
//! two at a time. Matching pairs stay face up, a timer and score track the
//! run, and the best time persists across sessions.
//!
//! ## Design Principles
//!
//! 1. **Host-Agnostic**: The engine never touches a screen, a clock or a
//!    disk directly. Hosts forward clicks and elapsed time, and read back
//!    view models (`BoardView`, `Hud`).
//!
//! 2. **Deterministic**: Deals come from a seeded ChaCha8 RNG and time is a
//!    virtual clock, so every game can be replayed exactly.
//!
//! 3. **Generation-Guarded**: Every deal has a `Generation`. Timers and
//!    clicks from a previous deal are inert after a restart.
//!
//! ## Modules
//!
//! - `core`: Identifiers, RNG, configuration, virtual clock
//! - `cards`: Card definitions, instances and the catalog
//! - `deck`: Duplicate-and-shuffle deck builder
//! - `rules`: Match engine (flip/compare/lock state machine)
//! - `session`: Score, timer and best-time tracking
//! - `store`: Persistent key-value storage for the best time
//! - `view`: Board and HUD view models
//! - `events`: Event outbox for hosts
//! - `games`: The memory game itself

pub mod core;
pub mod cards;
pub mod deck;
pub mod rules;
pub mod session;
pub mod store;
pub mod view;
pub mod events;
pub mod games;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, GameConfig, GameRng, Generation, HostLayout, InstanceId, Scheduler, Task,
};

pub use crate::cards::{CardCatalog, CardDefinition, CardFace, CardId, CardInstance};

pub use crate::deck::{build_deal, Deal};

pub use crate::rules::{Click, ClickOutcome, IgnoreReason, MatchEngine, Selection};

pub use crate::session::{GameSession, SessionTracker};

pub use crate::store::{FileStore, KeyValueStore, MemoryStore, StoreError};

pub use crate::view::{BoardView, CardElement, Hud, Popup};

pub use crate::events::GameEvent;

pub use crate::games::memory::{MemoryGame, WinSummary};
