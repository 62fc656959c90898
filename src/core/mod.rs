//! Core engine types: identifiers, RNG, configuration, virtual clock.
//!
//! Nothing here knows about cards or scoring. Higher layers build the game
//! on top of these pieces.

pub mod entity;
pub mod rng;
pub mod config;
pub mod clock;

pub use entity::{Generation, InstanceId};
pub use rng::GameRng;
pub use config::{ConfigError, GameConfig, HostLayout, BEST_TIME_KEY};
pub use clock::{FiredTask, Scheduler, Task, TaskId};
