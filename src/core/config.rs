//! Game configuration.
//!
//! Hosts configure the engine at startup with a `GameConfig`:
//! - Timing of the ticker and the fixed UX delays
//! - Deal seed (or entropy)
//! - Which optional host displays exist (`HostLayout`)
//! - The persistent store key for the best time
//! - How many undrained events the outbox keeps

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Key under which the best time is persisted.
pub const BEST_TIME_KEY: &str = "bestTime";

/// Optional elements of the visual host.
///
/// A page without a best-time display or without a win popup still plays;
/// updates aimed at a missing element are dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostLayout {
    /// The host shows the persisted best time.
    pub best_time_display: bool,
    /// The host has a win popup.
    pub win_popup: bool,
}

impl Default for HostLayout {
    fn default() -> Self {
        Self {
            best_time_display: true,
            win_popup: true,
        }
    }
}

/// Invalid configuration values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid_columns must be at least 1")]
    ZeroColumns,

    #[error("tick_interval_ms must be at least 1")]
    ZeroTickInterval,
}

/// Complete configuration for a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Deal seed. `None` draws a seed from OS entropy.
    pub seed: Option<u64>,

    /// How long a mismatched pair stays face up before flipping back.
    pub mismatch_delay_ms: u64,

    /// Pause between the winning match and the popup.
    pub win_popup_delay_ms: u64,

    /// Elapsed-time ticker period.
    pub tick_interval_ms: u64,

    /// Columns in the text rendering of the board.
    pub grid_columns: usize,

    /// Persistent store key for the best time.
    pub best_time_key: String,

    /// Optional displays present in the host.
    pub layout: HostLayout,

    /// Events kept for the host between drains; older ones are evicted.
    pub event_capacity: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            mismatch_delay_ms: 1000,
            win_popup_delay_ms: 300,
            tick_interval_ms: 1000,
            grid_columns: 4,
            best_time_key: BEST_TIME_KEY.to_string(),
            layout: HostLayout::default(),
            event_capacity: 1024,
        }
    }
}

impl GameConfig {
    /// Set a fixed deal seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the host layout.
    #[must_use]
    pub fn with_layout(mut self, layout: HostLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Set the text grid width.
    #[must_use]
    pub fn with_grid_columns(mut self, columns: usize) -> Self {
        self.grid_columns = columns;
        self
    }

    /// Set how many undrained events are kept.
    #[must_use]
    pub fn with_event_capacity(mut self, capacity: usize) -> Self {
        self.event_capacity = capacity;
        self
    }

    /// Check values that would make the game unplayable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_columns == 0 {
            return Err(ConfigError::ZeroColumns);
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        Ok(())
    }

    #[must_use]
    pub fn mismatch_delay(&self) -> Duration {
        Duration::from_millis(self.mismatch_delay_ms)
    }

    #[must_use]
    pub fn win_popup_delay(&self) -> Duration {
        Duration::from_millis(self.win_popup_delay_ms)
    }

    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}
