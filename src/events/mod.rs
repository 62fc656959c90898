//! Game events reported to the host.
//!
//! The engine records what happened during each host call (a click, a span
//! of elapsed time, a restart) in an outbox. Hosts drain it with
//! [`MemoryGame::drain_events`](crate::games::memory::MemoryGame::drain_events)
//! to drive animations or sounds; the board and HUD models already reflect
//! the same changes, so draining is optional. An undrained outbox keeps
//! only the most recent events (`GameConfig::event_capacity`).

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::core::{Generation, InstanceId};

/// Something observable that happened in the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new deal was rendered (load or restart).
    DealStarted { generation: Generation, size: usize },
    /// A card was flipped face up.
    CardRevealed { instance: InstanceId },
    /// Two revealed cards share an identity.
    PairMatched { first: InstanceId, second: InstanceId },
    /// Two revealed cards differ; they flip back after the mismatch delay.
    PairMismatched { first: InstanceId, second: InstanceId },
    /// A mismatched pair flipped back face down.
    PairHidden { first: InstanceId, second: InstanceId },
    /// The score changed.
    ScoreChanged { score: u32 },
    /// One elapsed second.
    TimerTicked { elapsed_seconds: u32 },
    /// A new best time was recorded.
    BestTimeImproved { best_seconds: u32 },
    /// Every card in the deal is matched.
    GameWon { elapsed_seconds: u32 },
    /// The win popup became visible.
    PopupShown,
    /// The game restarted and the popup, if any, was hidden.
    Restarted { generation: Generation },
}

/// Ordered event outbox holding at most `capacity` events.
///
/// Once full, each new event evicts the oldest one.
#[derive(Clone, Debug)]
pub struct EventLog {
    events: VecDeque<GameEvent>,
    capacity: usize,
    dropped: u64,
}

impl EventLog {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            events: VecDeque::new(),
            capacity,
            dropped: 0,
        }
    }

    /// Append an event, evicting the oldest if the log is full.
    pub fn push(&mut self, event: GameEvent) {
        if self.capacity == 0 {
            self.dropped += 1;
            return;
        }
        if self.events.len() == self.capacity {
            self.events.pop_front();
            self.dropped += 1;
        }
        self.events.push_back(event);
    }

    /// Take every recorded event, oldest first.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        if self.dropped > 0 {
            tracing::debug!(dropped = self.dropped, "event outbox overflowed since last drain");
            self.dropped = 0;
        }
        self.events.drain(..).collect()
    }

    /// Events recorded since the last drain, oldest first.
    pub fn pending(&self) -> impl Iterator<Item = &GameEvent> {
        self.events.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Events evicted since the last drain.
    #[must_use]
    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}
