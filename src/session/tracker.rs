//! Score, elapsed time and best-time persistence.

use serde::{Deserialize, Serialize};

use crate::store::KeyValueStore;
use crate::view::Hud;

/// Counters for the game in progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    pub score: u32,
    pub elapsed_seconds: u32,
    /// The elapsed-time ticker is counting.
    pub running: bool,
}

/// Tracks the session counters and the persisted best time.
///
/// Store failures never propagate: a best time that cannot be read is
/// treated as absent, and a failed write still improves the in-memory best.
#[derive(Debug)]
pub struct SessionTracker<S> {
    session: GameSession,
    best_time: Option<u32>,
    key: String,
    store: S,
}

impl<S: KeyValueStore> SessionTracker<S> {
    /// Create a tracker. The best time is not read until `load_best_time`.
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            session: GameSession::default(),
            best_time: None,
            key: key.into(),
            store,
        }
    }

    #[must_use]
    pub fn session(&self) -> GameSession {
        self.session
    }

    #[must_use]
    pub fn best_time(&self) -> Option<u32> {
        self.best_time
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Read the persisted best time and show it.
    pub fn load_best_time(&mut self, hud: &mut Hud) -> Option<u32> {
        self.best_time = match self.store.get(&self.key) {
            Ok(Some(raw)) => match raw.trim().parse::<u32>() {
                Ok(seconds) => Some(seconds),
                Err(err) => {
                    tracing::warn!(
                        key = %self.key,
                        value = %raw,
                        %err,
                        "ignoring unparsable best time"
                    );
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                tracing::warn!(key = %self.key, %err, "best time unavailable");
                None
            }
        };

        if let Some(best) = self.best_time {
            hud.set_best_time(best);
        }
        self.best_time
    }

    /// Start counting elapsed time.
    pub fn start(&mut self) {
        self.session.running = true;
    }

    /// Stop counting elapsed time.
    pub fn stop(&mut self) {
        self.session.running = false;
    }

    /// Zero the counters and stop. The best time is kept.
    pub fn reset(&mut self, hud: &mut Hud) {
        self.session = GameSession::default();
        hud.set_score(0);
        hud.set_elapsed(0);
    }

    /// One elapsed second. Returns the new elapsed time, or `None` when the
    /// session is not running.
    pub fn tick(&mut self, hud: &mut Hud) -> Option<u32> {
        if !self.session.running {
            return None;
        }
        self.session.elapsed_seconds += 1;
        hud.set_elapsed(self.session.elapsed_seconds);
        Some(self.session.elapsed_seconds)
    }

    /// One successful match. Returns the new score.
    pub fn record_match(&mut self, hud: &mut Hud) -> u32 {
        self.session.score += 1;
        hud.set_score(self.session.score);
        self.session.score
    }

    /// Record `elapsed` as the best time if there is none yet or it is
    /// strictly lower. Returns whether the best time changed.
    pub fn maybe_update_best_time(&mut self, elapsed: u32, hud: &mut Hud) -> bool {
        if self.best_time.is_some_and(|best| elapsed >= best) {
            return false;
        }

        self.best_time = Some(elapsed);
        if let Err(err) = self.store.set(&self.key, &elapsed.to_string()) {
            tracing::warn!(key = %self.key, %err, "failed to persist best time");
        }
        hud.set_best_time(elapsed);
        tracing::info!(best_seconds = elapsed, "new best time");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{HostLayout, BEST_TIME_KEY};
    use crate::store::{MemoryStore, Result as StoreResult, StoreError};

    fn setup(store: MemoryStore) -> (SessionTracker<MemoryStore>, Hud) {
        (
            SessionTracker::new(store, BEST_TIME_KEY),
            Hud::new(HostLayout::default()),
        )
    }

    /// Store whose every access fails.
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> StoreResult<Option<String>> {
            Err(StoreError::CorruptedData("unavailable".into()))
        }

        fn set(&mut self, _key: &str, _value: &str) -> StoreResult<()> {
            Err(StoreError::CorruptedData("unavailable".into()))
        }
    }

    #[test]
    fn test_load_best_time() {
        let (mut tracker, mut hud) = setup(MemoryStore::with_value(BEST_TIME_KEY, "42"));
        assert_eq!(tracker.load_best_time(&mut hud), Some(42));
        assert_eq!(hud.best_time.as_deref(), Some("42s"));
    }

    #[test]
    fn test_load_missing_or_garbage() {
        let (mut tracker, mut hud) = setup(MemoryStore::new());
        assert_eq!(tracker.load_best_time(&mut hud), None);
        assert_eq!(hud.best_time.as_deref(), Some(""));

        let (mut tracker, mut hud) = setup(MemoryStore::with_value(BEST_TIME_KEY, "soon"));
        assert_eq!(tracker.load_best_time(&mut hud), None);
    }

    #[test]
    fn test_tick_only_while_running() {
        let (mut tracker, mut hud) = setup(MemoryStore::new());
        assert_eq!(tracker.tick(&mut hud), None);

        tracker.start();
        tracker.tick(&mut hud);
        assert_eq!(tracker.tick(&mut hud), Some(2));
        assert_eq!(hud.timer, "2s");

        tracker.stop();
        assert_eq!(tracker.tick(&mut hud), None);
        assert_eq!(tracker.session().elapsed_seconds, 2);
    }

    #[test]
    fn test_record_match() {
        let (mut tracker, mut hud) = setup(MemoryStore::new());
        tracker.record_match(&mut hud);
        assert_eq!(tracker.record_match(&mut hud), 2);
        assert_eq!(hud.score, "2");
    }

    #[test]
    fn test_best_time_only_improves() {
        let (mut tracker, mut hud) = setup(MemoryStore::new());
        tracker.load_best_time(&mut hud);

        assert!(tracker.maybe_update_best_time(50, &mut hud));
        assert!(!tracker.maybe_update_best_time(50, &mut hud));
        assert!(!tracker.maybe_update_best_time(60, &mut hud));
        assert!(tracker.maybe_update_best_time(45, &mut hud));

        assert_eq!(tracker.best_time(), Some(45));
        assert_eq!(hud.best_time.as_deref(), Some("45s"));
        assert_eq!(
            tracker.store().get(BEST_TIME_KEY).unwrap().as_deref(),
            Some("45")
        );
    }

    #[test]
    fn test_reset_keeps_best() {
        let (mut tracker, mut hud) = setup(MemoryStore::new());
        tracker.start();
        tracker.tick(&mut hud);
        tracker.record_match(&mut hud);
        tracker.maybe_update_best_time(1, &mut hud);

        tracker.reset(&mut hud);
        assert_eq!(tracker.session(), GameSession::default());
        assert_eq!(hud.score, "0");
        assert_eq!(hud.timer, "0s");
        assert_eq!(tracker.best_time(), Some(1));
    }

    #[test]
    fn test_broken_store_degrades() {
        let mut tracker = SessionTracker::new(BrokenStore, BEST_TIME_KEY);
        let mut hud = Hud::new(HostLayout::default());

        assert_eq!(tracker.load_best_time(&mut hud), None);
        assert!(tracker.maybe_update_best_time(30, &mut hud));
        assert_eq!(tracker.best_time(), Some(30));
        assert_eq!(hud.best_time.as_deref(), Some("30s"));
    }
}
