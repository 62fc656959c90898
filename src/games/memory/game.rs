//! Memory game: wires deal, board, match engine, session and timers.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cards::CardCatalog;
use crate::core::{
    ConfigError, FiredTask, GameConfig, GameRng, Generation, Scheduler, Task, TaskId,
};
use crate::deck::{build_deal, Deal};
use crate::events::{EventLog, GameEvent};
use crate::rules::{Click, ClickOutcome, IgnoreReason, MatchEngine, Selection};
use crate::session::{GameSession, SessionTracker};
use crate::store::{KeyValueStore, MemoryStore};
use crate::view::{BoardView, Hud};

/// Outcome of a finished deal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinSummary {
    pub elapsed_seconds: u32,
    /// Best time after this win was recorded.
    pub best_seconds: Option<u32>,
    /// This win set the best time.
    pub new_best: bool,
}

/// A complete memory game.
///
/// The host forwards clicks with [`click`](Self::click) and elapsed wall
/// time with [`advance`](Self::advance), then repaints from
/// [`board`](Self::board) and [`hud`](Self::hud).
///
/// ```
/// use std::time::Duration;
/// use memory_match::core::GameConfig;
/// use memory_match::games::memory::MemoryGame;
/// use memory_match::store::MemoryStore;
///
/// let config = GameConfig::default().with_seed(1);
/// let mut game = MemoryGame::load(config, MemoryStore::new()).unwrap();
/// assert_eq!(game.board().len(), 16);
///
/// game.advance(Duration::from_secs(3));
/// assert_eq!(game.hud().timer, "3s");
/// ```
pub struct MemoryGame<S: KeyValueStore = MemoryStore> {
    config: GameConfig,
    catalog: CardCatalog,
    rng: GameRng,
    clock: Scheduler,
    engine: MatchEngine,
    board: BoardView,
    hud: Hud,
    tracker: SessionTracker<S>,
    ticker: Option<TaskId>,
    win: Option<WinSummary>,
    events: EventLog,
}

impl<S: KeyValueStore> MemoryGame<S> {
    /// Start a game with the standard eight-card catalog.
    ///
    /// Builds and renders the first deal, starts the ticker, and shows any
    /// persisted best time.
    pub fn load(config: GameConfig, store: S) -> Result<Self, ConfigError> {
        Self::with_catalog(config, CardCatalog::standard(), store)
    }

    /// Start a game with a custom catalog.
    pub fn with_catalog(
        config: GameConfig,
        catalog: CardCatalog,
        store: S,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = GameRng::from_seed_or_entropy(config.seed);
        let deal = build_deal(&catalog, &mut rng, Generation::initial());
        Ok(Self::start(config, catalog, rng, deal, store))
    }

    /// Start a game on a fixed, unshuffled deal.
    ///
    /// The deal's card ids must come from `catalog`. Restarts still shuffle.
    pub fn with_deal(
        config: GameConfig,
        catalog: CardCatalog,
        deal: Deal,
        store: S,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let rng = GameRng::from_seed_or_entropy(config.seed);
        Ok(Self::start(config, catalog, rng, deal, store))
    }

    fn start(
        config: GameConfig,
        catalog: CardCatalog,
        rng: GameRng,
        deal: Deal,
        store: S,
    ) -> Self {
        let events = EventLog::new(config.event_capacity);
        let mut hud = Hud::new(config.layout);
        let mut tracker = SessionTracker::new(store, config.best_time_key.clone());
        tracker.load_best_time(&mut hud);

        let board = BoardView::render(&deal, &catalog, config.grid_columns);
        let mut game = Self {
            config,
            catalog,
            rng,
            clock: Scheduler::new(),
            engine: MatchEngine::new(deal),
            board,
            hud,
            tracker,
            ticker: None,
            win: None,
            events,
        };

        game.events.push(GameEvent::DealStarted {
            generation: game.generation(),
            size: game.board.len(),
        });
        game.start_ticker();
        tracing::info!(
            seed = game.rng.seed(),
            cards = game.board.len(),
            best = ?game.tracker.best_time(),
            "memory game loaded"
        );
        game
    }

    // === Host input ===

    /// Click the card at board position `index`.
    pub fn click(&mut self, index: usize) -> ClickOutcome {
        match self.board.route_click(index) {
            Some(click) => self.click_routed(click),
            None => ClickOutcome::Ignored(IgnoreReason::UnknownInstance),
        }
    }

    /// Process a click produced by [`BoardView::route_click`].
    ///
    /// Clicks routed through a board from before the last restart are
    /// ignored.
    pub fn click_routed(&mut self, click: Click) -> ClickOutcome {
        let outcome = self.engine.click(click);
        match outcome {
            ClickOutcome::Ignored(reason) => {
                tracing::debug!(instance = %click.instance, ?reason, "click ignored");
                return outcome;
            }
            ClickOutcome::FirstSelected(instance) => {
                self.events.push(GameEvent::CardRevealed { instance });
            }
            ClickOutcome::Matched { first, second } => {
                self.events.push(GameEvent::CardRevealed { instance: second });
                self.events.push(GameEvent::PairMatched { first, second });
                let score = self.tracker.record_match(&mut self.hud);
                self.events.push(GameEvent::ScoreChanged { score });
                self.check_win();
            }
            ClickOutcome::Mismatched { first, second } => {
                self.events.push(GameEvent::CardRevealed { instance: second });
                self.events.push(GameEvent::PairMismatched { first, second });
                self.clock.schedule_once(
                    self.config.mismatch_delay(),
                    self.generation(),
                    Task::RevertMismatch { first, second },
                );
            }
        }
        self.board.sync(self.engine.deal());
        outcome
    }

    /// Let `elapsed` of wall time pass, firing every task that comes due.
    pub fn advance(&mut self, elapsed: Duration) {
        let target = self.clock.now() + elapsed;
        while let Some(fired) = self.clock.pop_due(target) {
            self.run_task(fired);
        }
        self.clock.advance_to(target);
    }

    fn run_task(&mut self, fired: FiredTask) {
        if fired.generation != self.generation() {
            tracing::debug!(
                task = ?fired.task,
                task_generation = %fired.generation,
                current = %self.generation(),
                "dropping task from a previous deal"
            );
            return;
        }

        match fired.task {
            Task::Tick => {
                if let Some(elapsed_seconds) = self.tracker.tick(&mut self.hud) {
                    self.events.push(GameEvent::TimerTicked { elapsed_seconds });
                }
            }
            Task::RevertMismatch { first, second } => {
                if self.engine.revert_mismatch(fired.generation, first, second) {
                    self.board.sync(self.engine.deal());
                    self.events.push(GameEvent::PairHidden { first, second });
                }
            }
            Task::ShowWinPopup { elapsed_seconds } => {
                let (best, new_best) = self
                    .win
                    .map_or((self.tracker.best_time(), false), |w| (w.best_seconds, w.new_best));
                if self.hud.show_popup(elapsed_seconds, best, new_best) {
                    self.events.push(GameEvent::PopupShown);
                }
            }
        }
    }

    // === Win detection and restart ===

    /// Finish the deal if every card is matched.
    ///
    /// Stops the ticker, records the best time and schedules the popup.
    /// Fires at most once per deal; returns whether it fired now.
    pub fn check_win(&mut self) -> bool {
        if self.win.is_some() || !self.engine.is_complete() {
            return false;
        }

        self.stop_ticker();
        let elapsed_seconds = self.tracker.session().elapsed_seconds;
        let new_best = self
            .tracker
            .maybe_update_best_time(elapsed_seconds, &mut self.hud);
        let summary = WinSummary {
            elapsed_seconds,
            best_seconds: self.tracker.best_time(),
            new_best,
        };
        self.win = Some(summary);

        self.events.push(GameEvent::GameWon { elapsed_seconds });
        if new_best {
            self.events.push(GameEvent::BestTimeImproved {
                best_seconds: elapsed_seconds,
            });
        }
        self.clock.schedule_once(
            self.config.win_popup_delay(),
            self.generation(),
            Task::ShowWinPopup { elapsed_seconds },
        );
        tracing::info!(elapsed_seconds, new_best, "deal complete");
        true
    }

    /// Throw away the current deal and start a fresh one.
    ///
    /// Tasks scheduled for the old deal stay queued but no longer apply.
    pub fn restart(&mut self) {
        let generation = self.generation().next();

        self.stop_ticker();
        self.tracker.reset(&mut self.hud);

        let deal = build_deal(&self.catalog, &mut self.rng, generation);
        self.engine.reset(deal);
        self.board = BoardView::render(self.engine.deal(), &self.catalog, self.config.grid_columns);
        self.hud.hide_popup();
        self.win = None;

        self.events.push(GameEvent::Restarted { generation });
        self.events.push(GameEvent::DealStarted {
            generation,
            size: self.board.len(),
        });
        self.start_ticker();
        tracing::info!(%generation, "game restarted");
    }

    fn start_ticker(&mut self) {
        self.stop_ticker();
        let id = self
            .clock
            .schedule_repeating(self.config.tick_interval(), self.generation(), Task::Tick);
        self.ticker = Some(id);
        self.tracker.start();
        tracing::debug!(generation = %self.generation(), "ticker started");
    }

    fn stop_ticker(&mut self) {
        if let Some(id) = self.ticker.take() {
            self.clock.cancel(id);
        }
        self.tracker.stop();
    }

    // === Host output ===

    #[must_use]
    pub fn board(&self) -> &BoardView {
        &self.board
    }

    #[must_use]
    pub fn hud(&self) -> &Hud {
        &self.hud
    }

    /// Take the events recorded since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain()
    }

    // === Inspection ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn deal(&self) -> &Deal {
        self.engine.deal()
    }

    #[must_use]
    pub fn generation(&self) -> Generation {
        self.engine.generation()
    }

    #[must_use]
    pub fn selection(&self) -> Selection {
        self.engine.selection()
    }

    #[must_use]
    pub fn session(&self) -> GameSession {
        self.tracker.session()
    }

    #[must_use]
    pub fn best_time(&self) -> Option<u32> {
        self.tracker.best_time()
    }

    /// Summary of the finished deal, if it is won.
    #[must_use]
    pub fn win(&self) -> Option<WinSummary> {
        self.win
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.win.is_some()
    }

    /// Virtual time since load.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.clock.now()
    }

    /// Tasks waiting on the clock, including inert ones from old deals.
    #[must_use]
    pub fn pending_tasks(&self) -> usize {
        self.clock.pending()
    }

    #[must_use]
    pub fn store(&self) -> &S {
        self.tracker.store()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;

    /// 0,1 = card1; 2,3 = card2.
    fn two_pair_game() -> MemoryGame {
        let ids = [1, 1, 2, 2].map(CardId::new);
        MemoryGame::with_deal(
            GameConfig::default().with_seed(3),
            CardCatalog::standard(),
            Deal::from_card_ids(&ids, Generation::initial()),
            MemoryStore::new(),
        )
        .unwrap()
    }

    #[test]
    fn test_load_renders_and_ticks() {
        let config = GameConfig::default().with_seed(9);
        let mut game = MemoryGame::load(config, MemoryStore::new()).unwrap();

        assert_eq!(game.board().len(), 16);
        assert!(game.session().running);
        assert_eq!(
            game.drain_events(),
            vec![GameEvent::DealStarted {
                generation: Generation::initial(),
                size: 16
            }]
        );

        game.advance(Duration::from_millis(2500));
        assert_eq!(game.session().elapsed_seconds, 2);
        assert_eq!(game.hud().timer, "2s");
    }

    #[test]
    fn test_undrained_events_stay_bounded() {
        let config = GameConfig::default().with_seed(9).with_event_capacity(64);
        let mut game = MemoryGame::load(config, MemoryStore::new()).unwrap();

        game.advance(Duration::from_secs(24 * 60 * 60));

        let events = game.drain_events();
        assert_eq!(events.len(), 64);
        assert_eq!(
            events.last(),
            Some(&GameEvent::TimerTicked {
                elapsed_seconds: 86_400
            })
        );
        assert!(game.drain_events().is_empty());
    }

    #[test]
    fn test_invalid_config() {
        let config = GameConfig::default().with_grid_columns(0);
        assert_eq!(
            MemoryGame::load(config, MemoryStore::new()).err(),
            Some(ConfigError::ZeroColumns)
        );
    }

    #[test]
    fn test_click_out_of_range() {
        let mut game = two_pair_game();
        assert_eq!(
            game.click(4),
            ClickOutcome::Ignored(IgnoreReason::UnknownInstance)
        );
    }

    #[test]
    fn test_win_stops_ticker_and_shows_popup() {
        let mut game = two_pair_game();
        game.advance(Duration::from_secs(5));

        game.click(0);
        game.click(1);
        assert!(!game.is_won());
        game.click(2);
        game.click(3);

        assert!(game.is_won());
        assert!(!game.session().running);
        assert_eq!(
            game.win(),
            Some(WinSummary {
                elapsed_seconds: 5,
                best_seconds: Some(5),
                new_best: true
            })
        );

        // Popup waits for the settle delay.
        assert!(!game.hud().popup_visible());
        game.advance(Duration::from_millis(300));
        assert!(game.hud().popup_visible());
        let popup = game.hud().popup.clone().unwrap();
        assert_eq!(popup.time_message, "Your Time: 5s");
        assert_eq!(popup.best_time_message, "New Best Time!");

        // Timer is frozen.
        game.advance(Duration::from_secs(10));
        assert_eq!(game.hud().timer, "5s");
    }

    #[test]
    fn test_check_win_fires_once() {
        let mut game = two_pair_game();
        for i in 0..4 {
            game.click(i);
        }
        assert!(game.is_won());
        assert!(!game.check_win());

        let wins = game
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, GameEvent::GameWon { .. }))
            .count();
        assert_eq!(wins, 1);
    }

    #[test]
    fn test_restart_supersedes_everything() {
        let mut game = two_pair_game();
        game.advance(Duration::from_secs(2));
        game.click(0);
        game.click(2);
        assert!(matches!(game.selection(), Selection::Locked(..)));

        game.restart();

        assert_eq!(game.generation(), Generation(1));
        assert_eq!(game.selection(), Selection::None);
        assert_eq!(game.session().score, 0);
        assert_eq!(game.session().elapsed_seconds, 0);
        assert_eq!(game.hud().timer, "0s");
        assert!(game.board().elements().iter().all(|e| !e.flipped));
        assert_eq!(game.board().len(), 16);

        game.advance(Duration::from_secs(1));
        assert_eq!(game.session().elapsed_seconds, 1);
    }
}
