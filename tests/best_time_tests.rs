//! Best-time persistence tests.

use std::time::Duration;

use memory_match::core::{GameConfig, BEST_TIME_KEY};
use memory_match::events::GameEvent;
use memory_match::games::memory::MemoryGame;
use memory_match::store::{FileStore, KeyValueStore, MemoryStore};
use proptest::prelude::*;
use tempfile::TempDir;

fn solve<S: KeyValueStore>(game: &mut MemoryGame<S>) {
    for n in 1..=8 {
        let identity = format!("card{n}");
        let positions: Vec<usize> = game
            .board()
            .elements()
            .iter()
            .enumerate()
            .filter(|(_, e)| e.identity == identity)
            .map(|(i, _)| i)
            .collect();
        game.click(positions[0]);
        game.click(positions[1]);
    }
}

/// Play one deal to completion in `seconds`, then let the popup show.
fn play_in<S: KeyValueStore>(game: &mut MemoryGame<S>, seconds: u64) {
    game.advance(Duration::from_secs(seconds));
    solve(game);
    game.advance(Duration::from_millis(300));
}

#[test]
fn test_best_time_survives_reload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("memory").join("best.json");

    {
        let store = FileStore::new(&path).unwrap();
        let mut game = MemoryGame::load(GameConfig::default().with_seed(1), store).unwrap();
        assert_eq!(game.best_time(), None);
        play_in(&mut game, 42);
        assert_eq!(game.best_time(), Some(42));
    }

    let store = FileStore::new(&path).unwrap();
    assert_eq!(store.get(BEST_TIME_KEY).unwrap().as_deref(), Some("42"));

    let game = MemoryGame::load(GameConfig::default().with_seed(2), store).unwrap();
    assert_eq!(game.best_time(), Some(42));
    assert_eq!(game.hud().best_time.as_deref(), Some("42s"));
}

#[test]
fn test_slower_run_keeps_best() {
    let store = MemoryStore::with_value(BEST_TIME_KEY, "30");
    let mut game = MemoryGame::load(GameConfig::default().with_seed(3), store).unwrap();
    assert_eq!(game.hud().best_time.as_deref(), Some("30s"));

    play_in(&mut game, 45);

    assert_eq!(game.best_time(), Some(30));
    assert_eq!(game.store().get(BEST_TIME_KEY).unwrap().as_deref(), Some("30"));
    let popup = game.hud().popup.clone().unwrap();
    assert_eq!(popup.time_message, "Your Time: 45s");
    assert_eq!(popup.best_time_message, "Best Time: 30s");
    assert!(!game
        .drain_events()
        .iter()
        .any(|e| matches!(e, GameEvent::BestTimeImproved { .. })));
}

#[test]
fn test_equal_time_is_not_an_improvement() {
    let store = MemoryStore::with_value(BEST_TIME_KEY, "10");
    let mut game = MemoryGame::load(GameConfig::default().with_seed(4), store).unwrap();

    play_in(&mut game, 10);

    assert_eq!(game.win().map(|w| w.new_best), Some(false));
    assert_eq!(
        game.hud().popup.as_ref().unwrap().best_time_message,
        "Best Time: 10s"
    );
}

#[test]
fn test_faster_run_replaces_best() {
    let store = MemoryStore::with_value(BEST_TIME_KEY, "30");
    let mut game = MemoryGame::load(GameConfig::default().with_seed(5), store).unwrap();

    play_in(&mut game, 20);

    assert_eq!(game.best_time(), Some(20));
    assert_eq!(game.store().get(BEST_TIME_KEY).unwrap().as_deref(), Some("20"));
    assert_eq!(game.hud().best_time.as_deref(), Some("20s"));
    assert_eq!(
        game.hud().popup.as_ref().unwrap().best_time_message,
        "New Best Time!"
    );
    assert!(game
        .drain_events()
        .contains(&GameEvent::BestTimeImproved { best_seconds: 20 }));
}

#[test]
fn test_garbage_stored_value_is_ignored() {
    let store = MemoryStore::with_value(BEST_TIME_KEY, "fast");
    let mut game = MemoryGame::load(GameConfig::default().with_seed(6), store).unwrap();
    assert_eq!(game.best_time(), None);
    assert_eq!(game.hud().best_time.as_deref(), Some(""));

    play_in(&mut game, 7);
    assert_eq!(game.best_time(), Some(7));
    assert_eq!(game.store().get(BEST_TIME_KEY).unwrap().as_deref(), Some("7"));
}

#[test]
fn test_corrupted_file_does_not_block_play() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("best.json");
    std::fs::write(&path, "not json").unwrap();

    let store = FileStore::new(&path).unwrap();
    let mut game = MemoryGame::load(GameConfig::default().with_seed(7), store).unwrap();
    assert_eq!(game.best_time(), None);

    play_in(&mut game, 9);
    assert!(game.is_won());
    assert_eq!(game.best_time(), Some(9));

    // The unreadable file was replaced with the new best.
    let reopened = FileStore::new(&path).unwrap();
    assert_eq!(reopened.get(BEST_TIME_KEY).unwrap().as_deref(), Some("9"));

    let game = MemoryGame::load(GameConfig::default().with_seed(8), reopened).unwrap();
    assert_eq!(game.best_time(), Some(9));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Over any sequence of runs the stored best is the minimum so far.
    #[test]
    fn prop_best_time_never_increases(times in prop::collection::vec(0u64..120, 1..6)) {
        let config = GameConfig::default().with_seed(8);
        let mut game = MemoryGame::load(config, MemoryStore::new()).unwrap();
        let mut expected: Option<u64> = None;

        for seconds in times {
            game.restart();
            play_in(&mut game, seconds);

            let min = expected.map_or(seconds, |best| best.min(seconds));
            expected = Some(min);
            prop_assert_eq!(game.best_time().map(u64::from), expected);
            prop_assert_eq!(
                game.store().get(BEST_TIME_KEY).unwrap(),
                expected.map(|b| b.to_string())
            );
        }
    }
}
