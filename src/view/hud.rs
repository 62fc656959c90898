//! Text displays and the win popup.

use serde::{Deserialize, Serialize};

use crate::core::HostLayout;

/// The win summary popup.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Popup {
    pub visible: bool,
    pub time_message: String,
    pub best_time_message: String,
}

/// Score, timer, best time and popup as the host shows them.
///
/// Optional elements that the host lacks (`HostLayout`) are `None` and
/// updates aimed at them are dropped.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hud {
    pub score: String,
    pub timer: String,
    pub best_time: Option<String>,
    pub popup: Option<Popup>,
}

impl Hud {
    /// Fresh displays for a new game.
    #[must_use]
    pub fn new(layout: HostLayout) -> Self {
        Self {
            score: "0".to_string(),
            timer: "0s".to_string(),
            best_time: layout.best_time_display.then(String::new),
            popup: layout.win_popup.then(Popup::default),
        }
    }

    pub fn set_score(&mut self, score: u32) {
        self.score = score.to_string();
    }

    pub fn set_elapsed(&mut self, seconds: u32) {
        self.timer = format!("{seconds}s");
    }

    pub fn set_best_time(&mut self, seconds: u32) {
        if let Some(best) = self.best_time.as_mut() {
            *best = format!("{seconds}s");
        }
    }

    /// Fill in and show the popup. Returns `false` if the host has none.
    ///
    /// The second line reads `"New Best Time!"` when this run set the best
    /// (or no best is known), instead of repeating the run's own time as
    /// `"Best Time: {t}s"`. Otherwise it shows the standing best.
    pub fn show_popup(&mut self, elapsed_seconds: u32, best: Option<u32>, new_best: bool) -> bool {
        let Some(popup) = self.popup.as_mut() else {
            return false;
        };
        popup.time_message = format!("Your Time: {elapsed_seconds}s");
        popup.best_time_message = match best {
            Some(best) if !new_best => format!("Best Time: {best}s"),
            _ => "New Best Time!".to_string(),
        };
        popup.visible = true;
        true
    }

    pub fn hide_popup(&mut self) {
        if let Some(popup) = self.popup.as_mut() {
            popup.visible = false;
        }
    }

    #[must_use]
    pub fn popup_visible(&self) -> bool {
        self.popup.as_ref().is_some_and(|p| p.visible)
    }
}
