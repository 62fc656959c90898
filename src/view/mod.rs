//! Host-facing view models.
//!
//! - `BoardView`: one `CardElement` per placed card, routes clicks
//! - `Hud`: score, timer, best time, win popup
//!
//! Hosts read these after every call into the game and paint them however
//! they like (DOM, terminal, Python notebook).

pub mod board;
pub mod hud;

pub use board::{BoardView, CardElement};
pub use hud::{Hud, Popup};
