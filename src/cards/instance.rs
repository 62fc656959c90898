//! Card instances - runtime card state.
//!
//! `CardInstance` is one placed card in the current deal. It is created by
//! the deck builder, flipped by the match engine, and thrown away on restart.
//!
//! ## Face States
//!
//! ```text
//! Hidden ──click──▶ Revealed ──pair matches──▶ Matched (terminal)
//!                      │
//!                      └──mismatch revert──▶ Hidden
//! ```

use serde::{Deserialize, Serialize};

use super::definition::CardId;
use crate::core::entity::InstanceId;

/// Which side of a card is showing, and whether it has been matched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardFace {
    /// Face down, clickable.
    #[default]
    Hidden,
    /// Face up and part of the pending pair.
    Revealed,
    /// Face up for the rest of the deal.
    Matched,
}

/// A card placed on the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardInstance {
    /// Board position, unique within a deal.
    pub id: InstanceId,

    /// Reference to the card definition.
    pub card_id: CardId,

    /// Current face state.
    pub face: CardFace,
}

impl CardInstance {
    /// Create a face-down card instance.
    #[must_use]
    pub fn new(id: InstanceId, card_id: CardId) -> Self {
        Self {
            id,
            card_id,
            face: CardFace::Hidden,
        }
    }

    /// Is the card image showing (pending or matched)?
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.face != CardFace::Hidden
    }

    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.face == CardFace::Matched
    }

    /// Is this card part of the pending pair?
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.face == CardFace::Revealed
    }

    /// Flip face up as part of the pending pair.
    pub fn reveal(&mut self) {
        debug_assert_eq!(self.face, CardFace::Hidden, "only hidden cards can be revealed");
        self.face = CardFace::Revealed;
    }

    /// Lock the card face up.
    pub fn mark_matched(&mut self) {
        self.face = CardFace::Matched;
    }

    /// Flip a pending card back down. Matched cards stay matched.
    pub fn hide(&mut self) {
        if self.face == CardFace::Revealed {
            self.face = CardFace::Hidden;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> CardInstance {
        CardInstance::new(InstanceId::new(4), CardId::new(2))
    }

    #[test]
    fn test_new_is_hidden() {
        let instance = card();
        assert_eq!(instance.face, CardFace::Hidden);
        assert!(!instance.is_revealed());
        assert!(!instance.is_matched());
        assert!(!instance.is_pending());
    }

    #[test]
    fn test_reveal_then_hide() {
        let mut instance = card();
        instance.reveal();
        assert!(instance.is_pending());
        assert!(instance.is_revealed());

        instance.hide();
        assert_eq!(instance.face, CardFace::Hidden);
    }

    #[test]
    fn test_matched_never_hides() {
        let mut instance = card();
        instance.reveal();
        instance.mark_matched();

        instance.hide();
        assert!(instance.is_matched());
        assert!(instance.is_revealed());
        assert!(!instance.is_pending());
    }

    #[test]
    fn test_card_instance_serialization() {
        let mut instance = card();
        instance.reveal();

        let json = serde_json::to_string(&instance).unwrap();
        let deserialized: CardInstance = serde_json::from_str(&json).unwrap();

        assert_eq!(instance, deserialized);
    }
}
