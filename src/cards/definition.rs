//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a card identity: its
//! name and the image shown when it is face up. Two placed cards share each
//! definition; their per-game state lives in `CardInstance`.

use serde::{Deserialize, Serialize};

/// Unique identifier for a card definition.
///
/// This identifies the identity ("card3"), not a placed card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use memory_match::cards::{CardDefinition, CardId};
///
/// let card = CardDefinition::new(CardId::new(3), "card3", "assets/card3.png");
///
/// assert_eq!(card.identity, "card3");
/// assert_eq!(card.image_path, "assets/card3.png");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique identifier for this card definition.
    pub id: CardId,

    /// Identity shared by the two matching cards. Also the face-up label.
    pub identity: String,

    /// Image shown on the face-up side.
    pub image_path: String,
}

impl CardDefinition {
    /// Create a new card definition.
    #[must_use]
    pub fn new(id: CardId, identity: impl Into<String>, image_path: impl Into<String>) -> Self {
        Self {
            id,
            identity: identity.into(),
            image_path: image_path.into(),
        }
    }
}
