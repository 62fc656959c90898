//! Card catalog for definition lookup.
//!
//! The `CardCatalog` holds every card identity that can be dealt. The game
//! ships a fixed catalog of eight cards (`CardCatalog::standard`); tests and
//! alternative hosts can register their own.

use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, CardId};

/// Image on the face-down side of every card.
pub const LOGO_IMAGE: &str = "assets/smart-logo.png";

/// Number of identities in the standard catalog.
pub const STANDARD_CARD_COUNT: u32 = 8;

/// Registry of card definitions in registration order.
///
/// ## Example
///
/// ```
/// use memory_match::cards::{CardCatalog, CardId};
///
/// let catalog = CardCatalog::standard();
/// assert_eq!(catalog.len(), 8);
///
/// let card = catalog.get(CardId::new(3)).unwrap();
/// assert_eq!(card.identity, "card3");
/// assert_eq!(card.image_path, "assets/card3.png");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: Vec<CardDefinition>,
    by_id: FxHashMap<CardId, usize>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in catalog: `card1`..`card8`.
    #[must_use]
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        for n in 1..=STANDARD_CARD_COUNT {
            catalog.register(CardDefinition::new(
                CardId::new(n),
                format!("card{n}"),
                format!("assets/card{n}.png"),
            ));
        }
        catalog
    }

    /// Register a card definition.
    ///
    /// Panics if the ID or the identity is already registered.
    pub fn register(&mut self, card: CardDefinition) {
        if self.by_id.contains_key(&card.id) {
            panic!("Card with ID {:?} already registered", card.id);
        }
        if self.cards.iter().any(|c| c.identity == card.identity) {
            panic!("Card identity {:?} already registered", card.identity);
        }
        self.by_id.insert(card.id, self.cards.len());
        self.cards.push(card);
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardDefinition> {
        self.by_id.get(&id).map(|&i| &self.cards[i])
    }

    /// Find a card definition by identity.
    #[must_use]
    pub fn find_identity(&self, identity: &str) -> Option<&CardDefinition> {
        self.cards.iter().find(|c| c.identity == identity)
    }

    /// Identity of a card, or `"?"` for an unregistered ID.
    #[must_use]
    pub fn identity_of(&self, id: CardId) -> &str {
        self.get(id).map_or("?", |c| c.identity.as_str())
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.by_id.contains_key(&id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog() {
        let catalog = CardCatalog::standard();

        assert_eq!(catalog.len(), 8);
        let identities: Vec<_> = catalog.iter().map(|c| c.identity.as_str()).collect();
        assert_eq!(
            identities,
            vec!["card1", "card2", "card3", "card4", "card5", "card6", "card7", "card8"]
        );
        assert_eq!(
            catalog.find_identity("card8").map(|c| c.image_path.as_str()),
            Some("assets/card8.png")
        );
    }

    #[test]
    fn test_register_and_get() {
        let mut catalog = CardCatalog::new();
        catalog.register(CardDefinition::new(CardId::new(10), "star", "star.png"));

        assert!(catalog.contains(CardId::new(10)));
        assert_eq!(catalog.identity_of(CardId::new(10)), "star");
        assert_eq!(catalog.identity_of(CardId::new(99)), "?");
        assert!(catalog.get(CardId::new(99)).is_none());
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_id_panics() {
        let mut catalog = CardCatalog::new();
        catalog.register(CardDefinition::new(CardId::new(1), "a", "a.png"));
        catalog.register(CardDefinition::new(CardId::new(1), "b", "b.png"));
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_identity_panics() {
        let mut catalog = CardCatalog::new();
        catalog.register(CardDefinition::new(CardId::new(1), "a", "a.png"));
        catalog.register(CardDefinition::new(CardId::new(2), "a", "a2.png"));
    }

    #[test]
    fn test_empty() {
        let catalog = CardCatalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.iter().count(), 0);
    }
}
