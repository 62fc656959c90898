//! Deck builder: duplicate the catalog and shuffle it into a deal.
//!
//! Every definition is placed exactly twice, then the whole sequence is
//! permuted with a uniform Fisher–Yates shuffle. Instance ids are assigned
//! after shuffling so that `InstanceId` equals board position.
//!
//! ```
//! use memory_match::cards::CardCatalog;
//! use memory_match::core::{GameRng, Generation};
//! use memory_match::deck::build_deal;
//!
//! let catalog = CardCatalog::standard();
//! let mut rng = GameRng::new(42);
//! let deal = build_deal(&catalog, &mut rng, Generation::initial());
//!
//! assert_eq!(deal.len(), 16);
//! assert_eq!(deal.matched_count(), 0);
//! ```

use serde::{Deserialize, Serialize};

use crate::cards::{CardCatalog, CardId, CardInstance};
use crate::core::{GameRng, Generation, InstanceId};

/// Copies of each definition in a deal.
pub const COPIES_PER_CARD: usize = 2;

/// The cards of one game, in board order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deal {
    generation: Generation,
    cards: Vec<CardInstance>,
}

/// Build a shuffled deal with two copies of every catalog entry.
pub fn build_deal(catalog: &CardCatalog, rng: &mut GameRng, generation: Generation) -> Deal {
    let mut card_ids: Vec<CardId> = catalog
        .iter()
        .flat_map(|def| std::iter::repeat(def.id).take(COPIES_PER_CARD))
        .collect();

    rng.shuffle(&mut card_ids);

    let cards = card_ids
        .into_iter()
        .enumerate()
        .map(|(position, card_id)| {
            let id = u16::try_from(position).expect("deal larger than u16::MAX cards");
            CardInstance::new(InstanceId::new(id), card_id)
        })
        .collect();

    tracing::debug!(%generation, size = catalog.len() * COPIES_PER_CARD, "built deal");

    Deal { generation, cards }
}

impl Deal {
    /// Build a deal in a fixed order, without shuffling.
    ///
    /// Useful for hosts and tests that need a known layout.
    #[must_use]
    pub fn from_card_ids(card_ids: &[CardId], generation: Generation) -> Self {
        let cards = card_ids
            .iter()
            .enumerate()
            .map(|(position, &card_id)| {
                let id = u16::try_from(position).expect("deal larger than u16::MAX cards");
                CardInstance::new(InstanceId::new(id), card_id)
            })
            .collect();
        Self { generation, cards }
    }

    /// The deal generation these cards belong to.
    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Number of placed cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Get a card by instance id.
    #[must_use]
    pub fn get(&self, id: InstanceId) -> Option<&CardInstance> {
        self.cards.get(id.index())
    }

    pub(crate) fn get_mut(&mut self, id: InstanceId) -> Option<&mut CardInstance> {
        self.cards.get_mut(id.index())
    }

    /// Iterate over cards in board order.
    pub fn iter(&self) -> impl Iterator<Item = &CardInstance> {
        self.cards.iter()
    }

    /// Card ids in board order.
    #[must_use]
    pub fn card_ids(&self) -> Vec<CardId> {
        self.cards.iter().map(|c| c.card_id).collect()
    }

    /// Number of matched cards.
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.cards.iter().filter(|c| c.is_matched()).count()
    }

    /// Cards currently face up but not matched.
    pub fn pending(&self) -> impl Iterator<Item = &CardInstance> {
        self.cards.iter().filter(|c| c.is_pending())
    }

    /// Every card is matched.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.cards.is_empty() && self.matched_count() == self.cards.len()
    }
}
