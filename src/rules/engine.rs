//! The flip/compare/lock state machine.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::CardFace;
use crate::core::{Generation, InstanceId};
use crate::deck::Deal;

/// A click on a rendered card, tagged with the board it came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Click {
    pub generation: Generation,
    pub instance: InstanceId,
}

impl Click {
    #[must_use]
    pub const fn new(generation: Generation, instance: InstanceId) -> Self {
        Self {
            generation,
            instance,
        }
    }
}

/// Global selection state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection {
    /// No card is pending.
    None,
    /// One card is face up, waiting for its partner.
    OnePending(InstanceId),
    /// A pair is being evaluated; every click is ignored.
    Locked(InstanceId, InstanceId),
}

/// Why a click had no effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// The click came from a board of an earlier deal.
    StaleBoard,
    /// No card at that position.
    UnknownInstance,
    /// A mismatched pair is still face up.
    Locked,
    /// The card is already part of the pending pair.
    AlreadyRevealed,
    AlreadyMatched,
}

/// Result of a click.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClickOutcome {
    Ignored(IgnoreReason),
    /// First card of a pair revealed.
    FirstSelected(InstanceId),
    /// Second card revealed and it matches the first. Both are now matched
    /// and the board is unlocked.
    Matched { first: InstanceId, second: InstanceId },
    /// Second card revealed and it differs. The board stays locked until
    /// [`MatchEngine::revert_mismatch`] is called for this pair.
    Mismatched { first: InstanceId, second: InstanceId },
}

/// Match engine for one deal.
///
/// Owns the deal's cards and the pending pair. Timing is not its concern:
/// the caller schedules the mismatch revert and calls back.
///
/// ```
/// use memory_match::cards::CardId;
/// use memory_match::core::{Generation, InstanceId};
/// use memory_match::deck::Deal;
/// use memory_match::rules::{Click, ClickOutcome, MatchEngine};
///
/// let gen = Generation::initial();
/// let ids = [CardId::new(1), CardId::new(2), CardId::new(1), CardId::new(2)];
/// let mut engine = MatchEngine::new(Deal::from_card_ids(&ids, gen));
///
/// engine.click(Click::new(gen, InstanceId::new(0)));
/// let outcome = engine.click(Click::new(gen, InstanceId::new(2)));
///
/// assert!(matches!(outcome, ClickOutcome::Matched { .. }));
/// assert_eq!(engine.matched_count(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct MatchEngine {
    deal: Deal,
    /// Face-up, unmatched cards in click order.
    pending: SmallVec<[InstanceId; 2]>,
    locked: bool,
}

impl MatchEngine {
    /// Start matching on a fresh deal.
    #[must_use]
    pub fn new(deal: Deal) -> Self {
        Self {
            deal,
            pending: SmallVec::new(),
            locked: false,
        }
    }

    /// Replace the deal, dropping any pending pair and lock.
    pub fn reset(&mut self, deal: Deal) {
        self.deal = deal;
        self.pending.clear();
        self.locked = false;
    }

    #[must_use]
    pub fn deal(&self) -> &Deal {
        &self.deal
    }

    #[must_use]
    pub fn generation(&self) -> Generation {
        self.deal.generation()
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    #[must_use]
    pub fn selection(&self) -> Selection {
        match (self.pending.as_slice(), self.locked) {
            ([first, second], true) => Selection::Locked(*first, *second),
            ([first], false) => Selection::OnePending(*first),
            _ => Selection::None,
        }
    }

    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.deal.matched_count()
    }

    /// Every card in the deal is matched.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.deal.is_complete()
    }

    /// Process a click.
    pub fn click(&mut self, click: Click) -> ClickOutcome {
        if click.generation != self.deal.generation() {
            return ClickOutcome::Ignored(IgnoreReason::StaleBoard);
        }
        if self.locked {
            return ClickOutcome::Ignored(IgnoreReason::Locked);
        }

        let Some(card) = self.deal.get_mut(click.instance) else {
            return ClickOutcome::Ignored(IgnoreReason::UnknownInstance);
        };
        match card.face {
            CardFace::Revealed => return ClickOutcome::Ignored(IgnoreReason::AlreadyRevealed),
            CardFace::Matched => return ClickOutcome::Ignored(IgnoreReason::AlreadyMatched),
            CardFace::Hidden => card.reveal(),
        }

        let Some(&first) = self.pending.first() else {
            self.pending.push(click.instance);
            tracing::debug!(instance = %click.instance, "first card selected");
            return ClickOutcome::FirstSelected(click.instance);
        };

        let second = click.instance;
        self.pending.push(second);
        self.locked = true;
        self.evaluate(first, second)
    }

    fn evaluate(&mut self, first: InstanceId, second: InstanceId) -> ClickOutcome {
        let same_identity = match (self.deal.get(first), self.deal.get(second)) {
            (Some(a), Some(b)) => a.card_id == b.card_id,
            _ => false,
        };

        if !same_identity {
            tracing::debug!(%first, %second, "pair mismatched");
            return ClickOutcome::Mismatched { first, second };
        }

        for id in [first, second] {
            if let Some(card) = self.deal.get_mut(id) {
                card.mark_matched();
            }
        }
        self.pending.clear();
        self.locked = false;
        tracing::debug!(%first, %second, "pair matched");
        ClickOutcome::Matched { first, second }
    }

    /// Flip a mismatched pair back down and unlock.
    ///
    /// No-op (returns `false`) when `generation` is not the current deal or
    /// the engine is not locked on exactly this pair.
    pub fn revert_mismatch(
        &mut self,
        generation: Generation,
        first: InstanceId,
        second: InstanceId,
    ) -> bool {
        if generation != self.deal.generation()
            || self.selection() != Selection::Locked(first, second)
        {
            return false;
        }

        for id in [first, second] {
            if let Some(card) = self.deal.get_mut(id) {
                card.hide();
            }
        }
        self.pending.clear();
        self.locked = false;
        true
    }
}
