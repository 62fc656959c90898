//! Identifiers for placed cards and deals.
//!
//! ## ID Layout
//!
//! - `InstanceId`: position of a card in the current deal, `0..deal_size`.
//! - `Generation`: which deal an id belongs to. Every restart produces a new
//!   generation, so an `InstanceId` is only meaningful together with the
//!   generation it was handed out under.
//!
//! ```
//! use memory_match::core::{Generation, InstanceId};
//!
//! let first = Generation::initial();
//! let second = first.next();
//! assert!(second > first);
//!
//! let card = InstanceId::new(3);
//! assert_eq!(card.index(), 3);
//! ```

use serde::{Deserialize, Serialize};

/// Identifier of one placed card within a deal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct InstanceId(pub u16);

impl InstanceId {
    /// Create a new instance ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Position of this card on the board.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Instance({})", self.0)
    }
}

/// Deal generation counter.
///
/// Scheduled tasks and rendered boards remember the generation they were
/// created under. Anything carrying an older generation is inert.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Generation(pub u64);

impl Generation {
    /// The generation of the first deal after load.
    #[must_use]
    pub const fn initial() -> Self {
        Self(0)
    }

    /// The generation that supersedes this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Get the raw counter value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Gen({})", self.0)
    }
}
