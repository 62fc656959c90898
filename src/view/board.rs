//! Board renderer: one interactive element per placed card.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{CardCatalog, CardInstance, LOGO_IMAGE};
use crate::core::{Generation, InstanceId};
use crate::deck::Deal;
use crate::rules::Click;

/// Visual element for one card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardElement {
    pub instance: InstanceId,
    /// Identity of the owning card, used by the host as a data attribute.
    pub identity: String,
    /// Face-down image (shared logo).
    pub front_image: String,
    /// Face-up image.
    pub back_image: String,
    /// Face-up label.
    pub label: String,
    pub flipped: bool,
    pub matched: bool,
}

impl CardElement {
    fn sync(&mut self, card: &CardInstance) {
        self.flipped = card.is_revealed();
        self.matched = card.is_matched();
    }
}

/// Rendered board for one deal.
///
/// Rendering a new deal replaces the whole board. Clicks routed through a
/// board carry its generation, so the match engine ignores input from a
/// board that has been superseded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    generation: Generation,
    columns: usize,
    elements: Vec<CardElement>,
}

impl BoardView {
    /// Materialize a deal. Every element starts face down.
    #[must_use]
    pub fn render(deal: &Deal, catalog: &CardCatalog, columns: usize) -> Self {
        let elements = deal
            .iter()
            .map(|card| {
                let (identity, image) = catalog
                    .get(card.card_id)
                    .map(|def| (def.identity.clone(), def.image_path.clone()))
                    .unwrap_or_default();
                let mut element = CardElement {
                    instance: card.id,
                    label: identity.clone(),
                    identity,
                    front_image: LOGO_IMAGE.to_string(),
                    back_image: image,
                    flipped: false,
                    matched: false,
                };
                element.sync(card);
                element
            })
            .collect();

        Self {
            generation: deal.generation(),
            columns: columns.max(1),
            elements,
        }
    }

    /// Refresh `flipped`/`matched` from the deal's current state.
    ///
    /// Ignored if the deal belongs to another generation.
    pub fn sync(&mut self, deal: &Deal) {
        if deal.generation() != self.generation {
            return;
        }
        for (element, card) in self.elements.iter_mut().zip(deal.iter()) {
            element.sync(card);
        }
    }

    /// Turn a click on the element at `index` into an engine click.
    #[must_use]
    pub fn route_click(&self, index: usize) -> Option<Click> {
        self.elements
            .get(index)
            .map(|element| Click::new(self.generation, element.instance))
    }

    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    #[must_use]
    pub fn element(&self, index: usize) -> Option<&CardElement> {
        self.elements.get(index)
    }

    #[must_use]
    pub fn elements(&self) -> &[CardElement] {
        &self.elements
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// Text grid: `[ ?? ]` face down, `[card3]` pending, `<card3>` matched.
impl fmt::Display for BoardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .elements
            .iter()
            .map(|e| e.label.chars().count())
            .max()
            .unwrap_or(0)
            .max(2);

        for (row_index, row) in self.elements.chunks(self.columns).enumerate() {
            if row_index > 0 {
                writeln!(f)?;
            }
            for (i, element) in row.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                match (element.flipped, element.matched) {
                    (_, true) => write!(f, "<{:^width$}>", element.label)?,
                    (true, false) => write!(f, "[{:^width$}]", element.label)?,
                    (false, false) => write!(f, "[{:^width$}]", "??")?,
                }
            }
        }
        Ok(())
    }
}
