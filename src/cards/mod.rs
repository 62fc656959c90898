//! Card system: definitions, instances, and the catalog.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for card definitions
//! - `CardDefinition`: Identity and face-up image
//! - `CardInstance`: One placed card and its `CardFace`
//! - `CardCatalog`: Definition lookup, including the standard eight cards

pub mod catalog;
pub mod definition;
pub mod instance;

pub use catalog::{CardCatalog, LOGO_IMAGE, STANDARD_CARD_COUNT};
pub use definition::{CardDefinition, CardId};
pub use instance::{CardFace, CardInstance};
