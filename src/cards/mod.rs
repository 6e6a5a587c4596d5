//! Card system: attributes, the card value type, and the deck.
//!
//! ## Key Types
//!
//! - `Color`, `Shape`, `Count`, `Shade`: the four three-valued axes
//! - `Attribute`: trait shared by the axes
//! - `Card`: an immutable 4-tuple with value equality
//! - `Deck`: all 81 cards, fixed at construction

pub mod attributes;
pub mod card;
pub mod deck;

pub use attributes::{Attribute, Color, Count, Shade, Shape};
pub use card::{Card, CARD_COUNT};
pub use deck::Deck;
