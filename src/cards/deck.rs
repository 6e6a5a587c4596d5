//! The fixed 81-card deck.

use serde::{Deserialize, Serialize};

use super::attributes::{Attribute, Color, Count, Shade, Shape};
use super::card::{Card, CARD_COUNT};

/// The universe of cards for one session.
///
/// Built once as the Cartesian product of the four attributes and never
/// mutated afterwards. Which cards are dealt or retired is tracked by
/// the board, not here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build the standard deck in ordinal order.
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(CARD_COUNT);
        for color in Color::ALL {
            for shape in Shape::ALL {
                for count in Count::ALL {
                    for shade in Shade::ALL {
                        cards.push(Card::new(color, shape, count, shade));
                    }
                }
            }
        }
        Self { cards }
    }

    /// All cards, in deck order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always false for the standard deck.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Check whether a card belongs to this deck.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.get(card.ordinal()) == Some(&card)
    }

    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}
