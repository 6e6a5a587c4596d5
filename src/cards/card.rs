//! The card value type.
//!
//! A `Card` is nothing more than its four attribute values. Two cards
//! with the same attributes are the same card; there is exactly one of
//! each in the deck.

use serde::{Deserialize, Serialize};

use super::attributes::{Attribute, Color, Count, Shade, Shape};

/// Number of distinct cards (3^4).
pub const CARD_COUNT: usize = 81;

/// An immutable card.
///
/// ## Example
///
/// ```
/// use set_board::cards::{Card, Color, Count, Shade, Shape};
///
/// let card = Card::new(Color::Green, Shape::Oval, Count::Two, Shade::Filled);
/// assert_eq!(card.asset_name(), "greenovalfilled2");
/// assert_eq!(Card::from_ordinal(card.ordinal()), Some(card));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card {
    pub color: Color,
    pub shape: Shape,
    pub count: Count,
    pub shade: Shade,
}

impl Card {
    /// Create a card from its four attributes.
    #[must_use]
    pub const fn new(color: Color, shape: Shape, count: Count, shade: Shade) -> Self {
        Self {
            color,
            shape,
            count,
            shade,
        }
    }

    /// Position of this card in the standard deck order (0..81).
    ///
    /// Color varies slowest, shade fastest.
    #[must_use]
    pub fn ordinal(self) -> usize {
        ((self.color.index() * 3 + self.shape.index()) * 3 + self.count.index()) * 3
            + self.shade.index()
    }

    /// Card at the given deck position, or `None` if out of range.
    #[must_use]
    pub fn from_ordinal(ordinal: usize) -> Option<Self> {
        if ordinal >= CARD_COUNT {
            return None;
        }
        Some(Self::new(
            Color::from_index(ordinal / 27),
            Shape::from_index(ordinal / 9),
            Count::from_index(ordinal / 3),
            Shade::from_index(ordinal),
        ))
    }

    /// Asset key: color, shape, shade, then count (e.g. `redsquiggleempty3`).
    #[must_use]
    pub fn asset_name(self) -> String {
        format!(
            "{}{}{}{}",
            self.color.name(),
            self.shape.name(),
            self.shade.name(),
            self.count.name()
        )
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.count.value(),
            self.color.name(),
            self.shade.name(),
            self.shape.name()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinal_round_trip() {
        for ordinal in 0..CARD_COUNT {
            let card = Card::from_ordinal(ordinal).unwrap();
            assert_eq!(card.ordinal(), ordinal);
        }
        assert_eq!(Card::from_ordinal(CARD_COUNT), None);
    }

    #[test]
    fn test_ordinal_extremes() {
        let first = Card::new(Color::Green, Shape::Oval, Count::One, Shade::Filled);
        let last = Card::new(Color::Purple, Shape::Squiggle, Count::Three, Shade::Empty);
        assert_eq!(first.ordinal(), 0);
        assert_eq!(last.ordinal(), 80);
    }

    #[test]
    fn test_value_equality() {
        let a = Card::new(Color::Red, Shape::Diamond, Count::Three, Shade::Shaded);
        let b = Card::new(Color::Red, Shape::Diamond, Count::Three, Shade::Shaded);
        let c = Card::new(Color::Red, Shape::Diamond, Count::Three, Shade::Empty);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_display_and_asset_name() {
        let card = Card::new(Color::Purple, Shape::Squiggle, Count::One, Shade::Empty);
        assert_eq!(card.to_string(), "1 purple empty squiggle");
        assert_eq!(card.asset_name(), "purplesquiggleempty1");
    }

    #[test]
    fn test_serde() {
        let card = Card::new(Color::Green, Shape::Diamond, Count::Two, Shade::Shaded);
        let json = serde_json::to_string(&card).unwrap();
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, back);
    }
}
