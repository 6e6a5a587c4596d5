//! Card attributes: the four independent axes of a card.
//!
//! Every card carries exactly one value on each axis, and every axis has
//! exactly three values. The matching rule only ever compares values on
//! the same axis, so the axes share the `Attribute` trait.
//!
//! ## Axes
//!
//! - `Color`: green, red, purple
//! - `Shape`: oval, diamond, squiggle
//! - `Count`: one, two, three symbols
//! - `Shade`: filled, shaded, empty

use serde::{Deserialize, Serialize};

/// Shared behaviour of the four attribute axes.
///
/// Values are indexed `0..3` in declaration order. The index is what
/// `rules::third_card` does its arithmetic on.
pub trait Attribute: Copy + Eq + std::fmt::Debug + 'static {
    /// All three values, in index order.
    const ALL: [Self; 3];

    /// Index of this value (0, 1 or 2).
    fn index(self) -> usize;

    /// Lowercase name used in asset keys and display.
    fn name(self) -> &'static str;

    /// Value at the given index, wrapping modulo 3.
    #[must_use]
    fn from_index(index: usize) -> Self {
        Self::ALL[index % 3]
    }
}

/// Symbol color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    Green,
    Red,
    Purple,
}

impl Attribute for Color {
    const ALL: [Self; 3] = [Color::Green, Color::Red, Color::Purple];

    fn index(self) -> usize {
        self as usize
    }

    fn name(self) -> &'static str {
        match self {
            Color::Green => "green",
            Color::Red => "red",
            Color::Purple => "purple",
        }
    }
}

/// Symbol shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Shape {
    Oval,
    Diamond,
    Squiggle,
}

impl Attribute for Shape {
    const ALL: [Self; 3] = [Shape::Oval, Shape::Diamond, Shape::Squiggle];

    fn index(self) -> usize {
        self as usize
    }

    fn name(self) -> &'static str {
        match self {
            Shape::Oval => "oval",
            Shape::Diamond => "diamond",
            Shape::Squiggle => "squiggle",
        }
    }
}

/// Number of symbols printed on the card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Count {
    One,
    Two,
    Three,
}

impl Count {
    /// Numeric symbol count (1-3).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8 + 1
    }
}

impl Attribute for Count {
    const ALL: [Self; 3] = [Count::One, Count::Two, Count::Three];

    fn index(self) -> usize {
        self as usize
    }

    fn name(self) -> &'static str {
        match self {
            Count::One => "1",
            Count::Two => "2",
            Count::Three => "3",
        }
    }
}

/// Symbol fill.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Shade {
    Filled,
    Shaded,
    Empty,
}

impl Attribute for Shade {
    const ALL: [Self; 3] = [Shade::Filled, Shade::Shaded, Shade::Empty];

    fn index(self) -> usize {
        self as usize
    }

    fn name(self) -> &'static str {
        match self {
            Shade::Filled => "filled",
            Shade::Shaded => "shaded",
            Shade::Empty => "empty",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_indices_round_trip<A: Attribute>() {
        for (i, value) in A::ALL.iter().enumerate() {
            assert_eq!(value.index(), i);
            assert_eq!(A::from_index(i), *value);
        }
    }

    #[test]
    fn test_indices_follow_declaration_order() {
        assert_indices_round_trip::<Color>();
        assert_indices_round_trip::<Shape>();
        assert_indices_round_trip::<Count>();
        assert_indices_round_trip::<Shade>();
    }

    #[test]
    fn test_from_index_wraps() {
        assert_eq!(Color::from_index(3), Color::Green);
        assert_eq!(Shade::from_index(5), Shade::Empty);
    }

    #[test]
    fn test_count_value() {
        assert_eq!(Count::One.value(), 1);
        assert_eq!(Count::Two.value(), 2);
        assert_eq!(Count::Three.value(), 3);
    }

    #[test]
    fn test_names() {
        assert_eq!(Color::Purple.name(), "purple");
        assert_eq!(Shape::Squiggle.name(), "squiggle");
        assert_eq!(Count::Two.name(), "2");
        assert_eq!(Shade::Shaded.name(), "shaded");
    }
}
