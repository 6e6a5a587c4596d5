//! The matching rule.
//!
//! Three cards form a Set when, on every attribute, their values are
//! either all the same or all different. Everything here is a pure
//! function of its arguments.

use rustc_hash::FxHashMap;

use crate::cards::{Attribute, Card, Color, Count, Shade, Shape};

/// True iff `a`, `b` and `c` are all equal or pairwise distinct.
///
/// Exactly two equal values is the only failing configuration.
#[inline]
#[must_use]
pub fn all_same_or_all_different<T: PartialEq>(a: T, b: T, c: T) -> bool {
    (a == b && b == c) || (a != b && b != c && a != c)
}

/// Check whether three cards form a Set.
///
/// Symmetric in its arguments. Passing the same card twice never forms
/// a Set unless all three arguments are the same card.
///
/// ```
/// use set_board::cards::{Card, Color, Count, Shade, Shape};
/// use set_board::rules::is_match;
///
/// let a = Card::new(Color::Green, Shape::Oval, Count::One, Shade::Filled);
/// let b = Card::new(Color::Green, Shape::Oval, Count::Two, Shade::Filled);
/// let c = Card::new(Color::Green, Shape::Oval, Count::Three, Shade::Filled);
/// assert!(is_match(a, b, c));
/// ```
#[must_use]
pub fn is_match(a: Card, b: Card, c: Card) -> bool {
    all_same_or_all_different(a.color, b.color, c.color)
        && all_same_or_all_different(a.shape, b.shape, c.shape)
        && all_same_or_all_different(a.count, b.count, c.count)
        && all_same_or_all_different(a.shade, b.shade, c.shade)
}

#[inline]
fn complete<A: Attribute>(a: A, b: A) -> A {
    // Values are 0..3; equal inputs give the same value, distinct
    // inputs give the remaining one.
    A::from_index((6 - a.index() - b.index()) % 3)
}

/// The unique card that completes `a` and `b` into a Set.
///
/// Returns `a` itself when `a == b`.
#[must_use]
pub fn third_card(a: Card, b: Card) -> Card {
    Card::new(
        complete::<Color>(a.color, b.color),
        complete::<Shape>(a.shape, b.shape),
        complete::<Count>(a.count, b.count),
        complete::<Shade>(a.shade, b.shade),
    )
}

/// Find the first Set among `cards`.
///
/// Returns the lexicographically smallest index triple `[i, j, k]` with
/// `i < j < k`, i.e. the same triple a nested `i/j/k` scan would hit
/// first. Runs in O(n²) by looking up the completing card of each pair.
#[must_use]
pub fn find_match(cards: &[Card]) -> Option<[usize; 3]> {
    if cards.len() < 3 {
        return None;
    }

    let positions: FxHashMap<Card, usize> =
        cards.iter().enumerate().map(|(i, &card)| (card, i)).collect();

    for i in 0..cards.len() {
        for j in (i + 1)..cards.len() {
            if cards[i] == cards[j] {
                continue;
            }
            let wanted = third_card(cards[i], cards[j]);
            if let Some(&k) = positions.get(&wanted) {
                if k > j {
                    return Some([i, j, k]);
                }
            }
        }
    }

    None
}

/// Count the unordered Set triples among `cards`.
///
/// Cards are assumed distinct.
#[must_use]
pub fn count_matches(cards: &[Card]) -> usize {
    let positions: FxHashMap<Card, usize> =
        cards.iter().enumerate().map(|(i, &card)| (card, i)).collect();

    let mut total = 0;
    for i in 0..cards.len() {
        for j in (i + 1)..cards.len() {
            let wanted = third_card(cards[i], cards[j]);
            if positions.get(&wanted).is_some_and(|&k| k > j) {
                total += 1;
            }
        }
    }
    total
}
