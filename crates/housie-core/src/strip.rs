//! Strips of six cards.

use std::ops::Index;

use crate::Card;

/// Cards in a strip.
pub const STRIP_SIZE: usize = 6;

/// An ordered strip of exactly six cards.
///
/// The cards of a strip are generated independently, so each one satisfies
/// the [`Card`](crate::Card) invariants on its own and numbers may repeat
/// across cards. No cross-card invariant is enforced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strip {
    cards: [Card; STRIP_SIZE],
}

impl Strip {
    /// Creates a strip from six cards.
    #[must_use]
    pub fn new(cards: [Card; STRIP_SIZE]) -> Self {
        Strip { cards }
    }

    /// Returns the cards in order.
    #[must_use]
    pub fn cards(&self) -> &[Card; STRIP_SIZE] {
        &self.cards
    }

    /// Returns an iterator over the cards in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Returns the number of cards (always 6).
    #[must_use]
    pub const fn len(&self) -> usize {
        STRIP_SIZE
    }

    /// Always `false`; a strip is never empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }
}

impl Index<usize> for Strip {
    type Output = Card;

    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}

impl<'a> IntoIterator for &'a Strip {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl IntoIterator for Strip {
    type Item = Card;
    type IntoIter = std::array::IntoIter<Card, STRIP_SIZE>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
