use std::fmt;
use std::sync::Arc;

use crate::model::card::Card;

/// Ordered, read-only collection of cards for one viewing session.
///
/// Built once and never mutated: there is no insert, remove or reorder.
/// Clones share the same backing slice.
#[derive(Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Arc<[Card]>,
}

impl Deck {
    #[must_use]
    pub fn new(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into(),
        }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Index of the last card, `None` for an empty deck.
    #[must_use]
    pub fn last_index(&self) -> Option<usize> {
        self.cards.len().checked_sub(1)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::empty()
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deck")
            .field("cards_len", &self.cards.len())
            .finish_non_exhaustive()
    }
}
