use crate::core::card::{Card, Suit, Value};

use rand::Rng;
use rand::seq::SliceRandom;

/// `Deck` is an ordered pile of cards. Cards are dealt
/// from the end, so whatever was pushed last comes out first.
#[derive(Debug, Clone, PartialEq)]
pub struct Deck {
    /// Card storage.
    cards: Vec<Card>,
}

impl Deck {
    /// Create the standard 52 card deck in a fixed order.
    ///
    /// ```
    /// use casino::core::Deck;
    ///
    /// assert_eq!(52, Deck::new().len());
    /// ```
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for value in Value::ALL {
                cards.push(Card::new(value, suit));
            }
        }
        Self { cards }
    }

    /// Create a standard deck and shuffle it with the given rng.
    pub fn shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::new();
        deck.shuffle(rng);
        deck
    }

    /// How many cards are there in the deck ?
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Have all cards been dealt ?
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Randomly shuffle the deck.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng)
    }

    /// Deal a card if there is one there to deal.
    /// None if the deck is empty
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a deck from cards in deal order reversed:
/// the last card of the vec is dealt first.
impl From<Vec<Card>> for Deck {
    fn from(value: Vec<Card>) -> Self {
        Self { cards: value }
    }
}
