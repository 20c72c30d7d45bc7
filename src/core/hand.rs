use std::fmt;
use std::ops::Index;

use super::Card;

/// Anything over this is a bust.
pub const BLACKJACK: u8 = 21;

/// Cards held by one side of a blackjack table.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Create a new empty hand
    ///
    /// ```
    /// use casino::core::Hand;
    ///
    /// let hand = Hand::new();
    ///
    /// assert!(hand.is_empty());
    /// assert_eq!(0, hand.total());
    /// ```
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn new_with_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn push(&mut self, c: Card) {
        self.cards.push(c);
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Sum of the card points. Aces always count 11.
    ///
    /// ```
    /// use casino::core::{Card, Hand, Suit, Value};
    ///
    /// let hand = Hand::new_with_cards(vec![
    ///     Card::new(Value::Ace, Suit::Club),
    ///     Card::new(Value::King, Suit::Heart),
    /// ]);
    /// assert_eq!(21, hand.total());
    /// ```
    pub fn total(&self) -> u8 {
        self.cards.iter().map(Card::points).sum()
    }

    /// Has this hand gone over 21?
    pub fn is_bust(&self) -> bool {
        self.total() > BLACKJACK
    }
}

impl Index<usize> for Hand {
    type Output = Card;
    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}

/// Renders as `[10, 4]`
impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, c) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, "]")
    }
}
