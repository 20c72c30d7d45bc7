//! This is the core module. It exports the card handling
//! code that the table games build on.

/// card.rs has value and suit.
mod card;
/// Re-export Card, Value, and Suit
pub use self::card::{Card, Suit, Value};

/// Deck is the normal 52 card deck.
mod deck;
/// Export `Deck`
pub use self::deck::Deck;

/// Cards held by a player or the dealer.
mod hand;
pub use self::hand::{BLACKJACK, Hand};

/// Errors shared by the games.
mod error;
pub use self::error::{GameError, Result};
