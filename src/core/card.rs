use std::fmt;

/// The face of a card. Only its blackjack points matter here.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Value {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Value {
    /// Every face, two through ace.
    pub const ALL: [Value; 13] = [
        Value::Two,
        Value::Three,
        Value::Four,
        Value::Five,
        Value::Six,
        Value::Seven,
        Value::Eight,
        Value::Nine,
        Value::Ten,
        Value::Jack,
        Value::Queen,
        Value::King,
        Value::Ace,
    ];

    /// How many points this value is worth in a blackjack hand.
    ///
    /// Ten and the face cards are all worth 10. Aces are always
    /// worth 11; there is no soft hand re-evaluation.
    ///
    /// ```
    /// use casino::core::Value;
    ///
    /// assert_eq!(2, Value::Two.points());
    /// assert_eq!(10, Value::Queen.points());
    /// assert_eq!(11, Value::Ace.points());
    /// ```
    pub fn points(self) -> u8 {
        match self {
            Value::Two => 2,
            Value::Three => 3,
            Value::Four => 4,
            Value::Five => 5,
            Value::Six => 6,
            Value::Seven => 7,
            Value::Eight => 8,
            Value::Nine => 9,
            Value::Ten | Value::Jack | Value::Queen | Value::King => 10,
            Value::Ace => 11,
        }
    }
}

/// Suits never affect scoring. A deck holds every value once per suit.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Suit {
    Spade,
    Club,
    Heart,
    Diamond,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spade, Suit::Club, Suit::Heart, Suit::Diamond];
}

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct Card {
    pub value: Value,
    pub suit: Suit,
}

impl Card {
    pub fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }

    /// Points of the card's value.
    pub fn points(&self) -> u8 {
        self.value.points()
    }
}

/// Cards are shown by their point value, the way the table reads them.
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.points())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructor() {
        let c = Card::new(Value::Three, Suit::Spade);
        assert_eq!(Suit::Spade, c.suit);
        assert_eq!(Value::Three, c.value);
    }

    #[test]
    fn test_points_for_every_value() {
        let points: Vec<u8> = Value::ALL.iter().map(|v| v.points()).collect();
        assert_eq!(vec![2, 3, 4, 5, 6, 7, 8, 9, 10, 10, 10, 10, 11], points);
    }

    #[test]
    fn test_display_is_points() {
        assert_eq!("10", Card::new(Value::King, Suit::Heart).to_string());
        assert_eq!("11", Card::new(Value::Ace, Suit::Club).to_string());
        assert_eq!("7", Card::new(Value::Seven, Suit::Diamond).to_string());
    }
}
