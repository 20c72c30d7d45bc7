//! The five table games. Each module has a pure function over a
//! `rand::Rng` that produces the outcome, and a `run` that plays it
//! through a [`Console`](crate::console::Console).

use std::fmt;

use rand::Rng;

use crate::console::Console;
use crate::core::Result;

pub mod blackjack;
pub mod coin_flip;
pub mod dice;
pub mod roulette;
pub mod slots;

pub use self::blackjack::{Blackjack, BlackjackResult, Outcome};
pub use self::coin_flip::CoinFace;
pub use self::roulette::{Color, RouletteSpin};
pub use self::slots::{SlotSpin, Symbol};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameKind {
    Blackjack,
    CoinFlip,
    DiceRoll,
    SlotMachine,
    Roulette,
}

const GAMES: [GameKind; 5] = [
    GameKind::Blackjack,
    GameKind::CoinFlip,
    GameKind::DiceRoll,
    GameKind::SlotMachine,
    GameKind::Roulette,
];

impl GameKind {
    /// All the games in menu order.
    pub fn games() -> [GameKind; 5] {
        GAMES
    }

    pub fn name(&self) -> &'static str {
        match self {
            GameKind::Blackjack => "Blackjack",
            GameKind::CoinFlip => "Coin Flip",
            GameKind::DiceRoll => "Dice Roll",
            GameKind::SlotMachine => "Slot Machine",
            GameKind::Roulette => "Roulette",
        }
    }

    /// Play one round. The outcome is logged by the game itself.
    pub fn play<C: Console + ?Sized, R: Rng>(&self, console: &mut C, rng: &mut R) -> Result<()> {
        match self {
            GameKind::Blackjack => blackjack::run(console, rng).map(|_| ()),
            GameKind::CoinFlip => coin_flip::run(console, rng).map(|_| ()),
            GameKind::DiceRoll => dice::run(console, rng).map(|_| ()),
            GameKind::SlotMachine => slots::run(console, rng).map(|_| ()),
            GameKind::Roulette => roulette::run(console, rng).map(|_| ()),
        }
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
