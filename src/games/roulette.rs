//! Single zero roulette.
//!
//! The color is taken from the parity of the pocket: even pockets
//! (zero included) are red and odd pockets are black. A real wheel does
//! not follow parity; this simplified layout is kept on purpose.

use std::fmt;

use rand::Rng;
use tracing::event;

use crate::console::{Console, wait_for_enter};
use crate::core::Result;

/// Highest pocket on the wheel.
pub const MAX_POCKET: u8 = 36;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => write!(f, "Red"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// Color of a pocket, by parity only.
pub fn color_of(pocket: u8) -> Color {
    if pocket % 2 == 0 {
        Color::Red
    } else {
        Color::Black
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouletteSpin {
    pub pocket: u8,
}

impl RouletteSpin {
    pub fn color(&self) -> Color {
        color_of(self.pocket)
    }
}

pub fn spin<R: Rng>(rng: &mut R) -> RouletteSpin {
    RouletteSpin {
        pocket: rng.random_range(0..=MAX_POCKET),
    }
}

pub fn run<C: Console + ?Sized, R: Rng>(console: &mut C, rng: &mut R) -> Result<RouletteSpin> {
    console.println("")?;
    console.println("=== Roulette ===")?;
    let result = spin(rng);
    event!(tracing::Level::DEBUG, pocket = result.pocket, color = %result.color(), "Wheel spun");
    console.println(&format!(
        "The ball lands on {} ({})",
        result.pocket,
        result.color()
    ))?;
    wait_for_enter(console)?;
    Ok(result)
}
