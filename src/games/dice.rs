use rand::Rng;
use tracing::event;

use crate::console::{Console, wait_for_enter};
use crate::core::Result;

/// Faces on a standard die.
pub const SIDES: u8 = 6;

/// Roll one six sided die. Always in `1..=6`.
pub fn roll<R: Rng>(rng: &mut R) -> u8 {
    rng.random_range(1..=SIDES)
}

pub fn run<C: Console + ?Sized, R: Rng>(console: &mut C, rng: &mut R) -> Result<u8> {
    console.println("")?;
    console.println("=== Dice Roll ===")?;
    let rolled = roll(rng);
    event!(tracing::Level::DEBUG, rolled, "Die rolled");
    console.println(&format!("You rolled a: {}", rolled))?;
    wait_for_enter(console)?;
    Ok(rolled)
}
