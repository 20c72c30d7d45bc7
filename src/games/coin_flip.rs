use std::fmt;

use rand::Rng;
use tracing::event;

use crate::console::{Console, wait_for_enter};
use crate::core::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoinFace {
    Heads,
    Tails,
}

const FACES: [CoinFace; 2] = [CoinFace::Heads, CoinFace::Tails];

impl fmt::Display for CoinFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoinFace::Heads => write!(f, "Heads"),
            CoinFace::Tails => write!(f, "Tails"),
        }
    }
}

/// Flip a fair coin.
pub fn flip<R: Rng>(rng: &mut R) -> CoinFace {
    FACES[rng.random_range(0..FACES.len())]
}

pub fn run<C: Console + ?Sized, R: Rng>(console: &mut C, rng: &mut R) -> Result<CoinFace> {
    console.println("")?;
    console.println("=== Coin Flip ===")?;
    let face = flip(rng);
    event!(tracing::Level::DEBUG, ?face, "Coin flipped");
    console.println(&format!("The coin lands on: {}", face))?;
    wait_for_enter(console)?;
    Ok(face)
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::console::ScriptedConsole;

    #[test]
    fn test_seeded_flips_repeat() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        let one: Vec<CoinFace> = (0..32).map(|_| flip(&mut a)).collect();
        let two: Vec<CoinFace> = (0..32).map(|_| flip(&mut b)).collect();
        assert_eq!(one, two);
    }

    #[test]
    fn test_both_faces_show_up() {
        let mut rng = StdRng::seed_from_u64(99);
        let flips: Vec<CoinFace> = (0..200).map(|_| flip(&mut rng)).collect();
        assert!(flips.contains(&CoinFace::Heads));
        assert!(flips.contains(&CoinFace::Tails));
    }

    #[test_log::test]
    fn test_run_prints_face() {
        let mut console = ScriptedConsole::new([""]);
        let mut rng = StdRng::seed_from_u64(1);
        let face = run(&mut console, &mut rng).unwrap();
        assert!(console.printed(&format!("The coin lands on: {}", face)));
        assert!(console.printed("=== Coin Flip ==="));
    }
}
