//! One hand of blackjack against the dealer.
//!
//! Aces are always worth 11 and the dealer stands on every 17, soft or
//! not. There is no betting.

use rand::Rng;
use tracing::{event, trace_span};

use crate::console::{Console, ask_yes, wait_for_enter};
use crate::core::{BLACKJACK, Card, Deck, GameError, Hand, Result};

/// The dealer keeps drawing while below this.
pub const DEALER_STANDS_ON: u8 = 17;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player went over 21. The dealer never played.
    PlayerBust,
    /// Dealer went over 21, or player finished higher.
    PlayerWins,
    Push,
    DealerWins,
}

impl Outcome {
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::PlayerBust => "Bust! You lose.",
            Outcome::PlayerWins => "You win!",
            Outcome::Push => "Push!",
            Outcome::DealerWins => "Dealer wins!",
        }
    }
}

/// Everything about a hand once it's settled.
#[derive(Debug, Clone, PartialEq)]
pub struct BlackjackResult {
    pub outcome: Outcome,
    pub player: Hand,
    pub dealer: Hand,
    /// Cards the dealer drew after the reveal, in order.
    pub dealer_draws: Vec<Card>,
}

/// A hand in progress.
#[derive(Debug, Clone)]
pub struct Blackjack {
    deck: Deck,
    player: Hand,
    dealer: Hand,
}

impl Blackjack {
    /// Shuffle a fresh deck and deal.
    pub fn deal<R: Rng>(rng: &mut R) -> Result<Self> {
        Self::from_deck(Deck::shuffled(rng))
    }

    /// Deal two cards to the player, then two to the dealer, from the end
    /// of `deck`.
    pub fn from_deck(mut deck: Deck) -> Result<Self> {
        let mut player = Hand::new();
        let mut dealer = Hand::new();
        for _ in 0..2 {
            player.push(deck.deal().ok_or(GameError::DeckExhausted)?);
        }
        for _ in 0..2 {
            dealer.push(deck.deal().ok_or(GameError::DeckExhausted)?);
        }
        Ok(Self {
            deck,
            player,
            dealer,
        })
    }

    pub fn player(&self) -> &Hand {
        &self.player
    }

    pub fn dealer(&self) -> &Hand {
        &self.dealer
    }

    /// The dealer's face up card.
    pub fn dealer_up_card(&self) -> Card {
        self.dealer[0]
    }

    /// The player may only draw while under 21.
    pub fn can_hit(&self) -> bool {
        self.player.total() < BLACKJACK
    }

    pub fn is_player_bust(&self) -> bool {
        self.player.is_bust()
    }

    /// Draw one card for the player.
    pub fn hit(&mut self) -> Result<Card> {
        if !self.can_hit() {
            return Err(GameError::HandFinished);
        }
        let card = self.deck.deal().ok_or(GameError::DeckExhausted)?;
        self.player.push(card);
        Ok(card)
    }

    /// Player is done. Settle immediately on a bust, otherwise let the
    /// dealer draw to 17 and compare.
    pub fn stand(mut self) -> Result<BlackjackResult> {
        let mut dealer_draws = Vec::new();
        if self.player.is_bust() {
            return Ok(BlackjackResult {
                outcome: Outcome::PlayerBust,
                player: self.player,
                dealer: self.dealer,
                dealer_draws,
            });
        }

        while self.dealer.total() < DEALER_STANDS_ON {
            let card = self.deck.deal().ok_or(GameError::DeckExhausted)?;
            self.dealer.push(card);
            dealer_draws.push(card);
        }

        let outcome = settle(self.player.total(), self.dealer.total());
        Ok(BlackjackResult {
            outcome,
            player: self.player,
            dealer: self.dealer,
            dealer_draws,
        })
    }
}

/// Compare two standing totals. The player total is at most 21 here.
pub fn settle(player_total: u8, dealer_total: u8) -> Outcome {
    if dealer_total > BLACKJACK || player_total > dealer_total {
        Outcome::PlayerWins
    } else if player_total == dealer_total {
        Outcome::Push
    } else {
        Outcome::DealerWins
    }
}

fn show_player<C: Console + ?Sized>(console: &mut C, hand: &Hand) -> std::io::Result<()> {
    console.println(&format!("Your cards: {} => total: {}", hand, hand.total()))
}

/// Play one interactive hand.
pub fn run<C: Console + ?Sized, R: Rng>(console: &mut C, rng: &mut R) -> Result<BlackjackResult> {
    let span = trace_span!("blackjack");
    let _enter = span.enter();

    console.println("")?;
    console.println("=== Blackjack ===")?;
    let mut game = Blackjack::deal(rng)?;
    show_player(console, game.player())?;
    console.println(&format!("Dealer shows: {}", game.dealer_up_card()))?;

    // A two ace opener is already over 21.
    let mut hitting = !game.is_player_bust() && ask_yes(console, "Do you want to hit? (y/n): ")?;
    while hitting && game.can_hit() {
        let card = game.hit()?;
        event!(tracing::Level::TRACE, %card, total = game.player().total(), "Player hit");
        show_player(console, game.player())?;
        if game.is_player_bust() {
            break;
        }
        hitting = ask_yes(console, "Hit again? (y/n): ")?;
    }

    let player_bust = game.is_player_bust();
    let dealer_before = game.dealer().clone();
    let result = game.stand()?;

    if !player_bust {
        console.println(&format!(
            "Dealer's cards: {} => total: {}",
            dealer_before,
            dealer_before.total()
        ))?;
        let mut shown = dealer_before;
        for card in &result.dealer_draws {
            shown.push(*card);
            console.println(&format!(
                "Dealer draws... cards now: {} => total: {}",
                shown,
                shown.total()
            ))?;
        }
    }

    event!(
        tracing::Level::DEBUG,
        outcome = ?result.outcome,
        player = result.player.total(),
        dealer = result.dealer.total(),
        "Blackjack settled"
    );
    console.println(result.outcome.message())?;
    wait_for_enter(console)?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::console::ScriptedConsole;
    use crate::core::{Suit, Value};

    fn card(v: Value) -> Card {
        Card::new(v, Suit::Spade)
    }

    /// Build a deck that deals `order` first to last.
    fn stacked(order: &[Value]) -> Deck {
        let mut cards: Vec<Card> = order.iter().map(|v| card(*v)).collect();
        cards.reverse();
        Deck::from(cards)
    }

    #[test]
    fn test_settle_rules() {
        assert_eq!(Outcome::PlayerWins, settle(18, 22));
        assert_eq!(Outcome::PlayerWins, settle(20, 19));
        assert_eq!(Outcome::Push, settle(19, 19));
        assert_eq!(Outcome::DealerWins, settle(17, 20));
    }

    #[test]
    fn test_deal_order() {
        let game = Blackjack::from_deck(stacked(&[
            Value::Two,
            Value::Three,
            Value::Four,
            Value::Five,
        ]))
        .unwrap();
        assert_eq!("[2, 3]", game.player().to_string());
        assert_eq!("[4, 5]", game.dealer().to_string());
        assert_eq!(card(Value::Four), game.dealer_up_card());
    }

    #[test]
    fn test_short_deck_errors() {
        let err = Blackjack::from_deck(stacked(&[Value::Two, Value::Three])).unwrap_err();
        assert!(matches!(err, GameError::DeckExhausted));
    }

    #[test_log::test]
    fn test_bust_ends_before_dealer() {
        // Player 10 + 9, dealer 2 + 3, then player hits a king.
        let mut game = Blackjack::from_deck(stacked(&[
            Value::Ten,
            Value::Nine,
            Value::Two,
            Value::Three,
            Value::King,
            Value::Five,
        ]))
        .unwrap();
        game.hit().unwrap();
        assert!(game.is_player_bust());
        assert!(matches!(game.hit(), Err(GameError::HandFinished)));

        let result = game.stand().unwrap();
        assert_eq!(Outcome::PlayerBust, result.outcome);
        assert!(result.dealer_draws.is_empty());
        assert_eq!(5, result.dealer.total());
    }

    #[test]
    fn test_dealer_draws_to_seventeen() {
        // Player 10 + 8, dealer 2 + 3, dealer then draws 4, 6, 2.
        let game = Blackjack::from_deck(stacked(&[
            Value::Ten,
            Value::Eight,
            Value::Two,
            Value::Three,
            Value::Four,
            Value::Six,
            Value::Two,
            Value::Ace,
        ]))
        .unwrap();
        let result = game.stand().unwrap();
        assert_eq!(3, result.dealer_draws.len());
        assert_eq!(17, result.dealer.total());
        assert_eq!(Outcome::PlayerWins, result.outcome);
    }

    #[test]
    fn test_dealer_stands_on_seventeen() {
        let game = Blackjack::from_deck(stacked(&[
            Value::Ten,
            Value::Seven,
            Value::Ten,
            Value::Seven,
            Value::Two,
        ]))
        .unwrap();
        let result = game.stand().unwrap();
        assert!(result.dealer_draws.is_empty());
        assert_eq!(Outcome::Push, result.outcome);
    }

    #[test]
    fn test_two_aces_is_a_bust() {
        let game = Blackjack::from_deck(stacked(&[
            Value::Ace,
            Value::Ace,
            Value::Ten,
            Value::Six,
        ]))
        .unwrap();
        assert!(game.is_player_bust());
        assert_eq!(Outcome::PlayerBust, game.stand().unwrap().outcome);
    }

    #[test]
    fn test_cant_hit_on_twenty_one() {
        let mut game = Blackjack::from_deck(stacked(&[
            Value::Ace,
            Value::Queen,
            Value::Ten,
            Value::Six,
        ]))
        .unwrap();
        assert!(!game.can_hit());
        assert!(matches!(game.hit(), Err(GameError::HandFinished)));
    }

    #[test]
    fn test_seeded_games_invariants() {
        for seed in 0..500 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut again = StdRng::seed_from_u64(seed);
            let mut game = Blackjack::deal(&mut rng).unwrap();
            let mut replay = Blackjack::deal(&mut again).unwrap();
            assert_eq!(game.player(), replay.player());

            // Always hit while allowed.
            while game.can_hit() && !game.is_player_bust() {
                game.hit().unwrap();
                replay.hit().unwrap();
            }
            let result = game.stand().unwrap();
            assert_eq!(result, replay.stand().unwrap());

            if result.player.is_bust() {
                assert_eq!(Outcome::PlayerBust, result.outcome);
                assert!(result.dealer_draws.is_empty());
                continue;
            }
            // Dealer stopped as soon as it reached 17.
            assert!(result.dealer.total() >= DEALER_STANDS_ON);
            let mut before_last = result.dealer.total();
            if let Some(last) = result.dealer_draws.last() {
                before_last -= last.points();
                assert!(before_last < DEALER_STANDS_ON);
            }
        }
    }

    #[test_log::test]
    fn test_run_standing() {
        let mut console = ScriptedConsole::new(["n", ""]);
        let mut rng = StdRng::seed_from_u64(4);
        let result = run(&mut console, &mut rng).unwrap();

        assert!(console.printed("=== Blackjack ==="));
        assert!(console.printed("Dealer shows: "));
        assert!(console.printed(result.outcome.message()));
        assert_eq!(2, result.player.len());
        if result.outcome != Outcome::PlayerBust {
            assert!(console.printed("Dealer's cards: "));
        }
        assert_eq!(0, console.remaining_inputs());
    }

    #[test]
    fn test_run_hitting_until_done() {
        let mut console = ScriptedConsole::new(std::iter::repeat_n("y", 20));
        let mut rng = StdRng::seed_from_u64(12);
        let result = run(&mut console, &mut rng).unwrap();
        assert!(result.player.total() >= BLACKJACK);
        if result.player.is_bust() {
            assert!(console.printed("Bust! You lose."));
            assert!(!console.printed("Dealer's cards: "));
        }
    }
}
