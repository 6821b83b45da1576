//! Automated house policy.
//!
//! The dealer keeps drawing while below [`DEALER_STAND_THRESHOLD`]. Jokers take
//! the largest wild value that keeps the hand at or under the bust limit, and
//! fall back to 1 when nothing fits. The only randomness is the deck order.

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::{Hand, BUST_LIMIT};

/// The dealer stops drawing once the round score reaches this.
pub const DEALER_STAND_THRESHOLD: u32 = 24;

/// Joker candidates in order of preference.
pub const JOKER_PREFERENCE: [u8; 10] = [12, 11, 10, 7, 6, 5, 4, 3, 2, 1];

/// Value given to a joker dealt to the dealer in the opening two cards.
pub const DEALER_OPENING_JOKER_VALUE: u8 = 10;

/// Largest preferred joker value that does not bust a hand at `round_score`.
pub fn choose_joker_value(round_score: u32) -> u8 {
    JOKER_PREFERENCE
        .iter()
        .copied()
        .find(|&v| round_score + u32::from(v) <= BUST_LIMIT)
        .unwrap_or(1)
}

/// What happened while the dealer played out a hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DealerPlay {
    /// Cards drawn by the policy, with the value each scored
    pub drawn: Vec<(Card, u8)>,
    /// The deck ran out before the policy wanted to stop
    pub deck_exhausted: bool,
}

/// Runs the drawing loop on `hand` until it stands, busts, or the deck is empty.
pub fn play(hand: &mut Hand, deck: &mut Deck) -> Result<DealerPlay, GameError> {
    let mut outcome = DealerPlay::default();
    while hand.round_score() < DEALER_STAND_THRESHOLD && !hand.is_busted() {
        let Some(card) = deck.draw() else {
            outcome.deck_exhausted = true;
            break;
        };
        let value = match card {
            Card::Joker => choose_joker_value(hand.round_score()),
            Card::Ranked { rank, .. } => rank.value(),
        };
        hand.add_card(card, Some(value))?;
        tracing::trace!(card = %card, value, score = hand.round_score(), "dealer draws");
        outcome.drawn.push((card, value));
    }
    Ok(outcome)
}
