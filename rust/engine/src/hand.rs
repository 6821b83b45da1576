use serde::{Deserialize, Serialize};

use crate::cards::{is_wild_value, Card};
use crate::errors::GameError;

/// Highest score that does not bust.
pub const BUST_LIMIT: u32 = 30;

/// A card in a hand together with the value it scores.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ScoredCard {
    pub card: Card,
    pub value: u8,
}

/// Cards held during one round and the running score.
///
/// `round_score` always equals the sum of assigned values, except after
/// [`Hand::force_score`] which is reserved for the two-joker opening.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<ScoredCard>,
    round_score: u32,
    busted: bool,
    forced: bool,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `card` and returns the new round score.
    ///
    /// Ranked cards always score their printed rank and ignore
    /// `assigned_value`. Jokers require one from the wild set.
    ///
    /// # Errors
    ///
    /// - [`GameError::InvalidJokerAssignment`] for a joker without a value
    /// - [`GameError::InvalidJokerValue`] for a joker value outside 1-7, 10-12
    pub fn add_card(&mut self, card: Card, assigned_value: Option<u8>) -> Result<u32, GameError> {
        let position = self.cards.len();
        self.insert_card(position, card, assigned_value)
    }

    /// Same as [`Hand::add_card`] but places the card at `position`, used when
    /// a pending joker is resolved after later cards were dealt.
    pub fn insert_card(
        &mut self,
        position: usize,
        card: Card,
        assigned_value: Option<u8>,
    ) -> Result<u32, GameError> {
        let value = match card {
            Card::Ranked { rank, .. } => rank.value(),
            Card::Joker => {
                let v = assigned_value.ok_or(GameError::InvalidJokerAssignment)?;
                if !is_wild_value(v) {
                    return Err(GameError::InvalidJokerValue { value: v });
                }
                v
            }
        };
        let position = position.min(self.cards.len());
        self.cards.insert(position, ScoredCard { card, value });
        self.round_score += u32::from(value);
        if self.round_score > BUST_LIMIT {
            self.busted = true;
        }
        Ok(self.round_score)
    }

    /// Overrides the score regardless of the cards held.
    pub fn force_score(&mut self, score: u32) {
        self.round_score = score;
        self.busted = score > BUST_LIMIT;
        self.forced = true;
    }

    pub fn reset(&mut self) {
        self.cards.clear();
        self.round_score = 0;
        self.busted = false;
        self.forced = false;
    }

    pub fn cards(&self) -> &[ScoredCard] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn round_score(&self) -> u32 {
        self.round_score
    }

    pub fn is_busted(&self) -> bool {
        self.busted
    }

    pub fn is_forced(&self) -> bool {
        self.forced
    }

    /// Score as recorded on the scoreboard: a bust counts as zero.
    pub fn settled_score(&self) -> u32 {
        if self.busted {
            0
        } else {
            self.round_score
        }
    }

    /// True when the first two cards held are both jokers.
    pub fn opens_with_two_jokers(&self) -> bool {
        self.cards.len() == 2 && self.cards.iter().all(|c| c.card.is_joker())
    }
}
