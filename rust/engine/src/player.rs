use crate::hand::Hand;
use serde::{Deserialize, Serialize};

/// Action a human player can take on their turn.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerAction {
    /// Take one more card
    Draw,
    /// Keep the current score and let the dealer play
    Stand,
}

impl PlayerAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerAction::Draw => "draw",
            PlayerAction::Stand => "stand",
        }
    }
}

/// Name tag used for the human seat.
pub const PLAYER_NAME: &str = "Player";

/// Name tag used for the house seat.
pub const DEALER_NAME: &str = "Dealer";

/// One seat at the table. Both the player and the dealer use this shape;
/// the dealer's drawing behaviour lives in [`crate::dealer`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    name: String,
    hand: Hand,
    total_score: u32,
}

impl Participant {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
            total_score: 0,
        }
    }

    pub fn player() -> Self {
        Self::new(PLAYER_NAME)
    }

    pub fn dealer() -> Self {
        Self::new(DEALER_NAME)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    /// Adds a settled round score to the running total.
    pub fn bank(&mut self, settled: u32) {
        self.total_score = self.total_score.saturating_add(settled);
    }

    pub fn reset_round(&mut self) {
        self.hand.reset();
    }
}
