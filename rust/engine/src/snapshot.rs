use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::game::Phase;
use crate::hand::ScoredCard;
use crate::rules::{Outcome, RoundScores};

/// How a card is shown to the presentation layer.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CardView {
    /// Face up. `value` is `None` only for a joker still waiting for its value.
    Visible { card: Card, value: Option<u8> },
    /// Face down (the dealer's first card before the dealer plays)
    Hidden,
}

impl CardView {
    pub fn scored(card: &ScoredCard) -> Self {
        CardView::Visible {
            card: card.card,
            value: Some(card.value),
        }
    }

    pub fn is_hidden(&self) -> bool {
        matches!(self, CardView::Hidden)
    }
}

/// Final picture of a settled round.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundResult {
    /// 1-based round number
    pub round: usize,
    pub player_cards: Vec<ScoredCard>,
    pub dealer_cards: Vec<ScoredCard>,
    /// Raw score at the end of the round, busts included
    pub player_score: u32,
    pub dealer_score: u32,
    pub player_busted: bool,
    pub dealer_busted: bool,
    /// Score written to the scoreboard (0 on bust)
    pub player_recorded: u32,
    pub dealer_recorded: u32,
    /// Player opened with two jokers
    #[serde(default)]
    pub holobac: bool,
    pub commentary: String,
}

/// Everything the presentation layer needs to draw the table.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    /// Current round, 1 to 3 (stays at 3 once the game is over)
    pub round: usize,
    pub phase: Phase,
    pub stake: u32,
    pub player_round_scores: RoundScores,
    pub dealer_round_scores: RoundScores,
    pub player_total: u32,
    pub dealer_total: u32,
    pub player_hand: Vec<CardView>,
    pub dealer_hand: Vec<CardView>,
    pub player_score: u32,
    /// `None` while the dealer's hand is partly hidden
    pub dealer_score: Option<u32>,
    pub player_busted: bool,
    pub dealer_busted: bool,
    /// The player must supply a joker value with the next action
    pub pending_joker: bool,
    /// The player's turn finished on its own (two-joker opening)
    pub auto_concluded: bool,
    pub commentary: String,
    /// Previous settled round, both hands face up
    pub last_round: Option<RoundResult>,
    pub outcome: Option<Outcome>,
    pub deck_remaining: usize,
}

impl GameStateSnapshot {
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }
}
