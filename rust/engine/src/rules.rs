use serde::{Deserialize, Serialize};

use crate::cards::is_wild_value;
use crate::errors::GameError;

/// Rounds in one game.
pub const ROUNDS_PER_GAME: usize = 3;

/// Per-round scores, unset until the round settles.
pub type RoundScores = [Option<u32>; ROUNDS_PER_GAME];

/// Final result of a game from the player's side.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Win,
    Loss,
    Tie,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Win => "win",
            Outcome::Loss => "loss",
            Outcome::Tie => "tie",
        }
    }
}

/// Sum of settled round scores, unset slots counting as zero.
pub fn total(scores: &RoundScores) -> u32 {
    scores.iter().map(|s| s.unwrap_or(0)).sum()
}

/// Compares the accumulated totals of both sides.
///
/// # Examples
///
/// ```
/// use holobac_engine::rules::{determine_outcome, Outcome};
///
/// let player = [Some(0), Some(0), Some(0)];
/// let dealer = [Some(26), Some(26), Some(26)];
/// assert_eq!(determine_outcome(&player, &dealer), Outcome::Loss);
///
/// let even = [Some(20), Some(20), Some(20)];
/// assert_eq!(determine_outcome(&even, &even), Outcome::Tie);
/// ```
pub fn determine_outcome(player: &RoundScores, dealer: &RoundScores) -> Outcome {
    let p = total(player);
    let d = total(dealer);
    match p.cmp(&d) {
        std::cmp::Ordering::Greater => Outcome::Win,
        std::cmp::Ordering::Less => Outcome::Loss,
        std::cmp::Ordering::Equal => Outcome::Tie,
    }
}

/// Checks that a value chosen for a joker is one of 1-7, 10, 11, 12.
pub fn validate_joker_value(value: u8) -> Result<u8, GameError> {
    if is_wild_value(value) {
        Ok(value)
    } else {
        Err(GameError::InvalidJokerValue { value })
    }
}
