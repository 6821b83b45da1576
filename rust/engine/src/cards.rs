use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four suits of the Spanish deck.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    /// Clubs (bastos)
    Basto,
    /// Cups (copas)
    Copa,
    /// Swords (espadas)
    Espada,
    /// Coins (oros)
    Oro,
}

impl Suit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Suit::Basto => "basto",
            Suit::Copa => "copa",
            Suit::Espada => "espada",
            Suit::Oro => "oro",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Printed rank of a Spanish card. The deck has no 8 or 9; the three face
/// cards count 10, 11 and 12.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Rank {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    /// Sota (10)
    Sota = 10,
    /// Caballo (11)
    Caballo = 11,
    /// Rey (12)
    Rey = 12,
}

impl Rank {
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn from_u8(v: u8) -> Option<Rank> {
        match v {
            1 => Some(Rank::One),
            2 => Some(Rank::Two),
            3 => Some(Rank::Three),
            4 => Some(Rank::Four),
            5 => Some(Rank::Five),
            6 => Some(Rank::Six),
            7 => Some(Rank::Seven),
            10 => Some(Rank::Sota),
            11 => Some(Rank::Caballo),
            12 => Some(Rank::Rey),
            _ => None,
        }
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> Self {
        rank.value()
    }
}

impl TryFrom<u8> for Rank {
    type Error = String;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        Rank::from_u8(v).ok_or_else(|| format!("{v} is not a Spanish deck rank"))
    }
}

/// A single card of the Holobac pool: either a ranked Spanish card or a joker.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Card {
    Ranked { suit: Suit, rank: Rank },
    Joker,
}

impl Card {
    pub fn ranked(suit: Suit, rank: Rank) -> Self {
        Card::Ranked { suit, rank }
    }

    pub fn is_joker(&self) -> bool {
        matches!(self, Card::Joker)
    }

    pub fn suit(&self) -> Option<Suit> {
        match self {
            Card::Ranked { suit, .. } => Some(*suit),
            Card::Joker => None,
        }
    }

    pub fn rank(&self) -> Option<Rank> {
        match self {
            Card::Ranked { rank, .. } => Some(*rank),
            Card::Joker => None,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Ranked { suit, rank } => write!(f, "{} of {}", rank.value(), suit),
            Card::Joker => f.write_str("Joker"),
        }
    }
}

/// Jokers in a single Spanish deck copy.
pub const JOKERS_PER_DECK: usize = 5;

/// Cards in a single copy: 40 ranked plus the jokers.
pub const CARDS_PER_DECK: usize = 40 + JOKERS_PER_DECK;

/// Copies shuffled together for a Holobac game.
pub const DEFAULT_DECK_COPIES: usize = 3;

/// Values a joker may stand for, ascending.
pub const WILD_VALUES: [u8; 10] = [1, 2, 3, 4, 5, 6, 7, 10, 11, 12];

pub fn is_wild_value(v: u8) -> bool {
    WILD_VALUES.contains(&v)
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Basto, Suit::Copa, Suit::Espada, Suit::Oro]
}

pub fn all_ranks() -> [Rank; 10] {
    [
        Rank::One,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Sota,
        Rank::Caballo,
        Rank::Rey,
    ]
}

/// One Spanish deck in suit-major order, optionally followed by its jokers.
pub fn spanish_deck(include_jokers: bool) -> Vec<Card> {
    let mut v = Vec::with_capacity(CARDS_PER_DECK);
    for &s in &all_suits() {
        for &r in &all_ranks() {
            v.push(Card::ranked(s, r));
        }
    }
    if include_jokers {
        v.extend(std::iter::repeat_n(Card::Joker, JOKERS_PER_DECK));
    }
    v
}

/// Unshuffled pool made of `num_copies` full decks, jokers included.
pub fn build_pool(num_copies: usize) -> Vec<Card> {
    let mut v = Vec::with_capacity(CARDS_PER_DECK * num_copies);
    for _ in 0..num_copies {
        v.extend(spanish_deck(true));
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_deck_has_forty_ranked_and_five_jokers() {
        let deck = spanish_deck(true);
        assert_eq!(deck.len(), CARDS_PER_DECK);
        assert_eq!(deck.iter().filter(|c| c.is_joker()).count(), 5);
        assert_eq!(spanish_deck(false).len(), 40);
    }

    #[test]
    fn pool_order_is_deterministic() {
        let pool = build_pool(2);
        assert_eq!(pool[0], Card::ranked(Suit::Basto, Rank::One));
        assert_eq!(pool[9], Card::ranked(Suit::Basto, Rank::Rey));
        assert_eq!(pool[10], Card::ranked(Suit::Copa, Rank::One));
        assert!(pool[40..45].iter().all(Card::is_joker));
        assert_eq!(pool[45], Card::ranked(Suit::Basto, Rank::One));
        assert_eq!(pool, build_pool(2));
    }

    #[test]
    fn card_display_matches_table_talk() {
        assert_eq!(Card::ranked(Suit::Copa, Rank::Six).to_string(), "6 of copa");
        assert_eq!(Card::ranked(Suit::Oro, Rank::Rey).to_string(), "12 of oro");
        assert_eq!(Card::Joker.to_string(), "Joker");
    }

    #[test]
    fn rank_rejects_missing_eight_and_nine() {
        assert_eq!(Rank::from_u8(8), None);
        assert_eq!(Rank::from_u8(9), None);
        assert_eq!(Rank::from_u8(11), Some(Rank::Caballo));
        assert!(Rank::try_from(0u8).is_err());
    }

    #[test]
    fn card_serializes_with_kind_tag() {
        let json = serde_json::to_value(Card::ranked(Suit::Espada, Rank::Seven)).unwrap();
        assert_eq!(json["kind"], "ranked");
        assert_eq!(json["suit"], "espada");
        assert_eq!(json["rank"], 7);
        let joker = serde_json::to_value(Card::Joker).unwrap();
        assert_eq!(joker["kind"], "joker");
    }
}
