use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{build_pool, Card};

/// Multi-copy draw pile. Cards leave from the front; an exhausted pile
/// answers every draw with `None`.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(num_copies: usize, seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep build order until shuffle is called explicitly
        Self {
            cards: build_pool(num_copies),
            position: 0,
            rng,
        }
    }

    /// Deck that deals `cards` in the given order. Shuffling still works and
    /// uses a fixed seed.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards,
            position: 0,
            rng: ChaCha20Rng::seed_from_u64(0),
        }
    }

    /// Shuffles the undealt part of the pile in place.
    pub fn shuffle(&mut self) {
        let position = self.position;
        self.cards[position..].shuffle(&mut self.rng);
    }

    pub fn draw(&mut self) -> Option<Card> {
        if self.position >= self.cards.len() {
            None
        } else {
            let c = self.cards[self.position];
            self.position += 1;
            Some(c)
        }
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }
}
