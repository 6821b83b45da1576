//! # holobac-engine: Holobac Game Engine Core
//!
//! A deterministic engine for Holobac, a blackjack-like game played with a
//! Spanish deck plus jokers. One player faces an automated dealer over three
//! rounds; each round is played toward 30 without going over, and the side
//! with the higher three-round total wins.
//!
//! ## Core Modules
//!
//! - [`cards`] - Suit, Rank and Card, Spanish deck and multi-deck pool construction
//! - [`deck`] - Seeded shuffling with ChaCha20 RNG
//! - [`hand`] - Round hand, joker value assignment and bust tracking
//! - [`player`] - Player actions and table seats
//! - [`dealer`] - Automated dealer drawing policy
//! - [`rules`] - Outcome determination and joker value validation
//! - [`game`] - Three-round state machine
//! - [`snapshot`] - Read-only views handed to the presentation layer
//! - [`logger`] - GameRecord serialization to JSONL
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use holobac_engine::game::{GameConfig, GameState};
//! use holobac_engine::player::PlayerAction;
//!
//! let config = GameConfig { seed: Some(7), ..GameConfig::default() };
//! let mut game = GameState::new(config, 100).unwrap();
//! while !game.is_over() {
//!     game.apply_action(PlayerAction::Stand, None).unwrap();
//! }
//! let snap = game.snapshot();
//! assert!(snap.outcome.is_some());
//! assert_eq!(snap.round, 3);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! ```rust
//! use holobac_engine::deck::Deck;
//!
//! let mut a = Deck::new_with_seed(3, 42);
//! let mut b = Deck::new_with_seed(3, 42);
//! a.shuffle();
//! b.shuffle();
//! assert_eq!(a.draw(), b.draw());
//! ```

pub mod cards;
pub mod dealer;
pub mod deck;
pub mod errors;
pub mod game;
pub mod hand;
pub mod logger;
pub mod player;
pub mod rules;
pub mod snapshot;
