//! Deal command handler: a single round shown the way a table would.
//!
//! The player is dealt two cards and stands, the dealer's first card stays
//! face down until the dealer has played, then the final hands are shown.

use crate::config;
use crate::error::CliError;
use crate::formatters::{format_hand, format_scored_hand};
use holobac_engine::game::{GameConfig, GameState};
use holobac_engine::player::PlayerAction;
use std::io::Write;

pub fn handle_deal_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let cfg = config::load()?;
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let mut settings = cfg.to_settings();
    settings.seed = Some(seed);
    settings.hide_dealer_card = true;
    deal_round(settings.to_game_config(), seed, out)
}

fn deal_round(game_config: GameConfig, seed: u64, out: &mut dyn Write) -> Result<(), CliError> {
    let mut game = GameState::new(game_config, 0)?;
    let opening = game.snapshot();

    writeln!(out, "deal: seed={}", seed)?;
    writeln!(out, "Player's hand: {}", format_hand(&opening.player_hand))?;
    writeln!(out, "Player's round score: {}", opening.player_score)?;
    writeln!(
        out,
        "Dealer's hand (initially): {}",
        format_hand(&opening.dealer_hand)
    )?;
    writeln!(out, "Dealer's round score is hidden for suspense.")?;

    game.apply_action(PlayerAction::Stand, None)?;
    let settled = game
        .history()
        .first()
        .ok_or_else(|| CliError::Engine("round did not settle".to_string()))?;

    writeln!(out)?;
    writeln!(
        out,
        "Dealer's final hand: {}",
        format_scored_hand(&settled.dealer_cards)
    )?;
    writeln!(out, "Dealer's final round score: {}", settled.dealer_score)?;
    Ok(())
}
