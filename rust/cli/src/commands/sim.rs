//! Simulation command handler.
//!
//! Plays `rounds` independent opening rounds in which the player always
//! stands on the two dealt cards and the dealer follows the house policy.
//! Round `i` is shuffled with `seed + i`, so a seeded run is reproducible.

use crate::config;
use crate::error::CliError;
use holobac_engine::game::{GameConfig, GameState, JokerDealMode};
use holobac_engine::player::PlayerAction;
use holobac_engine::snapshot::RoundResult;
use std::io::Write;

/// Round counts from the player's side. Equal scores and double busts go to
/// `others`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SimTally {
    pub player_wins: u64,
    pub dealer_wins: u64,
    pub others: u64,
}

impl SimTally {
    pub fn record(&mut self, result: &RoundResult) {
        match (result.player_busted, result.dealer_busted) {
            (false, false) if result.player_score > result.dealer_score => self.player_wins += 1,
            (false, false) if result.dealer_score > result.player_score => self.dealer_wins += 1,
            (true, false) => self.dealer_wins += 1,
            (false, true) => self.player_wins += 1,
            _ => self.others += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.player_wins + self.dealer_wins + self.others
    }
}

pub fn handle_sim_command(
    rounds: u64,
    seed: Option<u64>,
    decks: Option<usize>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if rounds == 0 {
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }

    let cfg = config::load()?;
    let base_seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let template = GameConfig {
        num_copies: decks.unwrap_or(cfg.decks),
        seed: None,
        joker_mode: JokerDealMode::Auto,
        joker_value: cfg.joker_value,
        hide_dealer_card: false,
    };

    writeln!(out, "sim: rounds={} seed={}", rounds, base_seed)?;
    let tally = simulate(rounds, base_seed, &template)?;
    tracing::debug!(
        rounds,
        player_wins = tally.player_wins,
        dealer_wins = tally.dealer_wins,
        "simulation finished"
    );

    writeln!(out, "Out of {} simulations:", tally.total())?;
    writeln!(out, "Player wins: {}", tally.player_wins)?;
    writeln!(out, "Dealer wins: {}", tally.dealer_wins)?;
    writeln!(out, "Ties/others: {}", tally.others)?;
    Ok(())
}

fn simulate(rounds: u64, base_seed: u64, template: &GameConfig) -> Result<SimTally, CliError> {
    let mut tally = SimTally::default();
    for i in 0..rounds {
        let config = GameConfig {
            seed: Some(base_seed.wrapping_add(i)),
            ..template.clone()
        };
        let mut game = GameState::new(config, 0)?;
        game.apply_action(PlayerAction::Stand, None)?;
        let result = game
            .history()
            .first()
            .ok_or_else(|| CliError::Engine(format!("round {} did not settle", i + 1)))?;
        tally.record(result);
    }
    Ok(tally)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(player: u32, dealer: u32) -> RoundResult {
        RoundResult {
            round: 1,
            player_cards: vec![],
            dealer_cards: vec![],
            player_score: player,
            dealer_score: dealer,
            player_busted: player > 30,
            dealer_busted: dealer > 30,
            player_recorded: if player > 30 { 0 } else { player },
            dealer_recorded: if dealer > 30 { 0 } else { dealer },
            holobac: false,
            commentary: String::new(),
        }
    }

    #[test]
    fn tally_follows_busts_then_scores() {
        let mut tally = SimTally::default();
        tally.record(&result(20, 26));
        tally.record(&result(22, 33));
        tally.record(&result(24, 24));
        tally.record(&result(25, 24));
        assert_eq!(
            tally,
            SimTally {
                player_wins: 2,
                dealer_wins: 1,
                others: 1
            }
        );
        assert_eq!(tally.total(), 4);
    }

    #[test]
    fn seeded_runs_repeat() {
        let template = GameConfig::default();
        let a = simulate(200, 9, &template).unwrap();
        let b = simulate(200, 9, &template).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.total(), 200);
    }

    #[test]
    fn standing_on_two_cards_favours_the_dealer() {
        let tally = simulate(500, 1, &GameConfig::default()).unwrap();
        assert!(tally.dealer_wins > tally.player_wins);
    }

    #[test]
    fn zero_rounds_is_rejected() {
        let mut out = Vec::new();
        let res = handle_sim_command(0, Some(1), None, &mut out);
        assert!(matches!(res, Err(CliError::InvalidInput(ref m)) if m == "rounds must be >= 1"));
        assert!(out.is_empty());
    }
}
