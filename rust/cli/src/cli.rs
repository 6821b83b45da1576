//! Command-line definitions.

use crate::validation::{parse_decks, parse_joker_mode, parse_joker_value};
use clap::{Args, Parser, Subcommand};
use holobac_engine::game::JokerDealMode;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "holobac",
    version,
    about = "Holobac: three rounds against the house with a Spanish deck and jokers"
)]
pub struct HolobacCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play games at the terminal
    Play(PlayArgs),
    /// Deal one round and let the dealer play it out
    Deal {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Count round wins when the player always stands on two cards
    Sim {
        #[arg(long, default_value_t = 1000)]
        rounds: u64,
        /// Base seed; round i uses seed + i
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, value_parser = parse_decks)]
        decks: Option<usize>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}

/// Flags for `holobac play`; each one overrides the configuration.
#[derive(Args, Debug, Clone, Default)]
pub struct PlayArgs {
    #[arg(long)]
    pub seed: Option<u64>,
    #[arg(long)]
    pub stake: Option<u32>,
    /// auto: jokers take --joker-value; prompt: you choose each one
    #[arg(long, value_parser = parse_joker_mode)]
    pub joker_mode: Option<JokerDealMode>,
    #[arg(long, value_parser = parse_joker_value)]
    pub joker_value: Option<u8>,
    #[arg(long, value_parser = parse_decks)]
    pub decks: Option<usize>,
    /// Append finished games to this JSONL file
    #[arg(long)]
    pub log: Option<PathBuf>,
    /// Keep the dealer's first card face up
    #[arg(long)]
    pub show_dealer: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn play_flags_parse() {
        let cli = HolobacCli::try_parse_from([
            "holobac",
            "play",
            "--seed",
            "7",
            "--joker-mode",
            "prompt",
            "--joker-value",
            "11",
            "--show-dealer",
        ])
        .unwrap();
        let Commands::Play(args) = cli.cmd else {
            panic!("expected play");
        };
        assert_eq!(args.seed, Some(7));
        assert_eq!(args.joker_mode, Some(JokerDealMode::Prompt));
        assert_eq!(args.joker_value, Some(11));
        assert!(args.show_dealer);
        assert!(args.log.is_none());
    }

    #[test]
    fn rejects_bad_joker_value() {
        assert!(HolobacCli::try_parse_from(["holobac", "play", "--joker-value", "9"]).is_err());
    }

    #[test]
    fn rejects_decks_out_of_range() {
        assert!(HolobacCli::try_parse_from(["holobac", "sim", "--decks", "0"]).is_err());
        assert!(HolobacCli::try_parse_from(["holobac", "sim", "--decks", "8"]).is_ok());
    }

    #[test]
    fn sim_defaults_to_a_thousand_rounds() {
        let cli = HolobacCli::try_parse_from(["holobac", "sim"]).unwrap();
        assert!(matches!(cli.cmd, Commands::Sim { rounds: 1000, .. }));
    }
}
