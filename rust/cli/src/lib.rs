//! # Holobac CLI Library
//!
//! Terminal front end for the Holobac engine: three rounds against the house
//! with a Spanish deck and wild jokers.
//!
//! ## Main Entry Point
//!
//! [`run`] parses command-line arguments and executes the matching
//! subcommand.
//!
//! ```no_run
//! use std::io;
//! let args = vec!["holobac", "play", "--stake", "10"];
//! let code = holobac_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: play games interactively, optionally logging them as JSONL
//! - `deal`: deal one round and show the dealer's play
//! - `sim`: count round wins when the player always stands
//! - `cfg`: display the resolved configuration

use clap::Parser;
use std::io::Write;
pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod ui;
pub mod validation;

use cli::{Commands, HolobacCli};
use commands::{handle_cfg_command, handle_deal_command, handle_play_command, handle_sim_command};

pub use error::CliError;

const COMMANDS: &[&str] = &["play", "deal", "sim", "cfg"];

/// Main entry point for the CLI application.
///
/// Returns the process exit code: `0` for success, `2` for errors.
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["holobac", "deal", "--seed", "42"];
/// let mut out = Vec::new();
/// let code = holobac_cli::run(args, &mut out, &mut io::stderr());
/// assert_eq!(code, 0);
/// assert!(String::from_utf8(out).unwrap().starts_with("deal: seed=42"));
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match HolobacCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return report_parse_error(e, out, err),
    };

    let result = match cli.cmd {
        Commands::Play(args) => {
            let stdin = std::io::stdin();
            let mut stdin_lock = stdin.lock();
            handle_play_command(args, out, err, &mut stdin_lock)
        }
        Commands::Deal { seed } => handle_deal_command(seed, out),
        Commands::Sim {
            rounds,
            seed,
            decks,
        } => handle_sim_command(rounds, seed, decks, out),
        Commands::Cfg => handle_cfg_command(out, err),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

fn report_parse_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version go to stdout and exit 0
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            if write!(out, "{}", e).is_err() {
                return exit_code::ERROR;
            }
            exit_code::SUCCESS
        }
        _ => {
            if writeln!(err, "{}", e).is_err()
                || writeln!(err).is_err()
                || writeln!(err, "Holobac CLI").is_err()
                || writeln!(err, "Usage: holobac <command> [options]\n").is_err()
                || writeln!(err, "Commands:").is_err()
            {
                return exit_code::ERROR;
            }
            for c in COMMANDS {
                if writeln!(err, "  {}", c).is_err() {
                    return exit_code::ERROR;
                }
            }
            let _ = writeln!(err, "\nFor full help, run: holobac --help");
            exit_code::ERROR
        }
    }
}
