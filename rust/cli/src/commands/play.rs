//! # Play Command
//!
//! Interactive Holobac at the terminal. Games run through a
//! [`SessionManager`] like any other presentation layer would drive them:
//! the table is redrawn from each returned snapshot, and settled rounds are
//! reported from the session's event stream.
//!
//! ## Input
//!
//! - `d` / `draw [value]`: take a card; `value` is used if it is a joker
//! - `s` / `stand [value]`: let the dealer play
//! - `q` / `quit`: abandon the current game
//!
//! With `--joker-mode prompt` a joker dealt to the player waits for a value,
//! which must accompany the next action (for example `stand 10`).

use crate::cli::PlayArgs;
use crate::config;
use crate::error::CliError;
use crate::formatters::{format_round_result, format_table};
use crate::io_utils::read_nonempty_line;
use crate::ui;
use crate::validation::{ParseResult, parse_player_input, parse_yes};
use holobac_engine::logger::GameLogger;
use holobac_engine::snapshot::GameStateSnapshot;
use holobac_session::{
    AppSettings, EventBus, EventSubscription, GameEvent, SessionError, SessionId, SessionManager,
};
use std::io::{BufRead, Write};
use std::sync::Arc;

const LOCAL_SESSION: &str = "local";

const ACTION_PROMPT: &str = "Action (d)raw / (s)tand / (q)uit: ";
const JOKER_PROMPT: &str = "Joker value (1-7, 10, 11, 12) with your action, e.g. 'stand 10': ";
const AGAIN_PROMPT: &str = "Play again? (y/n): ";

/// How a single game ended from the command's point of view.
enum GameEnd {
    Finished,
    Abandoned,
    Expired,
}

/// Handle the play command: interactive games until the player stops.
///
/// Flags in `args` override the resolved configuration.
pub fn handle_play_command(
    args: PlayArgs,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let cfg = config::load()?;
    let settings = settings_for(&cfg, &args);

    let bus = Arc::new(EventBus::new());
    let mut manager = SessionManager::with_settings(Arc::clone(&bus), settings.clone())?;
    if let Some(path) = &args.log {
        let logger = GameLogger::create(path)?;
        manager = manager.with_game_log(logger);
    }

    writeln!(
        out,
        "play: stake={} joker_mode={} decks={}{}",
        settings.default_stake,
        settings.joker_mode,
        settings.num_decks,
        settings
            .seed
            .map(|s| format!(" seed={}", s))
            .unwrap_or_default()
    )?;

    run_games(&manager, out, err, stdin)
}

fn settings_for(cfg: &config::Config, args: &PlayArgs) -> AppSettings {
    let mut settings = cfg.to_settings();
    if let Some(seed) = args.seed {
        settings.seed = Some(seed);
    }
    if let Some(stake) = args.stake {
        settings.default_stake = stake;
    }
    if let Some(mode) = args.joker_mode {
        settings.joker_mode = mode;
    }
    if let Some(value) = args.joker_value {
        settings.joker_value = value;
    }
    if let Some(decks) = args.decks {
        settings.num_decks = decks;
    }
    if args.show_dealer {
        settings.hide_dealer_card = false;
    }
    settings
}

fn run_games(
    manager: &SessionManager,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let session_id: SessionId = LOCAL_SESSION.to_string();
    let mut played = 0u32;

    loop {
        match play_one_game(manager, &session_id, out, err, stdin)? {
            GameEnd::Finished => {
                played += 1;
                ui::prompt(out, AGAIN_PROMPT)?;
                match read_nonempty_line(stdin) {
                    Some(answer) if parse_yes(&answer) => {}
                    _ => break,
                }
            }
            GameEnd::Expired => {
                ui::display_warning(err, "Game timed out. Dealing a new one.")?;
            }
            GameEnd::Abandoned => break,
        }
    }

    writeln!(out)?;
    writeln!(out, "Games played: {}", played)?;
    Ok(())
}

fn play_one_game(
    manager: &SessionManager,
    session_id: &SessionId,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<GameEnd, CliError> {
    let mut events = manager.event_bus().subscribe(session_id.clone());
    let mut snapshot = manager.start_session(session_id, None)?;
    drain_events(&mut events, out)?;
    writeln!(out)?;
    writeln!(out, "{}", format_table(&snapshot))?;

    while !snapshot.is_over() {
        ui::prompt(out, prompt_for(&snapshot))?;
        let Some(line) = read_nonempty_line(stdin) else {
            writeln!(out)?;
            return abandon(manager, session_id, out);
        };

        match parse_player_input(&line) {
            ParseResult::Action {
                action,
                joker_value,
            } => match manager.apply_action(session_id, action, joker_value) {
                Ok(next) => {
                    drain_events(&mut events, out)?;
                    writeln!(out)?;
                    writeln!(out, "{}", format_table(&next))?;
                    snapshot = next;
                }
                Err(SessionError::Expired(_)) => return Ok(GameEnd::Expired),
                Err(e) if e.is_recoverable() => ui::write_error(err, &e.to_string())?,
                Err(e) => return Err(e.into()),
            },
            ParseResult::Quit => return abandon(manager, session_id, out),
            ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
        }
    }

    Ok(GameEnd::Finished)
}

fn prompt_for(snapshot: &GameStateSnapshot) -> &'static str {
    if snapshot.pending_joker {
        JOKER_PROMPT
    } else {
        ACTION_PROMPT
    }
}

fn abandon(
    manager: &SessionManager,
    session_id: &SessionId,
    out: &mut dyn Write,
) -> Result<GameEnd, CliError> {
    let record = manager.end_session(session_id)?;
    writeln!(
        out,
        "Game abandoned after {} settled round(s).",
        record.rounds.len()
    )?;
    Ok(GameEnd::Abandoned)
}

/// Prints settled rounds waiting on the subscription; other events only
/// mirror snapshots the command already has.
fn drain_events(events: &mut EventSubscription, out: &mut dyn Write) -> Result<(), CliError> {
    while let Some(event) = events.try_next() {
        if let GameEvent::RoundSettled { result, .. } = event {
            writeln!(out)?;
            writeln!(out, "{}", format_round_result(&result))?;
        }
    }
    Ok(())
}
